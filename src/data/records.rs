use serde::{Deserialize, Serialize};

pub const STATUS_HEADERS: [&str; 7] = [
    "RequestID",
    "RequestStatus",
    "AcceptedBy",
    "DateTimeCreated",
    "CancellationStatus",
    "ExpiryDateTime",
    "AcceptedDateTime",
];

pub const SCHEDULE_HEADERS: [&str; 4] = ["RequestID", "Venue", "DatesRequested", "TimesRequested"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestStatusRecord {
    #[serde(rename = "RequestID")]
    pub request_id: String,
    #[serde(default)]
    pub request_status: Option<String>,
    #[serde(default)]
    pub accepted_by: Option<String>,
    #[serde(default)]
    pub date_time_created: Option<String>,
    #[serde(default)]
    pub cancellation_status: Option<String>,
    #[serde(default)]
    pub expiry_date_time: Option<String>,
    #[serde(default)]
    pub accepted_date_time: Option<String>,
}

impl RequestStatusRecord {
    /// Cell values in `STATUS_HEADERS` order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.request_id.clone(),
            format_cell(self.request_status.as_deref()),
            format_cell(self.accepted_by.as_deref()),
            format_cell(self.date_time_created.as_deref()),
            format_cell(self.cancellation_status.as_deref()),
            format_cell(self.expiry_date_time.as_deref()),
            format_cell(self.accepted_date_time.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestScheduleRecord {
    #[serde(rename = "RequestID")]
    pub request_id: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub dates_requested: Option<Vec<String>>,
    #[serde(default)]
    pub times_requested: Option<Vec<String>>,
}

impl RequestScheduleRecord {
    /// Cell values in `SCHEDULE_HEADERS` order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.request_id.clone(),
            format_cell(self.venue.as_deref()),
            format_list(self.dates_requested.as_deref()),
            format_list(self.times_requested.as_deref()),
        ]
    }

    /// Requested dates paired with their times.
    pub fn slots(&self) -> Vec<(String, Option<String>)> {
        let times = self.times_requested.as_deref().unwrap_or_default();
        self.dates_requested
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, date)| (date.clone(), times.get(i).cloned()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsTable {
    #[serde(default)]
    pub request_status_table: Vec<RequestStatusRecord>,
    #[serde(default)]
    pub request_schedule_table: Vec<RequestScheduleRecord>,
}

impl RecordsTable {
    pub fn lookup(&self, request_id: &str) -> Option<RecordLookup> {
        let status = self
            .request_status_table
            .iter()
            .find(|r| r.request_id == request_id)
            .cloned();
        let schedule = self
            .request_schedule_table
            .iter()
            .find(|r| r.request_id == request_id)
            .cloned();

        if status.is_none() && schedule.is_none() {
            return None;
        }
        Some(RecordLookup {
            request_status: status,
            request_schedule: schedule,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLookup {
    pub request_status: Option<RequestStatusRecord>,
    pub request_schedule: Option<RequestScheduleRecord>,
}

pub fn format_cell(value: Option<&str>) -> String {
    match value {
        None | Some("Null") => "Null".to_string(),
        Some(v) => v.to_string(),
    }
}

/// `[a, b]`, or "Null" when the list is missing or null.
pub fn format_list(values: Option<&[String]>) -> String {
    match values {
        Some(values) => format!("[{}]", values.join(", ")),
        None => "Null".to_string(),
    }
}

#[cfg(feature = "ssr")]
pub use server::{router, RecordsError, RecordsRepository};

#[cfg(feature = "ssr")]
mod server {
    use std::fs;
    use std::path::{Path, PathBuf};

    use axum::extract::{Path as UrlPath, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use thiserror::Error;

    use super::{RecordLookup, RecordsTable};

    #[derive(Error, Debug)]
    pub enum RecordsError {
        #[error("Data source not found")]
        SourceMissing(PathBuf),

        #[error("Failed to read data source: {0}")]
        Io(#[from] std::io::Error),

        #[error("Malformed data source: {0}")]
        Parse(#[from] serde_json::Error),

        #[error("Request ID not found")]
        NotFound(String),
    }

    impl IntoResponse for RecordsError {
        fn into_response(self) -> Response {
            let status = match &self {
                RecordsError::NotFound(id) => {
                    log::info!("Record lookup missed: {}", id);
                    StatusCode::NOT_FOUND
                }
                RecordsError::SourceMissing(path) => {
                    log::error!("Records file missing: {}", path.display());
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                other => {
                    log::error!("Records unavailable: {}", other);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (status, Json(json!({ "detail": self.to_string() }))).into_response()
        }
    }

    /// Reads the records file on every call so edits show up without a restart.
    #[derive(Debug, Clone)]
    pub struct RecordsRepository {
        path: PathBuf,
    }

    impl RecordsRepository {
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        pub fn load(&self) -> Result<RecordsTable, RecordsError> {
            if !self.path.exists() {
                return Err(RecordsError::SourceMissing(self.path.clone()));
            }
            let json_str = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&json_str)?)
        }

        pub fn find(&self, request_id: &str) -> Result<RecordLookup, RecordsError> {
            self.load()?
                .lookup(request_id)
                .ok_or_else(|| RecordsError::NotFound(request_id.to_string()))
        }
    }

    async fn list_records(
        State(repo): State<RecordsRepository>,
    ) -> Result<Json<RecordsTable>, RecordsError> {
        let table = repo.load()?;
        log::debug!(
            "Serving {} status and {} schedule records",
            table.request_status_table.len(),
            table.request_schedule_table.len()
        );
        Ok(Json(table))
    }

    async fn get_record(
        State(repo): State<RecordsRepository>,
        UrlPath(request_id): UrlPath<String>,
    ) -> Result<Json<RecordLookup>, RecordsError> {
        repo.find(&request_id).map(Json)
    }

    /// `GET /api/records` and `GET /api/records/:id`.
    pub fn router<S>(repo: RecordsRepository) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
            .route("/api/records", get(list_records))
            .route("/api/records/:request_id", get(get_record))
            .with_state(repo)
    }

    #[cfg(test)]
    mod tests {
        use std::io::Write;

        use axum::body::to_bytes;
        use serde_json::Value;

        use super::*;

        async fn into_parts(response: Response) -> (StatusCode, Value) {
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, serde_json::from_slice(&bytes).unwrap())
        }

        fn records_file(contents: &str) -> tempfile::NamedTempFile {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            file
        }

        #[tokio::test]
        async fn missing_source_is_a_500_with_detail() {
            let dir = tempfile::tempdir().unwrap();
            let repo = RecordsRepository::new(dir.path().join("requests.json"));

            let err = list_records(State(repo)).await.unwrap_err();
            let (status, body) = into_parts(err.into_response()).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, json!({ "detail": "Data source not found" }));
        }

        #[tokio::test]
        async fn unknown_id_is_a_404_with_detail() {
            let file = records_file(r#"{ "requestStatusTable": [], "requestScheduleTable": [] }"#);
            let repo = RecordsRepository::new(file.path());

            let err = get_record(State(repo), UrlPath("nope".to_string()))
                .await
                .unwrap_err();
            let (status, body) = into_parts(err.into_response()).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "detail": "Request ID not found" }));
        }

        #[tokio::test]
        async fn malformed_source_is_a_500() {
            let file = records_file("{ \"requestStatusTable\": 4 }");
            let err = list_records(State(RecordsRepository::new(file.path())))
                .await
                .unwrap_err();
            let (status, body) = into_parts(err.into_response()).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body["detail"].as_str().unwrap().starts_with("Malformed data source"));
        }

        #[tokio::test]
        async fn found_record_keeps_api_field_names() {
            let file = records_file(
                r#"{
                    "requestStatusTable": [{ "RequestID": "abc123", "RequestStatus": "accepted" }],
                    "requestScheduleTable": [{ "RequestID": "abc123", "Venue": "London", "DatesRequested": null }]
                }"#,
            );
            let repo = RecordsRepository::new(file.path());

            let Json(lookup) = get_record(State(repo.clone()), UrlPath("abc123".to_string()))
                .await
                .unwrap();
            let body = serde_json::to_value(&lookup).unwrap();
            assert_eq!(body["requestStatus"]["RequestStatus"], "accepted");
            assert!(body["requestSchedule"]["DatesRequested"].is_null());

            let Json(table) = list_records(State(repo)).await.unwrap();
            assert_eq!(table.request_schedule_table.len(), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "requestStatusTable": [
            {
                "RequestID": "abc123",
                "RequestStatus": "accepted",
                "AcceptedBy": "Employee1",
                "DateTimeCreated": "16:01 14th of November",
                "CancellationStatus": "Live",
                "ExpiryDateTime": "16:00 15th of November",
                "AcceptedDateTime": "16:49 14th of November"
            },
            {
                "RequestID": "abc789",
                "RequestStatus": "accepted",
                "AcceptedBy": "Employee1",
                "DateTimeCreated": "16:15 14th of November",
                "CancellationStatus": "Cancelled",
                "ExpiryDateTime": "16:14 15th of November",
                "AcceptedDateTime": "Null"
            }
        ],
        "requestScheduleTable": [
            {
                "RequestID": "abc123",
                "Venue": "London",
                "DatesRequested": ["10th of December", "11th of December"],
                "TimesRequested": ["9:00", "9:30"]
            },
            {
                "RequestID": "sched-only",
                "Venue": null,
                "DatesRequested": ["5th of January"],
                "TimesRequested": []
            }
        ]
    }"#;

    fn sample() -> RecordsTable {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn cells_follow_header_order() {
        let table = sample();
        let cells = table.request_status_table[1].cells();
        assert_eq!(cells.len(), STATUS_HEADERS.len());
        assert_eq!(cells[0], "abc789");
        assert_eq!(cells[4], "Cancelled");
        assert_eq!(cells[6], "Null");

        let schedule = table.request_schedule_table[0].cells();
        assert_eq!(schedule.len(), SCHEDULE_HEADERS.len());
        assert_eq!(schedule[2], "[10th of December, 11th of December]");
        assert_eq!(schedule[3], "[9:00, 9:30]");
        assert_eq!(table.request_schedule_table[1].cells()[1], "Null");
    }

    #[test]
    fn lookup_spans_both_tables() {
        let table = sample();

        let both = table.lookup("abc123").unwrap();
        assert!(both.request_status.is_some());
        assert!(both.request_schedule.is_some());

        let status_only = table.lookup("abc789").unwrap();
        assert!(status_only.request_schedule.is_none());

        let schedule_only = table.lookup("sched-only").unwrap();
        assert!(schedule_only.request_status.is_none());

        assert!(table.lookup("missing").is_none());
    }

    #[test]
    fn null_and_missing_lists_render_null() {
        let table: RecordsTable = serde_json::from_str(
            r#"{
                "requestScheduleTable": [
                    { "RequestID": "x", "Venue": "London", "DatesRequested": null, "TimesRequested": null },
                    { "RequestID": "y", "Venue": "London" }
                ]
            }"#,
        )
        .unwrap();

        for record in &table.request_schedule_table {
            let cells = record.cells();
            assert_eq!(cells[2], "Null");
            assert_eq!(cells[3], "Null");
            assert!(record.slots().is_empty());
        }
        assert!(table.request_status_table.is_empty());
        assert_eq!(format_list(Some(&[][..])), "[]");
    }

    #[test]
    fn schedule_slots_pair_dates_with_times() {
        let table = sample();
        let slots = table.request_schedule_table[1].slots();
        assert_eq!(slots, vec![("5th of January".to_string(), None)]);
    }

    #[test]
    fn lookup_serializes_with_api_field_names() {
        let lookup = sample().lookup("abc789").unwrap();
        let json = serde_json::to_value(&lookup).unwrap();
        assert_eq!(json["requestStatus"]["RequestID"], "abc789");
        assert!(json["requestSchedule"].is_null());
    }

    #[cfg(feature = "ssr")]
    mod repository {
        use std::io::Write;

        use super::SAMPLE;
        use crate::data::records::{RecordsError, RecordsRepository};

        #[test]
        fn missing_file_is_reported() {
            let dir = tempfile::tempdir().unwrap();
            let repo = RecordsRepository::new(dir.path().join("requests.json"));
            assert!(matches!(repo.load(), Err(RecordsError::SourceMissing(_))));
        }

        #[test]
        fn reads_and_finds_records() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(SAMPLE.as_bytes()).unwrap();
            let repo = RecordsRepository::new(file.path());

            let table = repo.load().unwrap();
            assert_eq!(table.request_status_table.len(), 2);
            assert!(repo.find("abc123").is_ok());
            assert!(matches!(repo.find("nope"), Err(RecordsError::NotFound(_))));
        }

        #[test]
        fn malformed_file_is_a_parse_error() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(b"{ \"requestStatusTable\": 4 }").unwrap();
            let repo = RecordsRepository::new(file.path());
            assert!(matches!(repo.load(), Err(RecordsError::Parse(_))));
        }
    }
}
