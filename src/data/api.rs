use gloo_net::http::Request;
use thiserror::Error;

use super::records::{RecordLookup, RecordsTable};

pub const RECORDS_ENDPOINT: &str = "/api/records";

#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server responded with status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

pub fn record_url(request_id: &str) -> String {
    format!(
        "{}/{}",
        RECORDS_ENDPOINT,
        urlencoding::encode(request_id.trim())
    )
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or_else(|| response.status_text());
        return Err(FetchError::Status {
            status: response.status(),
            detail,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_records() -> Result<RecordsTable, FetchError> {
    get_json(RECORDS_ENDPOINT).await
}

pub async fn fetch_record(request_id: &str) -> Result<RecordLookup, FetchError> {
    get_json(&record_url(request_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_are_path_encoded() {
        assert_eq!(record_url("abc123"), "/api/records/abc123");
        assert_eq!(record_url(" a/b c "), "/api/records/a%2Fb%20c");
    }

    #[test]
    fn status_errors_carry_the_detail() {
        let err = FetchError::Status {
            status: 404,
            detail: "Request ID not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Server responded with status 404: Request ID not found"
        );
    }
}
