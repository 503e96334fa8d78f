use std::cmp::Ordering;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use super::product::{BLOCKED_WEEKDAYS, DEMO_NAMES, MAX_SELECTED_DATES};
use crate::utils::date::format_human;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedDate {
    pub iso: NaiveDate,
    pub formatted: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub is_favourite: bool,
}

impl RequestedDate {
    pub fn new(iso: NaiveDate) -> Self {
        Self {
            iso,
            formatted: format_human(iso),
            time: None,
            is_favourite: false,
        }
    }

    /// "10th of December at 9:30"
    pub fn describe(&self) -> String {
        match &self.time {
            Some(time) => format!("{} at {}", self.formatted, time),
            None => self.formatted.clone(),
        }
    }
}

impl PartialEq for RequestedDate {
    fn eq(&self, other: &Self) -> bool {
        self.iso == other.iso
    }
}

impl Eq for RequestedDate {}

impl PartialOrd for RequestedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RequestedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iso.cmp(&other.iso)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

impl ContactDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

/// A selection held between the picker and checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDraft {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dates: Vec<RequestedDate>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
}

impl AvailabilityDraft {
    pub fn new(location: impl Into<String>, selection: &DateSelection) -> Self {
        Self {
            location: location.into(),
            dates: selection.to_requested_dates(),
            timestamp: Utc::now(),
            contact: None,
        }
    }

    pub fn into_request(self, id: u32, contact: Option<ContactDetails>) -> AvailabilityRequest {
        AvailabilityRequest {
            id,
            location: self.location,
            dates: self.dates,
            timestamp: Utc::now(),
            contact: contact.or(self.contact),
            status: RequestStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub id: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dates: Vec<RequestedDate>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactDetails>,
    #[serde(default)]
    pub status: RequestStatus,
}

impl AvailabilityRequest {
    pub fn display_name(&self) -> String {
        if let Some(name) = self
            .contact
            .as_ref()
            .map(ContactDetails::full_name)
            .filter(|name| !name.is_empty())
        {
            return name;
        }
        match DEMO_NAMES.get((self.id as usize).wrapping_sub(1)) {
            Some(name) => name.to_string(),
            None => format!("User {}", self.id),
        }
    }

    pub fn favourite(&self) -> Option<&RequestedDate> {
        self.dates.iter().find(|d| d.is_favourite)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    LimitReached,
    Blocked,
}

/// Dates picked for one request. Dates are unique, ascending, capped at
/// `max` and at most one of them is the favourite.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSelection {
    dates: Vec<RequestedDate>,
    max: usize,
    blocked: Vec<Weekday>,
    limit_warning: bool,
}

impl Default for DateSelection {
    fn default() -> Self {
        Self::new(MAX_SELECTED_DATES)
    }
}

impl DateSelection {
    pub fn new(max: usize) -> Self {
        Self {
            dates: Vec::new(),
            max,
            blocked: BLOCKED_WEEKDAYS.to_vec(),
            limit_warning: false,
        }
    }

    pub fn with_blocked(mut self, blocked: &[Weekday]) -> Self {
        self.blocked = blocked.to_vec();
        self
    }

    /// Rebuilds a selection from stored dates: sorted, unique, without
    /// blocked weekdays, capped at `max` earliest dates, and with only the
    /// earliest favourite kept.
    pub fn from_requested_dates(mut dates: Vec<RequestedDate>, max: usize) -> Self {
        let mut selection = Self::new(max);
        dates.sort();
        dates.dedup_by_key(|d| d.iso);
        dates.retain(|d| !selection.is_blocked(d.iso));
        dates.truncate(max);

        let mut favourite_seen = false;
        for date in dates.iter_mut().filter(|d| d.is_favourite) {
            date.is_favourite = !favourite_seen;
            favourite_seen = true;
        }
        selection.dates = dates;
        selection
    }

    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.blocked.contains(&date.weekday())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.iter().any(|d| d.iso == date)
    }

    pub fn toggle(&mut self, date: NaiveDate) -> ToggleOutcome {
        if self.is_blocked(date) {
            return ToggleOutcome::Blocked;
        }
        if let Some(pos) = self.dates.iter().position(|d| d.iso == date) {
            self.dates.remove(pos);
            self.refresh_warning();
            return ToggleOutcome::Removed;
        }
        if self.dates.len() >= self.max {
            self.limit_warning = true;
            return ToggleOutcome::LimitReached;
        }
        let at = self.dates.partition_point(|d| d.iso < date);
        self.dates.insert(at, RequestedDate::new(date));
        self.refresh_warning();
        ToggleOutcome::Added
    }

    pub fn remove(&mut self, date: NaiveDate) -> bool {
        let before = self.dates.len();
        self.dates.retain(|d| d.iso != date);
        self.refresh_warning();
        before != self.dates.len()
    }

    /// Marks `date` as the only favourite, or clears it if it already is.
    pub fn toggle_favourite(&mut self, date: NaiveDate) -> bool {
        if !self.contains(date) {
            return false;
        }
        for entry in self.dates.iter_mut() {
            entry.is_favourite = entry.iso == date && !entry.is_favourite;
        }
        true
    }

    pub fn set_time(&mut self, date: NaiveDate, time: Option<String>) -> bool {
        match self.dates.iter_mut().find(|d| d.iso == date) {
            Some(entry) => {
                entry.time = time.filter(|t| !t.trim().is_empty());
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.dates.clear();
        self.limit_warning = false;
    }

    fn refresh_warning(&mut self) {
        if self.dates.len() < self.max {
            self.limit_warning = false;
        }
    }

    pub fn dates(&self) -> &[RequestedDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn favourite(&self) -> Option<NaiveDate> {
        self.dates.iter().find(|d| d.is_favourite).map(|d| d.iso)
    }

    pub fn show_limit_warning(&self) -> bool {
        self.limit_warning
    }

    pub fn all_timed(&self) -> bool {
        !self.dates.is_empty() && self.dates.iter().all(|d| d.time.is_some())
    }

    pub fn summary_label(&self) -> String {
        match self.dates.len() {
            0 => "Select dates".to_string(),
            1 => "1 date selected".to_string(),
            n => format!("{n} dates selected"),
        }
    }

    pub fn to_requested_dates(&self) -> Vec<RequestedDate> {
        self.dates.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 1-5 December 2025 run Monday to Friday, the 6th is a Saturday
    fn weekdays() -> Vec<NaiveDate> {
        (1..=5).map(|d| ymd(2025, 12, d)).collect()
    }

    #[test]
    fn toggling_adds_then_removes() {
        let mut selection = DateSelection::default();
        assert_eq!(selection.toggle(ymd(2025, 12, 3)), ToggleOutcome::Added);
        assert!(selection.contains(ymd(2025, 12, 3)));
        assert_eq!(selection.toggle(ymd(2025, 12, 3)), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn sixth_date_hits_the_cap_and_warning_clears_after_removal() {
        let mut selection = DateSelection::default();
        for date in weekdays() {
            assert_eq!(selection.toggle(date), ToggleOutcome::Added);
        }
        assert!(!selection.show_limit_warning());

        assert_eq!(selection.toggle(ymd(2025, 12, 8)), ToggleOutcome::LimitReached);
        assert_eq!(selection.len(), 5);
        assert!(!selection.contains(ymd(2025, 12, 8)));
        assert!(selection.show_limit_warning());

        selection.toggle(ymd(2025, 12, 1));
        assert!(!selection.show_limit_warning());
        assert_eq!(selection.toggle(ymd(2025, 12, 8)), ToggleOutcome::Added);
    }

    #[test]
    fn saturdays_are_blocked() {
        let mut selection = DateSelection::default();
        assert_eq!(selection.toggle(ymd(2025, 12, 6)), ToggleOutcome::Blocked);
        assert!(selection.is_empty());

        let mut open = DateSelection::default().with_blocked(&[]);
        assert_eq!(open.toggle(ymd(2025, 12, 6)), ToggleOutcome::Added);
    }

    #[test]
    fn dates_stay_sorted() {
        let mut selection = DateSelection::default();
        for date in [ymd(2025, 12, 5), ymd(2025, 12, 1), ymd(2025, 12, 3)] {
            selection.toggle(date);
        }
        let isos: Vec<_> = selection.dates().iter().map(|d| d.iso.day()).collect();
        assert_eq!(isos, vec![1, 3, 5]);
    }

    #[test]
    fn only_one_favourite() {
        let mut selection = DateSelection::default();
        for date in weekdays() {
            selection.toggle(date);
        }
        assert!(selection.toggle_favourite(ymd(2025, 12, 2)));
        assert!(selection.toggle_favourite(ymd(2025, 12, 4)));
        assert_eq!(selection.favourite(), Some(ymd(2025, 12, 4)));
        assert_eq!(selection.dates().iter().filter(|d| d.is_favourite).count(), 1);

        selection.toggle_favourite(ymd(2025, 12, 4));
        assert_eq!(selection.favourite(), None);

        assert!(!selection.toggle_favourite(ymd(2025, 12, 25)));
    }

    #[test]
    fn removing_the_favourite_drops_it() {
        let mut selection = DateSelection::default();
        selection.toggle(ymd(2025, 12, 2));
        selection.toggle_favourite(ymd(2025, 12, 2));
        selection.toggle(ymd(2025, 12, 2));
        selection.toggle(ymd(2025, 12, 2));
        assert_eq!(selection.favourite(), None);
    }

    #[test]
    fn times_are_attached_per_date() {
        let mut selection = DateSelection::default();
        selection.toggle(ymd(2025, 12, 2));
        selection.toggle(ymd(2025, 12, 3));
        assert!(!selection.all_timed());
        assert!(selection.set_time(ymd(2025, 12, 2), Some("9:30".into())));
        assert!(selection.set_time(ymd(2025, 12, 3), Some("12:30".into())));
        assert!(selection.all_timed());
        assert!(selection.set_time(ymd(2025, 12, 3), Some("  ".into())));
        assert!(!selection.all_timed());
        assert!(!selection.set_time(ymd(2025, 12, 9), Some("9:00".into())));
        assert_eq!(selection.dates()[0].describe(), "2nd of December at 9:30");
    }

    #[test]
    fn loading_stored_dates_restores_invariants() {
        let mut first = RequestedDate::new(ymd(2025, 12, 3));
        first.is_favourite = true;
        let mut second = RequestedDate::new(ymd(2025, 12, 1));
        second.is_favourite = true;
        let mut stored = vec![first, second, RequestedDate::new(ymd(2025, 12, 3))];
        stored.extend((8..=12).map(|d| RequestedDate::new(ymd(2025, 12, d))));

        let selection = DateSelection::from_requested_dates(stored, 5);
        assert_eq!(selection.len(), 5);
        assert_eq!(selection.dates()[0].iso, ymd(2025, 12, 1));
        assert_eq!(selection.favourite(), Some(ymd(2025, 12, 1)));
        assert_eq!(selection.dates().iter().filter(|d| d.is_favourite).count(), 1);
    }

    #[test]
    fn loading_keeps_the_earliest_dates_and_drops_saturdays() {
        // stored newest first, with Saturday the 6th among them
        let stored: Vec<_> = [12, 11, 10, 9, 8, 6, 5, 4, 3]
            .into_iter()
            .map(|d| RequestedDate::new(ymd(2025, 12, d)))
            .collect();

        let selection = DateSelection::from_requested_dates(stored, 5);
        let days: Vec<_> = selection.dates().iter().map(|d| d.iso.day()).collect();
        assert_eq!(days, vec![3, 4, 5, 8, 9]);
        assert!(!selection.contains(ymd(2025, 12, 6)));
    }

    #[test]
    fn summary_labels() {
        let mut selection = DateSelection::default();
        assert_eq!(selection.summary_label(), "Select dates");
        selection.toggle(ymd(2025, 12, 1));
        assert_eq!(selection.summary_label(), "1 date selected");
        selection.toggle(ymd(2025, 12, 2));
        assert_eq!(selection.summary_label(), "2 dates selected");
    }

    #[test]
    fn requested_date_json_shape() {
        let mut date = RequestedDate::new(ymd(2025, 12, 10));
        date.is_favourite = true;
        let json = serde_json::to_value(&date).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "iso": "2025-12-10",
                "formatted": "10th of December",
                "isFavourite": true
            })
        );
    }

    #[test]
    fn display_name_prefers_contact() {
        let draft = AvailabilityDraft {
            location: "Port Lympne Kent".into(),
            dates: vec![],
            timestamp: Utc::now(),
            contact: None,
        };
        let anonymous = draft.clone().into_request(2, None);
        assert_eq!(anonymous.display_name(), "Jane Doe");
        assert_eq!(draft.clone().into_request(7, None).display_name(), "User 7");

        let named = draft.into_request(
            1,
            Some(ContactDetails {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                ..Default::default()
            }),
        );
        assert_eq!(named.display_name(), "Ada Lovelace");
        assert_eq!(named.status, RequestStatus::Pending);
    }
}
