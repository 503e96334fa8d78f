//! Browser storage for requests, drafts and checkout details.
//!
//! Every read is best effort: a missing key or a value that no longer parses
//! yields the empty default, so a stale or hand-edited entry never breaks a
//! page.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::availability::{
    AvailabilityDraft, AvailabilityRequest, ContactDetails, RequestStatus, RequestedDate,
};

pub const REQUESTS_KEY: &str = "availabilityRequests";
pub const DRAFT_KEY: &str = "availabilityDraft";
pub const CHECKOUT_KEY: &str = "checkoutData";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

/// `window.localStorage` or `window.sessionStorage`. Outside the browser
/// (server rendering, native tests) it behaves as an empty store.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = self
            .storage()
            .ok_or_else(|| format!("{:?} storage unavailable", self.area))?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("Failed to write '{}': {:?}", key, e))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err(format!("{:?} storage unavailable outside the browser", self.area))
    }

    fn remove(&self, _key: &str) {}
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

pub fn read_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("Ignoring malformed '{}' entry: {}", key, e);
            None
        }
    }
}

pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), String>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json =
        serde_json::to_string(value).map_err(|e| format!("Failed to serialize data: {}", e))?;
    store.set(key, &json)
}

/// Submitted requests, oldest first.
#[derive(Debug, Clone)]
pub struct RequestLog<S> {
    store: S,
}

impl RequestLog<BrowserStore> {
    pub fn browser() -> Self {
        Self::new(BrowserStore::local())
    }
}

impl<S: KeyValueStore> RequestLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Vec<AvailabilityRequest> {
        read_json(&self.store, REQUESTS_KEY).unwrap_or_default()
    }

    pub fn last(&self) -> Option<AvailabilityRequest> {
        self.load().pop()
    }

    pub fn add(
        &self,
        draft: AvailabilityDraft,
        contact: Option<ContactDetails>,
    ) -> Result<AvailabilityRequest, String> {
        let mut requests = self.load();
        let id = requests
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| "No request ids left, clear the stored requests".to_string())?;
        let request = draft.into_request(id, contact);
        requests.push(request.clone());
        write_json(&self.store, REQUESTS_KEY, &requests)?;
        Ok(request)
    }

    pub fn set_status(&self, id: u32, status: RequestStatus) -> Result<bool, String> {
        let mut requests = self.load();
        let Some(request) = requests.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        request.status = status;
        write_json(&self.store, REQUESTS_KEY, &requests)?;
        Ok(true)
    }

    pub fn clear(&self) {
        self.store.remove(REQUESTS_KEY);
    }
}

#[derive(Debug, Clone)]
pub struct DraftStore<S> {
    store: S,
}

impl DraftStore<BrowserStore> {
    pub fn browser() -> Self {
        Self::new(BrowserStore::session())
    }
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<AvailabilityDraft> {
        read_json(&self.store, DRAFT_KEY)
    }

    pub fn save(&self, draft: &AvailabilityDraft) -> Result<(), String> {
        write_json(&self.store, DRAFT_KEY, draft)
    }

    pub fn clear(&self) {
        self.store.remove(DRAFT_KEY);
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutStore<S> {
    store: S,
}

impl CheckoutStore<BrowserStore> {
    pub fn browser() -> Self {
        Self::new(BrowserStore::session())
    }
}

impl<S: KeyValueStore> CheckoutStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<ContactDetails> {
        read_json(&self.store, CHECKOUT_KEY)
    }

    pub fn save(&self, contact: &ContactDetails) -> Result<(), String> {
        write_json(&self.store, CHECKOUT_KEY, contact)
    }
}

/// Dates to summarise in the timeslot step: the draft's when it has any,
/// otherwise those of the most recent request.
pub fn pending_dates<D, R>(drafts: &DraftStore<D>, log: &RequestLog<R>) -> Vec<RequestedDate>
where
    D: KeyValueStore,
    R: KeyValueStore,
{
    match drafts.load() {
        Some(draft) if !draft.dates.is_empty() => draft.dates,
        _ => log.last().map(|r| r.dates).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::data::availability::DateSelection;

    fn draft_with(days: &[u32]) -> AvailabilityDraft {
        let mut selection = DateSelection::default();
        for day in days {
            selection.toggle(NaiveDate::from_ymd_opt(2025, 12, *day).unwrap());
        }
        AvailabilityDraft::new("Port Lympne Essex", &selection)
    }

    #[test]
    fn empty_and_malformed_storage_fall_back_to_defaults() {
        let store = MemoryStore::default();
        let log = RequestLog::new(store.clone());
        assert!(log.load().is_empty());
        assert!(log.last().is_none());

        store.set(REQUESTS_KEY, "{not json").unwrap();
        assert!(log.load().is_empty());

        store.set(DRAFT_KEY, "null").unwrap();
        assert!(DraftStore::new(store.clone()).load().is_none());

        store.set(CHECKOUT_KEY, "[1, 2]").unwrap();
        assert!(CheckoutStore::new(store).load().is_none());
    }

    #[test]
    fn request_ids_follow_the_highest_stored_id() {
        let log = RequestLog::new(MemoryStore::default());
        let first = log.add(draft_with(&[1]), None).unwrap();
        let second = log.add(draft_with(&[2, 3]), None).unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let stored = log.load();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].dates.len(), 2);
        assert_eq!(stored[1].location, "Port Lympne Essex");
        assert_eq!(log.last().map(|r| r.id), Some(2));
    }

    #[test]
    fn exhausted_ids_are_an_error() {
        let store = MemoryStore::default();
        let stored = serde_json::json!([{
            "id": u32::MAX,
            "dates": [],
            "timestamp": Utc::now().to_rfc3339()
        }]);
        store.set(REQUESTS_KEY, &stored.to_string()).unwrap();

        let log = RequestLog::new(store);
        assert!(log.add(draft_with(&[1]), None).is_err());
        assert_eq!(log.load().len(), 1);
    }

    #[test]
    fn status_updates_persist() {
        let log = RequestLog::new(MemoryStore::default());
        let request = log.add(draft_with(&[1]), None).unwrap();
        assert_eq!(log.set_status(request.id, RequestStatus::Accepted), Ok(true));
        assert_eq!(log.load()[0].status, RequestStatus::Accepted);
        assert_eq!(log.set_status(99, RequestStatus::Rejected), Ok(false));

        log.clear();
        assert!(log.load().is_empty());
    }

    #[test]
    fn older_entries_without_status_load_as_pending() {
        let store = MemoryStore::default();
        let legacy = serde_json::json!([{
            "id": 1,
            "dates": [{ "iso": "2025-12-10", "formatted": "10th of December" }],
            "timestamp": Utc::now().to_rfc3339()
        }]);
        store.set(REQUESTS_KEY, &legacy.to_string()).unwrap();

        let requests = RequestLog::new(store).load();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, RequestStatus::Pending);
        assert!(!requests[0].dates[0].is_favourite);
    }

    #[test]
    fn pending_dates_prefers_the_draft() {
        let store = MemoryStore::default();
        let drafts = DraftStore::new(store.clone());
        let log = RequestLog::new(store);

        assert!(pending_dates(&drafts, &log).is_empty());

        log.add(draft_with(&[1, 2]), None).unwrap();
        assert_eq!(pending_dates(&drafts, &log).len(), 2);

        drafts.save(&draft_with(&[])).unwrap();
        assert_eq!(pending_dates(&drafts, &log).len(), 2);

        drafts.save(&draft_with(&[3, 4, 5])).unwrap();
        assert_eq!(pending_dates(&drafts, &log).len(), 3);

        drafts.clear();
        assert_eq!(pending_dates(&drafts, &log).len(), 2);
    }

    #[test]
    fn checkout_details_round_trip_through_storage() {
        let checkout = CheckoutStore::new(MemoryStore::default());
        let contact = ContactDetails {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone_number: "0123".into(),
        };
        checkout.save(&contact).unwrap();
        assert_eq!(checkout.load(), Some(contact));
    }

    #[test]
    fn browser_store_is_inert_natively() {
        let store = BrowserStore::local();
        assert!(store.get(REQUESTS_KEY).is_none());
        assert!(store.set(REQUESTS_KEY, "[]").is_err());
    }
}
