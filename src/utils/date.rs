use chrono::{DateTime, Datelike, NaiveDate};
use leptos::prelude::*;

pub const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn format_iso_date(iso_string: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(iso_string) {
        datetime.format("%d %b %Y, %H:%M UTC").to_string()
    } else {
        iso_string.to_string()
    }
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).ok()
}

/// English ordinal suffix, with 11th, 12th and 13th as the exceptions.
pub fn ordinal_suffix(day: u32) -> &'static str {
    let (j, k) = (day % 10, day % 100);
    match (j, k) {
        (1, k) if k != 11 => "st",
        (2, k) if k != 12 => "nd",
        (3, k) if k != 13 => "rd",
        _ => "th",
    }
}

/// "10th of December"
pub fn format_human(date: NaiveDate) -> String {
    let day = date.day();
    format!("{}{} of {}", day, ordinal_suffix(day), date.format("%B"))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
pub fn TimeDisplay(iso_time: String) -> impl IntoView {
    view! { <span>{format_iso_date(&iso_time)}</span> }
}
