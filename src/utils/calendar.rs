//! Month grid arithmetic shared by every calendar widget.
//!
//! Grids start on Sunday. Day 1 is preceded by one blank per weekday before
//! it, and the grid is padded with trailing blanks to whole weeks.

use chrono::{Datelike, Months, NaiveDate};

use super::date::format_iso;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    Blank { index: usize },
    Day { date: NaiveDate, iso: String, number: u32 },
}

impl CalendarCell {
    pub fn key(&self) -> String {
        match self {
            CalendarCell::Blank { index } => format!("blank-{index}"),
            CalendarCell::Day { iso, .. } => iso.clone(),
        }
    }
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from `base`.
pub fn add_months(base: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(base);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

pub fn days_in_month(first: NaiveDate) -> u32 {
    let next = add_months(first, 1);
    next.signed_duration_since(first_of_month(first)).num_days() as u32
}

pub fn month_label(first: NaiveDate) -> String {
    first.format("%B %Y").to_string()
}

pub fn build_month_grid(first: NaiveDate) -> Vec<CalendarCell> {
    let first = first_of_month(first);
    let leading_blanks = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(first) as usize;

    let total_cells = leading_blanks + days;
    let trailing_blanks = (7 - total_cells % 7) % 7;
    let grid_size = total_cells + trailing_blanks;

    (0..grid_size)
        .map(|i| {
            if i < leading_blanks || i - leading_blanks >= days {
                return CalendarCell::Blank { index: i };
            }
            let number = (i - leading_blanks + 1) as u32;
            match first.with_day(number) {
                Some(date) => CalendarCell::Day {
                    date,
                    iso: format_iso(date),
                    number,
                },
                None => CalendarCell::Blank { index: i },
            }
        })
        .collect()
}
