use chrono::Weekday;

pub const PRODUCT_ID: &str = "118107722";
pub const PRODUCT_TITLE: &str =
    "A Visit to Port Lympne Reserve, Truck Safari and Afternoon Tea for Two";
pub const PRODUCT_ADDRESS: &str =
    "The Aspinall Foundation, Nr Ashford Kent, Lympne Hythe, CT21 4PD";
pub const USE_BY: &str = "Use by 19th Aug 2026";
pub const HERO_IMAGE: &str = "/assets/port-lympne-safari.svg";
pub const HERO_ALT: &str = "Giraffes and safari trucks at Port Lympne";

pub const SUPPLIER_NAME: &str = "Port Lympne";
pub const SUPPLIER_REGION: &str = "Port Lympne, Kent, England";
pub const SUPPLIER_EMAIL: &str = "info@supplier.co.uk";

pub const LOCATIONS: [&str; 3] = [
    "Port Lympne Kent",
    "Port Lympne Hampshire",
    "Port Lympne Essex",
];
pub const DEFAULT_LOCATION: &str = LOCATIONS[0];
/// Shown on the confirmation page for requests stored without a location.
pub const FALLBACK_LOCATION: &str = "Port Lympne, Kent";

pub const MAX_SELECTED_DATES: usize = 5;
/// The voucher cannot be booked on these days.
pub const BLOCKED_WEEKDAYS: [Weekday; 1] = [Weekday::Sat];

/// Entry times, every half hour until last entry at 15:30.
pub const TIMESLOTS: [&str; 14] = [
    "9:00", "9:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00", "13:30",
    "14:00", "14:30", "15:00", "15:30",
];

pub const DESCRIPTION: &str = "Explore the vast 600-acre expanse of Port Lympne Reserve and its historic landscape, \
    then unwind with a relaxing afternoon tea. Meet incredible animals up close and enjoy \
    a memorable day out in nature.";

pub const INCLUDED: [&str; 3] = [
    "Unforgettable 45-minute Truck Safari covering 600 acres of ancient parkland",
    "The unique chance to admire over 900 animal residents across 75 species right here in the UK",
    "Afternoon tea inside the Grade II listed Port Lympne Mansion",
];

pub const GOOD_TO_KNOW: [&str; 4] = [
    "This experience should last around 60 minutes",
    "Open from 9:30 am to 5 pm; last entry at 3:30 pm",
    "Available Sunday-Friday, year-round",
    "All dates are subject to availability",
];

/// Demo requester names, assigned by request number.
pub const DEMO_NAMES: [&str; 5] = [
    "John Smith",
    "Jane Doe",
    "Joe Bloggs",
    "Gary Webb",
    "Luciano Goncalves",
];
