pub mod brand_logo;
pub mod breadcrumbs;
pub mod calendar_popover;
pub mod date_time_location_picker;
pub mod header;
pub mod location_sheet;
pub mod month_grid;
pub mod overlay;
pub mod product;
pub mod timeslot_modal;
