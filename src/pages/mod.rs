pub mod checkout;
pub mod confirmation;
pub mod future_version;
pub mod home;
pub mod records;
pub mod request_to_book;
pub mod supplier;
