pub mod api;
pub mod availability;
pub mod product;
pub mod records;
pub mod storage;
