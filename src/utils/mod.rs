pub mod dates;
pub mod summary;
pub mod units;
