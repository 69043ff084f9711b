pub mod dates;
pub mod errors;
pub mod units;
pub mod weather;
