pub mod client;
pub mod date_range;
pub mod error;
pub mod location;
pub mod month_day;
pub mod observation;
pub mod retry;
pub mod source;
