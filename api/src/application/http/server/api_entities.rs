pub mod api_error;
pub mod datetime;
pub mod response;
