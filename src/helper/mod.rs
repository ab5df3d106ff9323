pub mod binary;
pub mod log_error;
pub mod logger;
