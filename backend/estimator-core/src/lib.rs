pub mod cascade;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod logger;
pub mod submission;
pub mod validate;

#[cfg(test)]
mod tests;

pub const PREDICTION_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const PREDICTION_SERVER_PORT: u16 = 4390;
pub const PREDICTION_SERVER_BASE_URL: &str = const_format::concatcp!(
    "http://",
    PREDICTION_SERVER_HOSTNAME,
    ":",
    PREDICTION_SERVER_PORT
);
pub const PREDICTION_ENDPOINT: &str = "api/predict";
