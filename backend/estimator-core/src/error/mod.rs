pub mod client;
pub mod config;
pub mod form;
pub mod logger;

pub use client::PredictionClientError;
pub use form::FormError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] client::PredictionClientError),

    #[error(transparent)]
    Form(#[from] form::FormError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
