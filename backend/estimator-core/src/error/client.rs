use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PredictionClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing Price Error: response carried no numeric price {location}")]
    MissingPrice { location: ErrorLocation },
}

impl PredictionClientError {
    /// Whether this failure is transport-level (request thrown away before
    /// a well-formed body arrived) as opposed to a well-formed response
    /// that simply lacked a usable price.
    ///
    /// The distinction drives which fixed error message the display shows
    /// and whether the cosmetic tone revert is scheduled.
    pub fn is_transport_level(&self) -> bool {
        !matches!(self, PredictionClientError::MissingPrice { .. })
    }
}

impl From<url::ParseError> for PredictionClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        PredictionClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for PredictionClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        PredictionClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
