use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// The turbo selector is a required single-choice control; assembling
    /// a request with nothing checked fails fast instead of sending a
    /// half-built record.
    #[error("Form Error: no turbo option selected {location}")]
    TurboNotSelected { location: ErrorLocation },
}
