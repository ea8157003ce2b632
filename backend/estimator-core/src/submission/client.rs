//! HTTP client for the prediction endpoint.

use crate::error::client::PredictionClientError;

use common::{ErrorLocation, HttpStatusCode, PredictionRequest, PredictionResponse, Price};

use std::panic::Location;
use std::time::Duration;

use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct PredictionClient {
    base_url: Url,
    client: Client,
}

impl PredictionClient {
    pub fn new(base_url_str: &str) -> Result<Self, PredictionClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(
        base_url_str: &str,
        timeout: Duration,
    ) -> Result<Self, PredictionClientError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    /// POST the assembled record to the prediction endpoint and pull the
    /// price out of the response.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionClientError`] on transport failure, a
    /// non-success status, an undecodable body, or a body without a
    /// numeric `price` field - the last one distinguishable via
    /// [`PredictionClientError::is_transport_level`].
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<Price, PredictionClientError> {
        let url = self.base_url.join(crate::PREDICTION_ENDPOINT)?;

        let response = self.client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(PredictionClientError::Server {
                status: HttpStatusCode::from(response.status().as_u16()),
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body: PredictionResponse = response.json().await?;

        body.price()
            .ok_or_else(|| PredictionClientError::MissingPrice {
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
