use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    Config,
    error::SubmitError,
    model::{Payload, Prediction},
};

pub mod http;

pub use http::HttpPredictionClient;

#[async_trait]
pub trait PredictionClient: Send + Sync + Debug {
    async fn predict(&self, payload: &Payload) -> Result<Prediction, SubmitError>;
}

/// Construct the HTTP client for the endpoint resolved from config and an
/// optional command-line override.
pub fn client_from_config(
    config: &Config,
    endpoint_override: Option<&str>,
) -> anyhow::Result<HttpPredictionClient> {
    let endpoint = config.resolve_endpoint(endpoint_override)?;
    Ok(HttpPredictionClient::new(endpoint))
}
