use async_trait::async_trait;
use reqwest::{Client, Url, header::CONTENT_TYPE};

use crate::{
    error::SubmitError,
    model::{Payload, Prediction},
};

use super::PredictionClient;

const CSV_CONTENT_TYPE: &str = "text/csv";

/// Posts the CSV payload to a fixed endpoint and reads back JSON.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    endpoint: Url,
    http: Client,
}

impl HttpPredictionClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, payload: &Payload) -> Result<Prediction, SubmitError> {
        let csv = payload.to_csv();
        tracing::debug!(endpoint = %self.endpoint, payload = %csv, "Sending prediction request");

        let res = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, CSV_CONTENT_TYPE)
            .body(csv)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(SubmitError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let prediction: Prediction = serde_json::from_str(&body)?;
        tracing::debug!(max_temp = prediction.max_temp, "Prediction received");

        Ok(prediction)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
