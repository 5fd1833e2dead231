//! Form controller: owns the form state and runs submissions.
//!
//! State is published through a `watch` channel so a renderer can follow
//! the loading flag while a request is in flight. Submissions take `&self`,
//! so several may overlap; whichever resolves last decides the result.

use tokio::sync::watch;

use crate::{
    client::{HttpPredictionClient, PredictionClient},
    error::SubmitError,
    model::{FormState, Payload, Prediction},
};

#[derive(Debug)]
pub struct FormController<C = HttpPredictionClient> {
    client: C,
    state: watch::Sender<FormState>,
}

impl<C: PredictionClient> FormController<C> {
    pub fn new(client: C) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self { client, state }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn set_date(&self, date: impl Into<String>) {
        let date = date.into();
        self.state.send_modify(|s| s.date = date);
    }

    pub fn set_min_temp(&self, min_temp: impl Into<String>) {
        let min_temp = min_temp.into();
        self.state.send_modify(|s| s.min_temp = min_temp);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Validate the form, send it, and store the outcome.
    ///
    /// Any failure clears the result and is logged. `loading` is set for the
    /// whole call and cleared on every path.
    pub async fn submit(&self) -> Result<Prediction, SubmitError> {
        self.state.send_modify(|s| s.loading = true);

        let outcome = self.request().await;

        if let Err(err) = &outcome {
            tracing::error!(error = %err, "Error while fetching temperature");
        }

        self.state.send_modify(|s| {
            s.result = outcome.as_ref().ok().copied();
            s.loading = false;
        });

        outcome
    }

    async fn request(&self) -> Result<Prediction, SubmitError> {
        let (date, min_temp) = {
            let s = self.state.borrow();
            (s.date.clone(), s.min_temp.clone())
        };

        let payload = Payload::from_form(&date, &min_temp)?;
        self.client.predict(&payload).await
    }
}
