//! Core library for the `maxtemp` CLI.
//!
//! This crate defines:
//! - Form state, request payload and result rendering
//! - The form controller that runs submissions
//! - Abstraction over the prediction endpoint
//! - Configuration handling
//!
//! It is used by `maxtemp-cli`, but can also be driven by other front ends.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;

pub use client::{HttpPredictionClient, PredictionClient, client_from_config};
pub use config::Config;
pub use controller::FormController;
pub use error::SubmitError;
pub use model::{FormState, Payload, Prediction, render_result};
