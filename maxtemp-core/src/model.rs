use std::fmt;

use serde::Deserialize;

use crate::error::SubmitError;

pub const DATE_PLACEHOLDER: &str = "Enter date (e.g, 2027-01-25)";
pub const MIN_TEMP_PLACEHOLDER: &str = "Enter minimum temperature (F)";
pub const SUBMIT_LABEL: &str = "Get Temperature";
pub const LOADING_LABEL: &str = "Loading...";

/// Prediction returned by the endpoint. Only `maxTemp` is read.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Prediction {
    #[serde(rename = "maxTemp")]
    pub max_temp: f64,
}

/// Transient state of the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Free text, expected `YYYY-MM-DD`.
    pub date: String,
    /// Free text, expected numeric (Fahrenheit).
    pub min_temp: String,
    pub loading: bool,
    pub result: Option<Prediction>,
}

impl FormState {
    pub fn button_label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { SUBMIT_LABEL }
    }

    /// Text of the result card, if there is a result to show.
    pub fn result_card(&self) -> Option<String> {
        self.result.as_ref().map(render_result)
    }
}

pub fn render_result(prediction: &Prediction) -> String {
    format!("Max Temperature: {}F", unsigned_zero(prediction.max_temp))
}

/// Request body: `<min_temp>,<year>,<month>,<day>`.
///
/// Date parts are the raw tokens of the input, so `01` stays `01`.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub min_temp: f64,
    pub year: String,
    pub month: String,
    pub day: String,
}

impl Payload {
    /// Validate the raw form fields and build the payload.
    ///
    /// Only the temperature and the presence of a date are checked. A date
    /// with the wrong number of `-` separated parts still produces a payload.
    pub fn from_form(date: &str, min_temp: &str) -> Result<Self, SubmitError> {
        let min_temp = parse_temperature(min_temp)?;

        if date.is_empty() {
            return Err(SubmitError::EmptyDate);
        }

        let mut parts = date.split('-');
        let year = parts.next().unwrap_or_default().to_string();
        let month = parts.next().unwrap_or_default().to_string();
        let day = parts.next().unwrap_or_default().to_string();

        if month.is_empty() || day.is_empty() || parts.next().is_some() {
            tracing::warn!(date, "Date is not in YYYY-MM-DD form, sending it anyway");
        }

        Ok(Self {
            min_temp,
            year,
            month,
            day,
        })
    }

    pub fn to_csv(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", unsigned_zero(self.min_temp), self.year, self.month, self.day)
    }
}

fn parse_temperature(raw: &str) -> Result<f64, SubmitError> {
    let invalid = || SubmitError::InvalidTemperature(raw.to_string());

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(unsigned_zero(value))
}

/// `-0.0` prints as `-0`; the endpoint and the result card expect `0`.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_keeps_date_tokens_verbatim() {
        let payload = Payload::from_form("2027-01-25", "32").expect("valid form");
        assert_eq!(payload.to_csv(), "32,2027,01,25");
    }

    #[test]
    fn payload_renders_fractional_temperature() {
        let payload = Payload::from_form("2027-07-04", " 61.5 ").expect("valid form");
        assert_eq!(payload.to_csv(), "61.5,2027,07,04");
    }

    #[test]
    fn negative_zero_is_sent_as_zero() {
        let payload = Payload::from_form("2027-01-25", "-0").expect("valid form");
        assert_eq!(payload.to_csv(), "0,2027,01,25");

        let payload = Payload::from_form("2027-01-25", "-0.0").expect("valid form");
        assert_eq!(payload.to_csv(), "0,2027,01,25");
        assert_eq!(render_result(&Prediction { max_temp: -0.0 }), "Max Temperature: 0F");
    }

    #[test]
    fn non_numeric_temperature_is_rejected() {
        let err = Payload::from_form("2027-01-25", "warm").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidTemperature(_)));
    }

    #[test]
    fn nan_and_infinite_temperatures_are_rejected() {
        for raw in ["NaN", "inf", "-infinity", ""] {
            let err = Payload::from_form("2027-01-25", raw).unwrap_err();
            assert!(matches!(err, SubmitError::InvalidTemperature(_)), "{raw}");
        }
    }

    #[test]
    fn temperature_is_checked_before_date() {
        let err = Payload::from_form("", "x").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidTemperature(_)));
    }

    #[test]
    fn empty_date_is_rejected() {
        let err = Payload::from_form("", "32").unwrap_err();
        assert!(matches!(err, SubmitError::EmptyDate));
    }

    #[test]
    fn malformed_date_still_builds_a_payload() {
        let short = Payload::from_form("2027", "10").expect("not validated");
        assert_eq!(short.to_csv(), "10,2027,,");

        let long = Payload::from_form("2027-01-25-09", "10").expect("not validated");
        assert_eq!(long.to_csv(), "10,2027,01,25");
    }

    #[test]
    fn prediction_reads_max_temp_and_ignores_extra_fields() {
        let p: Prediction =
            serde_json::from_str(r#"{ "maxTemp": 55, "unit": "F" }"#).expect("valid json");
        assert_eq!(p.max_temp, 55.0);
    }

    #[test]
    fn result_card_renders_integral_values_without_fraction() {
        assert_eq!(render_result(&Prediction { max_temp: 55.0 }), "Max Temperature: 55F");
        assert_eq!(render_result(&Prediction { max_temp: 55.5 }), "Max Temperature: 55.5F");
    }

    #[test]
    fn button_label_follows_loading_flag() {
        let mut state = FormState::default();
        assert_eq!(state.button_label(), SUBMIT_LABEL);
        assert_eq!(state.result_card(), None);

        state.loading = true;
        assert_eq!(state.button_label(), LOADING_LABEL);
    }
}
