use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use url::form_urlencoded;

/// Typed patient criteria coerced from the raw query string.
///
/// Both endpoints share this extractor. Coercion is deliberately lenient:
/// missing keys take their defaults (empty list, 0, 0.0) and malformed
/// numerics silently coerce to the same defaults instead of rejecting the
/// request, so extraction can never produce a 400.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientParams {
    pub symptoms: Vec<String>,
    pub allergies: Vec<String>,
    pub age: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl PatientParams {
    /// Parse a percent-encoded query string into patient criteria.
    ///
    /// List parameters accept both the bare and bracketed key spellings
    /// (`symptoms` / `symptoms[]`) and keep their query order. When a
    /// scalar key repeats, the last occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "symptoms" | "symptoms[]" => params.symptoms.push(value.into_owned()),
                "allergies" | "allergies[]" => params.allergies.push(value.into_owned()),
                "age" => params.age = value.parse().unwrap_or(0),
                "latitude" => params.latitude = value.parse().unwrap_or(0.0),
                "longitude" => params.longitude = value.parse().unwrap_or(0.0),
                _ => {}
            }
        }

        params
    }
}

impl<S> FromRequestParts<S> for PatientParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query().unwrap_or("")))
    }
}
