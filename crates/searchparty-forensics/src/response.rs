//! Response shape classification.
//!
//! The forensics API answers every request with one of two JSON objects: an
//! endpoint-specific success shape or `{ "error": "<text>" }`. A body is
//! checked against the success shape first, then against the failure shape;
//! anything else is kept as [`Classified::Unrecognized`]. Unknown extra fields
//! are ignored, but the body must be a JSON object.

use searchparty_core::Instruction;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Outcome of matching a JSON body against the known response shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Classified<T> {
    /// The body matched the endpoint's success shape
    Success(T),
    /// The body was an upstream error payload; carries its `error` text
    Failure(String),
    /// The body matched neither shape
    Unrecognized(Value),
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    directions: Vec<Instruction>,
}

#[derive(Debug, Deserialize)]
struct LocationResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Classify a body returned by the directions endpoint
pub fn classify_directions(body: Value) -> Classified<Vec<Instruction>> {
    classify(body, |response: DirectionsResponse| response.directions)
}

/// Classify a body returned by the location endpoint
pub fn classify_location(body: Value) -> Classified<String> {
    classify(body, |response: LocationResponse| response.message)
}

fn classify<S, T>(body: Value, extract: impl FnOnce(S) -> T) -> Classified<T>
where
    S: DeserializeOwned,
{
    if let Some(success) = parse_object::<S>(&body) {
        return Classified::Success(extract(success));
    }
    if let Some(failure) = parse_object::<ErrorResponse>(&body) {
        return Classified::Failure(failure.error);
    }
    Classified::Unrecognized(body)
}

// serde would also accept a JSON array for a struct, so objects are checked explicitly.
fn parse_object<S: DeserializeOwned>(body: &Value) -> Option<S> {
    if !body.is_object() {
        return None;
    }
    S::deserialize(body).ok()
}
