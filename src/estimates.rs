//! Reading the `mean.point_estimate` field out of Criterion's `estimates.json`.
//!
//! Criterion also writes `median`, `std_dev` and friends; those are ignored.

use serde::Deserialize;
use serde_json::Value;

/// A point estimate as it may appear on disk: a JSON number, or a string
/// holding a float literal.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum PointEstimate {
    Number(f64),
    Text(String),
}

pub fn parse_mean_ns(data: &[u8]) -> Result<f64, String> {
    let root: Value = serde_json::from_slice(data).map_err(|e| e.to_string())?;
    let mean = match &root {
        Value::Object(map) => map.get("mean").ok_or_else(|| "missing 'mean'".to_string())?,
        other => return Err(format!("expected a JSON object, found {}", kind_of(other))),
    };
    let estimate = match mean {
        Value::Object(map) => map
            .get("point_estimate")
            .ok_or_else(|| "missing 'mean.point_estimate'".to_string())?,
        other => return Err(format!("'mean' must be an object, found {}", kind_of(other))),
    };
    let value = match PointEstimate::deserialize(estimate) {
        Ok(PointEstimate::Number(n)) => n,
        Ok(PointEstimate::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("'mean.point_estimate' is not numeric: {s:?}"))?,
        Err(_) => {
            return Err(format!(
                "'mean.point_estimate' must be a number, found {}",
                kind_of(estimate)
            ));
        }
    };
    if !value.is_finite() {
        return Err(format!("'mean.point_estimate' is not finite: {estimate}"));
    }
    Ok(value)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
