use serde_json::Value;

use crate::{
    error::{Result, TravelError},
    types::{CurrencyPair, CurrencyRate},
};

const SUCCESS: &str = "success";

/// Read the target rate out of an exchange-rate `latest` response.
pub fn extract_rate(raw: &Value, pair: &CurrencyPair) -> Result<CurrencyRate> {
    if raw.get("result").and_then(Value::as_str) != Some(SUCCESS) {
        let error_type = raw
            .get("error-type")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(TravelError::Provider(format!(
            "Currency API error: {}",
            error_type
        )));
    }

    let rate = raw
        .get("conversion_rates")
        .and_then(|rates| rates.get(&pair.to))
        .and_then(Value::as_f64)
        .ok_or_else(|| {
            TravelError::Provider(format!(
                "Conversion rate for {} not found in response.",
                pair.to
            ))
        })?;

    Ok(CurrencyRate {
        base: pair.from.clone(),
        target: pair.to.clone(),
        rate,
    })
}
