//! Sensor reading ingestion payload
//!
//! Devices post `{"temperatura": 25.5, "umidade": 60.0}`. Values may be
//! JSON numbers or numeric strings (some firmware quotes everything).

use serde_json::Value;

use super::ValidationError;

/// Wire name of the temperature field.
pub const TEMPERATURE_FIELD: &str = "temperatura";

/// Wire name of the humidity field.
pub const HUMIDITY_FIELD: &str = "umidade";

const REQUIRED_FIELDS: &[&str] = &[TEMPERATURE_FIELD, HUMIDITY_FIELD];

/// Validated sensor reading, ready to insert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewReading {
    pub temperature: f64,
    pub humidity: f64,
}

impl NewReading {
    /// Parse and validate a raw request body.
    ///
    /// # Example
    /// ```
    /// use plantwatch_server::models::NewReading;
    ///
    /// let reading = NewReading::from_slice(br#"{"temperatura": 25.5, "umidade": "60"}"#).unwrap();
    /// assert_eq!(reading.humidity, 60.0);
    /// assert!(NewReading::from_slice(br#"{"temperatura": 25.5}"#).is_err());
    /// ```
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody {
                reason: e.to_string(),
            })?;

        Self::from_value(&value)
    }

    /// Validate an already-parsed JSON body.
    ///
    /// Presence of both fields is checked before either is converted, so a
    /// body missing one field always reports the missing field.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let (Some(temperature), Some(humidity)) =
            (value.get(TEMPERATURE_FIELD), value.get(HUMIDITY_FIELD))
        else {
            return Err(ValidationError::MissingFields {
                fields: REQUIRED_FIELDS,
            });
        };

        Ok(Self {
            temperature: numeric(TEMPERATURE_FIELD, temperature)?,
            humidity: numeric(HUMIDITY_FIELD, humidity)?,
        })
    }
}

/// Read a JSON number or numeric string as a finite `f64`.
fn numeric(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotNumeric { field })
}
