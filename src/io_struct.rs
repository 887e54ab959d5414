use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of measurements the model is trained on.
pub const FEATURE_COUNT: usize = 4;

/// Measurements in the order the model was trained on.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// One flower's measurements in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrisInput {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl IrisInput {
    pub const FIELDS: [&'static str; FEATURE_COUNT] =
        ["sepal_length", "sepal_width", "petal_length", "petal_width"];

    /// Validates a request body field by field.
    ///
    /// Numbers, booleans and numeric strings are accepted, anything else is
    /// reported. Every failing field produces one entry; unknown fields are
    /// ignored.
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldError::not_an_object(body)]);
        };

        let mut values = [0.0; FEATURE_COUNT];
        let mut errors = Vec::new();
        for (slot, field) in values.iter_mut().zip(Self::FIELDS) {
            match object.get(field) {
                None => errors.push(FieldError::missing(field, body)),
                Some(value) => match parse_measurement(field, value) {
                    Ok(v) => *slot = v,
                    Err(e) => errors.push(e),
                },
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let [sepal_length, sepal_width, petal_length, petal_width] = values;
        Ok(Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        })
    }

    pub fn to_feature_vector(&self) -> FeatureVector {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

fn parse_measurement(field: &str, value: &Value) -> Result<f64, FieldError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                return Err(FieldError::new(
                    "float_parsing",
                    field,
                    "Input should be a valid number, unable to parse string as a number",
                    value,
                ));
            }
        },
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(FieldError::new(
            "finite_number",
            field,
            "Input should be a finite number",
            value,
        )),
        None => Err(FieldError::new(
            "float_type",
            field,
            "Input should be a valid number",
            value,
        )),
    }
}

/// One entry of a 422 response's `detail` list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl FieldError {
    pub fn new(kind: &str, field: &str, msg: &str, input: &Value) -> Self {
        Self {
            kind: kind.to_string(),
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.to_string(),
            input: Some(input.clone()),
        }
    }

    pub fn missing(field: &str, body: &Value) -> Self {
        Self::new("missing", field, "Field required", body)
    }

    pub fn not_an_object(body: &Value) -> Self {
        Self {
            kind: "model_attributes_type".to_string(),
            loc: vec!["body".to_string()],
            msg: "Input should be a valid dictionary or object to extract fields from"
                .to_string(),
            input: Some(body.clone()),
        }
    }

    pub fn json_invalid(reason: &str) -> Self {
        Self {
            kind: "json_invalid".to_string(),
            loc: vec!["body".to_string()],
            msg: format!("JSON decode error: {}", reason),
            input: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PredictResponse {
    pub prediction: String,
}
