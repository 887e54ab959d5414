use serde::{Deserialize, Serialize};
use std::fmt;

/// A class label as stored in a model artifact.
///
/// Trainers emit whatever type the target column had: species names, integer
/// class indices, float codes or booleans. The service only ever needs the
/// textual form, see the `Display` impl.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Label {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Bool(true) => f.write_str("True"),
            Label::Bool(false) => f.write_str("False"),
            Label::Int(v) => write!(f, "{}", v),
            Label::Float(v) => fmt_float(*v, f),
            Label::Text(s) => f.write_str(s),
        }
    }
}

/// Shortest round-trip form with the same switch-over points as Python's
/// `repr(float)`: exponent notation below 1e-4 and from 1e16 on, a trailing
/// ".0" on integral values so `1.0` never collides with the integer label `1`.
fn fmt_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }
    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let repr = format!("{:e}", v);
        let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return write!(f, "{}e{}{:0>2}", mantissa, sign, digits);
    }
    if v.fract() == 0.0 {
        write!(f, "{:.1}", v)
    } else {
        write!(f, "{}", v)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}
