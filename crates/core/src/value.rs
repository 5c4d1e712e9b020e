//! Value types for appver
//!
//! This module defines:
//! - Datum: Nested value model handed over by the host processing engine
//!
//! ## Value Model
//!
//! The Datum enum has exactly 8 variants, matching what a row-at-a-time
//! engine hands to an evaluation function:
//! - Null, Bool, Int, Float, String, Tuple, Bag, Map
//!
//! A `Tuple` is a positional record. A `Bag` is an ordered sequence of
//! tuples; its order is the order the host produced and is preserved here.
//!
//! ## Stringification
//!
//! `Display` renders scalars exactly as they are concatenated into version
//! strings. Null renders as the empty string.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Nested value supplied per invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Datum {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Positional record
    Tuple(Vec<Datum>),
    /// Ordered sequence of tuples
    Bag(Vec<Datum>),
    /// Map with string keys
    Map(HashMap<String, Datum>),
}

impl Datum {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Datum::Null => "Null",
            Datum::Bool(_) => "Bool",
            Datum::Int(_) => "Int",
            Datum::Float(_) => "Float",
            Datum::String(_) => "String",
            Datum::Tuple(_) => "Tuple",
            Datum::Bag(_) => "Bag",
            Datum::Map(_) => "Map",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Datum::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the fields if this is a Tuple value
    pub fn as_tuple(&self) -> Option<&[Datum]> {
        match self {
            Datum::Tuple(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get the tuples if this is a Bag value
    pub fn as_bag(&self) -> Option<&[Datum]> {
        match self {
            Datum::Bag(tuples) => Some(tuples),
            _ => None,
        }
    }

    /// Get as map reference if this is a Map value
    pub fn as_map(&self) -> Option<&HashMap<String, Datum>> {
        match self {
            Datum::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Build a tuple of string fields
    pub fn tuple_of_strs<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Datum::Tuple(
            fields
                .into_iter()
                .map(|f| Datum::String(f.into()))
                .collect(),
        )
    }

    /// Build a bag of one-field string tuples, preserving order
    pub fn bag_of_strs<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Datum::Bag(
            values
                .into_iter()
                .map(|v| Datum::tuple_of_strs([v]))
                .collect(),
        )
    }

    /// Build a map from key/value pairs
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Datum)>,
        K: Into<String>,
    {
        Datum::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Null => Ok(()),
            Datum::Bool(b) => write!(f, "{}", b),
            Datum::Int(i) => write!(f, "{}", i),
            // integral floats keep their fractional part: 21.0 renders "21.0"
            Datum::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Datum::Float(x) => write!(f, "{}", x),
            Datum::String(s) => f.write_str(s),
            Datum::Tuple(fields) => {
                f.write_str("(")?;
                write_joined(f, fields)?;
                f.write_str(")")
            }
            Datum::Bag(tuples) => {
                f.write_str("{")?;
                write_joined(f, tuples)?;
                f.write_str("}")
            }
            Datum::Map(m) => {
                // Sorted so the rendering is stable across runs
                let mut keys: Vec<&String> = m.keys().collect();
                keys.sort();
                f.write_str("[")?;
                for (i, k) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}#{}", k, m[k])?;
                }
                f.write_str("]")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Datum]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

// ============================================================================
// JSON conversion
// ============================================================================

impl From<serde_json::Value> for Datum {
    /// Convert a JSON value the way a JSON loader feeds the host engine:
    /// arrays become bags whose elements are wrapped as tuples.
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as J;
        match value {
            J::Null => Datum::Null,
            J::Bool(b) => Datum::Bool(b),
            J::Number(n) => match n.as_i64() {
                Some(i) => Datum::Int(i),
                None => Datum::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            J::String(s) => Datum::String(s),
            J::Array(items) => Datum::Bag(items.into_iter().map(json_to_tuple).collect()),
            J::Object(obj) => Datum::Map(obj.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

fn json_to_tuple(value: serde_json::Value) -> Datum {
    match value {
        serde_json::Value::Array(fields) => {
            Datum::Tuple(fields.into_iter().map(Datum::from).collect())
        }
        other => Datum::Tuple(vec![Datum::from(other)]),
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::String(s.to_string())
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::String(s)
    }
}

impl From<i64> for Datum {
    fn from(i: i64) -> Self {
        Datum::Int(i)
    }
}
