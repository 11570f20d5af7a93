//! Typed informational node values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value stored under an informational node of a player or group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum InfoValue {
    Integer(i32),
    Double(f64),
    Boolean(bool),
    String(String),
}

/// Discriminator for [`InfoValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKind {
    Integer,
    Double,
    Boolean,
    String,
}

impl fmt::Display for InfoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InfoKind::Integer => "integer",
            InfoKind::Double => "double",
            InfoKind::Boolean => "boolean",
            InfoKind::String => "string",
        };
        f.write_str(name)
    }
}

impl InfoValue {
    pub fn kind(&self) -> InfoKind {
        match self {
            InfoValue::Integer(_) => InfoKind::Integer,
            InfoValue::Double(_) => InfoKind::Double,
            InfoValue::Boolean(_) => InfoKind::Boolean,
            InfoValue::String(_) => InfoKind::String,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            InfoValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            InfoValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            InfoValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            InfoValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i32> for InfoValue {
    fn from(v: i32) -> Self {
        InfoValue::Integer(v)
    }
}

impl From<f64> for InfoValue {
    fn from(v: f64) -> Self {
        InfoValue::Double(v)
    }
}

impl From<bool> for InfoValue {
    fn from(v: bool) -> Self {
        InfoValue::Boolean(v)
    }
}

impl From<&str> for InfoValue {
    fn from(v: &str) -> Self {
        InfoValue::String(v.to_owned())
    }
}

impl From<String> for InfoValue {
    fn from(v: String) -> Self {
        InfoValue::String(v)
    }
}
