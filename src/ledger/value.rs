//! Contract value encoding and native conversion.
//!
//! Contract calls carry arguments and return values in the host's value
//! encoding. Conversions to native types are strict: a type mismatch is an
//! error, never a silent fallback.

use serde::{Deserialize, Serialize};

use crate::ledger::types::{ClientError, ClientResult};

/// A value in the contract's encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ScValue {
    Void,
    Bool(bool),
    U64(u64),
    I64(i64),
    String(String),
    Symbol(String),
}

impl ScValue {
    /// Encode a native string for use as a contract argument.
    pub fn from_native_str(value: &str) -> Self {
        Self::String(value.to_string())
    }

    /// Convert into a native `String`, failing on any other variant.
    pub fn into_native_string(self) -> ClientResult<String> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(ClientError::Value(format!(
                "expected string, got {}",
                other.type_name()
            ))),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool(_) => "bool",
            Self::U64(_) => "u64",
            Self::I64(_) => "i64",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
        }
    }
}
