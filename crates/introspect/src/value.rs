//! Tagged value model
//!
//! Everything read out of a descriptor (constants, field values, method
//! results) is carried as a [`Value`]. The host runtime's object shapes are
//! collapsed into a closed set of variants so that rendering and equality
//! matching dispatch over an enum instead of inspecting live types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A runtime value surfaced through introspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent / null value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer (all integral widths collapse to i64)
    Int(i64),
    /// Floating point
    Float(f64),
    /// String
    Str(String),
    /// Array or ordered collection
    Seq(Vec<Value>),
    /// Mapping, insertion-ordered
    Map(Vec<(Value, Value)>),
    /// Host object with no further structure
    Opaque(OpaqueValue),
}

/// A host object the introspector cannot decompose.
///
/// `display` is the object's own string form. `None` means the type defines
/// no display form of its own (it inherits the universal base one), which
/// renders as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueValue {
    /// Name of the host class
    pub class: String,
    /// The object's own display form, if it defines one
    pub display: Option<String>,
}

impl OpaqueValue {
    /// Opaque value with its own display form
    pub fn new(class: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            display: Some(display.into()),
        }
    }

    /// Opaque value whose display form is inherited from the base type
    pub fn undisplayable(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            display: None,
        }
    }
}

/// Kind tag for a [`Value`].
///
/// Stands in for a declared member type in discovery filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Null
    Null,
    /// Boolean
    Bool,
    /// Integer
    Int,
    /// Floating point
    Float,
    /// String
    Str,
    /// Array or collection
    Seq,
    /// Mapping
    Map,
    /// Opaque host object
    Opaque,
}

impl Value {
    /// Kind tag of this value
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Type name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Check for null
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    /// Default debug rendering, see [`crate::render::render`]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Seq(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
