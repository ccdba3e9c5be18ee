//! Runtime description of a target shape and a structural validator for it.
//!
//! # Design
//! Typed decoding (`Decoder::decode::<T>`) covers shapes known at compile
//! time. `Shape` covers the rest: a list of field names, each with a type and
//! a required/optional flag, checked against a JSON object. Validation is
//! all-or-nothing; a `Record` is only returned once every field passed.
//!
//! A shape deserializes from JSON as a list of fields:
//!
//! ```json
//! [
//!   { "name": "id", "type": "int", "required": true },
//!   { "name": "images", "type": { "array": "string" } }
//! ]
//! ```

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FetchError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// JSON integer. Numbers with a fractional part or exponent are rejected.
    Int,
    /// Any JSON number.
    Float,
    String,
    Bool,
    Array(Box<FieldType>),
    Object,
    Any,
}

impl FieldType {
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldType::Any, _) => true,
            (FieldType::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (FieldType::Float, Value::Number(_)) => true,
            (FieldType::String, Value::String(_)) => true,
            (FieldType::Bool, Value::Bool(_)) => true,
            (FieldType::Array(item), Value::Array(items)) => items.iter().all(|v| item.matches(v)),
            (FieldType::Object, Value::Object(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Int => f.write_str("int"),
            FieldType::Float => f.write_str("float"),
            FieldType::String => f.write_str("string"),
            FieldType::Bool => f.write_str("bool"),
            FieldType::Array(item) => write!(f, "array of {item}"),
            FieldType::Object => f.write_str("object"),
            FieldType::Any => f.write_str("any"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default)]
    pub required: bool,
}

/// Ordered set of fields; names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape {
    fields: Vec<Field>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(self, name: impl Into<String>, ty: FieldType) -> Self {
        self.field(name, ty, true)
    }

    pub fn optional(self, name: impl Into<String>, ty: FieldType) -> Self {
        self.field(name, ty, false)
    }

    /// Add a field, replacing any earlier field with the same name.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType, required: bool) -> Self {
        let name = name.into();
        self.fields.retain(|f| f.name != name);
        self.fields.push(Field { name, ty, required });
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Parse `bytes` as a JSON object and check it against this shape.
    pub fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
        self.validate(value)
    }

    pub fn validate(&self, value: Value) -> Result<Record> {
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(FetchError::Decode(format!(
                    "expected a JSON object, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut fields = Map::new();
        for field in &self.fields {
            match object.remove(&field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(FetchError::Decode(format!(
                        "missing required field `{}`",
                        field.name
                    )));
                }
                None | Some(Value::Null) => {}
                Some(value) if !field.ty.matches(&value) => {
                    return Err(FetchError::Decode(format!(
                        "field `{}`: expected {}, found {}",
                        field.name,
                        field.ty,
                        json_type_name(&value)
                    )));
                }
                Some(value) => {
                    fields.insert(field.name.clone(), value);
                }
            }
        }

        Ok(Record { fields })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A value that passed `Shape` validation. Holds only the fields the shape
/// names; optional fields that were missing or null are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn is_absent(&self, name: &str) -> bool {
        !self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.into_value()).map_err(|e| FetchError::Decode(e.to_string()))
    }
}
