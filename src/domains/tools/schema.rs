//! Parameter schema model and validation.
//!
//! A tool's parameters are described by a list of [`ParameterSpec`] values
//! with a closed set of types. Raw JSON arguments are validated against the
//! schema in declaration order before any handler runs, and the same schema
//! is projected into JSON Schema for the descriptor and MCP tool metadata.

use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

use super::error::ToolError;

// ============================================================================
// Schema Types
// ============================================================================

/// The closed set of parameter types a tool may declare.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamType {
    /// Free-form string.
    String,
    /// 64-bit integer; string values that parse cleanly are coerced.
    Integer,
    /// String restricted to a fixed set of allowed values.
    Enum { allowed: Vec<String> },
}

/// A validated parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.clone()),
            Self::Int(n) => Value::Number((*n).into()),
        }
    }
}

/// Declaration of a single tool parameter.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub description: String,
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<ParamValue>,
}

impl ParameterSpec {
    fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            param_type,
            required: false,
            default: None,
        }
    }

    /// Declare a string parameter.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::String)
    }

    /// Declare an integer parameter.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Integer)
    }

    /// Declare an enum parameter restricted to `allowed`.
    pub fn enumeration(name: impl Into<String>, allowed: &[&str]) -> Self {
        Self::new(
            name,
            ParamType::Enum {
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark this parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Supply a default string value for absent arguments.
    pub fn default_str(mut self, value: impl Into<String>) -> Self {
        self.default = Some(ParamValue::Str(value.into()));
        self
    }

    /// Supply a default integer value for absent arguments.
    pub fn default_int(mut self, value: i64) -> Self {
        self.default = Some(ParamValue::Int(value));
        self
    }
}

// ============================================================================
// Validated Arguments
// ============================================================================

/// The fully validated, defaulted argument map handed to a handler.
///
/// After validation, every required or defaulted parameter is guaranteed to
/// be present with its declared type.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    values: BTreeMap<String, ParamValue>,
}

impl ToolArguments {
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(ParamValue::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(ParamValue::as_i64)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate raw JSON arguments against a schema, in schema order.
///
/// Missing required parameters without defaults fail with
/// `MissingParameter`; enum values outside the allowed set fail with
/// `InvalidValue`; uncoercible types fail with `TypeMismatch`. Defaults are
/// applied for absent optional parameters. Unknown extra arguments are
/// ignored, as the original server did.
pub fn validate_arguments(
    tool: &str,
    schema: &[ParameterSpec],
    raw: &Map<String, Value>,
) -> Result<ToolArguments, ToolError> {
    let mut args = ToolArguments::default();

    for spec in schema {
        let value = match raw.get(&spec.name) {
            Some(value) => coerce(spec, value)?,
            None => match &spec.default {
                Some(default) => default.clone(),
                None if spec.required => {
                    return Err(ToolError::MissingParameter {
                        tool: tool.to_string(),
                        name: spec.name.clone(),
                    });
                }
                None => continue,
            },
        };
        args.values.insert(spec.name.clone(), value);
    }

    Ok(args)
}

fn coerce(spec: &ParameterSpec, value: &Value) -> Result<ParamValue, ToolError> {
    match &spec.param_type {
        ParamType::String => match value.as_str() {
            Some(s) => Ok(ParamValue::Str(s.to_string())),
            None => Err(ToolError::TypeMismatch {
                name: spec.name.clone(),
                expected: "a string",
            }),
        },
        ParamType::Integer => {
            if let Some(n) = value.as_i64() {
                return Ok(ParamValue::Int(n));
            }
            // String->integer coercion, for clients that quote numbers.
            if let Some(n) = value.as_str().and_then(|s| s.parse::<i64>().ok()) {
                return Ok(ParamValue::Int(n));
            }
            Err(ToolError::TypeMismatch {
                name: spec.name.clone(),
                expected: "an integer",
            })
        }
        ParamType::Enum { allowed } => {
            let s = value.as_str().ok_or_else(|| ToolError::TypeMismatch {
                name: spec.name.clone(),
                expected: "a string",
            })?;
            if allowed.iter().any(|a| a == s) {
                Ok(ParamValue::Str(s.to_string()))
            } else {
                Err(ToolError::InvalidValue {
                    name: spec.name.clone(),
                    value: s.to_string(),
                    allowed: allowed.join(", "),
                })
            }
        }
    }
}

// ============================================================================
// JSON Schema Projection
// ============================================================================

/// Project a parameter schema into a JSON Schema object.
///
/// This single projection backs both the external descriptor and the rmcp
/// tool metadata, so the published schemas cannot drift from the validator.
/// serde_json's ordered maps keep the serialized form deterministic.
pub fn json_schema(schema: &[ParameterSpec]) -> Map<String, Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for spec in schema {
        let mut prop = Map::new();
        let type_name = match &spec.param_type {
            ParamType::String | ParamType::Enum { .. } => "string",
            ParamType::Integer => "integer",
        };
        prop.insert("type".to_string(), json!(type_name));
        if !spec.description.is_empty() {
            prop.insert("description".to_string(), json!(spec.description));
        }
        if let ParamType::Enum { allowed } = &spec.param_type {
            prop.insert("enum".to_string(), json!(allowed));
        }
        if let Some(default) = &spec.default {
            prop.insert("default".to_string(), default.to_json());
        }
        properties.insert(spec.name.clone(), Value::Object(prop));

        if spec.required && spec.default.is_none() {
            required.push(spec.name.clone());
        }
    }

    let mut object = Map::new();
    object.insert("type".to_string(), json!("object"));
    object.insert("properties".to_string(), Value::Object(properties));
    object.insert("required".to_string(), json!(required));
    object
}

// ============================================================================
// Tests
// ============================================================================
