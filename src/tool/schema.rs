// ABOUTME: Declared tool input schemas - a parameter list per tool that renders
// ABOUTME: to JSON Schema for the model and validates arguments before execution.

use serde_json::{Map, Value, json};

use crate::error::ToolError;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Array => "array",
            ParamKind::Object => "object",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Integer => value.is_i64() || value.is_u64(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
            ParamKind::Array => value.is_array(),
            ParamKind::Object => value.is_object(),
        }
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub description: String,
    pub required: bool,
}

/// The input shape of a tool.
///
/// Arguments must be an object. Required keys must be present, every key must
/// be declared, and each value must match its declared kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSchema {
    pub params: Vec<ParamSpec>,
}

impl ToolSchema {
    /// A schema with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a required parameter.
    pub fn required(
        mut self,
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            kind,
            description: description.into(),
            required: true,
        });
        self
    }

    /// Add an optional parameter.
    pub fn optional(
        mut self,
        name: impl Into<String>,
        kind: ParamKind,
        description: impl Into<String>,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            kind,
            description: description.into(),
            required: false,
        });
        self
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Render as a JSON Schema object.
    pub fn to_json(&self) -> Value {
        let mut properties = Map::new();
        for p in &self.params {
            properties.insert(
                p.name.clone(),
                json!({
                    "type": p.kind.as_str(),
                    "description": p.description,
                }),
            );
        }
        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Check `params` against this schema on behalf of `tool`.
    pub fn validate(&self, tool: &str, params: &Value) -> Result<(), ToolError> {
        let invalid = |message: String| ToolError::InvalidParams {
            tool: tool.to_string(),
            message,
        };

        // Models send `null` for tools without arguments.
        if params.is_null() && self.params.iter().all(|p| !p.required) {
            return Ok(());
        }
        let Some(object) = params.as_object() else {
            return Err(invalid("arguments must be a JSON object".into()));
        };

        for key in object.keys() {
            if self.param(key).is_none() {
                return Err(invalid(format!("unexpected argument '{key}'")));
            }
        }

        for p in &self.params {
            match object.get(&p.name) {
                None | Some(Value::Null) if p.required => {
                    return Err(invalid(format!("missing required argument '{}'", p.name)));
                }
                None | Some(Value::Null) => {}
                Some(value) if !p.kind.matches(value) => {
                    return Err(invalid(format!(
                        "argument '{}' must be of type {}",
                        p.name,
                        p.kind.as_str()
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
