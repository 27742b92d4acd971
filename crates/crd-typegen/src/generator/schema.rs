//! Input document model.
//!
//! Schemas are deserialized through a loose [`RawSchema`] shape and folded into the closed
//! [`SchemaNode`] sum type, so every consumer matches exhaustively over primitive, array and
//! object nodes instead of dispatching on a `type` string.

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use serde_json::Value;
use strum::{Display, EnumString};

/// The subset of an OpenAPI document the generator reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
  #[serde(default)]
  pub info: Info,
  #[serde(default)]
  pub components: Components,
}

impl Document {
  pub fn schemas(&self) -> &IndexMap<String, SchemaNode> {
    &self.components.schemas
  }

  pub fn schema_names(&self) -> Vec<String> {
    self.components.schemas.keys().cloned().collect()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default, deserialize_with = "scalar_to_string")]
  pub version: String,
  pub description: Option<String>,
  pub contact: Option<Contact>,
  pub license: Option<License>,
}

/// YAML documents frequently carry unquoted versions such as `1.0`.
fn scalar_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: serde::Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::String(text) => text,
    Value::Null => String::new(),
    other => other.to_string(),
  })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
  pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct License {
  pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, SchemaNode>,
}

/// Base type tag of a primitive schema.
///
/// The serialized form is the tag written into a field's type reference during flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum PrimitiveType {
  Null,
  Boolean,
  Number,
  String,
  Integer,
  Date,
  /// `x-kubernetes-int-or-string: true`
  IntOrString,
  /// No usable `type` keyword.
  #[strum(serialize = "unknown")]
  Untyped,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
  Primitive(PrimitiveSchema),
  Array(ArraySchema),
  Object(ObjectSchema),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSchema {
  pub primitive_type: PrimitiveType,
  pub format: Option<String>,
  pub enum_values: Vec<Value>,
  pub pattern: Option<String>,
  pub default: Option<Value>,
  pub description: Option<String>,
}

impl PrimitiveSchema {
  pub fn new(primitive_type: PrimitiveType) -> Self {
    Self {
      primitive_type,
      format: None,
      enum_values: vec![],
      pattern: None,
      default: None,
      description: None,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
  pub items: Box<SchemaNode>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
  pub properties: IndexMap<String, SchemaNode>,
  pub required: IndexSet<String>,
  pub description: Option<String>,
}

impl SchemaNode {
  pub fn untyped() -> Self {
    Self::Primitive(PrimitiveSchema::new(PrimitiveType::Untyped))
  }

  /// Strips any number of array wrappers and returns the element schema.
  pub fn innermost(&self) -> &SchemaNode {
    match self {
      Self::Array(array) => array.items.innermost(),
      node => node,
    }
  }

  pub fn kind_label(&self) -> &'static str {
    match self {
      Self::Primitive(_) => "primitive",
      Self::Array(_) => "array",
      Self::Object(_) => "object",
    }
  }
}

impl<'de> Deserialize<'de> for SchemaNode {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    RawSchema::deserialize(deserializer).map(SchemaNode::from)
  }
}

#[derive(Debug, Deserialize)]
struct RawSchema {
  #[serde(rename = "type")]
  schema_type: Option<String>,
  format: Option<String>,
  #[serde(rename = "enum", default)]
  enum_values: Vec<Value>,
  pattern: Option<String>,
  default: Option<Value>,
  description: Option<String>,
  properties: Option<IndexMap<String, SchemaNode>>,
  #[serde(default)]
  required: IndexSet<String>,
  items: Option<Box<SchemaNode>>,
  #[serde(rename = "x-kubernetes-int-or-string", default)]
  int_or_string: bool,
}

impl From<RawSchema> for SchemaNode {
  fn from(raw: RawSchema) -> Self {
    if raw.int_or_string {
      return Self::Primitive(raw.into_primitive(PrimitiveType::IntOrString));
    }

    match raw.schema_type.as_deref() {
      Some("object") => Self::Object(raw.into_object()),
      Some("array") => Self::Array(raw.into_array()),
      None if raw.properties.is_some() => Self::Object(raw.into_object()),
      None if raw.items.is_some() => Self::Array(raw.into_array()),
      tag => {
        let primitive_type = tag
          .and_then(|tag| tag.parse::<PrimitiveType>().ok())
          .unwrap_or(PrimitiveType::Untyped);
        Self::Primitive(raw.into_primitive(primitive_type))
      }
    }
  }
}

impl RawSchema {
  fn into_object(self) -> ObjectSchema {
    ObjectSchema {
      properties: self.properties.unwrap_or_default(),
      required: self.required,
      description: self.description,
    }
  }

  fn into_array(self) -> ArraySchema {
    ArraySchema {
      items: self.items.unwrap_or_else(|| Box::new(SchemaNode::untyped())),
      description: self.description,
    }
  }

  fn into_primitive(self, primitive_type: PrimitiveType) -> PrimitiveSchema {
    PrimitiveSchema {
      primitive_type,
      format: self.format,
      enum_values: self.enum_values,
      pattern: self.pattern,
      default: self.default,
      description: self.description,
    }
  }
}
