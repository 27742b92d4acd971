use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use serde_json::Value;

use crate::generator::schema::PrimitiveType;

/// One flat, named record type produced by the flattener.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
  pub name: String,
  /// Owning type, or the empty string for types rooted at a top-level schema.
  pub parent_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub fields: IndexMap<String, FieldRecord>,
  pub required_names: IndexSet<String>,
}

impl TypeRecord {
  pub fn new(name: impl Into<String>, parent_name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      parent_name: parent_name.into(),
      ..Default::default()
    }
  }

  #[must_use]
  pub fn with_required(mut self, required_names: IndexSet<String>) -> Self {
    self.required_names = required_names;
    self
  }

  #[must_use]
  pub fn with_description(mut self, description: Option<String>) -> Self {
    self.description = description;
    self
  }

  pub fn is_root(&self) -> bool {
    self.parent_name.is_empty()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  pub fn is_required(&self, field_name: &str) -> bool {
    self.required_names.contains(field_name)
  }

  pub fn add_field(&mut self, mut field: FieldRecord) {
    field.required = self.is_required(&field.name);
    self.fields.insert(field.name.clone(), field);
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
  #[builder(into)]
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// A primitive tag, a target type expression, or the name of another [`TypeRecord`].
  #[builder(into)]
  pub type_reference: String,
  #[builder(default)]
  pub is_array: bool,
  #[builder(default)]
  pub is_object: bool,
  /// Pre-coercion type reference, kept for documentation.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub original_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[builder(default)]
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub enum_values: Vec<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pattern: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_value: Option<Value>,
  #[builder(default)]
  pub required: bool,
}

impl FieldRecord {
  /// The primitive tag this field still carries, if it has not been rewritten.
  pub fn primitive(&self) -> Option<PrimitiveType> {
    if self.is_object {
      return None;
    }
    self.type_reference.parse().ok()
  }

  /// Replaces the type reference, remembering the previous value as the original type.
  pub fn rewrite_type(&mut self, type_reference: impl Into<String>, original_type: impl Into<String>) {
    self.type_reference = type_reference.into();
    self.original_type = Some(original_type.into());
  }
}

/// Insertion-ordered table of flattened types, keyed by synthetic name.
///
/// Iteration order is registration order; overwriting an existing name keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeTable {
  types: IndexMap<String, TypeRecord>,
}

impl TypeTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `record`, returning the record it replaced when the name was already taken.
  pub fn insert(&mut self, record: TypeRecord) -> Option<TypeRecord> {
    self.types.insert(record.name.clone(), record)
  }

  pub fn get(&self, name: &str) -> Option<&TypeRecord> {
    self.types.get(name)
  }

  pub fn get_mut(&mut self, name: &str) -> Option<&mut TypeRecord> {
    self.types.get_mut(name)
  }

  /// A referenced type is defined when it exists and carries at least one field.
  pub fn is_defined(&self, name: &str) -> bool {
    self.get(name).is_some_and(|record| !record.is_empty())
  }

  pub fn len(&self) -> usize {
    self.types.len()
  }

  pub fn is_empty(&self) -> bool {
    self.types.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &TypeRecord> {
    self.types.values()
  }
}
