//! Finalizes a flattened [`TypeTable`] for emission.
//!
//! Resolves object references (substituting fallbacks for types that ended up empty),
//! forces the resource discriminators to be required, rewrites primitive tags into target
//! type expressions, wraps array fields, and collects the imports each type needs.

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;

use crate::generator::{
  GeneratorConfig,
  metrics::{GenerationStats, GenerationWarning},
  schema::PrimitiveType,
  table::{FieldRecord, TypeRecord, TypeTable},
};

pub(crate) const METADATA_FIELD: &str = "metadata";
pub(crate) const NOT_DEFINED: &str = "not defined";
const DISCRIMINATOR_FIELDS: [&str; 2] = ["kind", "apiVersion"];
const DATE_FORMAT: &str = "date";
const INTEGER_FORMAT: &str = "int64";
const INT_OR_STRING_TYPE: &str = "number | string";

/// A finalized type together with the names it must import.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReducedType {
  pub import_names: Vec<String>,
  #[serde(rename = "type")]
  pub type_record: TypeRecord,
}

pub(crate) struct Reducer<'a> {
  table: &'a TypeTable,
  config: &'a GeneratorConfig,
}

impl<'a> Reducer<'a> {
  pub(crate) fn new(table: &'a TypeTable, config: &'a GeneratorConfig) -> Self {
    Self { table, config }
  }

  /// Reduces every non-empty type in registration order; empty types are omitted.
  pub(crate) fn reduce(&self, stats: &mut GenerationStats) -> Vec<ReducedType> {
    let mut reduced_types = Vec::with_capacity(self.table.len());

    for record in self.table.iter() {
      if record.is_empty() {
        stats.record_warning(GenerationWarning::EmptyTypeOmitted {
          type_name: record.name.clone(),
        });
        continue;
      }

      let reduced = self.reduce_type(record, stats);
      stats.record_reduced_type(&reduced);
      reduced_types.push(reduced);
    }

    reduced_types
  }

  fn reduce_type(&self, record: &TypeRecord, stats: &mut GenerationStats) -> ReducedType {
    let mut type_record = record.clone();
    let mut imports = IndexSet::new();

    for field in type_record.fields.values_mut() {
      self.resolve_reference(record, field, &mut imports, stats);
      promote_discriminator(record, field);
      self.coerce_primitive(record, field, stats);
      wrap_array(field);
    }

    imports.shift_remove(&record.name);

    ReducedType {
      import_names: imports.into_iter().collect(),
      type_record,
    }
  }

  fn resolve_reference(
    &self,
    owner: &TypeRecord,
    field: &mut FieldRecord,
    imports: &mut IndexSet<String>,
    stats: &mut GenerationStats,
  ) {
    if !field.is_object {
      return;
    }

    if self.table.is_defined(&field.type_reference) {
      imports.insert(field.type_reference.clone());
      return;
    }

    let fallback = if owner.is_root() && field.name == METADATA_FIELD {
      let fallback = self.config.metadata_fallback_type.clone();
      let original = std::mem::replace(&mut field.type_reference, fallback.clone());
      field.original_type = Some(original);
      imports.insert(fallback.clone());
      fallback
    } else {
      field.rewrite_type(&self.config.generic_fallback_type, NOT_DEFINED);
      self.config.generic_fallback_type.clone()
    };

    stats.record_fallback(GenerationWarning::FallbackApplied {
      type_name: owner.name.clone(),
      field_name: field.name.clone(),
      fallback,
    });
  }

  /// Applies the primitive rewrites in order; each step sees the result of the previous one.
  fn coerce_primitive(&self, owner: &TypeRecord, field: &mut FieldRecord, stats: &mut GenerationStats) {
    if field.primitive() == Some(PrimitiveType::Date) {
      field.rewrite_type(PrimitiveType::String.to_string(), PrimitiveType::Date.to_string());
      field.format.get_or_insert_with(|| DATE_FORMAT.to_string());
    }

    if field.primitive() == Some(PrimitiveType::Integer) {
      field.rewrite_type(PrimitiveType::Number.to_string(), PrimitiveType::Integer.to_string());
      field.format.get_or_insert_with(|| INTEGER_FORMAT.to_string());
    }

    if field.primitive() == Some(PrimitiveType::String) && !field.enum_values.is_empty() {
      let union = literal_union(&field.enum_values);
      field.rewrite_type(union, PrimitiveType::String.to_string());
    }

    match field.primitive() {
      Some(PrimitiveType::IntOrString) => {
        field.rewrite_type(INT_OR_STRING_TYPE, PrimitiveType::IntOrString.to_string());
      }
      Some(PrimitiveType::Untyped) => {
        field.rewrite_type(&self.config.generic_fallback_type, NOT_DEFINED);
        stats.record_fallback(GenerationWarning::FallbackApplied {
          type_name: owner.name.clone(),
          field_name: field.name.clone(),
          fallback: self.config.generic_fallback_type.clone(),
        });
      }
      _ => {}
    }
  }
}

/// `kind` and `apiVersion` are mandatory on every resource, whatever the schema says.
fn promote_discriminator(owner: &TypeRecord, field: &mut FieldRecord) {
  if owner.is_root()
    && DISCRIMINATOR_FIELDS.contains(&field.name.as_str())
    && field.primitive() == Some(PrimitiveType::String)
  {
    field.required = true;
  }
}

fn wrap_array(field: &mut FieldRecord) {
  if !field.is_array {
    return;
  }

  field.type_reference = if field.type_reference.contains(' ') {
    format!("({})[]", field.type_reference)
  } else {
    format!("{}[]", field.type_reference)
  };
}

fn literal_union(values: &[Value]) -> String {
  values.iter().map(quote_literal).collect::<Vec<_>>().join(" | ")
}

fn quote_literal(value: &Value) -> String {
  let text = match value {
    Value::String(text) => text.clone(),
    other => other.to_string(),
  };
  format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}
