use serde_json::Value;

use crate::generator::{
  GeneratorConfig,
  flattener::Flattener,
  metrics::GenerationStats,
  reducer::{ReducedType, Reducer},
  schema::Document,
  table::{FieldRecord, TypeTable},
};

pub(super) fn document(schemas: Value) -> Document {
  let mut document = serde_json::json!({
    "openapi": "3.0.0",
    "info": { "title": "Test CRDs", "version": "1.0.0" },
  });
  document["components"] = serde_json::json!({ "schemas": schemas });
  serde_json::from_value(document).expect("failed to parse test document")
}

pub(super) fn flatten(schemas: Value) -> (TypeTable, GenerationStats) {
  let document = document(schemas);
  let mut table = TypeTable::new();
  let mut stats = GenerationStats::default();
  Flattener::new(&mut table, &mut stats).flatten_schemas(document.schemas());
  (table, stats)
}

pub(super) fn reduce_with(schemas: Value, config: &GeneratorConfig) -> Vec<ReducedType> {
  let (table, mut stats) = flatten(schemas);
  Reducer::new(&table, config).reduce(&mut stats)
}

pub(super) fn reduce(schemas: Value) -> Vec<ReducedType> {
  reduce_with(schemas, &GeneratorConfig::default())
}

pub(super) fn find<'a>(types: &'a [ReducedType], name: &str) -> &'a ReducedType {
  types
    .iter()
    .find(|reduced| reduced.type_record.name == name)
    .unwrap_or_else(|| panic!("type '{name}' should be emitted"))
}

pub(super) fn field<'a>(reduced: &'a ReducedType, name: &str) -> &'a FieldRecord {
  reduced
    .type_record
    .fields
    .get(name)
    .unwrap_or_else(|| panic!("field '{name}' should exist on '{}'", reduced.type_record.name))
}

pub(super) fn type_names(types: &[ReducedType]) -> Vec<&str> {
  types.iter().map(|reduced| reduced.type_record.name.as_str()).collect()
}
