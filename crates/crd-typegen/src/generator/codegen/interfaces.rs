use std::sync::LazyLock;

use regex::Regex;

use super::docs::doc_block;
use crate::generator::{reducer::ReducedType, table::FieldRecord};

const FIELD_INDENT: &str = "  ";

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Renders a reduced type as a TypeScript module exporting one interface.
pub(crate) fn render_interface(reduced: &ReducedType, header: &str) -> String {
  let record = &reduced.type_record;
  let mut module = String::from(header);
  module.push('\n');

  if !reduced.import_names.is_empty() {
    for import_name in &reduced.import_names {
      module.push_str(&import_statement(import_name));
    }
    module.push('\n');
  }

  let type_docs: Vec<String> = record
    .description
    .as_deref()
    .map(|description| description.lines().map(String::from).collect())
    .unwrap_or_default();
  module.push_str(&doc_block(&type_docs, ""));
  module.push_str(&format!("export interface {} {{\n", record.name));

  for field in record.fields.values() {
    module.push_str(&doc_block(&field_docs(field), FIELD_INDENT));
    module.push_str(&field_declaration(field));
  }

  module.push_str("}\n");
  module
}

pub(crate) fn import_statement(type_name: &str) -> String {
  format!("import type {{ {type_name} }} from './{type_name}';\n")
}

fn field_declaration(field: &FieldRecord) -> String {
  let optional = if field.required { "" } else { "?" };
  format!(
    "{FIELD_INDENT}{}{optional}: {};\n",
    property_key(&field.name),
    field.type_reference
  )
}

fn field_docs(field: &FieldRecord) -> Vec<String> {
  let mut lines: Vec<String> = field
    .description
    .as_deref()
    .map(|description| description.lines().map(String::from).collect())
    .unwrap_or_default();

  let mut tags = vec![];
  if let Some(format) = &field.format {
    tags.push(format!("@format {format}"));
  }
  if let Some(pattern) = &field.pattern {
    tags.push(format!("@pattern {pattern}"));
  }
  if let Some(default) = &field.default_value {
    tags.push(format!("@default {default}"));
  }
  if let Some(original_type) = &field.original_type {
    tags.push(format!("Original type: {original_type}"));
  }

  if !lines.is_empty() && !tags.is_empty() {
    lines.push(String::new());
  }
  lines.extend(tags);
  lines
}

/// Property names that are not plain identifiers are emitted as quoted keys.
pub(crate) fn property_key(name: &str) -> String {
  if IDENTIFIER_RE.is_match(name) {
    name.to_string()
  } else {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
  }
}
