use std::collections::HashSet;

use crate::generator::{GeneratorConfig, reducer::ReducedType};

/// Renders the barrel module re-exporting every emitted top-level schema and the
/// externally supplied metadata type.
///
/// Schema keys whose type was omitted for having no fields have no module and are skipped.
pub(crate) fn render_index(
  schema_names: &[String],
  types: &[ReducedType],
  config: &GeneratorConfig,
  header: &str,
) -> String {
  let emitted: HashSet<&str> = types.iter().map(|reduced| reduced.type_record.name.as_str()).collect();

  let mut module = String::from(header);
  module.push('\n');

  let exported = schema_names
    .iter()
    .filter(|name| emitted.contains(name.as_str()) && **name != config.metadata_fallback_type);
  for schema_name in exported {
    module.push_str(&export_statement(schema_name));
  }
  module.push_str(&export_statement(&config.metadata_fallback_type));

  module
}

fn export_statement(module_name: &str) -> String {
  format!("export * from './{module_name}';\n")
}
