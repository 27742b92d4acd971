use strum::Display;

use crate::generator::reducer::ReducedType;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub schemas_read: usize,
  pub types_flattened: usize,
  pub types_emitted: usize,
  pub fields_emitted: usize,
  pub fallbacks_applied: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_schemas(&mut self, count: usize) {
    self.schemas_read += count;
  }

  pub fn record_flattened_type(&mut self) {
    self.types_flattened += 1;
  }

  pub fn record_reduced_type(&mut self, reduced: &ReducedType) {
    self.types_emitted += 1;
    self.fields_emitted += reduced.type_record.fields.len();
  }

  pub fn record_fallback(&mut self, warning: GenerationWarning) {
    self.fallbacks_applied += 1;
    self.warnings.push(warning);
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Type name '{name}' was produced by more than one schema path; the last definition wins")]
  TypeNameCollision { name: String },
  #[strum(to_string = "Schema '{schema_name}' is not an object and produces no type")]
  UnparentedSchema { schema_name: String },
  #[strum(to_string = "Field '{type_name}.{field_name}' has no usable schema; using '{fallback}'")]
  FallbackApplied {
    type_name: String,
    field_name: String,
    fallback: String,
  },
  #[strum(to_string = "Type '{type_name}' has no fields and was omitted")]
  EmptyTypeOmitted { type_name: String },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::UnparentedSchema { .. } | Self::TypeNameCollision { .. })
  }
}
