pub mod codegen;
pub(crate) mod flattener;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
pub mod reducer;
pub mod schema;
pub mod table;

#[cfg(test)]
mod tests;

pub const DEFAULT_METADATA_FALLBACK_TYPE: &str = "IoK8sApimachineryPkgApisMetaV1ObjectMeta";
pub const DEFAULT_GENERIC_FALLBACK_TYPE: &str = "unknown | null";

/// Type names substituted for nested schemas that flatten to nothing.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratorConfig {
  /// Used for a resource's own `metadata` field; imported as an externally supplied type.
  #[builder(into, default = DEFAULT_METADATA_FALLBACK_TYPE.to_string())]
  pub metadata_fallback_type: String,
  /// Used for every other empty nested schema; never imported.
  #[builder(into, default = DEFAULT_GENERIC_FALLBACK_TYPE.to_string())]
  pub generic_fallback_type: String,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}
