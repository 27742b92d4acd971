//! Orchestration for the schema-to-TypeScript pipeline.
//!
//! The orchestrator owns one loaded [`Document`] and runs the full pass over it:
//!
//! 1. Flattens every top-level schema into a fresh [`TypeTable`]
//! 2. Reduces the table into finalized types with import lists
//! 3. Renders one TypeScript module per type plus an index module
//!
//! Every call builds its own table, so one orchestrator can be run repeatedly and
//! independent orchestrators never share state.
//!
//! ## Usage
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! let document = SpecLoader::open(Path::new("crds.yaml")).await?.parse()?;
//! let orchestrator = Orchestrator::new(document, GeneratorConfig::default());
//!
//! let output = orchestrator.generate();
//! let files = orchestrator.render(&output, "crds.yaml");
//! println!("Generated {} types", output.stats.types_emitted);
//! # Ok(())
//! # }
//! ```

use crate::generator::{
  GeneratorConfig,
  codegen::{self, CodeMetadata, GeneratedFile},
  flattener::Flattener,
  metrics::GenerationStats,
  reducer::{ReducedType, Reducer},
  schema::{Document, SchemaNode},
  table::TypeTable,
};

pub struct Orchestrator {
  document: Document,
  config: GeneratorConfig,
}

/// Everything one pipeline pass produces.
#[derive(Debug)]
pub struct GeneratedOutput {
  /// The flattened table before reduction.
  pub table: TypeTable,
  /// Finalized non-empty types, in registration order.
  pub types: Vec<ReducedType>,
  /// Every top-level schema key, in declaration order.
  pub schema_names: Vec<String>,
  pub stats: GenerationStats,
}

impl Orchestrator {
  pub fn new(document: Document, config: GeneratorConfig) -> Self {
    Self { document, config }
  }

  /// Node kind of every top-level schema, in declaration order.
  pub fn schema_kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.document.schemas().values().map(SchemaNode::kind_label)
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata::from_info(&self.document.info)
  }

  /// Flattens every top-level schema into a new table.
  pub fn flatten(&self, stats: &mut GenerationStats) -> TypeTable {
    let mut table = TypeTable::new();
    Flattener::new(&mut table, stats).flatten_schemas(self.document.schemas());
    table
  }

  /// Runs flattening and reduction over the whole document.
  pub fn generate(&self) -> GeneratedOutput {
    let mut stats = GenerationStats::default();
    let table = self.flatten(&mut stats);
    let types = Reducer::new(&table, &self.config).reduce(&mut stats);

    GeneratedOutput {
      table,
      types,
      schema_names: self.document.schema_names(),
      stats,
    }
  }

  /// Renders the TypeScript modules for `output`.
  ///
  /// `source_path` only appears in the generated file headers.
  pub fn render(&self, output: &GeneratedOutput, source_path: &str) -> Vec<GeneratedFile> {
    codegen::render_files(output, &self.metadata(), &self.config, source_path)
  }
}
