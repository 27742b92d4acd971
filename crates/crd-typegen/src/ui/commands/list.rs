use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{GeneratorConfig, orchestrator::Orchestrator, table::TypeTable},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::SpecLoader,
};

/// One row of the schema listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SchemaSummary {
  pub name: String,
  pub kind: &'static str,
  pub type_count: usize,
  pub field_count: usize,
}

/// Summarizes each top-level schema by the types rooted at it.
pub(crate) fn summarize_schemas(orchestrator: &Orchestrator) -> Vec<SchemaSummary> {
  let output = orchestrator.generate();
  output
    .schema_names
    .iter()
    .zip(orchestrator.schema_kinds())
    .map(|(name, kind)| {
      let (type_count, field_count) = rooted_at(&output.table, name);
      SchemaSummary {
        name: name.clone(),
        kind,
        type_count,
        field_count,
      }
    })
    .collect()
}

fn rooted_at(table: &TypeTable, root: &str) -> (usize, usize) {
  table
    .iter()
    .filter(|record| root_of(table, &record.name) == Some(root))
    .fold((0, 0), |(types, fields), record| (types + 1, fields + record.fields.len()))
}

fn root_of<'t>(table: &'t TypeTable, name: &str) -> Option<&'t str> {
  let mut current = table.get(name)?;
  // Name collisions can produce parent cycles; a chain longer than the table is one.
  for _ in 0..table.len() {
    if current.is_root() {
      return Some(current.name.as_str());
    }
    current = table.get(&current.parent_name)?;
  }
  None
}

pub async fn list_schemas(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let orchestrator = Orchestrator::new(document, GeneratorConfig::default());
  let summaries = summarize_schemas(&orchestrator);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("SCHEMA").fg(colors.label().into_comfy()));
  row.add_cell(Cell::new("KIND").fg(colors.label().into_comfy()));
  row.add_cell(Cell::new("TYPES").fg(colors.label().into_comfy()));
  row.add_cell(Cell::new("FIELDS").fg(colors.label().into_comfy()));
  table.set_header(row);

  for summary in summaries {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(summary.name)
        .fg(colors.value().into_comfy())
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(summary.kind).fg(colors.accent().into_comfy()));
    row.add_cell(
      Cell::new(summary.type_count)
        .fg(colors.primary().into_comfy())
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(
      Cell::new(summary.field_count)
        .fg(colors.primary().into_comfy())
        .set_alignment(CellAlignment::Right),
    );
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
