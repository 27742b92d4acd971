use std::{io::Write, path::PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use serde::Serialize;

use crate::{
  generator::{
    GeneratorConfig,
    codegen::GeneratedFile,
    metrics::GenerationStats,
    orchestrator::{GeneratedOutput, Orchestrator},
    reducer::ReducedType,
    table::TypeTable,
  },
  ui::{Colors, GenerateCommand},
  utils::{SpecLoader, spec::SpecFormat},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub generator: GeneratorConfig,
  pub dump_table: Option<PathBuf>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      metadata_fallback_type,
      generic_fallback_type,
      dump_table,
      verbose,
      quiet,
    } = command;

    if metadata_fallback_type.trim().is_empty() {
      anyhow::bail!("--metadata-fallback-type must not be empty");
    }
    if generic_fallback_type.trim().is_empty() {
      anyhow::bail!("--generic-fallback-type must not be empty");
    }
    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be combined");
    }

    let generator = GeneratorConfig::builder()
      .metadata_fallback_type(metadata_fallback_type)
      .generic_fallback_type(generic_fallback_type)
      .build();

    Ok(Self {
      input,
      output,
      generator,
      dump_table,
      verbose,
      quiet,
    })
  }

  async fn create_orchestrator(&self, logger: &GenerateLogger<'_>) -> anyhow::Result<Orchestrator> {
    let loader = SpecLoader::open(&self.input).await?;
    logger.log_format(loader.format());
    let document = loader.parse()?;
    Ok(Orchestrator::new(document, self.generator.clone()))
  }

  async fn write_files(&self, files: &[GeneratedFile]) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.output)
      .await
      .with_context(|| format!("failed to create output directory '{}'", self.output.display()))?;
    for file in files {
      let path = self.output.join(&file.file_name);
      tokio::fs::write(&path, &file.contents)
        .await
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    }
    Ok(())
  }

  async fn write_dump(&self, output: &GeneratedOutput) -> anyhow::Result<()> {
    let Some(path) = &self.dump_table else {
      return Ok(());
    };

    let dump = TableDump {
      flattened: &output.table,
      reduced: &output.types,
    };
    let json = serde_json::to_string_pretty(&dump)?;
    if let Some(parent) = path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, json)
      .await
      .with_context(|| format!("failed to write table dump '{}'", path.display()))?;
    Ok(())
  }
}

#[derive(Serialize)]
struct TableDump<'a> {
  flattened: &'a TypeTable,
  reduced: &'a [ReducedType],
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading schema document from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_format(&self, format: SpecFormat) {
    if self.config.verbose {
      self.stat("Format:", format.to_string());
    }
  }

  fn log_generating(&self) {
    self.info(&"Flattening schemas...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Schemas read:", stats.schemas_read.to_string());
    self.stat("Types flattened:", stats.types_flattened.to_string());
    self.stat("Types emitted:", stats.types_emitted.to_string());
    self.stat("", format!("{} fields", stats.fields_emitted));
    if stats.fallbacks_applied > 0 {
      self.stat("Fallbacks applied:", stats.fallbacks_applied.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let _ = self.write_warnings(&mut std::io::stderr().lock(), stats);
  }

  /// Writes the separator and every visible warning to the same stream.
  fn write_warnings(&self, out: &mut impl Write, stats: &GenerationStats) -> std::io::Result<()> {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        writeln!(out)?;
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      writeln!(
        out,
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      )?;
    }
    Ok(())
  }

  fn log_writing(&self, file_count: usize) {
    self.info(
      &format!("Writing {file_count} files to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
    if let Some(path) = &self.config.dump_table {
      self.info(
        &format!("Writing type table to: {}", path.display())
          .with(self.colors.primary())
          .to_string(),
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript interfaces".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let orchestrator = config.create_orchestrator(&logger).await?;

  logger.log_generating();
  let output = orchestrator.generate();
  let files = orchestrator.render(&output, &config.input.display().to_string());
  logger.print_statistics(&output.stats);

  logger.log_writing(files.len());
  config.write_files(&files).await?;
  config.write_dump(&output).await?;

  logger.log_success();
  Ok(())
}
