//! TypeScript rendering of reduced types.

pub(crate) mod docs;
pub(crate) mod index;
pub(crate) mod interfaces;


use crate::generator::{GeneratorConfig, orchestrator::GeneratedOutput, schema::Info};

pub const INDEX_FILE_NAME: &str = "index.ts";
const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

/// Metadata about the source document, used for generated file headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
  pub contact_email: Option<String>,
  pub license_name: Option<String>,
}

impl CodeMetadata {
  pub fn from_info(info: &Info) -> Self {
    Self {
      title: info.title.clone(),
      version: info.version.clone(),
      description: info.description.clone(),
      contact_email: info.contact.as_ref().and_then(|contact| contact.email.clone()),
      license_name: info.license.as_ref().and_then(|license| license.name.clone()),
    }
  }

  /// Builds the comment block placed at the top of every generated module.
  pub fn header(&self, source_path: &str) -> String {
    let mut lines = vec![
      "AUTO-GENERATED CODE - DO NOT EDIT!".to_string(),
      String::new(),
      self.title.clone(),
      format!("Source: {source_path}"),
      format!("Version: {}", self.version),
    ];
    if let Some(email) = &self.contact_email {
      lines.push(format!("Contact: {email}"));
    }
    if let Some(license) = &self.license_name {
      lines.push(format!("License: {license}"));
    }
    lines.push(format!("Generated by `{GENERATOR_NAME}`"));
    lines.push(String::new());
    match &self.description {
      Some(description) => lines.extend(description.lines().map(String::from)),
      None => lines.push("No description provided".to_string()),
    }

    docs::doc_block(&lines, "")
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub file_name: String,
  pub contents: String,
}

impl GeneratedFile {
  pub fn module(type_name: &str, contents: String) -> Self {
    Self {
      file_name: format!("{type_name}.ts"),
      contents,
    }
  }
}

/// Renders one module per reduced type, followed by the index module.
pub fn render_files(
  output: &GeneratedOutput,
  metadata: &CodeMetadata,
  config: &GeneratorConfig,
  source_path: &str,
) -> Vec<GeneratedFile> {
  let header = metadata.header(source_path);

  let mut files: Vec<GeneratedFile> = output
    .types
    .iter()
    .map(|reduced| {
      GeneratedFile::module(
        &reduced.type_record.name,
        interfaces::render_interface(reduced, &header),
      )
    })
    .collect();

  files.push(GeneratedFile {
    file_name: INDEX_FILE_NAME.to_string(),
    contents: index::render_index(&output.schema_names, &output.types, config, &header),
  });

  files
}
