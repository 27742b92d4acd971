use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::schema::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  #[error("failed to read '{}': {}", path.display(), source)]
  Io {
    path: PathBuf,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
  #[error("'{}' is not valid UTF-8: {}", path.display(), source)]
  Utf8 {
    path: PathBuf,
    #[source]
    source: std::str::Utf8Error,
  },
  #[error("invalid JSON in '{}' at '{}': {}", path.display(), source.path(), source.inner())]
  Json {
    path: PathBuf,
    #[source]
    source: serde_path_to_error::Error<serde_json::Error>,
  },
  #[error("invalid YAML in '{}' at '{}': {}", path.display(), source.path(), source.inner())]
  Yaml {
    path: PathBuf,
    #[source]
    source: serde_path_to_error::Error<serde_yaml::Error>,
  },
}

pub struct SpecLoader {
  path: PathBuf,
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> Result<Self, LoadError> {
    let file = AsyncMmapFile::open(path).await.map_err(|source| LoadError::Io {
      path: path.to_path_buf(),
      source: source.into(),
    })?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
      format: SpecFormat::from_path(path),
    })
  }

  pub fn format(&self) -> SpecFormat {
    self.format
  }

  pub fn parse(&self) -> Result<Document, LoadError> {
    parse_document(self.file.as_slice(), self.format, &self.path)
  }
}

/// Parses `bytes` as a document in the given format; `path` is only used for error reporting.
pub fn parse_document(bytes: &[u8], format: SpecFormat, path: &Path) -> Result<Document, LoadError> {
  match format {
    SpecFormat::Json => {
      let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
      serde_path_to_error::deserialize(deserializer).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
      })
    }
    SpecFormat::Yaml => {
      let content = std::str::from_utf8(bytes).map_err(|source| LoadError::Utf8 {
        path: path.to_path_buf(),
        source,
      })?;
      let deserializer = serde_yaml::Deserializer::from_str(content);
      serde_path_to_error::deserialize(deserializer).map_err(|source| LoadError::Yaml {
        path: path.to_path_buf(),
        source,
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::generator::schema::SchemaNode;

  const YAML_DOCUMENT: &str = r"
openapi: 3.0.0
info:
  title: Widgets
  version: v1
  contact:
    email: ops@example.com
  license:
    name: Apache-2.0
components:
  schemas:
    Widget:
      type: object
      properties:
        zeta:
          type: string
        alpha:
          type: integer
";

  #[test]
  fn test_format_from_path() {
    assert_eq!(SpecFormat::from_path(Path::new("crds.yaml")), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_path(Path::new("crds.yml")), SpecFormat::Yaml);
    assert_eq!(SpecFormat::from_path(Path::new("crds.json")), SpecFormat::Json);
    assert_eq!(SpecFormat::from_path(Path::new("crds")), SpecFormat::Json);
  }

  #[test]
  fn test_parse_yaml_preserves_order_and_info() {
    let document = parse_document(YAML_DOCUMENT.as_bytes(), SpecFormat::Yaml, Path::new("crds.yaml")).unwrap();

    assert_eq!(document.info.title, "Widgets");
    assert_eq!(
      document.info.contact.and_then(|contact| contact.email).as_deref(),
      Some("ops@example.com")
    );
    assert_eq!(
      document.info.license.and_then(|license| license.name).as_deref(),
      Some("Apache-2.0")
    );

    let Some(SchemaNode::Object(widget)) = document.components.schemas.get("Widget") else {
      panic!("Widget should be an object schema");
    };
    let names: Vec<&str> = widget.properties.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
  }

  #[test]
  fn test_parse_json_error_names_path() {
    let json = br#"{"components": {"schemas": {"Widget": {"required": "nope"}}}}"#;
    let err = parse_document(json, SpecFormat::Json, Path::new("crds.json")).unwrap_err();

    assert!(matches!(err, LoadError::Json { .. }));
    let message = err.to_string();
    assert!(message.contains("crds.json"));
    assert!(message.contains("components.schemas.Widget.required"));
  }

  #[test]
  fn test_parse_yaml_syntax_error() {
    let err = parse_document(b"components: [unclosed", SpecFormat::Yaml, Path::new("bad.yaml")).unwrap_err();
    assert!(matches!(err, LoadError::Yaml { .. }));
  }

  #[tokio::test]
  async fn test_loader_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crds.yaml");
    std::fs::write(&path, YAML_DOCUMENT).unwrap();

    let loader = SpecLoader::open(&path).await.unwrap();
    assert_eq!(loader.format(), SpecFormat::Yaml);
    let document = loader.parse().unwrap();
    assert_eq!(document.schema_names(), vec!["Widget".to_string()]);
  }

  #[tokio::test]
  async fn test_loader_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SpecLoader::open(&dir.path().join("missing.json")).await.err().unwrap();
    assert!(matches!(err, LoadError::Io { .. }));
  }
}
