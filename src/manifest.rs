//! # Field Manifests
//!
//! A manifest binds configuration keys to rules and values so a whole set of
//! fields can be checked in one pass (from the CLI, or from tests).
//!
//! ```yaml
//! fields:
//!   - key: route.path
//!     rule: { type: routePath }
//!     value: /api
//!   - key: lb.port
//!     rule: { type: portRange, start: 1, end: 65535 }
//!     value: 8080
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::validation::{FieldRule, FieldValue, Validation};

/// Error type for loading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// One field to check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEntry {
    pub key: String,
    pub rule: FieldRule,
    pub value: FieldValue,
}

/// A set of fields to check together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldManifest {
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

impl FieldManifest {
    /// Parse a YAML manifest
    pub fn from_yaml_str(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON manifest
    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a manifest from disk
    /// Files ending in `.json` are parsed as JSON, everything else as YAML
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        debug!(path = %path.display(), is_json, "Parsing field manifest");

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Check every field, in manifest order
    pub fn evaluate(&self) -> ManifestReport {
        let fields: Vec<FieldReport> = self
            .fields
            .iter()
            .map(|entry| FieldReport {
                key: entry.key.clone(),
                rule: entry.rule.name(),
                validation: entry.rule.validate(&entry.value, &entry.key),
            })
            .collect();

        let report = ManifestReport { fields };
        info!(
            fields = report.fields.len(),
            errors = report.error_count(),
            "Evaluated field manifest"
        );
        report
    }
}

/// Outcome for one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub key: String,
    pub rule: &'static str,
    pub validation: Validation,
}

/// Outcome for a whole manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestReport {
    pub fields: Vec<FieldReport>,
}

impl ManifestReport {
    /// Total number of errors across all fields
    pub fn error_count(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.validation.errors.len())
            .sum()
    }

    /// True when every field passed
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|field| field.validation.is_valid())
    }

    /// Reports for the fields that failed, in manifest order
    pub fn failures(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields
            .iter()
            .filter(|field| !field.validation.is_valid())
    }

    /// JSON rendering used by `fieldcheck check --format json`
    pub fn to_json(&self) -> serde_json::Value {
        let fields: Vec<serde_json::Value> = self
            .fields
            .iter()
            .map(|field| {
                serde_json::json!({
                    "key": field.key,
                    "rule": field.rule,
                    "valid": field.validation.is_valid(),
                    "warnings": field.validation.warnings,
                    "errors": field.validation.messages(),
                })
            })
            .collect();

        serde_json::json!({
            "valid": self.is_valid(),
            "errorCount": self.error_count(),
            "fields": fields,
        })
    }
}
