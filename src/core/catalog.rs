//! Built-in template catalog access

use crate::core::models::CurriculumTemplate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// A catalog listing entry used to populate template selection.
///
/// The registry is display metadata only; the eligibility engine never needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Template id the entry resolves to
    pub id: String,
    /// Display title
    pub title: String,
    /// Institution name, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
}

/// Failures while resolving catalog resources
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No template with the requested id exists in the catalog
    #[error("template '{0}' not found in catalog")]
    NotFound(String),
    /// The catalog resource could not be read
    #[error("failed to read catalog resource: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog resource is not valid template JSON
    #[error("malformed catalog resource: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Source of built-in curriculum templates.
///
/// The store resolves templates it does not hold locally through this seam,
/// so tests and alternative backends can stand in for the directory catalog.
pub trait TemplateCatalog {
    /// Fetch a template by id.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] for unknown ids, or an I/O or
    /// deserialization error for unreadable resources.
    fn fetch(&self, template_id: &str) -> Result<CurriculumTemplate, CatalogError>;

    /// List the catalog's registry entries.
    ///
    /// # Errors
    /// Returns an error when the registry resource exists but cannot be read
    /// or parsed. A missing registry is an empty catalog, not an error.
    fn registry(&self) -> Result<Vec<RegistryEntry>, CatalogError>;
}

/// File-system catalog resolving `<root>/<id>.json` and `<root>/registry.json`
#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
}

impl DirCatalog {
    /// Create a catalog rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a template id resolves to
    #[must_use]
    pub fn template_path(&self, template_id: &str) -> PathBuf {
        self.root.join(format!("{template_id}.json"))
    }
}

impl TemplateCatalog for DirCatalog {
    fn fetch(&self, template_id: &str) -> Result<CurriculumTemplate, CatalogError> {
        let path = self.template_path(template_id);
        if !path.exists() {
            return Err(CatalogError::NotFound(template_id.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn registry(&self) -> Result<Vec<RegistryEntry>, CatalogError> {
        let path = self.root.join("registry.json");
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
