//! Package metadata attached to exported bundles.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Module that ships under the alternate license.
pub const SENTINEL_MODULE: &str = "enhanced";

/// License of the sentinel module.
pub const ALTERNATE_LICENSE: &str = "GPL-3.0";

/// A `package.json`-style record.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageMetadata {
    fields: Map<String, Value>,
}

impl PackageMetadata {
    /// Load from a `package.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Metadata(format!("failed to read {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str(content)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::Metadata(format!(
                "package metadata must be a JSON object, found {other}"
            ))),
        }
    }

    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// String value of a field, if present.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn version(&self) -> Option<&str> {
        self.get_str("version")
    }

    pub fn license(&self) -> Option<&str> {
        self.get_str("license")
    }

    /// A copy with the license replaced.
    pub fn with_license(&self, license: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.insert("license".to_string(), Value::String(license.to_string()));
        Self { fields }
    }
}

/// The two metadata variants a run can attach.
#[derive(Debug, Clone)]
pub struct PackageVariants {
    default: PackageMetadata,
    alternate: PackageMetadata,
}

impl PackageVariants {
    /// Derive both variants from the project's base metadata.
    pub fn new(base: PackageMetadata) -> Self {
        let alternate = base.with_license(ALTERNATE_LICENSE);
        Self {
            default: base,
            alternate,
        }
    }

    /// Metadata for a module: the alternate variant for [`SENTINEL_MODULE`],
    /// the base metadata for everything else.
    pub fn for_module(&self, module: &str) -> &PackageMetadata {
        if module == SENTINEL_MODULE {
            &self.alternate
        } else {
            &self.default
        }
    }
}
