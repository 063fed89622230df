//! Module registry.
//!
//! `modules.json` lists the build targets in declaration order. The list is
//! loaded once per run and never mutated afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One build target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Unique module name, also used in output file names.
    pub name: String,

    /// Fully-qualified GWT module passed to the compiler.
    pub entrypoint: String,

    /// Directory under `war/` where the compiler writes this module.
    pub war: String,

    /// Wrap the bundle with stub browser globals.
    #[serde(default)]
    pub fake: bool,
}

/// Ordered set of build targets.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    modules: Vec<ModuleDescriptor>,
}

impl ModuleRegistry {
    /// Load the registry from a `modules.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Registry(format!("failed to read {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Parse registry JSON.
    pub fn parse(content: &str) -> Result<Self> {
        let modules: Vec<ModuleDescriptor> = serde_json::from_str(content)
            .map_err(|e| Error::Registry(format!("modules.json: {e}")))?;
        Self::from_modules(modules)
    }

    /// Build a registry, rejecting duplicate names.
    pub fn from_modules(modules: Vec<ModuleDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for module in &modules {
            if !seen.insert(module.name.as_str()) {
                return Err(Error::Registry(format!(
                    "duplicate module name '{}'",
                    module.name
                )));
            }
        }
        Ok(Self { modules })
    }

    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    /// Select the modules for a run.
    ///
    /// Without a filter the whole registry is returned in declaration order.
    /// With a filter exactly one descriptor is returned, or
    /// [`Error::ModuleNotFound`] if no module has that name.
    pub fn select(&self, filter: Option<&str>) -> Result<Vec<ModuleDescriptor>> {
        let Some(name) = filter else {
            return Ok(self.modules.clone());
        };

        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(|m| vec![m.clone()])
            .ok_or_else(|| Error::ModuleNotFound(name.to_string()))
    }
}

/// Load `modules.json` and apply the optional name filter.
pub fn load_modules(path: &Path, filter: Option<&str>) -> Result<Vec<ModuleDescriptor>> {
    ModuleRegistry::load(path)?.select(filter)
}
