//! Project configuration (`config.json`) and per-run settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::paths::ProjectDirs;

/// Extra compilation roots configured by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtraClasspath {
    #[default]
    None,
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl ExtraClasspath {
    /// Decode the raw `classpath` value.
    ///
    /// Strings and arrays of strings are accepted; `null` and the empty
    /// string mean no extra roots. Any other shape is rejected.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::None),
            Some(Value::String(s)) if s.is_empty() => Ok(Self::None),
            Some(Value::String(s)) => Ok(Self::Single(PathBuf::from(s))),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(PathBuf::from(s)),
                    other => Err(Error::InvalidConfiguration(format!(
                        "classpath entries must be strings, found {other}"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Many),
            Some(other) => Err(Error::InvalidConfiguration(format!(
                "classpath must be a string or an array of strings, found {other}"
            ))),
        }
    }

    /// Roots in declaration order.
    pub fn roots(&self) -> &[PathBuf] {
        match self {
            Self::None => &[],
            Self::Single(root) => std::slice::from_ref(root),
            Self::Many(roots) => roots,
        }
    }
}

/// On-disk shape of `config.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    gwt: Option<PathBuf>,
    #[serde(default)]
    classpath: Option<Value>,
    java: Option<PathBuf>,
    compile_timeout_secs: Option<u64>,
    openchemlib: Option<PathBuf>,
    datawarrior: Option<PathBuf>,
}

/// Validated project configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// GWT SDK installation directory.
    pub gwt: PathBuf,

    /// Extra roots placed between `src` and the SDK archives.
    pub classpath: ExtraClasspath,

    /// JVM launcher. Resolved on `PATH` when unset.
    pub java: Option<PathBuf>,

    /// Per-module compiler timeout. `None` waits indefinitely.
    pub compile_timeout: Option<Duration>,

    /// Checkout of the openchemlib sources.
    pub openchemlib: Option<PathBuf>,

    /// Checkout of the datawarrior sources.
    pub datawarrior: Option<PathBuf>,
}

impl Config {
    /// Load `config.json` from the project root.
    pub fn load(dirs: &ProjectDirs) -> Result<Self> {
        Self::load_file(&dirs.config_file())
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ConfigurationMissing {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&content)
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(content)
            .map_err(|e| Error::InvalidConfiguration(format!("config.json: {e}")))?;

        let gwt = raw.gwt.ok_or_else(|| {
            Error::InvalidConfiguration("config.json: missing required field \"gwt\"".to_string())
        })?;

        Ok(Self {
            gwt,
            classpath: ExtraClasspath::from_value(raw.classpath.as_ref())?,
            java: raw.java,
            compile_timeout: raw.compile_timeout_secs.map(Duration::from_secs),
            openchemlib: raw.openchemlib,
            datawarrior: raw.datawarrior,
        })
    }
}

/// Settings for one run, built once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Project layout.
    pub dirs: ProjectDirs,

    /// Log progress and persist compiler output.
    pub verbose: bool,

    /// Restrict the run to a single module.
    pub module_filter: Option<String>,
}

impl RunConfig {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            dirs: ProjectDirs::new(root),
            verbose: false,
            module_filter: None,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn module_filter(mut self, filter: Option<String>) -> Self {
        self.module_filter = filter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal() {
        let config = Config::parse(r#"{"gwt": "/opt/gwt"}"#).unwrap();
        assert_eq!(config.gwt, PathBuf::from("/opt/gwt"));
        assert_eq!(config.classpath, ExtraClasspath::None);
        assert!(config.compile_timeout.is_none());
    }

    #[test]
    fn test_parse_single_classpath() {
        let config = Config::parse(r#"{"gwt": "/opt/gwt", "classpath": "lib"}"#).unwrap();
        assert_eq!(config.classpath, ExtraClasspath::Single(PathBuf::from("lib")));
    }

    #[test]
    fn test_parse_many_classpath() {
        let config =
            Config::parse(r#"{"gwt": "/opt/gwt", "classpath": ["a", "b"], "compileTimeoutSecs": 60}"#)
                .unwrap();
        assert_eq!(
            config.classpath.roots(),
            &[PathBuf::from("a"), PathBuf::from("b")]
        );
        assert_eq!(config.compile_timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_reject_unknown_classpath_shape() {
        let err = Config::parse(r#"{"gwt": "/opt/gwt", "classpath": 42}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let err = Config::parse(r#"{"gwt": "/opt/gwt", "classpath": ["a", 1]}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_missing_gwt() {
        let err = Config::parse(r#"{"classpath": "lib"}"#).unwrap_err();
        assert!(err.to_string().contains("gwt"));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(&ProjectDirs::new(temp.path())).unwrap_err();
        assert!(matches!(err, Error::ConfigurationMissing { .. }));
    }
}
