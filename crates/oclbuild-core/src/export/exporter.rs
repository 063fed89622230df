//! Exporters turn a raw GWT bundle into a distributable library file.

use std::future::Future;
use std::path::PathBuf;

use tokio::fs;

use super::metadata::PackageMetadata;
use crate::error::{Error, Result};

/// Input contract of an exporter.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Module being exported.
    pub module: String,

    /// Located compiler bundle.
    pub input: PathBuf,

    /// Destination file.
    pub output: PathBuf,

    /// Public symbol the library is exposed under.
    pub exports: String,

    /// Provide stub browser globals to the bundle.
    pub fake: bool,

    /// Metadata embedded in the output.
    pub package: PackageMetadata,
}

/// Wraps a bundle described by an [`ExportRequest`].
pub trait Exporter: Send + Sync + 'static {
    fn export(&self, request: ExportRequest) -> impl Future<Output = Result<()>> + Send;
}

/// Writes a UMD module around the bundle, modelled on `gwt-api-exporter`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GwtApiExporter;

impl GwtApiExporter {
    /// Render the distributable file for `bundle`.
    pub fn render(bundle: &str, request: &ExportRequest) -> String {
        let package = &request.package;
        let exports = serde_json::Value::String(request.exports.clone()).to_string();

        let mut out = String::with_capacity(bundle.len() + 1024);
        out.push_str("/**\n");
        match (package.name(), package.get_str("description")) {
            (Some(name), Some(description)) => {
                out.push_str(&format!(" * {name} - {description}\n"));
            }
            (Some(name), None) => out.push_str(&format!(" * {name}\n")),
            _ => {}
        }
        if let Some(version) = package.version() {
            out.push_str(&format!(" * @version v{version}\n"));
        }
        if let Some(homepage) = package.get_str("homepage") {
            out.push_str(&format!(" * @link {homepage}\n"));
        }
        if let Some(license) = package.license() {
            out.push_str(&format!(" * @license {license}\n"));
        }
        out.push_str(" */\n");

        out.push_str("(function (root, factory) {\n");
        out.push_str("    if (typeof define === 'function' && define.amd) {\n");
        out.push_str("        define([], factory);\n");
        out.push_str("    } else if (typeof module === 'object' && module.exports) {\n");
        out.push_str("        module.exports = factory();\n");
        out.push_str("    } else {\n");
        out.push_str(&format!("        root[{exports}] = factory();\n"));
        out.push_str("    }\n");
        out.push_str("}(this, function () {\n");

        if request.fake {
            out.push_str("    var window = {};\n");
            out.push_str(
                "    var document = { createElement: function () { return {}; }, getElementsByTagName: function () { return []; } };\n",
            );
            out.push_str("    var navigator = { userAgent: '' };\n");
            out.push_str("    var $wnd = window;\n");
            out.push_str("    var $doc = document;\n");
        } else {
            out.push_str("    var $wnd = {};\n");
            out.push_str("    var $doc = typeof document !== 'undefined' ? document : {};\n");
        }

        out.push_str(bundle);
        if !bundle.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&format!("    return $wnd[{exports}];\n"));
        out.push_str("}));\n");
        out
    }
}

impl Exporter for GwtApiExporter {
    async fn export(&self, request: ExportRequest) -> Result<()> {
        let failed = |reason: String| Error::ExportFailed {
            module: request.module.clone(),
            reason,
        };

        let bundle = fs::read_to_string(&request.input)
            .await
            .map_err(|e| failed(format!("failed to read {}: {e}", request.input.display())))?;

        if let Some(parent) = request.output.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| failed(format!("failed to create {}: {e}", parent.display())))?;
        }

        let rendered = Self::render(&bundle, &request);
        fs::write(&request.output, rendered)
            .await
            .map_err(|e| failed(format!("failed to write {}: {e}", request.output.display())))?;

        tracing::debug!(
            "Wrote {} ({} bytes of bundle)",
            request.output.display(),
            bundle.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(dir: &std::path::Path, fake: bool) -> ExportRequest {
        ExportRequest {
            module: "full".to_string(),
            input: dir.join("ABCD.cache.js"),
            output: dir.join("dist").join("openchemlib-full.js"),
            exports: "OCL".to_string(),
            fake,
            package: PackageMetadata::parse(
                r#"{"name": "openchemlib", "version": "4.2.0", "license": "BSD-3-Clause"}"#,
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_render_banner_and_symbol() {
        let temp = TempDir::new().unwrap();
        let out = GwtApiExporter::render("$wnd.OCL = {};", &request(temp.path(), false));

        assert!(out.starts_with("/**\n * openchemlib\n * @version v4.2.0\n"));
        assert!(out.contains(" * @license BSD-3-Clause\n"));
        assert!(out.contains("root[\"OCL\"] = factory();"));
        assert!(out.contains("$wnd.OCL = {};\n"));
        assert!(out.contains("return $wnd[\"OCL\"];"));
        assert!(!out.contains("navigator"));
    }

    #[test]
    fn test_render_fake_globals() {
        let temp = TempDir::new().unwrap();
        let out = GwtApiExporter::render("", &request(temp.path(), true));
        assert!(out.contains("var navigator = { userAgent: '' };"));
        assert!(out.contains("var $wnd = window;"));
    }

    #[tokio::test]
    async fn test_export_writes_output() {
        let temp = TempDir::new().unwrap();
        let req = request(temp.path(), false);
        std::fs::write(&req.input, "$wnd.OCL = {};\n").unwrap();

        GwtApiExporter.export(req.clone()).await.unwrap();

        let written = std::fs::read_to_string(&req.output).unwrap();
        assert!(written.contains("$wnd.OCL = {};"));
    }

    #[tokio::test]
    async fn test_export_missing_input() {
        let temp = TempDir::new().unwrap();
        let err = GwtApiExporter
            .export(request(temp.path(), false))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ExportFailed { module, .. } if module == "full"));
    }
}
