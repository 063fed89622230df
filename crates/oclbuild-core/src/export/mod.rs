//! Export stage of the pipeline.
//!
//! ```text
//! war/<module>/<hash>.cache.js ──► ExportWrapper ──► ExportRequest ──► Exporter ──► dist/openchemlib-<module>.js
//!                                       │
//!                                       └── PackageVariants (GPL-3.0 for `enhanced`)
//! ```

mod exporter;
mod metadata;
mod wrapper;

pub use exporter::{ExportRequest, Exporter, GwtApiExporter};
pub use metadata::{ALTERNATE_LICENSE, PackageMetadata, PackageVariants, SENTINEL_MODULE};
pub use wrapper::{DIST_EXTENSION, DIST_PREFIX, EXPORT_SYMBOL, ExportWrapper, dist_path};
