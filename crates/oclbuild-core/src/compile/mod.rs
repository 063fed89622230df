//! Compilation stage of the pipeline.
//!
//! # Architecture
//!
//! ```text
//! ModuleDescriptor ──► Compiler ──► CompilerInvocation ──► ProcessRunner ──► war/<module>/
//!                         │                                     │
//!                         └──── Classpath                       └── compile-<module>.log (verbose)
//! ```

mod invoker;
mod runner;
mod types;

pub use invoker::Compiler;
pub use runner::{JavaRunner, ProcessRunner};
pub use types::{
    CompilationMode, CompilerInvocation, GWT_COMPILER_CLASS, JVM_MEMORY_LIMIT, ProcessOutput,
};
