//! Common types for the compilation pipeline.

use std::fmt;
use std::path::PathBuf;

/// Heap limit handed to the JVM running the compiler.
pub const JVM_MEMORY_LIMIT: &str = "-Xmx512m";

/// Main class of the GWT compiler.
pub const GWT_COMPILER_CLASS: &str = "com.google.gwt.dev.Compiler";

/// Output style of the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompilationMode {
    /// Obfuscated, minified output.
    #[default]
    Min,
    /// Human-readable output.
    Pretty,
}

impl CompilationMode {
    /// Map a task suffix to a mode. `min` selects [`Self::Min`], anything
    /// else [`Self::Pretty`].
    pub fn from_name(name: &str) -> Self {
        if name == "min" { Self::Min } else { Self::Pretty }
    }

    /// Value passed to the compiler's `-style` flag.
    pub fn style(self) -> &'static str {
        match self {
            Self::Min => "OBF",
            Self::Pretty => "PRETTY",
        }
    }
}

impl fmt::Display for CompilationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Pretty => "pretty",
        })
    }
}

/// One compiler run for one module.
///
/// Holds everything that ends up on the JVM command line, so the flag
/// contract can be inspected without spawning anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerInvocation {
    /// Module being compiled (for diagnostics only).
    pub module: String,

    /// Joined classpath string.
    pub classpath: String,

    /// GWT module to compile.
    pub entrypoint: String,

    /// Compiler flags following the entrypoint.
    pub flags: Vec<String>,

    /// Directory the compiler runs in; `war/` is resolved against it.
    pub working_dir: PathBuf,
}

impl CompilerInvocation {
    /// Build the flag set for a mode.
    pub fn new(
        module: impl Into<String>,
        classpath: impl Into<String>,
        entrypoint: impl Into<String>,
        mode: CompilationMode,
        verbose: bool,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        let mut flags: Vec<String> = [
            "-optimize",
            "9",
            "-XnocheckCasts",
            "-XnoclassMetadata",
            "-nocheckAssertions",
            "-XjsInteropMode",
            "JS",
            "-style",
            mode.style(),
        ]
        .into_iter()
        .map(String::from)
        .collect();

        if verbose {
            flags.push("-logLevel".to_string());
            flags.push("DEBUG".to_string());
        }

        Self {
            module: module.into(),
            classpath: classpath.into(),
            entrypoint: entrypoint.into(),
            flags,
            working_dir: working_dir.into(),
        }
    }

    /// Full argument list for the JVM launcher.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            JVM_MEMORY_LIMIT.to_string(),
            "-cp".to_string(),
            self.classpath.clone(),
            GWT_COMPILER_CLASS.to_string(),
            self.entrypoint.clone(),
        ];
        args.extend(self.flags.iter().cloned());
        args
    }
}

/// Captured result of a finished compiler process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero.
    pub success: bool,

    /// Exit code, if the process was not killed by a signal.
    pub code: Option<i32>,

    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    /// Stdout followed by stderr.
    pub fn combined(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.stdout.len() + self.stderr.len());
        out.extend_from_slice(&self.stdout);
        out.extend_from_slice(&self.stderr);
        out
    }

    /// Lossy text form of [`Self::combined`].
    pub fn combined_text(&self) -> String {
        String::from_utf8_lossy(&self.combined()).into_owned()
    }
}
