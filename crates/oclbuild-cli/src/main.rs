//! oclbuild - compile and export the OpenChemLib JavaScript bundles.

mod build;
mod colors;
mod export;
mod sync;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use oclbuild_core::{CompilationMode, RunConfig, SourceTree};

#[derive(Parser)]
#[command(name = "oclbuild")]
#[command(about = "Compile GWT modules and export them as JavaScript libraries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging and write compiler logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only process the named module
    #[arg(short, long, global = true)]
    module: Option<String>,

    /// Project root
    #[arg(short = 'C', long, global = true, default_value = ".")]
    root: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the modules, then export them to dist/ (default: min)
    Build {
        /// Compiler output style
        #[arg(long, value_enum, default_value_t = Mode::Min)]
        mode: Mode,
    },

    /// Compile the modules without exporting
    Compile {
        /// Compiler output style
        #[arg(long, value_enum, default_value_t = Mode::Min)]
        mode: Mode,
    },

    /// Export previously compiled modules to dist/
    Export,

    /// Copy classes from the upstream Java projects into src/
    Sync {
        /// Tree to copy
        #[arg(value_enum, default_value_t = Tree::All)]
        tree: Tree,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Obfuscated output
    Min,
    /// Readable output
    Pretty,
}

impl From<Mode> for CompilationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Min => CompilationMode::Min,
            Mode::Pretty => CompilationMode::Pretty,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Tree {
    Openchemlib,
    Datawarrior,
    All,
}

impl Tree {
    fn trees(self) -> Vec<SourceTree> {
        match self {
            Tree::Openchemlib => vec![SourceTree::Openchemlib],
            Tree::Datawarrior => vec![SourceTree::Datawarrior],
            Tree::All => SourceTree::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Attach recovery hints to library errors
    let format_error = |err: anyhow::Error| -> anyhow::Error {
        if let Some(core_err) = err.downcast_ref::<oclbuild_core::Error>() {
            anyhow::anyhow!("{}", core_err.with_hint())
        } else {
            err
        }
    };

    let run = RunConfig::new(&cli.root)
        .verbose(cli.verbose)
        .module_filter(cli.module);

    match cli.command.unwrap_or(Commands::Build { mode: Mode::Min }) {
        Commands::Build { mode } => {
            build::execute(run, mode.into(), true).await.map_err(format_error)?;
        }
        Commands::Compile { mode } => {
            build::execute(run, mode.into(), false).await.map_err(format_error)?;
        }
        Commands::Export => {
            export::execute(run).await.map_err(format_error)?;
        }
        Commands::Sync { tree } => {
            sync::execute(run, &tree.trees()).map_err(format_error)?;
        }
    }

    Ok(())
}
