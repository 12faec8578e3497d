//! Command-line sparse matrix calculator over plain-text coordinate files

#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use coomat::{CooMatrix, MatrixError};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Sparse matrix calculator over plain-text coordinate files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show shape and sparsity of a matrix file
    Info {
        /// Matrix file to inspect
        file: PathBuf,
    },
    /// Add two matrices
    Add {
        /// Left operand file
        lhs: PathBuf,

        /// Right operand file
        rhs: PathBuf,

        /// Write the result here instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Subtract the second matrix from the first
    Sub {
        /// Left operand file
        lhs: PathBuf,

        /// Right operand file
        rhs: PathBuf,

        /// Write the result here instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Multiply two matrices
    Mul {
        /// Left operand file
        lhs: PathBuf,

        /// Right operand file
        rhs: PathBuf,

        /// Write the result here instead of printing it
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Info { file } => {
            let matrix = coomat::load_matrix(file)?;
            println!("{}", coomat::summary(&matrix));
            println!("density: {:.6}%", matrix.density() * 100.0);
        }
        Commands::Add { lhs, rhs, out } => run_op(lhs, rhs, out.as_deref(), coomat::ops::add)?,
        Commands::Sub { lhs, rhs, out } => run_op(lhs, rhs, out.as_deref(), coomat::ops::sub)?,
        Commands::Mul { lhs, rhs, out } => run_op(lhs, rhs, out.as_deref(), coomat::ops::mul)?,
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn run_op(
    lhs: &Path,
    rhs: &Path,
    out: Option<&Path>,
    op: fn(&CooMatrix, &CooMatrix) -> Result<CooMatrix, MatrixError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let lhs = coomat::load_matrix(lhs)?;
    let rhs = coomat::load_matrix(rhs)?;
    let result = op(&lhs, &rhs)?;

    match out {
        Some(path) => {
            coomat::save_matrix(path, &result)?;
            println!("wrote {} to {}", coomat::summary(&result), path.display());
        }
        None => print!("{}", coomat::serialize_matrix(&result)),
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example matrix_cli -- --help");
    std::process::exit(1);
}
