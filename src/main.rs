//! Qex interpreter CLI
//!
//! Main entry point for the `qex` command.

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "qex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A tiny dynamically-typed s-expression language", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive REPL (the default)
    Repl,

    /// Evaluate a script, one expression line at a time
    Run {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Dump each line's parse tree as JSON instead of evaluating
        #[arg(long)]
        show_ast: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Run { input, show_ast }) => run(&input, show_ast),
        Some(Commands::Repl) | None => repl(),
    }
}

fn repl() -> Result<()> {
    let mut env = qex::Env::new();
    qex::repl::run_repl(&mut env)
}

fn run(input: &std::path::Path, show_ast: bool) -> Result<()> {
    tracing::info!("Running {:?}", input);

    let source = std::fs::read_to_string(input)
        .map_err(|e| miette::miette!("Failed to read input file: {}", e))?;
    let name = input.to_string_lossy().to_string();

    let mut env = qex::Env::new();

    for (lineno, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let file = qex::SourceFile::new(format!("{}:{}", name, lineno + 1), line);

        if show_ast {
            let tree = qex::parse(&file)?;
            let json = serde_json::to_string_pretty(&tree)
                .map_err(|e| miette::miette!("Failed to serialize parse tree: {}", e))?;
            println!("{}", json);
            continue;
        }

        let result = qex::run_line(&mut env, &file)?;
        println!("{}", result);

        // A script stops as soon as the run flag leaves Running
        if env.run_state() != qex::RunState::Running {
            break;
        }
    }

    Ok(())
}
