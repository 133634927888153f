//! Prints one audit-log line per statement of a SQL file.
//!
//! ```text
//! cargo run -p oxide-delta-postgres --example audit_log -- migrations/0001_init.sql
//! echo "ALTER TABLE foo RENAME COLUMN bar TO quux;" | cargo run -p oxide-delta-postgres --example audit_log
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use oxide_delta_postgres::{PostgresGrammar, PostgresOptions, UnknownRendering};

/// Classifies SQL statements into schema mutations.
#[derive(Parser)]
#[command(name = "audit_log")]
#[command(about, long_about = None)]
struct Cli {
    /// SQL file to read (stdin if not specified).
    path: Option<PathBuf>,

    /// How unknown statements are reported.
    #[arg(long, env = "OXIDE_DELTA_RENDERING", value_enum, default_value_t = Rendering::Source)]
    rendering: Rendering,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rendering {
    Source,
    Deparse,
    Debug,
}

impl From<Rendering> for UnknownRendering {
    fn from(rendering: Rendering) -> Self {
        match rendering {
            Rendering::Source => Self::Source,
            Rendering::Deparse => Self::Deparse,
            Rendering::Debug => Self::Debug,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let sql = match &cli.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let options = PostgresOptions::new().rendering(cli.rendering.into());
    let grammar = PostgresGrammar::with_options(options);

    for statement in oxide_delta_core::classify_annotated(&grammar, &sql) {
        if statement.record.is_noop() {
            continue;
        }
        let line = json!({
            "ordinal": statement.ordinal,
            "location": statement.location,
            "record": statement.record,
        });
        println!("{line}");
    }

    Ok(())
}
