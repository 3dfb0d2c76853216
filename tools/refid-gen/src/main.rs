//! refidgen - writes the RefId source unit for one entity.
//!
//! Invoked once per entity at build time:
//!
//! ```text
//! refidgen --name EventItem --tag-value 3 --out-dir src/entities
//! ```
//!
//! Invalid input aborts with a non-zero exit before anything is written.
//! `--check` compares instead of writing and fails on drift.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use icbt_refid::codegen::{render, EntitySpec};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "refidgen", version, about = "Generate a per-entity RefId type")]
struct Args {
    /// Entity name in PascalCase, e.g. `EventItem`.
    #[arg(short = 'n', long)]
    name: String,

    /// Tag value reserved for the entity (1-255).
    #[arg(short = 't', long = "tag-value", allow_negative_numbers = true)]
    tag_value: i64,

    /// Directory the unit is written to.
    #[arg(short = 'o', long, env = "REFIDGEN_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Path the generated code uses to reach the RefId library.
    #[arg(long, env = "REFIDGEN_CRATE_PATH", default_value = "icbt_refid")]
    crate_path: String,

    /// Verify the existing file instead of writing it.
    #[arg(long)]
    check: bool,
}

/// Renders and writes (or checks) the unit, returning its path.
fn run(args: &Args) -> Result<PathBuf> {
    let spec = EntitySpec::new(args.name.as_str(), args.tag_value)?;
    let source = render(&spec, &args.crate_path);
    let path = args.out_dir.join(spec.file_name());

    if args.check {
        check(&path, &source)?;
        info!(path = %path.display(), "up to date");
    } else {
        info!(path = %path.display(), entity = spec.name(), tag = spec.tag(), "generating");
        std::fs::write(&path, source)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(path)
}

fn check(path: &Path, expected: &str) -> Result<()> {
    let current = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if current != expected {
        return Err(anyhow!(
            "{} is stale; rerun refidgen without --check",
            path.display()
        ));
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    run(&args)?;
    Ok(())
}
