//! Generate command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use icbt_refid::RefId;
use serde::Serialize;
use tracing::debug;

use crate::output::{print_single, OutputFormat};

/// Generate a fresh RefId.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Tag value (0 for untagged).
    #[arg(short = 't', long = "tag-value", env = "REFGEN_TAG", default_value_t = 0)]
    pub(super) tag_value: u8,

    /// Encoding to print.
    #[arg(short = 'b', long = "base", value_enum, default_value_t = Base::Native)]
    pub(super) base: Base,
}

/// Output encoding for a RefId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Base {
    /// Crockford-style base32 (the canonical form).
    Native,
    /// Lowercase hex.
    Hex,
    /// URL-safe base64 without padding.
    Base64,
}

#[derive(Debug, Serialize)]
struct GeneratedView {
    refid: String,
    tag: u8,
}

impl GenerateCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let id = if self.tag_value != 0 {
            RefId::new_tagged(self.tag_value)
        } else {
            RefId::new()
        };
        debug!(tag = id.tag(), time = %id.time(), "generated refid");

        let view = GeneratedView {
            refid: encode(&id, self.base),
            tag: id.tag(),
        };
        match format {
            OutputFormat::Json => print_single(&view, format),
            OutputFormat::Text => println!("{}", view.refid),
        }
        Ok(())
    }
}

pub(super) fn encode(id: &RefId, base: Base) -> String {
    match base {
        Base::Native => id.to_string(),
        Base::Hex => id.to_hex_string(),
        Base::Base64 => id.to_base64_string(),
    }
}
