//! Error handling and display for the CLI.

use colored::Colorize;
use icbt_refid::{RefIdError, BASE64_LEN, ENCODED_LEN, HEX_LEN};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no refid argument provided")]
    MissingRefId,

    #[error("unrecognized refid length {0}")]
    UnrecognizedLength(usize),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(CliError::UnrecognizedLength(_)) = err.downcast_ref::<CliError>() {
        return Some(format!(
            "Hint: expected {ENCODED_LEN} symbols (native), {HEX_LEN} (hex) or {BASE64_LEN} (base64)."
        ));
    }
    match err.downcast_ref::<RefIdError>()? {
        RefIdError::InvalidEncoding { .. } => Some(
            "Hint: native refids use 0-9 and a-z except u; i and l read as 1, o as 0.".to_string(),
        ),
        RefIdError::SymbolCount { .. } | RefIdError::DecodedLength { .. } => {
            Some("Hint: the input may be truncated or padded.".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_length() {
        let err = anyhow::Error::from(CliError::UnrecognizedLength(5));
        assert!(hint_for(&err).unwrap().contains("29 symbols"));
    }

    #[test]
    fn test_hint_for_refid_error() {
        let err = anyhow::Error::from(icbt_refid::RefId::parse("u").unwrap_err());
        let hint = hint_for(&err).unwrap();
        assert!(hint.contains("except u"));
        assert!(hint.contains("i and l read as 1"));

        let err = anyhow::Error::from(icbt_refid::RefId::parse("040baxr70").unwrap_err());
        assert!(hint_for(&err).unwrap().contains("truncated"));
    }

    #[test]
    fn test_no_hint_for_other_errors() {
        assert!(hint_for(&anyhow::anyhow!("boom")).is_none());
        assert!(hint_for(&CliError::MissingRefId.into()).is_none());
    }
}
