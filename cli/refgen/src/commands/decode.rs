//! Decode command.

use anyhow::Result;
use chrono::SecondsFormat;
use clap::Args;
use icbt_refid::entities::entity_name;
use icbt_refid::{RefId, BASE64_LEN, ENCODED_LEN, HEX_LEN};
use serde::Serialize;
use tracing::debug;

use super::generate::{encode, Base};
use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

/// Decode a RefId in any supported encoding.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// The RefId (native, hex, or base64; detected by length).
    refid: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct DecodedView {
    native: String,
    hex: String,
    base64: String,
    tag: u8,
    entity: Option<&'static str>,
    time: String,
    time_micros: i64,
}

impl DecodeCommand {
    pub fn run(self, format: OutputFormat) -> Result<()> {
        let view = describe(&self.refid)?;

        match format {
            OutputFormat::Json => print_single(&view, format),
            OutputFormat::Text => {
                println!("native enc:   {}", view.native);
                println!("hex enc:      {}", view.hex);
                println!("base64 enc:   {}", view.base64);
                match view.entity {
                    Some(entity) => println!("tag value:    {} ({})", view.tag, entity),
                    None => println!("tag value:    {}", view.tag),
                }
                println!("time(string): {}", view.time);
                println!("time(micros): {}", view.time_micros);
            }
        }
        Ok(())
    }
}

/// Decodes `input`, picking the encoding from its length.
pub(super) fn describe(input: &str) -> Result<DecodedView> {
    let trimmed = input.trim().trim_end_matches('=');
    let id = match trimmed.len() {
        0 => return Err(CliError::MissingRefId.into()),
        ENCODED_LEN => RefId::parse(trimmed)?,
        HEX_LEN => RefId::from_hex_string(trimmed)?,
        BASE64_LEN => RefId::from_base64_string(trimmed)?,
        other => return Err(CliError::UnrecognizedLength(other).into()),
    };
    debug!(input = trimmed, tag = id.tag(), "decoded refid");

    let time = id.time();
    Ok(DecodedView {
        native: encode(&id, Base::Native),
        hex: encode(&id, Base::Hex),
        base64: encode(&id, Base::Base64),
        tag: id.tag(),
        entity: entity_name(id.tag()),
        time: time.to_rfc3339_opts(SecondsFormat::Secs, true),
        time_micros: time.timestamp_micros(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIVE: &str = "040baxr70ja4ggc0jbgw5dzx7vb52";

    #[test]
    fn test_describe_native() {
        let view = describe(NATIVE).unwrap();
        assert_eq!(view.native, NATIVE);
        assert_eq!(view.hex, "0100b57707049448418092e1c2b7fd3ed651");
        assert_eq!(view.tag, 1);
        assert_eq!(view.entity, Some("User"));
        assert_eq!(view.time_micros, 0xb577_0704_9448 * 1000);
    }

    #[test]
    fn test_all_encodings_describe_the_same_id() {
        let native = describe(NATIVE).unwrap();
        assert_eq!(describe(&native.hex).unwrap(), native);
        assert_eq!(describe(&native.base64).unwrap(), native);
        assert_eq!(describe(&format!("{}==", native.base64)).unwrap(), native);
        assert_eq!(describe(&NATIVE.to_uppercase()).unwrap(), native);
    }

    #[test]
    fn test_untagged_has_no_entity() {
        let view = describe("000baxr70ja4ggc0jbgw5dzx7vb52").unwrap();
        assert_eq!(view.tag, 0);
        assert_eq!(view.entity, None);
    }

    #[test]
    fn test_rejects_empty_and_odd_lengths() {
        let err = describe("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::MissingRefId)
        ));

        let err = describe("abc").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnrecognizedLength(3))
        ));
    }

    #[test]
    fn test_bad_symbols_surface_refid_error() {
        let err = describe("u40baxr70ja4ggc0jbgw5dzx7vb52").unwrap_err();
        assert!(err
            .downcast_ref::<icbt_refid::RefIdError>()
            .is_some_and(|e| e.is_decode_error()));
    }
}
