//! Output formatting for CLI commands.

use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Print a single item in the specified format.
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", format_json(data)),
        OutputFormat::Text => println!("{}", format_json(data)),
    }
}

fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json_pretty() {
        #[derive(Serialize)]
        struct View {
            tag: u8,
        }

        assert_eq!(format_json(&View { tag: 1 }), "{\n  \"tag\": 1\n}");
    }
}
