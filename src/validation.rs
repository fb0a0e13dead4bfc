//! Input validation for kvgen CLI arguments.
//!
//! The output format is unescaped, so a block name containing quotes,
//! braces, or whitespace would produce a file the downstream parser
//! cannot read back. These checks reject such names at parse time.

use anyhow::{bail, Result};

/// Maximum allowed length for block names.
pub const MAX_BLOCK_NAME_LENGTH: usize = 128;

/// Validates that a block name is safe to emit verbatim.
///
/// A name is valid if:
/// - It is not empty
/// - It is no longer than MAX_BLOCK_NAME_LENGTH characters
/// - It contains only printable ASCII characters
/// - It contains no quotes, braces, or whitespace
pub fn validate_block_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Block name cannot be empty");
    }

    if name.len() > MAX_BLOCK_NAME_LENGTH {
        bail!(
            "Block name too long: {} characters (max {})",
            name.len(),
            MAX_BLOCK_NAME_LENGTH
        );
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_graphic() && !matches!(c, '"' | '{' | '}'));
    if !valid_chars {
        bail!(
            "Block name '{name}' contains invalid characters. \
             Use printable ASCII without quotes, braces, or whitespace"
        );
    }

    Ok(())
}

/// Clap value parser for the block name argument.
pub fn clap_block_name_validator(s: &str) -> Result<String, String> {
    validate_block_name(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}

/// Clap value parser for the entry count argument.
///
/// Zero is accepted: it produces a block with no entries.
pub fn clap_count_validator(s: &str) -> Result<u64, String> {
    s.parse::<u64>()
        .map_err(|_| format!("Invalid entry count '{s}': expected a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_block_names() {
        assert!(validate_block_name("test").is_ok());
        assert!(validate_block_name("block-01").is_ok());
        assert!(validate_block_name("Settings_v2").is_ok());
        assert!(validate_block_name("a").is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(validate_block_name("").is_err());
    }

    #[test]
    fn test_format_breaking_characters_rejected() {
        assert!(validate_block_name("has space").is_err());
        assert!(validate_block_name("tab\there").is_err());
        assert!(validate_block_name("quo\"te").is_err());
        assert!(validate_block_name("open{").is_err());
        assert!(validate_block_name("close}").is_err());
        assert!(validate_block_name("two\nlines").is_err());
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(validate_block_name("blöck").is_err());
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = "a".repeat(MAX_BLOCK_NAME_LENGTH);
        assert!(validate_block_name(&at_limit).is_ok());

        let over_limit = "a".repeat(MAX_BLOCK_NAME_LENGTH + 1);
        assert!(validate_block_name(&over_limit).is_err());
    }

    #[test]
    fn test_count_validator() {
        assert_eq!(clap_count_validator("0"), Ok(0));
        assert_eq!(clap_count_validator("9999999"), Ok(9_999_999));
        assert!(clap_count_validator("-1").is_err());
        assert!(clap_count_validator("ten").is_err());
        assert!(clap_count_validator("").is_err());
    }
}
