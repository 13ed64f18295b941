//! Canonical formatting of player identifiers.
//!
//! Mojang sends profile ids without dashes (`069a79f444e94726a5befca90e38aaf5`)
//! while most consumers expect the dashed form
//! (`069a79f4-44e9-4726-a5be-fca90e38aaf5`). `format_uuid` converts the former
//! into the latter and leaves the latter untouched. Letter case is preserved.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;

static DASHED: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12}$")
        .expect("dashed uuid pattern is valid")
});

static UNDASHED: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-fA-F0-9]{8})([a-fA-F0-9]{4})([a-fA-F0-9]{4})([a-fA-F0-9]{4})([a-fA-F0-9]{12})$")
        .expect("undashed uuid pattern is valid")
});

/// `true` if `input` is a 36-character dashed hex identifier.
pub fn is_dashed_uuid(input: &str) -> bool {
    DASHED.is_match(input)
}

/// `true` if `input` is a 32-character hex identifier without dashes.
pub fn is_undashed_uuid(input: &str) -> bool {
    UNDASHED.is_match(input)
}

/// Format `input` into the dashed 8-4-4-4-12 form.
///
/// Returns `ApiError::InvalidFormat` if `input` matches neither the dashed
/// nor the undashed pattern.
pub fn format_uuid(input: &str) -> Result<String, ApiError> {
    if is_dashed_uuid(input) {
        return Ok(input.to_string());
    }
    match UNDASHED.captures(input) {
        Some(groups) => Ok(format!(
            "{}-{}-{}-{}-{}",
            &groups[1], &groups[2], &groups[3], &groups[4], &groups[5]
        )),
        None => Err(ApiError::InvalidFormat(input.to_string())),
    }
}
