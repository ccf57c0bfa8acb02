//! Preparation of raw text for scanning.

use alloc::string::String;

/// Punctuation removed by [`normalize()`].
pub const PUNCTUATION: &str = "!()-[]{};:'\"\\,<>./?@#$%^&*_~";

/// Normalize `input` for scanning by removing punctuation and lowercasing what remains.
///
/// Punctuation is removed rather than replaced, so it joins the characters on either side: `"x-ray"`
/// becomes `"xray"`. Characters that are neither punctuation nor letters, such as digits, tabs, or
/// newlines, are left in place.
///
/// # Example
/// ```
/// use word_class::normalize;
///
/// assert_eq!(normalize("Fast, FASTER... fastest!"), "fast faster fastest");
/// assert_eq!(normalize("Don't stop"), "dont stop");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !PUNCTUATION.contains(*c))
        .collect::<String>()
        .to_lowercase()
}
