//! Textual and JSON rendering of a tokenization result, used by the tests
//! and the CLI's `--output` flag.

use hanmal_core::Token;

/// Joins each token's [`Token::render`] with a single space. `Space` tokens
/// render as the empty string, so a run of text with an original space
/// produces two adjacent joining spaces around it.
pub fn format_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::render)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders tokens as a JSON array, one object per token.
pub fn format_json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
