//! Prompt sanitization applied before content reaches the cloud provider.
//!
//! The transformation is a fixed sequence of string replacements. The order
//! is load-bearing: later steps re-process the output of earlier ones, and
//! the resulting quirks (periods spread apart by the blind punctuation
//! spacing, for example) are pinned by tests as literal behavior rather than
//! normalized away.

/// Unicode characters replaced with ASCII equivalents before dispatch.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{2026}", "..."), // ellipsis
    ("\u{201C}", "\""),  // curly double quotes
    ("\u{201D}", "\""),
    ("\u{2018}", "'"), // curly single quotes
    ("\u{2019}", "'"),
    ("\u{2014}", "-"), // em/en dash
    ("\u{2013}", "-"),
    ("\u{00B4}", "'"), // acute accent and backtick used as apostrophes
    ("`", "'"),
    ("\u{200B}", ""), // zero-width space
    ("\u{FEFF}", ""), // byte order mark
];

/// Collapse all whitespace runs to single spaces.
fn collapse_whitespace(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize message content for the cloud provider.
///
/// Pure, total, and deterministic; any string input produces a result.
/// Empty input returns an empty string.
pub fn sanitize(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    // Normalize whitespace and remove redundant spaces.
    let mut content = collapse_whitespace(content);

    // Replace problematic characters.
    for &(from, to) in REPLACEMENTS {
        content = content.replace(from, to);
    }

    // Ensure sentence spacing (blindly; decimals and abbreviations included).
    content = content
        .replace('.', ". ")
        .replace('!', "! ")
        .replace('?', "? ");

    // Collapse runs of four or more periods down to three.
    while content.contains("....") {
        content = content.replace("....", "...");
    }

    // Remove spaces that ended up before punctuation.
    content = content
        .replace(" ,", ",")
        .replace(" .", ".")
        .replace(" !", "!")
        .replace(" ?", "?");

    // Re-apply spacing after every punctuation mark.
    for punct in [".", ",", "!", "?", ":", ";"] {
        content = content.replace(punct, &format!("{punct} "));
    }

    collapse_whitespace(&content)
}
