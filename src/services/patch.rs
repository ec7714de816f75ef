//! Pure text transforms used by the target handlers.
//!
//! Every rule is first-match: each target file is expected to contain
//! exactly one instance of the construct being patched. Callers own all
//! file I/O and map a `None` (pattern missing) to the structured field
//! error for the file they are patching.

use regex::{Captures, Regex};

/// Replace the first match of `pattern` with the output of `rewrite`.
pub fn replace_first(
    content: &str,
    pattern: &Regex,
    rewrite: impl FnOnce(&Captures<'_>) -> String,
) -> Option<String> {
    let caps = pattern.captures(content)?;
    let matched = caps.get(0)?;

    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..matched.start()]);
    out.push_str(&rewrite(&caps));
    out.push_str(&content[matched.end()..]);
    Some(out)
}

/// Rewrite the first quoted value matched by `pattern`, preserving the
/// quote character that delimited the original value.
///
/// The pattern must capture the text up to the opening quote as group 1
/// and the quote character itself (single, double, or backtick) as group
/// 2, with the whole match ending at the closing quote.
pub fn set_quoted_value(content: &str, pattern: &Regex, value: &str) -> Option<String> {
    replace_first(content, pattern, |caps| {
        let quote = &caps[2];
        format!("{}{}{}{}", &caps[1], quote, value, quote)
    })
}

/// Insert `insertion` immediately after the first match of `anchor`.
pub fn insert_after(content: &str, anchor: &Regex, insertion: &str) -> Option<String> {
    let matched = anchor.find(content)?;

    let mut out = String::with_capacity(content.len() + insertion.len());
    out.push_str(&content[..matched.end()]);
    out.push_str(insertion);
    out.push_str(&content[matched.end()..]);
    Some(out)
}
