//! Command lines in section bodies
//!
//! A command line may carry a trailing shell-style comment, e.g.
//! `/trigger home     # teleports to 'home'`. The comment is displayed but
//! never copied.

/// Split a command line into the command and its trailing comment.
///
/// A comment starts at the first `#` that follows whitespace; the whitespace
/// run before it belongs to neither part. A `#` glued to the preceding token,
/// as in `x#1`, stays in the command.
pub fn split_comment(line: &str) -> (&str, Option<&str>) {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'#' || i == 0 || !bytes[i - 1].is_ascii_whitespace() {
            continue;
        }
        let start = line[..i].trim_end().len();
        return (&line[..start], Some(line[i + 1..].trim()));
    }
    (line, None)
}

/// The text copied to the clipboard for a command line.
pub fn copy_text(line: &str) -> &str {
    split_comment(line).0
}
