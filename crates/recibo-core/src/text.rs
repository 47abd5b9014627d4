//! Text normalization applied before classification and extraction.

/// Normalize raw OCR or PDF-layer text.
///
/// Canonicalizes CR/LF variants to `\n`, trims every line, drops lines that
/// are empty after trimming, and rejoins with `\n`. Idempotent:
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
