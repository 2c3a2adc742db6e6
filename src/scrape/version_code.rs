//! Version-code extraction shared by the version-list and variant parsers

/// Extracts the first run of decimal digits in `text` as a version code.
///
/// Works the same on free-form labels ("versionCode 12345") and on clean
/// numeric strings ("12345"). Returns 0 when there are no digits, or when the
/// run is too long to fit in a `u64`; a partial value is never returned.
pub fn extract_version_code(text: &str) -> u64 {
    let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
        return 0;
    };
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    rest[..end].parse().unwrap_or(0)
}
