//! Class list helper.

/// Join class fragments into a single `class` attribute value.
///
/// Fragments are trimmed and empty ones are skipped, so callers can pass an
/// optional extra class without special-casing it.
pub fn cn(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
