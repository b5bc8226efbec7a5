//! URL to filesystem path resolution for the static asset handler.

use std::path::{Path, PathBuf};

/// Resolve a /static/ URL tail to a file under the static root.
///
/// Returns None for anything that is not an existing regular file inside
/// the root, including traversal attempts.
pub fn resolve_static(url_tail: &str, static_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url_tail);

    // Reject paths with suspicious patterns early
    if clean.is_empty() || clean.contains("..") {
        return None;
    }

    let local = static_root.join(&clean);

    // Canonicalize to resolve symlinks and verify the path stays under the
    // static root. This catches traversal via symlinks or encoded sequences
    let canonical = local.canonicalize().ok()?;
    let root_canonical = static_root.canonicalize().ok()?;

    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    canonical.is_file().then_some(canonical)
}

/// Normalize URL: decode, strip query string, trim slashes
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}
