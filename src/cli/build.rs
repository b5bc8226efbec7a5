//! One-shot static build: render the page and write it to docs/index.html.

use crate::{
    config::{self, Paths},
    log, render,
};
use anyhow::{Context, Result};
use std::fs;

/// Load, render, write. Returns the byte length of the written page.
///
/// The output file is overwritten in place; there is no atomic replace, so
/// a failed write can leave a stale or partial file behind. Load and
/// render failures happen before anything touches the output path.
pub fn build_site(paths: &Paths) -> Result<usize> {
    let doc = config::load_document(&paths.config)?;
    let html = render::render_document(&doc)?;

    if let Some(parent) = paths.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    fs::write(&paths.output, &html)
        .with_context(|| format!("failed to write `{}`", paths.output.display()))?;

    log!("build"; "wrote {} ({} bytes)", paths.output.display(), html.len());
    Ok(html.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_sample_config(dir: &std::path::Path) -> PathBuf {
        let config = serde_json::json!({
            "meta": {"title": "Build Test Page", "favicon": "⚡"},
            "theme": {
                "primary_color": "#111", "secondary_color": "#222",
                "accent_color": "#333", "dark_bg": "#444", "card_bg": "#555",
                "text_color": "#666", "heading_color": "#777",
                "gradient_start": "#888", "gradient_end": "#999",
                "font_heading": "Inter"
            },
            "personal": {
                "name": "Grace Hopper", "title": "Rear Admiral",
                "tagline": "Ships are safe in harbor", "bio": "Compiler pioneer.",
                "email": "grace@example.com", "resume_link": "#"
            },
            "footer": {"copyright": "2026", "tagline": "On time."}
        });
        let path = dir.join("config.json");
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_build_writes_output_with_content() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::from_config_path(write_sample_config(dir.path()));

        let bytes = build_site(&paths).unwrap();

        let html = fs::read_to_string(dir.path().join("docs/index.html")).unwrap();
        assert_eq!(bytes, html.len());
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains("Build Test Page"));
    }

    #[test]
    fn test_build_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::from_config_path(write_sample_config(dir.path()));

        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/index.html"), "stale").unwrap();

        build_site(&paths).unwrap();
        let html = fs::read_to_string(dir.path().join("docs/index.html")).unwrap();
        assert!(html.contains("Grace Hopper"));
    }

    #[test]
    fn test_build_fails_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::from_config_path(dir.path().join("config.json"));

        assert!(build_site(&paths).is_err());
        assert!(!dir.path().join("docs/index.html").exists());
    }

    #[test]
    fn test_build_fails_on_missing_template_field() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = write_sample_config(dir.path());

        // Strip a template-required field
        let mut doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
        doc["personal"].as_object_mut().unwrap().remove("name");
        fs::write(&config_path, serde_json::to_string(&doc).unwrap()).unwrap();

        let paths = Paths::from_config_path(config_path);
        let err = build_site(&paths).unwrap_err();
        assert!(err.to_string().contains("personal.name"));
        assert!(!dir.path().join("docs/index.html").exists());
    }
}
