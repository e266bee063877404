//! Read the gallery TOML: page title, theme and the link buttons to show.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::components::{ButtonTheme, DEFAULT_CLASS_PREFIX};
use crate::props::{ButtonOptions, DEFAULT_MINIMAL, Emphasis, Intent, LinkProps};

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    theme: Option<ThemeSection>,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeSection {
    prefix: String,
}

fn default_title() -> String {
    "Link buttons".to_string()
}

fn default_minimal() -> bool {
    DEFAULT_MINIMAL
}

// ── Public config ─────────────────────────────────────────────────────────────

/// One button on the gallery page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkEntry {
    pub href: String,
    pub label: String,
    #[serde(default = "default_minimal")]
    pub minimal: bool,
    #[serde(default)]
    pub emphasis: Emphasis,
    #[serde(default)]
    pub intent: Option<Intent>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Extra `rel` tokens on top of `noopener noreferrer`.
    #[serde(default)]
    pub rel: Vec<String>,
}

impl LinkEntry {
    pub fn to_props(&self) -> LinkProps {
        LinkProps::new(self.href.clone())
            .minimal(self.minimal)
            .emphasis(self.emphasis)
            .options(ButtonOptions {
                intent: self.intent,
                icon: self.icon.clone(),
                disabled: self.disabled,
                extra_rel: self.rel.clone(),
                ..Default::default()
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub title: String,
    pub theme: ButtonTheme,
    pub links: Vec<LinkEntry>,
}

impl GalleryConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read gallery config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse gallery config: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content)?;

        let theme = match file.theme {
            Some(t) if t.prefix.trim().is_empty() => anyhow::bail!("theme.prefix must not be empty"),
            Some(t) => ButtonTheme {
                prefix: t.prefix.trim().to_string(),
            },
            None => ButtonTheme::default(),
        };

        Ok(Self {
            title: file.title,
            theme,
            links: file.links,
        })
    }
}

impl Default for GalleryConfig {
    /// Sample page served when no config file is given.
    fn default() -> Self {
        let entry = |href: &str, label: &str| LinkEntry {
            href: href.to_string(),
            label: label.to_string(),
            minimal: DEFAULT_MINIMAL,
            emphasis: Emphasis::Inherit,
            intent: None,
            icon: None,
            disabled: false,
            rel: Vec::new(),
        };

        Self {
            title: default_title(),
            theme: ButtonTheme {
                prefix: DEFAULT_CLASS_PREFIX.to_string(),
            },
            links: vec![
                entry("https://leptos.dev", "Leptos"),
                LinkEntry {
                    emphasis: Emphasis::Primary,
                    minimal: false,
                    icon: Some("share".to_string()),
                    ..entry("https://blueprintjs.com/docs/", "Blueprint docs")
                },
                LinkEntry {
                    intent: Some(Intent::Warning),
                    disabled: true,
                    ..entry("https://example.com", "Unavailable")
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_defaults() {
        let cfg = GalleryConfig::parse(
            r#"
            [[links]]
            href = "/docs"
            label = "Read the docs"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.title, "Link buttons");
        assert_eq!(cfg.theme.prefix, "bp5");
        assert_eq!(cfg.links.len(), 1);

        let link = &cfg.links[0];
        assert!(link.minimal);
        assert_eq!(link.emphasis, Emphasis::Inherit);
        assert_eq!(link.intent, None);
        assert!(link.rel.is_empty());
    }

    #[test]
    fn test_parse_full_entry() {
        let cfg = GalleryConfig::parse(
            r#"
            title = "Project links"

            [theme]
            prefix = "bp4"

            [[links]]
            href = "https://a.com"
            label = "A"
            minimal = false
            emphasis = "primary"
            intent = "danger"
            icon = "share"
            rel = ["nofollow"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.title, "Project links");
        assert_eq!(cfg.theme.prefix, "bp4");

        let attrs = cfg.links[0].to_props().resolve();
        assert!(!attrs.minimal);
        assert_eq!(attrs.intent, Intent::Primary);
        assert_eq!(attrs.icon.as_deref(), Some("share"));
        assert_eq!(attrs.rel.as_deref(), Some("noopener noreferrer nofollow"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        // `target` isn't configurable
        let err = GalleryConfig::parse(
            r#"
            [[links]]
            href = "/x"
            label = "X"
            target = "_self"
            "#,
        );
        assert!(err.is_err());

        assert!(GalleryConfig::parse("[[links]]\nhref = \"/x\"\nlabel = \"X\"\nintent = \"loud\"\n").is_err());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = GalleryConfig::parse("[theme]\nprefix = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("theme.prefix"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = \"From disk\"").unwrap();
        let cfg = GalleryConfig::load(file.path()).unwrap();
        assert_eq!(cfg.title, "From disk");
        assert!(cfg.links.is_empty());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = GalleryConfig::load(Path::new("/nonexistent/gallery.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/gallery.toml"));
    }

    #[test]
    fn test_default_gallery_has_primary_entry() {
        let cfg = GalleryConfig::default();
        assert!(cfg.links.iter().any(|l| l.emphasis == Emphasis::Primary));
    }
}
