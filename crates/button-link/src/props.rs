//! Link button properties and their resolution into anchor attributes.
//!
//! `LinkProps` is what a caller hands to `LinkButton`; `AnchorAttrs` is the
//! fully resolved attribute set the `AnchorButton` primitive renders.
//! Resolution fills defaults, forces the new-tab safety attributes and,
//! under `Emphasis::Primary`, the primary intent.

use serde::Deserialize;

/// Browsing context every link button opens its target in.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// `rel` tokens that are always present: no `window.opener`, no `Referer`.
pub const SAFE_REL_TOKENS: [&str; 2] = ["noopener", "noreferrer"];

/// Tokens that would undo `SAFE_REL_TOKENS` and are never forwarded.
const UNSAFE_REL_TOKENS: [&str; 2] = ["opener", "referrer"];

/// `minimal` when the caller doesn't say otherwise.
pub const DEFAULT_MINIMAL: bool = true;

// ── Enumerations ──────────────────────────────────────────────────────────────

/// Visual intent of the button (colour scheme).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    None,
    Primary,
    Success,
    Warning,
    Danger,
}

impl Intent {
    /// Class suffix, `None` for the neutral intent.
    pub fn class_suffix(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Primary => Some("primary"),
            Self::Success => Some("success"),
            Self::Warning => Some("warning"),
            Self::Danger => Some("danger"),
        }
    }
}

/// Horizontal alignment of the text inside the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Whether the link button keeps the caller's intent or forces `Primary`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Inherit,
    Primary,
}

// ── Caller-facing properties ──────────────────────────────────────────────────

/// Everything the anchor primitive accepts besides `href`, `minimal`,
/// `target` and `rel`. Fields left at their default are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonOptions {
    pub intent: Option<Intent>,
    pub active: bool,
    pub disabled: bool,
    /// Shows a spinner and behaves as disabled.
    pub loading: bool,
    pub fill: bool,
    pub large: bool,
    pub small: bool,
    pub outlined: bool,
    /// Icon name, rendered before the text.
    pub icon: Option<String>,
    /// Icon name, rendered after the text.
    pub right_icon: Option<String>,
    /// Label rendered ahead of any children.
    pub text: Option<String>,
    pub align_text: Option<Alignment>,
    /// Extra classes, appended after the generated ones.
    pub class: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub aria_label: Option<String>,
    pub tab_index: Option<i32>,
    /// Additional `rel` tokens (e.g. `nofollow`). Appended to the safe ones.
    pub extra_rel: Vec<String>,
}

/// Property bag for one `LinkButton` render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkProps {
    pub href: String,
    pub minimal: Option<bool>,
    pub emphasis: Emphasis,
    pub options: ButtonOptions,
}

impl LinkProps {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = Some(minimal);
        self
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn options(mut self, options: ButtonOptions) -> Self {
        self.options = options;
        self
    }

    /// Fill defaults and apply the forced attributes.
    pub fn resolve(&self) -> AnchorAttrs {
        let o = &self.options;

        let intent = match self.emphasis {
            Emphasis::Inherit => o.intent.unwrap_or_default(),
            Emphasis::Primary => {
                if let Some(requested) = o.intent.filter(|i| *i != Intent::Primary) {
                    tracing::debug!(href = %self.href, ?requested, "primary link button ignores caller intent");
                }
                Intent::Primary
            }
        };

        AnchorAttrs {
            href: self.href.clone(),
            target: Some(NEW_CONTEXT_TARGET.to_string()),
            rel: Some(merge_rel(&o.extra_rel)),
            intent,
            minimal: self.minimal.unwrap_or(DEFAULT_MINIMAL),
            active: o.active,
            disabled: o.disabled,
            loading: o.loading,
            fill: o.fill,
            large: o.large,
            small: o.small,
            outlined: o.outlined,
            icon: o.icon.clone(),
            right_icon: o.right_icon.clone(),
            text: o.text.clone(),
            align_text: o.align_text.unwrap_or_default(),
            class: o.class.clone(),
            id: o.id.clone(),
            title: o.title.clone(),
            aria_label: o.aria_label.clone(),
            tab_index: o.tab_index,
        }
    }
}

/// Safe tokens first, then caller tokens: lowercased, deduplicated, with
/// anything that would re-enable opener/referrer dropped.
fn merge_rel(extra: &[String]) -> String {
    let mut tokens: Vec<String> = SAFE_REL_TOKENS.iter().map(|t| t.to_string()).collect();

    for token in extra.iter().flat_map(|s| s.split_whitespace()) {
        let token = token.to_ascii_lowercase();
        if UNSAFE_REL_TOKENS.contains(&token.as_str()) {
            tracing::debug!(%token, "dropping rel token that weakens new-tab isolation");
            continue;
        }
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }

    tokens.join(" ")
}

// ── Resolved attributes ───────────────────────────────────────────────────────

/// Attribute set rendered by `AnchorButton`.
///
/// Built by `LinkProps::resolve` for link buttons; `target` and `rel` are
/// optional here because the primitive itself doesn't require them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorAttrs {
    pub href: String,
    pub target: Option<String>,
    pub rel: Option<String>,
    pub intent: Intent,
    pub minimal: bool,
    pub active: bool,
    pub disabled: bool,
    pub loading: bool,
    pub fill: bool,
    pub large: bool,
    pub small: bool,
    pub outlined: bool,
    pub icon: Option<String>,
    pub right_icon: Option<String>,
    pub text: Option<String>,
    pub align_text: Alignment,
    pub class: Option<String>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub aria_label: Option<String>,
    pub tab_index: Option<i32>,
}

impl AnchorAttrs {
    /// Disabled and loading buttons don't navigate or take focus.
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }

    /// Space-separated class list using `prefix` (e.g. `bp5`).
    pub fn class_list(&self, prefix: &str) -> String {
        let mut classes = vec![format!("{prefix}-button")];

        let flags = [
            (self.minimal, "minimal"),
            (self.active, "active"),
            (self.disabled, "disabled"),
            (self.loading, "loading"),
            (self.fill, "fill"),
            (self.large, "large"),
            (self.small, "small"),
            (self.outlined, "outlined"),
        ];
        classes.extend(flags.iter().filter(|(on, _)| *on).map(|(_, name)| format!("{prefix}-{name}")));

        if let Some(intent) = self.intent.class_suffix() {
            classes.push(format!("{prefix}-intent-{intent}"));
        }
        match self.align_text {
            Alignment::Left => classes.push(format!("{prefix}-align-left")),
            Alignment::Right => classes.push(format!("{prefix}-align-right")),
            Alignment::Center => {}
        }
        if let Some(extra) = self.class.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            classes.push(extra.to_string());
        }

        classes.join(" ")
    }

    /// `tabindex` value: `-1` when inert, else the caller's or `0`.
    pub fn effective_tab_index(&self) -> i32 {
        if self.is_inert() { -1 } else { self.tab_index.unwrap_or(0) }
    }
}
