use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::AnchorButton;
use crate::props::{ButtonOptions, Emphasis, LinkProps};

/// Button-styled link that opens `href` in a new tab.
///
/// `minimal` defaults to `true`. `target="_blank"` and
/// `rel="noopener noreferrer"` are always set; `ButtonOptions` has no field
/// that can replace them. With `emphasis=Emphasis::Primary` the intent is
/// always primary.
#[component]
pub fn LinkButton(
    /// Navigation target, forwarded as-is
    #[prop(into)]
    href: String,
    #[prop(optional)] minimal: Option<bool>,
    #[prop(optional)] emphasis: Emphasis,
    /// Everything else the anchor primitive understands
    #[prop(optional)]
    options: ButtonOptions,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let attrs = LinkProps {
        href,
        minimal,
        emphasis,
        options,
    }
    .resolve();

    view! { <AnchorButton attrs=attrs on_click=on_click content=children.map(|c| c()) /> }
}
