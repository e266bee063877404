use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::props::AnchorAttrs;

/// Class prefix used when no `ButtonTheme` is in context.
pub const DEFAULT_CLASS_PREFIX: &str = "bp5";

/// Class naming for `AnchorButton`, supplied with `provide_context`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonTheme {
    pub prefix: String,
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

/// Run `on_click` unless the button is inert. Returns whether it ran.
fn forward_click<E: 'static>(inert: bool, on_click: Option<&Callback<E>>, ev: E) -> bool {
    match on_click {
        Some(callback) if !inert => {
            callback.run(ev);
            true
        }
        _ => false,
    }
}

#[component]
fn Icon(prefix: String, name: String) -> impl IntoView {
    let class = format!("{prefix}-icon {prefix}-icon-{name}");
    view! { <span class=class aria-hidden="true"></span> }
}

/// A link that looks like a button.
///
/// Disabled and loading buttons drop their `href`, leave the tab order and
/// swallow clicks. `content` renders after `attrs.text` in the label span.
#[component]
pub fn AnchorButton(
    attrs: AnchorAttrs,
    #[prop(optional_no_strip)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional_no_strip)] content: Option<AnyView>,
) -> impl IntoView {
    let prefix = use_context::<ButtonTheme>().unwrap_or_default().prefix;

    let inert = attrs.is_inert();
    let class = attrs.class_list(&prefix);
    let tab_index = attrs.effective_tab_index().to_string();
    let href = (!inert).then(|| attrs.href.clone());
    let aria_disabled = inert.then_some("true");

    let handle_click = move |ev: MouseEvent| {
        if inert {
            ev.prevent_default();
        }
        forward_click(inert, on_click.as_ref(), ev);
    };

    let spinner = attrs
        .loading
        .then(|| view! { <span class=format!("{prefix}-button-spinner") aria-hidden="true"></span> });
    let left_icon = attrs.icon.clone().map(|name| view! { <Icon prefix=prefix.clone() name=name /> });
    let right_icon = attrs
        .right_icon
        .clone()
        .map(|name| view! { <Icon prefix=prefix.clone() name=name /> });

    // No text span at all when there's nothing to show
    let label = (attrs.text.is_some() || content.is_some()).then(|| {
        view! {
            <span class=format!("{prefix}-button-text")>
                {attrs.text.clone()}
                {content}
            </span>
        }
    });

    view! {
        <a
            role="button"
            class=class
            href=href
            target=attrs.target
            rel=attrs.rel
            id=attrs.id
            title=attrs.title
            aria-label=attrs.aria_label
            aria-disabled=aria_disabled
            tabindex=tab_index
            on:click=handle_click
        >
            {spinner}
            {left_icon}
            {label}
            {right_icon}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_callback(count: Arc<AtomicUsize>) -> Callback<u32> {
        Callback::new(move |n: u32| {
            count.fetch_add(n as usize, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_click_forwarded_when_active() {
        Owner::new().with(|| {
            let count = Arc::new(AtomicUsize::new(0));
            let callback = counting_callback(count.clone());

            assert!(forward_click(false, Some(&callback), 1));
            assert!(forward_click(false, Some(&callback), 2));
            assert_eq!(count.load(Ordering::SeqCst), 3);
        });
    }

    #[test]
    fn test_click_swallowed_when_inert() {
        Owner::new().with(|| {
            let count = Arc::new(AtomicUsize::new(0));
            let callback = counting_callback(count.clone());

            // Disabled and loading both make the button inert
            for attrs in [
                AnchorAttrs {
                    disabled: true,
                    ..Default::default()
                },
                AnchorAttrs {
                    loading: true,
                    ..Default::default()
                },
            ] {
                assert!(!forward_click(attrs.is_inert(), Some(&callback), 1));
            }
            assert_eq!(count.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_no_callback_is_noop() {
        assert!(!forward_click::<u32>(false, None, 1));
    }
}
