use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::LinkButton;
use crate::config::GalleryConfig;

/// Renders every configured link button.
#[component]
pub fn GalleryPage() -> impl IntoView {
    // Route listing runs the app without the server's context
    let config = use_context::<GalleryConfig>().unwrap_or_default();
    provide_context(config.theme.clone());

    let title = config.title.clone();
    let buttons = config
        .links
        .into_iter()
        .map(|entry| {
            let props = entry.to_props();
            view! {
                <li class="gallery-item">
                    <LinkButton
                        href=props.href
                        minimal=entry.minimal
                        emphasis=props.emphasis
                        options=props.options
                    >
                        {entry.label}
                    </LinkButton>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text=title.clone() />
        <main class="gallery">
            <h1>{title}</h1>
            <ul class="gallery-list">{buttons}</ul>
        </main>
    }
}
