//! Button-styled links that open in a new tab, rendered with Leptos.
//!
//! ```rust,ignore
//! view! {
//!     <LinkButton href="/docs">"Read the docs"</LinkButton>
//!     <LinkButton href="https://a.com" emphasis=Emphasis::Primary minimal=false />
//! }
//! ```

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod props;

pub use components::{AnchorButton, ButtonTheme, LinkButton};
pub use props::{Alignment, AnchorAttrs, ButtonOptions, Emphasis, Intent, LinkProps};
