mod anchor_button;
mod link_button;

pub use anchor_button::{AnchorButton, ButtonTheme, DEFAULT_CLASS_PREFIX};
pub use link_button::LinkButton;
