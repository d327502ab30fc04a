//! The runtime of icy_context_menu.
//!
//! It keeps track of the windows a context menu is attached to and hands
//! composed templates to a native [`Renderer`].
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_context_menu_core as core;

pub mod context_menu;
pub mod options;
pub mod renderer;

mod error;

pub use context_menu::{ContextMenu, Listener};
pub use error::{Error, Result};
pub use options::{Options, Target};
pub use renderer::Renderer;
