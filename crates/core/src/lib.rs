//! The core of icy_context_menu: the right-click [`Context`], the catalog of
//! built-in [`Actions`] and the template [`Composer`].
//!
//! Nothing in this crate performs I/O. Templates are plain data; side effects
//! only happen when a [`MenuItem`] is activated against a [`Host`].
//!
//! [`Context`]: context::Context
//! [`Actions`]: action::Actions
//! [`Composer`]: template::Composer
//! [`MenuItem`]: menu::MenuItem
//! [`Host`]: host::Host
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod action;
pub mod context;
pub mod environment;
pub mod host;
pub mod label;
pub mod menu;
pub mod template;
pub mod window;

pub use action::{Action, Actions, Command, Decoration};
pub use context::{Context, EditFlags, MediaType, Point};
pub use environment::Environment;
pub use host::Host;
pub use menu::{Activation, Callback, MenuItem, MenuKind, MenuRole, Transform};
pub use template::{Composer, Show};
