//! A composable right-click context menu.
//!
//! Right-clicking a window produces a [`Context`] snapshot. The menu is
//! composed from it on demand: built-in [`Actions`] are filtered by what the
//! snapshot supports, decorated with your own items and labels, and normalized
//! so separators never pile up.
//!
//! # Getting started
//! Install a [`ContextMenu`] with some [`Options`] and forward window events to it:
//!
//! ```ignore
//! use icy_context_menu::{Options, Show};
//!
//! let mut context_menu = icy_context_menu::install(
//!     Options::new()
//!         .show(Show {
//!             save_image_as: true,
//!             ..Show::default()
//!         })
//!         .prepend(|_actions, context, _window| {
//!             vec![
//!                 icy_context_menu::MenuItem::new("Search Google for “{selection}”")
//!                     .visible(!context.selection_text.trim().is_empty()),
//!             ]
//!         }),
//!     [window::Id::MAIN],
//! )?;
//!
//! context_menu.show(window, &context, &mut native_menu);
//! ```
//!
//! [`Context`]: core::Context
//! [`Actions`]: core::Actions
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/iced-rs/iced/9ab6923e943f784985e9ef9ca28b10278297225d/docs/logo.svg"
)]
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_context_menu_core as core;
pub use icy_context_menu_runtime as runtime;

pub use crate::core::action;
pub use crate::core::context;
pub use crate::core::host;
pub use crate::core::label;
pub use crate::core::menu;
pub use crate::core::template;
pub use crate::core::window;
pub use crate::core::{
    Action, Actions, Context, Decoration, EditFlags, Environment, Host, MediaType, MenuItem,
    Point, Show,
};
pub use crate::runtime::{ContextMenu, Error, Options, Renderer, Result, Target};

/// Installs a [`ContextMenu`] for the [`Environment`] of the running process.
///
/// `windows` are the windows that are already open. [`Environment::current`]
/// assumes native menus can be built, so this never fails with
/// [`Error::NotPermitted`]; processes that may not build menus (e.g. a
/// sandboxed renderer) should describe themselves with [`install_with`].
pub fn install(
    options: Options,
    windows: impl IntoIterator<Item = window::Id>,
) -> Result<ContextMenu> {
    install_with(options, Environment::current(), windows)
}

/// Installs a [`ContextMenu`] for the given [`Environment`].
///
/// Fails with [`Error::NotPermitted`] if the [`Environment`] cannot build
/// native menus. See [`ContextMenu::install`].
pub fn install_with(
    options: Options,
    environment: Environment,
    windows: impl IntoIterator<Item = window::Id>,
) -> Result<ContextMenu> {
    ContextMenu::install(options, environment, windows)
}
