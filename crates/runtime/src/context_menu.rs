//! Attach context menus to windows.
//!
//! A [`ContextMenu`] keeps an explicit registry of the windows it listens to.
//! The host forwards window lifecycle and right-click events to it:
//!
//! ```ignore
//! use icy_context_menu_runtime::{ContextMenu, Options};
//!
//! let mut context_menu = ContextMenu::install(Options::new(), environment, open_windows)?;
//!
//! // A new window was opened
//! context_menu.window_created(id);
//!
//! // A window received a right-click
//! context_menu.show(id, &context, &mut native_menu);
//!
//! // A window is closing
//! context_menu.detach(id);
//! ```
use crate::Renderer;
use crate::core::context::Context;
use crate::core::environment::Environment;
use crate::core::menu::MenuItem;
use crate::core::window;
use crate::error::{Error, Result};
use crate::options::{Options, Target};

use rustc_hash::FxHashMap;

use std::sync::atomic::{self, AtomicU64};

static COUNT: AtomicU64 = AtomicU64::new(0);

/// The handle of a window subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Listener(u64);

impl Listener {
    fn unique() -> Self {
        Self(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// A context menu attached to one or more windows.
#[derive(Debug)]
pub struct ContextMenu {
    options: Options,
    environment: Environment,
    listeners: FxHashMap<window::Id, Listener>,
    is_disposed: bool,
}

impl ContextMenu {
    /// Installs a context menu with the given [`Options`].
    ///
    /// With [`Target::All`], every window in `windows` is attached right away;
    /// windows opened later are attached through
    /// [`ContextMenu::window_created`]. With [`Target::Window`], only the
    /// targeted window is attached and `windows` is ignored.
    ///
    /// Fails with [`Error::NotPermitted`] if the [`Environment`] cannot build
    /// native menus.
    pub fn install(
        options: Options,
        environment: Environment,
        windows: impl IntoIterator<Item = window::Id>,
    ) -> Result<Self> {
        if !environment.can_build_native_menus {
            return Err(Error::NotPermitted);
        }

        let mut context_menu = Self {
            options,
            environment,
            listeners: FxHashMap::default(),
            is_disposed: false,
        };

        match context_menu.options.target() {
            Target::All => {
                for window in windows {
                    let _ = context_menu.attach(window)?;
                }
            }
            Target::Window(window) => {
                let _ = context_menu.attach(window)?;
            }
        }

        Ok(context_menu)
    }

    /// Returns the [`Options`] of the context menu.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the [`Environment`] of the context menu.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Attaches the context menu to the given window.
    ///
    /// Returns `false` if the window was already attached.
    pub fn attach(&mut self, window: window::Id) -> Result<bool> {
        if self.is_disposed {
            return Err(Error::Disposed);
        }

        if self.listeners.contains_key(&window) {
            return Ok(false);
        }

        let listener = Listener::unique();
        let _ = self.listeners.insert(window, listener);

        log::debug!("Attached context menu to window {window} ({listener:?})");

        Ok(true)
    }

    /// Notifies the context menu that a window was created (or an embedded
    /// view finished loading).
    ///
    /// The window is attached if it is targeted. Returns whether it was newly
    /// attached.
    pub fn window_created(&mut self, window: window::Id) -> bool {
        if self.is_disposed {
            log::warn!("Ignoring window {window} created after disposal");
            return false;
        }

        if !self.options.target().matches(window) {
            return false;
        }

        self.attach(window).unwrap_or(false)
    }

    /// Detaches the context menu from the given window.
    ///
    /// Detaching a window that is not attached does nothing. Returns whether
    /// the window was attached.
    pub fn detach(&mut self, window: window::Id) -> bool {
        match self.listeners.remove(&window) {
            Some(listener) => {
                log::debug!("Detached context menu from window {window} ({listener:?})");
                true
            }
            None => false,
        }
    }

    /// Detaches every window and stops attaching new ones.
    ///
    /// Calling it more than once has no further effect.
    pub fn dispose(&mut self) {
        if !self.is_disposed {
            log::debug!("Disposing context menu of {} windows", self.listeners.len());
        }

        self.listeners.clear();
        self.is_disposed = true;
    }

    /// Returns whether the context menu was disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.is_disposed
    }

    /// Returns whether the given window is attached.
    #[must_use]
    pub fn is_attached(&self, window: window::Id) -> bool {
        self.listeners.contains_key(&window)
    }

    /// Returns the [`Listener`] of the given window, if attached.
    #[must_use]
    pub fn listener(&self, window: window::Id) -> Option<Listener> {
        self.listeners.get(&window).copied()
    }

    /// Returns the attached windows, in no particular order.
    pub fn windows(&self) -> impl Iterator<Item = window::Id> + '_ {
        self.listeners.keys().copied()
    }

    /// Builds the template for a right-click in the given window.
    ///
    /// Returns `None` if the window is not attached or the
    /// [`Options::should_show_menu`] gate refuses the right-click. The
    /// returned template may be empty.
    #[must_use]
    pub fn build(&self, window: window::Id, context: &Context) -> Option<Vec<MenuItem>> {
        if !self.is_attached(window) {
            return None;
        }

        if !self.options.allows(window, context) {
            log::trace!("Context menu of window {window} suppressed");
            return None;
        }

        Some(
            self.options
                .composer()
                .compose(context, self.environment, window),
        )
    }

    /// Handles a right-click in the given window, popping up the menu with
    /// the given [`Renderer`].
    ///
    /// Nothing is shown if [`ContextMenu::build`] returns `None` or an empty
    /// template. Returns whether a menu was shown.
    pub fn show(
        &self,
        window: window::Id,
        context: &Context,
        renderer: &mut impl Renderer,
    ) -> bool {
        let Some(template) = self.build(window, context) else {
            return false;
        };

        if template.is_empty() {
            return false;
        }

        self.options.notify_show(window);
        renderer.popup(window, &template);
        self.options.notify_close(window);

        true
    }
}
