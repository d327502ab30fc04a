//! Configure a context menu.
use crate::core::action::Actions;
use crate::core::context::Context;
use crate::core::menu::MenuItem;
use crate::core::template::{Composer, Show};
use crate::core::window;

use smol_str::SmolStr;

use std::fmt;
use std::sync::Arc;

/// Decides whether a menu is shown for a right-click.
pub type Gate = Arc<dyn Fn(window::Id, &Context) -> bool + Send + Sync>;

/// Notifies about the lifecycle of a shown menu.
pub type Notify = Arc<dyn Fn(window::Id) + Send + Sync>;

/// The windows a context menu is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// Every existing and future window.
    #[default]
    All,
    /// A single window.
    Window(window::Id),
}

impl Target {
    /// Returns `true` if the given window is targeted.
    #[must_use]
    pub fn matches(self, window: window::Id) -> bool {
        match self {
            Target::All => true,
            Target::Window(target) => target == window,
        }
    }
}

/// The configuration of a context menu.
#[derive(Clone, Default)]
pub struct Options {
    composer: Composer,
    target: Target,
    should_show_menu: Option<Gate>,
    on_show: Option<Notify>,
    on_close: Option<Notify>,
}

impl Options {
    /// Creates the default [`Options`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the context menu to the given window only.
    ///
    /// By default, every existing and future window gets one.
    #[must_use]
    pub fn window(mut self, window: window::Id) -> Self {
        self.target = Target::Window(window);
        self
    }

    /// Sets which optional built-in actions are shown.
    #[must_use]
    pub fn show(mut self, show: Show) -> Self {
        self.composer = self.composer.show(show);
        self
    }

    /// Overrides the label of the item with the given identifier.
    ///
    /// Useful for i18n.
    #[must_use]
    pub fn label(mut self, id: impl Into<SmolStr>, label: impl Into<String>) -> Self {
        self.composer = self.composer.label(id, label);
        self
    }

    /// Overrides the labels of multiple items.
    #[must_use]
    pub fn labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<SmolStr>,
        V: Into<String>,
    {
        self.composer = self.composer.labels(labels);
        self
    }

    /// Replaces the default menu entirely.
    ///
    /// The [`Show`] toggles are ignored; compose the items you need from
    /// the given [`Actions`].
    #[must_use]
    pub fn menu(
        mut self,
        f: impl Fn(&Actions<'_>, &Context, window::Id) -> Vec<MenuItem> + Send + Sync + 'static,
    ) -> Self {
        self.composer = self.composer.menu(f);
        self
    }

    /// Adds items in front of the menu.
    #[must_use]
    pub fn prepend(
        mut self,
        f: impl Fn(&Actions<'_>, &Context, window::Id) -> Vec<MenuItem> + Send + Sync + 'static,
    ) -> Self {
        self.composer = self.composer.prepend(f);
        self
    }

    /// Adds items at the end of the menu.
    #[must_use]
    pub fn append(
        mut self,
        f: impl Fn(&Actions<'_>, &Context, window::Id) -> Vec<MenuItem> + Send + Sync + 'static,
    ) -> Self {
        self.composer = self.composer.append(f);
        self
    }

    /// Determines whether or not to show the menu.
    ///
    /// Returning `false` skips the right-click entirely; no template is
    /// built.
    ///
    /// ```ignore
    /// // Doesn't show the menu if the element is editable
    /// Options::new().should_show_menu(|_window, context| !context.is_editable)
    /// ```
    #[must_use]
    pub fn should_show_menu(
        mut self,
        f: impl Fn(window::Id, &Context) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_show_menu = Some(Arc::new(f));
        self
    }

    /// Called right before a menu pops up.
    #[must_use]
    pub fn on_show(mut self, f: impl Fn(window::Id) + Send + Sync + 'static) -> Self {
        self.on_show = Some(Arc::new(f));
        self
    }

    /// Called once a menu was closed.
    #[must_use]
    pub fn on_close(mut self, f: impl Fn(window::Id) + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(f));
        self
    }

    /// Returns the [`Composer`] of these options.
    #[must_use]
    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Returns the [`Target`] of these options.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    pub(crate) fn allows(&self, window: window::Id, context: &Context) -> bool {
        self.should_show_menu
            .as_ref()
            .is_none_or(|should_show_menu| should_show_menu(window, context))
    }

    pub(crate) fn notify_show(&self, window: window::Id) {
        if let Some(on_show) = &self.on_show {
            on_show(window);
        }
    }

    pub(crate) fn notify_close(&self, window: window::Id) {
        if let Some(on_close) = &self.on_close {
            on_close(window);
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("composer", &self.composer)
            .field("target", &self.target)
            .field("should_show_menu", &self.should_show_menu.is_some())
            .field("on_show", &self.on_show.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_matches() {
        let window = window::Id::unique();

        assert!(Target::All.matches(window));
        assert!(Target::Window(window).matches(window));
        assert!(!Target::Window(window).matches(window::Id::MAIN));
    }

    #[test]
    fn test_gate_defaults_to_allow() {
        let context = Context::default();

        assert!(Options::new().allows(window::Id::MAIN, &context));
        assert!(
            !Options::new()
                .should_show_menu(|_, context| context.is_editable)
                .allows(window::Id::MAIN, &context)
        );
    }
}
