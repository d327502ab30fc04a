//! Context menu item model.
//!
//! A context menu template is a flat, ordered list of [`MenuItem`]s. Built-in
//! items are produced by the [`Actions`] catalog; callers may mix in their own
//! items, which usually have no identifier.
//!
//! ```ignore
//! use icy_context_menu_core::menu::MenuItem;
//!
//! let items = vec![
//!     MenuItem::new("Rainbow").on_click(|_item, _host| println!("🌈")),
//!     MenuItem::separator(),
//!     MenuItem::new("Unavailable").enabled(false),
//! ];
//! ```
//!
//! [`Actions`]: crate::action::Actions
use crate::action::Command;
use crate::host::Host;

use smol_str::SmolStr;

use std::fmt;
use std::sync::Arc;

/// Platform-specific menu item role.
///
/// Items with a role are expanded by the renderer into a native submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuRole {
    /// The system "Services" submenu (macOS).
    Services,
}

/// The concrete type of a [`MenuItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuKind {
    /// A regular, activatable entry.
    #[default]
    Normal,
    /// A separator/divider.
    Separator,
}

/// A function applied to the content an action operates on, right before the
/// action uses it.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    /// Creates a new [`Transform`].
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the [`Transform`] to the given content.
    #[must_use]
    pub fn apply(&self, content: &str) -> String {
        (self.0)(content)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// A custom activation handler for a [`MenuItem`].
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&MenuItem, &mut dyn Host) + Send + Sync>);

impl Callback {
    /// Creates a new [`Callback`].
    pub fn new(f: impl Fn(&MenuItem, &mut dyn Host) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invokes the [`Callback`] for the given item.
    pub fn call(&self, item: &MenuItem, host: &mut dyn Host) {
        (self.0)(item, host);
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// What happens when a [`MenuItem`] is activated.
#[derive(Debug, Clone, Default)]
pub enum Activation {
    /// Nothing. Used by separators, informational entries and role items.
    #[default]
    None,
    /// A built-in command, optionally transforming its content first.
    Command {
        /// The command to run.
        command: Command,
        /// The transform applied to the content of the command.
        transform: Option<Transform>,
    },
    /// A caller-supplied handler.
    Click(Callback),
}

/// An entry of a context menu template.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Stable identifier of the item, if any.
    ///
    /// Built-in items always have one; it is used to look up label overrides.
    pub id: Option<SmolStr>,
    /// The kind of item.
    pub kind: MenuKind,
    /// Text label.
    ///
    /// May contain the `{selection}` placeholder and `&` mnemonic markers.
    pub label: String,
    /// Whether the item can be activated.
    pub enabled: bool,
    /// Whether the item is part of the menu at all.
    pub visible: bool,
    /// Platform-specific role.
    pub role: Option<MenuRole>,
    /// What happens on activation.
    pub activation: Activation,
}

impl MenuItem {
    /// Creates a new, enabled and visible [`MenuItem`] with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            kind: MenuKind::Normal,
            label: label.into(),
            enabled: true,
            visible: true,
            role: None,
            activation: Activation::None,
        }
    }

    /// Creates a separator [`MenuItem`].
    #[must_use]
    pub fn separator() -> Self {
        Self {
            kind: MenuKind::Separator,
            ..Self::new(String::new())
        }
    }

    pub(crate) fn command(id: &'static str, label: &str, command: Command) -> Self {
        Self {
            activation: Activation::Command {
                command,
                transform: None,
            },
            ..Self::new(label).id(id)
        }
    }

    /// Sets the identifier of this item.
    #[must_use]
    pub fn id(mut self, id: impl Into<SmolStr>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets whether this item is enabled.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets whether this item is visible.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Sets the role of this item.
    #[must_use]
    pub fn with_role(mut self, role: MenuRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Sets the handler called when this item is activated.
    ///
    /// This replaces any built-in command the item had.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn(&MenuItem, &mut dyn Host) + Send + Sync + 'static) -> Self {
        self.activation = Activation::Click(Callback::new(f));
        self
    }

    /// Returns `true` if this item is a separator.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.kind == MenuKind::Separator
    }

    /// Returns `true` if this item has the given identifier.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Activates this item against the given [`Host`].
    ///
    /// Disabled items and separators do nothing.
    pub fn activate(&self, host: &mut dyn Host) {
        if !self.enabled || self.is_separator() {
            return;
        }

        match &self.activation {
            Activation::None => {}
            Activation::Command { command, transform } => {
                command.execute(transform.as_ref(), host);
            }
            Activation::Click(callback) => callback.call(self, host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host;

    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_separator_is_not_normal() {
        let separator = MenuItem::separator();
        assert!(separator.is_separator());
        assert!(separator.id.is_none());
        assert!(!MenuItem::new("Item").is_separator());
    }

    #[test]
    fn test_on_click_is_called() {
        static CLICKS: AtomicUsize = AtomicUsize::new(0);

        let item = MenuItem::new("Unicorn").on_click(|item, _host| {
            assert_eq!(item.label, "Unicorn");
            let _ = CLICKS.fetch_add(1, Ordering::SeqCst);
        });

        item.activate(&mut host::Null);
        assert_eq!(CLICKS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_item_is_not_activated() {
        static CLICKS: AtomicUsize = AtomicUsize::new(0);

        let item = MenuItem::new("Unicorn")
            .enabled(false)
            .on_click(|_item, _host| {
                let _ = CLICKS.fetch_add(1, Ordering::SeqCst);
            });

        item.activate(&mut host::Null);
        assert_eq!(CLICKS.load(Ordering::SeqCst), 0);
    }
}
