//! Compose context menu templates.
//!
//! A [`Composer`] turns a [`Context`] into the final, ordered list of
//! [`MenuItem`]s handed to a renderer:
//!
//! 1. The base template is either the default layout (gated by [`Show`]) or
//!    the output of a full override.
//! 2. Prepended and appended items are spliced around it.
//! 3. Hidden items are dropped and separators are [`normalize`]d.
//! 4. Label overrides and the `{selection}` placeholder are applied.
use crate::action::{Action, Actions, Decoration};
use crate::context::Context;
use crate::environment::Environment;
use crate::label;
use crate::menu::MenuItem;
use crate::window;

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use std::fmt;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// A caller-supplied function producing menu items for a right-click.
pub type Builder =
    Arc<dyn Fn(&Actions<'_>, &Context, window::Id) -> Vec<MenuItem> + Send + Sync>;

/// Which optional built-in actions appear in the default layout.
///
/// These toggles are ignored when a full override is configured with
/// [`Composer::menu`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Show {
    /// Show "Learn Spelling". Default: `true`.
    pub learn_spelling: bool,
    /// Show "Look Up “{selection}”". Default: `true`.
    pub look_up_selection: bool,
    /// Show "Search with Google". Default: `true`.
    pub search_with_google: bool,
    /// Show "Select All". Default: `true`.
    pub select_all: bool,
    /// Show "Save Image". Default: `false`.
    pub save_image: bool,
    /// Show "Save Image As…". Default: `false`.
    pub save_image_as: bool,
    /// Show "Copy Image". Default: `true`.
    pub copy_image: bool,
    /// Show "Copy Image Address". Default: `false`.
    pub copy_image_address: bool,
    /// Show "Save Video". Default: `false`.
    pub save_video: bool,
    /// Show "Save Video As…". Default: `false`.
    pub save_video_as: bool,
    /// Show "Copy Video Address". Default: `false`.
    pub copy_video_address: bool,
    /// Show "Copy Link". Default: `true`.
    pub copy_link: bool,
    /// Show "Save Link As…". Default: `false`.
    pub save_link_as: bool,
    /// Force "Inspect Element" on or off.
    ///
    /// Default: only in development, see [`Environment::is_development`].
    pub inspect_element: Option<bool>,
    /// Show the "Services" submenu. Default: `false`.
    pub services: bool,
}

impl Default for Show {
    fn default() -> Self {
        Self {
            learn_spelling: true,
            look_up_selection: true,
            search_with_google: true,
            select_all: true,
            save_image: false,
            save_image_as: false,
            copy_image: true,
            copy_image_address: false,
            save_video: false,
            save_video_as: false,
            copy_video_address: false,
            copy_link: true,
            save_link_as: false,
            inspect_element: None,
            services: false,
        }
    }
}

/// Builds context menu templates.
#[derive(Clone, Default)]
pub struct Composer {
    show: Show,
    labels: FxHashMap<SmolStr, String>,
    menu: Option<Builder>,
    prepend: Option<Builder>,
    append: Option<Builder>,
}

impl Composer {
    /// Creates a [`Composer`] with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which optional actions are shown.
    #[must_use]
    pub fn show(mut self, show: Show) -> Self {
        self.show = show;
        self
    }

    /// Overrides the label of the item with the given identifier.
    #[must_use]
    pub fn label(mut self, id: impl Into<SmolStr>, label: impl Into<String>) -> Self {
        let _ = self.labels.insert(id.into(), label.into());
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
        self.labels.extend(
            labels
                .into_iter()
                .map(|(id, label)| (id.into(), label.into())),
        );
        self
    }

    /// Replaces the default layout entirely.
    #[must_use]
    pub fn menu(
        mut self,
        f: impl Fn(&Actions<'_>, &Context, window::Id) -> Vec<MenuItem> + Send + Sync + 'static,
    ) -> Self {
        self.menu = Some(Arc::new(f));
        self
    }

    /// Adds items in front of the template.
    #[must_use]
    pub fn prepend(
        mut self,
        f: impl Fn(&Actions<'_>, &Context, window::Id) -> Vec<MenuItem> + Send + Sync + 'static,
    ) -> Self {
        self.prepend = Some(Arc::new(f));
        self
    }

    /// Adds items at the end of the template.
    #[must_use]
    pub fn append(
        mut self,
        f: impl Fn(&Actions<'_>, &Context, window::Id) -> Vec<MenuItem> + Send + Sync + 'static,
    ) -> Self {
        self.append = Some(Arc::new(f));
        self
    }

    /// Returns the label override for the given identifier, if any.
    #[must_use]
    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.labels
            .get(id)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Builds the final template for a right-click in the given window.
    pub fn compose(
        &self,
        context: &Context,
        environment: Environment,
        window: window::Id,
    ) -> Vec<MenuItem> {
        let actions = Actions::new(context, environment);

        let mut template = match &self.menu {
            Some(menu) => menu(&actions, context, window),
            None => self.default_layout(&actions),
        };

        if let Some(prepend) = &self.prepend {
            let mut items = prepend(&actions, context, window);
            items.append(&mut template);
            template = items;
        }

        if let Some(append) = &self.append {
            template.extend(append(&actions, context, window));
        }

        let mut template = normalize(template);
        let selection = context.trimmed_selection();

        for item in &mut template {
            if let Some(id) = &item.id {
                if let Some(label) = self.label_for(id) {
                    item.label = label.to_owned();
                }
            }

            if let Some(label) = label::substitute_selection(&item.label, selection) {
                item.label = label;
            }
        }

        log::trace!(
            "Composed context menu for window {window} with {} items",
            template.len()
        );

        template
    }

    fn default_layout(&self, actions: &Actions<'_>) -> Vec<MenuItem> {
        let show = &self.show;
        let inspect_element = show
            .inspect_element
            .unwrap_or(actions.environment().is_development);

        let optional = |enabled: bool, action: Action| {
            enabled.then(|| actions.build(action, Decoration::Default))
        };

        let mut template = vec![actions.separator()];
        template.extend(actions.dictionary_suggestions());
        template.push(actions.separator());
        template.push(actions.correct_automatically());
        template.push(actions.separator());
        template.extend(optional(show.learn_spelling, Action::LearnSpelling));
        template.push(actions.separator());
        template.extend(optional(show.look_up_selection, Action::LookUpSelection));
        template.push(actions.separator());
        template.extend(optional(show.search_with_google, Action::SearchWithGoogle));
        template.push(actions.separator());
        template.push(actions.cut());
        template.push(actions.copy());
        template.push(actions.paste());
        template.extend(optional(show.select_all, Action::SelectAll));
        template.push(actions.separator());
        template.extend(optional(show.save_image, Action::SaveImage));
        template.extend(optional(show.save_image_as, Action::SaveImageAs));
        template.extend(optional(show.copy_image, Action::CopyImage));
        template.extend(optional(show.copy_image_address, Action::CopyImageAddress));
        template.extend(optional(show.save_video, Action::SaveVideo));
        template.extend(optional(show.save_video_as, Action::SaveVideoAs));
        template.extend(optional(show.copy_video_address, Action::CopyVideoAddress));
        template.push(actions.separator());
        template.extend(optional(show.copy_link, Action::CopyLink));
        template.extend(optional(show.save_link_as, Action::SaveLinkAs));
        template.push(actions.separator());
        template.extend(optional(inspect_element, Action::Inspect));
        template.extend(optional(show.services, Action::Services));
        template.push(actions.separator());

        template
    }
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("show", &self.show)
            .field("labels", &self.labels)
            .field("menu", &self.menu.is_some())
            .field("prepend", &self.prepend.is_some())
            .field("append", &self.append.is_some())
            .finish()
    }
}

/// Drops hidden items and redundant separators.
///
/// The result never starts or ends with a separator and never contains two
/// adjacent separators. The relative order of the remaining items is kept.
/// Normalizing a normalized template returns it unchanged.
pub fn normalize(items: impl IntoIterator<Item = MenuItem>) -> Vec<MenuItem> {
    let mut items = items.into_iter().filter(|item| item.visible).peekable();
    let mut kept: Vec<MenuItem> = Vec::new();

    while let Some(item) = items.next() {
        if item.is_separator() {
            let is_leading = kept.is_empty();
            let is_redundant = items.peek().is_none_or(MenuItem::is_separator);

            if is_leading || is_redundant {
                continue;
            }
        }

        kept.push(item);
    }

    kept
}
