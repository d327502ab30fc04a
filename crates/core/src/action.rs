//! The catalog of built-in context menu actions.
//!
//! [`Actions`] produces a fresh [`MenuItem`] for every request, already gated
//! by the [`Context`] it was created with. Requesting the same action twice
//! yields two independent items, so decorating one never affects the other.
use crate::context::{Context, EditFlags, MediaType, Point};
use crate::environment::Environment;
use crate::host::Host;
use crate::label;
use crate::menu::{Activation, Callback, MenuItem, MenuRole, Transform};

/// The identifier shared by every dictionary suggestion item.
pub const DICTIONARY_SUGGESTIONS: &str = "dictionarySuggestions";

/// The base URL used by "Search with Google".
pub const SEARCH_URL: &str = "https://www.google.com/search";

/// A built-in action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Replace the misspelled word with the first suggestion.
    CorrectAutomatically,
    /// Add the misspelled word to the dictionary.
    LearnSpelling,
    /// Show the dictionary definition of the selection.
    LookUpSelection,
    /// Search the web for the selection.
    SearchWithGoogle,
    /// Cut the selection.
    Cut,
    /// Copy the selection.
    Copy,
    /// Paste the clipboard.
    Paste,
    /// Select everything.
    SelectAll,
    /// Download the image.
    SaveImage,
    /// Download the image, asking where to save it.
    SaveImageAs,
    /// Copy the image itself.
    CopyImage,
    /// Copy the image URL.
    CopyImageAddress,
    /// Download the video.
    SaveVideo,
    /// Download the video, asking where to save it.
    SaveVideoAs,
    /// Copy the video URL.
    CopyVideoAddress,
    /// Copy the link URL.
    CopyLink,
    /// Download the link target, asking where to save it.
    SaveLinkAs,
    /// Inspect the element under the cursor.
    Inspect,
    /// The system services submenu.
    Services,
}

impl Action {
    /// All the built-in actions.
    pub const ALL: &'static [Self] = &[
        Self::CorrectAutomatically,
        Self::LearnSpelling,
        Self::LookUpSelection,
        Self::SearchWithGoogle,
        Self::Cut,
        Self::Copy,
        Self::Paste,
        Self::SelectAll,
        Self::SaveImage,
        Self::SaveImageAs,
        Self::CopyImage,
        Self::CopyImageAddress,
        Self::SaveVideo,
        Self::SaveVideoAs,
        Self::CopyVideoAddress,
        Self::CopyLink,
        Self::SaveLinkAs,
        Self::Inspect,
        Self::Services,
    ];

    /// Returns the stable identifier of the action.
    ///
    /// Label overrides are keyed by this identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::CorrectAutomatically => "correctAutomatically",
            Self::LearnSpelling => "learnSpelling",
            Self::LookUpSelection => "lookUpSelection",
            Self::SearchWithGoogle => "searchWithGoogle",
            Self::Cut => "cut",
            Self::Copy => "copy",
            Self::Paste => "paste",
            Self::SelectAll => "selectAll",
            Self::SaveImage => "saveImage",
            Self::SaveImageAs => "saveImageAs",
            Self::CopyImage => "copyImage",
            Self::CopyImageAddress => "copyImageAddress",
            Self::SaveVideo => "saveVideo",
            Self::SaveVideoAs => "saveVideoAs",
            Self::CopyVideoAddress => "copyVideoAddress",
            Self::CopyLink => "copyLink",
            Self::SaveLinkAs => "saveLinkAs",
            Self::Inspect => "inspect",
            Self::Services => "services",
        }
    }

    /// Returns the label used when no override is configured.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::CorrectAutomatically => "Correct Spelling Automatically",
            Self::LearnSpelling => "&Learn Spelling",
            Self::LookUpSelection => "Look Up “{selection}”",
            Self::SearchWithGoogle => "&Search with Google",
            Self::Cut => "Cu&t",
            Self::Copy => "&Copy",
            Self::Paste => "&Paste",
            Self::SelectAll => "Select &All",
            Self::SaveImage => "Save I&mage",
            Self::SaveImageAs => "Sa&ve Image As…",
            Self::CopyImage => "Cop&y Image",
            Self::CopyImageAddress => "C&opy Image Address",
            Self::SaveVideo => "Save Vide&o",
            Self::SaveVideoAs => "Save Video& As…",
            Self::CopyVideoAddress => "Copy Video Ad&dress",
            Self::CopyLink => "Copy Lin&k",
            Self::SaveLinkAs => "Save Link As…",
            Self::Inspect => "I&nspect Element",
            Self::Services => "Services",
        }
    }

    /// Finds the [`Action`] with the given identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.id() == id)
    }
}

/// Options for requesting a built-in [`MenuItem`].
///
/// An item has a single activation slot: either its built-in command runs
/// (optionally on transformed content) or a custom handler replaces it.
#[derive(Debug, Clone, Default)]
pub enum Decoration {
    /// Use the built-in behavior as is.
    #[default]
    Default,
    /// Transform the content the action operates on before using it.
    ///
    /// Actions without content (e.g. "Inspect Element") ignore it.
    Transform(Transform),
    /// Replace the built-in behavior entirely.
    Click(Callback),
}

impl Decoration {
    /// Creates a [`Decoration::Transform`].
    pub fn transform(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Transform(Transform::new(f))
    }

    /// Creates a [`Decoration::Click`].
    pub fn click(f: impl Fn(&MenuItem, &mut dyn Host) + Send + Sync + 'static) -> Self {
        Self::Click(Callback::new(f))
    }

    fn apply(self, mut item: MenuItem) -> MenuItem {
        match self {
            Self::Default => {}
            Self::Transform(new) => {
                if let Activation::Command { transform, .. } = &mut item.activation {
                    *transform = Some(new);
                }
            }
            Self::Click(callback) => {
                item.activation = Activation::Click(callback);
            }
        }

        item
    }
}

/// A built-in command, carrying the content captured from the [`Context`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cut the selection; with a transform, write the transformed selection
    /// to the clipboard instead.
    Cut {
        /// The selected text.
        selection: String,
    },
    /// Copy the selection; with a transform, write the transformed selection
    /// to the clipboard instead.
    Copy {
        /// The selected text.
        selection: String,
    },
    /// Paste; with a transform, insert the transformed clipboard text
    /// instead.
    Paste,
    /// Select everything.
    SelectAll,
    /// Insert the given text.
    InsertText(String),
    /// Add the given word to the dictionary.
    LearnSpelling(String),
    /// Show the definition of the selection.
    LookUp,
    /// Search the web for the given query.
    Search(String),
    /// Download the given URL.
    Download {
        /// The URL to download.
        url: String,
        /// Whether to ask where to save it.
        save_as: bool,
    },
    /// Write a URL to the clipboard.
    CopyUrl {
        /// The URL to copy.
        url: String,
        /// The bookmark title; defaults to the (transformed) URL.
        bookmark: Option<String>,
    },
    /// Copy the image at the given position.
    CopyImageAt(Point),
    /// Inspect the element at the given position.
    Inspect(Point),
}

impl Command {
    /// Runs the [`Command`] against the given [`Host`].
    pub fn execute(&self, transform: Option<&Transform>, host: &mut dyn Host) {
        let apply = |content: &str| match transform {
            Some(transform) => transform.apply(content),
            None => content.to_owned(),
        };

        log::trace!("Executing {self:?}");

        match self {
            Command::Cut { selection } => match transform {
                Some(transform) => host.write_clipboard_text(transform.apply(selection), None),
                None => host.cut(),
            },
            Command::Copy { selection } => match transform {
                Some(transform) => host.write_clipboard_text(transform.apply(selection), None),
                None => host.copy(),
            },
            Command::Paste => match transform {
                Some(transform) => {
                    let content = host.read_clipboard_text().unwrap_or_default();
                    host.insert_text(&transform.apply(&content));
                }
                None => host.paste(),
            },
            Command::SelectAll => host.select_all(),
            Command::InsertText(text) => host.insert_text(&apply(text)),
            Command::LearnSpelling(word) => host.add_to_dictionary(&apply(word)),
            Command::LookUp => host.show_definition(),
            Command::Search(query) => host.open_external(&search_url(&apply(query))),
            Command::Download { url, save_as } => host.download(&apply(url), *save_as),
            Command::CopyUrl { url, bookmark } => {
                let url = apply(url);
                let bookmark = bookmark.clone().unwrap_or_else(|| url.clone());

                host.write_clipboard_text(url, Some(bookmark));
            }
            Command::CopyImageAt(position) => host.copy_image_at(*position),
            Command::Inspect(position) => {
                host.inspect_element_at(*position);

                if host.is_dev_tools_opened() {
                    host.focus_dev_tools();
                }
            }
        }
    }
}

/// Returns the search URL for the given query.
#[must_use]
pub fn search_url(query: &str) -> String {
    let query: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();

    format!("{SEARCH_URL}?q={query}")
}

/// The built-in actions available for a [`Context`].
#[derive(Debug, Clone, Copy)]
pub struct Actions<'a> {
    context: &'a Context,
    environment: Environment,
}

macro_rules! shortcuts {
    ($($name:ident => $action:ident),* $(,)?) => {
        $(
            #[doc = concat!("Returns the undecorated [`Action::", stringify!($action), "`] item.")]
            #[must_use]
            pub fn $name(&self) -> MenuItem {
                self.build(Action::$action, Decoration::Default)
            }
        )*
    };
}

impl<'a> Actions<'a> {
    /// Creates the catalog for the given [`Context`] and [`Environment`].
    #[must_use]
    pub fn new(context: &'a Context, environment: Environment) -> Self {
        Self {
            context,
            environment,
        }
    }

    /// Returns the [`Context`] of the catalog.
    #[must_use]
    pub fn context(&self) -> &'a Context {
        self.context
    }

    /// Returns the [`Environment`] of the catalog.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Creates a separator.
    #[must_use]
    pub fn separator(&self) -> MenuItem {
        MenuItem::separator()
    }

    /// Builds a fresh item for the given [`Action`], decorated as requested.
    #[must_use]
    pub fn build(&self, action: Action, decoration: Decoration) -> MenuItem {
        decoration.apply(self.item(action))
    }

    shortcuts! {
        correct_automatically => CorrectAutomatically,
        learn_spelling => LearnSpelling,
        look_up_selection => LookUpSelection,
        search_with_google => SearchWithGoogle,
        cut => Cut,
        copy => Copy,
        paste => Paste,
        select_all => SelectAll,
        save_image => SaveImage,
        save_image_as => SaveImageAs,
        copy_image => CopyImage,
        copy_image_address => CopyImageAddress,
        save_video => SaveVideo,
        save_video_as => SaveVideoAs,
        copy_video_address => CopyVideoAddress,
        copy_link => CopyLink,
        save_link_as => SaveLinkAs,
        inspect => Inspect,
        services => Services,
    }

    /// Returns the spelling suggestions for the misspelled word.
    ///
    /// When there are none, a single disabled "No Guesses Found" item is
    /// returned instead. Mnemonic markers in suggestions are escaped so they
    /// render literally.
    #[must_use]
    pub fn dictionary_suggestions(&self) -> Vec<MenuItem> {
        let context = self.context;
        let has_misspelling = context.has_misspelling();

        if has_misspelling && !context.dictionary_suggestions.is_empty() {
            context
                .dictionary_suggestions
                .iter()
                .map(|suggestion| {
                    MenuItem::command(
                        DICTIONARY_SUGGESTIONS,
                        &label::escape_mnemonic(suggestion),
                        Command::InsertText(suggestion.clone()),
                    )
                    .visible(context.is_editable)
                })
                .collect()
        } else {
            vec![
                MenuItem::new("No Guesses Found")
                    .id(DICTIONARY_SUGGESTIONS)
                    .enabled(false)
                    .visible(has_misspelling),
            ]
        }
    }

    fn item(&self, action: Action) -> MenuItem {
        let context = self.context;
        let label = action.default_label();
        let id = action.id();

        let has_text = context.has_text();
        let is_image = context.media_type == MediaType::Image;
        let is_video = context.media_type == MediaType::Video;
        let is_plain_link = context.is_link() && context.media_type == MediaType::None;

        let download = |url: &str, save_as| Command::Download {
            url: url.to_owned(),
            save_as,
        };

        let copy_url = |url: &str, bookmark: Option<&str>| Command::CopyUrl {
            url: url.to_owned(),
            bookmark: bookmark.map(str::to_owned),
        };

        match action {
            Action::CorrectAutomatically => {
                let first = context
                    .dictionary_suggestions
                    .first()
                    .cloned()
                    .unwrap_or_default();

                MenuItem::command(id, label, Command::InsertText(first)).visible(
                    context.is_editable
                        && context.has_misspelling()
                        && !context.dictionary_suggestions.is_empty(),
                )
            }
            Action::LearnSpelling => MenuItem::command(
                id,
                label,
                Command::LearnSpelling(context.misspelled_word.clone().unwrap_or_default()),
            )
            .visible(context.is_editable && context.has_misspelling()),
            Action::LookUpSelection => MenuItem::command(id, label, Command::LookUp)
                .visible(self.environment.supports_look_up && has_text && !context.is_link()),
            Action::SearchWithGoogle => {
                MenuItem::command(id, label, Command::Search(context.selection_text.clone()))
                    .visible(has_text)
            }
            Action::Cut => MenuItem::command(
                id,
                label,
                Command::Cut {
                    selection: context.selection_text.clone(),
                },
            )
            .enabled(context.can(EditFlags::CAN_CUT))
            .visible(context.is_editable),
            Action::Copy => MenuItem::command(
                id,
                label,
                Command::Copy {
                    selection: context.selection_text.clone(),
                },
            )
            .enabled(context.can(EditFlags::CAN_COPY))
            .visible(context.is_editable || has_text),
            Action::Paste => MenuItem::command(id, label, Command::Paste)
                .enabled(context.edit_flags.contains(EditFlags::CAN_PASTE))
                .visible(context.is_editable),
            Action::SelectAll => MenuItem::command(id, label, Command::SelectAll)
                .enabled(context.edit_flags.contains(EditFlags::CAN_SELECT_ALL) || has_text)
                .visible(context.is_editable || has_text),
            Action::SaveImage => {
                MenuItem::command(id, label, download(&context.src_url, false)).visible(is_image)
            }
            Action::SaveImageAs => {
                MenuItem::command(id, label, download(&context.src_url, true)).visible(is_image)
            }
            Action::CopyImage => {
                MenuItem::command(id, label, Command::CopyImageAt(context.position))
                    .visible(is_image)
            }
            Action::CopyImageAddress => {
                MenuItem::command(id, label, copy_url(&context.src_url, None)).visible(is_image)
            }
            Action::SaveVideo => {
                MenuItem::command(id, label, download(&context.src_url, false)).visible(is_video)
            }
            Action::SaveVideoAs => {
                MenuItem::command(id, label, download(&context.src_url, true)).visible(is_video)
            }
            Action::CopyVideoAddress => {
                MenuItem::command(id, label, copy_url(&context.src_url, None)).visible(is_video)
            }
            Action::CopyLink => MenuItem::command(
                id,
                label,
                copy_url(&context.link_url, Some(&context.link_text)),
            )
            .visible(is_plain_link),
            Action::SaveLinkAs => {
                MenuItem::command(id, label, download(&context.link_url, true))
                    .visible(is_plain_link)
            }
            Action::Inspect => MenuItem::command(id, label, Command::Inspect(context.position)),
            Action::Services => MenuItem::new(label)
                .id(id)
                .with_role(MenuRole::Services)
                .visible(
                    self.environment.supports_services && (context.is_editable || has_text),
                ),
        }
    }
}
