//! Describe what was right-clicked.
//!
//! A [`Context`] is a snapshot taken by the host at the moment a context menu
//! is requested. It is never mutated while a menu is built; every built-in
//! action reads from it to decide whether it is visible or enabled.
use bitflags::bitflags;

/// A position in window coordinates, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The X coordinate.
    pub x: i32,
    /// The Y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new [`Point`].
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

bitflags! {
    /// The editing operations the focused element currently supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EditFlags: u8 {
        /// The element can undo.
        const CAN_UNDO = 1 << 0;
        /// The element can redo.
        const CAN_REDO = 1 << 1;
        /// The element can cut.
        const CAN_CUT = 1 << 2;
        /// The element can copy.
        const CAN_COPY = 1 << 3;
        /// The element can paste.
        const CAN_PASTE = 1 << 4;
        /// The element can delete.
        const CAN_DELETE = 1 << 5;
        /// The element can select all.
        const CAN_SELECT_ALL = 1 << 6;
    }
}

/// The kind of media under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaType {
    /// No media.
    #[default]
    None,
    /// An image.
    Image,
    /// A video.
    Video,
    /// An audio element.
    Audio,
    /// A canvas.
    Canvas,
    /// An embedded plugin.
    Plugin,
    /// A file.
    File,
}

/// A snapshot of the right-click state of a window.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Context {
    /// The currently selected text. Empty when nothing is selected.
    pub selection_text: String,
    /// Whether the element under the cursor is editable.
    pub is_editable: bool,
    /// The editing operations available.
    pub edit_flags: EditFlags,
    /// The kind of media under the cursor.
    pub media_type: MediaType,
    /// The URL of the link under the cursor. Empty when there is no link.
    pub link_url: String,
    /// The text of the link under the cursor.
    pub link_text: String,
    /// The source URL of the media under the cursor.
    pub src_url: String,
    /// The misspelled word under the cursor, if any.
    pub misspelled_word: Option<String>,
    /// Spelling suggestions for [`Context::misspelled_word`].
    pub dictionary_suggestions: Vec<String>,
    /// Where the menu was requested.
    pub position: Point,
}

impl Context {
    /// Creates an empty [`Context`] at the given position.
    #[must_use]
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Returns `true` if the selection contains anything but whitespace.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.selection_text.trim().is_empty()
    }

    /// Returns `true` if there is a link under the cursor.
    #[must_use]
    pub fn is_link(&self) -> bool {
        !self.link_url.is_empty()
    }

    /// Returns `true` if the given operation is available *and* there is
    /// selected text to operate on.
    #[must_use]
    pub fn can(&self, flags: EditFlags) -> bool {
        self.edit_flags.contains(flags) && self.has_text()
    }

    /// Returns `true` if the cursor is over a misspelled word in a selection.
    #[must_use]
    pub fn has_misspelling(&self) -> bool {
        self.has_text()
            && self
                .misspelled_word
                .as_deref()
                .is_some_and(|word| !word.is_empty())
    }

    /// Returns the selection with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_selection(&self) -> &str {
        self.selection_text.trim()
    }
}
