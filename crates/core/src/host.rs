//! Perform the side effects of activated menu items.
use crate::context::Point;

/// The window services a context menu item may use once it is activated.
///
/// Menu templates are built without touching any of these; they are only
/// called when the user actually selects an entry.
pub trait Host {
    // ========== Clipboard ==========

    /// Reads the current content of the clipboard as text.
    fn read_clipboard_text(&self) -> Option<String>;

    /// Writes the given text to the clipboard.
    ///
    /// `bookmark` is the title offered alongside a URL on platforms that
    /// support bookmark clipboard entries.
    fn write_clipboard_text(&mut self, text: String, bookmark: Option<String>);

    // ========== Editing ==========

    /// Cuts the current selection using the native editing command.
    fn cut(&mut self);

    /// Copies the current selection using the native editing command.
    fn copy(&mut self);

    /// Pastes using the native editing command.
    fn paste(&mut self);

    /// Selects all the content of the focused element.
    fn select_all(&mut self);

    /// Inserts the given text at the cursor, replacing the selection.
    fn insert_text(&mut self, text: &str);

    // ========== Spelling ==========

    /// Adds a word to the spell checker dictionary.
    fn add_to_dictionary(&mut self, word: &str);

    /// Shows the platform dictionary definition for the selection.
    fn show_definition(&mut self);

    // ========== Navigation ==========

    /// Opens the given URL with the default external handler.
    fn open_external(&mut self, url: &str);

    /// Starts downloading the given URL.
    ///
    /// If `save_as` is set, the user is asked where to save the file.
    fn download(&mut self, url: &str, save_as: bool);

    /// Copies the image at the given position to the clipboard.
    fn copy_image_at(&mut self, position: Point);

    // ========== Developer tools ==========

    /// Inspects the element at the given position.
    fn inspect_element_at(&mut self, position: Point);

    /// Returns whether the developer tools are currently open.
    fn is_dev_tools_opened(&self) -> bool {
        false
    }

    /// Focuses the developer tools.
    fn focus_dev_tools(&mut self) {}
}

/// A null implementation of the [`Host`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct Null;

impl Host for Null {
    fn read_clipboard_text(&self) -> Option<String> {
        None
    }

    fn write_clipboard_text(&mut self, _text: String, _bookmark: Option<String>) {}

    fn cut(&mut self) {}

    fn copy(&mut self) {}

    fn paste(&mut self) {}

    fn select_all(&mut self) {}

    fn insert_text(&mut self, _text: &str) {}

    fn add_to_dictionary(&mut self, _word: &str) {}

    fn show_definition(&mut self) {}

    fn open_external(&mut self, _url: &str) {}

    fn download(&mut self, _url: &str, _save_as: bool) {}

    fn copy_image_at(&mut self, _position: Point) {}

    fn inspect_element_at(&mut self, _position: Point) {}
}
