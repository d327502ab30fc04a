//! Label text processing for context menus.
//!
//! Labels use '&' as the mnemonic marker (e.g., "&Copy" underlines 'C').
//! Text coming from the page (like the selection) must have its markers
//! doubled so it renders literally.
use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The placeholder replaced by the current selection.
pub const SELECTION_PLACEHOLDER: &str = "{selection}";

/// The maximum display width of the selection shown in a label, in columns,
/// including the ellipsis.
pub const MAX_SELECTION_LENGTH: usize = 25;

/// The marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

const MARKER: char = '&';

/// Escapes mnemonic markers so the text renders literally.
///
/// # Examples
/// - `"Save & Close"` → `"Save && Close"`
/// - `"Plain"` → `"Plain"` (borrowed)
pub fn escape_mnemonic(text: &str) -> Cow<'_, str> {
    if text.contains(MARKER) {
        Cow::Owned(text.replace(MARKER, "&&"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Truncates text to at most `max` columns of display width.
///
/// Wide characters (e.g. CJK or emoji) take two columns. Text is only cut at
/// grapheme boundaries, and truncated text ends with [`ELLIPSIS`], which
/// counts towards `max`.
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    if max == 0 {
        return Cow::Borrowed("");
    }

    if text.width() <= max {
        return Cow::Borrowed(text);
    }

    let available = max - ELLIPSIS.width();
    let mut width = 0;
    let mut cut = 0;

    for (index, grapheme) in text.grapheme_indices(true) {
        width += grapheme.width();

        if width > available {
            break;
        }

        cut = index + grapheme.len();
    }

    Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut]))
}

/// Replaces the first [`SELECTION_PLACEHOLDER`] in `label` with the given
/// selection, truncated and escaped.
///
/// The selection is used as is; see [`Context::trimmed_selection`].
///
/// [`Context::trimmed_selection`]: crate::context::Context::trimmed_selection
///
/// Returns `None` if the label has no placeholder.
pub fn substitute_selection(label: &str, selection: &str) -> Option<String> {
    if !label.contains(SELECTION_PLACEHOLDER) {
        return None;
    }

    let selection = truncate(selection, MAX_SELECTION_LENGTH);
    let selection = escape_mnemonic(&selection);

    Some(label.replacen(SELECTION_PLACEHOLDER, &selection, 1))
}
