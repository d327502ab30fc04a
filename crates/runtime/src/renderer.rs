//! Hand composed templates to a native menu implementation.
use crate::core::menu::MenuItem;
use crate::core::window;

/// A native menu implementation able to pop up a context menu template.
pub trait Renderer {
    /// Shows the given template in the given window.
    ///
    /// The template is never empty. Activated entries should be forwarded to
    /// [`MenuItem::activate`].
    fn popup(&mut self, window: window::Id, template: &[MenuItem]);
}

impl<F> Renderer for F
where
    F: FnMut(window::Id, &[MenuItem]),
{
    fn popup(&mut self, window: window::Id, template: &[MenuItem]) {
        self(window, template);
    }
}
