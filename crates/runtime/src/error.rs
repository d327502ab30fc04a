/// An error that can occur while registering a context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The calling context is not allowed to build native menus.
    #[error("native menus cannot be built from this context")]
    NotPermitted,
    /// The context menu was already disposed.
    #[error("the context menu has been disposed")]
    Disposed,
}

/// The result of a registration operation.
pub type Result<T = ()> = std::result::Result<T, Error>;
