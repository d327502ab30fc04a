//! Identify the windows a context menu is attached to.
mod id;

pub use id::Id;
