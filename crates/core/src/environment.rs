//! Capabilities of the host platform.

/// Platform capabilities injected into the action catalog.
///
/// The catalog never inspects the running platform itself; this keeps the
/// visibility rules portable and testable on every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Environment {
    /// Whether the platform can show a dictionary definition for the
    /// selection ("Look Up").
    pub supports_look_up: bool,
    /// Whether the platform offers a system "Services" submenu.
    pub supports_services: bool,
    /// Whether the application runs in development mode.
    ///
    /// Controls the default visibility of "Inspect Element".
    pub is_development: bool,
    /// Whether the calling context is allowed to build native menus.
    pub can_build_native_menus: bool,
}

impl Environment {
    /// Returns the [`Environment`] of the current build target.
    ///
    /// Look Up and Services are only available on macOS; development mode
    /// follows `debug_assertions`. Native menus are assumed to be available;
    /// a restricted process must clear
    /// [`can_build_native_menus`](Self::can_build_native_menus) itself.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            supports_look_up: cfg!(target_os = "macos"),
            supports_services: cfg!(target_os = "macos"),
            is_development: cfg!(debug_assertions),
            can_build_native_menus: true,
        }
    }

    /// Returns an [`Environment`] without any platform-specific capability.
    #[must_use]
    pub const fn portable() -> Self {
        Self {
            supports_look_up: false,
            supports_services: false,
            is_development: false,
            can_build_native_menus: true,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::current()
    }
}
