//! Actions that modules can return to communicate with the app

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Change the current route
    Navigate(NavigateTarget),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open the search palette
    OpenPalette,

    /// Close current overlay/popup
    CloseOverlay,

    /// Forget persisted sidebar state
    ResetMenuState,

    /// Request quit
    Quit,
}

/// Navigation targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateTarget {
    /// Go back to previous route
    Back,
    /// Go to the dashboard root
    Home,
    /// Go to a specific route
    Path(String),
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
}
