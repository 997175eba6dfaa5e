//! Shared context passed to modules

/// Read-mostly view of the shell that modules render and decide against
#[derive(Debug, Clone)]
pub struct Context {
    /// Current route, e.g. `/financial/revenue`
    pub current_path: String,

    /// Title of the current route
    pub page_title: String,

    /// Display name of the selected outlet
    pub location_name: String,

    /// How many outlets the current selection covers
    pub location_count: usize,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            current_path: "/".to_string(),
            page_title: "Dashboard".to_string(),
            location_name: String::new(),
            location_count: 0,
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_home(&self) -> bool {
        self.current_path == "/"
    }
}
