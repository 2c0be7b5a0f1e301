use crate::pdf::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fixed page setup for letter rendering: US letter, 50 pt margins,
    /// Times-Roman 12 pt for the whole document.
    pub page_config: PageConfig,
}
