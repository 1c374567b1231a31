/// Where the catalog load currently stands.
///
/// The only transitions are `Idle → Loading → (Loaded | Errored)`; a
/// reload goes back through `Loading`. An error never discards the last
/// successfully loaded product list — the session keeps it alongside.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogStatus {
    /// No load attempted yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load succeeded.
    Loaded,
    /// The last load failed; holds the human-readable message.
    Errored(String),
}

impl CatalogStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    /// The error message, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogStatus::Errored(message) => Some(message),
            _ => None,
        }
    }
}
