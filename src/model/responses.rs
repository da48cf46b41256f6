use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A single page of a paginated upstream response
///
/// The brokerage API pages large collections and links pages together with
/// absolute `next` URLs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paginated<T> {
    /// Absolute URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// Absolute URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,
    /// Records in this page
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T: DeserializeOwned> Paginated<T> {
    /// True when this is the last page
    pub fn is_last_page(&self) -> bool {
        self.next.is_none()
    }
}
