//! Error type shared by the page components.

use thiserror::Error;

/// Errors that can occur while wiring or running a page component.
///
/// None of these are fatal to the page: callers log them and skip the
/// component that failed.
#[derive(Error, Debug)]
pub enum SiteError {
    /// A required element is not present in the document.
    #[error("Element '{0}' not found")]
    MissingElement(String),

    /// An element exists but is not of the expected kind.
    #[error("Element '{id}' is not a {expected}")]
    WrongElementType {
        /// Element id or selector.
        id: String,
        /// Expected element kind.
        expected: &'static str,
    },

    /// A browser API call failed.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// The embedded configuration could not be parsed.
    #[error("Invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Delivering a form submission failed.
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SiteError>;
