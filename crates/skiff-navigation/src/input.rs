//! Address bar input resolution
//!
//! 1. Text with an explicit scheme is kept as typed
//! 2. Text without one gets the default scheme prefixed
//! 3. Anything that still does not parse as a URL is rejected

use url::Url;

use crate::error::NavigationError;
use crate::Result;

/// Scheme prefixed to addresses typed without one
pub const DEFAULT_SCHEME: &str = "http";

/// Schemes written without `//` that still count as explicit
const OPAQUE_SCHEMES: [&str; 5] = ["about", "data", "mailto", "javascript", "blob"];

#[derive(Debug, Clone)]
pub struct AddressResolver {
    default_scheme: String,
}

impl AddressResolver {
    pub fn new() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
        }
    }

    pub fn with_default_scheme(scheme: impl Into<String>) -> Self {
        Self {
            default_scheme: scheme.into(),
        }
    }

    pub fn default_scheme(&self) -> &str {
        &self.default_scheme
    }

    /// Resolve typed address text into the exact URL text to load.
    ///
    /// The returned string is the candidate text itself, not the `url` crate's
    /// serialization, so `https://example.org` is not rewritten to
    /// `https://example.org/`.
    pub fn resolve(&self, input: &str) -> Result<String> {
        let input = input.trim();

        if input.is_empty() {
            return Err(NavigationError::EmptyInput);
        }

        let candidate = if Self::has_scheme(input) {
            input.to_string()
        } else {
            format!("{}://{}", self.default_scheme, input)
        };

        match Url::parse(&candidate) {
            Ok(_) => Ok(candidate),
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "Rejected address input");
                Err(NavigationError::InvalidUrl(input.to_string()))
            }
        }
    }

    fn has_scheme(input: &str) -> bool {
        if let Some((scheme, _)) = input.split_once("://") {
            return Self::is_scheme(scheme);
        }

        match input.split_once(':') {
            Some((scheme, _)) => OPAQUE_SCHEMES
                .iter()
                .any(|known| scheme.eq_ignore_ascii_case(known)),
            None => false,
        }
    }

    fn is_scheme(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => chars
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
            _ => false,
        }
    }
}

impl Default for AddressResolver {
    fn default() -> Self {
        Self::new()
    }
}
