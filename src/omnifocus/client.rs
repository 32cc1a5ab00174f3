use std::process::Command;

#[cfg(test)]
use mockall::automock;

use crate::error::OmnidraftError;

/// Base URL for the OmniFocus paste endpoint.
pub const PASTE_URL_BASE: &str = "omnifocus://x-callback-url/paste";

/// The single effectful boundary of a capture: hand the finished TaskPaper
/// text to the task manager.
#[cfg_attr(test, automock)]
pub trait Deliverer {
    /// Deliver rendered TaskPaper content. Called exactly once per
    /// capture, including for empty content.
    ///
    /// # Errors
    ///
    /// Returns a delivery error when the handoff is rejected or nothing
    /// handles the URL scheme.
    fn deliver(&self, content: &str) -> Result<(), OmnidraftError>;
}

/// Delivers TaskPaper text to OmniFocus by opening its paste callback URL.
#[derive(Debug, Clone)]
pub struct OmniFocusClient {
    url_base: String,
}

impl OmniFocusClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_url_base(PASTE_URL_BASE)
    }

    /// Use a different callback base, e.g. a beta build of OmniFocus
    /// registered under another scheme.
    #[must_use]
    pub fn with_url_base(url_base: impl Into<String>) -> Self {
        Self {
            url_base: url_base.into(),
        }
    }

    /// The full callback URL for `content`, query-encoded.
    #[must_use]
    pub fn paste_url(&self, content: &str) -> String {
        format!("{}?content={}", self.url_base, urlencoding::encode(content))
    }
}

impl Default for OmniFocusClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deliverer for OmniFocusClient {
    fn deliver(&self, content: &str) -> Result<(), OmnidraftError> {
        let url = self.paste_url(content);
        let output = Command::new("open").arg(&url).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OmnidraftError::from_open_stderr(&stderr));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== URL Building Tests ====================

    #[test]
    fn test_paste_url_empty_content() {
        let client = OmniFocusClient::new();
        assert_eq!(
            client.paste_url(""),
            "omnifocus://x-callback-url/paste?content="
        );
    }

    #[test]
    fn test_paste_url_encodes_spaces_and_newlines() {
        let client = OmniFocusClient::new();
        assert_eq!(
            client.paste_url("- Asparagus \n"),
            "omnifocus://x-callback-url/paste?content=-%20Asparagus%20%0A"
        );
    }

    #[test]
    fn test_paste_url_encodes_attribute_punctuation() {
        let client = OmniFocusClient::new();
        let url = client.paste_url("@tags(a,b)");
        assert_eq!(
            url,
            "omnifocus://x-callback-url/paste?content=%40tags%28a%2Cb%29"
        );
    }

    #[test]
    fn test_paste_url_custom_base() {
        let client = OmniFocusClient::with_url_base("omnifocus-test://x-callback-url/paste");
        assert!(client
            .paste_url("x")
            .starts_with("omnifocus-test://x-callback-url/paste?content="));
    }

    // ==================== Trait Seam Tests ====================

    #[test]
    fn test_mock_deliverer_observes_content() {
        let mut mock = MockDeliverer::new();
        mock.expect_deliver()
            .withf(|content| content == "- one \n")
            .times(1)
            .returning(|_| Ok(()));
        assert!(mock.deliver("- one \n").is_ok());
    }

    #[test]
    fn test_mock_deliverer_can_fail() {
        let mut mock = MockDeliverer::new();
        mock.expect_deliver()
            .returning(|_| Err(OmnidraftError::Delivery("rejected".to_string())));
        assert!(mock.deliver("anything").is_err());
    }
}
