//! Sanitizing untrusted product descriptions.

/// Markup that has been through the sanitizer.
///
/// The only way to build one is [`SafeHtml::sanitize`], so anything holding a
/// `SafeHtml` may be rendered as trusted markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Strip scripts, event-handler attributes, `javascript:` URLs and any tag
    /// outside the allow-list from `raw`.
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        Self(ammonia::clean(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}
