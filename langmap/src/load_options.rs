//! Options controlling how a language map is loaded into a [`crate::MessageStore`].

/// Load behavior options for [`crate::MessageStore`] loading APIs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadOptions {
    /// Fail with [`crate::Error::DuplicateKey`] instead of silently overwriting when a
    /// key is committed twice into the same domain.
    pub strict: bool,
}

impl LoadOptions {
    /// Creates default load options (last write wins).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables strict duplicate checking.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
