//! Escaping for free-text cause descriptions embedded in review messages.

use std::borrow::Cow;

/// Replacement for a single quote. The review message transport expects the
/// entity without a trailing semicolon.
pub const SINGLE_QUOTE_ENTITY: &str = "&#39";

/// Replace every `'` in `text` with [`SINGLE_QUOTE_ENTITY`].
///
/// Nothing else is touched, so text without quotes is returned borrowed.
pub fn escape_quotes(text: &str) -> Cow<'_, str> {
    if text.contains('\'') {
        Cow::Owned(text.replace('\'', SINGLE_QUOTE_ENTITY))
    } else {
        Cow::Borrowed(text)
    }
}
