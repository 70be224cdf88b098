use serde::Deserialize;
use serde::Serialize;

/// Why an email was turned away. The messages are shown to visitors as-is.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationRejected {
    #[error("Please enter an email address.")]
    Empty,
    #[error("Email addresses cannot contain spaces.")]
    Whitespace,
    #[error("That doesn't look like an email address (missing '@').")]
    MissingAt,
    #[error("Email addresses contain exactly one '@'.")]
    MultipleAt,
    #[error("Something must come before the '@'.")]
    MissingLocalPart,
    #[error("The domain needs a dot, like under.the.bridge")]
    MissingDomainDot,
}

/// An email address that passed the shape check: `local@domain.tld`, where no
/// part contains whitespace or `@`.
///
/// This is deliberately permissive. It accepts plenty of undeliverable
/// addresses (`a@b.c`) and rejects some exotic valid ones (quoted local parts
/// with spaces). It is a shape check, not an RFC 5322 grammar.
///
/// Must be instantiated with `SubscriberEmail::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

/// Matches the `\s` class of the browser's regex engine: Unicode whitespace
/// plus the byte order mark, minus NEL.
fn is_space(c: char) -> bool { (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}' }

impl SubscriberEmail {
    pub fn parse(email: String) -> Result<Self, ValidationRejected> {
        if email.is_empty() {
            return Err(ValidationRejected::Empty);
        }
        if email.chars().any(is_space) {
            return Err(ValidationRejected::Whitespace);
        }

        let (local, domain) = email
            .split_once('@')
            .ok_or(ValidationRejected::MissingAt)?;

        if domain.contains('@') {
            return Err(ValidationRejected::MultipleAt);
        }
        if local.is_empty() {
            return Err(ValidationRejected::MissingLocalPart);
        }

        // the dot must have at least one char on either side of it; any other
        // dots in the domain are fine
        let interior_dot = domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
        if !interior_dot {
            return Err(ValidationRejected::MissingDomainDot);
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str { &self.0 }
}
