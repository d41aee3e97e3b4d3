//! Newsletter sign-up.
//!
//! The "Stay Close" field collects an email address, but no mailing
//! service is wired to it. Addresses are validated here and handed to a
//! [`SubscriptionSink`]; the only sink that exists, [`Unwired`], declines
//! every request so the page can say so instead of pretending.

use std::fmt;

use tracing::debug;

const MAX_ADDRESS_LEN: usize = 254;

/// Reasons a sign-up does not go through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeError {
    /// The field was left blank
    #[error("Please enter your email address.")]
    Empty,
    /// The text is not shaped like an address
    #[error("\"{0}\" doesn't look like an email address.")]
    Invalid(String),
    /// No mailing service is connected
    #[error("Newsletter sign-ups open soon. Thank you for your patience.")]
    Unavailable,
}

/// A syntactically plausible email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates user input.
    ///
    /// Surrounding whitespace is trimmed. The check is deliberately loose:
    /// one `@`, a non-empty local part, and a dotted domain without empty
    /// labels.
    pub fn parse(input: &str) -> Result<Self, SubscribeError> {
        let address = input.trim();
        if address.is_empty() {
            return Err(SubscribeError::Empty);
        }
        let invalid = || SubscribeError::Invalid(address.to_string());

        if address.len() > MAX_ADDRESS_LEN || address.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = address.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        let mut labels = domain.split('.');
        let dotted = domain.contains('.');
        if !dotted || labels.any(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self(address.to_string()))
    }

    /// The address as typed (trimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Something that accepts newsletter sign-ups.
pub trait SubscriptionSink {
    /// Registers `address`.
    fn subscribe(&self, address: &EmailAddress) -> Result<(), SubscribeError>;
}

/// The sink used while no mailing service exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unwired;

impl SubscriptionSink for Unwired {
    fn subscribe(&self, address: &EmailAddress) -> Result<(), SubscribeError> {
        debug!(domain = address.as_str().rsplit('@').next(), "newsletter sign-up without a backend");
        Err(SubscribeError::Unavailable)
    }
}

/// Validates `input` and forwards it to `sink`.
pub fn sign_up<S: SubscriptionSink + ?Sized>(sink: &S, input: &str) -> Result<EmailAddress, SubscribeError> {
    let address = EmailAddress::parse(input)?;
    sink.subscribe(&address)?;
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Outbox(RefCell<Vec<String>>);

    impl SubscriptionSink for Outbox {
        fn subscribe(&self, address: &EmailAddress) -> Result<(), SubscribeError> {
            self.0.borrow_mut().push(address.to_string());
            Ok(())
        }
    }

    #[test]
    fn accepts_plain_addresses() {
        let address = EmailAddress::parse("  asha@example.org ").unwrap();
        assert_eq!(address.as_str(), "asha@example.org");
        assert!(EmailAddress::parse("first.last+news@mail.co.in").is_ok());
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(EmailAddress::parse("   "), Err(SubscribeError::Empty));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for input in [
            "asha",
            "@example.org",
            "asha@",
            "asha@localhost",
            "asha@@example.org",
            "asha@example..org",
            "asha@.example.org",
            "as ha@example.org",
        ] {
            assert_eq!(
                EmailAddress::parse(input),
                Err(SubscribeError::Invalid(input.to_string())),
                "{input}"
            );
        }
    }

    #[test]
    fn unwired_sink_declines() {
        assert_eq!(sign_up(&Unwired, "asha@example.org"), Err(SubscribeError::Unavailable));
        assert_eq!(sign_up(&Unwired, ""), Err(SubscribeError::Empty));
    }

    #[test]
    fn valid_address_reaches_sink() {
        let outbox = Outbox::default();
        let address = sign_up(&outbox, "kiran@example.com").unwrap();
        assert_eq!(address.as_str(), "kiran@example.com");
        assert_eq!(*outbox.0.borrow(), vec!["kiran@example.com".to_string()]);
    }
}
