//! Validated price text for the apply sub-protocol.

use thiserror::Error;

/// A trimmed, non-empty price proposal.
///
/// The price is free text on the wire ("100", "50 BYN", "negotiable"), so
/// the only client-side validation is that the trimmed input is non-empty.
/// Constructing a `PriceQuote` is that validation: an empty price can never
/// reach the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote(String);

impl PriceQuote {
    /// Validates raw user input into a price quote.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyPriceError`] when the input is empty after trimming.
    pub fn new(raw: &str) -> Result<Self, EmptyPriceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmptyPriceError);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the trimmed price text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error returned when a price proposal is empty after trimming.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("price must not be empty")]
pub struct EmptyPriceError;
