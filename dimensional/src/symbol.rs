//! Immutable name tokens
//!
//! A [`Symbol`] names a dimension or a base unit. Symbols are ordered by
//! plain character-code comparison, the same order `str` uses, so a prefix
//! sorts before any longer string that extends it and uppercase letters
//! sort before lowercase ones.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, UnitError};

/// An immutable, cheaply clonable name
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Build a symbol from its text
    ///
    /// Empty text is accepted here; [`Symbol::non_empty`] is the checked
    /// form used where a name is required.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(Arc::from(text.as_ref()))
    }

    /// Build a symbol, rejecting empty text
    pub fn non_empty(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref();
        if text.is_empty() {
            return Err(UnitError::EmptySymbol);
        }
        Ok(Self::new(text))
    }

    /// Number of characters in the symbol
    pub fn size(&self) -> usize {
        self.0.chars().count()
    }

    /// True when the symbol has no characters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character access
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Self(Arc::from(text))
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}
