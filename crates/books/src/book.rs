//! The book record and its identifier.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Serialize;

/// Book identifier. Small sequential integers allocated by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for BookId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(BookId)
    }
}

/// A catalog record. Title and author are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_ids_parse_from_decimal_strings() {
        assert_eq!("42".parse::<BookId>().unwrap(), BookId(42));
        assert!("not-a-number".parse::<BookId>().is_err());
        assert!("-1".parse::<BookId>().is_err());
    }

    #[test]
    fn book_ids_display_as_bare_numbers() {
        assert_eq!(BookId(7).to_string(), "7");
    }
}
