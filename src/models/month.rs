use crate::error::ServiceError;
use chrono::Month;
use std::fmt;
use std::str::FromStr;

/// Calendar month (1-12) used to filter `dateOfSale`, regardless of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaleMonth(u32);

impl SaleMonth {
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self(number))
    }

    /// Resolves "January", "jan" or "1" to a month.
    pub fn resolve(input: &str) -> Result<Self, ServiceError> {
        let trimmed = input.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::new(number).ok_or_else(|| ServiceError::InvalidMonth(input.to_string()));
        }
        Month::from_str(trimmed)
            .map(|month| Self(month.number_from_month()))
            .map_err(|_| ServiceError::InvalidMonth(input.to_string()))
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SaleMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Month::try_from(self.0 as u8) {
            Ok(month) => f.write_str(month.name()),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
