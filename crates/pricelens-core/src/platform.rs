//! Supported storefronts.
//!
//! The platform is validated and carried through the pipeline but does not
//! change fixture retrieval. A live scraper would branch on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PriceLensError;

/// An e-commerce storefront a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Amazon.in")]
    AmazonIn,
    Flipkart,
}

impl Platform {
    /// All storefronts, in display order.
    pub const ALL: [Platform; 2] = [Platform::AmazonIn, Platform::Flipkart];

    /// Convert to display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmazonIn => "Amazon.in",
            Self::Flipkart => "Flipkart",
        }
    }
}

impl FromStr for Platform {
    type Err = PriceLensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amazon.in" | "amazon" => Ok(Self::AmazonIn),
            "flipkart" => Ok(Self::Flipkart),
            "" => Err(PriceLensError::invalid_input("platform must not be empty")),
            other => Err(PriceLensError::invalid_input(format!(
                "unsupported platform '{}' (expected Amazon.in or Flipkart)",
                other
            ))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Amazon.in".parse::<Platform>().unwrap(), Platform::AmazonIn);
        assert_eq!("AMAZON".parse::<Platform>().unwrap(), Platform::AmazonIn);
        assert_eq!(" flipkart ".parse::<Platform>().unwrap(), Platform::Flipkart);
    }

    #[test]
    fn test_unknown_platform_is_invalid_input() {
        let err = "ebay".parse::<Platform>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!("  ".parse::<Platform>().unwrap_err().is_invalid_input());
    }
}
