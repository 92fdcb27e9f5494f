use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::core::bill::BillingError;

/// Connection category as registered with the distribution company.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    /// Residential connection.
    Domestic,

    /// Shops, offices and other business connections.
    Commercial,
}

impl FromStr for CustomerType {
    type Err = BillingError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "domestic" => Ok(Self::Domestic),
            "commercial" => Ok(Self::Commercial),
            _ => Err(BillingError::InvalidCustomerType(text.to_owned())),
        }
    }
}

impl Display for CustomerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domestic => write!(f, "Domestic"),
            Self::Commercial => write!(f, "Commercial"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(CustomerType::from_str("Domestic").unwrap(), CustomerType::Domestic);
        assert_eq!(CustomerType::from_str("COMMERCIAL").unwrap(), CustomerType::Commercial);
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        assert_eq!(
            CustomerType::from_str("industrial").unwrap_err(),
            BillingError::InvalidCustomerType("industrial".to_owned()),
        );
    }
}
