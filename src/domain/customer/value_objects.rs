use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: u32,
    pub zipcode: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zipcode: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zipcode: zipcode.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.trim().is_empty() {
            return Err(CustomerError::InvalidAddress("street is required"));
        }
        if self.number == 0 {
            return Err(CustomerError::InvalidAddress("number must be greater than zero"));
        }
        if self.zipcode.trim().is_empty() {
            return Err(CustomerError::InvalidAddress("zipcode is required"));
        }
        if self.city.trim().is_empty() {
            return Err(CustomerError::InvalidAddress("city is required"));
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.street, self.number, self.zipcode, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        let address = Address::new("Street", 321, "Zip", "City").unwrap();
        assert_eq!(address.to_string(), "Street, 321, Zip, City");
    }

    #[test]
    fn test_address_validation() {
        assert!(matches!(
            Address::new("", 1, "zip", "City"),
            Err(CustomerError::InvalidAddress("street is required"))
        ));
        assert!(matches!(
            Address::new("Street", 0, "zip", "City"),
            Err(CustomerError::InvalidAddress(_))
        ));
        assert!(Address::new("Street", 1, " ", "City").is_err());
        assert!(Address::new("Street", 1, "zip", "").is_err());
    }
}
