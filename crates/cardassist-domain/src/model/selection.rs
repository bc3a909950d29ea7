use cardassist_types::SelectionError;
use serde::{Deserialize, Serialize};

/// A validated (vendor, customer) pair ready for comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSelection {
    vendor: String,
    customer: String,
}

impl CardSelection {
    /// Both names are trimmed and must be non-empty. Picking the same
    /// card on both sides is allowed.
    pub fn new(vendor: impl Into<String>, customer: impl Into<String>) -> Result<Self, SelectionError> {
        let vendor = vendor.into().trim().to_string();
        let customer = customer.into().trim().to_string();

        if vendor.is_empty() {
            return Err(SelectionError::MissingVendor);
        }
        if customer.is_empty() {
            return Err(SelectionError::MissingCustomer);
        }

        Ok(Self { vendor, customer })
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }
}
