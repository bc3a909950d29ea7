//! Static comparison served when generation fails.
//!
//! Only the names and banks vary with the input. The savings example in
//! the pitch is illustrative text and is not computed from the cards.

use cardassist_types::{CardProfile, ComparisonResult};

const VENDOR_FEATURES: [&str; 4] = [
    "Premium Lounge Access",
    "Concierge Service",
    "Golf Benefits",
    "Insurance Coverage",
];

const CUSTOMER_FEATURES: [&str; 3] = [
    "Basic Lounge Access",
    "Online Offers",
    "Fuel Surcharge Waiver",
];

/// First whitespace-delimited token of a card name ("HDFC Regalia" -> "HDFC")
pub fn bank_from_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or_default().to_string()
}

pub fn fallback_comparison(vendor_card: &str, customer_card: &str) -> ComparisonResult {
    ComparisonResult {
        vendor_card: CardProfile {
            name: vendor_card.to_string(),
            bank: bank_from_name(vendor_card),
            features: VENDOR_FEATURES.iter().map(|f| f.to_string()).collect(),
            fees: "₹5,000 Annual Fee".to_string(),
            cashback: "2-5% on all spends".to_string(),
            rewards: "2 points per ₹100".to_string(),
            limits: "₹5-15 Lakhs".to_string(),
        },
        customer_card: CardProfile {
            name: customer_card.to_string(),
            bank: bank_from_name(customer_card),
            features: CUSTOMER_FEATURES.iter().map(|f| f.to_string()).collect(),
            fees: "₹2,500 Annual Fee".to_string(),
            cashback: "1-2% on select categories".to_string(),
            rewards: "1 point per ₹100".to_string(),
            limits: "₹2-8 Lakhs".to_string(),
        },
        sales_pitch: fallback_pitch(vendor_card, customer_card),
    }
}

fn fallback_pitch(vendor_card: &str, customer_card: &str) -> String {
    format!(
        r#"Hi! I understand you currently use the {customer_card}. It's a good card, but let me show you how {vendor_card} can significantly improve your financial benefits. 

**Key Advantages:**
• **Higher Cashback**: Get 2-5% cashback vs your current 1-2%
• **Better Rewards**: Earn double reward points on every purchase
• **Premium Benefits**: Access to exclusive airport lounges and concierge services
• **Higher Credit Limit**: Get up to ₹15 lakhs vs your current ₹8 lakhs limit

**Real Example**: If you spend ₹50,000 monthly, you'll earn ₹12,000 more in cashback annually with {vendor_card} compared to {customer_card}.

The annual fee difference of ₹2,500 pays for itself in just 2 months with the enhanced benefits. Would you like me to help you apply today?"#
    )
}
