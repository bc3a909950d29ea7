//! Prompt for the card comparison request
//!
//! The JSON template is rendered from the result types themselves, so the
//! schema the model is asked for always matches what the parser accepts.
//! Card names are pre-filled in the template; every other value is a
//! placeholder description.

use cardassist_types::{CardProfile, ComparisonResult};

const SALES_PITCH_GUIDE: &str = "A detailed, persuasive sales script in simple English that a vendor can use to convince the customer. Include specific benefits, savings calculations, and compelling reasons to switch. Make it conversational and easy to deliver.";

fn placeholder_profile(name: &str, feature_count: usize) -> CardProfile {
    CardProfile {
        name: name.to_string(),
        bank: "Bank Name".to_string(),
        features: (1..=feature_count).map(|i| format!("feature{}", i)).collect(),
        fees: "Annual fee details".to_string(),
        cashback: "Cashback rate details".to_string(),
        rewards: "Reward points details".to_string(),
        limits: "Credit limit range".to_string(),
    }
}

/// Build the JSON template embedded in the prompt.
pub fn build_json_template(vendor_card: &str, customer_card: &str) -> String {
    let template = ComparisonResult {
        vendor_card: placeholder_profile(vendor_card, 4),
        customer_card: placeholder_profile(customer_card, 3),
        sales_pitch: SALES_PITCH_GUIDE.to_string(),
    };
    // Plain structs of strings always serialize
    serde_json::to_string_pretty(&template).unwrap_or_default()
}

/// Build the comparison prompt for a vendor card and the customer's current card.
pub fn build_comparison_prompt(vendor_card: &str, customer_card: &str) -> String {
    format!(
        r#"You are a credit card expert helping sales professionals. Compare these two credit cards and provide:

1. Detailed features, fees, cashback rates, rewards, and credit limits for both cards
2. A persuasive sales pitch to help convince the customer to switch from their current card to the vendor's card

Vendor Card (the one being sold): {vendor_card}
Customer's Current Card: {customer_card}

Please provide the response in this exact JSON format:
{template}

Ensure all details are accurate and based on current credit card offerings in India.
"#,
        template = build_json_template(vendor_card, customer_card),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_cards() {
        let prompt = build_comparison_prompt("HDFC Regalia Credit Card", "Kotak 811 Credit Card");
        assert!(prompt.contains("Vendor Card (the one being sold): HDFC Regalia Credit Card"));
        assert!(prompt.contains("Customer's Current Card: Kotak 811 Credit Card"));
        assert!(prompt.contains("current credit card offerings in India"));
    }

    #[test]
    fn test_template_is_valid_schema() {
        let template = build_json_template("A Card", "B Card");
        let parsed: ComparisonResult = serde_json::from_str(&template).unwrap();
        assert_eq!(parsed.vendor_card.name, "A Card");
        assert_eq!(parsed.vendor_card.features.len(), 4);
        assert_eq!(parsed.customer_card.name, "B Card");
        assert_eq!(parsed.customer_card.features.len(), 3);
        assert_eq!(parsed.sales_pitch, SALES_PITCH_GUIDE);
    }

    #[test]
    fn test_template_key_order() {
        let template = build_json_template("A", "B");
        let vendor = template.find("\"vendorCard\"").unwrap();
        let customer = template.find("\"customerCard\"").unwrap();
        let pitch = template.find("\"salesPitch\"").unwrap();
        assert!(vendor < customer && customer < pitch);
    }

    #[test]
    fn test_quotes_in_names_are_escaped() {
        let template = build_json_template("The \"Black\" Card", "B");
        let parsed: ComparisonResult = serde_json::from_str(&template).unwrap();
        assert_eq!(parsed.vendor_card.name, "The \"Black\" Card");
    }
}
