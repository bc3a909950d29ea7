//! Fixed card enumerations offered to the operator

use cardassist_types::SelectionError;

/// Cards the operator can sell
pub const VENDOR_CARDS: [&str; 9] = [
    "Kotak White Credit Card",
    "Kotak Royale Signature Credit Card",
    "HDFC Regalia Credit Card",
    "HDFC Diners Club Black",
    "ICICI Amazon Pay Credit Card",
    "ICICI Emeralde Credit Card",
    "SBI Elite Credit Card",
    "Axis Bank Magnus Credit Card",
    "American Express Platinum Card",
];

/// Cards a customer may already hold
pub const CUSTOMER_CARDS: [&str; 10] = [
    "HDFC Regalia Credit Card",
    "ICICI Amazon Pay Credit Card",
    "SBI SimplyCLICK Credit Card",
    "Axis Bank Neo Credit Card",
    "Kotak 811 Credit Card",
    "Standard Chartered Ultimate Credit Card",
    "CitiBank Rewards Credit Card",
    "HSBC Cashback Credit Card",
    "PNB RuPay Select Credit Card",
    "BOB Premier Credit Card",
];

/// Which enumeration a name is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardList {
    Vendor,
    Customer,
}

impl CardList {
    pub fn cards(&self) -> &'static [&'static str] {
        match self {
            CardList::Vendor => &VENDOR_CARDS,
            CardList::Customer => &CUSTOMER_CARDS,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardList::Vendor => "Vendor cards",
            CardList::Customer => "Customer cards",
        }
    }
}

/// Result of resolving operator input against a card list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedCard {
    /// Matched a catalog entry
    Catalog(&'static str),
    /// Free-text name not in the catalog
    Custom(String),
}

impl ResolvedCard {
    pub fn name(&self) -> &str {
        match self {
            ResolvedCard::Catalog(name) => *name,
            ResolvedCard::Custom(name) => name.as_str(),
        }
    }

    pub fn into_name(self) -> String {
        match self {
            ResolvedCard::Catalog(name) => name.to_string(),
            ResolvedCard::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ResolvedCard::Custom(_))
    }
}

/// Resolve a 1-based index or a card name against a list.
///
/// Names match case-insensitively. Anything else passes through as a
/// custom card; empty input is left to selection validation.
pub fn resolve_card(list: CardList, input: &str) -> Result<ResolvedCard, SelectionError> {
    let input = input.trim();
    let cards = list.cards();

    if let Ok(index) = input.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| cards.get(i)) {
            Some(name) => Ok(ResolvedCard::Catalog(*name)),
            None => Err(SelectionError::IndexOutOfRange {
                index,
                len: cards.len(),
            }),
        };
    }

    Ok(cards
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(input))
        .map(ResolvedCard::Catalog)
        .unwrap_or_else(|| ResolvedCard::Custom(input.to_string())))
}
