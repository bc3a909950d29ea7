//! Domain layer - card catalog, selection rules, operators and fallback data

pub mod model;
pub mod service;

pub use model::{
    resolve_card, CardList, CardSelection, Operator, ResolvedCard, SignInMode, CUSTOMER_CARDS,
    VENDOR_CARDS,
};
pub use service::{bank_from_name, fallback_comparison};
