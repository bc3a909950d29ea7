//! Domain model types

pub mod catalog;
pub mod operator;
pub mod selection;

pub use catalog::{resolve_card, CardList, ResolvedCard, CUSTOMER_CARDS, VENDOR_CARDS};
pub use operator::{Operator, SignInMode};
pub use selection::CardSelection;
