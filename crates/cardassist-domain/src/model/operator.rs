//! Simulated operator sign-in.
//!
//! There is no account store: signing in only checks that the form is
//! filled in and derives a display name. Nothing is persisted.

use cardassist_types::OperatorError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInMode {
    #[default]
    Login,
    Signup,
}

/// The salesperson using the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub email: String,
    pub name: String,
}

impl Operator {
    pub fn sign_in(
        mode: SignInMode,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<Self, OperatorError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        if mode == SignInMode::Signup && name.is_none() {
            return Err(OperatorError::MissingName);
        }
        if password.is_empty() {
            return Err(OperatorError::MissingPassword);
        }
        Self::identify(email, name)
    }

    /// Identify an operator without a password, for labelling output only.
    pub fn identify(email: &str, name: Option<&str>) -> Result<Self, OperatorError> {
        let email = email.trim();
        let local = match email.split_once('@') {
            Some((local, _)) if !local.is_empty() => local,
            _ => return Err(OperatorError::InvalidEmail(email.to_string())),
        };

        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(local);

        Ok(Self {
            email: email.to_string(),
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_derives_name_from_email() {
        let op = Operator::sign_in(SignInMode::Login, "priya.sharma@bank.in", "secret", None).unwrap();
        assert_eq!(op.name, "priya.sharma");
        assert_eq!(op.email, "priya.sharma@bank.in");
    }

    #[test]
    fn test_login_keeps_given_name() {
        let op = Operator::sign_in(SignInMode::Login, "ps@bank.in", "pw", Some("Priya Sharma")).unwrap();
        assert_eq!(op.name, "Priya Sharma");
    }

    #[test]
    fn test_signup_requires_name() {
        assert_eq!(
            Operator::sign_in(SignInMode::Signup, "ps@bank.in", "pw", Some("  ")),
            Err(OperatorError::MissingName)
        );
    }

    #[test]
    fn test_password_required() {
        assert_eq!(
            Operator::sign_in(SignInMode::Login, "ps@bank.in", "", None),
            Err(OperatorError::MissingPassword)
        );
    }

    #[test]
    fn test_invalid_email() {
        assert!(matches!(
            Operator::identify("no-at-sign", None),
            Err(OperatorError::InvalidEmail(_))
        ));
        assert!(matches!(
            Operator::identify("@bank.in", None),
            Err(OperatorError::InvalidEmail(_))
        ));
    }
}
