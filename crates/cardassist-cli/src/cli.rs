//! CLI definition using clap

use cardassist_types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardassist")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Credit card comparison and sales pitch assistant")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Model name override
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the vendor and customer cards
    Cards,

    /// Compare the vendor card with the customer's card and write a sales pitch
    Compare {
        /// Card being sold (name or number from `cards`)
        #[arg(long)]
        vendor: String,

        /// Customer's current card (name or number from `cards`)
        #[arg(long)]
        customer: String,

        /// Fail instead of showing sample data when generation fails
        #[arg(long)]
        strict: bool,

        /// Print only the sales pitch
        #[arg(long)]
        pitch_only: bool,

        /// Also write the sales pitch to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Operator email shown on the report
        #[arg(long)]
        operator: Option<String>,

        /// Operator display name (defaults to the email's local part)
        #[arg(long, requires = "operator")]
        name: Option<String>,

        /// Sign the operator in with this password before comparing
        #[arg(long, requires = "operator")]
        password: Option<String>,

        /// Sign up instead of logging in (requires --name)
        #[arg(long, requires = "password")]
        signup: bool,
    },

    /// Print the prompt that would be sent, without calling the API
    Prompt {
        /// Card being sold (name or number from `cards`)
        #[arg(long)]
        vendor: String,

        /// Customer's current card (name or number from `cards`)
        #[arg(long)]
        customer: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set model
        #[arg(long)]
        set_model: Option<String>,

        /// Set API base URL
        #[arg(long)]
        set_base_url: Option<String>,

        /// Read the API key from this file
        #[arg(long)]
        set_key_file: Option<PathBuf>,

        /// Read the API key from this environment variable
        #[arg(long)]
        set_key_env: Option<String>,

        /// Set request timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,

        /// Ask the API for JSON output
        #[arg(long)]
        set_json_mode: Option<bool>,

        /// Fail instead of showing sample data
        #[arg(long)]
        set_strict: Option<bool>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from([
            "cardassist",
            "compare",
            "--vendor",
            "3",
            "--customer",
            "HSBC Cashback Credit Card",
            "--pitch-only",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Compare {
                vendor,
                customer,
                pitch_only,
                strict,
                ..
            } => {
                assert_eq!(vendor, "3");
                assert_eq!(customer, "HSBC Cashback Credit Card");
                assert!(pitch_only);
                assert!(!strict);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_compare_requires_both_cards() {
        assert!(Cli::try_parse_from(["cardassist", "compare", "--vendor", "1"]).is_err());
    }

    #[test]
    fn test_name_requires_operator() {
        assert!(Cli::try_parse_from([
            "cardassist", "compare", "--vendor", "1", "--customer", "2", "--name", "Ravi",
        ])
        .is_err());
    }

    #[test]
    fn test_signup_requires_password() {
        assert!(Cli::try_parse_from([
            "cardassist", "compare", "--vendor", "1", "--customer", "2", "--operator", "a@b.in",
            "--signup",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_config_flags() {
        let cli = Cli::try_parse_from([
            "cardassist",
            "config",
            "--set-json-mode",
            "true",
            "--set-timeout",
            "30",
        ])
        .unwrap();

        match cli.command {
            Commands::Config {
                set_json_mode,
                set_timeout,
                reset,
                ..
            } => {
                assert_eq!(set_json_mode, Some(true));
                assert_eq!(set_timeout, Some(30));
                assert!(!reset);
            }
            _ => panic!("expected config"),
        }
    }
}
