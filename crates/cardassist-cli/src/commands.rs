//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_cards, output_report};
use cardassist_app::config::Config;
use cardassist_app::service::ComparisonService;
use cardassist_domain::{resolve_card, CardList, CardSelection, Operator, SignInMode};
use cardassist_gen::build_comparison_prompt;
use cardassist_types::{OperatorError, OutputFormat, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref model) = cli.model {
        config.model = model.clone();
    }
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Cards => output_cards(format),

        Commands::Compare {
            vendor,
            customer,
            strict,
            pitch_only,
            output,
            operator,
            name,
            password,
            signup,
        } => {
            if *strict {
                config.strict = true;
            }
            let operator = operator
                .as_deref()
                .map(|email| sign_in_operator(email, name.as_deref(), password.as_deref(), *signup))
                .transpose()?;
            cmd_compare(&config, format, vendor, customer, *pitch_only, output.clone(), operator)
        }

        Commands::Prompt { vendor, customer } => cmd_prompt(vendor, customer),

        Commands::Config {
            show,
            set_model,
            set_base_url,
            set_key_file,
            set_key_env,
            set_timeout,
            set_json_mode,
            set_strict,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_model.clone(),
            set_base_url.clone(),
            set_key_file.clone(),
            set_key_env.clone(),
            *set_timeout,
            *set_json_mode,
            *set_strict,
            *set_output,
            *reset,
        ),
    }
}

/// Resolve both card inputs against the catalog and validate the pair
fn resolve_selection(vendor: &str, customer: &str) -> Result<CardSelection> {
    let vendor = resolve_card(CardList::Vendor, vendor)?;
    let customer = resolve_card(CardList::Customer, customer)?;

    if vendor.is_custom() && !vendor.name().is_empty() {
        warn!(card = vendor.name(), "vendor card is not in the catalog");
    }
    if customer.is_custom() && !customer.name().is_empty() {
        warn!(card = customer.name(), "customer card is not in the catalog");
    }

    Ok(CardSelection::new(vendor.into_name(), customer.into_name())?)
}

/// Label the report with an operator. With a password the operator goes
/// through the simulated login/signup form checks; nothing is stored.
fn sign_in_operator(
    email: &str,
    name: Option<&str>,
    password: Option<&str>,
    signup: bool,
) -> std::result::Result<Operator, OperatorError> {
    let Some(password) = password else {
        return Operator::identify(email, name);
    };

    let mode = if signup { SignInMode::Signup } else { SignInMode::Login };
    let operator = Operator::sign_in(mode, email, password, name)?;
    match mode {
        SignInMode::Login => info!(operator = %operator.name, "operator logged in"),
        SignInMode::Signup => info!(operator = %operator.name, "operator account created"),
    }
    Ok(operator)
}

fn waiting_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message("Generating comparison...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn cmd_compare(
    config: &Config,
    format: OutputFormat,
    vendor: &str,
    customer: &str,
    pitch_only: bool,
    output: Option<PathBuf>,
    operator: Option<Operator>,
) -> Result<()> {
    let selection = resolve_selection(vendor, customer)?;
    let service = ComparisonService::from_config(config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let spinner = waiting_spinner();
    let report = runtime.block_on(service.compare(&selection, operator));
    spinner.finish_and_clear();
    let report = report?;

    if let Some(path) = output {
        std::fs::write(&path, &report.outcome.result.sales_pitch)?;
        eprintln!("Sales pitch saved to {}", path.display());
    }

    if pitch_only {
        println!("{}", report.outcome.result.sales_pitch);
        return Ok(());
    }

    output_report(format, &report)
}

fn cmd_prompt(vendor: &str, customer: &str) -> Result<()> {
    let selection = resolve_selection(vendor, customer)?;
    println!("{}", build_comparison_prompt(selection.vendor(), selection.customer()));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_model: Option<String>,
    set_base_url: Option<String>,
    set_key_file: Option<PathBuf>,
    set_key_env: Option<String>,
    set_timeout: Option<u64>,
    set_json_mode: Option<bool>,
    set_strict: Option<bool>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    // Environment overrides apply per run and must not be written back
    let mut config = Config::load_from(&Config::config_path()?)?;
    let mut modified = false;

    if let Some(model) = set_model {
        config.model = model;
        modified = true;
    }

    if let Some(base_url) = set_base_url {
        config.base_url = base_url;
        modified = true;
    }

    if let Some(path) = set_key_file {
        config.api_key_file = Some(path);
        modified = true;
    }

    if let Some(var) = set_key_env {
        config.api_key_env = var;
        modified = true;
    }

    if let Some(timeout_secs) = set_timeout {
        config.timeout_secs = timeout_secs;
        modified = true;
    }

    if let Some(json_mode) = set_json_mode {
        config.json_mode = json_mode;
        modified = true;
    }

    if let Some(strict) = set_strict {
        config.strict = strict;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.validate()?;
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardassist_types::{Error, SelectionError};

    #[test]
    fn test_resolve_selection_by_index() {
        let selection = resolve_selection("1", "3").unwrap();
        assert_eq!(selection.vendor(), "Kotak White Credit Card");
        assert_eq!(selection.customer(), "SBI SimplyCLICK Credit Card");
    }

    #[test]
    fn test_resolve_selection_custom_names() {
        let selection = resolve_selection("IDFC First Wealth", "OneCard Metal").unwrap();
        assert_eq!(selection.vendor(), "IDFC First Wealth");
        assert_eq!(selection.customer(), "OneCard Metal");
    }

    #[test]
    fn test_resolve_selection_missing_card() {
        let err = resolve_selection("1", "  ").unwrap_err();
        assert!(matches!(err, Error::Selection(SelectionError::MissingCustomer)));
    }

    #[test]
    fn test_sign_in_operator() {
        let op = sign_in_operator("ravi@bank.in", None, Some("pw"), false).unwrap();
        assert_eq!(op.name, "ravi");

        let op = sign_in_operator("ravi@bank.in", Some("Ravi Kumar"), Some("pw"), true).unwrap();
        assert_eq!(op.name, "Ravi Kumar");

        assert_eq!(
            sign_in_operator("ravi@bank.in", None, Some("pw"), true),
            Err(OperatorError::MissingName)
        );
        assert_eq!(
            sign_in_operator("ravi@bank.in", None, Some(""), false),
            Err(OperatorError::MissingPassword)
        );
    }

    #[test]
    fn test_operator_without_password_is_identified() {
        let op = sign_in_operator("ravi@bank.in", None, None, false).unwrap();
        assert_eq!(op.email, "ravi@bank.in");
    }

    #[test]
    fn test_resolve_selection_bad_index() {
        let err = resolve_selection("42", "1").unwrap_err();
        assert!(matches!(
            err,
            Error::Selection(SelectionError::IndexOutOfRange { index: 42, len: 9 })
        ));
    }
}
