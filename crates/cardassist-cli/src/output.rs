//! Output formatting module

use cardassist_app::service::ComparisonReport;
use cardassist_domain::CardList;
use cardassist_types::{CardProfile, OutputFormat, ResultSource, Result};
use std::fmt::Write;

pub fn output_cards(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "vendorCards": CardList::Vendor.cards(),
            "customerCards": CardList::Customer.cards(),
        }))?;
        println!("{}", content);
    } else {
        print!("{}", format_cards_table());
    }
    Ok(())
}

pub fn format_cards_table() -> String {
    let mut out = String::new();
    for list in [CardList::Vendor, CardList::Customer] {
        let _ = writeln!(out, "\n{}", list.label());
        let _ = writeln!(out, "{}", "=".repeat(list.label().chars().count()));
        for (i, name) in list.cards().iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", i + 1, name);
        }
    }
    out
}

pub fn output_report(output_format: OutputFormat, report: &ComparisonReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", format_report_table(report));
    }
    Ok(())
}

fn write_profile(out: &mut String, heading: &str, card: &CardProfile) {
    let _ = writeln!(out, "\n--- {}: {} ---", heading, card.name);
    let _ = writeln!(out, "Bank:            {}", card.bank);
    let _ = writeln!(out, "Annual fee:      {}", card.fees);
    let _ = writeln!(out, "Cashback:        {}", card.cashback);
    let _ = writeln!(out, "Rewards:         {}", card.rewards);
    let _ = writeln!(out, "Credit limit:    {}", card.limits);
    if !card.features.is_empty() {
        let _ = writeln!(out, "Features:");
        for feature in &card.features {
            let _ = writeln!(out, "  • {}", feature);
        }
    }
}

pub fn format_report_table(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let result = &report.outcome.result;

    let _ = writeln!(out, "\nCard Comparison");
    let _ = writeln!(out, "===============");
    if let Some(ref operator) = report.operator {
        let _ = writeln!(out, "Prepared by:     {} <{}>", operator.name, operator.email);
    }
    match report.outcome.source {
        ResultSource::Live => {
            let _ = writeln!(out, "Source:          live ({})", report.model);
        }
        ResultSource::Fallback(kind) => {
            let _ = writeln!(out, "Source:          sample data ({} failure)", kind);
        }
    }
    let _ = writeln!(
        out,
        "Generated:       {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    write_profile(&mut out, "Vendor card", &result.vendor_card);
    write_profile(&mut out, "Customer card", &result.customer_card);

    let _ = writeln!(out, "\nSales Pitch");
    let _ = writeln!(out, "===========");
    let _ = writeln!(out, "{}", result.sales_pitch);

    if report.outcome.is_fallback() {
        let _ = writeln!(
            out,
            "\nNote: live generation failed; the figures above are illustrative sample data."
        );
    }

    out
}
