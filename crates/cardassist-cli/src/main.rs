//! CardAssist - credit card comparison and sales pitch assistant
//!
//! A CLI tool that compares the card being sold with the customer's
//! current card using a generative-language API.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    cardassist_app::logging::init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
