//! CLI frontend for the duang horoscope engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "duang",
    about = "duang — a novelty horoscope calculator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full astrological profile for a birth date
    Profile {
        /// Birth date as YYYY-MM-DD
        date: String,

        /// Display language: th, en, zh
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Generate predictions for a birth date
    Predict {
        /// Birth date as YYYY-MM-DD
        date: String,

        /// Display language: th, en, zh
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Forecast period: daily, weekly, monthly
        #[arg(short, long, default_value = "daily")]
        period: String,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show lucky numbers, colors, and days for a birth date
    Lucky {
        /// Birth date as YYYY-MM-DD
        date: String,

        /// Display language: th, en, zh
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Profile { date, lang, json } => commands::profile::run(&date, &lang, json),
        Commands::Predict {
            date,
            lang,
            period,
            json,
        } => commands::predict::run(&date, &lang, &period, json),
        Commands::Lucky { date, lang, json } => commands::lucky::run(&date, &lang, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
