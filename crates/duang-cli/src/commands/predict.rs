use colored::Colorize;

use duang_core::AstroProfile;
use duang_predict::{Category, PredictionGenerator};

pub fn run(date: &str, lang: &str, period: &str, json: bool) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let period = super::parse_period(period)?;
    let generator = PredictionGenerator::from_code(lang).map_err(|e| e.to_string())?;

    let profile = AstroProfile::calculate_now(birth);
    let prediction = generator.generate(&profile, period);

    if json {
        let out = serde_json::to_string_pretty(&prediction).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let lang = generator.language();
    println!(
        "  {} — {} [{}]",
        profile.birth_date.to_string().bold(),
        period.label(lang),
        lang.to_string().dimmed()
    );
    println!();

    if let Some(overview) = &prediction.overview {
        println!("  {overview}");
        println!();
    }

    for cat in Category::all() {
        println!("  {}", cat.label(lang).bold());
        if let Some(lines) = prediction.category(*cat) {
            for line in lines {
                println!("    - {line}");
            }
        }
        println!();
    }

    println!("  confidence: {:.1}%", prediction.confidence);

    Ok(())
}
