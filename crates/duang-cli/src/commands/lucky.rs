use colored::Colorize;

use duang_core::AstroProfile;
use duang_core::numerology::lucky_direction;
use duang_predict::PredictionGenerator;

pub fn run(date: &str, lang: &str, json: bool) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let generator = PredictionGenerator::from_code(lang).map_err(|e| e.to_string())?;

    let profile = AstroProfile::calculate_now(birth);
    let lucky = generator
        .lucky_elements(&profile)
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&lucky).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let lang = generator.language();
    println!("  {}", profile.birth_date.to_string().bold());
    println!();
    let numbers: Vec<String> = lucky.numbers.iter().map(u32::to_string).collect();
    println!("  numbers:    {}", numbers.join(", "));
    println!("  colors:     {}", lucky.colors.join(", "));
    println!("  days:       {}", lucky.days.join(", "));
    println!(
        "  direction:  {}",
        lucky_direction(profile.birth_date.day()).label(lang)
    );

    Ok(())
}
