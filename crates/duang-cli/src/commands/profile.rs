use colored::Colorize;

use duang_core::numerology::{life_path_trait, lucky_direction};
use duang_core::{AstroProfile, Language};

pub fn run(date: &str, lang: &str, json: bool) -> Result<(), String> {
    let birth = super::parse_date(date)?;
    let lang = super::parse_lang(lang)?;

    let profile = AstroProfile::calculate_now(birth);

    if json {
        let out = serde_json::to_string_pretty(&profile).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} [{}]",
        profile.birth_date.to_string().bold(),
        lang.to_string().dimmed()
    );
    println!();
    println!("  age:           {} years", profile.age);
    println!("  buddhist era:  {}", profile.buddhist_era);
    println!();

    if let Some(western) = profile.western {
        println!(
            "  western:       {} ({})",
            western.name(),
            western.label(lang)
        );
    }
    if let Some(chinese) = profile.chinese {
        println!(
            "  chinese:       {} {} ({} {})",
            chinese.element.name(),
            chinese.animal.name(),
            chinese.element.label(lang),
            chinese.animal.label(lang)
        );
    }
    if let Some(moon) = profile.moon {
        println!("  moon:          {} ({})", moon.name(), moon.label(lang));
    }
    if let Some(vedic) = profile.vedic {
        println!(
            "  vedic:         {} ({}, {})",
            vedic.name(),
            vedic.western_equivalent().name(),
            vedic.label(lang)
        );
    }
    println!();

    if let Some(numerology) = profile.numerology {
        println!("  {}", "Numerology:".dimmed());
        print!("  life path:     {}", numerology.life_path);
        if let Some((trait_name, trait_th)) = life_path_trait(numerology.life_path) {
            match lang {
                Language::Thai => println!(" — {trait_th}"),
                _ => println!(" — {trait_name}"),
            }
        } else {
            println!();
        }
        println!("  karma:         {}", numerology.karma);
        println!("  soul urge:     {}", numerology.soul_urge);
        println!("  personality:   {}", numerology.personality);
        println!("  penta:         {}", numerology.penta);
        println!(
            "  direction:     {}",
            lucky_direction(profile.birth_date.day()).label(lang)
        );
        println!();
    }

    println!("  {}", "Biorhythm:".dimmed());
    println!("  physical:      {:.1}%", profile.biorhythm.physical);
    println!("  emotional:     {:.1}%", profile.biorhythm.emotional);
    println!("  intellectual:  {:.1}%", profile.biorhythm.intellectual);

    Ok(())
}
