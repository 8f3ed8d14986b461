//! Clan Progression - Inspection tool
//!
//! Prints a level table and resolves experience values against it.
//!
//! ```text
//! clan-progression [table-file] [experience...]
//! clan-progression --export <path>
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};

use clan_progression::data::export_default_table;
use clan_progression::{ClanProgressState, LevelInformation, ProgressionEngine};

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--export") {
        let Some(path) = args.get(1) else {
            bail!("usage: clan-progression --export <path>");
        };
        export_default_table(Path::new(path))
            .with_context(|| format!("exporting default level table to {}", path))?;
        println!("Wrote default level table to {}", path);
        return Ok(());
    }

    // A leading argument that is not a number names the table file
    let (engine, values) = match args.split_first() {
        Some((first, rest)) if first.parse::<i64>().is_err() => {
            let engine = ProgressionEngine::from_config_file(first)
                .with_context(|| format!("loading level table from {}", first))?;
            (engine, rest)
        }
        _ => (ProgressionEngine::default(), args.as_slice()),
    };

    print_table(&engine);

    for value in values {
        let experience: i64 = value
            .parse()
            .with_context(|| format!("invalid experience value {:?}", value))?;
        let state = ClanProgressState::with_progress(experience, engine.calculate_level(experience));
        print_information(&engine.level_information(&state));
    }

    log::info!("Resolved {} experience values", values.len());
    Ok(())
}

fn print_table(engine: &ProgressionEngine) {
    if engine.table().is_empty() {
        println!("(empty level table)");
        return;
    }
    println!("Level table (max level {}):", engine.max_level());
    for def in engine.table() {
        let benefits: Vec<String> = def
            .benefits
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        println!(
            "  {:>3}  {:>10} exp  {}",
            def.level,
            def.experience_required,
            benefits.join(", ")
        );
    }
}

fn print_information(info: &LevelInformation) {
    println!();
    println!("{} experience -> level {}/{}", info.experience, info.level, info.max_level);
    match (info.next_level, info.experience_to_next_level) {
        (Some(next), Some(remaining)) => println!(
            "  {} exp to level {} ({}%)",
            remaining,
            next,
            info.progress_percent()
        ),
        _ => println!("  max level reached"),
    }
    for (name, value) in &info.benefits {
        println!("  {}: {}", name, value);
    }
}

