//! Thiên Cơ - Entry Point
//!
//! Command-line front end for the divination engines: cast a hexagram or
//! print the zodiac hours of a calendar day. Interpretation of a cast is
//! optional and only attempted when the reading service is configured.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thien_co::core::error::Result;
use thien_co::core::types::Language;
use thien_co::hexagram::{cast_six_lines, CastResult, Line};
use thien_co::reading::{CastReadingRequest, ReadingClient};
use thien_co::zodiac::calculate_zodiac_data;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(name = "thien-co", about = "I-Ching casting and Can Chi zodiac hours")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Cast a hexagram, optionally asking the reading service to interpret it
    Cast {
        /// Question held while casting; enables interpretation
        #[arg(long)]
        question: Option<String>,
        /// Seed for a reproducible cast
        #[arg(long)]
        seed: Option<u64>,
        /// Display language (vi or en)
        #[arg(long, default_value = "vi")]
        lang: Language,
    },
    /// Show the Can Chi day name and zodiac hours for a calendar day
    Hours {
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Display language (vi or en)
        #[arg(long, default_value = "vi")]
        lang: Language,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("thien_co=info")
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Cast {
            question,
            seed,
            lang,
        } => run_cast(question, seed, lang),
        Command::Hours { date, lang } => {
            run_hours(date, lang);
            Ok(())
        }
    }
}

fn run_cast(question: Option<String>, seed: Option<u64>, language: Language) -> Result<()> {
    let lines = match seed {
        Some(seed) => cast_six_lines(&mut ChaCha8Rng::seed_from_u64(seed)),
        None => cast_six_lines(&mut rand::thread_rng()),
    };
    let cast = CastResult::from_lines(lines)?;

    println!();
    for line in cast.lines.iter().rev() {
        println!("  {}", render_line(line));
    }
    println!();

    let primary = cast.primary_hexagram;
    println!(
        "#{} {} ({})",
        primary.number,
        primary.name(language),
        primary.pinyin
    );
    println!("  {}", primary.judgment(language));
    println!("  {}", primary.image(language));

    if let Some(secondary) = cast.secondary_hexagram {
        let positions: Vec<String> = cast
            .changing_line_indices
            .iter()
            .map(|i| (i + 1).to_string())
            .collect();
        println!();
        println!("Moving lines: {}", positions.join(", "));
        println!(
            "Transforms into #{} {} ({})",
            secondary.number,
            secondary.name(language),
            secondary.pinyin
        );
    }

    if let Some(question) = question {
        interpret(&question, &cast, language);
    }

    Ok(())
}

/// Ask the reading service for commentary; a failure loses nothing but prose.
fn interpret(question: &str, cast: &CastResult, language: Language) {
    let client = match ReadingClient::from_env() {
        Ok(client) => client,
        Err(_) => {
            tracing::warn!("READING_API_KEY not set - showing the cast without interpretation");
            return;
        }
    };

    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Could not start async runtime: {}", e);
            return;
        }
    };

    let request = CastReadingRequest::new(question, cast, language);
    match rt.block_on(client.interpret_cast(&request)) {
        Ok(interpretation) => {
            println!();
            println!("{}", interpretation.overall);
            println!();
            println!("Judgment: {}", interpretation.judgment_commentary);
            println!("Image: {}", interpretation.image_commentary);
            for entry in &interpretation.changing_line_commentaries {
                println!("Line {}: {}", entry.line_number, entry.commentary);
            }
            if let Some(transformed) = &interpretation.transformed_commentary {
                println!("Transformed: {}", transformed);
            }
        }
        Err(e) => tracing::error!("Interpretation failed: {}", e),
    }
}

/// Render one line: solid for Yang, broken for Yin, marked when moving.
fn render_line(line: &Line) -> String {
    let glyph = if line.is_yang {
        "━━━━━━━━━"
    } else {
        "━━━   ━━━"
    };
    let marker = match (line.is_changing, line.is_yang) {
        (true, true) => "  ○",
        (true, false) => "  ✕",
        _ => "",
    };
    format!("{}{}", glyph, marker)
}

fn run_hours(date: NaiveDate, language: Language) {
    let data = calculate_zodiac_data(date, language);

    println!();
    println!("{}  -  {}", date, data.day_can_chi);
    println!();
    for hour in &data.hours {
        let kind = match (language, hour.is_auspicious) {
            (Language::Vietnamese, true) => "Hoàng Đạo",
            (Language::Vietnamese, false) => "Hắc Đạo",
            (Language::English, true) => "auspicious",
            (Language::English, false) => "inauspicious",
        };
        println!(
            "  {:<6} {}  {:<12} {}",
            hour.name, hour.time_range, kind, hour.governing_star
        );
    }
}
