//! Display functions for command results

use super::formatters::{create_progress_bar, spaced};
use crate::commands::{QueryResult, SurveyResult};
use crate::core::GameState;
use colored::Colorize;

/// Words per row when listing query results
const WORDS_PER_ROW: usize = 8;

/// Print the result of a dictionary query
pub fn print_query_result(result: &QueryResult) {
    match result {
        QueryResult::Scrambled { word, scramble } => {
            println!(
                "{} → {}",
                word.bright_white(),
                scramble.bright_yellow().bold()
            );
        }
        QueryResult::Membership { word, found } => {
            if *found {
                println!("{}", format!("✅ '{word}' is in the dictionary").green());
            } else {
                println!("{}", format!("❌ '{word}' is not in the dictionary").red());
            }
        }
        QueryResult::Words { label, words } => {
            println!("\n{}", "─".repeat(60).cyan());
            println!(
                "{} ({})",
                label.bright_cyan().bold(),
                words.len().to_string().bright_yellow()
            );
            println!("{}", "─".repeat(60).cyan());

            if words.is_empty() {
                println!("  {}", "(none)".bright_black());
            }
            for row in words.chunks(WORDS_PER_ROW) {
                let row: Vec<String> = row.iter().map(|word| format!("{word:<10}")).collect();
                println!("  {}", row.join(" ").trim_end());
            }
        }
        QueryResult::Picked { length, word } => match word {
            Some(word) => println!("{}", word.bright_yellow().bold()),
            None => println!(
                "{}",
                format!("No word with {length} letters in the dictionary").red()
            ),
        },
    }
}

/// Print a freshly built puzzle with its full answer list
pub fn print_game_state(state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "NEW PUZZLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Scramble:  {}",
        spaced(&state.scramble().to_uppercase()).bright_yellow().bold()
    );
    println!("   Answer:    {}", state.original().bright_white());
    println!("   Sub-words: {}", state.sub_words().len());

    for word in state.sub_words().keys() {
        println!("     • {word}");
    }
}

/// Print a survey report
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}-letter words, sub-words of {}+ letters ",
        "SURVEY:".bright_cyan().bold(),
        result.length,
        result.min_length
    );
    println!("{}", "═".repeat(60).cyan());

    let playable_pct = if result.total_words == 0 {
        0.0
    } else {
        result.playable as f64 / result.total_words as f64 * 100.0
    };
    let bar = create_progress_bar(playable_pct, 100.0, 30);

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Words:        {}", result.total_words);
    println!(
        "   Playable:     [{}] {} ({playable_pct:.1}%)",
        bar.green(),
        result.playable.to_string().bright_yellow()
    );
    println!("   Avg sub-words: {:.2}", result.average_sub_words);
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());

    if !result.richest.is_empty() {
        println!("\n🏆 {}", "Richest words:".bright_cyan().bold());
        for (i, (word, count)) in result.richest.iter().enumerate() {
            println!(
                "   {:>2}. {:<12} {}",
                i + 1,
                word.bright_white().bold(),
                count
            );
        }
    }
}
