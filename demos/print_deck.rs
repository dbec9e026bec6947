//! Builds a deck from a few prompts and prints it.
//!
//! Set `RUST_LOG=deckrs=trace` to see each pipeline step.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use deckrs::{Card, Color, DeckOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Deck builder example (press enter to accept defaults)");

    let decks = prompt_usize("Number of decks [1]: ").unwrap_or(1);
    let jokers = prompt_usize("Number of jokers per deck [0]: ").unwrap_or(0);
    let no_red = matches!(prompt_line("Remove red cards? (y/N): ").as_str(), "y" | "yes");

    let mut options = DeckOptions::default();
    if no_red {
        options = options.with_filter_color([Color::Red]);
    }
    options = options.with_jokers(jokers).with_decks(decks);

    let options = match prompt_line("Order: (s)huffle, (d)efault, (r)everse [s]: ").as_str() {
        "d" | "default" => options.with_shuffle().with_default_sort(),
        "r" | "reverse" => options.with_reverse_sort(),
        _ => options.with_shuffle(),
    };

    let cards = options.build();
    println!("{} cards:", cards.len());
    for (index, card) in cards.iter().enumerate() {
        println!("{:>4}  {}", index + 1, format_card(card));
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit().color() {
        Some(Color::Red) => "31",
        Some(Color::Black) => "34",
        None => "35",
    };
    colorize(&card.to_string(), color_code)
}
