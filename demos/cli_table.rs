//! CLI table harness.
//!
//! Drives the round engine from a terminal prompt, printing dealer draws
//! one at a time through the step-wise primitives.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{ActionError, Card, DealerHand, DealerStep, Outcome, Phase, Rank, Round, Suit};

fn main() {
    env_logger::init();

    println!("Blackjack table harness (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(seed);

    loop {
        if let Err(err) = round.start() {
            println!("Start error: {err}");
            break;
        }

        while round.phase() == Phase::PlayerTurn {
            print_table(&round);

            let action = prompt_line("Action ([h]it / [s]tand / [q]uit): ");
            match action.as_str() {
                "h" | "hit" => match round.player_hit() {
                    Ok(card) => println!("You draw {}.", format_card(&card)),
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => {
                    if let Err(err) = run_dealer(&mut round) {
                        println!("Action error: {err}");
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&round);
        match round.outcome() {
            Some(Outcome::PlayerWins) => println!("You win!"),
            Some(Outcome::DealerWins) => println!("Dealer wins."),
            Some(Outcome::Push) => println!("Push."),
            None => {}
        }

        if prompt_line("Deal again? (press Enter, or 'q' to quit): ") == "q" {
            return;
        }
    }
}

fn run_dealer(round: &mut Round) -> Result<(), ActionError> {
    round.begin_dealer_turn()?;
    println!(
        "Dealer reveals {} (score {}).",
        format_dealer(round.dealer()),
        round.dealer().score()
    );

    loop {
        match round.dealer_draw_step()? {
            DealerStep::Drew(card) => println!("Dealer draws {}.", format_card(&card)),
            DealerStep::Finished(result) => {
                if result.dealer_score > 21 {
                    println!("Dealer busts at {}.", result.dealer_score);
                } else {
                    println!("Dealer stands at {}.", result.dealer_score);
                }
                return Ok(());
            }
        }
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

fn print_table(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());
    println!(
        "Dealer: {} (score {})",
        format_dealer(round.dealer()),
        round.dealer_visible_score()
    );
    println!(
        "You:    {} (score {})",
        format_hand(round.player().cards()),
        round.player_score()
    );
    println!();
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.cards().is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        format_hand(dealer.cards())
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        Rank::Ace => ("A".to_string(), true),
        Rank::Jack => ("J".to_string(), true),
        Rank::Queen => ("Q".to_string(), true),
        Rank::King => ("K".to_string(), true),
        _ => (card.rank.base_value().to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
