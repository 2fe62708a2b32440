//! CLI blackjack example.
//!
//! Pass `--stop-when-ahead` to use the dealer rule that stops drawing as soon
//! as the dealer beats the player. Set `RUST_LOG=debug` to trace the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_table::{
    Card, DealerHand, DealerRule, Game, GameOptions, GameState, Hand, Outcome, Suit,
};

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut options = GameOptions::default();
    if std::env::args().any(|arg| arg == "--stop-when-ahead") {
        options = options.with_dealer_rule(DealerRule::StopWhenAhead);
    }
    let mut game = Game::new(options, seed);

    loop {
        print_tally(&game);

        match prompt_line("Deal a hand? (y/q): ").as_str() {
            "q" | "quit" | "n" | "no" => {
                println!("Goodbye.");
                break;
            }
            _ => {}
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            continue;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game);

            let action = prompt_line("Action: [h]it [s]tand: ");
            let result = match action.as_str() {
                "h" | "hit" => game.hit().map(|card| println!("You draw {}.", format_card(&card))),
                "s" | "stand" => game.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if game.state() == GameState::DealerTurn {
            match game.dealer_play() {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        if game.state() == GameState::RoundOver {
            print_table(&game);
            match game.showdown() {
                Ok(result) => println!("{}", outcome_text(result.outcome)),
                Err(err) => println!("Showdown error: {err}"),
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    if input.is_empty() {
        // EOF
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_tally(game: &Game) {
    let tally = game.tally();
    println!(
        "\nWins: {} Lose: {} Draw: {}",
        tally.wins(),
        tally.losses(),
        tally.draws()
    );
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!("\nDeck: {remaining} cards remaining");

    let dealer = game.dealer_hand();
    println!(
        "Dealer: {} (score {})",
        format_dealer(dealer),
        dealer.visible_score()
    );

    let hand = game.player_hand();
    println!("You:    {} (score {})\n", format_hand(hand), hand.score());
}

const fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Bust => "You're BUSTED",
        Outcome::Blackjack => "BlackJack!!!",
        Outcome::DealerBust | Outcome::PlayerWins => "You WON!!!",
        Outcome::DealerWins => "You LOSE :(",
        Outcome::Push => "It's a DRAW",
    }
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        format_hand(dealer.hand())
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

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
