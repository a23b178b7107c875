//! CLI blackjack demo.
//!
//! Set `RUST_LOG=blackjack_sim=debug` to watch the engine's transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_sim::{
    Card, CardView, Game, GameEvent, GameOptions, GameState, HandOutcome, HandSlot, Seat,
    Snapshot, Suit,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let chips = options.chips;
    let game = Game::new(options, seed);

    loop {
        let snapshot = game.snapshot();
        if snapshot.balance == 0 && snapshot.bet == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        println!(
            "\nBalance {} | streak {} | hands played {}",
            snapshot.balance, snapshot.streak, snapshot.hands_played
        );

        let Some(bet) = prompt_usize(&format!(
            "Bet amount (chips {chips:?}, up to {}, 0 to quit): ",
            snapshot.balance
        )) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet rejected: {err}");
            continue;
        }

        let mut snapshot = match game.start_round() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                println!("Deal rejected: {err}");
                let _ = game.reset_bet();
                continue;
            }
        };
        narrate(&game);

        if snapshot.state == GameState::InsurancePending {
            println!("Dealer shows an Ace. Insurance costs {}.", snapshot.bet / 2);
            let take = matches!(prompt_line("Take insurance? (y/n): ").as_str(), "y" | "yes");
            match game.decide_insurance(take) {
                Ok(next) => snapshot = next,
                Err(err) => println!("Insurance rejected: {err}"),
            }
            narrate(&game);
        }

        while snapshot.state == GameState::PlayerTurn {
            print_table(&snapshot);

            let action = prompt_line("Action: [h]it [s]tand [d]ouble s[p]lit: ");
            let result = match action.as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down(),
                "p" | "split" => game.split(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(next) => snapshot = next,
                Err(err) => println!("Action rejected: {err}"),
            }
            narrate(&game);
        }

        print_table(&snapshot);
        if let Some(result) = game.last_result() {
            println!("Round complete: {:?}, net {}", result.outcome(), result.net());
        }

        if let Err(err) = game.new_round() {
            println!("Could not start a new round: {err}");
            break;
        }
    }
}

/// Prints what happened since the last call.
fn narrate(game: &Game) {
    game.take_steps().deliver(&mut |event: &GameEvent| match event {
        GameEvent::CardDealt { seat, card } => {
            let who = match seat {
                Seat::Dealer => "Dealer",
                Seat::Player(HandSlot::Main) => "You",
                Seat::Player(HandSlot::Split) => "Split hand",
            };
            println!("  {who}: {}", format_view(card));
        }
        GameEvent::CardFlipped { card } => println!("  Dealer turns up {}", format_card(card)),
        GameEvent::Reshuffled => println!("  Deck reshuffled."),
        GameEvent::InsurancePaid { payout } => println!("  Insurance pays {payout}."),
        GameEvent::Won { outcome, payout, .. } => match outcome {
            HandOutcome::Blackjack => println!("  Blackjack! You win {payout}."),
            HandOutcome::Charlie => println!("  5-Card Charlie! You win {payout}."),
            _ => println!("  You win {payout}."),
        },
        GameEvent::Lost { outcome, stake, .. } => {
            if *outcome == HandOutcome::Bust {
                println!("  Bust! You lose {stake}.");
            } else {
                println!("  You lose {stake}.");
            }
        }
        GameEvent::Pushed { .. } => println!("  Push. Your bet is returned."),
        GameEvent::AchievementUnlocked { name, .. } => {
            println!("  Achievement unlocked: {name}");
        }
        _ => {}
    });
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
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nDealer: {} (value {})",
        format_views(&snapshot.dealer),
        snapshot.dealer_value
    );

    let marker = |slot| {
        if snapshot.active_hand == Some(slot) {
            "*"
        } else {
            " "
        }
    };
    println!(
        "{} Hand: {} (value {})",
        marker(HandSlot::Main),
        format_views(&snapshot.player),
        snapshot.player_value
    );
    if let (Some(split), Some(value)) = (&snapshot.split, snapshot.split_value) {
        println!(
            "{} Split: {} (value {value})",
            marker(HandSlot::Split),
            format_views(split)
        );
    }
    println!(
        "Bet {} | insurance {} | balance {}\n",
        snapshot.bet, snapshot.insurance, snapshot.balance
    );
}

fn format_views(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_view).collect::<Vec<_>>().join(" ")
}

fn format_view(card: &CardView) -> String {
    match card {
        CardView::FaceUp(card) => format_card(card),
        CardView::FaceDown => "??".to_string(),
    }
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
