//! Evaluator, deck, ledger, payout and achievement tests.

use std::collections::HashSet;

use blackjack_sim::{
    AchievementId, AchievementTracker, Card, ChipStack, DECK_SIZE, DealerHand, Deck, DeckError,
    GameOptions, Hand, HandOutcome, HandStatus, Ledger, LedgerError, Payout, Suit, hand, payout,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn cards(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Spades, rank)).collect()
}

#[test]
fn shuffled_deck_holds_each_card_once() {
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new_shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);

        let faces: HashSet<(Suit, u8)> = deck.cards().iter().map(|c| (c.suit, c.rank)).collect();
        assert_eq!(faces.len(), DECK_SIZE);
        assert!(deck.cards().iter().all(|c| (1..=13).contains(&c.rank)));
    }
}

#[test]
fn shuffle_is_reproducible_from_seed() {
    let first = Deck::new_shuffled(&mut ChaCha8Rng::seed_from_u64(7));
    let second = Deck::new_shuffled(&mut ChaCha8Rng::seed_from_u64(7));
    let other = Deck::new_shuffled(&mut ChaCha8Rng::seed_from_u64(8));

    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_ne!(first, Deck::ordered());
}

#[test]
fn draw_takes_from_the_front() {
    let mut deck = Deck::from_cards(cards(&[1, 2, 3, 4]));

    assert_eq!(deck.draw(2).unwrap(), cards(&[1, 2]));
    assert_eq!(deck.draw_one().unwrap(), card(Suit::Spades, 3));
    assert_eq!(deck.len(), 1);
}

#[test]
fn overdraw_leaves_deck_untouched() {
    let mut deck = Deck::from_cards(cards(&[5, 6]));

    assert_eq!(
        deck.draw(3),
        Err(DeckError::Exhausted {
            requested: 3,
            remaining: 2,
        })
    );
    assert_eq!(deck.cards(), cards(&[5, 6]).as_slice());

    deck.draw(2).unwrap();
    assert!(deck.is_empty());
    assert_eq!(
        deck.draw_one(),
        Err(DeckError::Exhausted {
            requested: 1,
            remaining: 0,
        })
    );
}

#[test]
fn aces_drop_to_one_as_needed() {
    assert_eq!(hand::value(&cards(&[1, 1])), 12);
    assert_eq!(hand::value(&cards(&[1, 1, 9])), 21);
    assert_eq!(hand::value(&cards(&[1, 6])), 17);
    assert!(hand::is_soft(&cards(&[1, 6])));
    assert_eq!(hand::value(&cards(&[1, 6, 10])), 17);
    assert!(!hand::is_soft(&cards(&[1, 6, 10])));
    assert_eq!(hand::value(&cards(&[11, 12, 13])), 30);
    assert_eq!(hand::value(&[]), 0);
}

#[test]
fn value_never_exceeds_aces_high_total() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..500 {
        let len = rng.random_range(1..=8);
        let hand_cards: Vec<Card> = (0..len)
            .map(|_| card(Suit::Hearts, rng.random_range(1..=13)))
            .collect();

        let aces_high: u32 = hand_cards
            .iter()
            .map(|c| u32::from(hand::single_card_value(c)))
            .sum();
        let value = u32::from(hand::value(&hand_cards));

        assert!(value <= aces_high);
        let has_ace = hand_cards.iter().any(Card::is_ace);
        if value > 21 {
            assert!(!hand::is_soft(&hand_cards));
        }
        if !has_ace {
            assert_eq!(value, aces_high);
        }
    }
}

#[test]
fn blackjack_charlie_and_bust() {
    assert!(hand::is_blackjack(&cards(&[1, 13])));
    assert!(hand::is_blackjack(&cards(&[10, 1])));
    assert!(!hand::is_blackjack(&cards(&[7, 7, 7])));

    let five = cards(&[2, 3, 4, 5, 6]);
    assert_eq!(hand::value(&five), 20);
    assert!(hand::is_charlie(&five, 5));
    assert!(!hand::is_charlie(&five[..4], 5));
    assert!(!hand::is_charlie(&cards(&[10, 9, 2, 3, 4]), 5));

    assert!(hand::is_bust(&cards(&[10, 9, 5])));
    assert!(!hand::is_bust(&cards(&[10, 9, 2])));
}

#[test]
fn displayed_value_skips_face_down_cards() {
    let hole = card(Suit::Clubs, 13).face_down();
    let dealt = [card(Suit::Hearts, 1), hole];

    assert_eq!(hand::displayed_value(&dealt), 11);
    assert_eq!(hand::value(&dealt), 21);
    assert!(hand::is_blackjack(&dealt));
}

#[test]
fn player_hand_tracks_status_and_stake() {
    let mut player = Hand::new(20);
    player.add_card(card(Suit::Hearts, 8));
    player.add_card(card(Suit::Clubs, 8));
    assert!(player.can_split());
    assert_eq!(player.status(), HandStatus::Active);

    let second = player.take_split_card().unwrap();
    assert_eq!(second, card(Suit::Clubs, 8));
    assert_eq!(player.len(), 1);
    assert_eq!(player.take_split_card(), None);

    player.add_card(card(Suit::Spades, 10));
    player.add_card(card(Suit::Diamonds, 9));
    assert_eq!(player.status(), HandStatus::Bust);

    player.double_stake();
    assert_eq!(player.stake(), 40);

    let mut faces = Hand::new(10);
    faces.add_card(card(Suit::Hearts, 10));
    faces.add_card(card(Suit::Clubs, 12));
    assert!(faces.can_split());

    let mut natural = Hand::new(10);
    natural.add_card(card(Suit::Hearts, 1));
    natural.add_card(card(Suit::Clubs, 13));
    assert_eq!(natural.value(), 21);
    assert!(natural.is_soft());
    assert_eq!(natural.status(), HandStatus::Active);
}

#[test]
fn dealer_hand_reveals_hole_card() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 1));
    dealer.add_card(card(Suit::Clubs, 6).face_down());

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(dealer.value(), 17);

    let flipped = dealer.reveal_hole();
    assert_eq!(flipped, vec![card(Suit::Clubs, 6)]);
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.reveal_hole().is_empty());

    dealer.clear();
    assert!(dealer.is_empty());
}

#[test]
fn payouts_follow_the_table() {
    let options = GameOptions::default();

    assert_eq!(payout::payout(HandOutcome::Blackjack, 100, &options), 250);
    assert_eq!(payout::payout(HandOutcome::Blackjack, 5, &options), 12);
    assert_eq!(payout::payout(HandOutcome::Charlie, 100, &options), 300);
    assert_eq!(payout::payout(HandOutcome::Win, 100, &options), 200);
    assert_eq!(payout::payout(HandOutcome::Push, 100, &options), 100);
    assert_eq!(payout::payout(HandOutcome::Lose, 100, &options), 0);
    assert_eq!(payout::payout(HandOutcome::Bust, 100, &options), 0);

    assert_eq!(payout::net(HandOutcome::Blackjack, 100, &options), 150);
    assert_eq!(payout::net(HandOutcome::Push, 100, &options), 0);
    assert_eq!(payout::net(HandOutcome::Bust, 100, &options), -100);

    assert_eq!(payout::insurance_payout(50, true, &options), 150);
    assert_eq!(payout::insurance_payout(50, false, &options), 0);
    assert_eq!(payout::insurance_payout(0, true, &options), 0);
}

#[test]
fn custom_payouts_apply() {
    let options = GameOptions::default()
        .with_blackjack_pays(Payout::new(12, 5))
        .with_win_pays(Payout::new(2, 0));

    assert_eq!(payout::payout(HandOutcome::Blackjack, 10, &options), 24);
    assert_eq!(payout::payout(HandOutcome::Win, 10, &options), 20);
}

#[test]
fn resolve_compares_against_dealer() {
    use payout::resolve;

    assert_eq!(resolve(HandStatus::Stand, 20, 19, false), HandOutcome::Win);
    assert_eq!(resolve(HandStatus::Stand, 18, 19, false), HandOutcome::Lose);
    assert_eq!(resolve(HandStatus::Stand, 19, 19, false), HandOutcome::Push);
    assert_eq!(resolve(HandStatus::Stand, 12, 24, true), HandOutcome::Win);
    assert_eq!(resolve(HandStatus::Bust, 24, 24, true), HandOutcome::Bust);
    assert_eq!(resolve(HandStatus::Blackjack, 21, 21, false), HandOutcome::Blackjack);
    assert_eq!(resolve(HandStatus::Charlie, 18, 20, false), HandOutcome::Charlie);
}

#[test]
fn ledger_rejects_overdrafts_without_change() {
    let mut ledger = Ledger::new(100);

    ledger.stake(60).unwrap();
    assert_eq!(ledger.balance(), 40);
    assert_eq!(ledger.bet(), 60);

    assert_eq!(
        ledger.stake(50),
        Err(LedgerError::InsufficientFunds {
            needed: 50,
            available: 40,
        })
    );
    assert_eq!(ledger.insure(41).unwrap_err(), LedgerError::InsufficientFunds {
        needed: 41,
        available: 40,
    });
    assert_eq!(ledger, {
        let mut expected = Ledger::new(100);
        expected.stake(60).unwrap();
        expected
    });

    ledger.insure(30).unwrap();
    assert_eq!(ledger.insurance(), 30);
    assert!(ledger.can_afford(10));
    assert!(!ledger.can_afford(11));

    ledger.credit(120);
    assert_eq!(ledger.balance(), 130);
    ledger.clear_round();
    assert_eq!(ledger.bet(), 0);
    assert_eq!(ledger.insurance(), 0);
    assert_eq!(ledger.balance(), 130);
}

#[test]
fn withdraw_returns_the_bet() {
    let mut ledger = Ledger::new(100);
    ledger.stake(25).unwrap();
    ledger.stake(5).unwrap();

    assert_eq!(ledger.withdraw_bet(), 30);
    assert_eq!(ledger.balance(), 100);
    assert_eq!(ledger.bet(), 0);
}

#[test]
fn achievements_unlock_once_and_cap_progress() {
    let mut tracker = AchievementTracker::new();
    let ids: Vec<&str> = tracker.list().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["first_win", "high_roller", "winning_streak", "blackjack_master"]
    );

    assert!(tracker.advance(AchievementId::BlackjackMaster, 4).is_none());
    let unlocked = tracker.advance(AchievementId::BlackjackMaster, 3).unwrap();
    assert_eq!(unlocked.name, "Blackjack Master");
    assert_eq!(unlocked.progress, 5);
    assert!(tracker.advance(AchievementId::BlackjackMaster, 1).is_none());

    assert!(tracker.raise_to(AchievementId::WinningStreak, 2).is_none());
    assert!(tracker.raise_to(AchievementId::WinningStreak, 1).is_none());
    assert_eq!(tracker.get(AchievementId::WinningStreak).unwrap().progress, 2);
    assert!(tracker.raise_to(AchievementId::WinningStreak, 4).is_some());
    assert_eq!(tracker.get(AchievementId::WinningStreak).unwrap().progress, 3);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_starting_balance(250)
        .with_chips([1, 5, 10, 50])
        .with_dealer_stands_on(18)
        .with_charlie_cards(6)
        .with_charlie_pays(Payout::new(2, 1))
        .with_insurance_pays(Payout::new(2, 1))
        .with_high_roller_bet(100);

    assert_eq!(options.starting_balance, 250);
    assert_eq!(options.chips, [1, 5, 10, 50]);
    assert_eq!(options.dealer_stands_on, 18);
    assert_eq!(options.charlie_cards, 6);
    assert_eq!(options.charlie_pays, Payout::new(2, 1));
    assert_eq!(options.insurance_pays, Payout::new(2, 1));
    assert_eq!(options.high_roller_bet, 100);
    assert_eq!(
        options.chip_breakdown(67),
        vec![
            ChipStack::new(50, 1),
            ChipStack::new(10, 1),
            ChipStack::new(5, 1),
            ChipStack::new(1, 2),
        ]
    );
}

#[test]
fn chip_breakdown_drops_remainder() {
    let options = GameOptions::default();

    assert_eq!(options.chip_breakdown(1000), vec![ChipStack::new(500, 2)]);
    assert_eq!(options.chip_breakdown(7), vec![ChipStack::new(5, 1)]);
    assert!(options.chip_breakdown(3).is_empty());
}

#[test]
fn chip_breakdown_ignores_denomination_order() {
    let shuffled = GameOptions::default().with_chips([500, 5, 100, 25]);

    assert_eq!(
        shuffled.chip_breakdown(135),
        GameOptions::default().chip_breakdown(135)
    );
    assert_eq!(
        shuffled.chip_breakdown(135),
        vec![
            ChipStack::new(100, 1),
            ChipStack::new(25, 1),
            ChipStack::new(5, 2),
        ]
    );
}

#[test]
fn chip_breakdown_stays_small_for_large_amounts() {
    let options = GameOptions::default().with_chips([1, 1, 1, 1]);
    assert_eq!(
        options.chip_breakdown(usize::MAX),
        vec![ChipStack::new(1, usize::MAX)]
    );

    let stacks = GameOptions::default().chip_breakdown(10_000_003);
    assert_eq!(stacks, vec![ChipStack::new(500, 20_000)]);
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serializes_to_json() {
    let game = blackjack_sim::Game::new(GameOptions::default(), 0);
    let json = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(json["state"], "Betting");
    assert_eq!(json["balance"], 1000);
    assert_eq!(json["achievements"][0]["id"], "FirstWin");
}
