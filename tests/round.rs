//! Round integration tests.

use twentyone::{
    ActionError, Card, DealerHand, DealerStep, Deck, Hand, Outcome, Phase, Rank, Round, StartError,
    Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

fn started_round(draws: &[Card]) -> Round {
    let mut round = Round::new(0);
    round.start_with(deck_from_draws(draws)).unwrap();
    round
}

#[test]
fn score_without_aces_is_the_plain_sum() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Two));
    hand.add_card(card(Suit::Clubs, Rank::Nine));
    hand.add_card(card(Suit::Spades, Rank::King));

    assert_eq!(hand.score(), 21);
    assert!(!hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn ace_demotes_instead_of_busting() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ace));
    hand.add_card(card(Suit::Clubs, Rank::Six));
    assert_eq!(hand.score(), 17);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Spades, Rank::Five));
    assert_eq!(hand.score(), 12);
    assert!(!hand.is_soft());
}

#[test]
fn four_aces_score_fourteen() {
    let mut hand = Hand::new();
    for suit in Suit::ALL {
        hand.add_card(card(suit, Rank::Ace));
    }

    assert_eq!(hand.score(), 14);
    assert!(hand.is_soft());
}

#[test]
fn over_21_is_bust() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, Rank::Ten));
    hand.add_card(card(Suit::Spades, Rank::Ten));
    hand.add_card(card(Suit::Diamonds, Rank::Two));

    assert_eq!(hand.score(), 22);
    assert!(hand.is_bust());
}

#[test]
fn ace_up_card_shows_eleven_before_the_reveal() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Spades, Rank::Ace));
    dealer.add_card(card(Suit::Clubs, Rank::Six));

    assert_eq!(dealer.visible_score(), 11);
    dealer.reveal_hole();
    assert_eq!(dealer.visible_score(), 17);
}

#[test]
fn dealer_hand_hides_the_hole_card_score() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Clubs, Rank::Ten));
    dealer.add_card(card(Suit::Spades, Rank::Ace));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_score(), 10);
    assert_eq!(dealer.score(), 21);

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_score(), 21);
}

#[test]
fn start_deals_dealer_first_alternating() {
    let draws = [
        card(Suit::Clubs, Rank::Ten),    // dealer up
        card(Suit::Diamonds, Rank::Ten), // player
        card(Suit::Spades, Rank::Ace),   // dealer hole
        card(Suit::Hearts, Rank::Nine),  // player
        card(Suit::Hearts, Rank::Two),
    ];
    let round = started_round(&draws);

    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.dealer().cards(), &[draws[0], draws[2]]);
    assert_eq!(round.player().cards(), &[draws[1], draws[3]]);
    assert_eq!(round.cards_remaining(), 1);
    assert!(!round.dealer().is_hole_revealed());
    assert_eq!(round.outcome(), None);
}

#[test]
fn start_rejects_a_round_in_progress() {
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Nine),
    ]);
    assert_eq!(round.start().unwrap_err(), StartError::RoundInProgress);

    round.player_stand().unwrap();
    assert_eq!(round.phase(), Phase::Resolved);

    // A resolved round can be restarted.
    round.start().unwrap();
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player().len(), 2);
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(round.cards_remaining(), 48);
    assert_eq!(round.outcome(), None);
    assert!(!round.dealer().is_hole_revealed());
}

#[test]
fn start_with_a_short_deck_leaves_the_round_untouched() {
    let mut round = Round::new(0);
    let short = deck_from_draws(&[card(Suit::Hearts, Rank::Two); 3]);

    assert_eq!(round.start_with(short).unwrap_err(), StartError::DeckExhausted);
    assert_eq!(round.phase(), Phase::Idle);
    assert!(round.player().is_empty());
    assert!(round.dealer().is_empty());
}

#[test]
fn actions_are_rejected_outside_the_player_turn() {
    let mut round = Round::new(0);

    assert_eq!(round.player_hit().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(round.player_stand().unwrap_err(), ActionError::InvalidPhase);
    assert_eq!(
        round.begin_dealer_turn().unwrap_err(),
        ActionError::InvalidPhase
    );
    assert_eq!(
        round.dealer_draw_step().unwrap_err(),
        ActionError::InvalidPhase
    );
}

#[test]
fn hit_below_21_stays_in_the_player_turn() {
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Seven),  // dealer up
        card(Suit::Diamonds, Rank::Five), // player
        card(Suit::Spades, Rank::Nine),  // dealer hole
        card(Suit::Hearts, Rank::Six),   // player
        card(Suit::Clubs, Rank::Four),   // hit
    ]);

    let drawn = round.player_hit().unwrap();
    assert_eq!(drawn, card(Suit::Clubs, Rank::Four));
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_score(), 15);
    assert_eq!(round.outcome(), None);
}

#[test]
fn hit_at_soft_21_demotes_instead_of_busting() {
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Seven),  // dealer up
        card(Suit::Diamonds, Rank::Ten), // player
        card(Suit::Spades, Rank::Nine),  // dealer hole
        card(Suit::Hearts, Rank::Ace),   // player, soft 21
        card(Suit::Clubs, Rank::Ace),    // hit
    ]);
    assert_eq!(round.player_score(), 21);

    round.player_hit().unwrap();

    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player_score(), 12);
    assert_eq!(round.outcome(), None);
}

#[test]
fn player_bust_resolves_immediately_without_dealer_play() {
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Seven),  // dealer up
        card(Suit::Diamonds, Rank::Ten), // player
        card(Suit::Spades, Rank::Nine),  // dealer hole
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Five),   // hit, busting at 25
    ]);

    round.player_hit().unwrap();

    assert_eq!(round.phase(), Phase::Resolved);
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
    // The dealer never plays and the hole card stays hidden.
    assert_eq!(round.dealer().len(), 2);
    assert!(!round.dealer().is_hole_revealed());
    assert_eq!(round.dealer_visible_score(), 7);
}

#[test]
fn hit_with_an_empty_deck_leaves_the_round_unchanged() {
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Hearts, Rank::Six),
    ]);

    assert_eq!(round.player_hit().unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(round.phase(), Phase::PlayerTurn);
    assert_eq!(round.player().len(), 2);
}

#[test]
fn hidden_hole_card_scenario() {
    // Dealt dealer, player, dealer, player: dealer 10♣ A♠, player 10♦ 9♥.
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Nine),
    ]);

    assert_eq!(round.dealer_visible_score(), 10);
    assert_eq!(round.player_score(), 19);

    let result = round.player_stand().unwrap();

    assert_eq!(round.dealer_visible_score(), 21);
    assert_eq!(result.dealer_score, 21);
    assert_eq!(result.player_score, 19);
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
}

#[test]
fn dealer_draws_until_seventeen() {
    let mut round = started_round(&[
        card(Suit::Hearts, Rank::Two),   // dealer up
        card(Suit::Diamonds, Rank::Ten), // player
        card(Suit::Spades, Rank::Two),   // dealer hole
        card(Suit::Hearts, Rank::Nine),  // player
        card(Suit::Clubs, Rank::Five),   // dealer draw, 9
        card(Suit::Diamonds, Rank::Five), // dealer draw, 14
        card(Suit::Clubs, Rank::Three),  // dealer draw, 17
    ]);

    let result = round.player_stand().unwrap();

    assert_eq!(result.dealer_score, 17);
    assert_eq!(round.dealer().len(), 5);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut round = started_round(&[
        card(Suit::Hearts, Rank::Ace),   // dealer up
        card(Suit::Diamonds, Rank::Ten), // player
        card(Suit::Spades, Rank::Six),   // dealer hole, soft 17
        card(Suit::Hearts, Rank::Nine),  // player
        card(Suit::Clubs, Rank::Five),   // must not be drawn
    ]);

    let result = round.player_stand().unwrap();

    assert_eq!(result.dealer_score, 17);
    assert!(round.dealer().is_soft());
    assert_eq!(round.dealer().len(), 2);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn dealer_bust_is_a_player_win() {
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Ten),    // dealer up
        card(Suit::Diamonds, Rank::Ten), // player
        card(Suit::Spades, Rank::Six),   // dealer hole, 16
        card(Suit::Hearts, Rank::Nine),  // player
        card(Suit::Clubs, Rank::King),   // dealer draw, busting at 26
    ]);

    let result = round.player_stand().unwrap();

    assert_eq!(result.dealer_score, 26);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

#[test]
fn equal_scores_push() {
    let mut round = started_round(&[
        card(Suit::Clubs, Rank::Ten),     // dealer up
        card(Suit::Diamonds, Rank::Ten),  // player
        card(Suit::Spades, Rank::Ten),    // dealer hole
        card(Suit::Hearts, Rank::Queen),  // player
    ]);

    let result = round.player_stand().unwrap();

    assert_eq!(result.player_score, 20);
    assert_eq!(result.dealer_score, 20);
    assert_eq!(result.outcome, Outcome::Push);
}

#[test]
fn step_wise_dealer_turn_matches_the_policy() {
    let mut round = started_round(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Two),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Clubs, Rank::Three),
    ]);

    round.begin_dealer_turn().unwrap();
    assert_eq!(round.phase(), Phase::DealerTurn);
    assert!(round.dealer().is_hole_revealed());

    let mut drawn = Vec::new();
    let result = loop {
        match round.dealer_draw_step().unwrap() {
            DealerStep::Drew(step_card) => drawn.push(step_card),
            DealerStep::Finished(result) => break result,
        }
    };

    assert_eq!(
        drawn,
        vec![
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Clubs, Rank::Three),
        ]
    );
    assert_eq!(round.phase(), Phase::Resolved);
    assert_eq!(result.dealer_score, 17);
    assert_eq!(result.outcome, Outcome::PlayerWins);
}

fn standing_cards(total: u8, suits: [Suit; 2]) -> [Card; 2] {
    let second = match total {
        17 => Rank::Seven,
        18 => Rank::Eight,
        19 => Rank::Nine,
        20 => Rank::Ten,
        21 => Rank::Ace,
        _ => unreachable!("totals outside 17..=21 are not used"),
    };
    [card(suits[0], Rank::Ten), card(suits[1], second)]
}

#[test]
fn outcome_matrix_for_standing_scores() {
    for player_total in 17..=21 {
        for dealer_total in 17..=21 {
            let dealer_cards = standing_cards(dealer_total, [Suit::Clubs, Suit::Diamonds]);
            let player_cards = standing_cards(player_total, [Suit::Hearts, Suit::Spades]);

            let mut round = started_round(&[
                dealer_cards[0],
                player_cards[0],
                dealer_cards[1],
                player_cards[1],
            ]);
            let result = round.player_stand().unwrap();

            // The dealer starts at 17 or more, so no draws happen and the
            // outcome is a pure score comparison.
            assert_eq!(result.dealer_score, dealer_total);
            let expected = if player_total > dealer_total {
                Outcome::PlayerWins
            } else if dealer_total > player_total {
                Outcome::DealerWins
            } else {
                Outcome::Push
            };
            assert_eq!(
                result.outcome, expected,
                "player {player_total} vs dealer {dealer_total}"
            );
        }
    }
}

#[test]
fn stand_always_leaves_the_dealer_at_seventeen_or_bust() {
    for seed in 0..32 {
        let mut round = Round::new(seed);
        round.start().unwrap();

        let player_score = round.player_score();
        let result = round.player_stand().unwrap();

        assert!(result.dealer_score >= 17, "seed {seed}");
        let expected = if result.dealer_score > 21 || player_score > result.dealer_score {
            Outcome::PlayerWins
        } else if result.dealer_score > player_score {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };
        assert_eq!(result.outcome, expected, "seed {seed}");
    }
}

#[test]
fn same_seed_reproduces_the_same_deal() {
    let mut a = Round::new(7);
    let mut b = Round::new(7);
    a.start().unwrap();
    b.start().unwrap();

    assert_eq!(a.player().cards(), b.player().cards());
    assert_eq!(a.dealer().cards(), b.dealer().cards());
}
