use serde::Serialize;
use twentyone::{Card, DealerStep, Outcome, Phase, Round};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            round: Round::new(seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.round = Round::new(seed as u64);
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.round.start().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let card = self.round.player_hit().map_err(js_err)?;
        to_js_value(&JsCard::from(card))
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let result = self.round.player_stand().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    /// Enters the dealer's turn without playing it out, so the scene can
    /// animate each draw via `dealer_step`.
    pub fn begin_dealer_turn(&mut self) -> Result<(), JsValue> {
        self.round.begin_dealer_turn().map_err(js_err)
    }

    pub fn dealer_step(&mut self) -> Result<JsValue, JsValue> {
        let step = self.round.dealer_draw_step().map_err(js_err)?;

        let js_step = match step {
            DealerStep::Drew(card) => JsDealerStep {
                done: false,
                card: Some(JsCard::from(card)),
                result: None,
            },
            DealerStep::Finished(result) => JsDealerStep {
                done: true,
                card: None,
                result: Some(JsRoundResult::from(result)),
            },
        };

        to_js_value(&js_step)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let dealer = self.round.dealer();
        let hole_revealed = dealer.is_hole_revealed();

        let dealer_cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let face_up = hole_revealed || index == 0;
                JsTableCard {
                    face_up,
                    card: face_up.then(|| JsCard::from(*card)),
                }
            })
            .collect();

        let player_cards = self
            .round
            .player()
            .cards()
            .iter()
            .map(|card| JsTableCard {
                face_up: true,
                card: Some(JsCard::from(*card)),
            })
            .collect();

        let snapshot = Snapshot {
            phase: phase_to_str(self.round.phase()),
            player_cards,
            player_score: self.round.player_score(),
            dealer_cards,
            dealer_score: self.round.dealer_visible_score(),
            hole_revealed,
            outcome: self.round.outcome().map(outcome_to_str),
            cards_remaining: self.round.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    player_cards: Vec<JsTableCard>,
    player_score: u8,
    dealer_cards: Vec<JsTableCard>,
    dealer_score: u8,
    hole_revealed: bool,
    outcome: Option<&'static str>,
    cards_remaining: u32,
}

/// A card slot on the table. Face-down cards carry no card data so the
/// scene can only ever render what the player is allowed to see.
#[derive(Serialize)]
struct JsTableCard {
    face_up: bool,
    card: Option<JsCard>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
    texture_id: String,
}

impl From<Card> for JsCard {
    fn from(card: Card) -> Self {
        Self {
            suit: card.suit.label(),
            rank: card.rank.label(),
            value: card.base_value(),
            texture_id: card.texture_id(),
        }
    }
}

#[derive(Serialize)]
struct JsDealerStep {
    done: bool,
    card: Option<JsCard>,
    result: Option<JsRoundResult>,
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    player_score: u8,
    dealer_score: u8,
}

impl From<twentyone::RoundResult> for JsRoundResult {
    fn from(result: twentyone::RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            player_score: result.player_score,
            dealer_score: result.dealer_score,
        }
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::Dealing => "Dealing",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Resolved => "Resolved",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "PlayerWins",
        Outcome::DealerWins => "DealerWins",
        Outcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
