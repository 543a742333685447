//! Game state: the layout, the piles, and both players.
//!
//! ## Layout
//!
//! `stairs` holds the stair stacks left to right. The top of a stack is
//! the last element; only top cards can be combined or destroyed. An emptied
//! stack is removed, so every stack in `stairs` holds at least one card.
//!
//! ## Piles
//!
//! The next card to draw is the last element of `draw_pile`. The discard
//! pile is unordered; it gets shuffled before it is reused.
//!
//! ## Logs
//!
//! `action_log` keeps the rendered messages and `history` the structured
//! records. Both use `im::Vector` so snapshots stay cheap to clone.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{ActionRecord, PlayerAction};
use super::config::StaircaseConfig;
use super::player::{Player, PlayerId, PLAYER_COUNT};
use crate::cards::Card;
use crate::rules::GameResult;

/// One stair stack, bottom first.
pub type Stair = SmallVec<[Card; 5]>;

/// What removing a stair top uncovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// The stack still has cards; this is its new top.
    Revealed(Card),
    /// The stack was emptied and removed, other stacks remain.
    StackCleared,
    /// The last stack was emptied; the layout is gone.
    StairsCleared,
}

impl Reveal {
    /// The newly exposed card, if any.
    #[must_use]
    pub fn card(self) -> Option<Card> {
        match self {
            Reveal::Revealed(card) => Some(card),
            Reveal::StackCleared | Reveal::StairsCleared => None,
        }
    }
}

/// Complete state of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub stairs: Vec<Stair>,

    pub draw_pile: Vec<Card>,

    pub discard_pile: Vec<Card>,

    pub players: [Player; PLAYER_COUNT],

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// A stair card was removed since the last reshuffle.
    pub layout_touched: bool,

    /// The current player's hand was refilled and the turn is over; only
    /// `start_turn` is accepted until the next player takes over.
    pub turn_ended: bool,

    /// Action kinds the current player has used this turn.
    pub turn_actions: SmallVec<[PlayerAction; 3]>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,

    /// Rendered action messages, oldest first.
    pub action_log: Vector<String>,

    /// Structured action history.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state from an explicit layout, draw pile and players.
    ///
    /// Player 0 moves first and the layout counts as touched.
    #[must_use]
    pub fn new(stairs: Vec<Stair>, draw_pile: Vec<Card>, players: [Player; PLAYER_COUNT]) -> Self {
        Self {
            stairs,
            draw_pile,
            discard_pile: Vec::new(),
            players,
            current_player: PlayerId::FIRST,
            layout_touched: true,
            turn_ended: false,
            turn_actions: SmallVec::new(),
            turn_number: 1,
            action_sequence: 0,
            action_log: Vector::new(),
            history: Vector::new(),
        }
    }

    /// Deal a shuffled deck.
    ///
    /// The front of the deck builds the stairs (each slice's last card on
    /// top), the next cards form the draw pile, and the final cards are dealt
    /// to player one and then player two. The config must be validated and
    /// the deck complete.
    #[must_use]
    pub fn deal(deck: &[Card], names: [&str; PLAYER_COUNT], config: &StaircaseConfig) -> Self {
        let mut offset = 0;
        let stairs = config
            .stair_heights
            .iter()
            .map(|&height| {
                let stair = Stair::from_slice(&deck[offset..offset + height]);
                offset += height;
                stair
            })
            .collect();

        let draw_end = offset + config.draw_pile_size();
        let draw_pile = deck[offset..draw_end].to_vec();
        offset = draw_end;

        let players = names.map(|name| {
            let player = Player::new(name).with_hand(&deck[offset..offset + config.hand_size]);
            offset += config.hand_size;
            player
        });

        Self::new(stairs, draw_pile, players)
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    pub fn current_mut(&mut self) -> &mut Player {
        let id = self.current_player;
        self.player_mut(id)
    }

    /// The player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        self.player(self.current_player.other())
    }

    // === Layout ===

    /// Top card of every stair stack, left to right.
    pub fn stair_tops(&self) -> impl Iterator<Item = Card> + '_ {
        self.stairs.iter().filter_map(|stair| stair.last().copied())
    }

    /// Index of the stack whose top card is `target`.
    #[must_use]
    pub fn find_stair(&self, target: Card) -> Option<usize> {
        self.stairs.iter().position(|stair| stair.last() == Some(&target))
    }

    /// Total cards left in the layout.
    #[must_use]
    pub fn stair_card_count(&self) -> usize {
        self.stairs.iter().map(SmallVec::len).sum()
    }

    /// Remove the top card of stack `index` and report what it uncovered.
    ///
    /// Marks the layout as touched and drops the stack once it is empty.
    pub(crate) fn pop_stair(&mut self, index: usize) -> Option<(Card, Reveal)> {
        let stair = self.stairs.get_mut(index)?;
        let removed = stair.pop()?;
        self.layout_touched = true;

        let reveal = match stair.last() {
            Some(&top) => Reveal::Revealed(top),
            None => {
                self.stairs.remove(index);
                if self.stairs.is_empty() {
                    Reveal::StairsCleared
                } else {
                    Reveal::StackCleared
                }
            }
        };
        Some((removed, reveal))
    }

    // === End of game ===

    /// The layout is cleared, or the draw pile ran out without any layout
    /// progress since the last reshuffle.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.stairs.is_empty() || (self.draw_pile.is_empty() && !self.layout_touched)
    }

    /// Strictly higher score wins; equal scores are a draw.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let first = self.player(PlayerId::FIRST).score;
        let second = self.player(PlayerId::SECOND).score;
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    // === History ===

    /// Whether the current player already used `action` this turn.
    #[must_use]
    pub fn has_used(&self, action: PlayerAction) -> bool {
        self.turn_actions.contains(&action)
    }

    /// Record an action by the current player.
    pub fn record_action(&mut self, action: PlayerAction, cards: &[Card]) {
        if !self.has_used(action) {
            self.turn_actions.push(action);
        }
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history.push_back(ActionRecord::new(
            self.current_player,
            action,
            cards,
            self.turn_number,
            sequence,
        ));
    }

    /// Hand the turn to the other player.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
        self.current_mut().last_action = None;
        self.turn_ended = false;
        self.turn_actions.clear();
        self.turn_number += 1;
        self.action_sequence = 0;
    }

    /// Every card in the game, wherever it currently sits.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        let layout = self.stairs.iter().flatten();
        let players = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter().chain(p.played_cards.iter()));
        layout
            .chain(self.draw_pile.iter())
            .chain(self.discard_pile.iter())
            .chain(players)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn sample_state() -> GameState {
        let stairs = vec![
            Stair::from_slice(&[card(Suit::Clubs, Rank::King), card(Suit::Hearts, Rank::Queen)]),
            Stair::from_slice(&[card(Suit::Spades, Rank::Two)]),
        ];
        let players = [Player::new("Bob"), Player::new("Alice")];
        GameState::new(stairs, vec![card(Suit::Diamonds, Rank::Five)], players)
    }

    #[test]
    fn test_deal_partitions_deck() {
        let deck = full_deck();
        let config = StaircaseConfig::default();
        let state = GameState::deal(&deck, ["Bob", "Alice"], &config);

        let heights: Vec<_> = state.stairs.iter().map(|s| s.len()).collect();
        assert_eq!(heights, vec![5, 4, 3, 2, 1]);
        assert_eq!(state.stair_card_count(), 15);
        assert_eq!(state.draw_pile.len(), 27);
        assert_eq!(state.players[0].hand.len(), 5);
        assert_eq!(state.players[1].hand.len(), 5);
        assert!(state.discard_pile.is_empty());
        assert!(state.layout_touched);
        assert_eq!(state.current_player, PlayerId::FIRST);

        // Front of the deck builds the first stack, last card of the slice on top
        assert_eq!(state.stairs[0].as_slice(), &deck[0..5]);
        assert_eq!(state.stairs[0].last(), Some(&deck[4]));
        assert_eq!(state.draw_pile.as_slice(), &deck[15..42]);
        assert_eq!(state.players[0].hand.as_slice(), &deck[42..47]);
        assert_eq!(state.players[1].hand.as_slice(), &deck[47..52]);
        assert_eq!(state.all_cards().count(), 52);
    }

    #[test]
    fn test_find_stair_only_matches_tops() {
        let state = sample_state();

        assert_eq!(state.find_stair(card(Suit::Hearts, Rank::Queen)), Some(0));
        assert_eq!(state.find_stair(card(Suit::Spades, Rank::Two)), Some(1));
        assert_eq!(state.find_stair(card(Suit::Clubs, Rank::King)), None);

        let tops: Vec<_> = state.stair_tops().collect();
        assert_eq!(tops, vec![card(Suit::Hearts, Rank::Queen), card(Suit::Spades, Rank::Two)]);
    }

    #[test]
    fn test_pop_stair_reveals_and_clears() {
        let mut state = sample_state();
        state.layout_touched = false;

        let (removed, reveal) = state.pop_stair(0).unwrap();
        assert_eq!(removed, card(Suit::Hearts, Rank::Queen));
        assert_eq!(reveal, Reveal::Revealed(card(Suit::Clubs, Rank::King)));
        assert!(state.layout_touched);

        let (_, reveal) = state.pop_stair(1).unwrap();
        assert_eq!(reveal, Reveal::StackCleared);
        assert_eq!(state.stairs.len(), 1);

        let (_, reveal) = state.pop_stair(0).unwrap();
        assert_eq!(reveal, Reveal::StairsCleared);
        assert!(state.stairs.is_empty());

        assert!(state.pop_stair(0).is_none());
    }

    #[test]
    fn test_is_ended() {
        let mut state = sample_state();
        assert!(!state.is_ended());

        state.draw_pile.clear();
        assert!(!state.is_ended(), "touched layout keeps the game going");

        state.layout_touched = false;
        assert!(state.is_ended());

        let mut cleared = sample_state();
        cleared.stairs.clear();
        assert!(cleared.is_ended());
    }

    #[test]
    fn test_result() {
        let mut state = sample_state();
        assert_eq!(state.result(), GameResult::Draw);

        state.players[0].score = 20;
        state.players[1].score = 10;
        assert_eq!(state.result(), GameResult::Winner(PlayerId::FIRST));

        state.players[1].score = 21;
        assert_eq!(state.result(), GameResult::Winner(PlayerId::SECOND));
    }

    #[test]
    fn test_record_and_advance_turn() {
        let mut state = sample_state();
        state.record_action(PlayerAction::Destroy, &[card(Suit::Spades, Rank::Two)]);
        state.record_action(PlayerAction::Discard, &[card(Suit::Diamonds, Rank::Five)]);

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[1].sequence, 1);
        assert_eq!(state.history[1].turn, 1);
        assert!(state.has_used(PlayerAction::Destroy));
        assert!(state.has_used(PlayerAction::Discard));
        assert!(!state.has_used(PlayerAction::Combine));

        state.players[1].last_action = Some(PlayerAction::Combine);
        state.turn_ended = true;
        state.advance_turn();

        assert_eq!(state.current_player, PlayerId::SECOND);
        assert_eq!(state.current().last_action, None);
        assert!(!state.turn_ended);
        assert!(state.turn_actions.is_empty());
        assert_eq!(state.turn_number, 2);
        assert_eq!(state.action_sequence, 0);
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::deal(&full_deck(), ["Bob", "Alice"], &StaircaseConfig::default());
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }
}
