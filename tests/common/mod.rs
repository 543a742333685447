//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::rc::Rc;

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use staircase::core::{GameState, Player, Stair};
use staircase::{Card, EventRecorder, GameSession, Rank, Suit};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Show engine `tracing` output in test runs.
///
/// Output goes through the harness capture, so it only shows for failing
/// tests or with `--nocapture`. `TEST_LOG` picks the filter, falling back
/// to `RUST_LOG` and then to warnings only, so the empty-draw warning
/// still shows.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let directives = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_owned());

        // A global subscriber may already be set in this process
        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}

pub fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Session with a recorder attached, running `state`.
pub fn session_with(state: GameState) -> (GameSession, Rc<EventRecorder>) {
    init_logging();
    let recorder = Rc::new(EventRecorder::new());
    let mut session = GameSession::with_seed(7);
    session.add_observer(recorder.clone());
    session.load_game(state);
    (session, recorder)
}

/// Freshly dealt seeded game with a recorder attached.
pub fn dealt(seed: u64) -> (GameSession, Rc<EventRecorder>) {
    init_logging();
    let recorder = Rc::new(EventRecorder::new());
    let mut session = GameSession::with_seed(seed);
    session.add_observer(recorder.clone());
    session.start_new_game("Bob", "Alice").expect("deal");
    (session, recorder)
}

pub fn stair(cards: &[Card]) -> Stair {
    Stair::from_slice(cards)
}

/// Two players with the given hands and Bob to move.
pub fn state(stairs: Vec<Stair>, draw_pile: Vec<Card>, bob: &[Card], alice: &[Card]) -> GameState {
    GameState::new(
        stairs,
        draw_pile,
        [Player::new("Bob").with_hand(bob), Player::new("Alice").with_hand(alice)],
    )
}
