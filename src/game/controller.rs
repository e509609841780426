//! The match controller.
//!
//! `Match` owns the board, both players, the turn counter and the event
//! log. Every mutating call is a single transaction: all checks run before
//! the first write, so a rejected call leaves the match exactly as it was.
//! Events produced by a transaction are buffered and only reach the log and
//! the observers once the transaction has committed.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, info, warn};

use super::phase::{CaptureReport, MatchPhase};
use super::turn::TurnController;
use crate::board::{Board, Position};
use crate::cards::{CardDefinition, CardId, PlacedCard};
use crate::core::{MatchConfig, MatchError, PlacementError, Player, PlayerId, PlayerPair};
use crate::events::{EventBus, LogEntry, MatchEvent, MatchObserver, ObserverId};
use crate::rules::{CaptureEngine, MatchOutcome};

/// A hand as dealt: shared card definitions in order.
pub type Hand = Vec<Arc<CardDefinition>>;

/// A two-player match.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use triad_engine::cards::{CardDefinition, CardId, Element, Sides};
/// use triad_engine::{Match, MatchOutcome, PlayerId};
///
/// let hand = |base: u32| -> Vec<_> {
///     (0..5)
///         .map(|i| Arc::new(CardDefinition::new(CardId::new(base + i), "Moomba", Sides::new(1, 1, 1, 1), Element::None)))
///         .collect()
/// };
///
/// let mut game = Match::new("Alice", hand(0), "Bob", hand(100)).unwrap();
/// game.start().unwrap();
///
/// let report = game.place_card(CardId::new(0), 1, 1).unwrap();
/// assert!(report.captures.is_empty());
/// assert_eq!(game.current_turn_owner(), PlayerId::TWO);
/// assert_eq!(game.outcome(), MatchOutcome::InProgress);
/// ```
pub struct Match {
    config: MatchConfig,
    players: PlayerPair<Player>,
    initial_hands: PlayerPair<Hand>,
    board: Board,
    turn: TurnController,
    phase: MatchPhase,
    engine: CaptureEngine,
    log: Vector<LogEntry>,
    bus: EventBus,
}

impl Match {
    /// Create a match in `Setup` with the default configuration.
    pub fn new(
        p1_name: impl Into<String>,
        p1_hand: Hand,
        p2_name: impl Into<String>,
        p2_hand: Hand,
    ) -> Result<Self, MatchError> {
        Self::with_config(MatchConfig::default(), p1_name, p1_hand, p2_name, p2_hand)
    }

    /// Create a match in `Setup`.
    ///
    /// Each hand must hold exactly `config.hand_size` cards.
    pub fn with_config(
        config: MatchConfig,
        p1_name: impl Into<String>,
        p1_hand: Hand,
        p2_name: impl Into<String>,
        p2_hand: Hand,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        let hands = PlayerPair::new(p1_hand, p2_hand);
        check_hands(&config, &hands)?;

        let players = PlayerPair::new(
            Player::new(p1_name, config.starting_score, hands[PlayerId::ONE].clone()),
            Player::new(p2_name, config.starting_score, hands[PlayerId::TWO].clone()),
        );

        let mut game = Self {
            config,
            players,
            initial_hands: hands,
            board: Board::new(),
            turn: TurnController::new(),
            phase: MatchPhase::Setup,
            engine: CaptureEngine::standard(),
            log: Vector::new(),
            bus: EventBus::new(),
        };
        game.turn.apply_visibility(&mut game.players);

        debug!(
            p1 = %game.players[PlayerId::ONE].name,
            p2 = %game.players[PlayerId::TWO].name,
            hand_size = config.hand_size,
            "match created"
        );
        Ok(game)
    }

    /// `Setup -> InProgress`.
    pub fn start(&mut self) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::Setup => {}
            MatchPhase::Terminated => return Err(MatchError::Terminated),
            phase => return Err(MatchError::AlreadyStarted(phase)),
        }

        self.phase = MatchPhase::InProgress;
        info!(
            p1 = %self.players[PlayerId::ONE].name,
            p2 = %self.players[PlayerId::TWO].name,
            "match started"
        );

        self.commit(0, vec![
            MatchEvent::MatchStarted,
            MatchEvent::TurnChanged {
                turn: self.turn.turn(),
                active: self.turn.active(),
            },
        ]);
        Ok(())
    }

    /// Place a card from the active player's hand.
    ///
    /// Checks run in order: phase, position range, occupancy, hand
    /// membership. On success the card leaves the hand, captures and score
    /// changes are applied flip by flip, the turn advances and the match
    /// finishes if the board is now full.
    pub fn place_card(&mut self, card: CardId, row: usize, col: usize) -> Result<CaptureReport, PlacementError> {
        let player = self.turn.active();
        let turn = self.turn.turn();
        let (position, definition) = self.check_placement(player, card, row, col).inspect_err(|err| {
            warn!(player = %player, card = %card, row, col, error = %err, "placement rejected");
        })?;

        self.board.place(PlacedCard::new(definition, player), position)?;
        self.players[player].take_card(card);
        info!(player = %player, card = %card, row, col, "card placed");

        let mut events = vec![MatchEvent::CardPlaced {
            player,
            card,
            position,
        }];

        let captures = self.engine.resolve(&self.board, position, player);
        for capture in &captures {
            if self.board.set_owner(capture.position, capture.to).is_none() {
                continue;
            }
            self.players[capture.to].adjust_score(1);
            self.players[capture.from].adjust_score(-1);

            let scores = self.scores();
            debug!(
                row = capture.position.row(),
                col = capture.position.col(),
                from = %capture.from,
                to = %capture.to,
                kind = ?capture.kind,
                p1 = scores[PlayerId::ONE],
                p2 = scores[PlayerId::TWO],
                "capture applied"
            );
            events.push(MatchEvent::CardCaptured(*capture));
            events.push(MatchEvent::ScoreChanged { scores });
        }

        let next = self.turn.advance();
        self.turn.apply_visibility(&mut self.players);

        let next_player = if self.board.is_full() {
            let outcome = MatchOutcome::from_scores(self.scores());
            self.phase = MatchPhase::Finished(outcome);
            info!(outcome = %outcome, "match finished");
            events.push(MatchEvent::MatchFinished { outcome });
            None
        } else {
            info!(turn = self.turn.turn(), active = %next, "turn changed");
            events.push(MatchEvent::TurnChanged {
                turn: self.turn.turn(),
                active: next,
            });
            Some(next)
        };

        let report = CaptureReport {
            player,
            card,
            position,
            captures,
            scores: self.scores(),
            next_player,
            outcome: self.outcome(),
        };

        self.commit(turn, events);
        Ok(report)
    }

    /// Validate a placement without touching any state.
    fn check_placement(
        &self,
        player: PlayerId,
        card: CardId,
        row: usize,
        col: usize,
    ) -> Result<(Position, Arc<CardDefinition>), PlacementError> {
        if !self.phase.is_in_progress() {
            return Err(PlacementError::MatchNotInProgress(self.phase));
        }

        let position = Position::new(row, col)?;
        if self.board.is_occupied(position) {
            return Err(PlacementError::CellOccupied(position));
        }

        let definition = self.players[player]
            .hand()
            .iter()
            .find(|def| def.id == card)
            .cloned()
            .ok_or(PlacementError::CardNotInHand { card, player })?;

        Ok((position, definition))
    }

    /// Back to `Setup` with the hands the match was created with.
    ///
    /// Allowed from every phase except `Terminated`. Scores return to the
    /// starting score, the turn counter to 0, and the board and log are
    /// cleared. Observers stay subscribed.
    pub fn reset(&mut self) -> Result<(), MatchError> {
        if self.phase == MatchPhase::Terminated {
            return Err(MatchError::Terminated);
        }

        for (id, player) in self.players.iter_mut() {
            player.replace_hand(self.initial_hands[id].clone());
            player.set_score(self.config.starting_score);
        }
        self.board.reset();
        self.turn.reset();
        self.turn.apply_visibility(&mut self.players);
        self.phase = MatchPhase::Setup;
        self.log.clear();

        info!("match reset");
        self.commit(0, vec![MatchEvent::MatchReset]);
        Ok(())
    }

    /// Replace both starting hands, then `reset`.
    ///
    /// The new hands are what later plain `reset` calls restore.
    pub fn reset_with_hands(&mut self, p1_hand: Hand, p2_hand: Hand) -> Result<(), MatchError> {
        if self.phase == MatchPhase::Terminated {
            return Err(MatchError::Terminated);
        }
        let hands = PlayerPair::new(p1_hand, p2_hand);
        check_hands(&self.config, &hands)?;

        self.initial_hands = hands;
        self.reset()
    }

    /// `Finished -> Terminated`. No mutation is accepted afterwards.
    pub fn terminate(&mut self) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::Finished(_) => {}
            MatchPhase::Terminated => return Err(MatchError::Terminated),
            phase => return Err(MatchError::NotFinished(phase)),
        }

        self.phase = MatchPhase::Terminated;
        info!("match terminated");
        self.commit(self.turn.turn(), vec![MatchEvent::MatchTerminated]);
        Ok(())
    }

    /// Register an observer for events of future transactions.
    pub fn subscribe(&mut self, observer: impl MatchObserver + 'static) -> ObserverId {
        self.bus.subscribe(observer)
    }

    /// Drop an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Append to the log stamped with `turn`, then notify observers.
    fn commit(&mut self, turn: u32, events: Vec<MatchEvent>) {
        self.log
            .extend(events.iter().cloned().map(|event| LogEntry::new(turn, event)));
        self.bus.publish(&events);
    }

    // === Queries ===

    /// Player whose placement is accepted next.
    #[must_use]
    pub fn current_turn_owner(&self) -> PlayerId {
        self.turn.active()
    }

    /// Are `player`'s hand values face-up?
    #[must_use]
    pub fn is_hand_card_visible(&self, player: PlayerId) -> bool {
        self.players[player].is_hand_visible()
    }

    /// `InProgress` until the board is full, then the decided result.
    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        match self.phase {
            MatchPhase::Finished(outcome) => outcome,
            MatchPhase::Terminated => MatchOutcome::from_scores(self.scores()),
            MatchPhase::Setup | MatchPhase::InProgress => MatchOutcome::InProgress,
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// The validated configuration the match was built with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Read-only view of the grid. Ownership changes only through `place_card`.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Both scores, indexed by player.
    #[must_use]
    pub fn scores(&self) -> PlayerPair<i32> {
        self.players.map(Player::score)
    }

    /// Successful placements since the last reset.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn.turn()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn open_positions(&self) -> Vec<Position> {
        self.board.open_positions().collect()
    }

    /// Every committed event since the last reset.
    #[must_use]
    pub fn log(&self) -> &Vector<LogEntry> {
        &self.log
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("phase", &self.phase)
            .field("turn", &self.turn.turn())
            .field("scores", &self.scores())
            .field("board", &format_args!("\n{}", self.board))
            .field("bus", &self.bus)
            .finish()
    }
}

fn check_hands(config: &MatchConfig, hands: &PlayerPair<Hand>) -> Result<(), MatchError> {
    for (player, hand) in hands.iter() {
        if hand.len() != config.hand_size {
            return Err(MatchError::HandSize {
                player,
                expected: config.hand_size,
                actual: hand.len(),
            });
        }
    }
    Ok(())
}
