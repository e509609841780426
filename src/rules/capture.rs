//! Capture resolution.
//!
//! Resolution is a pure function of the board (with the new card already in
//! its cell), the placement position and the placing player. It returns
//! the ordered list of ownership flips; the match controller applies them.
//!
//! Rules run in a fixed order, Same first and then Basic. A cell taken by
//! an earlier rule counts as owned by the placer for later rules, so it is
//! never flipped (or scored) twice. Flips never propagate: only the four
//! cells adjacent to the placed card are ever examined.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::{Board, Direction, Position};
use crate::cards::PlacedCard;
use crate::core::PlayerId;

/// Which rule produced a capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureKind {
    /// Two facing-value sums matched.
    Same,
    /// The placed card's side beat the neighbour's facing side.
    Basic,
}

/// One ownership flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// Cell whose card changed hands.
    pub position: Position,
    /// Owner before the flip.
    pub from: PlayerId,
    /// Owner after the flip (always the placer).
    pub to: PlayerId,
    /// Rule that produced the flip.
    pub kind: CaptureKind,
}

/// Captures produced by one placement. Never more than four.
pub type Captures = SmallVec<[Capture; 4]>;

/// Read-only view of a placement for capture rules.
#[derive(Debug)]
pub struct CaptureContext<'a> {
    board: &'a Board,
    position: Position,
    placer: PlayerId,
    card: &'a PlacedCard,
    taken: &'a [Capture],
}

impl<'a> CaptureContext<'a> {
    /// The placing player.
    #[must_use]
    pub fn placer(&self) -> PlayerId {
        self.placer
    }

    /// The card just placed.
    #[must_use]
    pub fn card(&self) -> &PlacedCard {
        self.card
    }

    /// The neighbour in `direction` with its position.
    #[must_use]
    pub fn neighbor(&self, direction: Direction) -> Option<(Position, &'a PlacedCard)> {
        let card = self.board.neighbor(self.position, direction)?;
        let position = self.position.step(direction)?;
        Some((position, card))
    }

    /// Owner of a neighbour as seen by this rule, counting earlier captures.
    #[must_use]
    pub fn owner_of(&self, position: Position, card: &PlacedCard) -> PlayerId {
        if self.taken.iter().any(|c| c.position == position) {
            self.placer
        } else {
            card.owner()
        }
    }

    /// Placed side plus the neighbour's facing side, or 0 with no neighbour.
    #[must_use]
    pub fn pair_sum(&self, direction: Direction) -> i32 {
        self.neighbor(direction)
            .map_or(0, |(_, n)| self.card.value(direction) + n.value(direction.opposite()))
    }

    /// The neighbour in `direction` if it exists and belongs to the other player.
    #[must_use]
    pub fn opponent_neighbor(&self, direction: Direction) -> Option<(Position, &'a PlacedCard)> {
        self.neighbor(direction)
            .filter(|(pos, card)| self.owner_of(*pos, card) != self.placer)
    }
}

/// A capture rule.
///
/// Rules report the positions they take; the engine turns them into
/// `Capture`s and feeds them to later rules.
pub trait CaptureRule: std::fmt::Debug + Sync {
    /// Kind recorded on captures from this rule.
    fn kind(&self) -> CaptureKind;

    /// Positions this rule flips to the placer.
    ///
    /// Must only return neighbours owned by the other player.
    fn captures(&self, ctx: &CaptureContext<'_>) -> SmallVec<[Position; 4]>;
}

/// Same rule.
///
/// Pairs right with up and left with down: when the two pair sums are
/// equal and non-zero, both neighbours in the pair flip. The two pairings
/// are checked independently and may both fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct SameRule;

impl SameRule {
    const PAIRINGS: [(Direction, Direction); 2] = [
        (Direction::Up, Direction::Right),
        (Direction::Left, Direction::Down),
    ];
}

impl CaptureRule for SameRule {
    fn kind(&self) -> CaptureKind {
        CaptureKind::Same
    }

    fn captures(&self, ctx: &CaptureContext<'_>) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();

        for (a, b) in Self::PAIRINGS {
            let (sum_a, sum_b) = (ctx.pair_sum(a), ctx.pair_sum(b));
            if sum_a == 0 || sum_b == 0 || sum_a != sum_b {
                continue;
            }
            debug!(?a, ?b, sum = sum_a, "same rule matched");
            for dir in [a, b] {
                if let Some((pos, _)) = ctx.opponent_neighbor(dir) {
                    out.push(pos);
                }
            }
        }

        out
    }
}

/// Basic rule: strictly greater placed side beats the neighbour's facing side.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicRule;

impl CaptureRule for BasicRule {
    fn kind(&self) -> CaptureKind {
        CaptureKind::Basic
    }

    fn captures(&self, ctx: &CaptureContext<'_>) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let (pos, neighbor) = ctx.opponent_neighbor(dir)?;
                let attack = ctx.card().value(dir);
                let defense = neighbor.value(dir.opposite());
                (attack > defense).then(|| {
                    debug!(?dir, attack, defense, "basic rule won");
                    pos
                })
            })
            .collect()
    }
}

static SAME: SameRule = SameRule;
static BASIC: BasicRule = BasicRule;

/// Ordered set of capture rules.
#[derive(Clone, Debug)]
pub struct CaptureEngine {
    rules: Vec<&'static dyn CaptureRule>,
}

impl Default for CaptureEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl CaptureEngine {
    /// Same rule, then Basic rule.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![&SAME as &'static dyn CaptureRule, &BASIC],
        }
    }

    /// Compute every flip caused by the card at `position`.
    ///
    /// The card must already be on the board. Returns no captures for an
    /// empty cell.
    #[must_use]
    pub fn resolve(&self, board: &Board, position: Position, placer: PlayerId) -> Captures {
        let mut captures = Captures::new();
        let Some(card) = board.get(position) else {
            return captures;
        };

        for rule in &self.rules {
            let taken = {
                let ctx = CaptureContext {
                    board,
                    position,
                    placer,
                    card,
                    taken: &captures,
                };
                rule.captures(&ctx)
            };

            for pos in taken {
                if captures.iter().any(|c| c.position == pos) {
                    continue;
                }
                let Some(neighbor) = board.get(pos) else {
                    continue;
                };
                if neighbor.owner() == placer {
                    continue;
                }
                captures.push(Capture {
                    position: pos,
                    from: neighbor.owner(),
                    to: placer,
                    kind: rule.kind(),
                });
            }
        }

        captures
    }
}
