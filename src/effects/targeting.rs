//! Card targeting.
//!
//! - `TargetSpec`: a card's targeting triple (alignment, occupant, aiming)
//! - `TargetSelector`: enumerates candidates on a board and applies aiming

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Node, Occupant, Position};
use crate::cards::{CardDefinition, TargetAiming, TargetAlignment, TargetOccupant};
use crate::core::{GameRng, Side};
use crate::error::CastError;

/// Final targets of a cast. Most casts hit a single node.
pub type Targets = SmallVec<[Position; 4]>;

/// What a card may target and how the final targets are picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetSpec {
    pub alignment: TargetAlignment,
    pub occupant: TargetOccupant,
    pub aiming: TargetAiming,
}

impl TargetSpec {
    #[must_use]
    pub const fn new(alignment: TargetAlignment, occupant: TargetOccupant, aiming: TargetAiming) -> Self {
        Self {
            alignment,
            occupant,
            aiming,
        }
    }

    /// The targeting triple printed on a card.
    #[must_use]
    pub fn of(card: &CardDefinition) -> Self {
        Self::new(card.target_alignment, card.target_occupant, card.target_aiming)
    }
}

/// Selects targets for one cast.
///
/// ## Candidates
///
/// A node is a candidate when its occupant matches the `TargetSpec` occupant
/// (rubble matches neither `unit` nor `empty`) and its alignment matches:
/// for units, the unit's side relative to the caster; for empty nodes, the
/// half the node lies on relative to the caster. Candidates are always
/// listed in board order.
#[derive(Clone, Debug)]
pub struct TargetSelector {
    spec: TargetSpec,
    caster: Side,
}

impl TargetSelector {
    #[must_use]
    pub fn new(spec: TargetSpec, caster: Side) -> Self {
        Self { spec, caster }
    }

    /// Selector for casting `card` as `caster`.
    #[must_use]
    pub fn for_card(card: &CardDefinition, caster: Side) -> Self {
        Self::new(TargetSpec::of(card), caster)
    }

    #[must_use]
    pub fn spec(&self) -> TargetSpec {
        self.spec
    }

    /// All candidate nodes, in board order.
    #[must_use]
    pub fn valid_targets(&self, board: &Board) -> Vec<Position> {
        board
            .nodes()
            .filter(|node| self.is_candidate(node))
            .map(|node| node.position)
            .collect()
    }

    /// Whether `pos` is currently a candidate.
    #[must_use]
    pub fn is_valid(&self, board: &Board, pos: Position) -> bool {
        board.node(pos).is_some_and(|node| self.is_candidate(node))
    }

    /// Pick the final targets.
    ///
    /// - `chosen`: `aim` must be a candidate, otherwise `InvalidTarget`.
    /// - `random`: one candidate picked uniformly with `rng`; `aim` is
    ///   ignored. `NoValidTarget` if there are none.
    /// - `all`: every candidate, possibly none. `aim` is ignored.
    pub fn resolve(
        &self,
        board: &Board,
        aim: Option<Position>,
        rng: &mut GameRng,
    ) -> Result<Targets, CastError> {
        match self.spec.aiming {
            TargetAiming::Chosen => match aim {
                Some(pos) if self.is_valid(board, pos) => Ok(smallvec::smallvec![pos]),
                _ => Err(CastError::InvalidTarget(aim)),
            },
            TargetAiming::Random => {
                let candidates = self.valid_targets(board);
                rng.choose(&candidates)
                    .map(|&pos| smallvec::smallvec![pos])
                    .ok_or(CastError::NoValidTarget)
            }
            TargetAiming::All => Ok(self.valid_targets(board).into_iter().collect()),
        }
    }

    fn is_candidate(&self, node: &Node) -> bool {
        match (&node.occupant, self.spec.occupant) {
            (Occupant::Unit(unit), TargetOccupant::Unit) => self.aligned(unit.side),
            (Occupant::Empty, TargetOccupant::Empty) => self.aligned(node.position.side),
            _ => false,
        }
    }

    fn aligned(&self, side: Side) -> bool {
        match self.spec.alignment {
            TargetAlignment::Friendly => side == self.caster,
            TargetAlignment::Enemy => side != self.caster,
            TargetAlignment::Any => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn unit_card() -> CardDefinition {
        CardDefinition::new(CardId::new(1), "Soldier").with_stats(1, 2)
    }

    fn board_with_units() -> Board {
        let mut board = Board::new(2, 1);
        board.summon(Position::new(Side::Player, 0, 0), &unit_card(), Side::Player);
        board.summon(Position::new(Side::Ai, 0, 0), &unit_card(), Side::Ai);
        board.summon(Position::new(Side::Ai, 1, 0), &unit_card(), Side::Ai);
        board.damage(Position::new(Side::Ai, 1, 0), 5);
        board
    }

    fn spec(alignment: TargetAlignment, occupant: TargetOccupant, aiming: TargetAiming) -> TargetSpec {
        TargetSpec::new(alignment, occupant, aiming)
    }

    #[test]
    fn test_unit_candidates_follow_alignment() {
        let board = board_with_units();
        let enemy = TargetSelector::new(
            spec(TargetAlignment::Enemy, TargetOccupant::Unit, TargetAiming::Chosen),
            Side::Player,
        );
        let any = TargetSelector::new(
            spec(TargetAlignment::Any, TargetOccupant::Unit, TargetAiming::Chosen),
            Side::Player,
        );

        assert_eq!(enemy.valid_targets(&board), vec![Position::new(Side::Ai, 0, 0)]);
        assert_eq!(any.valid_targets(&board).len(), 2);
    }

    #[test]
    fn test_empty_candidates_skip_rubble() {
        let board = board_with_units();
        let enemy_empty = TargetSelector::new(
            spec(TargetAlignment::Enemy, TargetOccupant::Empty, TargetAiming::Chosen),
            Side::Player,
        );
        let own_empty = TargetSelector::new(
            spec(TargetAlignment::Friendly, TargetOccupant::Empty, TargetAiming::Chosen),
            Side::Player,
        );

        assert!(enemy_empty.valid_targets(&board).is_empty());
        assert_eq!(own_empty.valid_targets(&board), vec![Position::new(Side::Player, 1, 0)]);
    }

    #[test]
    fn test_chosen_requires_candidate() {
        let board = board_with_units();
        let selector = TargetSelector::new(TargetSpec::default(), Side::Player);
        let mut rng = GameRng::new(1);
        let occupied = Position::new(Side::Player, 0, 0);
        let free = Position::new(Side::Player, 1, 0);

        assert_eq!(
            selector.resolve(&board, Some(occupied), &mut rng),
            Err(CastError::InvalidTarget(Some(occupied)))
        );
        assert_eq!(
            selector.resolve(&board, None, &mut rng),
            Err(CastError::InvalidTarget(None))
        );
        assert_eq!(selector.resolve(&board, Some(free), &mut rng).unwrap().as_slice(), &[free]);
    }

    #[test]
    fn test_random_picks_a_candidate() {
        let board = Board::new(3, 2);
        let selector = TargetSelector::new(
            spec(TargetAlignment::Friendly, TargetOccupant::Empty, TargetAiming::Random),
            Side::Ai,
        );
        let mut rng = GameRng::new(9);

        for _ in 0..20 {
            let targets = selector.resolve(&board, None, &mut rng).unwrap();
            assert_eq!(targets.len(), 1);
            assert_eq!(targets[0].side, Side::Ai);
        }
    }

    #[test]
    fn test_random_without_candidates_fails() {
        let board = Board::new(1, 1);
        let selector = TargetSelector::new(
            spec(TargetAlignment::Enemy, TargetOccupant::Unit, TargetAiming::Random),
            Side::Player,
        );

        assert_eq!(
            selector.resolve(&board, None, &mut GameRng::new(1)),
            Err(CastError::NoValidTarget)
        );
    }

    #[test]
    fn test_all_may_be_empty() {
        let board = Board::new(2, 2);
        let selector = TargetSelector::new(
            spec(TargetAlignment::Any, TargetOccupant::Unit, TargetAiming::All),
            Side::Player,
        );
        let everything = TargetSelector::new(
            spec(TargetAlignment::Any, TargetOccupant::Empty, TargetAiming::All),
            Side::Player,
        );
        let mut rng = GameRng::new(1);

        assert!(selector.resolve(&board, None, &mut rng).unwrap().is_empty());
        assert_eq!(everything.resolve(&board, None, &mut rng).unwrap().len(), 8);
    }
}
