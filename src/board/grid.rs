//! The board: both halves of the grid in one persistent vector.
//!
//! Nodes are stored side by side, lane-major, row-minor:
//!
//! ```text
//! index = side * lanes * rows + lane * rows + row
//! ```
//!
//! That order is also the canonical board order used for candidate lists
//! and serialization. The vector is an `im::Vector`, so cloning a board to
//! work on a phase in isolation costs O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::node::{Node, Occupant, Rubble, Unit};
use super::position::Position;
use crate::cards::{CardDefinition, CardId};
use crate::core::{MatchConfig, Side, UnitId};

/// The game board.
///
/// ## Example
///
/// ```
/// use grid_ccg::board::{Board, Position};
/// use grid_ccg::cards::{CardDefinition, CardId};
/// use grid_ccg::core::Side;
///
/// let mut board = Board::new(3, 2);
/// let soldier = CardDefinition::new(CardId::new(1), "Soldier").with_stats(1, 2);
/// let at = Position::new(Side::Player, 1, 0);
///
/// let id = board.summon(at, &soldier, Side::Player).unwrap();
/// assert_eq!(board.find_unit(id).map(|(pos, _)| pos), Some(at));
/// assert!(board.summon(at, &soldier, Side::Player).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    lanes: u8,
    rows_per_side: u8,
    nodes: Vector<Node>,
    next_unit: UnitId,
}

/// What a single damage application did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    pub unit: UnitId,
    pub card: CardId,
    pub amount: i32,
    pub remaining: i32,
    /// Set when the unit died: how long its rubble will last (0 = none).
    pub destroyed: Option<u8>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(lanes: u8, rows_per_side: u8) -> Self {
        assert!(lanes > 0, "Board must have at least 1 lane");
        assert!(rows_per_side > 0, "Board must have at least 1 row per side");

        let mut nodes = Vector::new();
        for side in Side::ALL {
            for lane in 0..lanes {
                for row in 0..rows_per_side {
                    nodes.push_back(Node::empty(Position::new(side, lane, row)));
                }
            }
        }

        Self {
            lanes,
            rows_per_side,
            nodes,
            next_unit: UnitId::new(0),
        }
    }

    /// Create an empty board with the configured geometry.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.lanes, config.rows_per_side)
    }

    #[must_use]
    pub fn lanes(&self) -> u8 {
        self.lanes
    }

    #[must_use]
    pub fn rows_per_side(&self) -> u8 {
        self.rows_per_side
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Whether `pos` lies on this board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.lane < self.lanes && pos.row < self.rows_per_side
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let per_side = usize::from(self.lanes) * usize::from(self.rows_per_side);
        Some(
            pos.side.index() * per_side
                + usize::from(pos.lane) * usize::from(self.rows_per_side)
                + usize::from(pos.row),
        )
    }

    fn node_mut(&mut self, pos: Position) -> Option<&mut Node> {
        let index = self.index_of(pos)?;
        self.nodes.get_mut(index)
    }

    #[must_use]
    pub fn node(&self, pos: Position) -> Option<&Node> {
        self.nodes.get(self.index_of(pos)?)
    }

    /// All nodes in board order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn unit_at(&self, pos: Position) -> Option<&Unit> {
        self.node(pos).and_then(Node::unit)
    }

    /// Whether `pos` is on the board and holds nothing.
    #[must_use]
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.node(pos).is_some_and(Node::is_empty)
    }

    /// Find a unit by id.
    #[must_use]
    pub fn find_unit(&self, id: UnitId) -> Option<(Position, &Unit)> {
        self.units().find(|(_, unit)| unit.id == id)
    }

    /// All units in board order.
    pub fn units(&self) -> impl Iterator<Item = (Position, &Unit)> {
        self.nodes
            .iter()
            .filter_map(|node| node.unit().map(|unit| (node.position, unit)))
    }

    /// Units belonging to `side`, wherever they stand.
    pub fn units_of(&self, side: Side) -> impl Iterator<Item = (Position, &Unit)> {
        self.units().filter(move |(_, unit)| unit.side == side)
    }

    /// Nodes currently covered by rubble.
    pub fn rubble(&self) -> impl Iterator<Item = (Position, Rubble)> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.rubble().map(|rubble| (node.position, rubble)))
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Nodes ahead of `pos` for a unit of `mover`, nearest first.
    ///
    /// Ahead means toward the opposing base: the rest of `mover`'s own rows
    /// in the lane, then the opponent's rows from their front row back.
    /// An empty path means `pos` is the last node before the opposing base.
    #[must_use]
    pub fn path_ahead(&self, pos: Position, mover: Side) -> Vec<Position> {
        let opponent = mover.opponent();
        let mut path = Vec::new();

        if pos.side == mover {
            let own = (pos.row + 1..self.rows_per_side).map(|row| Position::new(mover, pos.lane, row));
            let theirs = (0..self.rows_per_side).rev().map(|row| Position::new(opponent, pos.lane, row));
            path.extend(own.chain(theirs));
        } else {
            path.extend((0..pos.row).rev().map(|row| Position::new(opponent, pos.lane, row)));
        }
        path
    }

    /// Units of `side` in attack order: lanes in ascending order, and within
    /// a lane the unit furthest forward first.
    #[must_use]
    pub fn attack_order(&self, side: Side) -> Vec<UnitId> {
        let mut order: Vec<_> = self
            .units_of(side)
            .map(|(pos, unit)| {
                let progress = pos.progress(side, self.rows_per_side);
                (pos.lane, std::cmp::Reverse(progress), unit.id)
            })
            .collect();
        order.sort();
        order.into_iter().map(|(_, _, id)| id).collect()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Put a new unit for `side` on `pos`.
    ///
    /// Returns `None` (and changes nothing) if `pos` is not a vacant node.
    pub fn summon(&mut self, pos: Position, card: &CardDefinition, side: Side) -> Option<UnitId> {
        if !self.is_vacant(pos) {
            return None;
        }
        let id = self.next_unit;
        let node = self.node_mut(pos)?;
        node.occupant = Occupant::Unit(Unit::from_card(id, card, side));
        self.next_unit = id.next();
        Some(id)
    }

    /// Move the unit on `from` to the vacant node `to`.
    pub fn move_unit(&mut self, from: Position, to: Position) -> bool {
        if self.unit_at(from).is_none() || !self.is_vacant(to) {
            return false;
        }
        let occupant = match self.node_mut(from) {
            Some(node) => std::mem::take(&mut node.occupant),
            None => return false,
        };
        match self.node_mut(to) {
            Some(node) => {
                node.occupant = occupant;
                true
            }
            None => false,
        }
    }

    /// Deal `amount` damage to the unit on `pos`.
    ///
    /// A unit whose defense drops to zero or below is removed: its node
    /// becomes rubble for `rubble_duration` decay steps, or empty if that is
    /// zero.
    pub fn damage(&mut self, pos: Position, amount: i32) -> Option<DamageReport> {
        let node = self.node_mut(pos)?;
        let unit = node.unit_mut()?;
        unit.defense -= amount;

        let mut report = DamageReport {
            unit: unit.id,
            card: unit.card,
            amount,
            remaining: unit.defense,
            destroyed: None,
        };

        if unit.is_destroyed() {
            let turns = unit.rubble_duration;
            node.occupant = if turns > 0 {
                Occupant::Rubble(Rubble::new(turns))
            } else {
                Occupant::Empty
            };
            report.destroyed = Some(turns);
        }
        Some(report)
    }

    /// Restore up to `amount` defense to the unit on `pos`, never above its
    /// maximum. Returns the defense actually restored.
    pub fn heal(&mut self, pos: Position, amount: i32) -> Option<i32> {
        let unit = self.node_mut(pos)?.unit_mut()?;
        let restored = amount.clamp(0, unit.damage());
        unit.defense += restored;
        Some(restored)
    }

    /// Close a half-turn: age every rubble on the board by one step and
    /// clear the nodes whose rubble runs out. Rubble laid during the closing
    /// half only loses its freshness, so it blocks the whole next half.
    /// Returns the cleared positions.
    pub fn decay_rubble(&mut self) -> Vec<Position> {
        let mut cleared = Vec::new();
        for node in self.nodes.iter_mut() {
            if let Occupant::Rubble(rubble) = &mut node.occupant {
                if std::mem::take(&mut rubble.fresh) {
                    continue;
                }
                rubble.turns = rubble.turns.saturating_sub(1);
                if rubble.turns == 0 {
                    node.occupant = Occupant::Empty;
                    cleared.push(node.position);
                }
            }
        }
        cleared
    }
}

impl std::fmt::Display for Board {
    /// Renders the AI half on top (back row first) and the player half below
    /// (front row first), one line per row and one cell per lane.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ai_rows = (0..self.rows_per_side).map(|row| (Side::Ai, row));
        let player_rows = (0..self.rows_per_side).rev().map(|row| (Side::Player, row));

        for (side, row) in ai_rows.chain(player_rows) {
            write!(f, "{side:>6} {row}:")?;
            for lane in 0..self.lanes {
                let cell = match self.node(Position::new(side, lane, row)).map(|n| &n.occupant) {
                    Some(Occupant::Unit(unit)) => {
                        let tag = if unit.side == Side::Player { 'p' } else { 'a' };
                        format!("{tag}{}/{}", unit.attack, unit.defense)
                    }
                    Some(Occupant::Rubble(_)) => "#".to_string(),
                    _ => ".".to_string(),
                };
                write!(f, " {cell:>5}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::AttackType;

    fn soldier() -> CardDefinition {
        CardDefinition::new(CardId::new(1), "Soldier")
            .with_stats(1, 2)
            .with_attack_type(AttackType::Melee)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5, 3);

        assert_eq!(board.nodes().count(), 30);
        assert!(board.nodes().all(Node::is_empty));
        assert_eq!(board.units().count(), 0);
    }

    #[test]
    fn test_board_order() {
        let board = Board::new(2, 2);
        let positions: Vec<_> = board.nodes().map(|n| n.position).collect();

        assert_eq!(positions[0], Position::new(Side::Player, 0, 0));
        assert_eq!(positions[1], Position::new(Side::Player, 0, 1));
        assert_eq!(positions[2], Position::new(Side::Player, 1, 0));
        assert_eq!(positions[4], Position::new(Side::Ai, 0, 0));
    }

    #[test]
    fn test_off_board_positions() {
        let mut board = Board::new(2, 2);
        let outside = Position::new(Side::Player, 2, 0);

        assert!(!board.contains(outside));
        assert!(board.node(outside).is_none());
        assert!(!board.is_vacant(outside));
        assert!(board.summon(outside, &soldier(), Side::Player).is_none());
    }

    #[test]
    fn test_summon_allocates_fresh_ids() {
        let mut board = Board::new(2, 2);
        let a = board.summon(Position::new(Side::Player, 0, 0), &soldier(), Side::Player).unwrap();
        let b = board.summon(Position::new(Side::Ai, 0, 0), &soldier(), Side::Ai).unwrap();

        assert_ne!(a, b);
        assert_eq!(board.units_of(Side::Ai).count(), 1);
    }

    #[test]
    fn test_path_ahead_crosses_into_enemy_half() {
        let board = Board::new(3, 3);
        let path = board.path_ahead(Position::new(Side::Player, 1, 1), Side::Player);

        assert_eq!(
            path,
            vec![
                Position::new(Side::Player, 1, 2),
                Position::new(Side::Ai, 1, 2),
                Position::new(Side::Ai, 1, 1),
                Position::new(Side::Ai, 1, 0),
            ]
        );

        let deep = board.path_ahead(Position::new(Side::Ai, 1, 0), Side::Player);
        assert!(deep.is_empty());

        let ai_path = board.path_ahead(Position::new(Side::Ai, 0, 2), Side::Ai);
        assert_eq!(ai_path.first(), Some(&Position::new(Side::Player, 0, 2)));
        assert_eq!(ai_path.len(), 3);
    }

    #[test]
    fn test_attack_order_is_lane_then_front_first() {
        let mut board = Board::new(2, 3);
        let back = board.summon(Position::new(Side::Player, 0, 0), &soldier(), Side::Player).unwrap();
        let front = board.summon(Position::new(Side::Player, 0, 2), &soldier(), Side::Player).unwrap();
        let deep = board.summon(Position::new(Side::Ai, 1, 1), &soldier(), Side::Player).unwrap();
        board.summon(Position::new(Side::Ai, 0, 0), &soldier(), Side::Ai).unwrap();

        assert_eq!(board.attack_order(Side::Player), vec![front, back, deep]);
    }

    #[test]
    fn test_move_unit() {
        let mut board = Board::new(1, 2);
        let from = Position::new(Side::Player, 0, 0);
        let to = Position::new(Side::Player, 0, 1);
        let id = board.summon(from, &soldier(), Side::Player).unwrap();

        assert!(board.move_unit(from, to));
        assert!(board.is_vacant(from));
        assert_eq!(board.unit_at(to).map(|u| u.id), Some(id));
        assert!(!board.move_unit(from, to));
    }

    #[test]
    fn test_damage_leaves_rubble() {
        let mut board = Board::new(1, 1);
        let pos = Position::new(Side::Ai, 0, 0);
        board.summon(pos, &soldier(), Side::Ai).unwrap();

        let hit = board.damage(pos, 1).unwrap();
        assert_eq!(hit.remaining, 1);
        assert_eq!(hit.destroyed, None);

        let kill = board.damage(pos, 5).unwrap();
        assert_eq!(kill.destroyed, Some(1));
        assert_eq!(board.node(pos).unwrap().rubble(), Some(Rubble::new(1)));
        assert!(board.damage(pos, 1).is_none());
    }

    #[test]
    fn test_damage_without_rubble() {
        let mut board = Board::new(1, 1);
        let pos = Position::new(Side::Ai, 0, 0);
        board.summon(pos, &soldier().with_rubble(0), Side::Ai).unwrap();

        assert_eq!(board.damage(pos, 2).unwrap().destroyed, Some(0));
        assert!(board.is_vacant(pos));
    }

    #[test]
    fn test_heal_is_capped() {
        let mut board = Board::new(1, 1);
        let pos = Position::new(Side::Player, 0, 0);
        board.summon(pos, &CardDefinition::new(CardId::new(2), "Wall").with_stats(0, 5), Side::Player);

        board.damage(pos, 3);
        assert_eq!(board.heal(pos, 10), Some(3));
        assert_eq!(board.unit_at(pos).unwrap().defense, 5);
        assert_eq!(board.heal(pos, 1), Some(0));
    }

    #[test]
    fn test_decay_rubble_skips_fresh() {
        let mut board = Board::new(1, 1);
        let ours = Position::new(Side::Player, 0, 0);
        let theirs = Position::new(Side::Ai, 0, 0);
        board.summon(ours, &soldier().with_rubble(2), Side::Player);
        board.summon(theirs, &soldier(), Side::Ai);
        board.damage(ours, 2);

        // Laid this half: survives the boundary.
        assert!(board.decay_rubble().is_empty());
        assert_eq!(board.node(ours).unwrap().rubble(), Some(Rubble { turns: 2, fresh: false }));

        board.damage(theirs, 2);
        assert!(board.decay_rubble().is_empty());
        assert_eq!(board.decay_rubble(), vec![ours, theirs]);
        assert_eq!(board.rubble().count(), 0);
    }

    #[test]
    fn test_display_marks_units_and_rubble() {
        let mut board = Board::new(2, 1);
        board.summon(Position::new(Side::Player, 0, 0), &soldier(), Side::Player);
        board.summon(Position::new(Side::Ai, 1, 0), &soldier(), Side::Ai);
        board.damage(Position::new(Side::Ai, 1, 0), 2);

        let rendered = board.to_string();
        assert!(rendered.contains("p1/2"));
        assert!(rendered.contains('#'));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new(2, 2);
        let snapshot = board.clone();
        board.summon(Position::new(Side::Player, 0, 0), &soldier(), Side::Player);

        assert_ne!(board, snapshot);
        assert_eq!(snapshot.units().count(), 0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut board = Board::new(2, 2);
        board.summon(Position::new(Side::Ai, 1, 1), &soldier(), Side::Ai);

        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }
}
