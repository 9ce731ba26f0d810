//! Board integration tests: geometry, unit lifecycle, rubble.

use grid_ccg::board::{Board, Occupant, Position, Rubble};
use grid_ccg::cards::{CardDefinition, CardId};
use grid_ccg::core::{MatchConfig, Side};

fn soldier(rubble: u8) -> CardDefinition {
    CardDefinition::new(CardId::new(1), "Soldier")
        .with_stats(1, 2)
        .with_rubble(rubble)
}

// =============================================================================
// Geometry
// =============================================================================

/// The default board is five lanes of three rows per side.
#[test]
fn test_default_board_shape() {
    let board = Board::from_config(&MatchConfig::default());

    assert_eq!(board.lanes(), 5);
    assert_eq!(board.rows_per_side(), 3);
    assert_eq!(board.nodes().count(), 30);
    assert!(board.nodes().all(|node| node.is_empty()));
}

/// Nodes come out in a stable order: side, then lane, then row.
#[test]
fn test_board_order() {
    let board = Board::new(2, 2);
    let positions: Vec<Position> = board.nodes().map(|node| node.position).collect();

    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert_eq!(positions[0], Position::new(Side::Player, 0, 0));
    assert_eq!(positions[7], Position::new(Side::Ai, 1, 1));
}

/// A lane path crosses the mover's remaining rows and then the enemy half
/// from its front row back.
#[test]
fn test_lane_path_crosses_halves() {
    let board = Board::new(3, 3);

    assert_eq!(
        board.path_ahead(Position::new(Side::Player, 1, 1), Side::Player),
        vec![
            Position::new(Side::Player, 1, 2),
            Position::new(Side::Ai, 1, 2),
            Position::new(Side::Ai, 1, 1),
            Position::new(Side::Ai, 1, 0),
        ]
    );
    assert_eq!(
        board.path_ahead(Position::new(Side::Player, 2, 1), Side::Ai),
        vec![Position::new(Side::Player, 2, 0)]
    );
    assert!(board
        .path_ahead(Position::new(Side::Ai, 0, 0), Side::Player)
        .is_empty());
}

/// Units attack lane by lane, front unit first.
#[test]
fn test_attack_order() {
    let mut board = Board::new(2, 2);
    let back = board.summon(Position::new(Side::Player, 0, 0), &soldier(1), Side::Player).unwrap();
    let deep = board.summon(Position::new(Side::Ai, 0, 0), &soldier(1), Side::Player).unwrap();
    let other_lane = board.summon(Position::new(Side::Player, 1, 1), &soldier(1), Side::Player).unwrap();
    board.summon(Position::new(Side::Player, 0, 1), &soldier(1), Side::Ai);

    assert_eq!(board.attack_order(Side::Player), vec![deep, back, other_lane]);
}

// =============================================================================
// Units
// =============================================================================

/// Summoning fills only vacant nodes and gives every unit a fresh id.
#[test]
fn test_summon_requires_vacant_node() {
    let mut board = Board::new(1, 1);
    let at = Position::new(Side::Player, 0, 0);

    let first = board.summon(at, &soldier(1), Side::Player).unwrap();
    assert!(board.summon(at, &soldier(1), Side::Player).is_none());
    assert!(board.summon(Position::new(Side::Player, 3, 0), &soldier(1), Side::Player).is_none());

    let second = board.summon(Position::new(Side::Ai, 0, 0), &soldier(1), Side::Ai).unwrap();
    assert_ne!(first, second);
    assert_eq!(board.units_of(Side::Ai).count(), 1);
}

/// A destroyed unit leaves rubble for as long as its card says.
#[test]
fn test_destroyed_unit_leaves_rubble() {
    let mut board = Board::new(1, 1);
    let at = Position::new(Side::Player, 0, 0);
    board.summon(at, &soldier(2), Side::Player);

    let report = board.damage(at, 5).unwrap();

    assert_eq!(report.destroyed, Some(2));
    assert_eq!(report.remaining, -3);
    assert_eq!(board.node(at).unwrap().occupant, Occupant::Rubble(Rubble::new(2)));
    assert!(board.find_unit(report.unit).is_none());
}

/// Healing restores lost defense but never goes past the maximum.
#[test]
fn test_heal_is_capped() {
    let mut board = Board::new(1, 1);
    let at = Position::new(Side::Player, 0, 0);
    board.summon(at, &CardDefinition::new(CardId::new(2), "Brute").with_stats(2, 5), Side::Player);
    board.damage(at, 3);

    assert_eq!(board.heal(at, 10), Some(3));
    assert_eq!(board.unit_at(at).unwrap().defense, 5);
    assert_eq!(board.heal(at, 1), Some(0));
}

// =============================================================================
// Rubble
// =============================================================================

/// Rubble of duration one outlasts the boundary closing the half it was laid
/// in and clears at the next; duration zero never leaves rubble at all.
#[test]
fn test_rubble_durations() {
    let mut board = Board::new(2, 1);
    let lasting = Position::new(Side::Player, 0, 0);
    let vanishing = Position::new(Side::Player, 1, 0);
    board.summon(lasting, &soldier(1), Side::Player);
    board.summon(vanishing, &soldier(0), Side::Player);

    board.damage(lasting, 2);
    board.damage(vanishing, 2);

    assert!(board.node(lasting).unwrap().rubble().is_some());
    assert!(board.is_vacant(vanishing));

    assert!(board.decay_rubble().is_empty());
    assert!(board.node(lasting).unwrap().rubble().is_some());

    let cleared = board.decay_rubble();
    assert_eq!(cleared, vec![lasting]);
    assert!(board.is_vacant(lasting));
}

/// Decay ages rubble on both halves alike.
#[test]
fn test_rubble_decays_on_both_halves() {
    let mut board = Board::new(1, 1);
    let ours = Position::new(Side::Player, 0, 0);
    let theirs = Position::new(Side::Ai, 0, 0);
    board.summon(ours, &soldier(1), Side::Player);
    board.summon(theirs, &soldier(1), Side::Ai);
    board.damage(ours, 2);
    board.damage(theirs, 2);

    assert!(board.decay_rubble().is_empty());
    assert_eq!(board.rubble().count(), 2);
    assert_eq!(board.decay_rubble(), vec![ours, theirs]);
}
