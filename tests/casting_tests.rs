//! Targeting and casting integration tests.

use grid_ccg::board::{Board, Position};
use grid_ccg::cards::{
    CardCatalog, CardDefinition, CardId, CardRegistry, TargetAiming, TargetAlignment, TargetOccupant,
};
use grid_ccg::core::{GameRng, PlayerCounters, Side};
use grid_ccg::effects::{CastEngine, TargetSelector};
use grid_ccg::error::CastError;

fn soldier() -> CardDefinition {
    CardDefinition::new(CardId::new(1), "Soldier").with_stats(1, 2)
}

fn spark(aiming: TargetAiming) -> CardDefinition {
    CardDefinition::new(CardId::new(2), "Spark")
        .with_stats(0, 0)
        .with_direct_damage(1)
        .with_targeting(TargetAlignment::Enemy, TargetOccupant::Unit, aiming)
}

// =============================================================================
// Targeting
// =============================================================================

/// Friendly empty nodes are the caster's own half.
#[test]
fn test_empty_node_alignment_follows_half() {
    let board = Board::new(2, 2);

    let own = TargetSelector::for_card(&soldier(), Side::Player).valid_targets(&board);
    assert_eq!(own.len(), 4);
    assert!(own.iter().all(|pos| pos.side == Side::Player));

    let raid = soldier().with_targeting(TargetAlignment::Enemy, TargetOccupant::Empty, TargetAiming::Chosen);
    let enemy = TargetSelector::for_card(&raid, Side::Player).valid_targets(&board);
    assert!(enemy.iter().all(|pos| pos.side == Side::Ai));
}

/// Rubble is neither a unit nor empty, so nothing can target it.
#[test]
fn test_rubble_is_never_a_target() {
    let mut board = Board::new(1, 1);
    let at = Position::new(Side::Player, 0, 0);
    board.summon(at, &soldier(), Side::Player);
    board.damage(at, 5);

    let any_unit = soldier().with_targeting(TargetAlignment::Any, TargetOccupant::Unit, TargetAiming::All);
    let any_empty = soldier().with_targeting(TargetAlignment::Any, TargetOccupant::Empty, TargetAiming::All);

    assert!(!TargetSelector::for_card(&any_unit, Side::Player).is_valid(&board, at));
    assert!(!TargetSelector::for_card(&any_empty, Side::Player).is_valid(&board, at));
}

/// Random aiming picks one candidate, the same one for the same seed.
#[test]
fn test_random_target_is_seeded() {
    let mut board = Board::new(3, 1);
    for lane in 0..3 {
        board.summon(Position::new(Side::Ai, lane, 0), &soldier(), Side::Ai);
    }
    let selector = TargetSelector::for_card(&spark(TargetAiming::Random), Side::Player);
    let candidates = selector.valid_targets(&board);

    let a = selector.resolve(&board, None, &mut GameRng::new(8)).unwrap();
    let b = selector.resolve(&board, None, &mut GameRng::new(8)).unwrap();

    assert_eq!(a.len(), 1);
    assert_eq!(a, b);
    assert!(candidates.contains(&a[0]));
}

/// Random aiming with no candidate is rejected.
#[test]
fn test_random_without_candidates() {
    let board = Board::new(2, 2);
    let selector = TargetSelector::for_card(&spark(TargetAiming::Random), Side::Player);

    assert_eq!(
        selector.resolve(&board, None, &mut GameRng::new(1)),
        Err(CastError::NoValidTarget)
    );
}

/// Chosen aiming needs a node.
#[test]
fn test_chosen_without_node() {
    let board = Board::new(2, 2);
    let selector = TargetSelector::for_card(&soldier(), Side::Player);

    assert_eq!(
        selector.resolve(&board, None, &mut GameRng::new(1)),
        Err(CastError::InvalidTarget(None))
    );
}

// =============================================================================
// Casting
// =============================================================================

/// Summoning onto an occupied friendly node fails and leaves the board alone.
#[test]
fn test_summon_on_occupied_node_rejected() {
    let mut board = Board::new(2, 2);
    let mut counters = PlayerCounters::new(1, 20);
    let mut rng = GameRng::new(3);
    let at = Position::new(Side::Player, 0, 1);
    board.summon(at, &soldier(), Side::Player);
    let before = board.clone();

    let result = CastEngine::cast(&mut board, &mut counters, &soldier(), Side::Player, Some(at), &mut rng);

    assert_eq!(result, Err(CastError::InvalidTarget(Some(at))));
    assert_eq!(board, before);
    assert_eq!(counters, PlayerCounters::new(1, 20));
}

/// A random damage cast hits exactly one enemy.
#[test]
fn test_random_damage_hits_one() {
    let mut board = Board::new(3, 1);
    for lane in 0..3 {
        board.summon(Position::new(Side::Ai, lane, 0), &soldier(), Side::Ai);
    }
    let mut counters = PlayerCounters::new(1, 20);

    let effect = CastEngine::cast(
        &mut board,
        &mut counters,
        &spark(TargetAiming::Random),
        Side::Player,
        None,
        &mut GameRng::new(5),
    )
    .unwrap();

    assert_eq!(effect.hits.len(), 1);
    let damaged = board.units_of(Side::Ai).filter(|(_, u)| u.defense < 2).count();
    assert_eq!(damaged, 1);
}

/// Counter effects land on the caster's counters.
#[test]
fn test_counter_effects() {
    let mut board = Board::new(1, 1);
    let mut counters = PlayerCounters::new(1, 20);
    let scholar = soldier().with_counters(1, 3, 2);

    CastEngine::cast(
        &mut board,
        &mut counters,
        &scholar,
        Side::Ai,
        Some(Position::new(Side::Ai, 0, 0)),
        &mut GameRng::new(1),
    )
    .unwrap();

    assert_eq!(counters.tech, 2);
    assert_eq!(counters.resources, 3);
    assert_eq!(counters.take_bonus_draws(), 2);
    assert_eq!(counters.bonus_draws, 0);
}

/// Unknown ids surface as a cast error from the catalog.
#[test]
fn test_catalog_lookup() {
    let registry = CardRegistry::from_definitions([soldier()]);

    assert_eq!(registry.get_card(CardId::new(1)).unwrap().name, "Soldier");
    assert_eq!(
        registry.get_card(CardId::new(9)).unwrap_err(),
        CastError::UnknownCard(CardId::new(9))
    );
}
