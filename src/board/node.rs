//! Node contents: units and rubble.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::cards::{AttackType, CardDefinition, CardId};
use crate::core::{Side, UnitId};

/// A summoned unit.
///
/// Stats are copied from the card at summon time; `defense` is the current
/// value and drops as the unit takes damage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub card: CardId,
    pub side: Side,
    pub attack: i32,
    pub defense: i32,
    pub max_defense: i32,
    pub attack_type: AttackType,
    pub rubble_duration: u8,
}

impl Unit {
    /// Summon a fresh unit from a card.
    #[must_use]
    pub fn from_card(id: UnitId, card: &CardDefinition, side: Side) -> Self {
        Self {
            id,
            card: card.id,
            side,
            attack: card.attack,
            defense: card.defense,
            max_defense: card.defense,
            attack_type: card.attack_type,
            rubble_duration: card.rubble_duration,
        }
    }

    /// Damage taken so far.
    #[must_use]
    pub fn damage(&self) -> i32 {
        self.max_defense - self.defense
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.defense <= 0
    }
}

/// Debris left where a unit died. Blocks the node until it decays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubble {
    /// Decay steps left before the node clears.
    pub turns: u8,
    /// Laid during the half-turn still in progress; the boundary closing it
    /// does not count against `turns`.
    pub fresh: bool,
}

impl Rubble {
    /// Rubble laid just now.
    #[must_use]
    pub const fn new(turns: u8) -> Self {
        Self { turns, fresh: true }
    }
}

/// What sits on a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Unit(Unit),
    Rubble(Rubble),
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub position: Position,
    pub occupant: Occupant,
}

impl Node {
    #[must_use]
    pub fn empty(position: Position) -> Self {
        Self {
            position,
            occupant: Occupant::Empty,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.occupant, Occupant::Empty)
    }

    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        match &self.occupant {
            Occupant::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    pub fn unit_mut(&mut self) -> Option<&mut Unit> {
        match &mut self.occupant {
            Occupant::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    #[must_use]
    pub fn rubble(&self) -> Option<Rubble> {
        match self.occupant {
            Occupant::Rubble(rubble) => Some(rubble),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_card() {
        let card = CardDefinition::new(CardId::new(4), "Knight")
            .with_stats(2, 3)
            .with_attack_type(AttackType::Melee)
            .with_rubble(0);
        let mut unit = Unit::from_card(UnitId::new(1), &card, Side::Ai);

        assert_eq!(unit.card, CardId::new(4));
        assert_eq!(unit.max_defense, 3);
        assert_eq!(unit.rubble_duration, 0);
        assert_eq!(unit.damage(), 0);

        unit.defense -= 3;
        assert_eq!(unit.damage(), 3);
        assert!(unit.is_destroyed());
    }

    #[test]
    fn test_node_accessors() {
        let pos = Position::new(Side::Player, 0, 0);
        let mut node = Node::empty(pos);
        assert!(node.is_empty());
        assert!(node.unit().is_none());

        node.occupant = Occupant::Rubble(Rubble::new(1));
        assert!(!node.is_empty());
        assert_eq!(node.rubble(), Some(Rubble { turns: 1, fresh: true }));
        assert!(node.unit_mut().is_none());
    }
}
