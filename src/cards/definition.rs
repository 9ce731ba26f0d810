//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: what it
//! summons, how it aims, and which counters it moves. The engine only ever
//! reads definitions; the state a summoned card accumulates (current
//! defense, position) lives on `board::Unit`.

use serde::{Deserialize, Serialize};

use super::attributes::{AttackType, Caste, TargetAiming, TargetAlignment, TargetOccupant};

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// Missing fields take the classic defaults when deserialized, so card data
/// only needs to spell out what differs from a 1/1 friendly-summon card.
///
/// ## Example
///
/// ```
/// use grid_ccg::cards::{AttackType, CardDefinition, CardId};
///
/// let soldier = CardDefinition::new(CardId::new(1), "Soldier")
///     .with_stats(1, 2)
///     .with_attack_type(AttackType::Melee);
///
/// assert!(soldier.summons());
/// assert_eq!(soldier.to_string(), "T1: Soldier");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    pub caste: Caste,

    /// How strong the summoned unit is; used by the AI to pick targets.
    pub unit_power_level: i32,

    /// How strong the card is overall; used by the AI to order its hand and
    /// by deck point budgets.
    pub card_power_level: i32,

    pub attack: i32,
    pub defense: i32,
    pub attack_type: AttackType,

    /// Minimum caster tech level needed to cast.
    pub tech_level: i32,

    /// Added to the caster's tech level on a successful cast.
    pub tech_change: i32,

    /// Added to the caster's resources for the current turn.
    pub resource_bonus: i32,

    /// Extra cards the caster draws at the end of the turn.
    pub draw_num: u32,

    /// Turns the rubble left by a destroyed unit blocks its node. Zero means
    /// the node is cleared immediately.
    pub rubble_duration: u8,

    /// Damage dealt to each targeted unit. Negative values heal.
    pub direct_damage: i32,

    pub target_alignment: TargetAlignment,
    pub target_occupant: TargetOccupant,
    pub target_aiming: TargetAiming,
}

impl CardDefinition {
    /// Create a new card definition with default stats.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set attack and defense.
    #[must_use]
    pub fn with_stats(mut self, attack: i32, defense: i32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    #[must_use]
    pub fn with_attack_type(mut self, attack_type: AttackType) -> Self {
        self.attack_type = attack_type;
        self
    }

    #[must_use]
    pub fn with_caste(mut self, caste: Caste) -> Self {
        self.caste = caste;
        self
    }

    /// Set the unit and card power levels.
    #[must_use]
    pub fn with_power(mut self, unit_power_level: i32, card_power_level: i32) -> Self {
        self.unit_power_level = unit_power_level;
        self.card_power_level = card_power_level;
        self
    }

    #[must_use]
    pub fn with_tech_level(mut self, tech_level: i32) -> Self {
        self.tech_level = tech_level;
        self
    }

    /// Set the counter effects applied once per cast.
    #[must_use]
    pub fn with_counters(mut self, tech_change: i32, resource_bonus: i32, draw_num: u32) -> Self {
        self.tech_change = tech_change;
        self.resource_bonus = resource_bonus;
        self.draw_num = draw_num;
        self
    }

    #[must_use]
    pub fn with_rubble(mut self, turns: u8) -> Self {
        self.rubble_duration = turns;
        self
    }

    /// Make this a damage (positive) or heal (negative) card.
    #[must_use]
    pub fn with_direct_damage(mut self, amount: i32) -> Self {
        self.direct_damage = amount;
        self
    }

    /// Set the targeting triple.
    #[must_use]
    pub fn with_targeting(
        mut self,
        alignment: TargetAlignment,
        occupant: TargetOccupant,
        aiming: TargetAiming,
    ) -> Self {
        self.target_alignment = alignment;
        self.target_occupant = occupant;
        self.target_aiming = aiming;
        self
    }

    /// Whether casting this onto an empty node puts a unit there.
    #[must_use]
    pub fn summons(&self) -> bool {
        self.target_occupant == TargetOccupant::Empty && self.defense > 0
    }

    /// Whether this card damages the units it targets.
    #[must_use]
    pub fn deals_damage(&self) -> bool {
        self.target_occupant == TargetOccupant::Unit && self.direct_damage > 0
    }

    /// Whether this card heals the units it targets.
    #[must_use]
    pub fn heals(&self) -> bool {
        self.target_occupant == TargetOccupant::Unit && self.direct_damage < 0
    }
}

impl Default for CardDefinition {
    fn default() -> Self {
        Self {
            id: CardId::new(0),
            name: String::new(),
            caste: Caste::default(),
            unit_power_level: 0,
            card_power_level: 1,
            attack: 1,
            defense: 1,
            attack_type: AttackType::default(),
            tech_level: 1,
            tech_change: 0,
            resource_bonus: 0,
            draw_num: 0,
            rubble_duration: 1,
            direct_damage: 0,
            target_alignment: TargetAlignment::default(),
            target_occupant: TargetOccupant::default(),
            target_aiming: TargetAiming::default(),
        }
    }
}

impl std::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}: {}", self.tech_level, self.name)
    }
}
