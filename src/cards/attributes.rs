//! Closed vocabularies a card is described with.
//!
//! Every enumeration a card carries is a Rust enum, so an unknown behaviour
//! class or aiming mode is a deserialization error at the catalog boundary
//! instead of a silent fallthrough during a turn.
//!
//! Serialized names match the short codes used by card data files
//! (`"melee"`, `"counterattack"`, `"na"`, `"chosen"`, ...).

use serde::{Deserialize, Serialize};

/// How a summoned unit behaves during its side's attack phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackType {
    /// Never attacks.
    #[default]
    #[serde(rename = "na")]
    None,
    /// Advances one node per phase and attacks what it walks into.
    Melee,
    /// Fires down its lane over friendly units and rubble. Never moves.
    Ranged,
    /// Only strikes back when hit by an adjacent melee or flying attacker.
    Counterattack,
    /// Strikes exactly three nodes ahead, ignoring the two in between.
    Flying,
    /// Blocks and never attacks.
    Wall,
}

impl AttackType {
    /// Whether a defender of this type deals damage back to `attacker`.
    ///
    /// Counter-attackers lash back at anything that comes close enough to
    /// touch them. Ranged attackers never do.
    #[must_use]
    pub const fn retaliates_against(self, attacker: AttackType) -> bool {
        matches!(
            (self, attacker),
            (AttackType::Counterattack, AttackType::Melee | AttackType::Flying)
        )
    }
}

/// Which side a card may affect, relative to its caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAlignment {
    #[default]
    Friendly,
    Enemy,
    Any,
}

/// What must occupy a node for a card to target it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOccupant {
    /// A unit must be present.
    Unit,
    /// Nothing may be present, not even rubble.
    #[default]
    Empty,
}

/// How the final targets are picked from the candidate set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetAiming {
    /// The caster names one node.
    #[default]
    Chosen,
    /// One candidate picked uniformly at random.
    Random,
    /// Every candidate.
    All,
}

/// Faction a card belongs to. Only used for deck building and display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Caste {
    Revolution,
    Guild,
    #[default]
    Freemen,
    Wonderers,
    Untouchables,
}
