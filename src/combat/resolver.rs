//! Attack phase resolution.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Board, DamageReport, Occupant, Position};
use crate::cards::AttackType;
use crate::core::{Side, UnitId};

/// Something that happened during an attack phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A melee unit advanced one node.
    Moved {
        unit: UnitId,
        from: Position,
        to: Position,
    },
    /// A melee unit could not advance past a friendly unit or rubble.
    Halted {
        unit: UnitId,
        at: Position,
        blocked_by: Position,
    },
    /// An attack on an enemy unit, with the defender's simultaneous
    /// retaliation if it had one.
    Struck {
        attacker: UnitId,
        from: Position,
        target: Position,
        hit: DamageReport,
        retaliation: Option<DamageReport>,
    },
    /// A unit reached past the last node and hit the opposing base.
    BaseStruck { unit: UnitId, base: Side, damage: i32 },
}

/// Everything one side's attack phase did, in resolution order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub side: Side,
    pub events: Vec<CombatEvent>,
}

impl AttackReport {
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side,
            events: Vec::new(),
        }
    }

    /// Total damage dealt to the opposing base.
    #[must_use]
    pub fn base_damage(&self) -> i32 {
        self.events
            .iter()
            .map(|e| match e {
                CombatEvent::BaseStruck { damage, .. } => *damage,
                _ => 0,
            })
            .sum()
    }

    /// Units destroyed during the phase, on either side.
    pub fn destroyed(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.events.iter().flat_map(|e| {
            let reports: [Option<&DamageReport>; 2] = match e {
                CombatEvent::Struck { hit, retaliation, .. } => [Some(hit), retaliation.as_ref()],
                _ => [None, None],
            };
            reports
                .into_iter()
                .flatten()
                .filter(|r| r.destroyed.is_some())
                .map(|r| r.unit)
        })
    }
}

/// Resolves attack phases.
///
/// Units act one at a time in `Board::attack_order`. The set of acting
/// units is fixed when the phase starts; a unit destroyed by an earlier
/// exchange in the same phase does not act.
pub struct CombatResolver;

impl CombatResolver {
    /// Run the attack phase for `side`.
    pub fn resolve_attack_phase(board: &mut Board, side: Side) -> AttackReport {
        let mut report = AttackReport::new(side);

        for id in board.attack_order(side) {
            let Some((pos, attack_type)) = board.find_unit(id).map(|(pos, u)| (pos, u.attack_type)) else {
                continue;
            };
            let event = match attack_type {
                AttackType::Melee => Self::melee(board, side, id, pos),
                AttackType::Ranged => Self::ranged(board, side, pos),
                AttackType::Flying => Self::flying(board, side, id, pos),
                AttackType::Counterattack | AttackType::Wall | AttackType::None => None,
            };
            if let Some(event) = event {
                debug!("{side} attack: {event:?}");
                report.events.push(event);
            }
        }
        report
    }

    /// Step one node forward, or attack the enemy standing there.
    fn melee(board: &mut Board, side: Side, id: UnitId, pos: Position) -> Option<CombatEvent> {
        let Some(&next) = board.path_ahead(pos, side).first() else {
            return Self::strike_base(board, side, id);
        };

        match board.node(next).map(|n| &n.occupant) {
            Some(Occupant::Empty) => {
                board.move_unit(pos, next);
                Some(CombatEvent::Moved {
                    unit: id,
                    from: pos,
                    to: next,
                })
            }
            Some(Occupant::Unit(other)) if other.side != side => Self::exchange(board, pos, next),
            _ => Some(CombatEvent::Halted {
                unit: id,
                at: pos,
                blocked_by: next,
            }),
        }
    }

    /// Fire at the first enemy unit ahead, looking over friendly units and
    /// rubble.
    fn ranged(board: &mut Board, side: Side, pos: Position) -> Option<CombatEvent> {
        let target = board
            .path_ahead(pos, side)
            .into_iter()
            .find(|&p| board.unit_at(p).is_some_and(|u| u.side != side))?;
        Self::exchange(board, pos, target)
    }

    /// Swoop over two nodes and attack whatever enemy is on the third.
    fn flying(board: &mut Board, side: Side, id: UnitId, pos: Position) -> Option<CombatEvent> {
        let path = board.path_ahead(pos, side);
        let Some(&target) = path.get(2) else {
            return Self::strike_base(board, side, id);
        };
        if board.unit_at(target).is_some_and(|u| u.side != side) {
            Self::exchange(board, pos, target)
        } else {
            None
        }
    }

    fn strike_base(board: &Board, side: Side, id: UnitId) -> Option<CombatEvent> {
        let (_, unit) = board.find_unit(id)?;
        Some(CombatEvent::BaseStruck {
            unit: id,
            base: side.opponent(),
            damage: unit.attack,
        })
    }

    /// Simultaneous damage between the unit on `from` and the unit on
    /// `target`. Both amounts are read before either is applied.
    fn exchange(board: &mut Board, from: Position, target: Position) -> Option<CombatEvent> {
        let attacker = board.unit_at(from)?.clone();
        let defender = board.unit_at(target)?;

        let counter = if defender.attack_type.retaliates_against(attacker.attack_type) {
            Some(defender.attack)
        } else {
            None
        };

        let hit = board.damage(target, attacker.attack)?;
        let retaliation = counter.and_then(|amount| board.damage(from, amount));

        Some(CombatEvent::Struck {
            attacker: attacker.id,
            from,
            target,
            hit,
            retaliation,
        })
    }
}
