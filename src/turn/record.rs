//! Turn records.
//!
//! A `Turn` is built up while the phases run and handed out, read-only, when
//! the draw step completes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Position;
use crate::cards::CardId;
use crate::combat::AttackReport;
use crate::core::{Side, SideMap};
use crate::effects::{CastEffect, HealReport, Play};
use crate::error::CastError;

/// How a single play turned out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastOutcome {
    /// The card resolved.
    Resolved(CastEffect),
    /// The card was discarded for tech. Holds the new tech level.
    TechUp { level: i32 },
    /// Nothing was played.
    Passed,
    /// The play was rejected and had no effect. The card stays in hand.
    Skipped(CastError),
}

/// One play and its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    pub side: Side,
    pub play: Play,
    pub outcome: CastOutcome,
}

impl CastRecord {
    #[must_use]
    pub fn is_tech_up(&self) -> bool {
        matches!(self.outcome, CastOutcome::TechUp { .. })
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, CastOutcome::Skipped(_))
    }
}

/// Something worth knowing about a turn that is not a cast or an attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnNote {
    /// A side's library could not supply every card asked for.
    LibraryExhausted {
        side: Side,
        requested: usize,
        drawn: usize,
    },
    /// Base damage was absorbed because the base cannot be hurt in this
    /// match.
    BaseShielded { side: Side, damage: i32 },
}

/// Immutable record of one full turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    number: u32,
    heals: SideMap<Vec<HealReport>>,
    casts: SideMap<SmallVec<[CastRecord; 2]>>,
    attacks: SideMap<AttackReport>,
    rubble_cleared: Vec<Position>,
    drawn: Vec<CardId>,
    ai_drawn: usize,
    notes: Vec<TurnNote>,
}

impl Turn {
    pub(crate) fn new(number: u32) -> Self {
        Self {
            number,
            heals: SideMap::default(),
            casts: SideMap::default(),
            attacks: SideMap::new(AttackReport::new),
            rubble_cleared: Vec::new(),
            drawn: Vec::new(),
            ai_drawn: 0,
            notes: Vec::new(),
        }
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Units of `side` healed at the start of its turn.
    #[must_use]
    pub fn heals(&self, side: Side) -> &[HealReport] {
        &self.heals[side]
    }

    /// Plays made by `side`, in order.
    #[must_use]
    pub fn casts(&self, side: Side) -> &[CastRecord] {
        &self.casts[side]
    }

    /// `side`'s attack phase.
    #[must_use]
    pub fn attack(&self, side: Side) -> &AttackReport {
        &self.attacks[side]
    }

    /// Nodes whose rubble decayed away this turn.
    #[must_use]
    pub fn rubble_cleared(&self) -> &[Position] {
        &self.rubble_cleared
    }

    /// Cards the player drew at the end of the turn.
    #[must_use]
    pub fn drawn(&self) -> &[CardId] {
        &self.drawn
    }

    /// How many cards the AI drew during its turn.
    #[must_use]
    pub fn ai_drawn(&self) -> usize {
        self.ai_drawn
    }

    #[must_use]
    pub fn notes(&self) -> &[TurnNote] {
        &self.notes
    }

    pub(crate) fn record_heals(&mut self, side: Side, heals: Vec<HealReport>) {
        self.heals[side] = heals;
    }

    pub(crate) fn record_cast(&mut self, record: CastRecord) {
        self.casts[record.side].push(record);
    }

    pub(crate) fn record_attack(&mut self, report: AttackReport) {
        let side = report.side;
        self.attacks[side] = report;
    }

    pub(crate) fn record_rubble_cleared(&mut self, cleared: Vec<Position>) {
        self.rubble_cleared.extend(cleared);
    }

    pub(crate) fn record_drawn(&mut self, cards: Vec<CardId>) {
        self.drawn.extend(cards);
    }

    pub(crate) fn record_ai_drawn(&mut self, count: usize) {
        self.ai_drawn += count;
    }

    pub(crate) fn note(&mut self, note: TurnNote) {
        self.notes.push(note);
    }
}
