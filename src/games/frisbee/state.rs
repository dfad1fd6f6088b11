//! Frisbee Clicker game state definitions.

use std::collections::VecDeque;

use super::catalog::GeneratorKind;

/// Mutable state of one catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorState {
    pub kind: GeneratorKind,
    pub owned: u32,
    /// Price of the next unit. Recomputed from `owned` after every purchase.
    pub cost: u64,
}

impl GeneratorState {
    pub fn new(kind: GeneratorKind) -> Self {
        Self {
            kind,
            owned: 0,
            cost: kind.base_cost(),
        }
    }

    /// Frisbees this generator adds per production tick.
    pub fn production(&self) -> u64 {
        self.owned as u64 * self.kind.rate()
    }
}

/// Full state of a Frisbee Clicker session.
pub struct FrisbeeState {
    /// Frisbees on hand.
    pub frisbees: u64,
    /// Manual clicks this session.
    pub total_clicks: u64,
    /// One row per catalog entry, indexed by `GeneratorKind::index()`.
    pub generators: Vec<GeneratorState>,
    /// Timestamps (ms) of recent manual clicks, oldest first.
    pub recent_clicks: VecDeque<f64>,
}

impl FrisbeeState {
    pub fn new() -> Self {
        let generators = GeneratorKind::all()
            .iter()
            .map(|k| GeneratorState::new(*k))
            .collect();

        Self {
            frisbees: 0,
            total_clicks: 0,
            generators,
            recent_clicks: VecDeque::new(),
        }
    }

    pub fn generator(&self, kind: GeneratorKind) -> &GeneratorState {
        &self.generators[kind.index()]
    }

    /// Frisbees per production tick from all generators.
    pub fn passive_rate(&self) -> u64 {
        self.generators.iter().map(|g| g.production()).sum()
    }

    pub fn can_afford(&self, kind: GeneratorKind) -> bool {
        self.frisbees >= self.generator(kind).cost
    }
}
