//! Display snapshot for Frisbee Clicker.
//!
//! The view is captured from the model on every refresh and holds only
//! formatted text and enabled flags. Render code reads the snapshot and never
//! the model, so nothing on screen is derived outside of `logic`.

use super::catalog::GeneratorKind;
use super::logic::{self, format_number};
use super::state::FrisbeeState;

/// One purchase control.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorView {
    pub kind: GeneratorKind,
    /// `"{name} ({cost})"`.
    pub label: String,
    /// `"Owned: {owned}"`.
    pub owned: String,
    pub description: &'static str,
    /// Whether the player can afford the next unit right now.
    pub enabled: bool,
}

/// Everything the renderer shows, as of the last refresh.
#[derive(Clone, Debug, PartialEq)]
pub struct FrisbeeView {
    /// `"Frisbees: {n}"`.
    pub counter: String,
    /// `"({rate} 🥏PS)"`.
    pub rate: String,
    pub total_clicks: u64,
    /// Click control shows its pressed frame.
    pub pressed: bool,
    pub generators: Vec<GeneratorView>,
}

impl FrisbeeView {
    /// Rebuild the whole snapshot from the model.
    ///
    /// Takes `&mut` because computing the click rate prunes expired click
    /// timestamps.
    pub fn capture(state: &mut FrisbeeState, now_ms: f64, pressed: bool) -> Self {
        let rate = logic::current_production_rate(state, now_ms);
        let generators = state
            .generators
            .iter()
            .map(|g| GeneratorView {
                kind: g.kind,
                label: format!("{} ({})", g.kind.name(), g.cost),
                owned: format!("Owned: {}", g.owned),
                description: g.kind.description(),
                enabled: state.can_afford(g.kind),
            })
            .collect();

        Self {
            counter: format!("Frisbees: {}", format_number(state.frisbees)),
            rate: format!("({} 🥏PS)", format_number(rate)),
            total_clicks: state.total_clicks,
            pressed,
            generators,
        }
    }

    pub fn enabled_count(&self) -> usize {
        self.generators.iter().filter(|g| g.enabled).count()
    }
}
