//! Semantic action IDs for Frisbee Clicker click targets.
//!
//! These IDs are registered during render and dispatched via `InputEvent::Click`.

use super::catalog::GeneratorKind;

pub const CLICK_FRISBEE: u16 = 0;

// ── Generator purchase (base + generator index 0..4) ────────────
pub const BUY_GENERATOR_BASE: u16 = 100;

pub fn buy_generator(kind: GeneratorKind) -> u16 {
    BUY_GENERATOR_BASE + kind.index() as u16
}

/// Map a purchase action ID back to its generator.
pub fn generator_for(action_id: u16) -> Option<GeneratorKind> {
    let index = action_id.checked_sub(BUY_GENERATOR_BASE)?;
    GeneratorKind::from_index(index as usize)
}
