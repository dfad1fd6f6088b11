//! Frisbee Clicker economy rules: pure functions, fully testable.

use super::catalog::GeneratorKind;
use super::state::FrisbeeState;

/// Manual clicks older than this no longer count toward the displayed rate.
pub const CLICK_WINDOW_MS: f64 = 1000.0;

/// Manual click: one frisbee, and a timestamp for the trailing click rate.
pub fn click(state: &mut FrisbeeState, now_ms: f64) {
    state.frisbees += 1;
    state.total_clicks += 1;
    state.recent_clicks.push_back(now_ms);
}

/// Try to buy one unit of a generator. Returns true if successful.
///
/// A purchase the player cannot afford is a no-op, not an error.
pub fn purchase(state: &mut FrisbeeState, kind: GeneratorKind) -> bool {
    let generator = &mut state.generators[kind.index()];
    if state.frisbees < generator.cost {
        return false;
    }
    state.frisbees -= generator.cost;
    generator.owned += 1;
    generator.cost = kind.cost_at(generator.owned);
    true
}

/// One production tick: every generator adds `owned * rate`.
pub fn tick(state: &mut FrisbeeState) {
    state.frisbees += state.passive_rate();
}

/// Frisbees per second shown to the player: passive production plus the
/// manual clicks of the last second. Expired click timestamps are dropped.
pub fn current_production_rate(state: &mut FrisbeeState, now_ms: f64) -> u64 {
    while let Some(&oldest) = state.recent_clicks.front() {
        if now_ms - oldest < CLICK_WINDOW_MS {
            break;
        }
        state.recent_clicks.pop_front();
    }
    state.passive_rate() + state.recent_clicks.len() as u64
}

/// Format a number with commas (e.g. 1234567 → "1,234,567").
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
