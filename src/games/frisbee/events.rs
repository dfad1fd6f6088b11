//! Structured game events logged to the browser console.
//!
//! Each event is one JSON object per console line, e.g.
//! `{"event":"purchased","generator":"PieTinConverter",...}`.

use serde::Serialize;

use super::catalog::GeneratorKind;
use super::state::FrisbeeState;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub generator: GeneratorKind,
    pub name: &'static str,
    pub base_cost: u64,
    pub rate: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    SessionStarted {
        catalog: Vec<CatalogEntry>,
    },
    Purchased {
        generator: GeneratorKind,
        price: u64,
        owned: u32,
        next_cost: u64,
        frisbees: u64,
    },
    PurchaseRejected {
        generator: GeneratorKind,
        cost: u64,
        frisbees: u64,
    },
}

impl GameEvent {
    pub fn session_started() -> Self {
        let catalog = GeneratorKind::all()
            .iter()
            .map(|k| CatalogEntry {
                generator: *k,
                name: k.name(),
                base_cost: k.base_cost(),
                rate: k.rate(),
            })
            .collect();
        GameEvent::SessionStarted { catalog }
    }

    /// Describe the outcome of a purchase attempt. `price` is the cost the
    /// generator had before the attempt.
    pub fn purchase(state: &FrisbeeState, kind: GeneratorKind, price: u64, accepted: bool) -> Self {
        let g = state.generator(kind);
        if accepted {
            GameEvent::Purchased {
                generator: kind,
                price,
                owned: g.owned,
                next_cost: g.cost,
                frisbees: state.frisbees,
            }
        } else {
            GameEvent::PurchaseRejected {
                generator: kind,
                cost: g.cost,
                frisbees: state.frisbees,
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Log an event to the browser console. No-op off the web.
pub fn emit(event: &GameEvent) {
    #[cfg(target_arch = "wasm32")]
    {
        match event.to_json() {
            Ok(json) => web_sys::console::log_1(&json.into()),
            Err(e) => web_sys::console::warn_1(&format!("event: serialize failed: {}", e).into()),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = event;
    }
}
