//! Game trait shared by the frame loop and the input handlers.

pub mod frisbee;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};

pub trait Game {
    /// Handle an input event at `now_ms`. Returns true if the event was consumed.
    fn handle_input(&mut self, event: &InputEvent, now_ms: f64) -> bool;

    /// Advance game logic by `delta_ticks` production ticks.
    fn tick(&mut self, delta_ticks: u32);

    /// Recompute everything the renderer shows.
    fn refresh(&mut self, now_ms: f64);

    /// Render the last refreshed snapshot into the given area.
    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>);
}
