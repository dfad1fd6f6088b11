//! Frisbee Clicker: make frisbees by hand, buy generators that make them for you.

pub mod actions;
pub mod catalog;
pub mod events;
pub mod logic;
pub mod render;
pub mod state;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use catalog::GeneratorKind;
use events::GameEvent;
use state::FrisbeeState;
use view::FrisbeeView;

/// How long the click control shows its pressed frame.
const PRESS_FEEDBACK_MS: f64 = 100.0;

pub struct FrisbeeGame {
    pub state: FrisbeeState,
    pub view: FrisbeeView,
    last_click_ms: Option<f64>,
}

impl FrisbeeGame {
    pub fn new(now_ms: f64) -> Self {
        let mut state = FrisbeeState::new();
        let view = FrisbeeView::capture(&mut state, now_ms, false);
        Self {
            state,
            view,
            last_click_ms: None,
        }
    }

    fn make_frisbee(&mut self, now_ms: f64) {
        logic::click(&mut self.state, now_ms);
        self.last_click_ms = Some(now_ms);
        self.refresh(now_ms);
    }

    fn buy(&mut self, kind: GeneratorKind, now_ms: f64) -> bool {
        let price = self.state.generator(kind).cost;
        let accepted = logic::purchase(&mut self.state, kind);
        events::emit(&GameEvent::purchase(&self.state, kind, price, accepted));
        self.refresh(now_ms);
        accepted
    }
}

impl Game for FrisbeeGame {
    fn handle_input(&mut self, event: &InputEvent, now_ms: f64) -> bool {
        match event {
            InputEvent::Key('c' | 'C' | ' ') | InputEvent::Click(actions::CLICK_FRISBEE) => {
                self.make_frisbee(now_ms);
                true
            }
            InputEvent::Key(key) => match GeneratorKind::from_key(*key) {
                Some(kind) => {
                    self.buy(kind, now_ms);
                    true
                }
                None => false,
            },
            InputEvent::Click(action_id) => match actions::generator_for(*action_id) {
                Some(kind) => {
                    self.buy(kind, now_ms);
                    true
                }
                None => false,
            },
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        for _ in 0..delta_ticks {
            logic::tick(&mut self.state);
        }
    }

    fn refresh(&mut self, now_ms: f64) {
        let pressed = self
            .last_click_ms
            .is_some_and(|t| now_ms - t < PRESS_FEEDBACK_MS);
        self.view = FrisbeeView::capture(&mut self.state, now_ms, pressed);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.view, f, area, click_state);
    }
}
