mod clock;
mod games;
mod input;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use clock::{now_ms, GameClock};
use games::frisbee::events::{self, GameEvent};
use games::frisbee::FrisbeeGame;
use games::Game;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Query the grid container's bounding rect and convert pixel coordinates to
/// a terminal cell `(col, row)`.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let game = Rc::new(RefCell::new(FrisbeeGame::new(now_ms())));
    let clock = Rc::new(RefCell::new(GameClock::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    events::emit(&GameEvent::session_started());

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                let (col, row) = match dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) {
                    Some(cell) => cell,
                    None => return,
                };
                let action = cs.hit_test(col, row);
                web_sys::console::log_1(
                    &format!("click: col={}, row={}, action={:?}", col, row, action).into(),
                );
                action
            };

            if let Some(action_id) = action {
                game.borrow_mut()
                    .handle_input(&InputEvent::Click(action_id), now_ms());
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                game.borrow_mut().handle_input(&InputEvent::Key(c), now_ms());
            }
        }
    });

    terminal.draw_web(move |f| {
        let now = now_ms();
        let ticks = clock.borrow_mut().update(now);

        let mut game = game.borrow_mut();
        if ticks.production > 0 {
            game.tick(ticks.production);
        }
        if ticks.needs_refresh() {
            game.refresh(now);
        }

        let area = f.area();
        click_state
            .borrow_mut()
            .begin_frame(area.width, area.height);
        game.render(f, area, &click_state);
    });

    Ok(())
}
