//! Frisbee Clicker rendering. Draws a [`FrisbeeView`] snapshot only.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{buy_generator, CLICK_FRISBEE};
use super::view::{FrisbeeView, GeneratorView};

/// Disc art, 3 lines.
const FRISBEE_ART: &[&str] = &["  ╭━━━━━━━━━╮  ", " ━━━━━━━━━━━━━ ", "  ╰━━━━━━━━━╯  "];

/// Pressed frame: the disc shrinks slightly for one refresh after a click.
const FRISBEE_PRESSED_ART: &[&str] = &["   ╭━━━━━━━╮   ", "  ━━━━━━━━━━━  ", "   ╰━━━━━━━╯   "];

pub fn render(view: &FrisbeeView, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let narrow = is_narrow_layout(area.width);

    let (left, shop_area) = if narrow {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3 + 7 + 3), Constraint::Min(5)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        (chunks[0], chunks[1])
    };

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // counter
            Constraint::Min(7),    // click control
            Constraint::Length(3), // help
        ])
        .split(left);

    render_counter(view, f, left_chunks[0]);
    render_click_control(view, f, left_chunks[1], click_state);
    render_help(f, left_chunks[2]);
    render_shop(view, f, shop_area, click_state, !narrow);
}

fn render_counter(view: &FrisbeeView, f: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(Span::styled(
        view.counter.as_str(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Frisbee Clicker ")
            .title_bottom(
                Line::from(format!(" {} clicks ", view.total_clicks)).alignment(Alignment::Right),
            ),
    );
    f.render_widget(widget, area);
}

fn render_click_control(
    view: &FrisbeeView,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let (art, disc_color, label_style) = if view.pressed {
        (
            FRISBEE_PRESSED_ART,
            Color::White,
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        (
            FRISBEE_ART,
            Color::Red,
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines: Vec<Line> = art
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(disc_color))))
        .collect();
    lines.push(Line::from(Span::styled(
        view.rate.as_str(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    // Registered below as a whole-area target, not through ClickableList
    let button = Line::from(Span::styled(" [C] Make Frisbee 🥏! ", label_style));
    lines.push(button);

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(widget, area);

    // The whole control is the button
    click_state.borrow_mut().add_click_target(area, CLICK_FRISBEE);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "C/Space: make frisbee · 1-5: buy",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(help, area);
}

fn render_shop(
    view: &FrisbeeView,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    show_descriptions: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(" Shop · {} affordable ", view.enabled_count()));
    let inner = block.inner(area);

    // Descriptions are dropped when they would push generators off screen
    let mut cl = shop_list(view, show_descriptions);
    if show_descriptions && cl.visual_height(inner.width) > inner.height {
        cl = shop_list(view, false);
    }

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, inner.width);

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn shop_list(view: &FrisbeeView, show_descriptions: bool) -> ClickableList<'_> {
    let mut cl = ClickableList::new();
    for g in &view.generators {
        push_generator(&mut cl, g, show_descriptions);
    }
    cl
}

/// One purchase control: label row, owned row, and optionally the description.
/// Every row of the control buys the generator.
fn push_generator<'a>(cl: &mut ClickableList<'a>, g: &'a GeneratorView, show_description: bool) {
    let action = buy_generator(g.kind);
    let (key_style, text_style) = if g.enabled {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    cl.push_clickable(
        Line::from(vec![
            Span::styled(format!(" [{}] ", g.kind.key()), key_style),
            Span::styled(g.label.as_str(), text_style),
        ]),
        action,
    );
    cl.push_clickable(
        Line::from(Span::styled(format!("     {}", g.owned), text_style)),
        action,
    );
    if show_description {
        cl.push_clickable(
            Line::from(Span::styled(
                format!("     {}", g.description),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
            action,
        );
    }
}
