//! Clickable list component.
//!
//! [`ClickableList`] pairs rendered [`Line`]s with click actions so the row a
//! target lands on always matches the row its text was drawn on.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::{Paragraph, Wrap};

use crate::input::ClickState;

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push_clickable(Line::from("[1] Pie Tin Converter (50)"), BUY_GENERATOR_BASE);
/// cl.register_targets(area, &mut cs, 1, 1, inner_width);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a clickable line with a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Rows the lines occupy when wrapped to `inner_width` columns.
    pub fn visual_height(&self, inner_width: u16) -> u16 {
        if inner_width == 0 {
            return self.lines.len() as u16;
        }
        Paragraph::new(self.lines.clone())
            .wrap(Wrap { trim: false })
            .line_count(inner_width) as u16
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `top_offset` / `bottom_offset`: rows taken by borders.
    /// * `inner_width`: wrap width; `0` means one row per line.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let mut row_of_line: Vec<(u16, u16)> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            let h = if inner_width == 0 {
                1
            } else {
                (line.width().max(1)).div_ceil(inner_width as usize) as u16
            };
            row_of_line.push((cumulative, h));
            cumulative += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let (start, height) = row_of_line[line_idx as usize];
            for r in 0..height {
                let screen_row = content_y + start + r;
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}
