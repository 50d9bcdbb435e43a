use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    COLOUR_APPLE, COLOUR_BORDER, COLOUR_PLAYER, COLOUR_TAIL, GLYPH_APPLE, GLYPH_BODY, GLYPH_HEAD,
    GridSize,
};
use crate::game::RenderState;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over, render_start_hint, render_victory};

/// Renders the full game frame from an immutable snapshot.
pub fn render(frame: &mut Frame<'_>, state: &RenderState, info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, info);

    let field = field_rect(play_area, state.grid, info.cell_width);
    let block = Block::bordered().border_style(Style::new().fg(COLOUR_BORDER));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    let buffer = frame.buffer_mut();
    if let Some(apple) = state.apple {
        paint_cell(
            buffer,
            inner,
            state.grid,
            info.cell_width,
            apple,
            GLYPH_APPLE,
            Style::new().fg(COLOUR_APPLE),
        );
    }
    for segment in &state.body {
        paint_cell(
            buffer,
            inner,
            state.grid,
            info.cell_width,
            *segment,
            GLYPH_BODY,
            Style::new().fg(COLOUR_TAIL),
        );
    }
    paint_cell(
        buffer,
        inner,
        state.grid,
        info.cell_width,
        state.head,
        GLYPH_HEAD,
        Style::new().fg(COLOUR_PLAYER).add_modifier(Modifier::BOLD),
    );

    if state.game_over {
        render_game_over(frame, field, state.score);
    } else if state.victory {
        render_victory(frame, field, state.score);
    } else if state.awaiting_input {
        render_start_hint(frame, play_area);
    }
}

/// Bordered rectangle sized to the grid, centered in `area` and clipped to it.
fn field_rect(area: Rect, grid: GridSize, cell_width: u16) -> Rect {
    let width = grid.width.saturating_mul(cell_width).saturating_add(2);
    let height = grid.height.saturating_add(2);

    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, field, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(row);

    field
}

fn paint_cell(
    buffer: &mut Buffer,
    inner: Rect,
    grid: GridSize,
    cell_width: u16,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, grid, cell_width, position) else {
        return;
    };

    let columns = cell_width.min(inner.right().saturating_sub(x));
    for offset in 0..columns {
        buffer.set_string(x + offset, y, glyph, style);
    }
}

fn logical_to_terminal(
    inner: Rect,
    grid: GridSize,
    cell_width: u16,
    position: Position,
) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(cell_width)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
