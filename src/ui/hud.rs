use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{COLOUR_APPLE, COLOUR_MUTED, COLOUR_TEXT, TickRate};
use crate::game::RenderState;

const SEPARATOR: &str = " │ ";

/// Supplemental values displayed by the HUD row.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub tick_rate: TickRate,
    /// Terminal columns used to draw one grid cell.
    pub cell_width: u16,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &RenderState, info: &HudInfo) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state, info.tick_rate, usize::from(hud_area.width)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOUR_MUTED)),
        hud_area,
    );

    play_area
}

fn info_line(state: &RenderState, tick_rate: TickRate, available_width: usize) -> Line<'static> {
    let compact = info_width(state, tick_rate, false) > available_width;
    let labels = Labels::new(compact);
    let value = Style::default().fg(COLOUR_TEXT);
    let score = Style::default()
        .fg(COLOUR_APPLE)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw(format!("{}: ", labels.score)),
        Span::styled(state.score.to_string(), score),
        Span::raw(SEPARATOR),
        Span::raw(format!("{}: ", labels.length)),
        Span::styled(state.length.to_string(), value),
        Span::raw(SEPARATOR),
        Span::raw(format!("{}: ", labels.speed)),
        Span::styled(format!("{}/s", tick_rate.get()), value),
        Span::raw(SEPARATOR),
        Span::styled(format!("{}x{}", state.grid.width, state.grid.height), value),
    ])
}

fn info_width(state: &RenderState, tick_rate: TickRate, compact: bool) -> usize {
    let labels = Labels::new(compact);
    let text = format!(
        "{}: {}{SEPARATOR}{}: {}{SEPARATOR}{}: {}/s{SEPARATOR}{}x{}",
        labels.score,
        state.score,
        labels.length,
        state.length,
        labels.speed,
        tick_rate.get(),
        state.grid.width,
        state.grid.height,
    );
    text.width()
}

struct Labels {
    score: &'static str,
    length: &'static str,
    speed: &'static str,
}

impl Labels {
    fn new(compact: bool) -> Self {
        if compact {
            Self {
                score: "S",
                length: "L",
                speed: "V",
            }
        } else {
            Self {
                score: "Score",
                length: "Length",
                speed: "Speed",
            }
        }
    }
}
