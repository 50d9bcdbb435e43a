use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{COLOUR_APPLE, COLOUR_MUTED, COLOUR_PLAYER, COLOUR_TAIL, COLOUR_TEXT};

/// Hint drawn while the game waits for the first direction.
pub fn render_start_hint(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("Arrows / WASD to move"),
        Line::from("+ / - change speed"),
        Line::from("R / F5 restart, Q quit"),
    ];
    let popup = popup_for(area, &lines);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(COLOUR_MUTED))
            .block(Block::bordered().title(" snake ").style(Style::default().fg(COLOUR_TAIL))),
        popup,
    );
}

/// Draws the game-over screen with the final score.
pub fn render_game_over(frame: &mut Frame<'_>, area: Rect, score: u32) {
    render_result(frame, area, "GAME OVER", score, Style::default().fg(COLOUR_APPLE));
}

/// Draws the win screen shown once the snake fills the board.
pub fn render_victory(frame: &mut Frame<'_>, area: Rect, score: u32) {
    render_result(frame, area, "YOU WIN", score, Style::default().fg(COLOUR_PLAYER));
}

fn render_result(frame: &mut Frame<'_>, area: Rect, title: &'static str, score: u32, style: Style) {
    let lines = vec![
        Line::from(title).style(style.add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(format!("Score: {score}")).style(Style::default().fg(COLOUR_TEXT)),
        Line::from(""),
        Line::from("[R] Play again  [Q] Quit").style(Style::default().fg(COLOUR_MUTED)),
    ];
    let popup = popup_for(area, &lines);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

/// Smallest centered rectangle holding `lines` inside a border, clipped to `area`.
fn popup_for(area: Rect, lines: &[Line<'_>]) -> Rect {
    let text_width = lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref().width())
                .sum::<usize>()
        })
        .max()
        .unwrap_or(0);
    let width = u16::try_from(text_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);

    centered_rect(area, width, height)
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::text::Line;

    use super::{centered_rect, popup_for};

    #[test]
    fn popup_is_centered_and_sized_to_text() {
        let area = Rect::new(0, 0, 41, 20);
        let lines = vec![Line::from("GAME OVER"), Line::from("Score: 12")];

        let popup = popup_for(area, &lines);

        assert_eq!(popup.width, 13);
        assert_eq!(popup.height, 4);
        assert_eq!(popup.x, 14);
        assert_eq!(popup.y, 8);
    }

    #[test]
    fn popup_is_clipped_to_small_areas() {
        let area = Rect::new(2, 1, 6, 3);

        let popup = centered_rect(area, 30, 10);

        assert_eq!(popup, area);
    }
}
