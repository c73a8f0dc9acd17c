use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Palette;
use crate::game::GameState;

/// Renders the score row and the controls row, returning the board area
/// between them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, palette: &Palette) -> Rect {
    let [score_area, board_area, controls_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state.score, palette)).alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(controls_line(state.can_start(), state.can_restart(), palette))
            .alignment(Alignment::Center),
        controls_area,
    );

    board_area
}

fn score_line(score: u32, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            score.to_string(),
            Style::new().fg(palette.score).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn controls_line(can_start: bool, can_restart: bool, palette: &Palette) -> Line<'static> {
    let hint = |enabled: bool| {
        if enabled {
            Style::new().fg(palette.hint_enabled)
        } else {
            Style::new().fg(palette.hint_disabled)
        }
    };

    Line::from(vec![
        Span::styled("[Enter] Start", hint(can_start)),
        Span::raw("  "),
        Span::styled("[R] Restart", hint(can_restart)),
        Span::raw("  "),
        Span::styled("[Q] Quit", hint(true)),
    ])
}

#[cfg(test)]
mod tests {
    use crate::config::PALETTE;

    use super::{controls_line, score_line};

    #[test]
    fn score_line_shows_current_score() {
        let line = score_line(30, &PALETTE);

        assert_eq!(line.to_string(), "Score: 30");
    }

    #[test]
    fn unavailable_commands_are_dimmed() {
        let line = controls_line(true, false, &PALETTE);

        assert_eq!(line.spans[0].style.fg, Some(PALETTE.hint_enabled));
        assert_eq!(line.spans[2].style.fg, Some(PALETTE.hint_disabled));
    }
}
