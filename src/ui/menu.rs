use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Palette;
use crate::game::DeathReason;

/// Draws the start prompt as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let lines = vec![
        title_line("SNAKE", palette),
        Line::from(""),
        Line::from("[Enter]/[Space] Start"),
        Line::from("[Q] Quit"),
        Line::from(""),
        Line::from("Use arrows/WASD to move"),
    ];

    render_popup(frame, area, " start ", lines);
}

/// Draws the game-over overlay with the final score.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
    palette: &Palette,
) {
    let lines = vec![
        title_line("GAME OVER", palette),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(death_cause(death_reason)),
        Line::from(""),
        Line::from("[Enter]/[R] Play Again"),
        Line::from("[Q] Quit"),
    ];

    render_popup(frame, area, " game over ", lines);
}

fn death_cause(reason: Option<DeathReason>) -> &'static str {
    match reason {
        Some(DeathReason::WallCollision) => "Cause: hit wall",
        Some(DeathReason::SelfCollision) => "Cause: hit yourself",
        Some(DeathReason::BoardFull) => "Board full!",
        None => "",
    }
}

fn title_line(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::styled(
        text,
        Style::new()
            .fg(palette.menu_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
    let content_width = lines
        .iter()
        .map(|line| line.to_string().width())
        .chain(std::iter::once(title.width()))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(content_width).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);

    let popup = centered_popup(area, width, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

/// Centers a `width`×`height` rectangle in `area`, shrinking it to fit.
fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
