use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{CELL_COLUMNS, GLYPH_FOOD, GLYPH_SNAKE, Palette};
use crate::game::{GameState, GameStatus};
use crate::grid::Grid;
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, palette: &Palette) {
    let area = frame.area();
    let board_area = render_hud(frame, area, state, palette);
    let grid = state.rules().grid;

    let board = board_rect(board_area, grid);
    let block = Block::bordered()
        .border_style(Style::new().fg(palette.border_fg))
        .style(Style::new().bg(palette.board_bg));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, palette);
    render_snake(frame, inner, state, palette);

    match state.status {
        GameStatus::Idle => render_start_menu(frame, board, palette),
        GameStatus::Ended => {
            render_game_over_menu(frame, board, state.score, state.death_reason, palette);
        }
        GameStatus::Running => {}
    }
}

/// Bordered board rectangle centered in `area`, clipped to it.
fn board_rect(area: Rect, grid: Grid) -> Rect {
    let width = grid
        .size()
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = grid.size().saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let Some(food) = state.food else {
        return;
    };
    let Some((x, y)) = cell_to_terminal(inner, state.rules().grid, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(palette.food).bg(palette.board_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, palette: &Palette) {
    let grid = state.rules().grid;
    let head = state.snake.head();
    let glyph = GLYPH_SNAKE.repeat(usize::from(CELL_COLUMNS));

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, grid, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new()
                .fg(palette.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(palette.snake_body)
        };

        // Clip the right half of the cell when the board is truncated.
        let columns = usize::from(inner.right().saturating_sub(x).min(CELL_COLUMNS));
        buffer.set_stringn(x, y, &glyph, columns, style);
    }
}

/// Maps a grid cell to the terminal position of its left column.
fn cell_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.is_in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
