use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::board::Board;
use crate::config::Difficulty;
use crate::scores::ScoreBook;
use crate::session::GameSession;

// One terminal cell per board tile, with a one-cell border around the
// playing field.
fn col(board: &Board, x: i32) -> u16 {
    (x / board.tile + 1) as u16
}

fn row(board: &Board, y: i32) -> u16 {
    (y / board.tile + 1) as u16
}

pub fn draw_frame(
    out: &mut impl Write,
    session: &GameSession,
    book: &ScoreBook,
    difficulty: Difficulty,
) -> std::io::Result<()> {
    let board = &session.board;
    let cols = board.cols() as u16;
    let rows = board.rows() as u16;

    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    // Border
    for x in 0..cols + 2 {
        execute!(out, MoveTo(x, 0), Print("#"))?;
        execute!(out, MoveTo(x, rows + 1), Print("#"))?;
    }
    for y in 1..rows + 1 {
        execute!(out, MoveTo(0, y), Print("#"))?;
        execute!(out, MoveTo(cols + 1, y), Print("#"))?;
    }

    // Snake, head first. On the final frame the head may sit outside
    // the field; skip anything out of bounds instead of wrapping.
    for (i, seg) in session.snake.segments().enumerate() {
        if !board.contains(seg) {
            continue;
        }
        let glyph = if i == 0 { "O" } else { "o" };
        execute!(out, MoveTo(col(board, seg.x), row(board, seg.y)), Print(glyph))?;
    }

    let food = session.food.position;
    execute!(out, MoveTo(col(board, food.x), row(board, food.y)), Print("*"))?;

    // Leaderboard sidebar, always on screen
    let panel_x = cols + 4;
    execute!(out, MoveTo(panel_x, 1), Print("High scores:"))?;
    if book.top.is_empty() {
        execute!(out, MoveTo(panel_x, 2), Print("(none yet)"))?;
    }
    for (i, entry) in book.top.iter().enumerate() {
        execute!(
            out,
            MoveTo(panel_x, 2 + i as u16),
            Print(format!("{:>2}. {}: {}", i + 1, entry.name, entry.score))
        )?;
    }

    execute!(
        out,
        MoveTo(0, rows + 2),
        Print(format!(
            "Score: {}   Best: {}   Speed: {}",
            session.score,
            book.best,
            difficulty.label()
        )),
        MoveTo(0, rows + 3),
        Print("Arrows to steer, 1/2/3 to change speed, 'q' to quit")
    )?;

    out.flush()
}

/// Game-over banner below the field; the final board and the sidebar
/// stay visible above it.
pub fn draw_game_over(out: &mut impl Write, session: &GameSession) -> std::io::Result<()> {
    let rows = session.board.rows() as u16;
    execute!(
        out,
        MoveTo(0, rows + 5),
        Clear(ClearType::FromCursorDown),
        Print(format!("Game over! Final score: {}", session.score)),
        MoveTo(0, rows + 6),
        Print("'r' or Enter to play again, 'q' to quit")
    )?;
    out.flush()
}

/// Name-entry line for a fresh best score.
pub fn draw_name_prompt(
    out: &mut impl Write,
    session: &GameSession,
    name: &str,
) -> std::io::Result<()> {
    let rows = session.board.rows() as u16;
    execute!(
        out,
        MoveTo(0, rows + 5),
        Clear(ClearType::CurrentLine),
        Print(format!(
            "New best score: {}! Enter your name: {}_   (Enter to save, Esc to skip)",
            session.score, name
        ))
    )?;
    out.flush()
}
