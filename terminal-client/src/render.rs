use std::collections::HashSet;
use std::io::{Stdout, Write, stdout};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use snake_engine::{GameOverSummary, GamePhase, Point, Renderer, StateSnapshot, log};

/// Raw-mode terminal drawing: the grid with a `#` border, `O` head, `o` body
/// and `*` food, plus score and hint lines below. Terminal state is restored
/// on drop.
pub struct TerminalRenderer {
    out: Stdout,
    status_row: u16,
}

impl TerminalRenderer {
    pub fn new() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, Hide, Clear(ClearType::All))?;
        Ok(Self { out, status_row: 0 })
    }

    fn draw(&mut self, snapshot: &StateSnapshot) -> std::io::Result<()> {
        let size = snapshot.grid_size;
        let body: HashSet<Point> = snapshot.snake.iter().copied().collect();
        let head = snapshot.snake.first().copied();
        self.status_row = (size + 2) as u16;

        execute!(self.out, Clear(ClearType::All))?;

        let border: String = "#".repeat(size as usize + 2);
        execute!(self.out, MoveTo(0, 0), Print(&border))?;

        for y in 0..size {
            let mut row = String::with_capacity(size as usize + 2);
            row.push('#');
            for x in 0..size {
                let cell = Point::new(x, y);
                let glyph = if head == Some(cell) {
                    'O'
                } else if body.contains(&cell) {
                    'o'
                } else if snapshot.food == Some(cell) {
                    '*'
                } else {
                    ' '
                };
                row.push(glyph);
            }
            row.push('#');
            execute!(self.out, MoveTo(0, (y + 1) as u16), Print(&row))?;
        }
        execute!(self.out, MoveTo(0, (size + 1) as u16), Print(&border))?;

        execute!(
            self.out,
            MoveTo(0, self.status_row),
            Print(format!(
                "Score: {}   Best: {}",
                snapshot.score, snapshot.high_score
            )),
            MoveTo(0, self.status_row + 1),
            Print(phase_hint(snapshot.phase)),
        )?;

        self.out.flush()
    }

    fn draw_summary(&mut self, summary: &GameOverSummary) -> std::io::Result<()> {
        let line = if summary.new_record {
            format!("Final score: {} - new best!", summary.final_score)
        } else {
            format!(
                "Final score: {} (best: {})",
                summary.final_score, summary.high_score
            )
        };
        execute!(self.out, MoveTo(0, self.status_row + 2), Print(line))?;
        self.out.flush()
    }
}

fn phase_hint(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Idle => "Press Enter to start. Arrows move, Space pauses, q quits.",
        GamePhase::Running => "Arrows move, Space pauses, q quits.",
        GamePhase::Paused => "Paused. Space resumes.",
        GamePhase::Over => "Game over! r restarts, q quits.",
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, snapshot: &StateSnapshot) {
        if let Err(err) = self.draw(snapshot) {
            log!("Failed to draw frame: {}", err);
        }
    }

    fn game_over(&mut self, summary: &GameOverSummary) {
        if let Err(err) = self.draw_summary(summary) {
            log!("Failed to draw game over summary: {}", err);
        }
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, MoveTo(0, self.status_row + 3), Show);
        let _ = terminal::disable_raw_mode();
    }
}
