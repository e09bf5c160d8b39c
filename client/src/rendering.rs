//! Terminal rendering of the board view.
//!
//! Thin view layer: pure string building from the client game state, printed
//! whenever the view changes.

use crate::game::ClientGameState;
use shared::{Edge, Point, Seat, GRID_SIZE};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Redraws the whole board and status line.
    pub fn render(&self, state: &ClientGameState, pending: Option<Point>) {
        println!();
        for line in self.board_lines(state, pending) {
            println!("  {}", line);
        }
        println!("  {}", self.status_line(state));
        println!();
    }

    /// Dot grid with claimed edges and owner initials in completed squares.
    /// A pending first click is marked with 'o'.
    pub fn board_lines(&self, state: &ClientGameState, pending: Option<Point>) -> Vec<String> {
        let mut lines = Vec::new();

        for y in 0..GRID_SIZE {
            let mut dot_row = String::new();
            for x in 0..GRID_SIZE {
                let point = Point::new(x, y);
                dot_row.push(if pending == Some(point) { 'o' } else { '+' });

                if x + 1 < GRID_SIZE {
                    let edge = Edge::new(point, Point::new(x + 1, y));
                    dot_row.push_str(if state.has_edge(&edge) { "---" } else { "   " });
                }
            }
            lines.push(dot_row);

            if y + 1 < GRID_SIZE {
                let mut cell_row = String::new();
                for x in 0..GRID_SIZE {
                    let edge = Edge::new(Point::new(x, y), Point::new(x, y + 1));
                    cell_row.push(if state.has_edge(&edge) { '|' } else { ' ' });

                    if x + 1 < GRID_SIZE {
                        let key = format!("{}{}", x, y);
                        let initial = state
                            .square_owner(&key)
                            .and_then(|owner| owner.chars().last())
                            .unwrap_or(' ');
                        cell_row.push(' ');
                        cell_row.push(initial);
                        cell_row.push(' ');
                    }
                }
                lines.push(cell_row);
            }
        }

        lines
    }

    pub fn status_line(&self, state: &ClientGameState) -> String {
        let seat = state
            .seat()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "?".to_string());
        let turn = state
            .current_turn()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| "?".to_string());
        let winner = if state.last_winner().is_empty() {
            "-"
        } else {
            state.last_winner()
        };

        format!(
            "You: {} | Turn: {} | Score A:{} B:{} | Last winner: {}",
            seat,
            turn,
            state.score(Seat::PlayerA),
            state.score(Seat::PlayerB),
            winner
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
