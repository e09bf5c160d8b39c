//! Authoritative game state: seat assignment, turn tracking and the move
//! rule engine for Dots and Boxes.
//!
//! All mutation goes through `connect_player` and `apply_move`; the network
//! layer calls these from a single sequential loop, so every request observes
//! a consistent snapshot of edges, squares, scores and turn.

use log::info;
use shared::{Board, Edge, Point, Seat, MAX_EDGES, WIN_THRESHOLD};
use std::collections::HashMap;

/// The single game instance owned by the server process.
///
/// A round runs from an empty board to a terminal condition (all edges
/// claimed, or one player reaching the square majority). Finishing a round
/// clears the board but keeps the turn holder and seat assignments; the
/// winner string is retained until the next round concludes.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_turn: Seat,
    seats_taken: u8,
    last_winner: String,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Seat::PlayerA,
            seats_taken: 0,
            last_winner: String::new(),
        }
    }

    /// Assigns the next free seat in connection order, or `None` when both
    /// seats are taken. Seats are permanent for the process lifetime.
    pub fn connect_player(&mut self) -> Option<Seat> {
        let seat = match self.seats_taken {
            0 => Seat::PlayerA,
            1 => Seat::PlayerB,
            _ => return None,
        };
        self.seats_taken += 1;
        info!("Assigned seat {}", seat);
        Some(seat)
    }

    /// Validates and applies one move. Returns whether the move was accepted;
    /// every rejection reason (wrong turn, bad geometry, claimed edge)
    /// collapses into `false` with no state change.
    pub fn apply_move(&mut self, seat: Seat, from: Point, to: Point) -> bool {
        if seat != self.current_turn {
            return false;
        }
        if !from.in_bounds() || !to.in_bounds() || !from.is_adjacent(&to) {
            return false;
        }

        let edge = Edge::new(from, to);
        if self.board.has_edge(&edge) {
            return false;
        }
        self.board.add_edge(edge);

        // The new edge borders at most two squares; any it newly completes
        // belong to the mover.
        let mut scored = false;
        for square in edge.candidate_squares() {
            if self.board.is_square_complete(&square)
                && self.board.record_square_owner(square, seat)
            {
                self.board.increment_score(seat);
                scored = true;
                info!("{} completed square {}", seat, square.key());
            }
        }

        // Completing a square earns another move; otherwise the turn passes.
        if !scored {
            self.current_turn = self.current_turn.other();
        }

        if self.round_over() {
            self.finish_round();
        }

        true
    }

    fn round_over(&self) -> bool {
        self.board.edge_count() == MAX_EDGES
            || self.board.score(Seat::PlayerA) >= WIN_THRESHOLD
            || self.board.score(Seat::PlayerB) >= WIN_THRESHOLD
    }

    /// Records the winner, then clears the board for the next round. The
    /// winner must be computed before the reset wipes the scores.
    fn finish_round(&mut self) {
        self.last_winner = self.find_winner();
        if self.last_winner.is_empty() {
            info!("Round over: tie");
        } else {
            info!("Round over: {} wins", self.last_winner);
        }
        self.board.reset();
    }

    fn find_winner(&self) -> String {
        let a = self.board.score(Seat::PlayerA);
        let b = self.board.score(Seat::PlayerB);
        if a > b {
            Seat::PlayerA.as_str().to_string()
        } else if b > a {
            Seat::PlayerB.as_str().to_string()
        } else {
            String::new()
        }
    }

    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    /// Winner of the last concluded round; empty before any round ends or
    /// after a tie.
    pub fn last_winner(&self) -> &str {
        &self.last_winner
    }

    pub fn encoded_edges(&self) -> String {
        self.board.encode_edges()
    }

    pub fn squares_state(&self) -> HashMap<String, String> {
        self.board.squares_state()
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.board.score(seat)
    }

    pub fn edge_count(&self) -> usize {
        self.board.edge_count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Game with both seats taken, PlayerA to move.
    fn connected_game() -> Game {
        let mut game = Game::new();
        assert_eq!(game.connect_player(), Some(Seat::PlayerA));
        assert_eq!(game.connect_player(), Some(Seat::PlayerB));
        game
    }

    #[test]
    fn test_seat_assignment_order() {
        let mut game = Game::new();
        assert_eq!(game.connect_player(), Some(Seat::PlayerA));
        assert_eq!(game.connect_player(), Some(Seat::PlayerB));
    }

    #[test]
    fn test_third_connect_rejected() {
        let mut game = connected_game();
        assert_eq!(game.connect_player(), None);
        // Stays full on further attempts.
        assert_eq!(game.connect_player(), None);
    }

    #[test]
    fn test_out_of_turn_move_rejected() {
        let mut game = connected_game();
        // Geometrically valid, but PlayerA holds the turn.
        assert!(!game.apply_move(Seat::PlayerB, p(0, 0), p(1, 0)));
        assert_eq!(game.edge_count(), 0);
        assert_eq!(game.current_turn(), Seat::PlayerA);
    }

    #[test]
    fn test_non_adjacent_move_rejected() {
        let mut game = connected_game();
        assert!(!game.apply_move(Seat::PlayerA, p(0, 0), p(2, 0)));
        assert!(!game.apply_move(Seat::PlayerA, p(0, 0), p(1, 1)));
        assert!(!game.apply_move(Seat::PlayerA, p(0, 0), p(0, 0)));
        assert_eq!(game.edge_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_move_rejected() {
        let mut game = connected_game();
        assert!(!game.apply_move(Seat::PlayerA, p(2, 0), p(3, 0)));
        assert!(!game.apply_move(Seat::PlayerA, p(-1, 0), p(0, 0)));
        assert_eq!(game.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_edge_rejected_either_order() {
        let mut game = connected_game();
        assert!(game.apply_move(Seat::PlayerA, p(0, 0), p(1, 0)));
        // Turn passed to B; same edge in reversed point order.
        assert!(!game.apply_move(Seat::PlayerB, p(1, 0), p(0, 0)));
        assert!(!game.apply_move(Seat::PlayerB, p(0, 0), p(1, 0)));
        assert_eq!(game.edge_count(), 1);
        assert_eq!(game.current_turn(), Seat::PlayerB);
    }

    #[test]
    fn test_non_scoring_move_switches_turn() {
        let mut game = connected_game();
        assert!(game.apply_move(Seat::PlayerA, p(0, 0), p(1, 0)));
        assert_eq!(game.current_turn(), Seat::PlayerB);
        assert!(game.apply_move(Seat::PlayerB, p(1, 0), p(2, 0)));
        assert_eq!(game.current_turn(), Seat::PlayerA);
    }

    /// PlayerA claims the four edges of square (0,0); turn discipline forces
    /// PlayerB to move elsewhere in between. The fourth edge completes the
    /// square, scores for A and keeps A's turn.
    #[test]
    fn test_square_completion_scores_and_holds_turn() {
        let mut game = connected_game();

        assert!(game.apply_move(Seat::PlayerA, p(0, 0), p(1, 0)));
        assert!(game.apply_move(Seat::PlayerB, p(2, 0), p(2, 1)));
        assert!(game.apply_move(Seat::PlayerA, p(1, 0), p(1, 1)));
        assert!(game.apply_move(Seat::PlayerB, p(2, 1), p(2, 2)));
        assert!(game.apply_move(Seat::PlayerA, p(1, 1), p(0, 1)));
        assert!(game.apply_move(Seat::PlayerB, p(0, 2), p(1, 2)));

        assert_eq!(game.current_turn(), Seat::PlayerA);
        assert!(game.apply_move(Seat::PlayerA, p(0, 1), p(0, 0)));

        assert_eq!(
            game.squares_state().get("00").map(String::as_str),
            Some("PlayerA")
        );
        assert_eq!(game.score(Seat::PlayerA), 1);
        assert_eq!(game.score(Seat::PlayerB), 0);
        assert_eq!(game.current_turn(), Seat::PlayerA);
    }

    #[test]
    fn test_scores_monotonic_within_round() {
        let mut game = connected_game();
        let mut last_a = 0;
        let mut last_b = 0;

        let moves = [
            (p(0, 0), p(1, 0)),
            (p(2, 0), p(2, 1)),
            (p(1, 0), p(1, 1)),
            (p(2, 1), p(2, 2)),
            (p(1, 1), p(0, 1)),
            (p(0, 2), p(1, 2)),
            (p(0, 1), p(0, 0)),
        ];
        for (from, to) in moves {
            let mover = game.current_turn();
            assert!(game.apply_move(mover, from, to));
            assert!(game.score(Seat::PlayerA) >= last_a);
            assert!(game.score(Seat::PlayerB) >= last_b);
            last_a = game.score(Seat::PlayerA);
            last_b = game.score(Seat::PlayerB);
        }
    }

    /// Builds squares (0,0), (1,0) and (0,1) up to three edges each, then
    /// lets PlayerA close all three in a row. Reaching the majority threshold
    /// ends the round: winner recorded, board cleared, scores zeroed, turn
    /// and seats untouched.
    #[test]
    fn test_majority_threshold_ends_round() {
        let mut game = connected_game();

        // Seven non-scoring setup moves, alternating A/B.
        let setup = [
            (p(0, 0), p(1, 0)), // A
            (p(1, 0), p(1, 1)), // B
            (p(0, 1), p(1, 1)), // A
            (p(1, 0), p(2, 0)), // B
            (p(1, 1), p(2, 1)), // A
            (p(1, 1), p(1, 2)), // B
            (p(0, 2), p(1, 2)), // A
        ];
        for (from, to) in setup {
            let mover = game.current_turn();
            assert!(game.apply_move(mover, from, to));
        }

        // B passes the turn back with a neutral edge.
        assert_eq!(game.current_turn(), Seat::PlayerB);
        assert!(game.apply_move(Seat::PlayerB, p(2, 1), p(2, 2)));

        // A closes three squares in consecutive moves.
        assert!(game.apply_move(Seat::PlayerA, p(0, 0), p(0, 1)));
        assert_eq!(game.score(Seat::PlayerA), 1);
        assert!(game.apply_move(Seat::PlayerA, p(2, 0), p(2, 1)));
        assert_eq!(game.score(Seat::PlayerA), 2);
        assert!(game.apply_move(Seat::PlayerA, p(0, 1), p(0, 2)));

        // Third square hit WIN_THRESHOLD: round concluded and board reset.
        assert_eq!(game.last_winner(), "PlayerA");
        assert_eq!(game.edge_count(), 0);
        assert!(game.squares_state().is_empty());
        assert!(game.encoded_edges().is_empty());
        assert_eq!(game.score(Seat::PlayerA), 0);
        assert_eq!(game.score(Seat::PlayerB), 0);
        // A's last move scored, so A still holds the turn for the new round.
        assert_eq!(game.current_turn(), Seat::PlayerA);
        // Seats remain taken across rounds.
        assert_eq!(game.connect_player(), None);
    }

    /// A 2-2 round decided by edge exhaustion: B's final edge completes two
    /// squares at once, the twelfth edge ends the round and the tie leaves
    /// the winner string empty.
    #[test]
    fn test_tie_round_by_edge_exhaustion() {
        let mut game = connected_game();

        // Eight non-scoring setup moves leave squares (0,0), (1,0) and (0,1)
        // one edge short and square (1,1) two edges short.
        let setup = [
            (p(0, 0), p(1, 0)), // A
            (p(1, 0), p(1, 1)), // B
            (p(0, 1), p(1, 1)), // A
            (p(1, 0), p(2, 0)), // B
            (p(1, 1), p(2, 1)), // A
            (p(2, 1), p(2, 2)), // B
            (p(0, 2), p(1, 2)), // A
            (p(0, 1), p(0, 2)), // B
        ];
        for (from, to) in setup {
            let mover = game.current_turn();
            assert!(game.apply_move(mover, from, to));
        }

        assert_eq!(game.current_turn(), Seat::PlayerA);
        assert!(game.apply_move(Seat::PlayerA, p(0, 0), p(0, 1)));
        assert_eq!(game.score(Seat::PlayerA), 1);
        assert!(game.apply_move(Seat::PlayerA, p(2, 0), p(2, 1)));
        assert_eq!(game.score(Seat::PlayerA), 2);

        // Forced to give the turn away with the last non-scoring edge.
        assert!(game.apply_move(Seat::PlayerA, p(1, 2), p(2, 2)));
        assert_eq!(game.current_turn(), Seat::PlayerB);

        // The twelfth edge completes squares (0,1) and (1,1) together.
        assert!(game.apply_move(Seat::PlayerB, p(1, 1), p(1, 2)));

        assert_eq!(game.last_winner(), "");
        assert_eq!(game.edge_count(), 0);
        assert!(game.squares_state().is_empty());
        assert_eq!(game.score(Seat::PlayerA), 0);
        assert_eq!(game.score(Seat::PlayerB), 0);
    }

    #[test]
    fn test_winner_retained_until_next_round() {
        let mut game = connected_game();

        // Quick A victory (same script as the majority test).
        let moves = [
            (p(0, 0), p(1, 0)),
            (p(1, 0), p(1, 1)),
            (p(0, 1), p(1, 1)),
            (p(1, 0), p(2, 0)),
            (p(1, 1), p(2, 1)),
            (p(1, 1), p(1, 2)),
            (p(0, 2), p(1, 2)),
            (p(2, 1), p(2, 2)),
            (p(0, 0), p(0, 1)),
            (p(2, 0), p(2, 1)),
            (p(0, 1), p(0, 2)),
        ];
        for (from, to) in moves {
            let mover = game.current_turn();
            assert!(game.apply_move(mover, from, to));
        }
        assert_eq!(game.last_winner(), "PlayerA");

        // The winner string survives moves in the next round.
        let mover = game.current_turn();
        assert!(game.apply_move(mover, p(0, 0), p(1, 0)));
        assert_eq!(game.last_winner(), "PlayerA");
    }
}
