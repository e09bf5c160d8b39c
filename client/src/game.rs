//! Client-side view of the server's game state.
//!
//! The client never mutates game state on its own; it reconciles the latest
//! polled snapshots into this view and tracks whether anything changed so the
//! renderer only redraws on observed change.

use log::{info, warn};
use shared::{Edge, Seat};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ClientGameState {
    seat: Option<Seat>,
    edges: HashSet<Edge>,
    squares: HashMap<String, String>,
    current_turn: Option<Seat>,
    last_winner: String,
    dirty: bool,
}

impl ClientGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign_seat(&mut self, seat: Seat) {
        self.seat = Some(seat);
        self.dirty = true;
    }

    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }

    /// Reconciles the polled edge list (space-separated canonical strings).
    /// Unparseable entries are dropped with a warning.
    pub fn apply_edges(&mut self, encoded: &str) {
        let mut edges = HashSet::new();
        for token in encoded.split_whitespace() {
            match Edge::decode(token) {
                Some(edge) => {
                    edges.insert(edge);
                }
                None => warn!("Ignoring malformed edge {:?} from server", token),
            }
        }
        if edges != self.edges {
            self.edges = edges;
            self.dirty = true;
        }
    }

    pub fn apply_squares(&mut self, owners: HashMap<String, String>) {
        if owners != self.squares {
            self.squares = owners;
            self.dirty = true;
        }
    }

    pub fn apply_turn(&mut self, seat: Seat) {
        if self.current_turn != Some(seat) {
            self.current_turn = Some(seat);
            self.dirty = true;
        }
    }

    pub fn apply_winner(&mut self, winner: String) {
        if winner != self.last_winner {
            if !winner.is_empty() {
                info!("Round concluded, winner: {}", winner);
            }
            self.last_winner = winner;
            self.dirty = true;
        }
    }

    /// Returns whether the view changed since the last call, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn square_owner(&self, key: &str) -> Option<&str> {
        self.squares.get(key).map(String::as_str)
    }

    pub fn current_turn(&self) -> Option<Seat> {
        self.current_turn
    }

    pub fn is_my_turn(&self) -> bool {
        self.seat.is_some() && self.seat == self.current_turn
    }

    pub fn last_winner(&self) -> &str {
        &self.last_winner
    }

    /// Scores are not polled separately; they are derived by counting owned
    /// squares in the current round.
    pub fn score(&self, seat: Seat) -> usize {
        self.squares
            .values()
            .filter(|owner| owner.as_str() == seat.as_str())
            .count()
    }
}
