use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Points per side of the grid (the board has GRID_SIZE x GRID_SIZE dots).
pub const GRID_SIZE: i32 = 3;
/// Number of 1x1 squares on the board.
pub const TOTAL_SQUARES: u32 = ((GRID_SIZE - 1) * (GRID_SIZE - 1)) as u32;
/// Total number of claimable edges: 2 * N * (N - 1) for an N x N point grid.
pub const MAX_EDGES: usize = (2 * GRID_SIZE * (GRID_SIZE - 1)) as usize;
/// Squares needed to guarantee victory (strict majority of TOTAL_SQUARES).
pub const WIN_THRESHOLD: u32 = TOTAL_SQUARES / 2 + 1;
/// Client polling interval for state re-fetch.
pub const POLL_INTERVAL_MS: u64 = 500;
pub const PROTOCOL_VERSION: u32 = 1;

/// Request/response packets exchanged between client and server.
///
/// Every client request gets exactly one response; each request is handled
/// atomically against the game state on the server.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum Packet {
    // Client -> server
    Connect {
        client_version: u32,
    },
    Move {
        seat: Seat,
        from: Point,
        to: Point,
    },
    GetEdges,
    GetSquares,
    GetCurrentTurn,
    GetLastWinner,

    // Server -> client
    Connected {
        seat: Seat,
    },
    GameFull {
        reason: String,
    },
    MoveResult {
        accepted: bool,
    },
    /// Space-separated canonical edge strings, e.g. "0,0-1,0 1,0-1,1".
    Edges {
        encoded: String,
    },
    /// Two-digit square key (top-left coordinates) to owner seat name.
    Squares {
        owners: HashMap<String, String>,
    },
    CurrentTurn {
        seat: Seat,
    },
    /// Empty string until a round has concluded with a non-tied result.
    LastWinner {
        winner: String,
    },
}

/// One of the two fixed player identities, assigned in connection order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    PlayerA,
    PlayerB,
}

impl Seat {
    pub fn other(&self) -> Seat {
        match self {
            Seat::PlayerA => Seat::PlayerB,
            Seat::PlayerB => Seat::PlayerA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Seat::PlayerA => "PlayerA",
            Seat::PlayerB => "PlayerB",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Seat::PlayerA => 0,
            Seat::PlayerB => 1,
        }
    }

    pub fn from_name(name: &str) -> Option<Seat> {
        match name {
            "PlayerA" => Some(Seat::PlayerA),
            "PlayerB" => Some(Seat::PlayerB),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grid point. Coordinates may come off the wire out of range; validity is
/// checked with `in_bounds`, never assumed.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    /// Orthogonal adjacency: Manhattan distance exactly 1.
    pub fn is_adjacent(&self, other: &Point) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// A claimed line segment between two adjacent grid points.
///
/// Canonicalized on construction (smaller point first), so the edge between
/// (0,0) and (1,0) is identical regardless of submission order.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Edge {
    a: Point,
    b: Point,
}

impl Edge {
    pub fn new(p1: Point, p2: Point) -> Self {
        if p2 < p1 {
            Self { a: p2, b: p1 }
        } else {
            Self { a: p1, b: p2 }
        }
    }

    pub fn endpoints(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    pub fn is_horizontal(&self) -> bool {
        self.a.y == self.b.y
    }

    /// Canonical wire encoding: "x1,y1-x2,y2" with the smaller point first.
    pub fn encode(&self) -> String {
        format!("{},{}-{},{}", self.a.x, self.a.y, self.b.x, self.b.y)
    }

    pub fn decode(s: &str) -> Option<Edge> {
        let (first, second) = s.split_once('-')?;
        let parse = |part: &str| -> Option<Point> {
            let (x, y) = part.split_once(',')?;
            Some(Point::new(x.parse().ok()?, y.parse().ok()?))
        };
        Some(Edge::new(parse(first)?, parse(second)?))
    }

    /// The in-bounds squares this edge borders: at most one on each side.
    pub fn candidate_squares(&self) -> Vec<Square> {
        let Point { x, y } = self.a;
        let candidates = if self.is_horizontal() {
            [Square::new(Point::new(x, y - 1)), Square::new(Point::new(x, y))]
        } else {
            [Square::new(Point::new(x - 1, y)), Square::new(Point::new(x, y))]
        };
        candidates.into_iter().filter(Square::in_bounds).collect()
    }
}

/// A 1x1 cell of the grid, identified by its top-left point.
#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Square {
    top_left: Point,
}

impl Square {
    pub fn new(top_left: Point) -> Self {
        Self { top_left }
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn in_bounds(&self) -> bool {
        let Point { x, y } = self.top_left;
        x >= 0 && y >= 0 && x + 1 < GRID_SIZE && y + 1 < GRID_SIZE
    }

    /// Wire key: the two digits of the top-left coordinate, e.g. "00".
    pub fn key(&self) -> String {
        format!("{}{}", self.top_left.x, self.top_left.y)
    }

    /// The four bounding edges: top, right, bottom, left.
    pub fn edges(&self) -> [Edge; 4] {
        let Point { x, y } = self.top_left;
        let tl = Point::new(x, y);
        let tr = Point::new(x + 1, y);
        let bl = Point::new(x, y + 1);
        let br = Point::new(x + 1, y + 1);
        [
            Edge::new(tl, tr),
            Edge::new(tr, br),
            Edge::new(bl, br),
            Edge::new(tl, bl),
        ]
    }
}

/// Pure board state: claimed edges, square ownership, per-player scores.
///
/// No I/O and no rule checking here; the server's rule engine validates moves
/// before mutating the board.
#[derive(Debug, Clone, Default)]
pub struct Board {
    edges: HashSet<Edge>,
    squares: HashMap<Square, Seat>,
    scores: [u32; 2],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_edge(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Caller guarantees the edge is not already present.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_square_complete(&self, square: &Square) -> bool {
        square.edges().iter().all(|e| self.edges.contains(e))
    }

    pub fn square_owner(&self, square: &Square) -> Option<Seat> {
        self.squares.get(square).copied()
    }

    /// Assigns ownership unless the square is already owned. Returns whether
    /// ownership was recorded.
    pub fn record_square_owner(&mut self, square: Square, seat: Seat) -> bool {
        if self.squares.contains_key(&square) {
            return false;
        }
        self.squares.insert(square, seat);
        true
    }

    pub fn score(&self, seat: Seat) -> u32 {
        self.scores[seat.index()]
    }

    pub fn increment_score(&mut self, seat: Seat) {
        self.scores[seat.index()] += 1;
    }

    /// Clears edges, square ownership and scores. Turn and seat assignment
    /// are not board state and are untouched.
    pub fn reset(&mut self) {
        self.edges.clear();
        self.squares.clear();
        self.scores = [0, 0];
    }

    /// Space-separated canonical edge strings in sorted order.
    pub fn encode_edges(&self) -> String {
        let mut edges: Vec<Edge> = self.edges.iter().copied().collect();
        edges.sort();
        edges
            .iter()
            .map(Edge::encode)
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Square key to owner seat name, as sent on the wire.
    pub fn squares_state(&self) -> HashMap<String, String> {
        self.squares
            .iter()
            .map(|(square, seat)| (square.key(), seat.as_str().to_string()))
            .collect()
    }
}
