//! # Dots and Boxes Game Server Library
//!
//! This library provides the authoritative server implementation for the
//! networked two-player Dots and Boxes game. It owns the canonical game
//! state, enforces the rules, and answers client requests so both players
//! stay synchronized.
//!
//! ## Core Responsibilities
//!
//! ### Authoritative Game State
//! The server holds the only real board: the claimed edges, the completed
//! squares and their owners, the scores, whose turn it is, and the winner of
//! the last concluded round. Clients never mutate state directly; they submit
//! move requests and poll for snapshots.
//!
//! ### Rule Enforcement
//! Every move request is validated before application: the requesting seat
//! must hold the turn, both points must be on the grid and orthogonally
//! adjacent, and the edge must not already be claimed. All rejection reasons
//! collapse into a single negative result; invalid input never faults.
//!
//! ### Session Coordination
//! Exactly two seats exist. They are assigned in connection order and are
//! permanent for the process lifetime; any further connection attempt is
//! answered with a "game full" response.
//!
//! ## Architecture Design
//!
//! ### Single Serialization Point
//! All requests funnel through one sequential loop that owns the game state.
//! Network tasks only receive and send packets; they never touch the game.
//! This gives every request an exclusive critical section without explicit
//! locking, so each response reflects a consistent snapshot across edges,
//! squares, scores and turn.
//!
//! ### UDP Request/Response Protocol
//! Clients talk to the server over UDP using bincode-serialized packets from
//! the `shared` crate. Each request produces exactly one response; clients
//! poll at a fixed interval to observe state changes.
//!
//! ## Module Organization
//!
//! ### Game Module (`game`)
//! The board model wrapper, rule engine and turn coordinator:
//! - Seat assignment and turn tracking
//! - Move validation, square completion detection and scoring
//! - Round termination, winner computation and board reset
//!
//! ### Network Module (`network`)
//! The UDP server:
//! - Socket management and packet (de)serialization tasks
//! - The sequential request loop applying packets to the game
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::network::Server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut server = Server::new("127.0.0.1:8080").await?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod game;
pub mod network;
