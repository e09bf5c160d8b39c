//! # Dots and Boxes Game Client Library
//!
//! Client-side implementation for the networked two-player Dots and Boxes
//! game. The client renders the board, turns user input into move requests,
//! and keeps its local view reconciled with the authoritative server by
//! polling at a fixed interval.
//!
//! ## Architecture Overview
//!
//! The client never applies game rules itself. It submits moves, the server
//! accepts or rejects them, and the next poll brings the local view back in
//! line with reality — eventual consistency within one polling interval.
//!
//! ## Module Organization
//!
//! ### Game Module (`game`)
//! The reconciled local view: assigned seat, claimed edges, square owners,
//! current turn and last winner, with change tracking so redraws only happen
//! when the observed state actually moved.
//!
//! ### Input Module (`input`)
//! The two-click move buffer. Two consecutive distinct valid grid points form
//! one move submission; the buffer clears on submission regardless of the
//! server's verdict, and rejections are surfaced to the user.
//!
//! ### Network Module (`network`)
//! The UDP event loop: connect handshake, fixed-interval state polling,
//! stdin input handling and response dispatch, with a clean exit on stdin
//! EOF or Ctrl+C.
//!
//! ### Rendering Module (`rendering`)
//! Terminal board view: dot grid, claimed edges, owner initials in completed
//! squares and a status line. Pure string building, testable without I/O.

pub mod game;
pub mod input;
pub mod network;
pub mod rendering;
