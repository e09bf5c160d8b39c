//! Server network layer: UDP request/response handling for the game protocol.
//!
//! Receiver and sender tasks only move packets; every request is applied to
//! the game state by the single `run` loop, which is the one serialization
//! point required for consistent snapshots.

use crate::game::Game;
use bincode::{deserialize, serialize};
use log::{error, info, warn};
use shared::{Packet, PROTOCOL_VERSION};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;

/// Messages sent from network tasks to the main server loop
#[derive(Debug)]
pub enum ServerMessage {
    PacketReceived {
        packet: Packet,
        addr: SocketAddr,
    },
    #[allow(dead_code)]
    Shutdown,
}

/// Messages sent from the main loop to the network sender task
#[derive(Debug)]
pub enum GameMessage {
    SendPacket { packet: Packet, addr: SocketAddr },
}

/// Main server coordinating networking and the authoritative game state
pub struct Server {
    socket: Arc<UdpSocket>,
    game: Game,

    // Communication channels
    server_tx: mpsc::UnboundedSender<ServerMessage>,
    server_rx: mpsc::UnboundedReceiver<ServerMessage>,
    game_tx: mpsc::UnboundedSender<GameMessage>,
    game_rx: mpsc::UnboundedReceiver<GameMessage>,
}

impl Server {
    pub async fn new(addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let socket = Arc::new(UdpSocket::bind(addr).await?);
        info!("Server listening on {}", socket.local_addr()?);

        let (server_tx, server_rx) = mpsc::unbounded_channel();
        let (game_tx, game_rx) = mpsc::unbounded_channel();

        Ok(Server {
            socket,
            game: Game::new(),
            server_tx,
            server_rx,
            game_tx,
            game_rx,
        })
    }

    /// The bound address, useful when binding to port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Spawns task that continuously listens for incoming packets
    fn spawn_network_receiver(&self) {
        let socket = Arc::clone(&self.socket);
        let server_tx = self.server_tx.clone();

        tokio::spawn(async move {
            let mut buffer = [0u8; 2048];

            loop {
                match socket.recv_from(&mut buffer).await {
                    Ok((len, addr)) => {
                        if let Ok(packet) = deserialize::<Packet>(&buffer[0..len]) {
                            if let Err(e) =
                                server_tx.send(ServerMessage::PacketReceived { packet, addr })
                            {
                                error!("Failed to send packet to main loop: {}", e);
                                break;
                            }
                        } else {
                            warn!("Failed to deserialize packet from {}", addr);
                        }
                    }
                    Err(e) => {
                        error!("Error receiving packet: {}", e);
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                }
            }
        });
    }

    /// Spawns task that processes the outgoing packet queue
    fn spawn_network_sender(&mut self) {
        let socket = Arc::clone(&self.socket);
        let mut game_rx = std::mem::replace(&mut self.game_rx, mpsc::unbounded_channel().1);

        tokio::spawn(async move {
            while let Some(message) = game_rx.recv().await {
                match message {
                    GameMessage::SendPacket { packet, addr } => {
                        if let Err(e) = Self::send_packet_impl(&socket, &packet, addr).await {
                            error!("Failed to send packet to {}: {}", addr, e);
                        }
                    }
                }
            }
        });
    }

    async fn send_packet_impl(
        socket: &UdpSocket,
        packet: &Packet,
        addr: SocketAddr,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let data = serialize(packet)?;
        socket.send_to(&data, addr).await?;
        Ok(())
    }

    fn send_packet(&self, packet: Packet, addr: SocketAddr) {
        if let Err(e) = self.game_tx.send(GameMessage::SendPacket { packet, addr }) {
            error!("Failed to queue packet for sending: {}", e);
        }
    }

    /// Handles one request against the game state and queues the response.
    /// Runs on the main loop only, so each request is atomic.
    fn handle_packet(&mut self, packet: Packet, addr: SocketAddr) {
        match packet {
            Packet::Connect { client_version } => {
                info!(
                    "Client connecting from {} (version: {})",
                    addr, client_version
                );
                if client_version != PROTOCOL_VERSION {
                    warn!("Protocol version mismatch from {}", addr);
                }

                let response = match self.game.connect_player() {
                    Some(seat) => Packet::Connected { seat },
                    None => Packet::GameFull {
                        reason: "Game is full".to_string(),
                    },
                };
                self.send_packet(response, addr);
            }

            Packet::Move { seat, from, to } => {
                let accepted = self.game.apply_move(seat, from, to);
                self.send_packet(Packet::MoveResult { accepted }, addr);
            }

            Packet::GetEdges => {
                let encoded = self.game.encoded_edges();
                self.send_packet(Packet::Edges { encoded }, addr);
            }

            Packet::GetSquares => {
                let owners = self.game.squares_state();
                self.send_packet(Packet::Squares { owners }, addr);
            }

            Packet::GetCurrentTurn => {
                let seat = self.game.current_turn();
                self.send_packet(Packet::CurrentTurn { seat }, addr);
            }

            Packet::GetLastWinner => {
                let winner = self.game.last_winner().to_string();
                self.send_packet(Packet::LastWinner { winner }, addr);
            }

            _ => {
                warn!("Unexpected packet type from client at {}", addr);
            }
        }
    }

    /// Main server loop: processes requests sequentially
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.spawn_network_receiver();
        self.spawn_network_sender();

        info!("Server started successfully");

        loop {
            match self.server_rx.recv().await {
                Some(ServerMessage::PacketReceived { packet, addr }) => {
                    self.handle_packet(packet, addr);
                }
                Some(ServerMessage::Shutdown) | None => {
                    info!("Server shutting down");
                    break;
                }
            }
        }

        Ok(())
    }
}
