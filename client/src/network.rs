use crate::game::ClientGameState;
use crate::input::{parse_point, ClickBuffer};
use crate::rendering::Renderer;
use bincode::{deserialize, serialize};
use log::{error, info, warn};
use shared::{Packet, Point, PROTOCOL_VERSION};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UdpSocket;
use tokio::time::interval;

pub struct Client {
    socket: UdpSocket,
    server_addr: SocketAddr,
    connected: bool,
    seat_refused: bool,

    game_state: ClientGameState,
    click_buffer: ClickBuffer,
    renderer: Renderer,

    poll_interval_ms: u64,
}

impl Client {
    pub async fn new(
        server_addr: &str,
        poll_interval_ms: u64,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        let server_addr = server_addr.parse()?;

        Ok(Client {
            socket,
            server_addr,
            connected: false,
            seat_refused: false,
            game_state: ClientGameState::new(),
            click_buffer: ClickBuffer::new(),
            renderer: Renderer::new(),
            poll_interval_ms,
        })
    }

    async fn connect(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        info!("Connecting to server...");

        let packet = Packet::Connect {
            client_version: PROTOCOL_VERSION,
        };
        self.send_packet(&packet).await?;

        Ok(())
    }

    async fn send_packet(&self, packet: &Packet) -> Result<(), Box<dyn std::error::Error>> {
        let data = serialize(packet)?;
        self.socket.send_to(&data, self.server_addr).await?;
        Ok(())
    }

    /// Re-fetches the full server state; each query is answered independently.
    async fn poll_state(&self) {
        for packet in [
            Packet::GetCurrentTurn,
            Packet::GetEdges,
            Packet::GetSquares,
            Packet::GetLastWinner,
        ] {
            if let Err(e) = self.send_packet(&packet).await {
                error!("Error sending poll request: {}", e);
            }
        }
    }

    fn handle_packet(&mut self, packet: Packet) {
        match packet {
            Packet::Connected { seat } => {
                info!("Connected! You are {}", seat);
                self.game_state.assign_seat(seat);
                self.connected = true;
            }

            Packet::GameFull { reason } => {
                error!("Connection refused: {}", reason);
                self.seat_refused = true;
            }

            Packet::MoveResult { accepted } => {
                if accepted {
                    info!("Move accepted");
                } else {
                    // The click buffer was already cleared on submission; the
                    // user simply re-initiates.
                    warn!("Move rejected by server");
                    println!("Move rejected: not your turn, or not a free adjacent edge.");
                }
            }

            Packet::Edges { encoded } => self.game_state.apply_edges(&encoded),
            Packet::Squares { owners } => self.game_state.apply_squares(owners),
            Packet::CurrentTurn { seat } => self.game_state.apply_turn(seat),
            Packet::LastWinner { winner } => self.game_state.apply_winner(winner),

            _ => {
                warn!("Unexpected packet type");
            }
        }
    }

    async fn submit_move(
        &mut self,
        from: Point,
        to: Point,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let seat = match self.game_state.seat() {
            Some(seat) => seat,
            None => {
                warn!("No seat assigned yet, move not sent");
                return Ok(());
            }
        };

        let packet = Packet::Move { seat, from, to };
        self.send_packet(&packet).await?;
        Ok(())
    }

    fn handle_input_line(&mut self, line: &str) -> Option<(Point, Point)> {
        let point = match parse_point(line) {
            Some(point) => point,
            None => {
                warn!("Could not parse {:?} as a grid point (use x,y)", line);
                return None;
            }
        };
        self.click_buffer.push(point)
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.connect().await?;

        let mut poll_interval = interval(Duration::from_millis(self.poll_interval_ms));
        let mut buffer = [0u8; 2048];
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            tokio::select! {
                result = self.socket.recv_from(&mut buffer) => {
                    match result {
                        Ok((len, _)) => {
                            if let Ok(packet) = deserialize::<Packet>(&buffer[0..len]) {
                                self.handle_packet(packet);

                                if self.seat_refused {
                                    return Err("both seats are taken".into());
                                }
                                if self.game_state.take_dirty() {
                                    self.renderer.render(&self.game_state, self.click_buffer.pending());
                                }
                            } else {
                                warn!("Failed to deserialize packet from server");
                            }
                        },
                        Err(e) => error!("Error receiving packet: {}", e),
                    }
                },

                _ = poll_interval.tick() => {
                    if self.connected {
                        self.poll_state().await;
                    }
                },

                line = lines.next_line() => {
                    match line {
                        Ok(Some(line)) => {
                            if let Some((from, to)) = self.handle_input_line(&line) {
                                if let Err(e) = self.submit_move(from, to).await {
                                    error!("Error sending move: {}", e);
                                }
                            } else {
                                self.renderer.render(&self.game_state, self.click_buffer.pending());
                            }
                        }
                        Ok(None) => {
                            info!("Input closed, exiting");
                            break;
                        }
                        Err(e) => {
                            error!("Error reading input: {}", e);
                            break;
                        }
                    }
                },

                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl+C, shutting down");
                    break;
                },
            }
        }

        Ok(())
    }
}
