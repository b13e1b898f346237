//! Room actor: an isolated task that owns one room and its game.
//!
//! Every mutation to a room — player traffic, timers, sweeps — arrives
//! as a command on the actor's channel and is processed one at a time,
//! so no two steps for the same room ever interleave. Timers are
//! messages the actor sends itself with a delay; each carries the
//! session generation observed when it was scheduled and is dropped on
//! delivery if the phase has moved on.

use std::collections::HashMap;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use chameleon_engine::{ClueAdvance, EngineError, GameSession, Seat, bots};
use chameleon_protocol::{
    Action, ConnId, Notification, Phase, PlayerId, Recipient, RoomCode, RoomStatus,
};
use chameleon_room::Room;

use crate::error::ServerError;
use crate::pacing::Pacing;

/// Channel for delivering notifications to one connection.
pub type NotificationSender = mpsc::UnboundedSender<Notification>;

/// Command channel depth per room.
const CHANNEL_SIZE: usize = 64;

/// Chat lines longer than this are cut before the relay.
const CHAT_MAX_CHARS: usize = 200;

// ---------------------------------------------------------------------------
// Timers
// ---------------------------------------------------------------------------

/// A scheduled event. Turn-scoped kinds also carry the turn index,
/// because the generation does not change between turns within the
/// clue phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerKind {
    RoleRevealOver,
    SecretReveal,
    TurnLimit { turn_index: usize },
    BotClue { player: PlayerId, turn_index: usize },
    DiscussionOver,
    BotVote { player: PlayerId },
    VoteWindow,
    BotGuess { player: PlayerId },
    GuessWindow,
}

// ---------------------------------------------------------------------------
// Commands and handle
// ---------------------------------------------------------------------------

pub(crate) enum RoomCommand {
    Join {
        conn: ConnId,
        name: String,
        sender: NotificationSender,
        reply: oneshot::Sender<Result<(), ServerError>>,
    },
    /// The connection's transport dropped; the seat enters grace.
    Disconnected { conn: ConnId },
    /// Any in-room action. Failures go back to the sender as a private
    /// error notification.
    Act { conn: ConnId, action: Action },
    Timer { generation: u64, kind: TimerKind },
    /// Periodic cleanup. Replies whether the room should be dropped.
    Sweep { reply: oneshot::Sender<bool> },
    Shutdown,
}

/// Handle to a running room actor. Cheap to clone.
#[derive(Clone)]
pub struct RoomHandle {
    code: RoomCode,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub async fn join(
        &self,
        conn: ConnId,
        name: String,
        sender: NotificationSender,
    ) -> Result<(), ServerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Join {
                conn,
                name,
                sender,
                reply: reply_tx,
            })
            .await
            .map_err(|_| ServerError::Unavailable(self.code.clone()))?;
        reply_rx
            .await
            .map_err(|_| ServerError::Unavailable(self.code.clone()))?
    }

    pub async fn act(&self, conn: ConnId, action: Action) -> Result<(), ServerError> {
        self.sender
            .send(RoomCommand::Act { conn, action })
            .await
            .map_err(|_| ServerError::Unavailable(self.code.clone()))
    }

    pub async fn disconnected(&self, conn: ConnId) {
        let _ = self.sender.send(RoomCommand::Disconnected { conn }).await;
    }

    /// Runs a cleanup pass. `Ok(true)` means the room is done and
    /// should be removed from the registry.
    pub async fn sweep(&self) -> Result<bool, ServerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RoomCommand::Sweep { reply: reply_tx })
            .await
            .map_err(|_| ServerError::Unavailable(self.code.clone()))?;
        reply_rx
            .await
            .map_err(|_| ServerError::Unavailable(self.code.clone()))
    }

    pub async fn shutdown(&self) {
        let _ = self.sender.send(RoomCommand::Shutdown).await;
    }
}

/// Spawns a room actor with its host already seated and returns the
/// handle. The host receives the room-created notification.
pub(crate) fn spawn_room(
    code: RoomCode,
    host_conn: ConnId,
    host_name: &str,
    host_sender: NotificationSender,
    pacing: Pacing,
) -> RoomHandle {
    let (tx, rx) = mpsc::channel(CHANNEL_SIZE);
    let mut rng = StdRng::from_os_rng();
    let room = Room::new(code.clone(), host_conn, host_name, &mut rng);

    let mut actor = RoomActor {
        room,
        game: None,
        senders: HashMap::new(),
        pacing,
        rng,
        self_tx: tx.clone(),
        receiver: rx,
        closed: false,
    };
    if let Some(host) = actor.room.host() {
        let notify = Notification::RoomCreated {
            code: code.clone(),
            player: host.id,
            room: actor.room.snapshot(),
        };
        actor.senders.insert(host.id, host_sender);
        actor.send_to(host.id, notify);
    }
    tokio::spawn(actor.run());

    RoomHandle { code, sender: tx }
}

// ---------------------------------------------------------------------------
// The actor
// ---------------------------------------------------------------------------

struct RoomActor {
    room: Room,
    game: Option<GameSession>,
    senders: HashMap<PlayerId, NotificationSender>,
    pacing: Pacing,
    rng: StdRng,
    self_tx: mpsc::Sender<RoomCommand>,
    receiver: mpsc::Receiver<RoomCommand>,
    /// Set when the last human leaves; the loop exits after the
    /// current command.
    closed: bool,
}

impl RoomActor {
    async fn run(mut self) {
        info!(room = %self.room.code(), "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::Join {
                    conn,
                    name,
                    sender,
                    reply,
                } => {
                    let result = self.handle_join(conn, &name, sender);
                    let _ = reply.send(result);
                }
                RoomCommand::Disconnected { conn } => self.handle_disconnected(&conn),
                RoomCommand::Act { conn, action } => {
                    if let Err(err) = self.handle_action(&conn, action) {
                        self.send_error(&conn, &err);
                    }
                }
                RoomCommand::Timer { generation, kind } => self.handle_timer(generation, kind),
                RoomCommand::Sweep { reply } => {
                    let delete = self.handle_sweep();
                    let _ = reply.send(delete);
                    if delete {
                        break;
                    }
                }
                RoomCommand::Shutdown => break,
            }
            if self.closed {
                break;
            }
        }

        info!(room = %self.room.code(), "room actor stopped");
    }

    // -- Membership ----------------------------------------------------

    fn handle_join(
        &mut self,
        conn: ConnId,
        name: &str,
        sender: NotificationSender,
    ) -> Result<(), ServerError> {
        let outcome = self.room.join(conn, name, &mut self.rng)?;
        self.senders.insert(outcome.player, sender);

        let summary = self
            .room
            .player(outcome.player)
            .map(|p| p.summary())
            .ok_or(ServerError::NotInRoom)?;
        self.dispatch(
            Recipient::All,
            Notification::PlayerJoined {
                player: summary,
                reconnected: outcome.reconnected,
                room: self.room.snapshot(),
            },
        );

        // A returning player lands mid-game blind; give them the full
        // picture straight away.
        if outcome.reconnected {
            let view = self.game.as_ref().map(|g| g.view_for(outcome.player));
            self.send_to(
                outcome.player,
                Notification::State {
                    room: self.room.snapshot(),
                    game: view,
                },
            );
        }
        Ok(())
    }

    fn handle_disconnected(&mut self, conn: &ConnId) {
        let Ok(player) = self.room.mark_disconnected(conn) else {
            return;
        };
        self.senders.remove(&player);
        self.dispatch(
            Recipient::All,
            Notification::PlayerDisconnected {
                player,
                room: self.room.snapshot(),
            },
        );
        // The game, if any, keeps moving; the turn-limit fallback
        // covers the absent seat.
    }

    fn handle_leave(&mut self, conn: &ConnId) -> Result<(), ServerError> {
        let report = self.room.leave(conn)?;
        self.senders.remove(&report.player);
        self.dispatch(
            Recipient::All,
            Notification::PlayerLeft {
                player: report.player,
                room: self.room.snapshot(),
            },
        );
        if report.delete_room {
            info!(room = %self.room.code(), "last human left, closing room");
            self.closed = true;
        }
        Ok(())
    }

    fn handle_sweep(&mut self) -> bool {
        let report = self.room.sweep_disconnected(self.pacing.disconnect_grace);
        for player in &report.removed {
            self.senders.remove(player);
            self.dispatch(
                Recipient::All,
                Notification::PlayerLeft {
                    player: *player,
                    room: self.room.snapshot(),
                },
            );
        }
        // A room with no human seats left (present or in grace) is
        // done, as is an idle room nobody has started in an hour.
        let stale =
            self.room.status() != RoomStatus::Playing && self.room.age() >= self.pacing.stale_room_age;
        report.delete_room || stale || self.room.players().iter().all(|p| p.is_bot)
    }

    // -- Actions -------------------------------------------------------

    fn handle_action(&mut self, conn: &ConnId, action: Action) -> Result<(), ServerError> {
        match action {
            // Room creation and joining are routed by the registry
            // before a handle exists; they never arrive here.
            Action::CreateRoom { .. } | Action::JoinRoom { .. } => {
                warn!(room = %self.room.code(), "misrouted lobby action");
                Ok(())
            }

            Action::AddBot { .. } => {
                self.require_host(conn)?;
                self.room.add_bot(&mut self.rng)?;
                self.broadcast_room_update();
                Ok(())
            }
            Action::RemoveBot { player, .. } => {
                self.require_host(conn)?;
                self.room.remove_bot(player)?;
                self.broadcast_room_update();
                Ok(())
            }
            Action::ToggleReady { .. } => {
                self.room.toggle_ready(conn)?;
                self.broadcast_room_update();
                Ok(())
            }
            Action::UpdateConfig { patch, .. } => {
                self.require_host(conn)?;
                self.room.update_config(&patch)?;
                self.broadcast_room_update();
                Ok(())
            }
            Action::StartGame { .. } => {
                self.require_host(conn)?;
                self.room.can_start()?;
                self.start_game();
                Ok(())
            }

            Action::SubmitClue { word, .. } => {
                let player = self.player_for(conn)?;
                let game = self.game.as_mut().ok_or(EngineError::NoSuchSession)?;
                let advance = game.submit_clue(player, &word)?;
                let logged = game.clues().last().cloned();
                if let Some(entry) = logged {
                    self.dispatch(
                        Recipient::All,
                        Notification::ClueSubmitted {
                            player: entry.player,
                            word: entry.word,
                        },
                    );
                }
                self.after_clue_step(advance);
                Ok(())
            }
            Action::SubmitVote { target, .. } => {
                let player = self.player_for(conn)?;
                let game = self.game.as_mut().ok_or(EngineError::NoSuchSession)?;
                let progress = game.submit_vote(player, target)?;
                self.dispatch(
                    Recipient::All,
                    Notification::PlayerVoted {
                        player,
                        votes: progress.cast,
                        total: progress.total,
                    },
                );
                if progress.complete {
                    self.reveal_votes();
                }
                Ok(())
            }
            Action::SubmitGuess { word, .. } => {
                let player = self.player_for(conn)?;
                let game = self.game.as_mut().ok_or(EngineError::NoSuchSession)?;
                let reveal = game.submit_guess(player, &word)?;
                self.dispatch(
                    Recipient::All,
                    Notification::GuessResult {
                        correct: reveal.correct,
                        guess: reveal.guess.unwrap_or_default(),
                        secret_word: reveal.secret_word,
                    },
                );
                self.finish_round();
                Ok(())
            }
            Action::NextRound { .. } => {
                self.require_host(conn)?;
                let seats = self.seats_from_room();
                let game = self.game.as_mut().ok_or(EngineError::NoSuchSession)?;
                let round = game.next_round(seats, &mut self.rng)?;
                self.dispatch(Recipient::All, Notification::NewRound { round });
                self.send_roles();
                self.schedule(TimerKind::RoleRevealOver, self.pacing.role_reveal);
                Ok(())
            }
            Action::EndGame { .. } => {
                self.require_host(conn)?;
                self.end_game()
            }

            Action::SendChat { message, .. } => {
                let player = self.player_for(conn)?;
                let name = self
                    .room
                    .player(player)
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                let message: String = message.chars().take(CHAT_MAX_CHARS).collect();
                self.dispatch(
                    Recipient::All,
                    Notification::ChatMessage {
                        player,
                        name,
                        message,
                    },
                );
                Ok(())
            }
            Action::LeaveRoom { .. } => self.handle_leave(conn),
            Action::GetState { .. } => {
                let player = self.player_for(conn)?;
                let view = self.game.as_ref().map(|g| g.view_for(player));
                self.send_to(
                    player,
                    Notification::State {
                        room: self.room.snapshot(),
                        game: view,
                    },
                );
                Ok(())
            }
        }
    }

    // -- Game lifecycle ------------------------------------------------

    fn start_game(&mut self) {
        let seats = self.seats_from_room();
        let game = GameSession::new(seats, self.room.config().clone(), &mut self.rng);
        self.room.set_status(RoomStatus::Playing);
        self.game = Some(game);

        self.dispatch(Recipient::All, Notification::GameStarted { round: 1 });
        self.broadcast_room_update();
        self.send_roles();
        self.schedule(TimerKind::RoleRevealOver, self.pacing.role_reveal);
    }

    fn end_game(&mut self) -> Result<(), ServerError> {
        let game = self.game.take().ok_or(EngineError::NoSuchSession)?;
        self.room.apply_scores(game.scores());
        self.room.reset_after_game();
        self.dispatch(
            Recipient::All,
            Notification::GameEnded {
                scores: game.scores().clone(),
                rounds: game.round(),
                room: self.room.snapshot(),
            },
        );
        Ok(())
    }

    /// Private role notifications at the top of a round.
    fn send_roles(&self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let outsider = game.outsider();
        for seat in game.seats() {
            self.send_to(
                seat.id,
                Notification::RoleAssigned {
                    outsider: seat.id == outsider,
                },
            );
        }
    }

    fn after_clue_step(&mut self, advance: ClueAdvance) {
        match advance {
            ClueAdvance::NextTurn(next) => {
                let index = self.game.as_ref().map(|g| g.turn_index()).unwrap_or(0);
                self.dispatch(
                    Recipient::All,
                    Notification::NextTurn {
                        player: next,
                        index,
                    },
                );
                self.schedule_turn(next);
            }
            ClueAdvance::DiscussionStarted => {
                let (clues, secs) = match self.game.as_ref() {
                    Some(g) => (g.clues().to_vec(), g.config().discussion_secs),
                    None => return,
                };
                self.dispatch(
                    Recipient::All,
                    Notification::DiscussionStarted { clues, secs },
                );
                self.schedule(TimerKind::DiscussionOver, Duration::from_secs(secs));
            }
        }
    }

    /// Arms the fallback timer for a turn, plus a thinking delay when
    /// the seat is a bot.
    fn schedule_turn(&mut self, player: PlayerId) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let turn_index = game.turn_index();
        let turn_secs = game.config().turn_secs;
        let is_bot = game.seat(player).is_some_and(|s| s.is_bot);

        self.schedule(
            TimerKind::TurnLimit { turn_index },
            Duration::from_secs(turn_secs),
        );
        if is_bot {
            let delay = self.think_delay();
            self.schedule(TimerKind::BotClue { player, turn_index }, delay);
        }
    }

    fn reveal_votes(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        let Ok(reveal) = game.resolve_votes() else {
            return;
        };
        let outsider_is_bot = game.seat(reveal.outsider).is_some_and(|s| s.is_bot);
        self.dispatch(
            Recipient::All,
            Notification::VotesRevealed {
                votes: reveal.votes,
                vote_counts: reveal.counts,
                accused: reveal.accused,
                tie: reveal.tie,
                caught: reveal.caught,
                outsider: reveal.outsider,
            },
        );
        if reveal.caught {
            if outsider_is_bot {
                let delay = self.think_delay();
                self.schedule(
                    TimerKind::BotGuess {
                        player: reveal.outsider,
                    },
                    delay,
                );
            } else {
                self.schedule(TimerKind::GuessWindow, self.pacing.guess_window);
            }
        } else {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let Some(resolution) = game.resolution().cloned() else {
            return;
        };
        self.dispatch(
            Recipient::All,
            Notification::RoundResults {
                resolution,
                scores: game.scores().clone(),
                round: game.round(),
            },
        );
        // The room sits on the results screen until the host advances
        // or ends the game.
    }

    // -- Timers --------------------------------------------------------

    fn handle_timer(&mut self, generation: u64, kind: TimerKind) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.generation() != generation {
            debug!(room = %self.room.code(), ?kind, "stale timer dropped");
            return;
        }

        match kind {
            TimerKind::RoleRevealOver => {
                let Ok(dice) = game.begin_dice_roll() else {
                    return;
                };
                let topic = game.topic().view();
                self.dispatch(Recipient::All, Notification::DiceRolled { dice, topic });
                self.schedule(TimerKind::SecretReveal, self.pacing.secret_reveal);
            }
            TimerKind::SecretReveal => {
                let Ok(first) = game.begin_clue_giving() else {
                    return;
                };
                let outsider = game.outsider();
                let word = game.secret().to_string();
                let index = game.dice().index;
                let turn_order = game.turn_order().to_vec();
                self.dispatch(
                    Recipient::AllExcept(outsider),
                    Notification::SecretRevealed { word, index },
                );
                self.dispatch(
                    Recipient::All,
                    Notification::CluePhaseStarted {
                        turn_order,
                        current: first,
                    },
                );
                self.schedule_turn(first);
            }
            TimerKind::TurnLimit { turn_index } => {
                if game.turn_index() != turn_index {
                    return;
                }
                let Some(player) = game.current_player() else {
                    return;
                };
                let Ok(advance) = game.pass_turn(player) else {
                    return;
                };
                self.dispatch(Recipient::All, Notification::TurnPassed { player });
                self.after_clue_step(advance);
            }
            TimerKind::BotClue { player, turn_index } => {
                if game.turn_index() != turn_index || game.current_player() != Some(player) {
                    return;
                }
                let word = bots::bot_clue(game, player, &mut self.rng);
                // A rejected bot clue falls back to passing so the
                // round never stalls on a seat nobody controls.
                let advance = match game.submit_clue(player, &word) {
                    Ok(advance) => {
                        self.dispatch(
                            Recipient::All,
                            Notification::ClueSubmitted { player, word },
                        );
                        advance
                    }
                    Err(err) => {
                        warn!(room = %self.room.code(), %player, %err, "bot clue rejected");
                        let Some(advance) =
                            self.game.as_mut().and_then(|g| g.pass_turn(player).ok())
                        else {
                            return;
                        };
                        self.dispatch(Recipient::All, Notification::TurnPassed { player });
                        advance
                    }
                };
                self.after_clue_step(advance);
            }
            TimerKind::DiscussionOver => {
                if game.begin_voting().is_err() {
                    return;
                }
                let bots: Vec<PlayerId> = game
                    .seats()
                    .iter()
                    .filter(|s| s.is_bot)
                    .map(|s| s.id)
                    .collect();
                self.dispatch(Recipient::All, Notification::VotingStarted);
                for player in bots {
                    let delay = self.think_delay();
                    self.schedule(TimerKind::BotVote { player }, delay);
                }
                self.schedule(TimerKind::VoteWindow, self.pacing.vote_window);
            }
            TimerKind::BotVote { player } => {
                if game.phase() != Phase::Voting || game.has_voted(player) {
                    return;
                }
                let Some(target) = bots::bot_vote(game, player, &mut self.rng) else {
                    return;
                };
                let Ok(progress) = game.submit_vote(player, target) else {
                    return;
                };
                self.dispatch(
                    Recipient::All,
                    Notification::PlayerVoted {
                        player,
                        votes: progress.cast,
                        total: progress.total,
                    },
                );
                if progress.complete {
                    self.reveal_votes();
                }
            }
            TimerKind::VoteWindow => {
                // Whatever ballots are in, count them.
                self.reveal_votes();
            }
            TimerKind::BotGuess { player } => {
                let word = bots::bot_guess(game, player, &mut self.rng);
                let Ok(reveal) = game.submit_guess(player, &word) else {
                    return;
                };
                self.dispatch(
                    Recipient::All,
                    Notification::GuessResult {
                        correct: reveal.correct,
                        guess: reveal.guess.unwrap_or_default(),
                        secret_word: reveal.secret_word,
                    },
                );
                self.finish_round();
            }
            TimerKind::GuessWindow => {
                // The outsider never answered; that counts as a miss.
                if game.forfeit_guess().is_err() {
                    return;
                }
                self.finish_round();
            }
        }
    }

    fn schedule(&self, kind: TimerKind, delay: Duration) {
        let generation = self.game.as_ref().map(|g| g.generation()).unwrap_or(0);
        let tx = self.self_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(RoomCommand::Timer { generation, kind }).await;
        });
    }

    fn think_delay(&mut self) -> Duration {
        let min = self.pacing.bot_think_min.as_millis() as u64;
        let max = self.pacing.bot_think_max.as_millis() as u64;
        if max <= min {
            return Duration::from_millis(min);
        }
        Duration::from_millis(self.rng.random_range(min..=max))
    }

    // -- Plumbing ------------------------------------------------------

    fn seats_from_room(&self) -> Vec<Seat> {
        self.room
            .players()
            .iter()
            .map(|p| Seat {
                id: p.id,
                is_bot: p.is_bot,
                archetype: p.archetype,
            })
            .collect()
    }

    fn player_for(&self, conn: &ConnId) -> Result<PlayerId, ServerError> {
        self.room
            .player_by_conn(conn)
            .map(|p| p.id)
            .ok_or(ServerError::NotInRoom)
    }

    fn require_host(&self, conn: &ConnId) -> Result<(), ServerError> {
        if self.room.is_host_conn(conn) {
            Ok(())
        } else {
            Err(ServerError::NotHost)
        }
    }

    fn broadcast_room_update(&self) {
        self.dispatch(
            Recipient::All,
            Notification::RoomUpdate {
                room: self.room.snapshot(),
            },
        );
    }

    fn dispatch(&self, recipient: Recipient, notification: Notification) {
        match recipient {
            Recipient::All => {
                for (&player, _) in &self.senders {
                    self.send_to(player, notification.clone());
                }
            }
            Recipient::Player(player) => self.send_to(player, notification),
            Recipient::AllExcept(excluded) => {
                for (&player, _) in &self.senders {
                    if player != excluded {
                        self.send_to(player, notification.clone());
                    }
                }
            }
        }
    }

    /// Silently drops when the receiver is gone; disconnection is
    /// handled by its own path.
    fn send_to(&self, player: PlayerId, notification: Notification) {
        if let Some(sender) = self.senders.get(&player) {
            let _ = sender.send(notification);
        }
    }

    fn send_error(&self, conn: &ConnId, err: &ServerError) {
        debug!(room = %self.room.code(), %err, "request rejected");
        if let Ok(player) = self.player_for(conn) {
            self.send_to(
                player,
                Notification::Error {
                    code: err.code(),
                    message: err.to_string(),
                },
            );
        }
    }
}
