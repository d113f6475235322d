//! Session timer background task
//!
//! One task per session owns the [`SessionTimer`]. It ticks once per second,
//! applies pause/resume/quit between ticks and publishes a snapshot after
//! every change.

use std::{sync::Arc, time::Duration};
use chrono::Utc;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::{interval_at, sleep, Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};
use uuid::Uuid;

use super::cue_dispatcher::{CueEvent, CueSender};
use crate::{
    session::{Cue, SessionConfig, SessionError, SessionResult, SessionTimer},
    state::{HistoryStore, SessionRecord, SessionState},
};

const TICK: Duration = Duration::from_secs(1);

/// A session left paused this long is abandoned and its task stops
pub const PAUSED_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Commands applied by the timer task between ticks
#[derive(Debug)]
pub enum SessionCommand {
    Pause(oneshot::Sender<SessionState>),
    Resume(oneshot::Sender<SessionState>),
    Quit(oneshot::Sender<SessionState>),
}

/// Handle to a running session timer task
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: Uuid,
    commands: mpsc::UnboundedSender<SessionCommand>,
    snapshot_rx: watch::Receiver<SessionState>,
}

impl SessionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Latest published snapshot. Still readable after the task has exited.
    pub fn snapshot(&self) -> SessionState {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.snapshot_rx.clone()
    }

    /// True once the session reached `done` or was quit
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }

    pub async fn pause(&self) -> SessionResult<SessionState> {
        self.request(SessionCommand::Pause).await
    }

    pub async fn resume(&self) -> SessionResult<SessionState> {
        self.request(SessionCommand::Resume).await
    }

    /// Stop the session immediately. Returns the final snapshot.
    pub async fn quit(&self) -> SessionResult<SessionState> {
        self.request(SessionCommand::Quit).await
    }

    async fn request<F>(&self, command: F) -> SessionResult<SessionState>
    where
        F: FnOnce(oneshot::Sender<SessionState>) -> SessionCommand,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(command(reply_tx))
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)
    }
}

/// Start a session and spawn its timer task
pub fn spawn_session(
    config: SessionConfig,
    cue_tx: CueSender,
    history: Arc<HistoryStore>,
) -> SessionHandle {
    let id = Uuid::new_v4();
    let (timer, cues) = SessionTimer::start(config);
    publish_cues(&cue_tx, id, cues);

    let (snapshot_tx, snapshot_rx) = watch::channel(timer.snapshot());
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    info!(
        "Starting session {}: {} exercises x {} rounds, {}s work",
        id,
        timer.config().exercises().len(),
        timer.config().rounds(),
        timer.config().work_seconds()
    );

    tokio::spawn(session_timer_task(id, timer, command_rx, snapshot_tx, cue_tx, history));

    SessionHandle {
        id,
        commands: command_tx,
        snapshot_rx,
    }
}

/// Background task driving one session
async fn session_timer_task(
    id: Uuid,
    mut timer: SessionTimer,
    mut commands: mpsc::UnboundedReceiver<SessionCommand>,
    snapshot_tx: watch::Sender<SessionState>,
    cue_tx: CueSender,
    history: Arc<HistoryStore>,
) {
    let mut interval = interval_at(Instant::now() + TICK, TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Only polled while paused; re-armed on every pause
    let abandoned = sleep(PAUSED_SESSION_TIMEOUT);
    tokio::pin!(abandoned);

    loop {
        tokio::select! {
            // Tick - only while running
            _ = interval.tick(), if !timer.is_paused() => {
                let outcome = timer.tick();
                publish_cues(&cue_tx, id, outcome.cues);

                if let Some(phase) = outcome.entered {
                    debug!(
                        "Session {} entered {:?} (exercise {}, round {})",
                        id, phase, timer.exercise_index(), timer.round()
                    );
                }

                if timer.phase().is_done() {
                    info!("Session {} complete after {}s", id, timer.elapsed_seconds());
                    if let Err(e) = history.record(SessionRecord::from_timer(id, &timer, Utc::now())) {
                        error!("Failed to record session {}: {}", id, e);
                    }
                    snapshot_tx.send_replace(timer.snapshot());
                    break;
                }

                snapshot_tx.send_replace(timer.snapshot());
            }

            _ = &mut abandoned, if timer.is_paused() => {
                info!("Session {} paused for over {:?}, stopping", id, PAUSED_SESSION_TIMEOUT);
                break;
            }

            command = commands.recv() => {
                match command {
                    Some(SessionCommand::Pause(reply)) => {
                        timer.pause();
                        abandoned.as_mut().reset(Instant::now() + PAUSED_SESSION_TIMEOUT);
                        info!("Session {} paused", id);
                        reply_with(&snapshot_tx, reply, timer.snapshot());
                    }
                    Some(SessionCommand::Resume(reply)) => {
                        let was_paused = timer.is_paused();
                        timer.resume();
                        // A full second must elapse before the next decrement
                        if was_paused {
                            interval.reset();
                        }
                        info!("Session {} resumed", id);
                        reply_with(&snapshot_tx, reply, timer.snapshot());
                    }
                    Some(SessionCommand::Quit(reply)) => {
                        info!("Session {} quit in {:?} phase", id, timer.phase());
                        let _ = reply.send(timer.snapshot());
                        break;
                    }
                    None => {
                        debug!("All handles to session {} dropped", id);
                        break;
                    }
                }
            }
        }
    }

    debug!("Session {} timer task finished", id);
}

fn reply_with(
    snapshot_tx: &watch::Sender<SessionState>,
    reply: oneshot::Sender<SessionState>,
    snapshot: SessionState,
) {
    snapshot_tx.send_replace(snapshot.clone());
    let _ = reply.send(snapshot);
}

/// Fire-and-forget: a closed cue channel never stalls the timer
fn publish_cues(cue_tx: &CueSender, session_id: Uuid, cues: Vec<Cue>) {
    for cue in cues {
        if cue_tx.send(CueEvent { session_id, cue }).is_err() {
            debug!("Cue channel closed, dropping cues for session {}", session_id);
            return;
        }
    }
}
