//! Coach cue dispatcher background task

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    services::{CueSink, VoicePreference},
    session::Cue,
};

/// A cue tagged with the session that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueEvent {
    pub session_id: Uuid,
    pub cue: Cue,
}

pub type CueSender = mpsc::UnboundedSender<CueEvent>;
pub type CueReceiver = mpsc::UnboundedReceiver<CueEvent>;

/// Create the channel session timers publish cues into
pub fn cue_channel() -> (CueSender, CueReceiver) {
    mpsc::unbounded_channel()
}

/// Hand cues to `sink` until every sender is gone.
///
/// Sink failures are logged and swallowed.
pub async fn cue_dispatcher_task(
    mut cue_rx: CueReceiver,
    sink: Arc<dyn CueSink>,
    voice: VoicePreference,
) {
    info!("Starting cue dispatcher task (voice: {:?})", voice);

    while let Some(event) = cue_rx.recv().await {
        if !voice.is_enabled() {
            continue;
        }

        if let Err(e) = sink.deliver(voice, &event.cue).await {
            warn!("Cue delivery failed for session {}: {}", event.session_id, e);
        }
    }

    debug!("Cue channel closed, dispatcher exiting");
}
