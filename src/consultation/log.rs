//! Conversation log: append-only turn history with broadcast to renderers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, warn};
use uuid::Uuid;

/// Default broadcast channel capacity.
const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Bot,
    User,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bot => write!(f, "bot"),
            Self::User => write!(f, "user"),
        }
    }
}

/// One message in the conversation. Never changed once logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Speaker::Bot, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }
}

/// Ordered record of every turn, with live fan-out to subscribers.
pub struct ConversationLog {
    turns: RwLock<Vec<Turn>>,
    tx: broadcast::Sender<Turn>,
}

impl ConversationLog {
    pub fn new() -> Arc<Self> {
        let (tx, _rx) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        Arc::new(Self {
            turns: RwLock::new(Vec::new()),
            tx,
        })
    }

    /// Subscribe to turns appended from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Turn> {
        self.tx.subscribe()
    }

    /// Turns appended from now on, as a stream. Ends when the log is dropped.
    pub fn stream(&self) -> impl Stream<Item = Turn> + Send + use<> {
        futures::stream::unfold(self.subscribe(), |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(turn) => return Some((turn, rx)),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Turn stream lagged, skipping turns");
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
    }

    /// Append a turn and broadcast it to all subscribers.
    pub async fn append(&self, turn: Turn) {
        debug!(speaker = %turn.speaker, chars = turn.text.len(), "Turn appended");
        {
            let mut turns = self.turns.write().await;
            turns.push(turn.clone());
        }
        // Broadcast; ok if nobody is rendering
        let _ = self.tx.send(turn);
    }

    /// Every turn so far, in insertion order.
    pub async fn all(&self) -> Vec<Turn> {
        self.turns.read().await.clone()
    }

    /// Turns from position `start` onwards.
    pub async fn since(&self, start: usize) -> Vec<Turn> {
        let turns = self.turns.read().await;
        turns.get(start..).map(<[Turn]>::to_vec).unwrap_or_default()
    }

    pub async fn len(&self) -> usize {
        self.turns.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.turns.read().await.is_empty()
    }
}
