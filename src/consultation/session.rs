//! ConsultationSession: gates input on the composing flag and delivers bot
//! replies after their typing delay.
//!
//! Replies go through a single dispatcher task fed by an mpsc queue, so bot
//! turns land in the log in the order they were produced. Once queued, a reply
//! is always delivered; there is no cancellation path.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{debug, info, warn};

use crate::config::ConsultConfig;
use crate::error::SessionError;

use super::log::{ConversationLog, Turn};
use super::profile::BrandProfile;
use super::sequencer::{Pace, StageSequencer};
use super::stage::{Progress, Stage};

/// What happened to a submitted line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Recorded and answered; the conversation is now at `stage`.
    Accepted { stage: Stage },
    /// Empty or whitespace-only input; nothing changed.
    Blank,
    /// The bot is still composing; nothing changed.
    Busy,
}

/// Snapshot of a session for display or export.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationStatus {
    pub stage: Stage,
    pub progress: Progress,
    pub composing: bool,
    pub turns: usize,
    pub profile: BrandProfile,
}

/// A bot reply waiting for its delay to elapse.
#[derive(Debug)]
struct PendingReply {
    text: String,
    delay: Duration,
}

/// One consultation: sequencer, log, composing flag and reply dispatcher.
pub struct ConsultationSession {
    sequencer: Mutex<StageSequencer>,
    log: Arc<ConversationLog>,
    composing: Arc<watch::Sender<bool>>,
    outbox: mpsc::UnboundedSender<PendingReply>,
    config: ConsultConfig,
}

impl ConsultationSession {
    /// Start a session and queue the welcome message.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: ConsultConfig) -> Arc<Self> {
        Self::with_sequencer(config, StageSequencer::new())
    }

    /// Start a session around a prepared sequencer (e.g. one with a seeded
    /// random source).
    pub fn with_sequencer(config: ConsultConfig, sequencer: StageSequencer) -> Arc<Self> {
        let log = ConversationLog::new();
        let (composing, _rx) = watch::channel(false);
        let composing = Arc::new(composing);
        let (outbox, inbox) = mpsc::unbounded_channel();

        let _dispatcher = spawn_dispatcher(inbox, Arc::clone(&log), Arc::clone(&composing));

        let welcome = sequencer.opening();
        let session = Arc::new(Self {
            sequencer: Mutex::new(sequencer),
            log,
            composing,
            outbox,
            config,
        });

        info!(stages = Stage::ALL.len(), "Consultation started");
        if let Err(e) = session.enqueue(welcome, Pace::Prompt) {
            warn!("Failed to queue welcome message: {}", e);
        }
        session
    }

    /// Submit one line of user input.
    ///
    /// Blank input and input arriving while the bot is composing are ignored.
    /// Otherwise the user turn is logged immediately and the bot's answer is
    /// queued behind its typing delay.
    pub async fn submit(&self, text: &str) -> Result<SubmitOutcome, SessionError> {
        if text.trim().is_empty() {
            debug!("Ignoring blank input");
            return Ok(SubmitOutcome::Blank);
        }

        let mut sequencer = self.sequencer.lock().await;
        if self.is_composing() {
            debug!(stage = %sequencer.stage(), "Ignoring input while composing");
            return Ok(SubmitOutcome::Busy);
        }

        self.log.append(Turn::user(text)).await;
        let transition = sequencer.advance(text);
        if transition.from != transition.to {
            info!(from = %transition.from, to = %transition.to, "Consultation stage changed");
        }
        self.enqueue(transition.reply, transition.pace)?;

        Ok(SubmitOutcome::Accepted {
            stage: transition.to,
        })
    }

    /// Wait until no bot reply is pending.
    pub async fn settled(&self) {
        let mut rx = self.composing.subscribe();
        // The sender lives as long as `self`, so this only ends when settled.
        let _ = rx.wait_for(|composing| !*composing).await;
    }

    /// Whether a bot reply is pending.
    pub fn is_composing(&self) -> bool {
        *self.composing.borrow()
    }

    /// Watch the composing flag, e.g. to drive a typing indicator.
    pub fn composing_updates(&self) -> watch::Receiver<bool> {
        self.composing.subscribe()
    }

    pub fn log(&self) -> &Arc<ConversationLog> {
        &self.log
    }

    pub async fn stage(&self) -> Stage {
        self.sequencer.lock().await.stage()
    }

    pub async fn progress(&self) -> Progress {
        self.sequencer.lock().await.progress()
    }

    pub async fn profile(&self) -> BrandProfile {
        self.sequencer.lock().await.profile().clone()
    }

    pub async fn status(&self) -> ConsultationStatus {
        let sequencer = self.sequencer.lock().await;
        ConsultationStatus {
            stage: sequencer.stage(),
            progress: sequencer.progress(),
            composing: self.is_composing(),
            turns: self.log.len().await,
            profile: sequencer.profile().clone(),
        }
    }

    fn enqueue(&self, text: String, pace: Pace) -> Result<(), SessionError> {
        let delay = self.config.delay_for(pace);
        self.composing.send_replace(true);
        self.outbox
            .send(PendingReply { text, delay })
            .map_err(|_| {
                self.composing.send_replace(false);
                SessionError::DispatcherClosed
            })
    }
}

/// Deliver queued replies one at a time, clearing the composing flag after each.
fn spawn_dispatcher(
    mut inbox: mpsc::UnboundedReceiver<PendingReply>,
    log: Arc<ConversationLog>,
    composing: Arc<watch::Sender<bool>>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(pending) = inbox.recv().await {
            tokio::time::sleep(pending.delay).await;
            log.append(Turn::bot(pending.text)).await;
            debug!(delay_ms = pending.delay.as_millis() as u64, "Bot reply delivered");
            composing.send_replace(false);
        }
        debug!("Reply dispatcher stopped");
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::consultation::log::Speaker;
    use crate::consultation::prompts::{FOLLOW_UP_MENU, WELCOME};

    fn session(config: ConsultConfig) -> Arc<ConsultationSession> {
        let sequencer = StageSequencer::with_rng(Box::new(StdRng::seed_from_u64(5)));
        ConsultationSession::with_sequencer(config, sequencer)
    }

    async fn answer(session: &ConsultationSession, text: &str) -> SubmitOutcome {
        let outcome = session.submit(text).await.unwrap();
        session.settled().await;
        outcome
    }

    #[tokio::test(start_paused = true)]
    async fn welcome_is_delivered_after_delay() {
        let session = session(ConsultConfig::default());
        assert!(session.is_composing());
        assert!(session.log().is_empty().await);

        session.settled().await;

        let turns = session.log().all().await;
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].speaker, Speaker::Bot);
        assert_eq!(turns[0].text, WELCOME);
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn input_is_rejected_while_composing() {
        let session = session(ConsultConfig::default());
        assert_eq!(session.submit("Ada").await.unwrap(), SubmitOutcome::Busy);
        assert_eq!(session.stage().await, Stage::Intro);

        session.settled().await;
        assert_eq!(
            session.submit("Ada").await.unwrap(),
            SubmitOutcome::Accepted { stage: Stage::Industry }
        );
        assert_eq!(session.submit("robotics").await.unwrap(), SubmitOutcome::Busy);
        assert_eq!(session.profile().await.industry, "");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_changes_nothing() {
        let session = session(ConsultConfig::default());
        session.settled().await;
        let before = session.status().await;

        for blank in ["", "   ", "\n\t"] {
            assert_eq!(session.submit(blank).await.unwrap(), SubmitOutcome::Blank);
        }

        let after = session.status().await;
        assert_eq!(after.stage, before.stage);
        assert_eq!(after.turns, before.turns);
        assert_eq!(after.profile, before.profile);
        assert!(!session.is_composing());
    }

    #[tokio::test(start_paused = true)]
    async fn user_turn_is_logged_before_reply() {
        let session = session(ConsultConfig::default());
        session.settled().await;

        session.submit("Ada").await.unwrap();
        let turns = session.log().all().await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].speaker, Speaker::User);
        assert_eq!(turns[1].text, "Ada");
        assert!(session.is_composing());

        session.settled().await;
        let turns = session.log().all().await;
        assert_eq!(turns.len(), 3);
        assert!(turns[2].text.starts_with("Nice to meet you, Ada!"));
    }

    #[tokio::test(start_paused = true)]
    async fn reply_waits_for_configured_delay() {
        let session = session(ConsultConfig::default());
        session.settled().await;

        session.submit("Ada").await.unwrap();
        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(session.log().len().await, 2);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(session.log().len().await, 3);
    }

    #[tokio::test]
    async fn immediate_config_still_alternates_turns() {
        let session = session(ConsultConfig::immediate());
        session.settled().await;
        for text in ["Ada", "robotics", "thought leadership"] {
            answer(&session, text).await;
        }
        let speakers: Vec<_> = session
            .log()
            .all()
            .await
            .into_iter()
            .map(|t| t.speaker)
            .collect();
        assert_eq!(
            speakers,
            vec![
                Speaker::Bot,
                Speaker::User,
                Speaker::Bot,
                Speaker::User,
                Speaker::Bot,
                Speaker::User,
                Speaker::Bot,
            ]
        );
        assert_eq!(session.progress().await.to_string(), "4 / 14");
    }

    #[tokio::test(start_paused = true)]
    async fn follow_ups_stay_in_recommendations() {
        let session = session(ConsultConfig::default());
        session.settled().await;
        for text in [
            "Ada", "robotics", "goals", "skills", "values", "audience", "challenges",
            "platforms", "personality", "unique", "articles",
        ] {
            answer(&session, text).await;
        }
        assert_eq!(session.stage().await, Stage::Recommendations);

        let outcome = answer(&session, "tell me more details").await;
        assert_eq!(outcome, SubmitOutcome::Accepted { stage: Stage::Recommendations });
        let last = session.log().all().await.pop().unwrap();
        assert_eq!(last.text, FOLLOW_UP_MENU);

        let outcome = answer(&session, "my Website").await;
        assert_eq!(outcome, SubmitOutcome::Accepted { stage: Stage::Website });
        assert_eq!(session.progress().await.to_string(), "13 / 14");
    }

    #[tokio::test(start_paused = true)]
    async fn status_serializes() {
        let session = session(ConsultConfig::default());
        session.settled().await;
        answer(&session, "Ada").await;

        let json = serde_json::to_value(session.status().await).unwrap();
        assert_eq!(json["stage"], "industry");
        assert_eq!(json["progress"]["index"], 1);
        assert_eq!(json["progress"]["total"], 14);
        assert_eq!(json["composing"], false);
        assert_eq!(json["turns"], 3);
        assert_eq!(json["profile"]["name"], "Ada");
    }
}
