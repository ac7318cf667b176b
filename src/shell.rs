//! Terminal shell: stdin/stdout REPL around a consultation session.
//!
//! Renders bot turns as they land in the conversation log, shows a typing
//! indicator while the bot composes, and forwards every other line to
//! [`ConsultationSession::submit`].

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Local;
use futures::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;
use uuid::Uuid;

use crate::consultation::{ConsultationSession, Speaker, SubmitOutcome, Turn};
use crate::error::Result;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Progress,
    Profile,
    Status,
    Answer(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => Self::Quit,
            "/progress" => Self::Progress,
            "/profile" => Self::Profile,
            "/status" => Self::Status,
            _ => Self::Answer(line),
        }
    }
}

/// Format a turn the way the shell prints it.
pub fn render_turn(turn: &Turn) -> String {
    let time = turn.timestamp.with_timezone(&Local).format("%H:%M");
    let who = match turn.speaker {
        Speaker::Bot => "🤖",
        Speaker::User => "🙂",
    };
    format!("{who} [{time}]\n{}", turn.text)
}

/// Run the REPL on stdin until EOF or `/quit`.
pub async fn run(session: Arc<ConsultationSession>) -> Result<()> {
    run_with(session, BufReader::new(tokio::io::stdin())).await
}

/// Run the REPL over any line source until EOF or `/quit`.
pub async fn run_with<R>(session: Arc<ConsultationSession>, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut indicator = TypingIndicator::default();

    // Subscribe before taking the backlog so no turn slips between the two.
    let mut turns = Box::pin(session.log().stream());
    let mut composing = session.composing_updates();
    let mut backlog: HashSet<Uuid> = HashSet::new();
    for turn in session.log().all().await {
        backlog.insert(turn.id);
        print_turn(&turn);
    }

    if *composing.borrow_and_update() {
        indicator.show();
    } else {
        prompt(&session).await;
    }

    loop {
        tokio::select! {
            biased;
            Some(turn) = turns.next() => {
                if backlog.remove(&turn.id) {
                    continue;
                }
                if turn.speaker == Speaker::Bot {
                    indicator.clear();
                    print_turn(&turn);
                }
            }
            changed = composing.changed() => {
                if changed.is_err() {
                    debug!("Composing flag closed");
                    break;
                }
                if *composing.borrow_and_update() {
                    indicator.show();
                } else {
                    indicator.clear();
                    prompt(&session).await;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break; // EOF
                };

                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Progress => {
                        let progress = session.progress().await;
                        eprintln!(
                            "Progress: {progress} ({:.0}%), stage: {}",
                            progress.fraction() * 100.0,
                            session.stage().await
                        );
                    }
                    Command::Profile => {
                        println!("\n{}\n", session.profile().await.summary_section())
                    }
                    Command::Status => match serde_json::to_string_pretty(&session.status().await) {
                        Ok(json) => println!("{json}"),
                        Err(e) => tracing::warn!("Failed to serialize status: {}", e),
                    },
                    Command::Answer(text) => match session.submit(text).await? {
                        SubmitOutcome::Accepted { stage } => {
                            // The composing flag takes over from here.
                            debug!(%stage, "Answer accepted");
                            continue;
                        }
                        SubmitOutcome::Blank | SubmitOutcome::Busy => {}
                    },
                }

                if !session.is_composing() {
                    prompt(&session).await;
                }
            }
        }
    }

    Ok(())
}

/// Print a bot turn. The user already sees what they typed.
fn print_turn(turn: &Turn) {
    if turn.speaker == Speaker::Bot {
        println!("\n{}\n", render_turn(turn));
    }
}

async fn prompt(session: &ConsultationSession) {
    eprint!("[{}] > ", session.progress().await);
}

/// "typing…" line on stderr, shown while the bot composes.
#[derive(Debug, Default)]
struct TypingIndicator {
    shown: bool,
}

impl TypingIndicator {
    fn show(&mut self) {
        if !self.shown {
            eprint!("🤖 typing…");
            self.shown = true;
        }
    }

    fn clear(&mut self) {
        if self.shown {
            eprint!("\r            \r");
            self.shown = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConsultConfig;
    use crate::consultation::Stage;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse(" /exit "), Command::Quit);
        assert_eq!(Command::parse("/progress"), Command::Progress);
        assert_eq!(Command::parse("/profile"), Command::Profile);
        assert_eq!(Command::parse("/status"), Command::Status);
        assert_eq!(Command::parse("Ada"), Command::Answer("Ada"));
        assert_eq!(Command::parse("  "), Command::Answer("  "));
    }

    #[test]
    fn render_includes_text_and_speaker() {
        let rendered = render_turn(&Turn::bot("Hello there"));
        assert!(rendered.starts_with("🤖 ["));
        assert!(rendered.ends_with("\nHello there"));
        assert!(render_turn(&Turn::user("hi")).starts_with("🙂"));
    }

    #[test]
    fn indicator_toggles_once() {
        let mut indicator = TypingIndicator::default();
        indicator.show();
        indicator.show();
        assert!(indicator.shown);
        indicator.clear();
        assert!(!indicator.shown);
    }

    #[tokio::test(start_paused = true)]
    async fn quit_stops_before_welcome_lands() {
        let session = ConsultationSession::start(ConsultConfig::default());
        run_with(Arc::clone(&session), "/status\n/quit\nAda\n".as_bytes())
            .await
            .unwrap();

        assert!(session.is_composing());
        assert!(session.log().is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn answers_are_submitted_until_eof() {
        let session = ConsultationSession::start(ConsultConfig::default());
        session.settled().await;

        run_with(Arc::clone(&session), "  \nAda\n".as_bytes())
            .await
            .unwrap();

        session.settled().await;
        let turns = session.log().all().await;
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].speaker, Speaker::User);
        assert_eq!(turns[1].text, "Ada");
        assert_eq!(session.stage().await, Stage::Industry);
    }
}
