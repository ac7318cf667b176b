//! Stage sequencer: interprets the stage table one answer at a time.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use super::generator::{
    contextual_advice, detailed_website_advice, mentions_any, recommendations_summary,
    website_strategy,
};
use super::profile::{BrandProfile, ProfileStore};
use super::prompts::{self, FALLBACK, FOLLOW_UP_MENU};
use super::stage::{Progress, Stage, Step};

/// How long the bot appears to compose a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Short questions and follow-up answers.
    Prompt,
    /// The full end-of-intake strategy.
    Recommendation,
    /// The website blueprint.
    Website,
}

/// Outcome of feeding one answer to the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Stage,
    pub to: Stage,
    /// Bot message to deliver.
    pub reply: String,
    pub pace: Pace,
}

/// What the user wants after the recommendations are out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpIntent {
    Website,
    MoreDetail,
    Question,
}

impl FollowUpIntent {
    /// First match wins: website, then more detail, then a free-form question.
    pub fn classify(input: &str) -> Self {
        if mentions_any(input, &["website", "site"]) {
            Self::Website
        } else if mentions_any(input, &["more", "detail"]) {
            Self::MoreDetail
        } else {
            Self::Question
        }
    }
}

/// Apply `raw_input` at `stage` and work out the next stage and reply.
///
/// Writes at most one profile field, as named by the stage table.
pub fn advance<R: Rng + ?Sized>(
    stage: Stage,
    raw_input: &str,
    profile: &mut ProfileStore,
    rng: &mut R,
) -> Transition {
    let rule = stage.rule();
    if let Some(field) = rule.field {
        profile.set(field, raw_input);
    }
    let current = profile.get();

    let (to, reply, pace) = match rule.step {
        Step::Prompt(next) => {
            let reply =
                prompts::stage_prompt(next, current).unwrap_or_else(|| FALLBACK.to_string());
            (next, reply, Pace::Prompt)
        }
        Step::Recommend(next) => (
            next,
            recommendations_summary(current, rng),
            Pace::Recommendation,
        ),
        Step::FollowUp => match FollowUpIntent::classify(raw_input) {
            FollowUpIntent::Website => (
                Stage::Website,
                website_strategy(current, rng),
                Pace::Website,
            ),
            FollowUpIntent::MoreDetail => (stage, FOLLOW_UP_MENU.to_string(), Pace::Prompt),
            FollowUpIntent::Question => (
                stage,
                prompts::follow_up_frame(&contextual_advice(current, raw_input)),
                Pace::Prompt,
            ),
        },
        Step::WebsiteDetail => (
            stage,
            prompts::website_detail_frame(&detailed_website_advice(current)),
            Pace::Prompt,
        ),
        Step::Fallback => (stage, FALLBACK.to_string(), Pace::Prompt),
    };

    debug_assert!(stage.can_transition_to(to), "{stage} -> {to}");

    Transition {
        from: stage,
        to,
        reply,
        pace,
    }
}

/// Owns the current stage, the profile and the random source for one
/// consultation.
pub struct StageSequencer {
    stage: Stage,
    profile: ProfileStore,
    rng: Box<dyn RngCore + Send>,
}

impl StageSequencer {
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRng::from_entropy()))
    }

    /// Use a caller-supplied random source, e.g. a seeded one in tests.
    pub fn with_rng(rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            stage: Stage::default(),
            profile: ProfileStore::new(),
            rng,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn profile(&self) -> &BrandProfile {
        self.profile.get()
    }

    pub fn progress(&self) -> Progress {
        Progress::of(self.stage)
    }

    /// The message that opens the conversation at the current stage.
    pub fn opening(&self) -> String {
        prompts::stage_prompt(self.stage, self.profile.get())
            .unwrap_or_else(|| FALLBACK.to_string())
    }

    /// Feed one answer and move to the next stage.
    pub fn advance(&mut self, raw_input: &str) -> Transition {
        let transition = advance(self.stage, raw_input, &mut self.profile, &mut *self.rng);
        debug!(from = %transition.from, to = %transition.to, "Stage advanced");
        self.stage = transition.to;
        transition
    }
}

impl Default for StageSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StageSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageSequencer")
            .field("stage", &self.stage)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
