//! Consultation stages and the declarative stage table.

use serde::{Deserialize, Serialize};

use super::profile::ProfileField;

/// The stages of the consultation conversation.
///
/// Progresses linearly: Intro → Industry → … → Content → Recommendations.
/// Recommendations may hold or move on to Website; Website holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Intro,
    Industry,
    Goals,
    Skills,
    Values,
    Audience,
    Challenges,
    Platforms,
    Personality,
    UniqueValue,
    Content,
    Recommendations,
    Website,
    Complete,
}

impl Stage {
    /// Every stage, in conversation order.
    pub const ALL: [Stage; 14] = [
        Stage::Intro,
        Stage::Industry,
        Stage::Goals,
        Stage::Skills,
        Stage::Values,
        Stage::Audience,
        Stage::Challenges,
        Stage::Platforms,
        Stage::Personality,
        Stage::UniqueValue,
        Stage::Content,
        Stage::Recommendations,
        Stage::Website,
        Stage::Complete,
    ];

    /// Position of this stage in [`Stage::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The fixed successor in the enumeration, if any.
    pub fn next(&self) -> Option<Stage> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The table row driving this stage.
    pub fn rule(&self) -> &'static StageRule {
        &STAGE_TABLE[self.index()]
    }

    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        match self.rule().step {
            Step::Prompt(next) | Step::Recommend(next) => target == next,
            Step::FollowUp => matches!(target, Stage::Recommendations | Stage::Website),
            Step::WebsiteDetail | Step::Fallback => target == *self,
        }
    }

    /// Whether this stage ends the intake questions.
    pub fn is_intake(&self) -> bool {
        self.index() <= Stage::Content.index()
    }

    /// Whether this stage is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Intro
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intro => "intro",
            Self::Industry => "industry",
            Self::Goals => "goals",
            Self::Skills => "skills",
            Self::Values => "values",
            Self::Audience => "audience",
            Self::Challenges => "challenges",
            Self::Platforms => "platforms",
            Self::Personality => "personality",
            Self::UniqueValue => "unique_value",
            Self::Content => "content",
            Self::Recommendations => "recommendations",
            Self::Website => "website",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

/// How the sequencer reacts once a stage has recorded its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to the given stage and ask its question.
    Prompt(Stage),
    /// Move to the given stage and deliver the full recommendation.
    Recommend(Stage),
    /// Classify the input: website strategy, the menu, or contextual advice.
    FollowUp,
    /// Stay and deliver the detailed website advice.
    WebsiteDetail,
    /// Stay and deliver the generic fallback.
    Fallback,
}

/// One row of the stage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRule {
    pub stage: Stage,
    /// Profile field the raw answer is written to, if any.
    pub field: Option<ProfileField>,
    pub step: Step,
}

const fn row(stage: Stage, field: Option<ProfileField>, step: Step) -> StageRule {
    StageRule { stage, field, step }
}

/// The whole conversation, as data. Rows are in [`Stage::ALL`] order.
pub static STAGE_TABLE: [StageRule; 14] = [
    row(Stage::Intro, Some(ProfileField::Name), Step::Prompt(Stage::Industry)),
    row(Stage::Industry, Some(ProfileField::Industry), Step::Prompt(Stage::Goals)),
    row(Stage::Goals, Some(ProfileField::Goals), Step::Prompt(Stage::Skills)),
    row(Stage::Skills, Some(ProfileField::Skills), Step::Prompt(Stage::Values)),
    row(Stage::Values, Some(ProfileField::Values), Step::Prompt(Stage::Audience)),
    row(
        Stage::Audience,
        Some(ProfileField::TargetAudience),
        Step::Prompt(Stage::Challenges),
    ),
    row(
        Stage::Challenges,
        Some(ProfileField::CurrentChallenges),
        Step::Prompt(Stage::Platforms),
    ),
    row(
        Stage::Platforms,
        Some(ProfileField::PreferredPlatforms),
        Step::Prompt(Stage::Personality),
    ),
    row(
        Stage::Personality,
        Some(ProfileField::PersonalityTraits),
        Step::Prompt(Stage::UniqueValue),
    ),
    row(
        Stage::UniqueValue,
        Some(ProfileField::UniqueValue),
        Step::Prompt(Stage::Content),
    ),
    row(
        Stage::Content,
        Some(ProfileField::ContentPreferences),
        Step::Recommend(Stage::Recommendations),
    ),
    row(Stage::Recommendations, None, Step::FollowUp),
    row(Stage::Website, None, Step::WebsiteDetail),
    row(Stage::Complete, None, Step::Fallback),
];

/// Position of the current stage, for progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Zero-based index of the current stage.
    pub index: usize,
    /// Number of stages in the enumeration.
    pub total: usize,
}

impl Progress {
    pub fn of(stage: Stage) -> Self {
        Self {
            index: stage.index(),
            total: Stage::ALL.len(),
        }
    }

    /// Completed share in `0.0..=1.0`, counting the current stage as reached.
    pub fn fraction(&self) -> f32 {
        (self.index + 1) as f32 / self.total as f32
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.index + 1, self.total)
    }
}
