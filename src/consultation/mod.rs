//! Consultation: the scripted personal-branding questionnaire.
//!
//! The conversation walks a fixed list of stages. Each intake stage stores the
//! user's answer in a `BrandProfile` and asks the next question; after the
//! last one the profile is turned into templated recommendations. The stage
//! list lives in a table (`stage::STAGE_TABLE`) read by one driver
//! (`sequencer::advance`).

pub mod generator;
pub mod log;
pub mod profile;
pub mod prompts;
pub mod sequencer;
pub mod session;
pub mod stage;

pub use log::{ConversationLog, Speaker, Turn};
pub use profile::{BrandProfile, ProfileField, ProfileStore, WriteMode};
pub use sequencer::{FollowUpIntent, Pace, StageSequencer, Transition, advance};
pub use session::{ConsultationSession, ConsultationStatus, SubmitOutcome};
pub use stage::{Progress, STAGE_TABLE, Stage, StageRule, Step};
