//! Brand Consultant: scripted personal-branding questionnaire.

pub mod config;
pub mod consultation;
pub mod error;
pub mod shell;
