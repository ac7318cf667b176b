//! Configuration types.

use std::time::Duration;

use crate::consultation::Pace;
use crate::error::ConfigError;

/// Environment variable for the delay before questions and follow-ups.
pub const PROMPT_DELAY_ENV: &str = "BRAND_CONSULT_PROMPT_DELAY_MS";
/// Environment variable for the delay before the full recommendation.
pub const RECOMMENDATION_DELAY_ENV: &str = "BRAND_CONSULT_RECOMMENDATION_DELAY_MS";
/// Environment variable for the delay before the website blueprint.
pub const WEBSITE_DELAY_ENV: &str = "BRAND_CONSULT_WEBSITE_DELAY_MS";

/// Consultation session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultConfig {
    /// Time the bot spends "typing" a question or follow-up answer.
    pub prompt_delay: Duration,
    /// Time the bot spends on the end-of-intake recommendation.
    pub recommendation_delay: Duration,
    /// Time the bot spends on the website blueprint.
    pub website_delay: Duration,
}

impl Default for ConsultConfig {
    fn default() -> Self {
        Self {
            prompt_delay: Duration::from_millis(1000),
            recommendation_delay: Duration::from_millis(2000),
            website_delay: Duration::from_millis(1500),
        }
    }
}

impl ConsultConfig {
    /// No artificial delays at all.
    pub fn immediate() -> Self {
        Self {
            prompt_delay: Duration::ZERO,
            recommendation_delay: Duration::ZERO,
            website_delay: Duration::ZERO,
        }
    }

    /// Build config from environment variables, keeping defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            prompt_delay: millis(&lookup, PROMPT_DELAY_ENV, defaults.prompt_delay)?,
            recommendation_delay: millis(
                &lookup,
                RECOMMENDATION_DELAY_ENV,
                defaults.recommendation_delay,
            )?,
            website_delay: millis(&lookup, WEBSITE_DELAY_ENV, defaults.website_delay)?,
        })
    }

    /// Delay to apply before delivering a reply of the given pace.
    pub fn delay_for(&self, pace: Pace) -> Duration {
        match pace {
            Pace::Prompt => self.prompt_delay,
            Pace::Recommendation => self.recommendation_delay,
            Pace::Website => self.website_delay,
        }
    }
}

fn millis<F>(lookup: &F, key: &str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("expected milliseconds, got {raw:?}: {e}"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_typing_delays() {
        let config = ConsultConfig::default();
        assert_eq!(config.delay_for(Pace::Prompt), Duration::from_millis(1000));
        assert_eq!(config.delay_for(Pace::Recommendation), Duration::from_millis(2000));
        assert_eq!(config.delay_for(Pace::Website), Duration::from_millis(1500));
    }

    #[test]
    fn empty_lookup_keeps_defaults() {
        let config = ConsultConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConsultConfig::default());
    }

    #[test]
    fn overrides_are_milliseconds() {
        let config = ConsultConfig::from_lookup(lookup(&[
            (PROMPT_DELAY_ENV, "0"),
            (WEBSITE_DELAY_ENV, " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.prompt_delay, Duration::ZERO);
        assert_eq!(config.recommendation_delay, Duration::from_millis(2000));
        assert_eq!(config.website_delay, Duration::from_millis(250));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = ConsultConfig::from_lookup(lookup(&[(RECOMMENDATION_DELAY_ENV, "soon")]))
            .unwrap_err();
        let ConfigError::InvalidValue { key, message } = err;
        assert_eq!(key, RECOMMENDATION_DELAY_ENV);
        assert!(message.contains("soon"));
    }

    #[test]
    fn immediate_has_no_delays() {
        let config = ConsultConfig::immediate();
        for pace in [Pace::Prompt, Pace::Recommendation, Pace::Website] {
            assert!(config.delay_for(pace).is_zero());
        }
    }
}
