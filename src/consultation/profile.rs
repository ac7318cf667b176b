//! Brand profile and the store the sequencer writes answers into.

use serde::{Deserialize, Serialize};

/// Answers collected during the consultation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub name: String,
    pub industry: String,
    pub goals: Vec<String>,
    pub skills: Vec<String>,
    pub values: Vec<String>,
    pub target_audience: String,
    pub current_challenges: Vec<String>,
    pub preferred_platforms: Vec<String>,
    pub personality_traits: Vec<String>,
    pub unique_value: String,
    pub content_preferences: Vec<String>,
}

impl BrandProfile {
    /// Render the collected answers as a markdown section.
    ///
    /// Fields that have not been answered yet are left out.
    pub fn summary_section(&self) -> String {
        let mut parts = vec!["# Brand Profile".to_string()];

        for field in ProfileField::ALL {
            let value = match field.mode() {
                WriteMode::Overwrite => self.scalar(field).to_string(),
                WriteMode::Append => self.sequence(field).join(", "),
            };
            if !value.is_empty() {
                parts.push(format!("- **{}:** {}", field.label(), value));
            }
        }

        parts.join("\n")
    }

    fn scalar(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Industry => &self.industry,
            ProfileField::TargetAudience => &self.target_audience,
            ProfileField::UniqueValue => &self.unique_value,
            _ => "",
        }
    }

    fn sequence(&self, field: ProfileField) -> &[String] {
        match field {
            ProfileField::Goals => &self.goals,
            ProfileField::Skills => &self.skills,
            ProfileField::Values => &self.values,
            ProfileField::CurrentChallenges => &self.current_challenges,
            ProfileField::PreferredPlatforms => &self.preferred_platforms,
            ProfileField::PersonalityTraits => &self.personality_traits,
            ProfileField::ContentPreferences => &self.content_preferences,
            _ => &[],
        }
    }

    fn sequence_mut(&mut self, field: ProfileField) -> Option<&mut Vec<String>> {
        match field {
            ProfileField::Goals => Some(&mut self.goals),
            ProfileField::Skills => Some(&mut self.skills),
            ProfileField::Values => Some(&mut self.values),
            ProfileField::CurrentChallenges => Some(&mut self.current_challenges),
            ProfileField::PreferredPlatforms => Some(&mut self.preferred_platforms),
            ProfileField::PersonalityTraits => Some(&mut self.personality_traits),
            ProfileField::ContentPreferences => Some(&mut self.content_preferences),
            _ => None,
        }
    }

    fn scalar_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        match field {
            ProfileField::Name => Some(&mut self.name),
            ProfileField::Industry => Some(&mut self.industry),
            ProfileField::TargetAudience => Some(&mut self.target_audience),
            ProfileField::UniqueValue => Some(&mut self.unique_value),
            _ => None,
        }
    }
}

/// How a stage's answer lands in its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the previous value.
    Overwrite,
    /// Push onto the end; elements are never removed.
    Append,
}

/// A single profile field a stage can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    Industry,
    Goals,
    Skills,
    Values,
    TargetAudience,
    CurrentChallenges,
    PreferredPlatforms,
    PersonalityTraits,
    UniqueValue,
    ContentPreferences,
}

impl ProfileField {
    pub const ALL: [ProfileField; 11] = [
        ProfileField::Name,
        ProfileField::Industry,
        ProfileField::Goals,
        ProfileField::Skills,
        ProfileField::Values,
        ProfileField::TargetAudience,
        ProfileField::CurrentChallenges,
        ProfileField::PreferredPlatforms,
        ProfileField::PersonalityTraits,
        ProfileField::UniqueValue,
        ProfileField::ContentPreferences,
    ];

    pub fn mode(&self) -> WriteMode {
        match self {
            Self::Name | Self::Industry | Self::TargetAudience | Self::UniqueValue => {
                WriteMode::Overwrite
            }
            _ => WriteMode::Append,
        }
    }

    /// Human-readable label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Industry => "Industry",
            Self::Goals => "Goals",
            Self::Skills => "Skills",
            Self::Values => "Values",
            Self::TargetAudience => "Target audience",
            Self::CurrentChallenges => "Current challenges",
            Self::PreferredPlatforms => "Preferred platforms",
            Self::PersonalityTraits => "Personality",
            Self::UniqueValue => "Unique value",
            Self::ContentPreferences => "Content preferences",
        }
    }
}

/// Owns the profile being built. Accepts any value without validation.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profile: BrandProfile,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &BrandProfile {
        &self.profile
    }

    /// Owned copy of the current profile.
    pub fn snapshot(&self) -> BrandProfile {
        self.profile.clone()
    }

    /// Write `value` into `field`, overwriting or appending per the field's mode.
    pub fn set(&mut self, field: ProfileField, value: &str) {
        match field.mode() {
            WriteMode::Overwrite => {
                if let Some(slot) = self.profile.scalar_mut(field) {
                    *slot = value.to_string();
                }
            }
            WriteMode::Append => {
                if let Some(seq) = self.profile.sequence_mut(field) {
                    seq.push(value.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_empty() {
        let p = BrandProfile::default();
        assert!(p.name.is_empty());
        assert!(p.goals.is_empty());
        assert!(p.content_preferences.is_empty());
    }

    #[test]
    fn scalar_fields_overwrite() {
        let mut store = ProfileStore::new();
        store.set(ProfileField::Name, "Ada");
        store.set(ProfileField::Name, "Grace");
        assert_eq!(store.get().name, "Grace");
    }

    #[test]
    fn sequence_fields_append() {
        let mut store = ProfileStore::new();
        store.set(ProfileField::Skills, "control systems");
        store.set(ProfileField::Skills, "embedded C");
        assert_eq!(store.get().skills, vec!["control systems", "embedded C"]);
    }

    #[test]
    fn set_touches_only_one_field() {
        for field in ProfileField::ALL {
            let mut store = ProfileStore::new();
            store.set(field, "x");
            let json = serde_json::to_value(store.get()).unwrap();
            let touched: Vec<_> = json
                .as_object()
                .unwrap()
                .iter()
                .filter(|(_, v)| {
                    v.as_str() == Some("x") || v.as_array().is_some_and(|a| !a.is_empty())
                })
                .map(|(k, _)| k.clone())
                .collect();
            assert_eq!(touched.len(), 1, "{field:?} touched {touched:?}");
        }
    }

    #[test]
    fn modes_split_scalars_and_sequences() {
        let overwrite: Vec<_> = ProfileField::ALL
            .into_iter()
            .filter(|f| f.mode() == WriteMode::Overwrite)
            .collect();
        assert_eq!(
            overwrite,
            vec![
                ProfileField::Name,
                ProfileField::Industry,
                ProfileField::TargetAudience,
                ProfileField::UniqueValue,
            ]
        );
    }

    #[test]
    fn profile_serializes_camel_case() {
        let mut store = ProfileStore::new();
        store.set(ProfileField::TargetAudience, "engineers");
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["targetAudience"], "engineers");
        assert!(json.get("target_audience").is_none());
    }

    #[test]
    fn summary_section_skips_empty_fields() {
        let mut store = ProfileStore::new();
        store.set(ProfileField::Name, "Ada");
        store.set(ProfileField::Values, "precision");
        store.set(ProfileField::Values, "candor");

        let section = store.get().summary_section();
        assert!(section.contains("- **Name:** Ada"));
        assert!(section.contains("- **Values:** precision, candor"));
        assert!(!section.contains("Industry"));
        assert!(!section.contains("Skills"));
    }
}
