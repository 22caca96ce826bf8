//! Account profile record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProfileId = Uuid;

/// Display profile linked to an authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    /// Auth-service account id this profile belongs to.
    pub user_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            first_name: None,
            last_name: None,
            full_name: None,
            email: None,
            profile_picture: None,
            created_at,
        }
    }

    /// Best available name for greetings and comment bylines: full name,
    /// then first name, then email.
    pub fn display_name(&self) -> Option<&str> {
        [&self.full_name, &self.first_name, &self.email]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::Profile;
    use chrono::{TimeZone, Utc};

    #[test]
    fn display_name_prefers_full_name_and_skips_blanks() {
        let mut profile = Profile::new(
            "user-1",
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        );
        assert_eq!(profile.display_name(), None);

        profile.email = Some("ana@example.com".to_string());
        assert_eq!(profile.display_name(), Some("ana@example.com"));

        profile.first_name = Some("Ana".to_string());
        assert_eq!(profile.display_name(), Some("Ana"));

        profile.full_name = Some("  ".to_string());
        assert_eq!(profile.display_name(), Some("Ana"));

        profile.full_name = Some("Ana Putri".to_string());
        assert_eq!(profile.display_name(), Some("Ana Putri"));
    }
}
