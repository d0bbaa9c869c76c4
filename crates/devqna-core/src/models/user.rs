//! User preference bag owned by the external identity subsystem.

use serde::{Deserialize, Serialize};

/// Per-user preferences stored with the identity provider.
///
/// The reputation counter lives here; it is adjusted through
/// [`crate::voting::ReputationAdjuster`] only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    #[serde(default)]
    pub reputation: i64,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_default_reputation_is_zero() {
        let prefs: UserPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.reputation, 0);
        assert!(prefs.avatar_url.is_none());
    }

    #[test]
    fn prefs_round_trip() {
        let prefs = UserPrefs {
            reputation: 42,
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: UserPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
