//! Directory data types.

use serde::Deserialize;

/// A single GitHub user as returned by the `/users` endpoint.
///
/// Only the fields the page renders are kept; everything else in the
/// response object is ignored during deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DirectoryEntry {
    /// Numeric account id (unique within a fetch result)
    pub id: u64,
    /// Display handle
    pub login: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Profile page URL
    pub html_url: String,
}

impl DirectoryEntry {
    /// Alt text for the avatar image.
    pub fn avatar_alt(&self) -> &str {
        &self.login
    }
}

/// Load status of the directory view.
///
/// `Loading` is the only non-terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch pending (initial state)
    #[default]
    Loading,
    /// Directory fetched
    Ready,
    /// Fetch failed; carries the user-facing message
    Failed(&'static str),
}

impl LoadStatus {
    /// Whether the status can no longer change.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ignores_extra_fields() {
        let json = r#"{
            "login": "mojombo",
            "id": 1,
            "node_id": "MDQ6VXNlcjE=",
            "avatar_url": "https://avatars.githubusercontent.com/u/1?v=4",
            "gravatar_id": "",
            "html_url": "https://github.com/mojombo",
            "type": "User",
            "site_admin": false
        }"#;
        let entry: DirectoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.login, "mojombo");
        assert_eq!(entry.html_url, "https://github.com/mojombo");
        assert_eq!(entry.avatar_alt(), "mojombo");
    }

    #[test]
    fn test_entry_requires_fields() {
        let missing_login = r#"{"id": 1, "avatar_url": "a.png", "html_url": "u/a"}"#;
        assert!(serde_json::from_str::<DirectoryEntry>(missing_login).is_err());

        let string_id = r#"{"id": "1", "login": "a", "avatar_url": "a.png", "html_url": "u/a"}"#;
        assert!(serde_json::from_str::<DirectoryEntry>(string_id).is_err());
    }

    #[test]
    fn test_status() {
        assert_eq!(LoadStatus::default(), LoadStatus::Loading);
        assert!(!LoadStatus::Loading.is_terminal());
        assert!(LoadStatus::Ready.is_terminal());
        assert!(LoadStatus::Failed("nope").is_terminal());
    }
}
