use serde::{Deserialize, Serialize};

/// The subset of the upstream `/user` payload this service consumes. Every
/// field is optional on the wire; normalization supplies the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub login: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub public_repos: Option<u64>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    pub html_url: Option<String>,
    pub created_at: Option<String>,
    pub email: Option<String>,
}

/// The normalized user profile returned to callers.
///
/// Required-shaped fields default to an empty string or zero, nullable
/// fields stay `None` when the upstream omits them or sends an empty value.
/// Built fresh for every request; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
    pub username: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub location: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub twitter: Option<String>,
    pub profile_url: String,
    pub created_at: String,
    pub email: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

impl From<RawProfile> for ProfileInfo {
    fn from(raw: RawProfile) -> Self {
        Self {
            username: raw.login.unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            avatar: raw.avatar_url.unwrap_or_default(),
            bio: raw.bio.unwrap_or_default(),
            followers: raw.followers.unwrap_or_default(),
            following: raw.following.unwrap_or_default(),
            public_repos: raw.public_repos.unwrap_or_default(),
            location: non_empty(raw.location),
            company: non_empty(raw.company),
            blog: non_empty(raw.blog),
            twitter: non_empty(raw.twitter_username),
            profile_url: raw.html_url.unwrap_or_default(),
            created_at: raw.created_at.unwrap_or_default(),
            email: non_empty(raw.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_normalizes_field_by_field() {
        let raw: RawProfile = serde_json::from_value(serde_json::json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://example.com/a.png",
            "bio": "hello",
            "followers": 12,
            "following": 3,
            "public_repos": 8,
            "location": "San Francisco",
            "company": "@github",
            "blog": "https://octo.example",
            "twitter_username": "octocat",
            "html_url": "https://github.com/octocat",
            "created_at": "2011-01-25T18:44:36Z",
            "email": "octo@example.com",
            "hireable": true
        }))
        .unwrap();

        let info = ProfileInfo::from(raw);
        assert_eq!(info.username, "octocat");
        assert_eq!(info.followers, 12);
        assert_eq!(info.location.as_deref(), Some("San Francisco"));
        assert_eq!(info.created_at, "2011-01-25T18:44:36Z");
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let raw: RawProfile = serde_json::from_value(serde_json::json!({
            "login": "octocat"
        }))
        .unwrap();

        let info = ProfileInfo::from(raw);
        assert_eq!(info.username, "octocat");
        assert_eq!(info.name, "");
        assert_eq!(info.followers, 0);
        assert!(info.location.is_none());
        assert!(info.email.is_none());
    }

    #[test]
    fn null_and_empty_values_normalize_to_none() {
        let raw: RawProfile = serde_json::from_value(serde_json::json!({
            "login": "octocat",
            "location": null,
            "company": "",
            "blog": ""
        }))
        .unwrap();

        let info = ProfileInfo::from(raw);
        assert!(info.location.is_none());
        assert!(info.company.is_none());
        assert!(info.blog.is_none());
    }

    #[test]
    fn normalized_profile_serializes_with_camel_case_keys() {
        let info = ProfileInfo {
            username: "octocat".to_string(),
            name: String::new(),
            avatar: String::new(),
            bio: String::new(),
            followers: 0,
            following: 0,
            public_repos: 2,
            location: None,
            company: None,
            blog: None,
            twitter: None,
            profile_url: String::new(),
            created_at: String::new(),
            email: None,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["publicRepos"], 2);
        assert_eq!(json["profileUrl"], "");
        assert!(json["location"].is_null());
    }
}
