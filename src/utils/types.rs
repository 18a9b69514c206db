use super::encoding::{decode_uri_component, encode_uri_component};
use serde::{Deserialize, Serialize};
use std::fmt;

const DEBATE_PATH_PREFIX: &str = "/debate/";

#[derive(Clone, PartialEq, Debug)]
pub enum AppView {
    Topics,
    Debate(Topic),
}

impl AppView {
    /// Resolve the page for a browser path. Anything that is not a debate
    /// page is the topic index.
    pub fn from_path(path: &str) -> Self {
        match path.strip_prefix(DEBATE_PATH_PREFIX) {
            Some(encoded) if !encoded.trim_matches('/').is_empty() => {
                let topic = decode_uri_component(encoded.trim_end_matches('/'));
                AppView::Debate(Topic::new(topic))
            }
            _ => AppView::Topics,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppView::Topics => "/".to_string(),
            AppView::Debate(topic) => {
                format!("{}{}", DEBATE_PATH_PREFIX, encode_uri_component(topic.as_str()))
            }
        }
    }

    pub fn has_topic_grid(&self) -> bool {
        matches!(self, AppView::Topics)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// CSS class for the message bubble
    pub fn class(&self) -> &'static str {
        match self {
            Role::User => "message user-message",
            Role::Bot => "message bot-message",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    pub id: usize,
    pub content: String,
    pub role: Role,
}

/// Identity the host platform reports for the current user.
///
/// Telegram hands out numeric ids, but the backend accepts strings too.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}
