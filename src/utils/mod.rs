mod api;
mod controller;
mod encoding;
mod error;
mod host;
mod settings;
mod theme;
mod types;

pub use api::DebateClient;
pub use controller::{
    bootstrap, ChatView, DebateController, Navigator, SendOutcome, StartOutcome, TopicGrid,
    TopicInput,
};
pub use host::{push_history, scroll_to_bottom, WebAppHost};
pub use settings::Settings;
pub use types::{AppView, Message, Role, Topic};
