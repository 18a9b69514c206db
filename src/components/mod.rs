mod debate;
mod handles;
mod header;
mod input;
mod topics;

pub use debate::{DebatePage, CHAT_CONTAINER_ID};
pub use handles::{SignalChatView, SignalTopicGrid, SignalTopicInput, ViewNavigator};
pub use header::Header;
pub use input::ChatInput;
pub use topics::TopicsPage;
