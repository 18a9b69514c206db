//! Signal-backed implementations of the controller's UI handles.
//!
//! Signals are `Copy`, so a handle can be built inside a spawned task and
//! handed to the controller by `&mut` for the duration of one operation.

use super::CHAT_CONTAINER_ID;
use crate::utils::{
    push_history, scroll_to_bottom, AppView, ChatView, Message, Navigator, Role, Topic,
    TopicGrid, TopicInput,
};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct SignalTopicGrid {
    topics: Signal<Vec<Topic>>,
}

impl SignalTopicGrid {
    pub fn new(topics: Signal<Vec<Topic>>) -> Self {
        Self { topics }
    }
}

impl TopicGrid for SignalTopicGrid {
    fn clear(&mut self) {
        self.topics.write().clear();
    }

    fn push_card(&mut self, topic: Topic) {
        self.topics.write().push(topic);
    }
}

#[derive(Clone, Copy)]
pub struct SignalTopicInput {
    value: Signal<String>,
}

impl SignalTopicInput {
    pub fn new(value: Signal<String>) -> Self {
        Self { value }
    }
}

impl TopicInput for SignalTopicInput {
    fn value(&self) -> String {
        self.value.read().clone()
    }
}

#[derive(Clone, Copy)]
pub struct SignalChatView {
    input: Signal<String>,
    messages: Signal<Vec<Message>>,
    next_id: Signal<usize>,
}

impl SignalChatView {
    pub fn new(
        input: Signal<String>,
        messages: Signal<Vec<Message>>,
        next_id: Signal<usize>,
    ) -> Self {
        Self {
            input,
            messages,
            next_id,
        }
    }
}

impl ChatView for SignalChatView {
    fn input(&self) -> String {
        self.input.read().clone()
    }

    fn clear_input(&mut self) {
        self.input.set(String::new());
    }

    fn append(&mut self, role: Role, content: String) {
        let id = *self.next_id.read();
        self.next_id.set(id + 1);
        self.messages.write().push(Message { id, content, role });
    }

    fn scroll_to_end(&mut self) {
        scroll_to_bottom(CHAT_CONTAINER_ID);
    }
}

/// Switches the rendered page and mirrors the path in the address bar.
#[derive(Clone, Copy)]
pub struct ViewNavigator {
    view: Signal<Option<AppView>>,
    messages: Signal<Vec<Message>>,
}

impl ViewNavigator {
    pub fn new(view: Signal<Option<AppView>>, messages: Signal<Vec<Message>>) -> Self {
        Self { view, messages }
    }
}

impl Navigator for ViewNavigator {
    fn navigate(&mut self, path: &str) {
        // A new page starts with an empty conversation
        self.messages.write().clear();
        push_history(path);
        self.view.set(Some(AppView::from_path(path)));
    }
}
