use super::ChatInput;
use crate::utils::{Message, Topic};
use dioxus::prelude::*;

/// Element id of the scrolling message list
pub const CHAT_CONTAINER_ID: &str = "chatContainer";

#[component]
pub fn DebatePage(
    topic: Topic,
    messages: Signal<Vec<Message>>,
    input: Signal<String>,
    on_send: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        section {
            class: "debate",

            div {
                class: "debate-header",

                button {
                    class: "back-button",
                    onclick: move |_| on_back.call(()),
                    "← Topics"
                }

                h2 {
                    class: "debate-topic",
                    "{topic}"
                }
            }

            div {
                id: CHAT_CONTAINER_ID,
                class: "chat-container",

                if messages.read().is_empty() {
                    p {
                        class: "empty-hint",
                        "Make your opening argument to get started."
                    }
                }

                for message in messages.read().iter() {
                    div {
                        key: "{message.id}",
                        class: message.role.class(),
                        "{message.content}"
                    }
                }
            }

            ChatInput {
                value: input,
                on_send,
            }
        }
    }
}
