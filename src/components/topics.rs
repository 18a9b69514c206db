use crate::utils::Topic;
use dioxus::prelude::*;

/// A pressable card and the topic pressing it starts.
#[derive(Clone, PartialEq, Debug)]
struct TopicCard {
    key: usize,
    label: String,
    starts: Topic,
}

fn topic_cards(topics: &[Topic]) -> Vec<TopicCard> {
    topics
        .iter()
        .enumerate()
        .map(|(key, topic)| TopicCard {
            key,
            label: topic.to_string(),
            starts: topic.clone(),
        })
        .collect()
}

#[component]
pub fn TopicsPage(
    topics: Signal<Vec<Topic>>,
    custom_topic: Signal<String>,
    on_start: EventHandler<Option<Topic>>,
) -> Element {
    let mut custom_topic = custom_topic;

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            evt.prevent_default();
            on_start.call(None);
        }
    };

    rsx! {
        section {
            class: "topics",

            h2 {
                class: "section-title",
                "Choose a topic to debate"
            }

            div {
                id: "topicGrid",
                class: "topic-grid",

                for TopicCard { key, label, starts } in topic_cards(&topics.read()) {
                    div {
                        key: "{key}",
                        class: "topic-card",
                        onclick: move |_| on_start.call(Some(starts.clone())),
                        "{label}"
                    }
                }
            }

            div {
                class: "custom-topic",

                input {
                    id: "customTopic",
                    r#type: "text",
                    value: "{custom_topic}",
                    oninput: move |evt| custom_topic.set(evt.value()),
                    onkeydown: handle_keydown,
                    placeholder: "Or enter your own topic...",
                }

                button {
                    class: "button",
                    onclick: move |_| on_start.call(None),
                    "Start Debate"
                }
            }
        }
    }
}
