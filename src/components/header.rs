use dioxus::prelude::*;

#[component]
pub fn Header(user_name: Signal<Option<String>>) -> Element {
    rsx! {
        header {
            class: "app-header",

            span {
                class: "app-title",
                "AI Debate Partner"
            }

            if let Some(name) = user_name() {
                span {
                    class: "app-greeting",
                    "Hi, {name}"
                }
            }
        }
    }
}
