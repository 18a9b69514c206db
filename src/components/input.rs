use dioxus::prelude::*;

#[component]
pub fn ChatInput(value: Signal<String>, on_send: EventHandler<()>) -> Element {
    let mut value = value;

    // Enter sends, Shift+Enter inserts a newline
    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if !value.read().trim().is_empty() {
                on_send.call(());
            }
        }
    };

    let has_content = !value.read().trim().is_empty();

    rsx! {
        div {
            class: "chat-input",

            textarea {
                id: "messageInput",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
                onkeydown: handle_keydown,
                placeholder: "Type your argument... (Enter to send)",
                rows: "2",
                autofocus: true,
            }

            button {
                class: "button",
                disabled: !has_content,
                onclick: move |_| on_send.call(()),
                "Send"
            }
        }
    }
}
