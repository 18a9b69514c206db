use dioxus::prelude::*;

mod components;
mod utils;

use components::{
    DebatePage, Header, SignalChatView, SignalTopicGrid, SignalTopicInput, TopicsPage,
    ViewNavigator,
};
use utils::{
    bootstrap, AppView, DebateClient, DebateController, Message, Navigator, SendOutcome,
    Settings, StartOutcome, Topic, WebAppHost,
};
use std::rc::Rc;

const MAIN_CSS: Asset = asset!("/assets/main.css");

type Controller = Rc<DebateController<DebateClient>>;

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let settings = use_hook(|| {
        Settings::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings: {}", e);
            Settings::default()
        })
    });

    // Theme variables start from the configured palette until the host answers
    let mut theme = use_signal(|| settings.fallback_theme.clone());

    // Current page; None until the host handshake is done
    let mut current_view = use_signal(|| None::<AppView>);

    let mut controller = use_signal(|| None::<Controller>);
    let mut user_name = use_signal(|| None::<String>);

    let topics = use_signal(Vec::<Topic>::new);
    let custom_topic = use_signal(String::new);

    let messages = use_signal(Vec::<Message>::new);
    let message_input = use_signal(String::new);
    let message_counter = use_signal(|| 0usize);

    // Host handshake, theme and initial topic load
    use_future(move || {
        let settings = settings.clone();
        async move {
            let host = WebAppHost::connect().await.unwrap_or_else(|e| {
                tracing::warn!("Running without host platform: {}", e);
                WebAppHost::detached()
            });

            let boot = bootstrap(&host, &settings).await;
            theme.set(boot.theme);
            user_name.set(host.snapshot().user_name.clone());

            let client = match DebateClient::new(boot.api_base) {
                Ok(client) => client,
                Err(e) => {
                    tracing::warn!("Failed to create API client: {}", e);
                    return;
                }
            };
            tracing::info!("Using debate backend at {}", client.base_url());

            let ctrl = Rc::new(DebateController::new(
                client,
                boot.user_id,
                settings.max_message_length,
            ));
            controller.set(Some(ctrl.clone()));
            current_view.set(Some(boot.view.clone()));

            if boot.view.has_topic_grid() {
                load_topics(ctrl, topics).await;
            }
        }
    });

    // Handler for starting a debate from a card (Some) or the custom input (None)
    let start_debate = move |topic: Option<Topic>| {
        let Some(ctrl) = controller.read().clone() else {
            return;
        };
        spawn(async move {
            let input = SignalTopicInput::new(custom_topic);
            let mut navigator = ViewNavigator::new(current_view, messages);
            let topic = topic.as_ref().map(Topic::as_str);

            match ctrl.start_debate(topic, &input, &mut navigator).await {
                Ok(StartOutcome::Navigated(path)) => tracing::info!("Navigated to {}", path),
                Ok(StartOutcome::Skipped) => {}
                Err(e) => tracing::warn!("Failed to start debate: {}", e),
            }
        });
    };

    // Handler for sending the current message input
    let send_message = move |_| {
        let Some(ctrl) = controller.read().clone() else {
            return;
        };
        spawn(async move {
            let mut view = SignalChatView::new(message_input, messages, message_counter);

            match ctrl.send_message(&mut view).await {
                Ok(SendOutcome::Replied) => tracing::debug!("Reply received"),
                Ok(SendOutcome::Skipped) => {}
                Err(e) => tracing::warn!("Failed to send message: {}", e),
            }
        });
    };

    // Handler for leaving the debate page
    let back_to_topics = move |_| {
        ViewNavigator::new(current_view, messages).navigate(&AppView::Topics.path());
        if let Some(ctrl) = controller.read().clone() {
            spawn(load_topics(ctrl, topics));
        }
    };

    let theme_style = theme.read().style();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app",
            style: "{theme_style}",

            Header { user_name }

            main {
                class: "content",

                match current_view() {
                    None => rsx! {
                        div {
                            class: "loading",
                            "Loading..."
                        }
                    },
                    Some(AppView::Topics) => rsx! {
                        TopicsPage {
                            topics,
                            custom_topic,
                            on_start: start_debate,
                        }
                    },
                    Some(AppView::Debate(topic)) => rsx! {
                        DebatePage {
                            topic,
                            messages,
                            input: message_input,
                            on_send: send_message,
                            on_back: back_to_topics,
                        }
                    },
                }
            }
        }
    }
}

async fn load_topics(ctrl: Controller, topics: Signal<Vec<Topic>>) {
    let mut grid = SignalTopicGrid::new(topics);
    if let Err(e) = ctrl.load_topics(&mut grid).await {
        tracing::warn!("Failed to load topics: {}", e);
    }
}
