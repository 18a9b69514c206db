use super::api::{DebateApi, MessageRequest, StartDebateRequest};
use super::error::{ClientError, Result};
use super::host::HostPlatform;
use super::settings::Settings;
use super::theme::ThemeParams;
use super::types::{AppView, Role, Topic, UserId};

// ============================================================================
// UI handles
// ============================================================================

/// Container of pressable topic cards.
pub trait TopicGrid {
    fn clear(&mut self);
    fn push_card(&mut self, topic: Topic);
}

/// Free-text topic field used when no topic is passed explicitly.
pub trait TopicInput {
    fn value(&self) -> String;
}

/// Message list plus the input field that feeds it.
pub trait ChatView {
    fn input(&self) -> String;
    fn clear_input(&mut self);
    fn append(&mut self, role: Role, content: String);
    fn scroll_to_end(&mut self);
}

pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

// ============================================================================
// Outcomes
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// No topic given and the fallback input was empty
    Skipped,
    Navigated(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// Input was blank
    Skipped,
    Replied,
}

// ============================================================================
// Bootstrap
// ============================================================================

/// Page state derived once at load.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    pub theme: ThemeParams,
    pub view: AppView,
    pub user_id: Option<UserId>,
    pub api_base: String,
}

/// Handshake with the host and derive the page state.
///
/// A failed readiness signal is logged and otherwise ignored; the page still
/// works, the host just keeps its loading indicator a little longer.
pub async fn bootstrap<H: HostPlatform>(host: &H, settings: &Settings) -> Bootstrap {
    if let Err(e) = host.signal_ready().await {
        tracing::warn!("Failed to signal readiness: {}", e);
    }

    let origin = host.origin();
    Bootstrap {
        theme: host.theme().or(&settings.fallback_theme),
        view: AppView::from_path(&host.path()),
        user_id: host.current_user().or_else(|| settings.user_id.clone()),
        api_base: settings.resolve_api_base(origin.as_deref()),
    }
}

// ============================================================================
// Controller
// ============================================================================

pub struct DebateController<A> {
    api: A,
    user_id: Option<UserId>,
    max_message_length: Option<usize>,
}

impl<A: DebateApi> DebateController<A> {
    pub fn new(api: A, user_id: Option<UserId>, max_message_length: Option<usize>) -> Self {
        Self {
            api,
            user_id,
            max_message_length,
        }
    }

    fn user_id(&self) -> Result<UserId> {
        self.user_id.clone().ok_or(ClientError::MissingUser)
    }

    /// Replace the grid's cards with the server's topics, in response order.
    pub async fn load_topics<G: TopicGrid>(&self, grid: &mut G) -> Result<usize> {
        let topics = self.api.fetch_topics().await?;

        grid.clear();
        let count = topics.len();
        for topic in topics {
            grid.push_card(Topic::new(topic));
        }

        tracing::info!("Loaded {} topics", count);
        Ok(count)
    }

    /// Start a debate on `topic`, or on the fallback input's value when no
    /// topic is given, and navigate to its page on success.
    pub async fn start_debate<I, N>(
        &self,
        topic: Option<&str>,
        fallback: &I,
        navigator: &mut N,
    ) -> Result<StartOutcome>
    where
        I: TopicInput,
        N: Navigator,
    {
        let topic = match topic.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => t.to_string(),
            None => fallback.value().trim().to_string(),
        };
        if topic.is_empty() {
            return Ok(StartOutcome::Skipped);
        }

        let request = StartDebateRequest {
            topic: topic.clone(),
            user_id: self.user_id()?,
        };
        let ack = self.api.start_debate(&request).await?;
        if let Some(message) = ack.message {
            tracing::info!("Debate started: {}", message);
        }

        let path = AppView::Debate(Topic::new(topic)).path();
        navigator.navigate(&path);
        Ok(StartOutcome::Navigated(path))
    }

    /// Send the input's message and append the exchange to the view.
    ///
    /// The user's message is appended and the input cleared before the request
    /// goes out; the reply is appended only if the request succeeds.
    pub async fn send_message<V: ChatView>(&self, view: &mut V) -> Result<SendOutcome> {
        let message = view.input().trim().to_string();
        if message.is_empty() {
            return Ok(SendOutcome::Skipped);
        }

        if let Some(limit) = self.max_message_length {
            let length = message.chars().count();
            if length > limit {
                return Err(ClientError::MessageTooLong { length, limit });
            }
        }
        let user_id = self.user_id()?;

        view.append(Role::User, message.clone());
        view.clear_input();

        let request = MessageRequest { message, user_id };
        let reply = self.api.send_message(&request).await?;

        view.append(Role::Bot, reply.response);
        view.scroll_to_end();
        Ok(SendOutcome::Replied)
    }
}

#[cfg(test)]
mod tests {
    use super::super::api::{MessageResponse, StartDebateResponse};
    use super::*;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Topics,
        Start(StartDebateRequest),
        Message(MessageRequest),
    }

    struct FakeApi {
        calls: RefCell<Vec<Call>>,
        topics: Result<Vec<String>>,
        start: Result<StartDebateResponse>,
        reply: Result<MessageResponse>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                topics: Ok(Vec::new()),
                start: Ok(StartDebateResponse::default()),
                reply: Ok(MessageResponse {
                    response: String::new(),
                    status: None,
                }),
            }
        }

        fn with_topics(mut self, topics: &[&str]) -> Self {
            self.topics = Ok(topics.iter().map(|t| t.to_string()).collect());
            self
        }

        fn with_reply(mut self, response: &str) -> Self {
            self.reply = Ok(MessageResponse {
                response: response.to_string(),
                status: Some("success".to_string()),
            });
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    fn server_error() -> ClientError {
        ClientError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    #[async_trait(?Send)]
    impl DebateApi for FakeApi {
        async fn fetch_topics(&self) -> Result<Vec<String>> {
            self.calls.borrow_mut().push(Call::Topics);
            self.topics.clone()
        }

        async fn start_debate(&self, request: &StartDebateRequest) -> Result<StartDebateResponse> {
            self.calls.borrow_mut().push(Call::Start(request.clone()));
            self.start.clone()
        }

        async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
            self.calls.borrow_mut().push(Call::Message(request.clone()));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct Grid(Vec<Topic>);

    impl TopicGrid for Grid {
        fn clear(&mut self) {
            self.0.clear();
        }

        fn push_card(&mut self, topic: Topic) {
            self.0.push(topic);
        }
    }

    struct Input(&'static str);

    impl TopicInput for Input {
        fn value(&self) -> String {
            self.0.to_string()
        }
    }

    #[derive(Default)]
    struct Nav(Vec<String>);

    impl Navigator for Nav {
        fn navigate(&mut self, path: &str) {
            self.0.push(path.to_string());
        }
    }

    #[derive(Default)]
    struct Chat {
        input: String,
        messages: Vec<(Role, String)>,
        scrolls: usize,
    }

    impl ChatView for Chat {
        fn input(&self) -> String {
            self.input.clone()
        }

        fn clear_input(&mut self) {
            self.input.clear();
        }

        fn append(&mut self, role: Role, content: String) {
            self.messages.push((role, content));
        }

        fn scroll_to_end(&mut self) {
            self.scrolls += 1;
        }
    }

    fn controller(api: FakeApi) -> DebateController<FakeApi> {
        DebateController::new(api, Some(UserId::Number(42)), Some(500))
    }

    #[tokio::test]
    async fn test_load_topics_renders_one_card_per_topic() {
        let ctrl = controller(FakeApi::new().with_topics(&["Climate Change", "AI Ethics"]));
        let mut grid = Grid::default();

        let count = ctrl.load_topics(&mut grid).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            grid.0,
            vec![Topic::new("Climate Change"), Topic::new("AI Ethics")]
        );
    }

    #[tokio::test]
    async fn test_load_topics_twice_replaces_cards() {
        let ctrl = controller(FakeApi::new().with_topics(&["Climate Change", "AI Ethics"]));
        let mut grid = Grid::default();

        ctrl.load_topics(&mut grid).await.unwrap();
        ctrl.load_topics(&mut grid).await.unwrap();

        assert_eq!(grid.0.len(), 2);
        assert_eq!(ctrl.api.calls(), vec![Call::Topics, Call::Topics]);
    }

    #[tokio::test]
    async fn test_load_topics_failure_keeps_grid() {
        let mut api = FakeApi::new();
        api.topics = Err(ClientError::Network("connection refused".to_string()));
        let ctrl = controller(api);
        let mut grid = Grid(vec![Topic::new("Existing")]);

        let err = ctrl.load_topics(&mut grid).await.unwrap_err();

        assert!(matches!(err, ClientError::Network(_)));
        assert_eq!(grid.0, vec![Topic::new("Existing")]);
    }

    #[tokio::test]
    async fn test_start_debate_navigates_to_encoded_topic() {
        let ctrl = controller(FakeApi::new());
        let mut nav = Nav::default();

        let outcome = ctrl
            .start_debate(Some("Space Travel"), &Input(""), &mut nav)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            StartOutcome::Navigated("/debate/Space%20Travel".to_string())
        );
        assert_eq!(nav.0, vec!["/debate/Space%20Travel".to_string()]);
        assert_eq!(
            ctrl.api.calls(),
            vec![Call::Start(StartDebateRequest {
                topic: "Space Travel".to_string(),
                user_id: UserId::Number(42),
            })]
        );
    }

    #[tokio::test]
    async fn test_each_loaded_card_starts_its_own_debate() {
        let ctrl = controller(FakeApi::new().with_topics(&["Climate Change", "AI Ethics"]));
        let mut grid = Grid::default();
        let mut nav = Nav::default();

        ctrl.load_topics(&mut grid).await.unwrap();
        for card in &grid.0 {
            ctrl.start_debate(Some(card.as_str()), &Input("Ignored"), &mut nav)
                .await
                .unwrap();
        }

        assert_eq!(
            nav.0,
            vec![
                "/debate/Climate%20Change".to_string(),
                "/debate/AI%20Ethics".to_string(),
            ]
        );
        let started: Vec<String> = ctrl
            .api
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Start(request) => Some(request.topic),
                _ => None,
            })
            .collect();
        assert_eq!(started, vec!["Climate Change", "AI Ethics"]);
    }

    #[tokio::test]
    async fn test_start_debate_uses_fallback_input() {
        let ctrl = controller(FakeApi::new());
        let mut nav = Nav::default();

        ctrl.start_debate(None, &Input("  Remote Work "), &mut nav)
            .await
            .unwrap();

        assert_eq!(nav.0, vec!["/debate/Remote%20Work".to_string()]);
    }

    #[tokio::test]
    async fn test_start_debate_blank_is_noop() {
        let ctrl = controller(FakeApi::new());
        let mut nav = Nav::default();

        let outcome = ctrl
            .start_debate(Some("   "), &Input(" "), &mut nav)
            .await
            .unwrap();

        assert_eq!(outcome, StartOutcome::Skipped);
        assert!(nav.0.is_empty());
        assert!(ctrl.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_start_debate_failure_does_not_navigate() {
        let mut api = FakeApi::new();
        api.start = Err(server_error());
        let ctrl = controller(api);
        let mut nav = Nav::default();

        let err = ctrl
            .start_debate(Some("AI Ethics"), &Input(""), &mut nav)
            .await
            .unwrap_err();

        assert_eq!(err, server_error());
        assert!(nav.0.is_empty());
    }

    #[tokio::test]
    async fn test_send_message_appends_user_then_bot() {
        let ctrl = controller(FakeApi::new().with_reply("Hi there!"));
        let mut chat = Chat {
            input: "Hello".to_string(),
            ..Default::default()
        };

        let outcome = ctrl.send_message(&mut chat).await.unwrap();

        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(
            chat.messages,
            vec![
                (Role::User, "Hello".to_string()),
                (Role::Bot, "Hi there!".to_string()),
            ]
        );
        assert_eq!(chat.input, "");
        assert_eq!(chat.scrolls, 1);
        assert_eq!(
            ctrl.api.calls(),
            vec![Call::Message(MessageRequest {
                message: "Hello".to_string(),
                user_id: UserId::Number(42),
            })]
        );
    }

    #[tokio::test]
    async fn test_send_message_keeps_existing_history() {
        let ctrl = controller(FakeApi::new().with_reply("Fair point."));
        let mut chat = Chat {
            input: "  Second  ".to_string(),
            messages: vec![
                (Role::User, "First".to_string()),
                (Role::Bot, "Reply".to_string()),
            ],
            scrolls: 0,
        };

        ctrl.send_message(&mut chat).await.unwrap();

        assert_eq!(chat.messages.len(), 4);
        assert_eq!(chat.messages[2], (Role::User, "Second".to_string()));
        assert_eq!(chat.messages[3], (Role::Bot, "Fair point.".to_string()));
    }

    #[tokio::test]
    async fn test_send_message_failure_keeps_only_user_message() {
        let mut api = FakeApi::new();
        api.reply = Err(server_error());
        let ctrl = controller(api);
        let mut chat = Chat {
            input: "Hello".to_string(),
            ..Default::default()
        };

        let err = ctrl.send_message(&mut chat).await.unwrap_err();

        assert_eq!(err, server_error());
        assert_eq!(chat.messages, vec![(Role::User, "Hello".to_string())]);
        assert_eq!(chat.input, "");
        assert_eq!(chat.scrolls, 0);
    }

    #[tokio::test]
    async fn test_send_blank_message_is_noop() {
        let ctrl = controller(FakeApi::new());
        let mut chat = Chat {
            input: " \n\t".to_string(),
            ..Default::default()
        };

        let outcome = ctrl.send_message(&mut chat).await.unwrap();

        assert_eq!(outcome, SendOutcome::Skipped);
        assert!(chat.messages.is_empty());
        assert!(ctrl.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_send_too_long_message_has_no_side_effects() {
        let ctrl = DebateController::new(FakeApi::new(), Some(UserId::Number(42)), Some(5));
        let mut chat = Chat {
            input: "far too long".to_string(),
            ..Default::default()
        };

        let err = ctrl.send_message(&mut chat).await.unwrap_err();

        assert_eq!(
            err,
            ClientError::MessageTooLong {
                length: 12,
                limit: 5
            }
        );
        assert!(chat.messages.is_empty());
        assert_eq!(chat.input, "far too long");
        assert!(ctrl.api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_long_message_with_default_settings_is_sent() {
        let ctrl = DebateController::new(
            FakeApi::new().with_reply("Noted."),
            Some(UserId::Number(1)),
            Settings::default().max_message_length,
        );
        let long = "x".repeat(501);
        let mut chat = Chat {
            input: long.clone(),
            ..Default::default()
        };

        let outcome = ctrl.send_message(&mut chat).await.unwrap();

        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(
            chat.messages,
            vec![(Role::User, long.clone()), (Role::Bot, "Noted.".to_string())]
        );
        assert_eq!(chat.input, "");
        assert_eq!(
            ctrl.api.calls(),
            vec![Call::Message(MessageRequest {
                message: long,
                user_id: UserId::Number(1),
            })]
        );
    }

    #[tokio::test]
    async fn test_missing_user_aborts_before_side_effects() {
        let ctrl = DebateController::new(FakeApi::new(), None, None);
        let mut chat = Chat {
            input: "Hello".to_string(),
            ..Default::default()
        };
        let mut nav = Nav::default();

        let send = ctrl.send_message(&mut chat).await.unwrap_err();
        let start = ctrl
            .start_debate(Some("AI Ethics"), &Input(""), &mut nav)
            .await
            .unwrap_err();

        assert_eq!(send, ClientError::MissingUser);
        assert_eq!(start, ClientError::MissingUser);
        assert!(chat.messages.is_empty());
        assert!(nav.0.is_empty());
        assert!(ctrl.api.calls().is_empty());
    }

    struct FakeHost {
        ready_calls: Cell<usize>,
        fail_ready: bool,
        theme: ThemeParams,
        user: Option<UserId>,
        path: &'static str,
        origin: Option<&'static str>,
    }

    impl FakeHost {
        fn new(path: &'static str) -> Self {
            Self {
                ready_calls: Cell::new(0),
                fail_ready: false,
                theme: ThemeParams::default(),
                user: Some(UserId::Number(7)),
                path,
                origin: Some("https://debate.example.org"),
            }
        }
    }

    #[async_trait(?Send)]
    impl HostPlatform for FakeHost {
        async fn signal_ready(&self) -> Result<()> {
            self.ready_calls.set(self.ready_calls.get() + 1);
            if self.fail_ready {
                Err(ClientError::Host("bridge gone".to_string()))
            } else {
                Ok(())
            }
        }

        fn theme(&self) -> ThemeParams {
            self.theme.clone()
        }

        fn current_user(&self) -> Option<UserId> {
            self.user.clone()
        }

        fn path(&self) -> String {
            self.path.to_string()
        }

        fn origin(&self) -> Option<String> {
            self.origin.map(str::to_string)
        }
    }

    #[tokio::test]
    async fn test_bootstrap_index_page() {
        let mut host = FakeHost::new("/");
        host.theme.bg_color = Some("#17212b".to_string());

        let boot = bootstrap(&host, &Settings::default()).await;

        assert_eq!(host.ready_calls.get(), 1);
        assert_eq!(boot.view, AppView::Topics);
        assert!(boot.view.has_topic_grid());
        assert_eq!(boot.user_id, Some(UserId::Number(7)));
        assert_eq!(boot.api_base, "https://debate.example.org");
        assert_eq!(boot.theme.bg_color.as_deref(), Some("#17212b"));
        assert_eq!(boot.theme.button_color.as_deref(), Some("#2481cc"));
    }

    #[tokio::test]
    async fn test_bootstrap_debate_page_with_settings_fallbacks() {
        let mut host = FakeHost::new("/debate/AI%20Ethics");
        host.fail_ready = true;
        host.user = None;
        host.origin = None;
        let settings = Settings {
            user_id: Some(UserId::Text("desktop".to_string())),
            ..Default::default()
        };

        let boot = bootstrap(&host, &settings).await;

        assert_eq!(boot.view, AppView::Debate(Topic::new("AI Ethics")));
        assert!(!boot.view.has_topic_grid());
        assert_eq!(boot.user_id, Some(UserId::Text("desktop".to_string())));
        assert_eq!(boot.api_base, "http://127.0.0.1:5000");
    }
}
