use super::error::{ClientError, Result};
use super::theme::ThemeParams;
use super::types::UserId;
use async_trait::async_trait;
use dioxus::document;
use serde::Deserialize;

/// Capabilities the embedding messaging platform provides to the page.
#[async_trait(?Send)]
pub trait HostPlatform {
    /// One-time readiness handshake
    async fn signal_ready(&self) -> Result<()>;

    fn theme(&self) -> ThemeParams;

    fn current_user(&self) -> Option<UserId>;

    /// Browser path of the current page, e.g. `/debate/AI%20Ethics`
    fn path(&self) -> String;

    /// Page origin, e.g. `https://debate.example.org`
    fn origin(&self) -> Option<String>;
}

/// Everything read from `window.Telegram.WebApp` and `window.location` in a
/// single pass.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HostSnapshot {
    #[serde(default)]
    pub embedded: bool,
    #[serde(default)]
    pub theme: ThemeParams,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl HostSnapshot {
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ClientError::Host(e.to_string()))
    }
}

// Older WebApp clients only expose themeParams; newer ones also have the
// top-level color properties.
const READ_SCRIPT: &str = r#"
const app = window.Telegram && window.Telegram.WebApp;
const params = (app && app.themeParams) || {};
const user = app && app.initDataUnsafe && app.initDataUnsafe.user;
const pick = (a, b) => a || b || null;
return {
    embedded: !!app,
    theme: {
        bg_color: pick(app && app.backgroundColor, params.bg_color),
        text_color: pick(app && app.textColor, params.text_color),
        button_color: pick(app && app.buttonColor, params.button_color),
        button_text_color: pick(app && app.buttonTextColor, params.button_text_color),
    },
    user_id: user ? user.id : null,
    user_name: user ? (user.first_name || user.username || null) : null,
    origin: window.location.origin,
    path: window.location.pathname,
};
"#;

const READY_SCRIPT: &str = r#"
if (window.Telegram && window.Telegram.WebApp) {
    window.Telegram.WebApp.ready();
}
return null;
"#;

/// Host bridge backed by the Telegram WebApp script object.
///
/// Outside the messaging platform (desktop build, plain browser tab) the
/// snapshot is simply empty and readiness is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct WebAppHost {
    snapshot: HostSnapshot,
}

impl WebAppHost {
    pub async fn connect() -> Result<Self> {
        let value = document::eval(READ_SCRIPT)
            .join::<serde_json::Value>()
            .await
            .map_err(|e| ClientError::Host(format!("Failed to read WebApp state: {:?}", e)))?;
        let snapshot = HostSnapshot::from_json(value)?;

        tracing::info!(
            "Host connected (embedded: {}, user present: {})",
            snapshot.embedded,
            snapshot.user_id.is_some()
        );

        Ok(Self { snapshot })
    }

    /// Host with nothing to report, for when the bridge itself is unavailable
    pub fn detached() -> Self {
        Self {
            snapshot: HostSnapshot::default(),
        }
    }

    pub fn snapshot(&self) -> &HostSnapshot {
        &self.snapshot
    }
}

#[async_trait(?Send)]
impl HostPlatform for WebAppHost {
    async fn signal_ready(&self) -> Result<()> {
        if !self.snapshot.embedded {
            return Ok(());
        }

        document::eval(READY_SCRIPT)
            .join::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(|e| ClientError::Host(format!("WebApp.ready() failed: {:?}", e)))
    }

    fn theme(&self) -> ThemeParams {
        self.snapshot.theme.clone()
    }

    fn current_user(&self) -> Option<UserId> {
        self.snapshot.user_id.clone()
    }

    fn path(&self) -> String {
        self.snapshot.path.clone().unwrap_or_else(|| "/".to_string())
    }

    fn origin(&self) -> Option<String> {
        self.snapshot.origin.clone()
    }
}

/// Reflect an in-app navigation in the address bar.
pub fn push_history(path: &str) {
    let script = format!(
        "try {{ window.history.pushState({{}}, '', {}); }} catch (e) {{}} return null;",
        serde_json::Value::String(path.to_string())
    );
    spawn_script(script);
}

/// Scroll an element to its end once the pending render has landed.
pub fn scroll_to_bottom(element_id: &str) {
    let script = format!(
        "requestAnimationFrame(() => {{ const el = document.getElementById({}); \
         if (el) {{ el.scrollTop = el.scrollHeight; }} }}); return null;",
        serde_json::Value::String(element_id.to_string())
    );
    spawn_script(script);
}

fn spawn_script(script: String) {
    dioxus::prelude::spawn(async move {
        if let Err(e) = document::eval(&script).join::<serde_json::Value>().await {
            tracing::debug!("Script evaluation failed: {:?}", e);
        }
    });
}
