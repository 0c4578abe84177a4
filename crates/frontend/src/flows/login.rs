//! Login: `Idle -> Submitting -> {Authenticated, Failed}`

use cachorro_core::{Credentials, Navigator, Route, TokenStore};
use cachorro_http::ApiClient;
use std::rc::Rc;

/// The only error the login page ever shows
pub const LOGIN_ERROR_MESSAGE: &str = "Usuário ou senha inválidos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Authenticated,
    /// Form keeps its values; the next submission starts over
    Failed(&'static str),
}

impl LoginState {
    pub const fn error(self) -> Option<&'static str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct LoginFlow {
    client: ApiClient,
    store: TokenStore,
    navigator: Rc<dyn Navigator>,
}

impl LoginFlow {
    pub fn new(client: ApiClient, store: TokenStore, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            client,
            store,
            navigator,
        }
    }

    /// Exchange the credentials for tokens, store them and open the dashboard.
    ///
    /// Returns the state the form should settle in. Every failure, whatever
    /// its cause, yields the same static message and leaves storage untouched.
    pub async fn submit(&self, credentials: Credentials) -> LoginState {
        if !credentials.is_complete() {
            tracing::debug!("Login submitted with an empty field");
            return LoginState::Failed(LOGIN_ERROR_MESSAGE);
        }

        let tokens = match self.client.obtain_token(&credentials).await {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::warn!(error = %err, status = ?err.status(), "Login rejected");
                return LoginState::Failed(LOGIN_ERROR_MESSAGE);
            }
        };

        if let Err(err) = self.store.set(&tokens) {
            tracing::error!(error = %err, "Could not persist session tokens");
            return LoginState::Failed(LOGIN_ERROR_MESSAGE);
        }

        tracing::info!(username = %credentials.username, "Logged in");
        self.navigator.navigate(Route::Dashboard);
        LoginState::Authenticated
    }
}
