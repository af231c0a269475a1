//! The client shell: session restore, persistence and the authenticated
//! client.

use std::path::PathBuf;

use tracing::{debug, info};

use seedhub_core::error::AppError;
use seedhub_entity::user::UserView;

use crate::api::ApiClient;
use crate::session::{ClientSession, SessionStore};

/// Owns the current session and an [`ApiClient`] that carries its token.
#[derive(Debug)]
pub struct Shell {
    store: SessionStore,
    session: ClientSession,
    base_url: String,
    client: ApiClient,
}

impl Shell {
    /// Restores the session saved at `session_path` and builds a client for
    /// `base_url` carrying the restored token.
    pub async fn start(session_path: impl Into<PathBuf>, base_url: &str) -> Result<Self, AppError> {
        let store = SessionStore::new(session_path);
        let session = store.load().await?;
        let client = ApiClient::new(base_url, session.token.as_deref())?;

        info!(
            authenticated = session.is_authenticated(),
            path = %store.path().display(),
            "Client session restored"
        );

        Ok(Self {
            store,
            session,
            base_url: base_url.to_string(),
            client,
        })
    }

    /// Current session.
    pub fn session(&self) -> &ClientSession {
        &self.session
    }

    /// Client for the current session.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Stores a new token and profile and rebuilds the client.
    pub async fn sign_in(&mut self, token: String, user: UserView) -> Result<(), AppError> {
        let session = ClientSession {
            token: Some(token),
            user: Some(user),
        };
        self.replace(session).await?;
        debug!("Signed in");
        Ok(())
    }

    /// Replaces the stored profile, keeping the token.
    pub async fn update_profile(&mut self, user: UserView) -> Result<(), AppError> {
        self.session.user = Some(user);
        self.store.save(&self.session).await
    }

    /// Forgets the token and profile.
    pub async fn sign_out(&mut self) -> Result<(), AppError> {
        self.store.clear().await?;
        self.session = ClientSession::default();
        self.client = ApiClient::new(&self.base_url, None)?;
        debug!("Signed out");
        Ok(())
    }

    async fn replace(&mut self, session: ClientSession) -> Result<(), AppError> {
        let client = ApiClient::new(&self.base_url, session.token.as_deref())?;
        self.store.save(&session).await?;
        self.session = session;
        self.client = client;
        Ok(())
    }
}
