use crate::config::ConnectionConfig;
use crate::error::RequestError;
use crate::executor::Executor;
use crate::resources::deck::{AuthorizedDecks, Decks};
use crate::resources::expedition::Expeditions;
use crate::resources::house::Houses;
use crate::resources::maps::Maps;
use crate::resources::oauth::OAuth;
use crate::resources::social::{Friends, Messaging, PreferencesApi};
use crate::resources::user::{AuthorizedUsers, Users};

/// The suite of operations available to public-scoped access tokens.
///
/// Calls are rate limited and executed asynchronously on a shared worker
/// pool; remember to [`close`](Self::close) the connection once it is no
/// longer required.
#[derive(Debug)]
pub struct PublicApiConnection {
    core: Executor,
    config: ConnectionConfig,
}

impl PublicApiConnection {
    /// Opens a public-scoped connection with the given access token.
    ///
    /// Performs no network I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a legal header value or the
    /// HTTP client cannot be constructed.
    pub fn new(config: ConnectionConfig, access_token: &str) -> Result<Self, RequestError> {
        let core = Executor::new(&config, Some(access_token))?;
        Ok(Self { core, config })
    }

    /// User operations.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(&self.core)
    }

    /// Deck operations.
    #[must_use]
    pub const fn decks(&self) -> Decks<'_> {
        Decks::new(&self.core)
    }

    /// OAuth operations (token verification and revocation).
    #[must_use]
    pub const fn oauth(&self) -> OAuth<'_> {
        OAuth::new(&self.core)
    }

    /// The execution core, for submitting requests to endpoints this crate
    /// has no wrapper for.
    #[must_use]
    pub const fn core(&self) -> &Executor {
        &self.core
    }

    /// The connection parameters this connection was built with.
    #[must_use]
    pub const fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Forcibly closes the connection. Idempotent; see [`Executor::close`].
    pub fn close(&self) {
        self.core.close();
    }

    /// Whether the connection no longer accepts submissions.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.core.is_closed()
    }
}

/// The full range of operations available to a real (native-scoped) client.
///
/// As with [`PublicApiConnection`], calls are rate limited and executed
/// asynchronously; the two tiers share one execution core design and differ
/// only in the operation set they expose.
#[derive(Debug)]
pub struct AuthorizedApiConnection {
    core: Executor,
    config: ConnectionConfig,
}

impl AuthorizedApiConnection {
    /// Opens a native-scoped connection with the given access token.
    ///
    /// Performs no network I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a legal header value or the
    /// HTTP client cannot be constructed.
    pub fn new(config: ConnectionConfig, access_token: &str) -> Result<Self, RequestError> {
        let core = Executor::new(&config, Some(access_token))?;
        Ok(Self { core, config })
    }

    /// User operations, including private information about the logged-in
    /// user.
    #[must_use]
    pub const fn users(&self) -> AuthorizedUsers<'_> {
        AuthorizedUsers::new(&self.core)
    }

    /// Deck operations, including the logged-in user's own decks.
    #[must_use]
    pub const fn decks(&self) -> AuthorizedDecks<'_> {
        AuthorizedDecks::new(&self.core)
    }

    /// House operations.
    #[must_use]
    pub const fn houses(&self) -> Houses<'_> {
        Houses::new(&self.core)
    }

    /// Shardfall expedition operations.
    #[must_use]
    pub const fn expeditions(&self) -> Expeditions<'_> {
        Expeditions::new(&self.core)
    }

    /// Friend list operations.
    #[must_use]
    pub const fn friends(&self) -> Friends<'_> {
        Friends::new(&self.core)
    }

    /// Messaging service discovery.
    #[must_use]
    pub const fn messaging(&self) -> Messaging<'_> {
        Messaging::new(&self.core)
    }

    /// Preference operations for the logged-in user.
    #[must_use]
    pub const fn preferences(&self) -> PreferencesApi<'_> {
        PreferencesApi::new(&self.core)
    }

    /// Map rotation operations.
    #[must_use]
    pub const fn maps(&self) -> Maps<'_> {
        Maps::new(&self.core)
    }

    /// OAuth operations (token verification and revocation).
    #[must_use]
    pub const fn oauth(&self) -> OAuth<'_> {
        OAuth::new(&self.core)
    }

    /// The execution core, for submitting requests to endpoints this crate
    /// has no wrapper for.
    #[must_use]
    pub const fn core(&self) -> &Executor {
        &self.core
    }

    /// The connection parameters this connection was built with.
    #[must_use]
    pub const fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Forcibly closes the connection. Idempotent; see [`Executor::close`].
    pub fn close(&self) {
        self.core.close();
    }

    /// Whether the connection no longer accepts submissions.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.core.is_closed()
    }
}
