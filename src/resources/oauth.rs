use crate::executor::{EndpointRequest, Executor, Submission};
use crate::types::login::LoginResult;

/// OAuth operations for the connection's own access token.
pub struct OAuth<'c> {
    core: &'c Executor,
}

impl<'c> OAuth<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Re-retrieves information about the current token.
    pub fn verify_credentials(&self) -> Submission<LoginResult> {
        self.core
            .submit(EndpointRequest::get("verify_credentials").on_oauth())
    }

    /// Revokes the current access token.
    ///
    /// On success the connection is scheduled for graceful shutdown: no new
    /// work is accepted, while in-flight work runs to completion. On failure
    /// the connection stays open; in particular a native-scoped token cannot
    /// revoke itself and yields a 405 classified error.
    pub fn revoke(&self) -> Submission<()> {
        let gate = self.core.shutdown_handle();
        let request = EndpointRequest::get("revoke").on_oauth();
        self.core.submit_with(request, move |_bytes| {
            gate.shutdown();
            Ok(())
        })
    }
}
