use crate::error::map_deser;
use crate::executor::{EndpointRequest, Executor, Submission};
use crate::resources::enc;
use crate::types::game::{Game, GameList};
use crate::types::user::{PrivateData, User, WelcomeMessage};

/// User operations available to public-scoped tokens.
pub struct Users<'c> {
    core: &'c Executor,
}

impl<'c> Users<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves information about the specified user.
    pub fn show(&self, user_id: &str) -> Submission<User> {
        self.core
            .submit(EndpointRequest::get(format!("user/show/{}", enc(user_id))))
    }

    /// Retrieves the match history of the specified user.
    pub fn match_history(&self, user_id: &str) -> Submission<Vec<Game>> {
        let request = EndpointRequest::get(format!("user/history/show/{}", enc(user_id)));
        self.core.submit_with(request, |bytes| {
            let list: GameList =
                serde_json::from_slice(&bytes).map_err(|err| map_deser(&err, &bytes))?;
            Ok(list.games)
        })
    }
}

/// User operations available to native-scoped tokens: everything public,
/// plus private information about the logged-in user.
pub struct AuthorizedUsers<'c> {
    inner: Users<'c>,
}

impl<'c> AuthorizedUsers<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self {
            inner: Users::new(core),
        }
    }

    /// Retrieves information about the specified user.
    pub fn show(&self, user_id: &str) -> Submission<User> {
        self.inner.show(user_id)
    }

    /// Retrieves the match history of the specified user.
    pub fn match_history(&self, user_id: &str) -> Submission<Vec<Game>> {
        self.inner.match_history(user_id)
    }

    /// Retrieves private information about the logged-in user.
    pub fn show_private(&self) -> Submission<PrivateData> {
        self.inner.core.submit(EndpointRequest::get("user/show_private"))
    }

    /// Retrieves the welcome message shown when first logging in.
    pub fn welcome(&self) -> Submission<WelcomeMessage> {
        self.inner.core.submit(EndpointRequest::get("user/welcome"))
    }
}
