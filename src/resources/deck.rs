use crate::executor::{EndpointRequest, Executor, Submission};
use crate::resources::enc;
use crate::types::deck::DeckList;

/// Deck operations available to public-scoped tokens.
pub struct Decks<'c> {
    core: &'c Executor,
}

impl<'c> Decks<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves all decks used by the specified user.
    pub fn show_all_for(&self, user_id: &str) -> Submission<DeckList> {
        self.core
            .submit(EndpointRequest::get(format!("deck/showall/{}", enc(user_id))))
    }
}

/// Deck operations available to native-scoped tokens: everything public,
/// plus the logged-in user's own decks.
pub struct AuthorizedDecks<'c> {
    inner: Decks<'c>,
}

impl<'c> AuthorizedDecks<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self {
            inner: Decks::new(core),
        }
    }

    /// Retrieves all decks used by the specified user.
    pub fn show_all_for(&self, user_id: &str) -> Submission<DeckList> {
        self.inner.show_all_for(user_id)
    }

    /// Retrieves the decks of the logged-in user.
    pub fn show_all(&self) -> Submission<DeckList> {
        self.inner.core.submit(EndpointRequest::get("deck/showall"))
    }
}
