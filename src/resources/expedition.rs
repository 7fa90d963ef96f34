use crate::executor::{EndpointRequest, Executor, Payload, Submission};
use crate::types::expedition::ExpeditionList;

/// Shardfall expedition operations.
pub struct Expeditions<'c> {
    core: &'c Executor,
}

impl<'c> Expeditions<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves the normal shardfalls currently available to the logged-in
    /// user.
    pub fn show_all(&self) -> Submission<ExpeditionList> {
        self.core.submit(EndpointRequest::get("expedition/showall"))
    }

    /// Retrieves the Twitch integration shardfalls currently available to
    /// the logged-in user.
    ///
    /// `prior` lists expedition ids already seen, which the server excludes
    /// from the reply.
    pub fn twitch(&self, prior: &[String]) -> Submission<ExpeditionList> {
        let body = serde_json::json!({ "prior_twitch_expedition_list": prior });
        let payload = match Payload::json(&body) {
            Ok(payload) => payload,
            Err(err) => return Submission::ready(Err(err)),
        };
        self.core
            .submit(EndpointRequest::post("expedition/show/twitch", payload))
    }
}
