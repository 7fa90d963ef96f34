use crate::error::map_deser;
use crate::executor::{EndpointRequest, Executor, Submission};
use crate::resources::enc;
use crate::types::house::{House, Island};
use crate::types::misc::InviteList;

/// House operations.
pub struct Houses<'c> {
    core: &'c Executor,
}

impl<'c> Houses<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves the house with the specified id.
    ///
    /// `include_members` controls whether the member list is part of the
    /// reply.
    pub fn show(&self, house_id: &str, include_members: bool) -> Submission<House> {
        let mut path = format!("house/show/{}", enc(house_id));
        if include_members {
            path.push_str("?include_members");
        }
        self.core.submit(EndpointRequest::get(path))
    }

    /// Retrieves display information about the specified house's island.
    pub fn island(&self, house_id: &str) -> Submission<Island> {
        self.core.submit(EndpointRequest::get(format!(
            "house/show_island/{}",
            enc(house_id)
        )))
    }

    /// Retrieves pending house invites for the logged-in user.
    pub fn pending_invites(&self) -> Submission<Vec<serde_json::Value>> {
        let request = EndpointRequest::get("house/pending_invites/show");
        self.core.submit_with(request, |bytes| {
            let list: InviteList =
                serde_json::from_slice(&bytes).map_err(|err| map_deser(&err, &bytes))?;
            Ok(list.invites)
        })
    }
}
