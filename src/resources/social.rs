use crate::error::map_deser;
use crate::executor::{EndpointRequest, Executor, Payload, Submission};
use crate::types::misc::{EndpointAddress, FriendList, Preferences};

/// Friend list operations.
pub struct Friends<'c> {
    core: &'c Executor,
}

impl<'c> Friends<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves the friends of the logged-in user.
    pub fn show_all(&self) -> Submission<Vec<String>> {
        let request = EndpointRequest::get("friend/showall");
        self.core.submit_with(request, |bytes| {
            let list: FriendList =
                serde_json::from_slice(&bytes).map_err(|err| map_deser(&err, &bytes))?;
            Ok(list.friends)
        })
    }
}

/// Messaging service discovery.
pub struct Messaging<'c> {
    core: &'c Executor,
}

impl<'c> Messaging<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves connection information for the current messaging endpoint.
    pub fn endpoint(&self) -> Submission<EndpointAddress> {
        self.core.submit(EndpointRequest::get("messaging/get_endpoint"))
    }
}

/// Preference operations for the logged-in user.
///
/// The preference schema is open-ended; keys and values travel as explicit
/// JSON (see [`Preferences`]).
pub struct PreferencesApi<'c> {
    core: &'c Executor,
}

impl<'c> PreferencesApi<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves the current preferences.
    pub fn show_all(&self) -> Submission<Preferences> {
        self.core.submit(EndpointRequest::get("preferences/showall"))
    }

    /// Updates the given preference entries and returns the resulting full
    /// preference set.
    pub fn update(&self, changed: &Preferences) -> Submission<Preferences> {
        let payload = match Payload::json(changed) {
            Ok(payload) => payload,
            Err(err) => return Submission::ready(Err(err)),
        };
        self.core
            .submit(EndpointRequest::post("preferences/update", payload))
    }
}
