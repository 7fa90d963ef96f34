use crate::executor::{EndpointRequest, Executor, Submission};
use crate::types::misc::MapList;

/// Map rotation operations.
pub struct Maps<'c> {
    core: &'c Executor,
}

impl<'c> Maps<'c> {
    pub(crate) const fn new(core: &'c Executor) -> Self {
        Self { core }
    }

    /// Retrieves the maps currently in rotation.
    pub fn show_all(&self) -> Submission<MapList> {
        self.core.submit(EndpointRequest::get("map/showall"))
    }
}
