//! Join-table payloads. Ids are taken as submitted; the store decides
//! whether they are acceptable.

use super::Param;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventAssignment {
    pub attendee_id: Param,
    pub event_id: Param,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskAssignment {
    pub attendee_id: Param,
    pub task_id: Param,
}
