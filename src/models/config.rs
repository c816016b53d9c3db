use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level loader configuration.
///
/// Only `meetingFiles` and `councilMembers` are interpreted; every other
/// key is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Ordered list of meeting file identifiers to load.
    #[serde(rename = "meetingFiles")]
    pub meeting_files: Vec<String>,

    /// Council roster. Its length is the expected vote count per motion.
    #[serde(rename = "councilMembers")]
    pub council_members: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Configuration {
    /// Expected number of votes per motion.
    pub fn expected_votes(&self) -> usize {
        self.council_members.len()
    }
}
