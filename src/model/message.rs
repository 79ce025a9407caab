use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::FolderId;
use super::role::UserRole;

/// A message posted on a folder's thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub folder_id: FolderId,
    pub author: UserRole,
    pub sent_at: DateTime<Utc>,
    pub body: String,
}

impl Message {
    pub fn new(
        folder_id: impl Into<FolderId>,
        author: UserRole,
        sent_at: DateTime<Utc>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            folder_id: folder_id.into(),
            author,
            sent_at,
            body: body.into(),
        }
    }
}

/// Messages for one folder, oldest first.
pub fn thread<'a>(messages: &'a [Message], folder_id: &FolderId) -> Vec<&'a Message> {
    let mut out: Vec<&Message> = messages
        .iter()
        .filter(|m| &m.folder_id == folder_id)
        .collect();
    out.sort_by_key(|m| m.sent_at);
    out
}
