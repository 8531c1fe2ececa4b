use serde::{Deserialize, Serialize};

/// A stored quote. Also the item shape of `GET /api/quotes`, which never
/// exposes the storage identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}
