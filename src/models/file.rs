use serde::{Deserialize, Serialize};

/// Reply to an image upload; `uri` goes straight into `profileImage`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileUploadResponse {
    pub uri: String,
}
