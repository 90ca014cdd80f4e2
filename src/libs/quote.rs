use serde::{Deserialize, Serialize};

/// A motivational quote as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

impl Quote {
    pub fn new(content: &str, author: &str) -> Self {
        Self {
            content: content.to_string(),
            author: author.to_string(),
        }
    }
}
