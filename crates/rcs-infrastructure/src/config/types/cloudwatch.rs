//! CloudWatch configuration types

use serde::{Deserialize, Serialize};

use crate::constants::MASKED_SECRET;

/// CloudWatch log shipping target and credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudWatchConfig {
    pub aws_access_id: String,
    pub aws_secret_key: String,
    pub aws_session_token: String,
    pub aws_region: String,
    pub log_group: String,
    pub stream_name: String,
    pub debug: bool,
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        MASKED_SECRET.to_string()
    }
}

impl CloudWatchConfig {
    /// Copy with credentials replaced by a placeholder
    pub fn masked(&self) -> Self {
        Self {
            aws_access_id: mask(&self.aws_access_id),
            aws_secret_key: mask(&self.aws_secret_key),
            aws_session_token: mask(&self.aws_session_token),
            ..self.clone()
        }
    }
}
