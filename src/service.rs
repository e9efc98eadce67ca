//! Info greeting service.

use crate::config::{ServiceConfig, OWNER_PLACEHOLDER};

/// Builds the informational greeting returned by `GET /info`.
///
/// The greeting always names the configured owner, which is how clients
/// identify which service answered.
#[derive(Debug, Clone)]
pub struct InfoService {
    message: String,
}

impl InfoService {
    pub fn new(config: &ServiceConfig) -> Self {
        let owner = config.owner.trim();
        let message = match config.greeting.as_deref() {
            Some(template) if template.contains(OWNER_PLACEHOLDER) => {
                template.replace(OWNER_PLACEHOLDER, owner)
            }
            Some(template) if template.contains(owner) => template.to_string(),
            Some(template) => format!("{} ({})", template.trim_end(), owner),
            None => format!("Hello! This is {}'s service.", owner),
        };

        Self { message }
    }

    pub fn info(&self) -> String {
        self.message.clone()
    }
}

impl Default for InfoService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}
