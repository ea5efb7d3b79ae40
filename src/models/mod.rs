pub mod job;
pub mod user;

use std::fmt;

use serde::de::DeserializeOwned;

/// Closed tag selecting which record kind an operation targets. The variant
/// names double as the remote resource names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    Job,
    User,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Job => "job",
            ModelType::User => "user",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record kind served by the remote service.
pub trait Entity: DeserializeOwned + Clone + Send + Sync + 'static {
    const MODEL: ModelType;

    /// Server-assigned identifier, `None` until the record has been created.
    fn id(&self) -> Option<i64>;
}
