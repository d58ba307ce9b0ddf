#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing required account: {role}")]
    MissingRequiredAccount { role: &'static str },

    #[error("unknown account role: {role}")]
    UnknownAccountRole { role: String },

    #[error("invalid input for account {role}: {reason}")]
    InvalidAccountInput { role: &'static str, reason: String },

    #[error("malformed accounts object: {reason}")]
    MalformedAccounts { reason: String },

    #[error("invalid address {value:?}: {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("unknown program {name:?} in registry config (expected one of: {known})")]
    UnknownProgram { name: String, known: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
