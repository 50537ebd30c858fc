pub mod credential_set;
pub mod error;
pub mod validation;

pub use credential_set::{CredentialEntry, CredentialSet, Source};
pub use error::{Error, Result};
pub use validation::validate_name;
