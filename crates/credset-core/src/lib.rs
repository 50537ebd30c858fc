pub mod bundle;
pub mod manager;
pub mod options;
pub mod prompt;
pub mod render;
pub mod source;

pub use credset_common::validate_name;
pub use bundle::{BundleManifest, BundleRequirements, CredentialRequirement};
pub use manager::CredentialManager;
pub use options::{DeleteOptions, GenerateOptions, ListOptions, ShowOptions};
pub use prompt::{SilentPrompt, SourcePrompt};
pub use render::{OutputFormat, render_list, render_show};
pub use source::classify;
