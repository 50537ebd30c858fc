use credset_common::Result;

use crate::render::OutputFormat;

/// Options for generating a credential set from a bundle.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Target set name. Empty means "use the bundle name".
    pub name: String,
    /// Skip prompting and fill every source with a placeholder.
    pub silent: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub format: OutputFormat,
}

impl ListOptions {
    pub fn new(raw_format: &str) -> Result<Self> {
        Ok(Self {
            format: raw_format.parse()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ShowOptions {
    /// Set name exactly as the caller typed it.
    pub name: String,
    pub format: OutputFormat,
}

impl ShowOptions {
    pub fn new(name: impl Into<String>, raw_format: &str) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            format: raw_format.parse()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DeleteOptions {
    pub name: String,
}

impl DeleteOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
