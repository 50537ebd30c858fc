use credset_common::{Error, Result, Source};
use credset_core::SourcePrompt;
use dialoguer::{Input, Select};

const KINDS: [&str; 4] = [
    "specific value",
    "environment variable",
    "file path",
    "shell command",
];

/// Terminal prompt asking how each credential should be sourced.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl SourcePrompt for DialoguerPrompt {
    fn source_for(&mut self, credential: &str) -> Result<Source> {
        let kind = Select::new()
            .with_prompt(format!("How would you like to set credential {credential:?}"))
            .items(&KINDS)
            .default(0)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        let question = match kind {
            0 => "Enter the value that will be used",
            1 => "Enter the environment variable that will be used",
            2 => "Enter the path that will be used",
            _ => "Enter the command that will be used",
        };
        let payload = Input::<String>::new()
            .with_prompt(format!("{question} to set credential {credential:?}"))
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        Ok(match kind {
            0 => Source::Value(payload),
            1 => Source::EnvVar(payload),
            2 => Source::Path(payload),
            _ => Source::Command(payload),
        })
    }
}
