use credset_common::{Result, Source};

/// Supplies a source for each credential while generating a set.
pub trait SourcePrompt {
    fn source_for(&mut self, credential: &str) -> Result<Source>;
}

/// Non-interactive prompt: every credential gets a placeholder literal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPrompt;

pub const PLACEHOLDER_VALUE: &str = "TODO";

impl SourcePrompt for SilentPrompt {
    fn source_for(&mut self, _credential: &str) -> Result<Source> {
        Ok(Source::Value(PLACEHOLDER_VALUE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_prompt_uses_placeholder() {
        let source = SilentPrompt.source_for("kubeconfig").unwrap();
        assert_eq!(source, Source::Value("TODO".into()));
    }
}
