use chrono::{DateTime, FixedOffset, Local};
use credset_common::{CredentialEntry, CredentialSet, Error, Result, validate_name};
use credset_store::CredentialSetStore;
use std::io::Write;
use tracing::{debug, info};

use crate::bundle::BundleRequirements;
use crate::options::{DeleteOptions, GenerateOptions, ListOptions, ShowOptions};
use crate::prompt::{SilentPrompt, SourcePrompt};
use crate::render::{render_list, render_show};

pub const SHOW_NOT_FOUND: &str = "Credential set does not exist";
pub const DELETE_NOT_FOUND: &str = "credential set does not exist";

/// Time source for record timestamps.
pub type Clock = fn() -> DateTime<FixedOffset>;

fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Generate, list, show and delete credential sets against a store.
///
/// The store and output sink are supplied by the caller; the manager holds no
/// other state.
pub struct CredentialManager<S> {
    store: S,
    clock: Clock,
}

impl<S: CredentialSetStore> CredentialManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: local_now,
        }
    }

    /// Replace the time source used for `created`/`modified`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create or regenerate a credential set for `bundle`.
    ///
    /// A new set gets `created == modified`. Regenerating keeps `created`,
    /// replaces every entry and bumps `modified`. Nothing is written when the
    /// name is invalid or the prompt fails.
    pub fn generate(
        &self,
        opts: &GenerateOptions,
        bundle: &dyn BundleRequirements,
        prompt: &mut dyn SourcePrompt,
    ) -> Result<CredentialSet> {
        let name = if opts.name.is_empty() {
            bundle.name()
        } else {
            opts.name.as_str()
        };
        validate_name(name)?;

        let now = (self.clock)();
        let existing = match self.store.read(name) {
            Ok(set) => Some(set),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        let mut silent = SilentPrompt;
        let prompt: &mut dyn SourcePrompt = if opts.silent { &mut silent } else { prompt };

        let mut credentials = Vec::new();
        for credential in bundle.credential_names() {
            let source = prompt.source_for(&credential)?;
            credentials.push(CredentialEntry::new(credential, source));
        }

        let set = match existing {
            Some(mut set) => {
                debug!("regenerating existing credential set '{name}'");
                set.regenerate(credentials, now);
                set
            }
            None => CredentialSet::new(name, credentials, now),
        };

        self.store.write(&set)?;
        info!(
            "generated credential set '{}' with {} credential(s)",
            set.name,
            set.credentials.len()
        );
        Ok(set)
    }

    /// Render every stored set. An empty store renders an empty collection.
    pub fn list(&self, opts: &ListOptions, out: &mut dyn Write) -> Result<()> {
        let sets = self.store.list()?;
        debug!("listing {} credential set(s)", sets.len());
        render_list(&sets, opts.format, out)
    }

    pub fn show(&self, opts: &ShowOptions, out: &mut dyn Write) -> Result<()> {
        let set = self
            .store
            .read(&opts.name)
            .map_err(|e| not_found_as(e, SHOW_NOT_FOUND))?;
        render_show(&set, opts.format, out)
    }

    /// Remove a set. Writes nothing on success.
    pub fn delete(&self, opts: &DeleteOptions) -> Result<()> {
        self.store
            .delete(&opts.name)
            .map_err(|e| not_found_as(e, DELETE_NOT_FOUND))?;
        info!("deleted credential set '{}'", opts.name);
        Ok(())
    }
}

fn not_found_as(err: Error, message: &str) -> Error {
    if err.is_not_found() {
        Error::NotFound(message.to_string())
    } else {
        err
    }
}
