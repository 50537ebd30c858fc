pub mod file_store;
pub mod memory_store;

pub use file_store::FileSystemStore;
pub use memory_store::MemoryStore;

use credset_common::{CredentialSet, Result};

/// Keyed persistence for credential sets.
///
/// `read` and `delete` return [`credset_common::Error::NotFound`] for unknown names.
/// `write` replaces any record with the same name.
pub trait CredentialSetStore {
    fn read(&self, name: &str) -> Result<CredentialSet>;

    fn write(&self, set: &CredentialSet) -> Result<()>;

    /// All records, in the backend's natural order.
    fn list(&self) -> Result<Vec<CredentialSet>>;

    fn delete(&self, name: &str) -> Result<()>;
}

impl<S: CredentialSetStore + ?Sized> CredentialSetStore for &S {
    fn read(&self, name: &str) -> Result<CredentialSet> {
        (**self).read(name)
    }

    fn write(&self, set: &CredentialSet) -> Result<()> {
        (**self).write(set)
    }

    fn list(&self) -> Result<Vec<CredentialSet>> {
        (**self).list()
    }

    fn delete(&self, name: &str) -> Result<()> {
        (**self).delete(name)
    }
}
