use crate::error::Result;

/// Abstract interface for raw blob I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `EntryStore` handles the "what" (uniqueness, rollback, recovery).
pub trait StorageBackend {
    /// Read a blob by key.
    /// Returns Ok(None) if the blob does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace a blob wholesale.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, blob: &str) -> Result<()>;

    /// Human-readable location of a blob, for messages and logs.
    fn location(&self, key: &str) -> String;
}
