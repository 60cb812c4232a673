use std::fs;
use std::path::Path;

use crate::core::DigestError;
use crate::digest::Digest;

impl Digest {
    /// Pretty-printed JSON, the on-disk debugging format.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::Json` if serialization fails (e.g. a non-finite float).
    pub fn to_json_pretty(&self) -> Result<String, DigestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the digest to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::Io` or `DigestError::Json`.
    pub fn write_snapshot(&self, path: impl AsRef<Path>) -> Result<(), DigestError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json_pretty()?)?;
        tracing::debug!(path = %path.display(), "digest snapshot written");
        Ok(())
    }
}

/// Load a digest previously written with [`Digest::write_snapshot`].
///
/// # Errors
///
/// Returns `DigestError::Io` or `DigestError::Json`.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Digest, DigestError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
