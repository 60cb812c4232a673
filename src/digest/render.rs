use crate::core::DigestError;
use crate::digest::Digest;

/// Rendering collaborator: turns a finished digest into a document (e.g. email HTML).
///
/// Its output is opaque to this crate.
pub trait DigestRenderer {
    /// # Errors
    ///
    /// Implementations report failures as [`DigestError::Render`] or any other variant.
    fn render(&self, digest: &Digest) -> Result<String, DigestError>;
}

impl<F> DigestRenderer for F
where
    F: Fn(&Digest) -> Result<String, DigestError>,
{
    fn render(&self, digest: &Digest) -> Result<String, DigestError> {
        self(digest)
    }
}

/// Hand `digest` to `renderer`. Failures are logged with context and returned unchanged.
///
/// # Errors
///
/// Whatever the renderer returns.
pub fn render_digest<R>(renderer: &R, digest: &Digest) -> Result<String, DigestError>
where
    R: DigestRenderer + ?Sized,
{
    renderer.render(digest).inspect_err(|e| {
        tracing::error!(
            generated_at = %digest.generated_at,
            quotes = digest.quotes.len(),
            heroes = digest.heroes.total(),
            error = %e,
            "digest rendering failed"
        );
    })
}
