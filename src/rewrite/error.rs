//! Rewriter error types.

use std::path::PathBuf;
use thiserror::Error;

/// File-access errors raised by one rewrite invocation.
///
/// Either variant is fatal for the invocation: the original file content has
/// not been altered at the point a read fails, and a write failure leaves the
/// file as it was since the replacement is a single whole-file write.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}
