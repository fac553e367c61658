//! The Rewriter: read one component file, run the transform pipeline, and
//! write the result back only if it changed.
//!
//! One invocation is one isolated read-transform-write cycle: at most one
//! read and one write, no state shared with other invocations. Callers that
//! need to process many files run the binary once per path.

mod error;
mod names;
mod passes;

pub use error::RewriteError;
pub use passes::transform;

use std::fs;
use std::path::Path;

use crate::{debug, log};

/// Outcome of one rewrite invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteStatus {
    /// The file was transformed and overwritten.
    Changed,
    /// The file already contained no recognized animation constructs.
    Unchanged,
}

/// Rewrite `path` in place and report a one-line status.
pub fn rewrite_file(path: &Path) -> Result<RewriteStatus, RewriteError> {
    let source =
        fs::read_to_string(path).map_err(|e| RewriteError::Read(path.to_path_buf(), e))?;

    let output = transform(&source);
    debug!("rewrite"; "{} bytes in, {} bytes out", source.len(), output.len());

    let name = base_name(path);
    if output == source {
        log!("rewrite"; "no changes needed {name}");
        return Ok(RewriteStatus::Unchanged);
    }

    // Whole-file replace; the original is untouched unless this succeeds.
    write_output(path, &output)?;
    log!("rewrite"; "changed {name}");
    Ok(RewriteStatus::Changed)
}

/// Whole-file replacement write.
fn write_output(path: &Path, text: &str) -> Result<(), RewriteError> {
    fs::write(path, text).map_err(|e| RewriteError::Write(path.to_path_buf(), e))
}

/// Base name for status lines, falling back to the full path display.
fn base_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_rewrite_changed_file() {
        let file = write_temp(
            "import { motion } from 'framer-motion';\n<motion.div animate={{ x: 1 }}>a</motion.div>\n",
        );
        let status = rewrite_file(file.path()).unwrap();
        assert_eq!(status, RewriteStatus::Changed);

        let on_disk = fs::read_to_string(file.path()).unwrap();
        assert_eq!(on_disk, "<div>a</div>\n");
    }

    #[test]
    fn test_clean_file_is_not_rewritten() {
        let file = write_temp("<div className=\"x\">hi</div>\n");
        let mtime_before = fs::metadata(file.path()).unwrap().modified().unwrap();

        let status = rewrite_file(file.path()).unwrap();
        assert_eq!(status, RewriteStatus::Unchanged);

        // no write happened, so the modification time cannot have moved
        let mtime_after = fs::metadata(file.path()).unwrap().modified().unwrap();
        assert_eq!(mtime_before, mtime_after);
    }

    #[test]
    fn test_second_run_is_noop() {
        let file = write_temp(
            "<AnimatePresence mode=\"wait\">\n<motion.span exit={{ y: 5 }}>s</motion.span>\n</AnimatePresence>\n",
        );
        assert_eq!(rewrite_file(file.path()).unwrap(), RewriteStatus::Changed);
        assert_eq!(rewrite_file(file.path()).unwrap(), RewriteStatus::Unchanged);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = rewrite_file(Path::new("/nonexistent/App.tsx")).unwrap_err();
        assert!(matches!(err, RewriteError::Read(..)));
    }

    #[test]
    fn test_unwritable_target_is_write_error() {
        // a directory can never take a whole-file replacement write
        let dir = tempfile::tempdir().unwrap();
        let err = write_output(dir.path(), "<div>a</div>\n").unwrap_err();
        assert!(matches!(err, RewriteError::Write(..)));
    }
}
