use crate::error::AppError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const REPORT_FILE_NAME: &str = "phishing_report.pdf";

/// Writes the report into `dir` as [`REPORT_FILE_NAME`].
///
/// The bytes land in a temporary file first and are renamed into place, so a
/// failed write never leaves a truncated report behind. The temporary file is
/// removed on every error path when it is dropped.
pub fn save_report(bytes: &[u8], dir: &Path) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(dir)?;

    let mut staged = tempfile::Builder::new()
        .prefix(".phishing_report")
        .suffix(".part")
        .tempfile_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;

    let target = dir.join(REPORT_FILE_NAME);
    staged.persist(&target)?;

    info!("Saved report ({} bytes) to {}", bytes.len(), target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_replaces_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(REPORT_FILE_NAME), b"old").unwrap();

        let path = save_report(b"%PDF-1.4 new", dir.path()).unwrap();
        assert_eq!(path, dir.path().join(REPORT_FILE_NAME));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 new");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name() != REPORT_FILE_NAME)
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn missing_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("downloads").join("reports");
        let path = save_report(b"%PDF", &nested).unwrap();
        assert!(path.starts_with(&nested));
    }
}
