use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::{pages, template};

/// Writes the placeholder pages into a target directory, one file per
/// entry in [`pages::PAGES`]. Existing files are overwritten; rerunning
/// the scaffold is intentionally idempotent.
pub struct WikiScaffolder {
    target: PathBuf,
}

impl WikiScaffolder {
    pub fn new(target: impl AsRef<Path>) -> Self {
        Self {
            target: target.as_ref().to_path_buf(),
        }
    }

    /// Render and write a single page, creating or overwriting the file.
    pub fn write_page(&self, page: &str) -> Result<PathBuf> {
        let path = self.target.join(page);
        let content = template::render(page);
        std::fs::write(&path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(page, bytes = content.len(), "wrote placeholder page");
        Ok(path)
    }

    /// Write every page, in order. The first failed write aborts the
    /// run; pages already written stay on disk.
    pub fn scaffold_all(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(pages::PAGES.len());
        for page in pages::PAGES {
            written.push(self.write_page(page)?);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_every_page() {
        let tmp = TempDir::new().unwrap();
        let written = WikiScaffolder::new(tmp.path()).scaffold_all().unwrap();

        assert_eq!(written.len(), pages::PAGES.len());
        for page in pages::PAGES {
            assert!(tmp.path().join(page).is_file());
        }
    }

    #[test]
    fn title_lands_in_content() {
        let tmp = TempDir::new().unwrap();
        let path = WikiScaffolder::new(tmp.path())
            .write_page("Guide-LangChain.md")
            .unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Guide LangChain\n"));
    }

    #[test]
    fn rerun_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let scaffolder = WikiScaffolder::new(tmp.path());

        scaffolder.scaffold_all().unwrap();
        let first = std::fs::read(tmp.path().join("Home.md")).unwrap();
        scaffolder.scaffold_all().unwrap();
        let second = std::fs::read(tmp.path().join("Home.md")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn failed_write_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");

        let err = WikiScaffolder::new(&missing)
            .write_page("Home.md")
            .unwrap_err();
        assert!(err.to_string().contains("Home.md"));
    }
}
