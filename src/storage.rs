//! Storage helpers for raw results pages on disk.

use std::io;
use std::path::Path;

use scraper::Html;
use tracing::info;

/// Write a results page to `path`, creating parent directories.
pub async fn save_page(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, text).await?;
    info!("Saved {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Read a saved results page. The file must be UTF-8.
pub async fn load_page(path: &Path) -> io::Result<String> {
    let text = tokio::fs::read_to_string(path).await?;
    info!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Read and parse a saved results page.
pub async fn load_document(path: &Path) -> io::Result<Html> {
    let text = load_page(path).await?;
    Ok(Html::parse_document(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn save_then_load() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("pages").join("inspection_page.html");

        save_page(&path, "<html>caf\u{e9}</html>").await.expect("save");
        assert_eq!(load_page(&path).await.expect("load"), "<html>caf\u{e9}</html>");
    }

    #[tokio::test]
    async fn load_missing_file_fails() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_page(&dir.path().join("missing.html")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn load_rejects_invalid_utf8() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("latin1.html");
        std::fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).expect("write");
        let err = load_page(&path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn load_document_parses() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("page.html");
        save_page(&path, r#"<div id="PR1~"></div>"#).await.expect("save");

        let document = load_document(&path).await.expect("load");
        let listings = crate::extract::select_listings(
            document.root_element(),
            &crate::extract::ListingPattern::default(),
        );
        assert_eq!(listings.len(), 1);
    }
}
