use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::document::Document;

/// Configuration for document loading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Number of documents read concurrently
    pub concurrency: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            concurrency: 8,
        }
    }
}

/// Outcome of loading one document
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub document: Option<Document>,
    pub bytes_read: u64,
    pub read_error: Option<String>,
}

/// Async reader for JSON-serialized document trees
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read and parse one document
    pub async fn read_document<P: AsRef<Path>>(&self, path: P) -> Result<(Document, u64)> {
        let path = path.as_ref();
        debug!("Starting async read of document: {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read document {}", path.display()))?;
        let document = Document::from_json_str(&content)
            .with_context(|| format!("Invalid document {}", path.display()))?;

        debug!(
            "Loaded {}: {} top-level nodes, {} bytes",
            path.display(),
            document.children.len(),
            content.len()
        );
        Ok((document, content.len() as u64))
    }

    /// Load several documents concurrently, preserving input order
    pub async fn read_documents_batch<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<LoadedDocument>> {
        info!("Starting batch read of {} documents", paths.len());

        let outcomes: Vec<(PathBuf, Result<(Document, u64)>)> = stream::iter(paths)
            .map(|path| async move {
                let path = path.as_ref().to_path_buf();
                let outcome = self.read_document(&path).await;
                (path, outcome)
            })
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let mut results = Vec::with_capacity(outcomes.len());
        for (path, outcome) in outcomes {
            match outcome {
                Ok((document, bytes_read)) => results.push(LoadedDocument {
                    path,
                    document: Some(document),
                    bytes_read,
                    read_error: None,
                }),
                Err(e) => {
                    if self.config.fail_fast {
                        return Err(e);
                    }
                    warn!("Failed to load document {}: {:#}", path.display(), e);
                    results.push(LoadedDocument {
                        path,
                        document: None,
                        bytes_read: 0,
                        read_error: Some(format!("{e:#}")),
                    });
                }
            }
        }

        info!("Completed batch read of {} documents", results.len());
        Ok(results)
    }
}

/// Convenience function for reading a single document with default configuration
pub async fn read_document_async<P: AsRef<Path>>(path: P) -> Result<Document> {
    let reader = DocumentReader::new(ReaderConfig::default());
    let (document, _bytes) = reader.read_document(path).await?;
    Ok(document)
}
