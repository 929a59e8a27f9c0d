// WHY: machine-readable run summary for pipelines invoking the CLI
// One entry per document plus totals, written as pretty JSON

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Per-document check outcome
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Document path as given on the command line
    pub path: String,
    /// Number of top-level headers inspected
    pub headers_checked: usize,
    /// Check status (ok, duplicates, failed)
    pub status: String,
    /// Sorted representative names of duplicated headers
    pub duplicates: Vec<String>,
    /// Error message if the document could not be checked or had duplicates
    pub error: Option<String>,
}

impl DocumentReport {
    pub fn ok(path: impl Into<String>, headers_checked: usize) -> Self {
        Self {
            path: path.into(),
            headers_checked,
            status: "ok".to_string(),
            duplicates: Vec::new(),
            error: None,
        }
    }

    pub fn duplicates(
        path: impl Into<String>,
        headers_checked: usize,
        duplicates: Vec<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            headers_checked,
            status: "duplicates".to_string(),
            duplicates,
            error: Some(message.into()),
        }
    }

    pub fn failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers_checked: 0,
            status: "failed".to_string(),
            duplicates: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Summary of one CLI run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub documents: Vec<DocumentReport>,
    pub documents_checked: usize,
    pub documents_failed: usize,
}

impl RunReport {
    pub fn push(&mut self, report: DocumentReport) {
        self.documents_checked += 1;
        if !report.is_ok() {
            self.documents_failed += 1;
        }
        self.documents.push(report);
    }
}

/// Write the run report as pretty JSON
pub async fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.write_all(b"\n").await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_report_counts() {
        let mut report = RunReport::default();
        report.push(DocumentReport::ok("a.json", 3));
        report.push(DocumentReport::duplicates(
            "b.json",
            2,
            vec!["NAME".to_string()],
            "Error: The following headers appear multiple times: 'NAME'",
        ));
        report.push(DocumentReport::failed("c.json", "Failed to read document c.json"));

        assert_eq!(report.documents_checked, 3);
        assert_eq!(report.documents_failed, 2);
        assert_eq!(report.documents[1].status, "duplicates");
    }

    #[tokio::test]
    async fn test_write_report_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("report.json");

        let mut report = RunReport::default();
        report.push(DocumentReport::ok("a.json", 1));
        write_report(&path, &report).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: RunReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report);
        assert!(parsed.documents[0].error.is_none());
    }
}
