// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use sectionguard::{Document, Node};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Document whose direct children are top-level sections with the given headers
pub fn document_with_headers(headers: &[&str]) -> Document {
    headers.iter().map(|header| Node::section(*header)).collect()
}

/// Test fixture helper for creating temporary directories with document files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write raw JSON content to a document file
    pub fn create_document_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write document file");
        file_path
    }

    /// Serialize a document tree to a file
    pub fn write_document<P: AsRef<Path>>(&self, relative_path: P, document: &Document) -> PathBuf {
        let json = document.to_json_pretty().expect("Failed to serialize document");
        self.create_document_file(relative_path, &json)
    }
}
