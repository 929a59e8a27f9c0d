pub mod config;
pub mod detector;
pub mod document;
pub mod header_key;
pub mod reader;
pub mod report;
pub mod weaver;

// Re-export main types for convenient access
pub use config::CheckConfig;
pub use detector::{check, DuplicateDetector, DuplicateHeadersError, HeaderGroups};
pub use document::{Document, Node, TOP_LEVEL_SECTION};
pub use header_key::{normalize_header_key, normalize_header_key_with, singularize};

// Re-export host pipeline types
pub use weaver::{AppendSection, SectionStage, Weaver};
