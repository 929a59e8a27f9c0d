// WHY: host-side scheduling for the duplicate check
// Section-producing stages run first in registration order; the check always runs after them

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::detector::DuplicateDetector;
use crate::document::{Document, Node};

/// A collaborator that may add or rename top-level sections
pub trait SectionStage: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, document: &mut Document) -> Result<()>;
}

/// Appends a generated top-level section
#[derive(Debug, Clone)]
pub struct AppendSection {
    pub header: String,
    pub body: Option<String>,
}

impl AppendSection {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl SectionStage for AppendSection {
    fn name(&self) -> &str {
        "append-section"
    }

    fn apply(&self, document: &mut Document) -> Result<()> {
        let children = self.body.iter().map(Node::text).collect();
        document.push(Node::section(self.header.as_str()).with_children(children));
        Ok(())
    }
}

/// Runs section stages, then the duplicate check as the final step
pub struct Weaver {
    stages: Vec<Box<dyn SectionStage>>,
    detector: DuplicateDetector,
}

impl Weaver {
    pub fn new(config: CheckConfig) -> Self {
        Self {
            stages: Vec::new(),
            detector: DuplicateDetector::new(config),
        }
    }

    /// Register a stage; registration order is execution order
    pub fn add_stage(&mut self, stage: impl SectionStage + 'static) {
        self.stages.push(Box::new(stage));
    }

    pub fn with_stage(mut self, stage: impl SectionStage + 'static) -> Self {
        self.add_stage(stage);
        self
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage over `document`, then check the finished document
    ///
    /// A duplicate failure is returned as an error that downcasts to
    /// [`crate::detector::DuplicateHeadersError`].
    pub fn weave(&self, mut document: Document) -> Result<Document> {
        info!("Weaving document through {} stages", self.stages.len());

        for (position, stage) in self.stages.iter().enumerate() {
            debug!(stage = stage.name(), position, "Applying section stage");
            stage
                .apply(&mut document)
                .with_context(|| format!("Section stage '{}' failed", stage.name()))?;
        }

        self.detector.check(&document)?;
        Ok(document)
    }
}

impl Default for Weaver {
    fn default() -> Self {
        Self::new(CheckConfig::default())
    }
}
