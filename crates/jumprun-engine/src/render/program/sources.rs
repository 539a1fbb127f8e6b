use std::path::Path;

use anyhow::{Context, Result};

/// Source text for the two programmable stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Reads `vertex_file` and `fragment_file` from `dir`.
    pub fn from_dir(dir: &Path, vertex_file: &str, fragment_file: &str) -> Result<Self> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read shader source {}", path.display()))
        };
        Ok(Self::new(read(vertex_file)?, read(fragment_file)?))
    }

    pub fn get(&self, stage: super::ShaderStage) -> &str {
        match stage {
            super::ShaderStage::Vertex => &self.vertex,
            super::ShaderStage::Fragment => &self.fragment,
        }
    }
}
