use std::fmt;

use super::ShaderStage;

/// Step of program construction that failed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProgramStep {
    Compile(ShaderStage),
    Link,
    Validate,
}

/// Shader program construction failure carrying the backend's info log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramError {
    pub step: ProgramStep,
    /// Compiler/linker diagnostic text. Never empty.
    pub log: String,
}

impl ProgramError {
    pub(crate) fn new(step: ProgramStep, log: impl Into<String>) -> Self {
        let log = log.into();
        let log = if log.trim().is_empty() {
            "no diagnostic output".to_string()
        } else {
            log
        };
        Self { step, log }
    }
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            ProgramStep::Compile(stage) => write!(f, "{stage} shader failed to compile: {}", self.log),
            ProgramStep::Link => write!(f, "program failed to link: {}", self.log),
            ProgramStep::Validate => write!(f, "program failed validation: {}", self.log),
        }
    }
}

impl std::error::Error for ProgramError {}
