use std::fmt;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader/program capabilities of a graphics backend.
///
/// Handles are plain identifiers owned by the backend. Status calls return
/// `Err(info_log)` on failure; the log may be empty if the backend has
/// nothing to say.
pub trait ShaderBackend {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;

    fn create_shader(&mut self, stage: ShaderStage, source: &str) -> Self::Shader;
    fn compile_shader(&mut self, shader: Self::Shader) -> Result<(), String>;
    fn delete_shader(&mut self, shader: Self::Shader);

    fn create_program(&mut self) -> Self::Program;
    fn attach_shader(&mut self, program: Self::Program, shader: Self::Shader);
    fn link_program(&mut self, program: Self::Program) -> Result<(), String>;
    fn validate_program(&mut self, program: Self::Program) -> Result<(), String>;
    fn delete_program(&mut self, program: Self::Program);
}
