use super::{ProgramError, ProgramStep, ShaderBackend, ShaderSources, ShaderStage};

/// Compiles both stages, links and validates a program.
///
/// On failure every handle created so far is deleted, including the one that
/// failed, and the backend's info log is returned. On success the stage
/// shaders are deleted too; the program keeps what it needs.
pub fn build_program<B: ShaderBackend>(
    backend: &mut B,
    sources: &ShaderSources,
) -> Result<B::Program, ProgramError> {
    let vertex = compile(backend, ShaderStage::Vertex, sources)?;
    let fragment = match compile(backend, ShaderStage::Fragment, sources) {
        Ok(shader) => shader,
        Err(e) => {
            backend.delete_shader(vertex);
            return Err(e);
        }
    };

    let program = backend.create_program();
    backend.attach_shader(program, vertex);
    backend.attach_shader(program, fragment);

    let linked = backend
        .link_program(program)
        .map_err(|log| ProgramError::new(ProgramStep::Link, log));

    backend.delete_shader(vertex);
    backend.delete_shader(fragment);

    let status = match linked {
        Ok(()) => backend
            .validate_program(program)
            .map_err(|log| ProgramError::new(ProgramStep::Validate, log)),
        Err(e) => Err(e),
    };

    match status {
        Ok(()) => {
            log::debug!("shader program {program:?} linked and validated");
            Ok(program)
        }
        Err(e) => {
            backend.delete_program(program);
            Err(e)
        }
    }
}

fn compile<B: ShaderBackend>(
    backend: &mut B,
    stage: ShaderStage,
    sources: &ShaderSources,
) -> Result<B::Shader, ProgramError> {
    let shader = backend.create_shader(stage, sources.get(stage));
    match backend.compile_shader(shader) {
        Ok(()) => Ok(shader),
        Err(log) => {
            backend.delete_shader(shader);
            Err(ProgramError::new(ProgramStep::Compile(stage), log))
        }
    }
}
