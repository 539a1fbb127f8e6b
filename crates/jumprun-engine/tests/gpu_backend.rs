use jumprun_engine::render::program::{build_program, GpuShaderBackend, ProgramStep, ShaderSources, ShaderStage};

const VERTEX: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@group(0) @binding(0) var<uniform> projection: mat4x4<f32>;
@group(0) @binding(1) var<uniform> model: mat4x4<f32>;

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = projection * model * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}
"#;

const FRAGMENT: &str = r#"
@fragment
fn fs_main(@location(0) color: vec4<f32>) -> @location(0) vec4<f32> {
    return color;
}
"#;

#[test]
fn valid_sources_leave_only_the_program() {
    let mut backend = GpuShaderBackend::new();
    build_program(&mut backend, &ShaderSources::new(VERTEX, FRAGMENT)).unwrap();
    assert_eq!(backend.live_handles(), 1);
}

#[test]
fn invalid_vertex_source_releases_every_handle() {
    let mut backend = GpuShaderBackend::new();
    let err = build_program(&mut backend, &ShaderSources::new("fn vs_main( {", FRAGMENT)).unwrap_err();

    assert_eq!(err.step, ProgramStep::Compile(ShaderStage::Vertex));
    assert!(!err.log.trim().is_empty());
    assert_eq!(backend.live_handles(), 0);
}

#[test]
fn invalid_fragment_source_releases_every_handle() {
    let mut backend = GpuShaderBackend::new();
    let err = build_program(&mut backend, &ShaderSources::new(VERTEX, "@fragment fn fs_main() -> vec4")).unwrap_err();

    assert_eq!(err.step, ProgramStep::Compile(ShaderStage::Fragment));
    assert_eq!(backend.live_handles(), 0);
}

#[test]
fn unmatched_stage_interface_fails_link_and_releases_every_handle() {
    let fragment = r#"
@fragment
fn fs_main(@location(3) tint: vec4<f32>) -> @location(0) vec4<f32> {
    return tint;
}
"#;
    let mut backend = GpuShaderBackend::new();
    let err = build_program(&mut backend, &ShaderSources::new(VERTEX, fragment)).unwrap_err();

    assert_eq!(err.step, ProgramStep::Link);
    assert_eq!(backend.live_handles(), 0);
}
