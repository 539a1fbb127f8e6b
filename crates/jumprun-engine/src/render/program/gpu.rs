use anyhow::{Context, Result};

use super::reflect::{self, LinkedInterface};
use super::{ProgramInterface, ShaderBackend, ShaderStage};
use crate::render::vertex::ColorVertex;

/// Shader handle issued by [`GpuShaderBackend`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(usize);

/// Program handle issued by [`GpuShaderBackend`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramId(usize);

struct ShaderSlot {
    stage: ShaderStage,
    source: String,
    module: Option<naga::Module>,
}

#[derive(Default)]
struct ProgramSlot {
    attached: Vec<ShaderId>,
    /// Sources captured at link time so the stage shaders can be deleted.
    vertex_source: Option<String>,
    fragment_source: Option<String>,
    linked: Option<LinkedInterface>,
    validated: Option<ProgramInterface>,
}

/// Validated program turned into wgpu objects.
pub struct ProgramPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub interface: ProgramInterface,
}

/// [`ShaderBackend`] over wgpu with naga doing compile/link/validate.
///
/// wgpu has no separate compile and link calls, so those steps run on the
/// naga IR; only [`into_pipeline`](Self::into_pipeline) touches a device,
/// with sources that already passed validation.
#[derive(Default)]
pub struct GpuShaderBackend {
    shaders: Vec<Option<ShaderSlot>>,
    programs: Vec<Option<ProgramSlot>>,
}

impl GpuShaderBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of shader and program handles not yet deleted.
    pub fn live_handles(&self) -> usize {
        self.shaders.iter().flatten().count() + self.programs.iter().flatten().count()
    }

    fn shader(&self, id: ShaderId) -> Option<&ShaderSlot> {
        self.shaders.get(id.0).and_then(Option::as_ref)
    }

    fn program_mut(&mut self, id: ProgramId) -> Option<&mut ProgramSlot> {
        self.programs.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Creates the render pipeline for a validated program.
    ///
    /// Consumes the backend; any handle still alive is released with it.
    pub fn into_pipeline(
        mut self,
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        program: ProgramId,
    ) -> Result<ProgramPipeline> {
        let slot = self
            .programs
            .get_mut(program.0)
            .and_then(Option::take)
            .with_context(|| format!("unknown program {program:?}"))?;

        let interface = slot
            .validated
            .with_context(|| format!("program {program:?} was not validated"))?;
        let vertex_source = slot.vertex_source.context("program has no vertex source")?;
        let fragment_source = slot.fragment_source.context("program has no fragment source")?;

        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("jumprun vertex shader"),
            source: wgpu::ShaderSource::Wgsl(vertex_source.into()),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("jumprun fragment shader"),
            source: wgpu::ShaderSource::Wgsl(fragment_source.into()),
        });

        let uniform_entry = |binding: u32| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(crate::render::MAT4_BINDING_SIZE),
            },
            count: None,
        };

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("jumprun quad bgl"),
            entries: &[
                uniform_entry(interface.projection.binding),
                uniform_entry(interface.model.binding),
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("jumprun quad pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let attributes = ColorVertex::attributes(interface.position.location, interface.color.location);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("jumprun quad pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &vertex_module,
                    entry_point: Some(interface.vertex_entry.as_str()),
                    compilation_options: Default::default(),
                    buffers: &[ColorVertex::layout(&attributes)],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &fragment_module,
                    entry_point: Some(interface.fragment_entry.as_str()),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            });

        if self.live_handles() > 0 {
            log::debug!("releasing {} leftover shader handles", self.live_handles());
        }

        Ok(ProgramPipeline {
            pipeline,
            bind_group_layout,
            interface,
        })
    }
}

impl ShaderBackend for GpuShaderBackend {
    type Shader = ShaderId;
    type Program = ProgramId;

    fn create_shader(&mut self, stage: ShaderStage, source: &str) -> ShaderId {
        self.shaders.push(Some(ShaderSlot {
            stage,
            source: source.to_string(),
            module: None,
        }));
        ShaderId(self.shaders.len() - 1)
    }

    fn compile_shader(&mut self, shader: ShaderId) -> Result<(), String> {
        let slot = self
            .shaders
            .get_mut(shader.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| format!("unknown shader {shader:?}"))?;

        let module = reflect::compile(slot.stage, &slot.source)?;
        slot.module = Some(module);
        log::debug!("{} shader {shader:?} compiled", slot.stage);
        Ok(())
    }

    fn delete_shader(&mut self, shader: ShaderId) {
        if let Some(slot) = self.shaders.get_mut(shader.0) {
            *slot = None;
        }
    }

    fn create_program(&mut self) -> ProgramId {
        self.programs.push(Some(ProgramSlot::default()));
        ProgramId(self.programs.len() - 1)
    }

    fn attach_shader(&mut self, program: ProgramId, shader: ShaderId) {
        if let Some(slot) = self.program_mut(program) {
            slot.attached.push(shader);
        }
    }

    fn link_program(&mut self, program: ProgramId) -> Result<(), String> {
        let attached = self
            .programs
            .get(program.0)
            .and_then(Option::as_ref)
            .map(|p| p.attached.clone())
            .ok_or_else(|| format!("unknown program {program:?}"))?;

        let stage_shader = |stage: ShaderStage| -> Result<&ShaderSlot, String> {
            let mut found = attached
                .iter()
                .filter_map(|id| self.shader(*id))
                .filter(|s| s.stage == stage);
            let slot = found
                .next()
                .ok_or_else(|| format!("no {stage} shader attached"))?;
            if found.next().is_some() {
                return Err(format!("more than one {stage} shader attached"));
            }
            Ok(slot)
        };

        let vs = stage_shader(ShaderStage::Vertex)?;
        let fs = stage_shader(ShaderStage::Fragment)?;
        let (Some(vs_module), Some(fs_module)) = (vs.module.as_ref(), fs.module.as_ref()) else {
            return Err("attached shaders are not compiled".to_string());
        };

        let linked = reflect::link(vs_module, fs_module)?;
        let (vertex_source, fragment_source) = (vs.source.clone(), fs.source.clone());

        if let Some(slot) = self.program_mut(program) {
            slot.vertex_source = Some(vertex_source);
            slot.fragment_source = Some(fragment_source);
            slot.linked = Some(linked);
        }
        Ok(())
    }

    fn validate_program(&mut self, program: ProgramId) -> Result<(), String> {
        let slot = self
            .program_mut(program)
            .ok_or_else(|| format!("unknown program {program:?}"))?;
        let linked = slot
            .linked
            .as_ref()
            .ok_or_else(|| "program is not linked".to_string())?;

        slot.validated = Some(reflect::validate(linked)?);
        Ok(())
    }

    fn delete_program(&mut self, program: ProgramId) {
        if let Some(slot) = self.programs.get_mut(program.0) {
            *slot = None;
        }
    }
}

fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}
