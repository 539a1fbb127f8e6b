use wgpu::util::DeviceExt;

use crate::coords::Mat4;
use crate::render::program::ProgramPipeline;
use crate::render::{ColorVertex, RenderCtx, RenderTarget};

/// Handle to a draw group of a [`QuadRenderer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GroupId(usize);

/// Quads sharing one model matrix.
struct DrawGroup {
    label: String,
    model_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    meshes: Vec<wgpu::Buffer>,
}

/// Draws static quads (4-vertex triangle strips) grouped by model matrix.
///
/// Vertex buffers are uploaded once in [`add_group`](Self::add_group); per
/// frame only the model uniforms change.
pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    projection_binding: u32,
    model_binding: u32,
    projection_ubo: wgpu::Buffer,
    groups: Vec<DrawGroup>,
}

impl QuadRenderer {
    pub fn new(ctx: &RenderCtx<'_>, program: ProgramPipeline, projection: Mat4) -> Self {
        let projection_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("jumprun projection ubo"),
            contents: bytemuck::bytes_of(&projection),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            pipeline: program.pipeline,
            bind_group_layout: program.bind_group_layout,
            projection_binding: program.interface.projection.binding,
            model_binding: program.interface.model.binding,
            projection_ubo,
            groups: Vec::new(),
        }
    }

    /// Uploads `quads` as static vertex buffers drawn with `model`.
    pub fn add_group(
        &mut self,
        ctx: &RenderCtx<'_>,
        label: &str,
        model: Mat4,
        quads: &[[ColorVertex; 4]],
    ) -> GroupId {
        let model_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("jumprun {label} model ubo")),
            contents: bytemuck::bytes_of(&model),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("jumprun {label} bind group")),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: self.projection_binding,
                    resource: self.projection_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: self.model_binding,
                    resource: model_ubo.as_entire_binding(),
                },
            ],
        });

        let meshes = quads
            .iter()
            .enumerate()
            .map(|(i, quad)| {
                ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("jumprun {label} vbo {i}")),
                    contents: bytemuck::cast_slice(quad),
                    usage: wgpu::BufferUsages::VERTEX,
                })
            })
            .collect();

        log::debug!("quad group `{label}` uploaded ({} quads)", quads.len());

        self.groups.push(DrawGroup {
            label: label.to_string(),
            model_ubo,
            bind_group,
            meshes,
        });
        GroupId(self.groups.len() - 1)
    }

    pub fn set_model(&self, ctx: &RenderCtx<'_>, group: GroupId, model: Mat4) {
        let Some(group) = self.groups.get(group.0) else {
            log::warn!("set_model on unknown quad group {group:?}");
            return;
        };
        ctx.queue
            .write_buffer(&group.model_ubo, 0, bytemuck::bytes_of(&model));
    }

    /// Draws every group in insertion order on top of the current target contents.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("jumprun quad pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        for group in &self.groups {
            rpass.set_bind_group(0, &group.bind_group, &[]);
            for mesh in &group.meshes {
                rpass.set_vertex_buffer(0, mesh.slice(..));
                rpass.draw(0..4, 0..1);
            }
        }
    }
}

impl Drop for QuadRenderer {
    fn drop(&mut self) {
        for group in self.groups.drain(..) {
            for mesh in &group.meshes {
                mesh.destroy();
            }
            group.model_ubo.destroy();
            log::debug!("quad group `{}` released", group.label);
        }
        self.projection_ubo.destroy();
    }
}
