use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jumprun_engine::coords::Mat4;
use jumprun_engine::core::{App, AppControl, FrameCtx};
use jumprun_engine::paint::Color;
use jumprun_engine::render::program::{build_program, GpuShaderBackend, ShaderSources};
use jumprun_engine::render::shapes::quad::{GroupId, QuadRenderer};
use jumprun_engine::render::RenderCtx;
use jumprun_game::level::{player_model, player_quad};
use jumprun_game::{Controls, LevelGeometry, PlayerState, Tuning};

/// Directory holding `quad.vert.wgsl` / `quad.frag.wgsl` to use instead of the built-in shaders.
pub const SHADER_DIR_ENV: &str = "JUMPRUN_SHADER_DIR";

const VERTEX_FILE: &str = "quad.vert.wgsl";
const FRAGMENT_FILE: &str = "quad.frag.wgsl";
const VERTEX_SRC: &str = include_str!("../shaders/quad.vert.wgsl");
const FRAGMENT_SRC: &str = include_str!("../shaders/quad.frag.wgsl");

const FPS_LOG_INTERVAL: u64 = 600;
const BACKGROUND: Color = Color::from_premul(0.05, 0.05, 0.08, 1.0);

/// Built-in shaders, or the files in `dir` when given.
pub fn shader_sources(dir: Option<&Path>) -> Result<ShaderSources> {
    match dir {
        Some(dir) => {
            log::info!("loading shaders from {}", dir.display());
            ShaderSources::from_dir(dir, VERTEX_FILE, FRAGMENT_FILE)
        }
        None => Ok(ShaderSources::new(VERTEX_SRC, FRAGMENT_SRC)),
    }
}

struct Scene {
    renderer: QuadRenderer,
    player_group: GroupId,
}

pub struct JumpRunApp {
    tuning: Tuning,
    level: LevelGeometry,
    player: PlayerState,
    shader_dir: Option<PathBuf>,
    scene: Option<Scene>,
}

impl JumpRunApp {
    pub fn new(tuning: Tuning, shader_dir: Option<PathBuf>) -> Self {
        Self {
            level: LevelGeometry::new(&tuning),
            player: PlayerState::new(&tuning),
            tuning,
            shader_dir,
            scene: None,
        }
    }
}

impl App for JumpRunApp {
    fn on_init(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let sources = shader_sources(self.shader_dir.as_deref())?;

        let mut backend = GpuShaderBackend::new();
        let program =
            build_program(&mut backend, &sources).context("failed to build quad shader program")?;
        let pipeline = backend.into_pipeline(ctx.device, ctx.surface_format, program)?;

        let projection = Mat4::orthographic(self.tuning.canvas_width, self.tuning.canvas_height);
        let mut renderer = QuadRenderer::new(ctx, pipeline, projection);
        renderer.add_group(ctx, "level", Mat4::IDENTITY, &self.level.quads());
        let player_group = renderer.add_group(
            ctx,
            "player",
            player_model(&self.player),
            &[player_quad(&self.tuning)],
        );

        log::info!(
            "level ready: {}x{} canvas, movement mode {}",
            self.tuning.canvas_width,
            self.tuning.canvas_height,
            self.player.movement_mode
        );

        self.scene = Some(Scene {
            renderer,
            player_group,
        });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(scene) = &self.scene else {
            return AppControl::Continue;
        };

        let controls = Controls::poll(ctx.input, ctx.input_frame);
        if controls.exit {
            return AppControl::Exit;
        }

        if let Some((w, h)) = ctx.input_frame.resized {
            log::debug!("surface resized to {w}x{h}");
        }
        if ctx.time.frame_index > 0 && ctx.time.frame_index % FPS_LOG_INTERVAL == 0 {
            log::debug!("{:.1} fps", ctx.time.fps);
        }

        self.player.apply_controls(&controls, &self.tuning);
        self.player.update(&self.tuning);

        scene
            .renderer
            .set_model(&ctx.render_ctx(), scene.player_group, player_model(&self.player));

        ctx.render(BACKGROUND, |_, target| scene.renderer.render(target))
    }
}
