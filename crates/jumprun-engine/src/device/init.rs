/// Adapter and surface preferences for [`Gpu::new`](super::Gpu::new).
#[derive(Debug, Clone)]
pub struct GpuInit {
    pub power_preference: wgpu::PowerPreference,

    /// FIFO paces the frame loop to vsync, which keeps tick-based movement
    /// at a steady speed.
    pub present_mode: wgpu::PresentMode,

    /// Pick an sRGB surface format when the surface offers one.
    pub prefer_srgb: bool,

    pub required_limits: wgpu::Limits,
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::LowPower,
            present_mode: wgpu::PresentMode::Fifo,
            prefer_srgb: true,
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
