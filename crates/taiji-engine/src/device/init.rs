/// Initialization parameters for the GPU layer.
///
/// The presenter only blits one texture per frame, so the defaults favor
/// portability: no optional features, default limits, FIFO presentation.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// The pixmap is uploaded as sRGB-encoded bytes; an sRGB target keeps the
    /// round trip exact.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO waits for vertical blank.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference; ignored when unsupported.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Hint for the surface's maximum frame latency.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
