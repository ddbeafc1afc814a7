// Public API - exposed to library consumers
pub mod fragment;
pub mod framebuffer;
pub mod math;
pub mod quantize;
pub mod rasterizer;

// Re-export commonly needed types at crate root for convenience
pub use fragment::{Fragment, FragmentBatch, FragmentSink};
pub use framebuffer::Framebuffer;
pub use quantize::ColorQuantizer;
pub use rasterizer::{
    rasterize, CullMode, FillRule, RasterizerInput, VertexBuffer, ViewportBounds,
};
