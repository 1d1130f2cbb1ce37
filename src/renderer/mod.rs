//! Immediate-mode rendering
//!
//! Each frame the scene is rebuilt as one court-space triangle list, which the
//! pipeline uploads and draws with a single court-to-clip transform.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod transform;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Frame, build_frame};
pub use transform::{ViewTransform, window_to_clip};
pub use vertex::{Color, Vertex, colors};
