//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, 8 bits per channel
pub type Color = [u8; 4];

/// Court-space vertex with color and texture coordinate.
///
/// A 1x1 white texture is bound while drawing, so the texture coordinate is a
/// fixed dummy and the color alone decides what ends up on screen.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: Color,
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Texture coordinate sampling the middle of the white texture
    pub const WHITE_TEXEL: [f32; 2] = [0.5, 0.5];

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y, 0.0],
            color,
            tex_coord: Self::WHITE_TEXEL,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Unorm8x4, 2 => Float32x2];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Unpack `0xRRGGBBAA`
pub const fn hex_color(hex: u32) -> Color {
    [
        (hex >> 24) as u8,
        (hex >> 16) as u8,
        (hex >> 8) as u8,
        hex as u8,
    ]
}

/// Same color with a new alpha
pub const fn with_alpha(color: Color, alpha: u8) -> Color {
    [color[0], color[1], color[2], alpha]
}

/// Colors for game elements
pub mod colors {
    use super::{Color, hex_color};
    use crate::consts::PALETTE_SIZE;

    pub const BACKGROUND: Color = hex_color(0xf7f2ebff);
    pub const FOREGROUND: Color = hex_color(0x38a3a5ff);
    pub const BALL: Color = hex_color(0x38a3a5ff);
    pub const SHADOW: Color = hex_color(0x878580ff);

    /// Target colors, indexed by a target's color index
    pub const RAINBOW: [Color; PALETTE_SIZE as usize] = [
        hex_color(0xff595eff),
        hex_color(0xffca3aff),
        hex_color(0xf8961eff),
        hex_color(0x908e6dff),
        hex_color(0xf9c74fff),
        hex_color(0x90be6dff),
        hex_color(0x43aa8bff),
        hex_color(0xd64045ff),
        hex_color(0x8ac926ff),
        hex_color(0x6f7092ff),
    ];

    /// Rainbow lookup; an index outside the palette is a caller bug
    pub fn rainbow(index: u8) -> Color {
        assert!(
            (index as usize) < RAINBOW.len(),
            "rainbow index {index} out of range"
        );
        RAINBOW[index as usize]
    }

    /// Color as normalized floats, for clear colors
    pub fn to_f64(color: Color) -> [f64; 4] {
        color.map(|c| c as f64 / 255.0)
    }
}
