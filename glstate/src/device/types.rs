//! Device state enums
//!
//! Each enum carries the GL enum value the immediate-mode backend passes
//! through, plus the matching wgpu type for backends that bake the state into
//! pipelines instead.

/// Blend factor for `blend_func`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendFactor {
    Zero,
    #[default]
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    DstColor,
    OneMinusDstColor,
    SrcAlphaSaturate,
}

impl BlendFactor {
    pub fn to_gl(self) -> u32 {
        match self {
            BlendFactor::Zero => 0,
            BlendFactor::One => 1,
            BlendFactor::SrcColor => 0x0300,
            BlendFactor::OneMinusSrcColor => 0x0301,
            BlendFactor::SrcAlpha => 0x0302,
            BlendFactor::OneMinusSrcAlpha => 0x0303,
            BlendFactor::DstAlpha => 0x0304,
            BlendFactor::OneMinusDstAlpha => 0x0305,
            BlendFactor::DstColor => 0x0306,
            BlendFactor::OneMinusDstColor => 0x0307,
            BlendFactor::SrcAlphaSaturate => 0x0308,
        }
    }

    pub fn from_gl(value: u32) -> Option<Self> {
        match value {
            0 => Some(BlendFactor::Zero),
            1 => Some(BlendFactor::One),
            0x0300 => Some(BlendFactor::SrcColor),
            0x0301 => Some(BlendFactor::OneMinusSrcColor),
            0x0302 => Some(BlendFactor::SrcAlpha),
            0x0303 => Some(BlendFactor::OneMinusSrcAlpha),
            0x0304 => Some(BlendFactor::DstAlpha),
            0x0305 => Some(BlendFactor::OneMinusDstAlpha),
            0x0306 => Some(BlendFactor::DstColor),
            0x0307 => Some(BlendFactor::OneMinusDstColor),
            0x0308 => Some(BlendFactor::SrcAlphaSaturate),
            _ => None,
        }
    }

    pub fn to_wgpu(self) -> wgpu::BlendFactor {
        match self {
            BlendFactor::Zero => wgpu::BlendFactor::Zero,
            BlendFactor::One => wgpu::BlendFactor::One,
            BlendFactor::SrcColor => wgpu::BlendFactor::Src,
            BlendFactor::OneMinusSrcColor => wgpu::BlendFactor::OneMinusSrc,
            BlendFactor::SrcAlpha => wgpu::BlendFactor::SrcAlpha,
            BlendFactor::OneMinusSrcAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
            BlendFactor::DstAlpha => wgpu::BlendFactor::DstAlpha,
            BlendFactor::OneMinusDstAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
            BlendFactor::DstColor => wgpu::BlendFactor::Dst,
            BlendFactor::OneMinusDstColor => wgpu::BlendFactor::OneMinusDst,
            BlendFactor::SrcAlphaSaturate => wgpu::BlendFactor::SrcAlphaSaturated,
        }
    }
}

/// Blend equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendEquation {
    #[default]
    Add,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

impl BlendEquation {
    pub fn to_gl(self) -> u32 {
        match self {
            BlendEquation::Add => 0x8006,
            BlendEquation::Min => 0x8007,
            BlendEquation::Max => 0x8008,
            BlendEquation::Subtract => 0x800A,
            BlendEquation::ReverseSubtract => 0x800B,
        }
    }

    pub fn from_gl(value: u32) -> Option<Self> {
        match value {
            0x8006 => Some(BlendEquation::Add),
            0x8007 => Some(BlendEquation::Min),
            0x8008 => Some(BlendEquation::Max),
            0x800A => Some(BlendEquation::Subtract),
            0x800B => Some(BlendEquation::ReverseSubtract),
            _ => None,
        }
    }

    pub fn to_wgpu(self) -> wgpu::BlendOperation {
        match self {
            BlendEquation::Add => wgpu::BlendOperation::Add,
            BlendEquation::Subtract => wgpu::BlendOperation::Subtract,
            BlendEquation::ReverseSubtract => wgpu::BlendOperation::ReverseSubtract,
            BlendEquation::Min => wgpu::BlendOperation::Min,
            BlendEquation::Max => wgpu::BlendOperation::Max,
        }
    }
}

/// Comparison function for the alpha test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompareFunc {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    #[default]
    GreaterEqual,
    Always,
}

impl CompareFunc {
    pub fn to_gl(self) -> u32 {
        match self {
            CompareFunc::Never => 0x0200,
            CompareFunc::Less => 0x0201,
            CompareFunc::Equal => 0x0202,
            CompareFunc::LessEqual => 0x0203,
            CompareFunc::Greater => 0x0204,
            CompareFunc::NotEqual => 0x0205,
            CompareFunc::GreaterEqual => 0x0206,
            CompareFunc::Always => 0x0207,
        }
    }

    pub fn from_gl(value: u32) -> Option<Self> {
        match value {
            0x0200 => Some(CompareFunc::Never),
            0x0201 => Some(CompareFunc::Less),
            0x0202 => Some(CompareFunc::Equal),
            0x0203 => Some(CompareFunc::LessEqual),
            0x0204 => Some(CompareFunc::Greater),
            0x0205 => Some(CompareFunc::NotEqual),
            0x0206 => Some(CompareFunc::GreaterEqual),
            0x0207 => Some(CompareFunc::Always),
            _ => None,
        }
    }

    pub fn to_wgpu(self) -> wgpu::CompareFunction {
        match self {
            CompareFunc::Never => wgpu::CompareFunction::Never,
            CompareFunc::Less => wgpu::CompareFunction::Less,
            CompareFunc::Equal => wgpu::CompareFunction::Equal,
            CompareFunc::LessEqual => wgpu::CompareFunction::LessEqual,
            CompareFunc::Greater => wgpu::CompareFunction::Greater,
            CompareFunc::NotEqual => wgpu::CompareFunction::NotEqual,
            CompareFunc::GreaterEqual => wgpu::CompareFunction::GreaterEqual,
            CompareFunc::Always => wgpu::CompareFunction::Always,
        }
    }
}

/// How the texture sample combines with the vertex color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum TextureMode {
    /// Texture times color
    #[default]
    Modulate = 0,
    /// Texture alpha only, color from the vertex
    Mask = 1,
    /// Texture with alpha forced to one
    Opaque = 2,
    /// Inverted texture color
    Inverse = 3,
    /// Red channel used as alpha
    RedToAlpha = 4,
}

impl TextureMode {
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(TextureMode::Modulate),
            1 => Some(TextureMode::Mask),
            2 => Some(TextureMode::Opaque),
            3 => Some(TextureMode::Inverse),
            4 => Some(TextureMode::RedToAlpha),
            _ => None,
        }
    }

    /// Value of the texture-mode shader uniform
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Primitive type of a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Primitive {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
    Quads,
}

impl Primitive {
    pub fn to_gl(self) -> u32 {
        match self {
            Primitive::Points => 0x0000,
            Primitive::Lines => 0x0001,
            Primitive::LineLoop => 0x0002,
            Primitive::LineStrip => 0x0003,
            Primitive::Triangles => 0x0004,
            Primitive::TriangleStrip => 0x0005,
            Primitive::TriangleFan => 0x0006,
            Primitive::Quads => 0x0007,
        }
    }

    /// wgpu topology, if wgpu has one (no loops, fans or quads)
    pub fn to_wgpu(self) -> Option<wgpu::PrimitiveTopology> {
        match self {
            Primitive::Points => Some(wgpu::PrimitiveTopology::PointList),
            Primitive::Lines => Some(wgpu::PrimitiveTopology::LineList),
            Primitive::LineStrip => Some(wgpu::PrimitiveTopology::LineStrip),
            Primitive::Triangles => Some(wgpu::PrimitiveTopology::TriangleList),
            Primitive::TriangleStrip => Some(wgpu::PrimitiveTopology::TriangleStrip),
            Primitive::LineLoop | Primitive::TriangleFan | Primitive::Quads => None,
        }
    }
}
