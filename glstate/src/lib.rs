//! glstate - render-state cache for immediate-mode renderers
//!
//! Call sites set drawing parameters (color, blending, alpha test, fog, glow,
//! lighting, special effects) on a [`RenderState`] as often as they like.
//! Nothing reaches the device until [`RenderState::apply`], which compares
//! the requested state against a shadow of what the device last received and
//! issues only the calls that actually change something.
//!
//! # Architecture
//!
//! - [`attr`] - versioned attribute cells; "did this change" is a stamp compare
//! - [`state`] - the aggregator: logical state, device shadow, commit
//! - [`shader`] - pure shader-variant resolution and the program seam
//! - [`device`] - the outbound graphics-device seam and a recording backend
//! - [`config`] - TOML configuration (state-change strategy, shader caps)

pub mod attr;
pub mod config;
pub mod device;
mod error;
pub mod shader;
pub mod state;

pub use attr::{StateVec, StateVec3, StateVec4, VersionStamp};
pub use config::{RenderConfig, ShaderConfig, StateChangeMode, StateConfig};
pub use device::{
    BlendEquation, BlendFactor, CompareFunc, DeviceCall, DrawCall, GraphicsDevice, Primitive,
    RecordingDevice, TextureMode, Uniform, VertexBufferId,
};
pub use error::{CommitError, ConfigError};
pub use shader::{
    Colormap, MaterialShader, ModeFlags, ProgramTable, RenderMode, ShaderBase, ShaderCaps,
    ShaderHandle, ShaderKey, ShaderModel, ShaderProvider, ShaderRequest, ShaderSetup,
    ShaderVariant, SpecialEffect, WarpKind, resolve_variant, setup_shader,
};
pub use state::{Commit, LightList, RenderState};

pub use glstate_shared::{PalEntry, SecPlane};
