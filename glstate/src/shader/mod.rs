// ============================================================================
// Shader Variant Resolution
// ============================================================================
//
// Everything here is pure. Given the backend capabilities and the logical
// rendering mode it decides which program (if any) a commit must activate.
//
// - types: handles, keys, shader model, colormaps, materials, effects
// - setup: per-material program and colormap selection
// - resolve: RenderMode -> ShaderVariant
// - table: the ShaderProvider seam and a hash-table provider

mod resolve;
mod setup;
mod table;
mod types;


pub use resolve::{ModeFlags, RenderMode, ShaderVariant, resolve_variant};
pub use setup::{ShaderRequest, ShaderSetup, setup_shader};
pub use table::{ProgramTable, ShaderProvider};
pub use types::{
    Colormap, MaterialShader, ShaderBase, ShaderCaps, ShaderHandle, ShaderKey, ShaderModel,
    SpecialEffect, WarpKind,
};
