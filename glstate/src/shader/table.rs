//! Program lookup
//!
//! The cache never compiles shaders. It asks a [`ShaderProvider`] for the
//! handle of an already-linked program and reports a failure upward when
//! there is none.

use hashbrown::HashMap;

use super::{ShaderHandle, ShaderKey, SpecialEffect};

/// Source of linked shader programs
pub trait ShaderProvider {
    /// Program for a surface variant, or `None` if it could not be built
    fn program(&mut self, key: ShaderKey) -> Option<ShaderHandle>;

    /// Program for a special effect, or `None` if it could not be built
    fn effect(&mut self, effect: SpecialEffect) -> Option<ShaderHandle>;
}

/// Table of linked programs
///
/// Filled by the shader linker at startup; lookups of unregistered variants
/// return `None`.
#[derive(Debug, Default)]
pub struct ProgramTable {
    programs: HashMap<ShaderKey, ShaderHandle>,
    effects: HashMap<SpecialEffect, ShaderHandle>,
}

impl ProgramTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface program, returning the handle it replaced
    pub fn insert_program(&mut self, key: ShaderKey, handle: ShaderHandle) -> Option<ShaderHandle> {
        tracing::debug!("Registered program {:?} for {:?}", handle, key);
        self.programs.insert(key, handle)
    }

    /// Register a special-effect program, returning the handle it replaced
    pub fn insert_effect(&mut self, effect: SpecialEffect, handle: ShaderHandle) -> Option<ShaderHandle> {
        tracing::debug!("Registered effect program {:?} for {:?}", handle, effect);
        self.effects.insert(effect, handle)
    }

    pub fn remove_program(&mut self, key: &ShaderKey) -> Option<ShaderHandle> {
        self.programs.remove(key)
    }

    /// Number of registered programs (surface and effect)
    pub fn len(&self) -> usize {
        self.programs.len() + self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ShaderProvider for ProgramTable {
    fn program(&mut self, key: ShaderKey) -> Option<ShaderHandle> {
        self.programs.get(&key).copied()
    }

    fn effect(&mut self, effect: SpecialEffect) -> Option<ShaderHandle> {
        self.effects.get(&effect).copied()
    }
}
