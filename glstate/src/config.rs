//! Render configuration (render.toml)
//!
//! Selects the state-change strategy and describes what the shader backend
//! can do. Stored as TOML; every field has a default so partial files work.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shader::{Colormap, ShaderCaps, ShaderModel};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RenderConfig {
    /// State-change strategy
    #[serde(default)]
    pub state: StateConfig,
    /// Shader backend capabilities
    #[serde(default)]
    pub shaders: ShaderConfig,
}

/// How blend, alpha-test and blend-equation changes reach the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StateChangeMode {
    /// Setters buffer the value; `apply` reconciles against the device shadow
    #[default]
    Deferred,
    /// Setters call the device immediately and record nothing
    Direct,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StateConfig {
    /// Strategy used by the blend/alpha setters (default: deferred)
    #[serde(default)]
    pub change_mode: StateChangeMode,
}

/// Shader backend capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaderConfig {
    /// Shader model: 2 (colormap only), 3 (optional shaders), 4 (always) (default: 4)
    #[serde(default = "default_model")]
    pub model: ShaderModel,
    /// Fog mode: 0 = off, 1 = standard, 2 = radial (default: 1)
    #[serde(default = "default_fog_mode")]
    pub fog_mode: u8,
    /// Shader model 3: use shaders for fog (default: true)
    #[serde(default = "default_true")]
    pub fog_shader: bool,
    /// Shader model 3: apply colormaps in shaders (default: true)
    #[serde(default = "default_true")]
    pub colormap_shader: bool,
    /// Shader model 3: use brightmap shaders (default: true)
    #[serde(default = "default_true")]
    pub brightmap_shader: bool,
    /// Shader model 3: use warp shaders instead of software warping (default: true)
    #[serde(default = "default_true")]
    pub warp_shader: bool,
    /// Number of special colormaps after the desaturation range (default: 8)
    #[serde(default = "default_special_colormaps")]
    pub special_colormaps: u32,
}

fn default_model() -> ShaderModel {
    ShaderModel::Sm4
}
fn default_fog_mode() -> u8 {
    1
}
fn default_true() -> bool {
    true
}
fn default_special_colormaps() -> u32 {
    8
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            fog_mode: default_fog_mode(),
            fog_shader: default_true(),
            colormap_shader: default_true(),
            brightmap_shader: default_true(),
            warp_shader: default_true(),
            special_colormaps: default_special_colormaps(),
        }
    }
}

impl ShaderConfig {
    /// Capabilities consumed by shader resolution
    pub fn caps(&self) -> ShaderCaps {
        ShaderCaps {
            model: self.model,
            fog_mode: self.fog_mode.min(2),
            fog_shader: self.fog_shader,
            colormap_shader: self.colormap_shader,
            brightmap_shader: self.brightmap_shader,
            warp_shader: self.warp_shader,
            max_colormap: Colormap::max_for(self.special_colormaps),
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration file, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{}, using default render config", e);
            Self::default()
        })
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
