use std::path::PathBuf;

use crate::shader::{ShaderKey, SpecialEffect};

/// Failure to commit state for a draw.
///
/// Only shader activation can fail; everything else a commit does is a plain
/// value write. On error the draw is not issued, but every other attribute
/// has already been reconciled, so the caller can retry the commit with
/// `force_no_shader` to take the fixed-function path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("no shader program available for {0:?}")]
    ProgramUnavailable(ShaderKey),

    #[error("no shader program available for special effect {0:?}")]
    EffectUnavailable(SpecialEffect),
}

/// Failure to load a render configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid render config: {0}")]
    Parse(#[from] toml::de::Error),
}
