//! Error handling for the particle system
//!
//! Only construction without an engine is a configuration failure. Everything
//! else that can go wrong comes from the host: sprite factories, missing
//! containers or unreadable effect files.

use std::path::PathBuf;

/// Errors produced by the particle system
#[derive(Debug, thiserror::Error)]
pub enum DustError {
    #[error("no rendering engine supplied; pass one when constructing the particle system")]
    MissingRenderingEngine,

    #[error("rendering engine `{renderer}` cannot build particle containers; supply a container")]
    NoContainer { renderer: String },

    #[error("sprite factory failed: {message}")]
    SpriteFactory { message: String },

    #[error("failed to read effect config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {format} effect config: {message}")]
    ConfigParse { format: &'static str, message: String },

    #[error("unknown effect config format: {path}")]
    UnknownConfigFormat { path: PathBuf },
}

/// Type alias for particle system results
pub type DustResult<T> = Result<T, DustError>;

impl DustError {
    /// Create a sprite factory error
    pub fn sprite_factory(message: impl std::fmt::Display) -> Self {
        DustError::SpriteFactory {
            message: message.to_string(),
        }
    }

    /// Create a no-container error for the given renderer identifier
    pub fn no_container(renderer: impl Into<String>) -> Self {
        let renderer = renderer.into();
        DustError::NoContainer {
            renderer: if renderer.is_empty() {
                "<unbound>".to_string()
            } else {
                renderer
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_renderer_is_named() {
        let err = DustError::no_container("");
        assert!(err.to_string().contains("<unbound>"));

        let err = DustError::no_container("pixi");
        assert!(err.to_string().contains("`pixi`"));
    }
}
