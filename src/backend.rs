//! Process-wide rendering backend
//!
//! The backend is chosen once, before the first figure is created, and never changes afterwards.
//! Call [configure] at start-up to pick it explicitly, otherwise the first figure reads the
//! `PLOT_ADDONS_BACKEND` environment variable (`bitmap` or `svg`) and falls back to [Backend::Bitmap].

use crate::{Error, Result};
use std::{env, fmt, str::FromStr, sync::OnceLock};

static BACKEND: OnceLock<Backend> = OnceLock::new();

/// Environment variable read when no backend has been configured
pub const BACKEND_ENV: &str = "PLOT_ADDONS_BACKEND";

/// Figure rendering backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Raster images, the format is deduced from the file extension
    #[default]
    Bitmap,
    /// Scalable vector graphics
    Svg,
}
impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bitmap" | "agg" | "png" => Ok(Backend::Bitmap),
            "svg" => Ok(Backend::Svg),
            other => Err(Error::UnknownBackend(other.to_string())),
        }
    }
}
impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Bitmap => write!(f, "bitmap"),
            Backend::Svg => write!(f, "svg"),
        }
    }
}

/// Sets the backend for the whole process
///
/// Fails if a backend is already in place, either from an earlier call or because a figure was created.
pub fn configure(backend: Backend) -> Result<()> {
    BACKEND.set(backend).map_err(|_| Error::BackendLocked)?;
    log::debug!("rendering backend set to {backend}");
    Ok(())
}

/// Returns the process backend, fixing it from the environment on first use
pub fn current() -> Backend {
    *BACKEND.get_or_init(|| {
        let backend = env::var(BACKEND_ENV)
            .ok()
            .and_then(|value| match value.parse::<Backend>() {
                Ok(backend) => Some(backend),
                Err(e) => {
                    log::warn!("{e}, using the default backend");
                    None
                }
            })
            .unwrap_or_default();
        log::debug!("rendering backend defaults to {backend}");
        backend
    })
}
