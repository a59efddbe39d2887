//! Renderer configuration.
//!
//! Loaded once at startup from a TOML file. Every key is optional:
//!
//! ```toml
//! verbosity = 1
//! with_color = true
//! annotate_image = true
//! draw_diagonal = true
//! draw_boundaries = true
//! scaling_factor = 10
//! output_dir = "out"
//! file_prefix = "frame"
//! max_pixels = 67108864
//!
//! [positioned_raster]
//! nrow = 100
//! ncol = 100
//! ```

use std::path::{Path, PathBuf};

use ndimg_shared::RasterDims;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV: &str = "NDIMG_CONFIG";

/// Default pixel budget for a single image (8192 × 8192).
pub const DEFAULT_MAX_PIXELS: u64 = 1 << 26;

/// Configuration for image output and logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// 0 = warn, 1 = info, 2 = debug, 3+ = trace.
    pub verbosity: u8,
    /// Cells paint their own color instead of a value shade.
    pub with_color: bool,
    /// Master switch for the diagonal and boundary annotations.
    pub annotate_image: bool,
    /// Draw the `x == y` diagonal.
    pub draw_diagonal: bool,
    /// Draw row and column boundaries every `scaling_factor` pixels.
    pub draw_boundaries: bool,
    /// Pixel block size per raster cell. Must be at least 1.
    pub scaling_factor: u32,
    /// Directory PNG files are written to.
    pub output_dir: PathBuf,
    /// File name prefix for written PNG files.
    pub file_prefix: String,
    /// Upper bound on `width * height` of a rendered image.
    pub max_pixels: u64,
    /// Raster size for positioned cells. Enclosing raster when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioned_raster: Option<RasterDims>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            verbosity: 1,
            with_color: true,
            annotate_image: true,
            draw_diagonal: true,
            draw_boundaries: true,
            scaling_factor: 1,
            output_dir: PathBuf::from("."),
            file_prefix: String::from("ndimg"),
            max_pixels: DEFAULT_MAX_PIXELS,
            positioned_raster: None,
        }
    }
}

impl RenderConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, has unknown keys,
    /// or fails [`RenderConfig::validate`].
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_toml_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_ENV`], or defaults if it is unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but the file is unusable.
    pub fn from_env() -> CoreResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_toml_file(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] for a zero scaling factor, an
    /// empty file prefix or a zero pixel budget.
    pub fn validate(&self) -> CoreResult<()> {
        if self.scaling_factor == 0 {
            return Err(CoreError::InvalidConfig("scaling_factor must be at least 1".into()));
        }
        if self.file_prefix.is_empty() {
            return Err(CoreError::InvalidConfig("file_prefix must not be empty".into()));
        }
        if self.max_pixels == 0 {
            return Err(CoreError::InvalidConfig("max_pixels must be at least 1".into()));
        }
        Ok(())
    }

    /// Scaling factor clamped to at least 1.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.scaling_factor.max(1)
    }

    /// Log filter directive matching `verbosity`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
