//! Process-wide renderer used by the C entry points.
//!
//! C callers cannot pass a renderer, so one lives here. Rust hosts install
//! their own with [`install_renderer`]; otherwise the first boundary call
//! creates an [`ImageRenderer`] from [`RenderConfig::from_env`].

use ndimg_core::RenderConfig;
use ndimg_render::{ImageRenderer, Renderer};
use parking_lot::Mutex;

use crate::error::FfiResult;

/// Renderer that can sit in the global slot.
pub type BoxedRenderer = Box<dyn Renderer + Send>;

static RENDERER: Mutex<Option<BoxedRenderer>> = parking_lot::const_mutex(None);

/// Installs `renderer`, returning the one it replaces.
pub fn install_renderer(renderer: BoxedRenderer) -> Option<BoxedRenderer> {
    tracing::debug!(backend = renderer.name(), "installing renderer");
    RENDERER.lock().replace(renderer)
}

/// Removes the installed renderer.
pub fn take_renderer() -> Option<BoxedRenderer> {
    RENDERER.lock().take()
}

/// Runs `f` against the installed renderer, if any, without creating the
/// default one.
pub fn with_installed<T>(f: impl FnOnce(&mut dyn Renderer) -> T) -> Option<T> {
    RENDERER.lock().as_mut().map(|renderer| f(&mut **renderer))
}

/// Runs `f` against the installed renderer, creating the default one first
/// if the slot is empty.
///
/// # Errors
///
/// Returns an error if the default renderer cannot be created.
pub fn with_renderer<T>(f: impl FnOnce(&mut dyn Renderer) -> T) -> FfiResult<T> {
    let mut slot = RENDERER.lock();
    let renderer = match &mut *slot {
        Some(renderer) => renderer,
        empty @ None => {
            let config = RenderConfig::from_env()?;
            tracing::info!(output_dir = %config.output_dir.display(), "creating default image renderer");
            empty.insert(Box::new(ImageRenderer::new(config)?))
        }
    };
    Ok(f(&mut **renderer))
}
