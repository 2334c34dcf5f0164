use crate::core::settings::errors::SettingsError;
use crate::core::settings::render_settings::RenderSettings;
use crate::core::util::sync::lock;
use crate::core::viewport::viewport_transform::{ViewportError, ViewportTransform};
use std::sync::{Arc, Mutex};

/// A consistent view of the settings and the viewport taken under one lock.
#[derive(Debug, Clone)]
pub struct SettingsSnapshot {
    pub settings: RenderSettings,
    pub viewport: Arc<ViewportTransform>,
}

#[derive(Debug)]
struct SettingsState {
    settings: RenderSettings,
    viewport: Arc<ViewportTransform>,
}

/// The single mutable settings object of a session, shared between the
/// caller's thread and the computation thread.
///
/// One coarse lock guards everything. Updates are staged on a copy and only
/// committed when they succeed, so a rejected update never leaves a partial
/// change behind. The viewport is copy-on-write: a render pass keeps the
/// `Arc` it started with while edits install a new one.
#[derive(Debug)]
pub struct SharedSettings {
    state: Mutex<SettingsState>,
}

impl SharedSettings {
    #[must_use]
    pub fn new(settings: RenderSettings, viewport: ViewportTransform) -> Self {
        Self {
            state: Mutex::new(SettingsState {
                settings,
                viewport: Arc::new(viewport),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        let state = lock(&self.state);
        SettingsSnapshot {
            settings: state.settings,
            viewport: Arc::clone(&state.viewport),
        }
    }

    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        lock(&self.state).settings
    }

    #[must_use]
    pub fn viewport(&self) -> Arc<ViewportTransform> {
        Arc::clone(&lock(&self.state).viewport)
    }

    /// Applies `update` to a copy of the settings and commits it on success.
    pub fn update<R>(
        &self,
        update: impl FnOnce(&mut RenderSettings) -> Result<R, SettingsError>,
    ) -> Result<R, SettingsError> {
        let mut state = lock(&self.state);
        let mut staged = state.settings;
        let result = update(&mut staged)?;
        state.settings = staged;
        Ok(result)
    }

    /// Applies `edit` to a copy of the viewport and installs it on success.
    pub fn edit_viewport(
        &self,
        edit: impl FnOnce(&mut ViewportTransform) -> Result<(), ViewportError>,
    ) -> Result<(), SettingsError> {
        let mut state = lock(&self.state);
        let mut staged = ViewportTransform::clone(&state.viewport);
        edit(&mut staged)?;
        state.viewport = Arc::new(staged);
        Ok(())
    }

    /// Swaps in freshly built settings and viewport together.
    pub fn replace(&self, settings: RenderSettings, viewport: ViewportTransform) {
        let mut state = lock(&self.state);
        state.settings = settings;
        state.viewport = Arc::new(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_rect::PixelRect;
    use std::thread;

    fn shared() -> SharedSettings {
        let pixel_rect = PixelRect::new(8, 6).unwrap();
        let bounds = ComplexRect::from_bounds(-2.0, -1.5, 2.0, 1.5).unwrap();
        SharedSettings::new(
            RenderSettings::default(),
            ViewportTransform::new(pixel_rect, bounds).unwrap(),
        )
    }

    #[test]
    fn test_update_commits_on_success() {
        let shared = shared();

        shared.update(|s| s.set_iterations_limit(250)).unwrap();

        assert_eq!(shared.settings().iterations_limit(), 250);
    }

    #[test]
    fn test_failed_update_is_not_committed() {
        let shared = shared();

        let result = shared.update(|s| {
            s.set_iterations_limit(99)?;
            s.set_colour_periodicity(0)
        });

        assert_eq!(result, Err(SettingsError::NonPositiveColourPeriodicity(0)));
        assert_eq!(shared.settings(), RenderSettings::default());
    }

    #[test]
    fn test_failed_viewport_edit_keeps_previous_viewport() {
        let shared = shared();
        let before = shared.viewport();

        let result = shared.edit_viewport(|v| {
            v.rotate(30.0)?;
            v.set_bounds(1.0, 1.0, 0.0, 2.0)
        });

        assert!(matches!(
            result,
            Err(SettingsError::Viewport(ViewportError::InvalidBounds(_)))
        ));
        assert!(Arc::ptr_eq(&before, &shared.viewport()));
    }

    #[test]
    fn test_snapshot_survives_later_edits() {
        let shared = shared();
        let snapshot = shared.snapshot();

        shared.edit_viewport(|v| v.scale(2.0)).unwrap();

        assert_eq!(snapshot.viewport.corners().top_left, Complex::new(-2.0, 1.5));
        assert_ne!(shared.viewport().corners().top_left, Complex::new(-2.0, 1.5));
    }

    #[test]
    fn test_concurrent_readers_never_see_torn_updates() {
        let shared = Arc::new(shared());
        let writer_shared = Arc::clone(&shared);

        let writer = thread::spawn(move || {
            for n in 1..200 {
                writer_shared
                    .update(|s| {
                        s.set_iterations_limit(n)?;
                        s.set_colour_periodicity(n)
                    })
                    .unwrap();
            }
        });

        for _ in 0..200 {
            let settings = shared.settings();
            if settings != RenderSettings::default() {
                assert_eq!(settings.iterations_limit(), settings.colour_periodicity());
            }
        }

        writer.join().unwrap();
    }
}
