use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::gesture_delta::GestureDelta;
use crate::controllers::interactive::data::session_config::SessionConfig;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::errors::session_error::SessionError;
use crate::controllers::interactive::progressive_renderer::ProgressiveRenderer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::periodic_gradient::PeriodicGradient;
use crate::core::data::colour_mode::ColourMode;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::orbit::orbit_tracer::{OrbitPath, OrbitTracer};
use crate::core::settings::errors::SettingsError;
use crate::core::settings::render_settings::RenderSettings;
use crate::core::settings::shared_settings::SharedSettings;
use crate::core::util::sync::lock;
use crate::core::viewport::viewport_transform::{ViewportCorners, ViewportError, ViewportTransform};
use log::{info, warn};
use std::sync::{Arc, Mutex};

/// Everything one drawing surface needs: its settings, the progressive
/// renderer working on them and the orbit cache.
///
/// Changes that alter the iteration raster restart the renderer. Colour
/// mode, periodicity, antialiasing and the orbit only affect what the next
/// draw shows. A resized surface gets a new session.
pub struct FractalSession {
    config: SessionConfig,
    pixel_rect: PixelRect,
    settings: Arc<SharedSettings>,
    renderer: ProgressiveRenderer,
    orbit: Mutex<OrbitTracer>,
}

impl FractalSession {
    pub fn new(width: u32, height: u32, config: SessionConfig) -> Result<Self, SessionError> {
        Self::with_colour_map(width, height, config, Arc::new(PeriodicGradient::new()))
    }

    pub fn with_colour_map(
        width: u32,
        height: u32,
        config: SessionConfig,
        colour_map: Arc<dyn ColourMap>,
    ) -> Result<Self, SessionError> {
        let pixel_rect = PixelRect::new(width, height)?;
        let (render_settings, viewport) = Self::default_view(pixel_rect, &config)?;
        let settings = Arc::new(SharedSettings::new(render_settings, viewport));
        let renderer = ProgressiveRenderer::new(Arc::clone(&settings), colour_map)?;

        info!("fractal session created for a {width}x{height} surface");

        Ok(Self {
            config,
            pixel_rect,
            settings,
            renderer,
            orbit: Mutex::new(OrbitTracer::new()),
        })
    }

    fn default_view(
        pixel_rect: PixelRect,
        config: &SessionConfig,
    ) -> Result<(RenderSettings, ViewportTransform), SessionError> {
        let settings = RenderSettings::new(
            config.iterations_limit,
            config.colour_periodicity,
            config.constant,
        )?;
        let bounds = ComplexRect::centered(
            Complex::ZERO,
            config.default_view_half_height,
            pixel_rect.aspect_ratio(),
        )
        .map_err(ViewportError::from)?;

        Ok((settings, ViewportTransform::new(pixel_rect, bounds)?))
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.renderer.is_processing()
    }

    #[must_use]
    pub fn has_any_data(&self) -> bool {
        self.renderer.has_any_data()
    }

    #[must_use]
    pub fn stage(&self) -> usize {
        self.renderer.stage()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.renderer.generation()
    }

    pub fn request_restart(&self) -> u64 {
        self.renderer.request_restart()
    }

    pub fn request_restart_with_antialiasing(&self) -> u64 {
        self.renderer.request_restart_with_antialiasing()
    }

    /// Colourizes the latest finished pass with the current colour settings.
    /// Returns 0 when there is nothing to show yet.
    pub fn draw_into(&self, target: &mut PixelBuffer) -> Result<usize, RenderError> {
        self.renderer.draw_into(target, &self.settings.settings())
    }

    /// A freshly allocated frame with the orbit overlay, or `None` when
    /// there is nothing to show yet.
    pub fn render_frame(&self) -> Result<Option<FrameData>, RenderError> {
        let mut pixel_buffer = PixelBuffer::new(self.pixel_rect);
        let stage = self.draw_into(&mut pixel_buffer)?;
        if stage == 0 {
            return Ok(None);
        }

        Ok(Some(FrameData {
            stage,
            pixel_buffer,
            orbit: self.orbit(),
        }))
    }

    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        self.settings.settings()
    }

    #[must_use]
    pub fn viewport(&self) -> Arc<ViewportTransform> {
        self.settings.viewport()
    }

    #[must_use]
    pub fn corners(&self) -> ViewportCorners {
        self.settings.viewport().corners()
    }

    /// The orbit overlay in pixel space while it is visible.
    #[must_use]
    pub fn orbit(&self) -> Option<OrbitPath> {
        let snapshot = self.settings.snapshot();
        if !snapshot.settings.orbit_visible() {
            return None;
        }

        let mut tracer = lock(&self.orbit);
        Some(tracer.ensure_orbit(&snapshot.settings, &snapshot.viewport).clone())
    }

    pub fn set_iterations_limit(&self, limit: i32) -> Result<(), SettingsError> {
        self.update("iteration limit", |s| s.set_iterations_limit(limit))?;
        self.request_restart();
        Ok(())
    }

    pub fn set_colour_periodicity(&self, periodicity: i32) -> Result<(), SettingsError> {
        self.update("colour periodicity", |s| s.set_colour_periodicity(periodicity))
    }

    pub fn set_colour_mode(&self, mode: ColourMode) {
        self.update_infallible(|s| s.set_colour_mode(mode));
    }

    pub fn set_fractal_kind(&self, kind: FractalKinds) {
        self.update_infallible(|s| s.set_fractal_kind(kind));
        self.request_restart();
    }

    pub fn set_constant(&self, constant: Complex) -> Result<(), SettingsError> {
        self.update("fractal constant", |s| s.set_constant(constant))?;
        self.request_restart();
        Ok(())
    }

    /// Takes effect at the next pass boundary of the running render.
    pub fn set_antialiasing(&self, enabled: bool) {
        self.update_infallible(|s| s.set_antialiasing(enabled));
    }

    pub fn set_orbit_mode(&self, enabled: bool) {
        self.update_infallible(|s| s.set_orbit_mode(enabled));
    }

    pub fn toggle_orbit_mode(&self) {
        self.update_infallible(RenderSettings::toggle_orbit_mode);
    }

    pub fn set_orbit_visible(&self, visible: bool) {
        self.update_infallible(|s| s.set_orbit_visible(visible));
    }

    pub fn set_orbit_point(&self, point: Complex) -> Result<(), SettingsError> {
        self.update("orbit point", |s| s.set_orbit_point(point))
    }

    /// Selects the orbit point under a touched pixel.
    pub fn select_orbit_pixel(&self, pixel: Point) -> Result<(), SettingsError> {
        let point = self
            .settings
            .viewport()
            .pixel_to_complex(pixel)
            .map_err(SettingsError::from)
            .inspect_err(|err| warn!("rejected orbit pixel: {err}"))?;
        self.set_orbit_point(point)
    }

    /// Jumps to an explicit axis-aligned box.
    pub fn set_bounds(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), SettingsError> {
        self.settings
            .edit_viewport(|v| v.set_bounds(x1, y1, x2, y2))
            .inspect_err(|err| warn!("rejected viewport bounds: {err}"))?;
        self.request_restart();
        Ok(())
    }

    /// Commits a finished gesture: scale, then rotate, then translate. Either
    /// all three apply or none does.
    pub fn apply_gesture(&self, gesture: GestureDelta) -> Result<(), SettingsError> {
        self.settings
            .edit_viewport(|v| {
                v.scale(gesture.scale)?;
                v.rotate(gesture.rotation_degrees)?;
                v.translate(gesture.dx, gesture.dy)
            })
            .inspect_err(|err| warn!("rejected gesture {gesture:?}: {err}"))?;
        self.request_restart();
        Ok(())
    }

    /// Recreates the settings and viewport from the session configuration.
    pub fn reset_to_default_view(&self) -> Result<(), SessionError> {
        let (render_settings, viewport) = Self::default_view(self.pixel_rect, &self.config)?;
        self.settings.replace(render_settings, viewport);
        self.request_restart();

        info!("viewport reset to the default view");
        Ok(())
    }

    fn update(
        &self,
        what: &str,
        update: impl FnOnce(&mut RenderSettings) -> Result<(), SettingsError>,
    ) -> Result<(), SettingsError> {
        self.settings
            .update(update)
            .inspect_err(|err| warn!("rejected {what}: {err}"))
    }

    fn update_infallible(&self, update: impl FnOnce(&mut RenderSettings)) {
        let _ = self.settings.update(|s| {
            update(s);
            Ok(())
        });
    }
}
