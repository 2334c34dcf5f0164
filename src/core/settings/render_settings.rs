use crate::core::data::colour_mode::ColourMode;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::DEFAULT_JULIA_CONSTANT;
use crate::core::settings::errors::SettingsError;

pub const DEFAULT_ITERATIONS_LIMIT: i32 = 20;
pub const DEFAULT_COLOUR_PERIODICITY: i32 = 1;

/// Everything besides the viewport that decides what a render looks like.
///
/// A plain value: readers take a copy under the settings lock, so a render
/// pass never sees a half-applied update. Every setter validates first and
/// leaves the value untouched on error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    iterations_limit: i32,
    fractal_kind: FractalKinds,
    constant: Complex,
    colour_mode: ColourMode,
    colour_periodicity: i32,
    antialiasing: bool,
    orbit_mode: bool,
    orbit_visible: bool,
    orbit_point: Complex,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            iterations_limit: DEFAULT_ITERATIONS_LIMIT,
            fractal_kind: FractalKinds::default(),
            constant: DEFAULT_JULIA_CONSTANT,
            colour_mode: ColourMode::default(),
            colour_periodicity: DEFAULT_COLOUR_PERIODICITY,
            antialiasing: false,
            orbit_mode: false,
            orbit_visible: false,
            orbit_point: Complex::ZERO,
        }
    }
}

impl RenderSettings {
    pub fn new(
        iterations_limit: i32,
        colour_periodicity: i32,
        constant: Complex,
    ) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        settings.set_iterations_limit(iterations_limit)?;
        settings.set_colour_periodicity(colour_periodicity)?;
        settings.set_constant(constant)?;
        Ok(settings)
    }

    #[must_use]
    pub fn iterations_limit(&self) -> i32 {
        self.iterations_limit
    }

    pub fn set_iterations_limit(&mut self, limit: i32) -> Result<(), SettingsError> {
        if limit < 1 {
            return Err(SettingsError::NonPositiveIterationsLimit(limit));
        }
        self.iterations_limit = limit;
        Ok(())
    }

    #[must_use]
    pub fn fractal_kind(&self) -> FractalKinds {
        self.fractal_kind
    }

    pub fn set_fractal_kind(&mut self, kind: FractalKinds) {
        self.fractal_kind = kind;
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }

    pub fn set_constant(&mut self, constant: Complex) -> Result<(), SettingsError> {
        if !constant.is_finite() {
            return Err(SettingsError::NonFiniteConstant {
                real: constant.real,
                imag: constant.imag,
            });
        }
        self.constant = constant;
        Ok(())
    }

    #[must_use]
    pub fn colour_mode(&self) -> ColourMode {
        self.colour_mode
    }

    pub fn set_colour_mode(&mut self, mode: ColourMode) {
        self.colour_mode = mode;
    }

    #[must_use]
    pub fn colour_periodicity(&self) -> i32 {
        self.colour_periodicity
    }

    pub fn set_colour_periodicity(&mut self, periodicity: i32) -> Result<(), SettingsError> {
        if periodicity < 1 {
            return Err(SettingsError::NonPositiveColourPeriodicity(periodicity));
        }
        self.colour_periodicity = periodicity;
        Ok(())
    }

    #[must_use]
    pub fn antialiasing(&self) -> bool {
        self.antialiasing
    }

    pub fn set_antialiasing(&mut self, enabled: bool) {
        self.antialiasing = enabled;
    }

    #[must_use]
    pub fn orbit_mode(&self) -> bool {
        self.orbit_mode
    }

    /// Entering orbit mode also shows the orbit.
    pub fn set_orbit_mode(&mut self, enabled: bool) {
        self.orbit_mode = enabled;
        if enabled {
            self.orbit_visible = true;
        }
    }

    pub fn toggle_orbit_mode(&mut self) {
        self.set_orbit_mode(!self.orbit_mode);
    }

    #[must_use]
    pub fn orbit_visible(&self) -> bool {
        self.orbit_visible
    }

    /// Hiding the orbit also leaves orbit mode.
    pub fn set_orbit_visible(&mut self, visible: bool) {
        self.orbit_visible = visible;
        if !visible {
            self.orbit_mode = false;
        }
    }

    #[must_use]
    pub fn orbit_point(&self) -> Complex {
        self.orbit_point
    }

    pub fn set_orbit_point(&mut self, point: Complex) -> Result<(), SettingsError> {
        if !point.is_finite() {
            return Err(SettingsError::NonFiniteOrbitPoint {
                real: point.real,
                imag: point.imag,
            });
        }
        self.orbit_point = point;
        Ok(())
    }
}
