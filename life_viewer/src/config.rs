// config.rs - Viewer settings with environment overrides

use std::str::FromStr;
use std::time::Duration;

use egui::Color32;
use tracing::warn;

/// Window and simulation settings for the viewer.
#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub spacing: f32,
    pub tick_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub random_density: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            cols: 50,
            rows: 50,
            cell_size: 15.0,
            spacing: 0.5,
            tick_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            random_density: 0.33,
        }
    }
}

impl ViewerConfig {
    /// Defaults, overridden by `LIFE_COLS`, `LIFE_ROWS` and `LIFE_TICK_MS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let tick_ms = defaults.tick_interval.as_millis() as u64;
        Self {
            cols: positive_override("LIFE_COLS", lookup("LIFE_COLS"), defaults.cols),
            rows: positive_override("LIFE_ROWS", lookup("LIFE_ROWS"), defaults.rows),
            tick_interval: Duration::from_millis(positive_override(
                "LIFE_TICK_MS",
                lookup("LIFE_TICK_MS"),
                tick_ms,
            )),
            ..defaults
        }
    }

    /// Pixel size of the painted grid along one axis of `cells` cells.
    pub fn extent(&self, cells: usize) -> f32 {
        (self.cell_size + self.spacing) * cells as f32 - self.spacing
    }
}

/// Parses `raw` as a non-zero value, falling back to `default` with a warning.
fn positive_override<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + PartialOrd + Default + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            warn!(key, value = %raw, "ignoring invalid override, must be a positive integer");
            default
        }
    }
}
