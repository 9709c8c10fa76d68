//! Startup configuration.
//!
//! A `Config` is built once (defaults, then optional overrides from the page
//! query string), validated, and then only read.

use crate::constants::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Canvas area in px² per generated point.
    pub point_count_divisor: f32,
    pub connection_distance: f32,
    pub cursor_distance: f32,
    pub pointer_radius: f32,
    pub grid_cell_size: f32,
    pub use_spatial_index: bool,
    pub audio_start_sec: f64,
    pub audio_volume: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point_count_divisor: POINT_COUNT_DIVISOR,
            connection_distance: CONNECTION_DISTANCE,
            cursor_distance: CURSOR_DISTANCE,
            pointer_radius: POINTER_RADIUS,
            grid_cell_size: GRID_CELL_SIZE,
            use_spatial_index: USE_SPATIAL_INDEX,
            audio_start_sec: AUDIO_START_SEC,
            audio_volume: AUDIO_VOLUME,
        }
    }
}

impl Config {
    /// Reject values the animation cannot work with.
    pub fn validate(&self) -> Result<()> {
        positive("grid_cell_size", self.grid_cell_size as f64)?;
        positive("point_count_divisor", self.point_count_divisor as f64)?;
        non_negative("connection_distance", self.connection_distance as f64)?;
        non_negative("cursor_distance", self.cursor_distance as f64)?;
        non_negative("pointer_radius", self.pointer_radius as f64)?;
        non_negative("audio_start_sec", self.audio_start_sec)?;
        if !(0.0..=1.0).contains(&self.audio_volume) {
            return Err(Error::InvalidConfiguration {
                field: "audio_volume",
                value: self.audio_volume,
            });
        }
        Ok(())
    }

    /// Apply `key=value` pairs from a URL query string such as
    /// `?grid=0&cell=80`. Unknown keys are ignored.
    pub fn apply_query(&mut self, query: &str) -> Result<()> {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            self.apply_override(key, value)?;
        }
        Ok(())
    }

    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "divisor" => self.point_count_divisor = parse(key, value)?,
            "connect" => self.connection_distance = parse(key, value)?,
            "cursor" => self.cursor_distance = parse(key, value)?,
            "pointer" => self.pointer_radius = parse(key, value)?,
            "cell" => self.grid_cell_size = parse(key, value)?,
            "audio_start" => self.audio_start_sec = parse(key, value)?,
            "volume" => self.audio_volume = parse(key, value)?,
            "grid" => {
                self.use_spatial_index = match value {
                    "1" | "true" | "on" | "" => true,
                    "0" | "false" | "off" => false,
                    _ => return Err(invalid_override(key, value)),
                }
            }
            _ => log::debug!("[config] ignoring unknown override {}={}", key, value),
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| invalid_override(key, value))
}

fn invalid_override(key: &str, value: &str) -> Error {
    Error::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_cell_size_fails_fast() {
        let cfg = Config {
            grid_cell_size: 0.0,
            ..Config::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(Error::InvalidConfiguration {
                field: "grid_cell_size",
                value: 0.0
            })
        );
    }

    #[test]
    fn negative_divisor_fails_fast() {
        let cfg = Config {
            point_count_divisor: -5.0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(Error::InvalidConfiguration {
                field: "point_count_divisor",
                ..
            })
        ));
    }

    #[test]
    fn query_overrides_apply_in_order() {
        let mut cfg = Config::default();
        cfg.apply_query("?grid=0&cell=80&volume=0.5&unknown=7")
            .unwrap();
        assert!(!cfg.use_spatial_index);
        assert_eq!(cfg.grid_cell_size, 80.0);
        assert_eq!(cfg.audio_volume, 0.5);
        assert_eq!(cfg.connection_distance, CONNECTION_DISTANCE);
    }

    #[test]
    fn unparsable_override_is_reported() {
        let mut cfg = Config::default();
        let err = cfg.apply_query("cell=wide").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOverride {
                key: "cell".into(),
                value: "wide".into()
            }
        );
    }

    #[test]
    fn empty_query_changes_nothing() {
        let mut cfg = Config::default();
        cfg.apply_query("").unwrap();
        cfg.apply_query("?").unwrap();
        assert_eq!(cfg, Config::default());
    }
}
