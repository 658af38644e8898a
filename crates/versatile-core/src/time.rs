//! Time system for the Versatile camera
//!
//! Frames feed raw wall-clock deltas into an accumulator; the simulation then
//! runs in fixed steps, each with its own delta and clock reading.

use serde::{Deserialize, Serialize};

/// Configuration for game time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many in-game seconds pass per real second
    pub time_scale: f32,
    /// Fixed timestep for the simulation tick (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

/// Frame clock plus the fixed-step simulation clock
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    pub config: TimeConfig,
    /// Scaled time fed in by frames, in seconds
    pub total_time: f64,
    /// Scaled delta of the last frame
    pub delta_time: f32,
    pub frame_count: u64,
    /// Time consumed by fixed steps, in seconds
    pub fixed_time: f64,
    /// Scaled time not yet consumed by a fixed step
    fixed_accumulator: f64,
}

impl GameTime {
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Feed the raw delta of a frame.
    ///
    /// Negative and non-finite deltas count as a zero-length frame.
    pub fn update(&mut self, raw_delta: f32) {
        let raw_delta = if raw_delta.is_finite() {
            raw_delta.max(0.0)
        } else {
            0.0
        };
        self.frame_count += 1;
        let scale = self.config.time_scale.max(0.0);
        self.delta_time = raw_delta.min(self.config.max_delta_time) * scale;
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time as f64;
    }

    /// Delta handed to every fixed step
    pub fn fixed_timestep(&self) -> f32 {
        self.config.fixed_timestep
    }

    /// Consume one fixed step if enough time has accumulated.
    ///
    /// Advances `fixed_time` by exactly one step, so the simulation clock
    /// moves by the same amount the step integrates.
    pub fn step_fixed(&mut self) -> bool {
        let step = self.config.fixed_timestep as f64;
        if step <= 0.0 || self.fixed_accumulator < step {
            return false;
        }
        self.fixed_accumulator -= step;
        self.fixed_time += step;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_scales_and_clamps() {
        let mut time = GameTime::new(TimeConfig {
            time_scale: 2.0,
            ..Default::default()
        });
        time.update(0.016);
        assert!((time.delta_time - 0.032).abs() < 1e-6);
        assert_eq!(time.frame_count, 1);

        time.update(10.0);
        assert!((time.delta_time - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_is_clamped() {
        let mut time = GameTime::default();
        time.update(-1.0);
        assert_eq!(time.delta_time, 0.0);
        assert_eq!(time.total_time, 0.0);

        time.update(f32::NAN);
        assert_eq!(time.delta_time, 0.0);
    }

    #[test]
    fn test_fixed_steps_match_clock() {
        let mut time = GameTime::new(TimeConfig {
            time_scale: 2.0,
            fixed_timestep: 0.1,
            ..Default::default()
        });
        time.update(0.1);

        let mut steps = 0;
        let mut simulated = 0.0_f64;
        while time.step_fixed() {
            steps += 1;
            simulated += time.fixed_timestep() as f64;
        }
        assert_eq!(steps, 2);
        assert!((simulated - time.total_time).abs() < 1e-6);
        assert!((time.fixed_time - time.total_time).abs() < 1e-6);
        assert!(!time.step_fixed());
    }

    #[test]
    fn test_zero_timestep_never_steps() {
        let mut time = GameTime::new(TimeConfig {
            fixed_timestep: 0.0,
            ..Default::default()
        });
        time.update(0.1);
        assert!(!time.step_fixed());
    }
}
