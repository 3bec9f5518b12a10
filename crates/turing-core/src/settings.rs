use std::time::Duration;

use rand::Rng;

use crate::error::CoreError;

/// Tunables for a game: how often the human side is drawn and how long a
/// reply takes to arrive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSettings {
    /// Probability in `[0, 1]` that a new session gets the human responder.
    pub human_probability: f64,
    pub think_time: ThinkTime,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            human_probability: 0.5,
            think_time: ThinkTime::default(),
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0.0..=1.0).contains(&self.human_probability) {
            return Err(CoreError::InvalidSetting(format!(
                "human probability {} is outside [0, 1]",
                self.human_probability
            )));
        }
        if self.think_time.min > self.think_time.max {
            return Err(CoreError::InvalidSetting(format!(
                "think time minimum {:?} exceeds maximum {:?}",
                self.think_time.min, self.think_time.max
            )));
        }
        Ok(())
    }
}

/// Artificial delay inserted before every reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkTime {
    pub min: Duration,
    pub max: Duration,
}

impl Default for ThinkTime {
    fn default() -> Self {
        Self {
            min: Duration::from_secs(1),
            max: Duration::from_secs(3),
        }
    }
}

impl ThinkTime {
    /// No delay at all.
    pub const NONE: ThinkTime = ThinkTime {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    /// Draw a delay uniformly from `[min, max]` at millisecond resolution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        if min >= max {
            return Duration::from_millis(min);
        }
        Duration::from_millis(rng.gen_range(min..=max))
    }
}
