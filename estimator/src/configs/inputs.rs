use serde::{Deserialize, Serialize};

/// A bounded numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderConfig {
    /// Clamps `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        let Self {
            min,
            max,
            default,
            step,
        } = *self;

        if ![min, max, default, step].iter().all(|v| v.is_finite()) {
            return Err(format!("inputs.{name}: every bound must be finite"));
        }
        if min > max {
            return Err(format!("inputs.{name}: min ({min}) is greater than max ({max})"));
        }
        if default < min || default > max {
            return Err(format!("inputs.{name}: default ({default}) is out of range"));
        }
        if step <= 0.0 {
            return Err(format!("inputs.{name}: step must be positive"));
        }

        Ok(())
    }
}

/// The ranges offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct InputsConfig {
    /// Square meters.
    pub area: SliderConfig,
    /// Years.
    pub age: SliderConfig,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            area: SliderConfig {
                min: 30.,
                max: 300.,
                default: 100.,
                step: 1.,
            },
            age: SliderConfig {
                min: 0.,
                max: 50.,
                default: 5.,
                step: 1.,
            },
        }
    }
}

impl InputsConfig {
    pub(super) fn validate(&self) -> Result<(), String> {
        self.area.validate("area")?;
        self.age.validate("age")?;

        if self.area.min <= 0.0 {
            return Err("inputs.area: min must be greater than zero".into());
        }
        if self.age.min < 0.0 {
            return Err("inputs.age: min must not be negative".into());
        }

        Ok(())
    }
}
