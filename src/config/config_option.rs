use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

/// A configurable value, together with the bounds within which the value may be set.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the option to `value`, if `value` is within the bounds of the option.
    /// Otherwise, the option is unchanged and an error is returned.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if value < self.min || value > self.max {
            log::warn!(target: targets::CONFIG, "Out of bounds value for {}", self.name);
            return Err(err::ConfigError::OutOfBounds);
        }
        self.value = value;
        Ok(())
    }
}
