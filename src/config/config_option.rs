use crate::types::err::ConfigError;

/// A configuration option, bounded by some minimum and maximum value.
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

impl<T: Clone + PartialOrd + std::fmt::Display> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    /// Otherwise, the option is unchanged and an error is returned.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        self.check(&value)?;
        self.value = value;
        Ok(())
    }

    /// Ok if the current value of the option is within the bounds of the option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check(&self.value)
    }

    fn check(&self, value: &T) -> Result<(), ConfigError> {
        let (min, max) = self.min_max();
        match min <= *value && *value <= max {
            true => Ok(()),
            false => Err(ConfigError::OutOfRange {
                option: self.name,
                value: value.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    fn small_option() -> ConfigOption<usize> {
        ConfigOption {
            name: "small",
            min: 1,
            max: 4,
            value: 2,
        }
    }

    #[test]
    fn set_within_bounds() {
        let mut option = small_option();
        assert!(option.set(4).is_ok());
        assert_eq!(option.value, 4);
    }

    #[test]
    fn set_outside_bounds() {
        let mut option = small_option();
        assert_eq!(
            option.set(0),
            Err(ConfigError::OutOfRange {
                option: "small",
                value: "0".to_string(),
                min: "1".to_string(),
                max: "4".to_string(),
            })
        );
        assert_eq!(option.value, 2);
    }
}
