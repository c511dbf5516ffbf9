/// A configuration option, bounded by some minimum and maximum value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if within bounds, and otherwise returns the value given.
    pub fn set(&mut self, value: T) -> Result<(), T> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut option = ConfigOption {
            name: "test",
            min: 1,
            max: 8,
            value: 2,
        };

        assert_eq!(option.set(9), Err(9));
        assert_eq!(option.value, 2);
        assert_eq!(option.set(8), Ok(()));
        assert_eq!(option.value, 8);
        assert_eq!(option.min_max(), (1, 8));
    }
}
