/*!
Configuration of a context.

All configuration of a context is contained in a [Config], and each option is a [ConfigOption] bounded by some minimum and maximum value.

```rust
# use deduction_lint::config::Config;
let mut config = Config::default();
assert_eq!(config.truth_functional_depth.value, 2);

assert!(config.truth_functional_depth.set(3).is_ok());
assert!(config.truth_functional_depth.set(0).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::{structures::line::Label, truth_functional::MAX_DEPTH};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The count of rounds of the [truth-functional solver](crate::truth_functional).
    pub truth_functional_depth: ConfigOption<usize>,

    /// The largest label permitted in a document.
    ///
    /// Labels above the limit are a structural error.
    pub label_limit: ConfigOption<Label>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            truth_functional_depth: ConfigOption {
                name: "truth_functional_depth",
                min: 1,
                max: 8,
                value: MAX_DEPTH,
            },

            label_limit: ConfigOption {
                name: "label_limit",
                min: 1,
                max: u32::MAX as Label,
                value: 65_536,
            },
        }
    }
}
