/*!
Configuration of a heap.

All configuration for a heap is contained within [Config].
Though, as the mode is the only option which must be given, a heap may also be made directly from a [Mode].

Numeric options are [ConfigOption]s, which carry the bounds an option may be set within.
The mode has no bounds, and is a plain [Mode].
*/

mod config_option;
pub use config_option::ConfigOption;

mod mode;
pub use mode::Mode;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether the heap is a min or max heap.
    pub mode: Mode,

    /// The number of entries to reserve space for when the heap is made.
    pub capacity: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),

            capacity: ConfigOption {
                name: "capacity",
                min: 0,
                max: 1 << 24,
                value: 0,
            },
        }
    }
}

impl Config {
    /// The default configuration, with the given mode.
    pub fn with_mode(mode: Mode) -> Self {
        Config {
            mode,
            ..Config::default()
        }
    }
}
