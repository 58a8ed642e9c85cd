//! Command line configuration.
use std::{fmt, fs, path::Path};

use chip8::prelude::Chip8Conf;
use serde::Deserialize;

use crate::keymap::{KeyBinding, KeyMap};

/// Contents of the optional YAML configuration file.
///
/// ```yaml
/// strict: true
/// step_limit: 100000
/// timer_mode: { mode: ratio, value: 8 }
/// keymap:
///   - { key: "k", chip8: 5 }
/// hold: "k"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConf {
    #[serde(flatten)]
    pub vm: Chip8Conf,
    /// Replaces the default keyboard layout when present.
    pub keymap: Option<Vec<KeyBinding>>,
    /// Host keys held down for the whole run.
    pub hold: String,
}

impl CliConf {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn keymap(&self) -> KeyMap {
        match &self.keymap {
            Some(bindings) => KeyMap::from_bindings(bindings),
            None => KeyMap::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl std::error::Error for ConfError {}

impl fmt::Display for ConfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config error: {err}"),
            Self::Yaml(err) => write!(f, "config error: {err}"),
        }
    }
}

impl From<std::io::Error> for ConfError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

#[cfg(test)]
mod test {
    use chip8::{Hz, KeyCode, TimerMode};

    use super::*;

    #[test]
    fn test_empty_conf() {
        let conf = CliConf::from_yaml("{}").unwrap();
        assert!(!conf.vm.strict);
        assert_eq!(conf.vm.timer_mode, TimerMode::Step);
        assert!(conf.keymap.is_none());
        assert_eq!(conf.keymap().lookup('w'), Some(KeyCode::Key5));
    }

    #[test]
    fn test_full_conf() {
        let conf = CliConf::from_yaml(
            r#"
strict: true
step_limit: 1000
clock_frequency: 500
rng_seed: 42
timer_mode:
  mode: clock
  value: 60
keymap:
  - key: "k"
    chip8: 5
hold: "k"
"#,
        )
        .unwrap();

        assert!(conf.vm.strict);
        assert_eq!(conf.vm.step_limit, Some(1000));
        assert_eq!(conf.vm.clock_frequency, Some(Hz(500)));
        assert_eq!(conf.vm.rng_seed, Some(42));
        assert_eq!(conf.vm.timer_mode, TimerMode::Clock(Hz(60)));
        assert_eq!(conf.hold, "k");
        assert_eq!(conf.keymap().lookup('k'), Some(KeyCode::Key5));
        assert_eq!(conf.keymap().lookup('w'), None);
    }

    #[test]
    fn test_invalid_keycode() {
        let result = CliConf::from_yaml("keymap:\n  - { key: \"k\", chip8: 16 }\n");
        assert!(matches!(result, Err(ConfError::Yaml(_))));
    }
}
