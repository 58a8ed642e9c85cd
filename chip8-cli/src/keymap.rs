//! Host keyboard to keypad mapping.
use chip8::KeyCode;
use serde::Deserialize;

/// Mapping of host keyboard characters to Chip8 keycodes.
///
/// The default layout puts the 4x4 keypad on the left side of a
/// QWERTY keyboard:
///
/// ```text
/// 1 2 3 4      1 2 3 C
/// q w e r  ->  4 5 6 D
/// a s d f      7 8 9 E
/// z x c v      A 0 B F
/// ```
#[derive(Debug, Clone)]
pub struct KeyMap {
    keys: Vec<(char, KeyCode)>,
}

/// Single entry in the keymap configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyBinding {
    pub key: char,
    pub chip8: KeyCode,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::*;

        #[rustfmt::skip]
        let keys = vec![
            ('1', Key1), ('2', Key2), ('3', Key3), ('4', KeyC),
            ('q', Key4), ('w', Key5), ('e', Key6), ('r', KeyD),
            ('a', Key7), ('s', Key8), ('d', Key9), ('f', KeyE),
            ('z', KeyA), ('x', Key0), ('c', KeyB), ('v', KeyF),
        ];

        Self { keys }
    }
}

impl KeyMap {
    pub fn from_bindings(bindings: &[KeyBinding]) -> Self {
        Self {
            keys: bindings
                .iter()
                .map(|binding| (binding.key.to_ascii_lowercase(), binding.chip8))
                .collect(),
        }
    }

    /// Keycode bound to the host key. Letters match in either case.
    pub fn lookup(&self, key: char) -> Option<KeyCode> {
        let key = key.to_ascii_lowercase();
        self.keys
            .iter()
            .find(|(host, _)| *host == key)
            .map(|(_, keycode)| *keycode)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_layout() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.lookup('1'), Some(KeyCode::Key1));
        assert_eq!(keymap.lookup('4'), Some(KeyCode::KeyC));
        assert_eq!(keymap.lookup('x'), Some(KeyCode::Key0));
        assert_eq!(keymap.lookup('V'), Some(KeyCode::KeyF));
        assert_eq!(keymap.lookup('p'), None);

        let mut ids: Vec<u8> = "1234qwerasdfzxcv"
            .chars()
            .filter_map(|c| keymap.lookup(c))
            .map(u8::from)
            .collect();
        ids.sort();
        assert_eq!(ids, (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_from_bindings() {
        let keymap = KeyMap::from_bindings(&[
            KeyBinding {
                key: 'K',
                chip8: KeyCode::Key5,
            },
            KeyBinding {
                key: 'j',
                chip8: KeyCode::Key4,
            },
        ]);
        assert_eq!(keymap.lookup('k'), Some(KeyCode::Key5));
        assert_eq!(keymap.lookup('J'), Some(KeyCode::Key4));
        assert_eq!(keymap.lookup('1'), None);
    }
}
