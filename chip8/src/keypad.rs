//! Hexadecimal keypad.
use crate::constants::*;

/// State of the 16 keys, as written by the host between steps.
///
/// Each slot holds [`KEY_PRESSED`] while the key is down, and
/// [`KEY_RELEASED`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    slots: [u8; KEY_COUNT as usize],
}

impl Default for Keypad {
    fn default() -> Self {
        Self {
            slots: [KEY_RELEASED; KEY_COUNT as usize],
        }
    }
}

impl Keypad {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set(&mut self, key: KeyCode, pressed: bool) {
        self.slots[key.as_u8() as usize] = if pressed { KEY_PRESSED } else { KEY_RELEASED };
    }

    /// Whether the key with the given id is held down.
    ///
    /// Ids outside of the keypad are never pressed.
    #[inline]
    pub fn is_pressed(&self, key_id: u8) -> bool {
        self.slots
            .get(key_id as usize)
            .map(|slot| *slot == KEY_PRESSED)
            .unwrap_or(false)
    }

    /// Check whether any key is pressed down.
    #[inline]
    pub fn any_key(&self) -> bool {
        self.slots.iter().any(|slot| *slot == KEY_PRESSED)
    }

    /// Retrieve the lowest key that is pressed down.
    #[inline]
    pub fn first_key(&self) -> Option<u8> {
        (0..KEY_COUNT).find(|k| self.is_pressed(*k))
    }

    /// Set all keys to up.
    pub fn clear(&mut self) {
        self.slots.fill(KEY_RELEASED);
    }

    /// Raw slot values.
    pub fn slots(&self) -> &[u8; KEY_COUNT as usize] {
        &self.slots
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "u8", into = "u8")
)]
#[repr(u8)]
pub enum KeyCode {
    Key0 = 0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF = 0xF,
}

impl KeyCode {
    #[inline(always)]
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let key_id = self.as_u8();
        write!(f, "k{key_id:x}")
    }
}

impl From<KeyCode> for u8 {
    fn from(keycode: KeyCode) -> Self {
        keycode.as_u8()
    }
}

impl TryFrom<u8> for KeyCode {
    type Error = InvalidKeyCode;

    fn try_from(key_id: u8) -> Result<Self, Self::Error> {
        match key_id {
            0 => Ok(Self::Key0),
            1 => Ok(Self::Key1),
            2 => Ok(Self::Key2),
            3 => Ok(Self::Key3),
            4 => Ok(Self::Key4),
            5 => Ok(Self::Key5),
            6 => Ok(Self::Key6),
            7 => Ok(Self::Key7),
            8 => Ok(Self::Key8),
            9 => Ok(Self::Key9),
            10 => Ok(Self::KeyA),
            11 => Ok(Self::KeyB),
            12 => Ok(Self::KeyC),
            13 => Ok(Self::KeyD),
            14 => Ok(Self::KeyE),
            15 => Ok(Self::KeyF),
            _ => Err(InvalidKeyCode),
        }
    }
}

#[derive(Debug)]
pub struct InvalidKeyCode;

impl std::error::Error for InvalidKeyCode {}

impl std::fmt::Display for InvalidKeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "keycode must be in range 0 <= keycode < 16")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_key_state() {
        let mut keypad = Keypad::default();

        keypad.set(KeyCode::Key0, true);
        assert_eq!(keypad.slots()[0], KEY_PRESSED);
        assert!(keypad.is_pressed(0));
        assert!(!keypad.is_pressed(1));
        assert!(!keypad.is_pressed(7));

        keypad.set(KeyCode::Key7, true);
        assert!(keypad.is_pressed(0));
        assert!(keypad.is_pressed(7));
        assert_eq!(keypad.first_key(), Some(0));

        keypad.set(KeyCode::Key0, false);
        assert_eq!(keypad.slots()[0], KEY_RELEASED);
        assert!(!keypad.is_pressed(0));
        assert!(keypad.is_pressed(7));
        assert_eq!(keypad.first_key(), Some(7));

        keypad.set(KeyCode::KeyF, true);
        assert!(keypad.is_pressed(15));
        assert_eq!(keypad.first_key(), Some(7));

        keypad.clear();
        assert!(!keypad.any_key());
        assert_eq!(keypad.first_key(), None);
    }

    #[test]
    fn test_out_of_range_key_is_released() {
        let mut keypad = Keypad::default();
        keypad.set(KeyCode::KeyF, true);
        assert!(!keypad.is_pressed(16));
        assert!(!keypad.is_pressed(0xFF));
    }

    #[test]
    fn test_keycode_conversion() {
        for id in 0..KEY_COUNT {
            let keycode = KeyCode::try_from(id).unwrap();
            assert_eq!(u8::from(keycode), id);
        }
        assert!(KeyCode::try_from(KEY_COUNT).is_err());
        assert_eq!(KeyCode::KeyA.to_string(), "ka");
    }
}
