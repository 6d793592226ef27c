//! Input identifiers shared by the engine and surface bindings.

use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Button4,
    Button5,
}

impl MouseButton {
    /// Maps a "primary button" flag to a concrete button:
    /// `true` is [`MouseButton::Left`], `false` is [`MouseButton::Right`].
    pub fn from_primary(primary: bool) -> Self {
        if primary {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Direction of a single scroll notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    #[default]
    Down,
}

impl ScrollDirection {
    pub fn from_down(down: bool) -> Self {
        if down {
            Self::Down
        } else {
            Self::Up
        }
    }
}
