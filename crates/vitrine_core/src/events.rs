//! Input event model
//!
//! Platform-agnostic pointer and keyboard events. Hosts translate their
//! native input into [`Event`] values; interaction controllers consume them
//! without knowing which windowing or DOM library produced them.

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer left the host surface while pressed
    pub const POINTER_CANCEL: EventType = 4;
    pub const KEY_DOWN: EventType = 20;
    pub const BLUR: EventType = 11;
}

/// A 2D position in host coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    /// Index of the list entry the event targets, if any
    pub target: Option<usize>,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug)]
pub enum EventData {
    Pointer { position: Point },
    Key { key: KeyCode, modifiers: Modifiers },
    None,
}

impl Event {
    /// Pointer event at a position
    pub fn pointer(event_type: EventType, target: Option<usize>, position: Point) -> Self {
        Self {
            event_type,
            target,
            data: EventData::Pointer { position },
        }
    }

    /// Key press without modifiers
    pub fn key_down(target: Option<usize>, key: KeyCode) -> Self {
        Self::key_chord(target, key, Modifiers::NONE)
    }

    pub fn key_chord(target: Option<usize>, key: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            event_type: event_types::KEY_DOWN,
            target,
            data: EventData::Key { key, modifiers },
        }
    }

    /// Event without payload (e.g. blur)
    pub fn bare(event_type: EventType) -> Self {
        Self {
            event_type,
            target: None,
            data: EventData::None,
        }
    }

    /// Pointer position, when this is a pointer event
    pub fn position(&self) -> Option<Point> {
        match self.data {
            EventData::Pointer { position } => Some(position),
            _ => None,
        }
    }

    /// Held modifiers, when this is a key event
    pub fn modifiers(&self) -> Option<Modifiers> {
        match self.data {
            EventData::Key { modifiers, .. } => Some(modifiers),
            _ => None,
        }
    }

    /// Key code, when this is a key event
    pub fn key(&self) -> Option<KeyCode> {
        match self.data {
            EventData::Key { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Virtual key codes (platform-agnostic)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);

    // Arrow keys
    pub const LEFT: KeyCode = KeyCode(0x25);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const RIGHT: KeyCode = KeyCode(0x27);
    pub const DOWN: KeyCode = KeyCode(0x28);

    // Navigation keys
    pub const HOME: KeyCode = KeyCode(0x24);
    pub const END: KeyCode = KeyCode(0x23);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    bits: u8,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { bits: 0 };
    pub const SHIFT: u8 = 0b0001;
    pub const CTRL: u8 = 0b0010;
    pub const ALT: u8 = 0b0100;
    pub const META: u8 = 0b1000;

    pub const fn from_bits(bits: u8) -> Self {
        Self { bits }
    }

    /// Ctrl, Alt or Meta held: the key is part of a shortcut chord
    pub const fn is_chord(&self) -> bool {
        self.bits & (Self::CTRL | Self::ALT | Self::META) != 0
    }
}
