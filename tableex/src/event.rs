use crate::cell::CellRef;

/// Events delivered by the host, each already resolved to the cell it
/// happened on (`None` when the target is not a table cell).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableEvent {
    /// Pointer click (press and release without a drag).
    Click { target: Option<CellRef> },
    /// A drag gesture began on `target`.
    DragStart { target: Option<CellRef> },
    /// The dragged pointer entered `target`.
    DragEnter { target: Option<CellRef> },
    /// The dragged pointer moved over `target` at viewport coordinates `(x, y)`.
    DragOver {
        target: Option<CellRef>,
        x: f64,
        y: f64,
    },
    /// The drag was released over `target`.
    Drop { target: Option<CellRef> },
    /// The drag that started on `source` finished, dropped or cancelled.
    DragEnd { source: Option<CellRef> },
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// The continuous-scroll timer fired.
    ScrollTick,
}

/// What the host should do with an event after the core saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventResult {
    #[default]
    Ignored,
    Consumed,
    /// Consumed, and the host must suppress its default handling
    /// (a drop target has to refuse the default to accept the drop).
    DefaultPrevented,
}

impl EventResult {
    /// Combine the answers of two handlers, keeping the stronger one.
    pub fn or(self, other: EventResult) -> EventResult {
        match (self, other) {
            (EventResult::DefaultPrevented, _) | (_, EventResult::DefaultPrevented) => {
                EventResult::DefaultPrevented
            }
            (EventResult::Consumed, _) | (_, EventResult::Consumed) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    pub fn is_ignored(&self) -> bool {
        *self == EventResult::Ignored
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    Other,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            shift: true,
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[cfg(feature = "crossterm")]
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            _ => Key::Other,
        }
    }
}

#[cfg(feature = "crossterm")]
impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
