use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    AddPage,
    RemovePage,
    ToggleAutoplay,
    AutoplayTick,     // Sent by the autoplay timer
    DragStart(u16),   // Mouse pressed at column
    DragMove(u16),    // Mouse dragged to column
    DragEnd,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextPage,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevPage,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevPage,

        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::FirstPage,
        (KeyCode::Home, _) => Action::FirstPage,
        (KeyCode::Char('G'), _) => Action::LastPage,
        (KeyCode::End, _) => Action::LastPage,

        (KeyCode::Char('+'), _) | (KeyCode::Char('='), KeyModifiers::NONE) => Action::AddPage,
        (KeyCode::Char('-'), KeyModifiers::NONE) => Action::RemovePage,

        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAutoplay,

        _ => Action::None,
    }
}

/// Map mouse input onto drag gestures; the wheel pages like the arrow keys
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::DragStart(mouse.column),
        MouseEventKind::Drag(MouseButton::Left) => Action::DragMove(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => Action::DragEnd,
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Action::NextPage,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Action::PrevPage,
        _ => Action::None,
    }
}
