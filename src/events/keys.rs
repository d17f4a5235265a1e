// Key to action mapping, kept free of web-sys so it can be host-tested.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    NextSection,
    PrevSection,
    GoToSection(usize),
    ToggleMusic,
    NextTrack,
    PrevTrack,
}

#[inline]
pub fn action_for_key(key: &str, shift: bool) -> Option<KeyAction> {
    match key {
        "ArrowRight" | "PageDown" if shift => Some(KeyAction::NextTrack),
        "ArrowLeft" | "PageUp" if shift => Some(KeyAction::PrevTrack),
        "ArrowRight" | "PageDown" => Some(KeyAction::NextSection),
        "ArrowLeft" | "PageUp" => Some(KeyAction::PrevSection),
        "Home" => Some(KeyAction::GoToSection(0)),
        "End" => Some(KeyAction::GoToSection(usize::MAX)),
        "m" | "M" => Some(KeyAction::ToggleMusic),
        "1" | "2" | "3" | "4" | "5" => key
            .parse::<usize>()
            .ok()
            .map(|n| KeyAction::GoToSection(n - 1)),
        _ => None,
    }
}
