//! Keyboard mapping from Zellij key events to controller events.

use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

use crate::app::Event;

/// Maps a key press to an [`Event`], or `None` for unbound keys.
///
/// Digits `1`–`5` pick an appearance by position; `Tab`, `l` and `Right`
/// step forward, `Shift+Tab`, `h` and `Left` step back.
#[must_use]
pub fn event_for_key(key: &KeyWithModifier) -> Option<Event> {
    if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
        return Some(Event::PreviousAppearance);
    }
    if !key.has_no_modifiers() {
        return None;
    }

    Some(match key.bare_key {
        BareKey::Char(c @ '1'..='5') => Event::SelectAppearance(c as usize - '1' as usize),
        BareKey::Tab | BareKey::Right | BareKey::Char('l') => Event::NextAppearance,
        BareKey::Left | BareKey::Char('h') => Event::PreviousAppearance,
        BareKey::Down | BareKey::Char('j') => Event::KeyDown,
        BareKey::Up | BareKey::Char('k') => Event::KeyUp,
        BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}
