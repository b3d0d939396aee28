//! Keyboard shortcut mapping.

use eframe::egui::{InputState, Key};
use playdoku_core::Digit;

use crate::action::{Action, ActionRequestQueue, MoveDirection};

struct Shortcut {
    key: Key,
    command: bool,
    action: fn() -> Action,
}

impl Shortcut {
    const fn plain(key: Key, action: fn() -> Action) -> Self {
        Self {
            key,
            command: false,
            action,
        }
    }

    const fn command(key: Key, action: fn() -> Action) -> Self {
        Self {
            key,
            command: true,
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 19] = [
    Shortcut::command(Key::N, || Action::StartNewGame),
    Shortcut::command(Key::Z, || Action::Undo),
    Shortcut::plain(Key::H, || Action::RequestHint),
    Shortcut::plain(Key::ArrowUp, || Action::MoveSelection(MoveDirection::Up)),
    Shortcut::plain(Key::ArrowDown, || Action::MoveSelection(MoveDirection::Down)),
    Shortcut::plain(Key::ArrowLeft, || Action::MoveSelection(MoveDirection::Left)),
    Shortcut::plain(Key::ArrowRight, || {
        Action::MoveSelection(MoveDirection::Right)
    }),
    Shortcut::plain(Key::Escape, || Action::ClearSelection),
    Shortcut::plain(Key::Delete, || Action::ClearCell),
    Shortcut::plain(Key::Backspace, || Action::ClearCell),
    Shortcut::plain(Key::Num1, || Action::EnterDigit(Digit::D1)),
    Shortcut::plain(Key::Num2, || Action::EnterDigit(Digit::D2)),
    Shortcut::plain(Key::Num3, || Action::EnterDigit(Digit::D3)),
    Shortcut::plain(Key::Num4, || Action::EnterDigit(Digit::D4)),
    Shortcut::plain(Key::Num5, || Action::EnterDigit(Digit::D5)),
    Shortcut::plain(Key::Num6, || Action::EnterDigit(Digit::D6)),
    Shortcut::plain(Key::Num7, || Action::EnterDigit(Digit::D7)),
    Shortcut::plain(Key::Num8, || Action::EnterDigit(Digit::D8)),
    Shortcut::plain(Key::Num9, || Action::EnterDigit(Digit::D9)),
];

/// Translates pressed keys into actions.
///
/// `modifiers.command` is Ctrl on Windows/Linux and Cmd on macOS.
pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    for shortcut in &SHORTCUTS {
        if i.key_pressed(shortcut.key) && i.modifiers.command == shortcut.command {
            action_queue.request((shortcut.action)());
            return;
        }
    }
}
