//! Game controls: new game, difficulty, hint, undo, exit.

use eframe::egui::{Button, ComboBox, Ui, Vec2};
use playdoku_client::Difficulty;
use playdoku_core::Digit;

use crate::{
    action::{Action, ActionRequestQueue},
    view_model::{GameViewModel, format_elapsed},
};

const DIFFICULTY_CHOICES: [Option<Difficulty>; 4] = [
    None,
    Some(Difficulty::Easy),
    Some(Difficulty::Medium),
    Some(Difficulty::Hard),
];

fn difficulty_label(difficulty: Option<Difficulty>) -> &'static str {
    match difficulty {
        None => "any",
        Some(d) => d.as_str(),
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameViewModel, action_queue: &mut ActionRequestQueue) {
    ui.heading("Playdoku");
    ui.separator();

    let playing = vm.status.is_playing();

    ui.label(format!("Time {}", format_elapsed(vm.elapsed)));
    ui.label(format!("Hints left: {}", vm.hints_remaining));
    if let Some(reported) = &vm.reported_difficulty {
        ui.label(format!("Difficulty: {reported}"));
    }
    ui.separator();

    let mut choice = vm.difficulty;
    ComboBox::from_label("Difficulty")
        .selected_text(difficulty_label(choice))
        .show_ui(ui, |ui| {
            for option in DIFFICULTY_CHOICES {
                ui.selectable_value(&mut choice, option, difficulty_label(option));
            }
        });
    if choice != vm.difficulty {
        action_queue.request(Action::SetDifficulty(choice));
    }

    // Keypad: a digit that already appears 9 times has nowhere left to go.
    ui.horizontal_wrapped(|ui| {
        for digit in Digit::ALL {
            let spent = vm.digit_counts[digit] >= 9;
            let key = Button::new(digit.to_string()).min_size(Vec2::splat(28.0));
            if ui.add_enabled(playing && !spent, key).clicked() {
                action_queue.request(Action::EnterDigit(digit));
            }
        }
    });
    ui.separator();

    if ui.button("New game").clicked() {
        action_queue.request(Action::StartNewGame);
    }
    if ui.add_enabled(playing, Button::new("Hint")).clicked() {
        action_queue.request(Action::RequestHint);
    }
    if ui.add_enabled(vm.can_undo, Button::new("Undo")).clicked() {
        action_queue.request(Action::Undo);
    }
    if ui.add_enabled(playing, Button::new("Exit game")).clicked() {
        action_queue.request(Action::ExitGame);
    }
}
