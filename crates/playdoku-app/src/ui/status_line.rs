//! Bottom status line: session phase and transient notices.

use eframe::egui::Ui;

use crate::{
    action::{Action, ActionRequestQueue},
    state::SessionStatus,
    view_model::{GameViewModel, format_elapsed},
};

pub(crate) fn show(ui: &mut Ui, vm: &GameViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        match vm.status {
            SessionStatus::Idle => {
                ui.label("Press \u{201c}New game\u{201d} to fetch a puzzle.");
            }
            SessionStatus::Loading => {
                ui.spinner();
                ui.label("Fetching puzzle\u{2026}");
            }
            SessionStatus::Playing => {
                ui.label("Playing");
            }
            SessionStatus::Finished => {
                ui.label(format!("Solved in {}", format_elapsed(vm.elapsed)));
            }
            SessionStatus::Exited => {
                ui.label("Game left.");
            }
        }

        if let Some(notice) = &vm.notice {
            ui.separator();
            ui.label(notice);
            if ui.small_button("\u{2715}").clicked() {
                action_queue.request(Action::DismissNotice);
            }
        }
    });
}
