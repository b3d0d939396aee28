//! The application frame loop.

use std::time::Duration;

use eframe::{
    App, Frame,
    egui::{CentralPanel, Context, SidePanel, TopBottomPanel},
};
use playdoku_client::{Difficulty, PuzzleService};

use crate::{
    action::{Action, ActionRequestQueue},
    async_work::WorkDispatcher,
    handler, input,
    state::Session,
    ui, view_model,
};

/// The desktop player: one session, one background worker.
#[derive(Debug)]
pub(crate) struct PlaydokuApp {
    session: Session,
    dispatcher: WorkDispatcher,
}

impl PlaydokuApp {
    pub(crate) fn new(
        service: impl PuzzleService + Send + 'static,
        difficulty: Option<Difficulty>,
        hint_budget: u8,
    ) -> Self {
        Self {
            session: Session::new(difficulty, hint_budget),
            dispatcher: WorkDispatcher::spawn(service),
        }
    }
}

impl App for PlaydokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        // Completed service calls re-enter the loop as actions; the session
        // decides whether each response is still current.
        for response in self.dispatcher.poll() {
            action_queue.request(Action::Work(response));
        }
        handler::handle_all(&mut self.session, &mut self.dispatcher, &mut action_queue);

        ctx.input(|i| input::handle_input(i, &mut action_queue));
        handler::handle_all(&mut self.session, &mut self.dispatcher, &mut action_queue);

        let vm = view_model::build(&self.session);

        SidePanel::right("sidebar")
            .resizable(false)
            .show(ctx, |ui| ui::sidebar::show(ui, &vm, &mut action_queue));
        TopBottomPanel::bottom("status_line")
            .show(ctx, |ui| ui::status_line::show(ui, &vm, &mut action_queue));
        CentralPanel::default().show(ctx, |ui| ui::grid::show(ui, &vm, &mut action_queue));

        handler::handle_all(&mut self.session, &mut self.dispatcher, &mut action_queue);

        // Timer tick and worker poll both ride the repaint; no tick fires
        // once the session leaves these states.
        if self.session.status().is_playing() || self.session.status().is_loading() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
