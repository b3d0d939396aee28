//! The 9×9 grid, rendered from the frame's view model.

use eframe::egui::{Align2, Color32, FontId, Rect, Sense, Stroke, Ui, Vec2, pos2};
use playdoku_core::Position;

use crate::{
    action::{Action, ActionRequestQueue},
    view_model::{CellVisual, GameViewModel},
};

const BACKGROUND: Color32 = Color32::from_rgb(0xfd, 0xfd, 0xf8);
const RELATED_FILL: Color32 = Color32::from_rgb(0xe8, 0xed, 0xf5);
const SAME_VALUE_FILL: Color32 = Color32::from_rgb(0xd0, 0xdd, 0xf0);
const SELECTED_FILL: Color32 = Color32::from_rgb(0xb8, 0xcc, 0xee);
const CONFLICT_FILL: Color32 = Color32::from_rgb(0xf4, 0xc7, 0xc3);
const GIVEN_TEXT: Color32 = Color32::from_rgb(0x20, 0x24, 0x28);
const PLAYER_TEXT: Color32 = Color32::from_rgb(0x2b, 0x5d, 0xab);
const CONFLICT_TEXT: Color32 = Color32::from_rgb(0xa3, 0x27, 0x1f);
const LINE: Color32 = Color32::from_rgb(0x9a, 0x9a, 0x96);
const BOX_LINE: Color32 = Color32::from_rgb(0x3a, 0x3a, 0x38);

fn cell_fill(visual: CellVisual) -> Color32 {
    if visual.contains(CellVisual::CONFLICT) {
        CONFLICT_FILL
    } else if visual.contains(CellVisual::SELECTED) {
        SELECTED_FILL
    } else if visual.contains(CellVisual::SAME_VALUE) {
        SAME_VALUE_FILL
    } else if visual.contains(CellVisual::RELATED) {
        RELATED_FILL
    } else {
        BACKGROUND
    }
}

fn cell_text(visual: CellVisual) -> Color32 {
    if visual.contains(CellVisual::CONFLICT) {
        CONFLICT_TEXT
    } else if visual.contains(CellVisual::LOCKED) {
        GIVEN_TEXT
    } else {
        PLAYER_TEXT
    }
}

/// Paints the board and maps clicks to cell selections.
pub(crate) fn show(ui: &mut Ui, vm: &GameViewModel, action_queue: &mut ActionRequestQueue) {
    let side = ui.available_size().min_elem().max(9.0 * 24.0);
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click());
    let cell_side = side / 9.0;
    let painter = ui.painter_at(rect);

    for pos in Position::ALL {
        let cell = &vm.grid[pos];
        let min = pos2(
            rect.min.x + f32::from(pos.x()) * cell_side,
            rect.min.y + f32::from(pos.y()) * cell_side,
        );
        let cell_rect = Rect::from_min_size(min, Vec2::splat(cell_side));
        painter.rect_filled(cell_rect, 0.0, cell_fill(cell.visual));
        if let Some(digit) = cell.digit {
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                digit.to_string(),
                FontId::proportional(cell_side * 0.55),
                cell_text(cell.visual),
            );
        }
    }

    for i in 0..=9u8 {
        let offset = f32::from(i) * cell_side;
        let stroke = if i % 3 == 0 {
            Stroke::new(2.0, BOX_LINE)
        } else {
            Stroke::new(0.5, LINE)
        };
        painter.line_segment(
            [
                pos2(rect.min.x + offset, rect.min.y),
                pos2(rect.min.x + offset, rect.max.y),
            ],
            stroke,
        );
        painter.line_segment(
            [
                pos2(rect.min.x, rect.min.y + offset),
                pos2(rect.max.x, rect.min.y + offset),
            ],
            stroke,
        );
    }

    if response.clicked()
        && let Some(click) = response.interact_pointer_pos()
    {
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (x, y) = (
            (((click.x - rect.min.x) / cell_side) as u8).min(8),
            (((click.y - rect.min.y) / cell_side) as u8).min(8),
        );
        action_queue.request(Action::SelectCell(Position::new(x, y)));
    }
}
