use eframe::egui;

use common::game::GameState;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(16, 16, 24);
const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(28, 28, 40);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(129, 199, 132);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(229, 57, 53);

// Cycled purely for looks; the simulation never sees this.
const BODY_PALETTE: [egui::Color32; 4] = [
    egui::Color32::from_rgb(67, 160, 71),
    egui::Color32::from_rgb(56, 142, 60),
    egui::Color32::from_rgb(46, 125, 50),
    egui::Color32::from_rgb(56, 142, 60),
];

/// Paints one frame of the field. `theme_tick` is the UI's own cosmetic
/// counter, advanced per frame independently of the game clock.
pub fn draw_board(ui: &mut egui::Ui, state: &GameState, theme_tick: u64) {
    let width = state.field_size.width as f32;
    let height = state.field_size.height as f32;

    let available = ui.available_size();
    let cell_size = (available.x / width)
        .min(available.y / height)
        .floor()
        .max(4.0);
    let board_size = egui::vec2(cell_size * width, cell_size * height);

    let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, egui::CornerRadius::ZERO, BACKGROUND);

    for col in 1..state.field_size.width {
        let x = origin.x + col as f32 * cell_size;
        painter.line_segment(
            [
                egui::pos2(x, response.rect.min.y),
                egui::pos2(x, response.rect.max.y),
            ],
            egui::Stroke::new(1.0, GRID_LINE),
        );
    }
    for row in 1..state.field_size.height {
        let y = origin.y + row as f32 * cell_size;
        painter.line_segment(
            [
                egui::pos2(response.rect.min.x, y),
                egui::pos2(response.rect.max.x, y),
            ],
            egui::Stroke::new(1.0, GRID_LINE),
        );
    }

    let cell_rect = |x: usize, y: usize| {
        egui::Rect::from_min_size(
            origin + egui::vec2(x as f32 * cell_size, y as f32 * cell_size),
            egui::vec2(cell_size, cell_size),
        )
        .shrink(1.0)
    };

    let body_color = BODY_PALETTE[(theme_tick / 8) as usize % BODY_PALETTE.len()];
    for segment in state.snake.body.iter().skip(1) {
        painter.rect_filled(
            cell_rect(segment.x, segment.y),
            egui::CornerRadius::same(2),
            body_color,
        );
    }

    let head = state.snake.head();
    painter.rect_filled(
        cell_rect(head.x, head.y),
        egui::CornerRadius::same(4),
        HEAD_COLOR,
    );

    // Triangle-wave pulse on the food radius.
    let pulse = ((theme_tick % 16) as f32 - 8.0).abs() / 8.0;
    let food_rect = cell_rect(state.food.x, state.food.y);
    painter.circle_filled(
        food_rect.center(),
        food_rect.width() * (0.30 + 0.12 * pulse),
        FOOD_COLOR,
    );
}
