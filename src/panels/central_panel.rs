use egui::{Color32, Rect, Sense, pos2};

use crate::app::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let background = app.config().background_color();
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(background))
        .show(ctx, |ui| {
            let (canvas_rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());

            app.ensure_board(canvas_rect);
            app.handle_input(ctx, canvas_rect);

            if let Some(texture) = app.canvas_texture(ctx) {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                ui.painter().image(texture.id(), canvas_rect, uv, Color32::WHITE);
            }
        });
}
