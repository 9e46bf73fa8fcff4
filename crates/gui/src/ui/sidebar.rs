//! Fixed-width sidebar: heading, demo actions, credits

use egui::Ui;

use crate::actions;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    let labels = state.settings.sidebar.clone();
    let button_size = egui::vec2(ui.available_width(), state.settings.window.button_height);

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.heading(&labels.heading);
    });
    ui.add_space(8.0);

    if ui
        .add_sized(button_size, egui::Button::new(&labels.draw_sphere))
        .clicked()
    {
        actions::draw_sphere(&mut state.canvas);
    }

    if ui
        .add_sized(button_size, egui::Button::new(&labels.clear_canvas))
        .clicked()
    {
        actions::clear_canvas(&mut state.canvas);
    }

    // Remaining height acts as the spacer; credits sit at the bottom
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(4.0);
        ui.label(&labels.credits);
    });
}
