use crate::app::{GroupRename, SketchApp};
use crate::state::InputMode;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let current = app.board().map(|board| board.mode());
            for mode in InputMode::selectable() {
                let is_selected = match current {
                    Some(current) if mode == InputMode::Draw => current.is_drawing_tool(),
                    Some(current) => current == mode,
                    None => false,
                };
                if ui.selectable_label(is_selected, mode.name()).clicked() {
                    log::info!("Tool selected from UI: {mode}");
                    app.set_mode(mode);
                }
            }
            ui.separator();

            // Undo/Redo section
            let (can_undo, can_redo) = app
                .board()
                .map(|board| (board.history().can_undo(), board.history().can_redo()))
                .unwrap_or_default();
            ui.horizontal(|ui| {
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
            if let Some(board) = app.board() {
                let history = board.history();
                ui.label(format!("History: {} / {}", history.index(), history.len() - 1));
            }

            ui.separator();
            group_list(app, ui);
        });
}

fn group_list(app: &mut SketchApp, ui: &mut egui::Ui) {
    ui.heading("Path groups");

    let Some(board) = app.board() else {
        return;
    };
    let active = board.active_group();
    let groups: Vec<_> = board.groups().map(|g| (g.id(), g.label().to_owned())).collect();

    for (id, label) in groups {
        let editing = app.renaming.as_ref().is_some_and(|r| r.id == id);
        if editing {
            let Some(rename) = app.renaming.as_mut() else {
                continue;
            };
            let response = ui.add(
                egui::TextEdit::singleline(&mut rename.text)
                    .char_limit(crate::group::MAX_LABEL_CHARS)
                    .desired_width(100.0),
            );
            if let Some(rename) = app.renaming.as_mut().filter(|r| !r.focused) {
                response.request_focus();
                rename.focused = true;
            }
            if response.lost_focus() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                app.finish_rename();
            }
            continue;
        }

        let response = ui.selectable_label(active == Some(id), &label);
        if response.double_clicked() {
            app.renaming = Some(GroupRename {
                id,
                text: label,
                focused: false,
            });
        } else if response.clicked() {
            app.select_group(id);
        }
    }

    if ui.button("+").clicked() {
        app.create_group();
    }
}
