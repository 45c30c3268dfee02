use ballistic_trajectory::core::session::{Command, EntryMode};
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{PANEL_H, PANEL_W, PANEL_X, PANEL_Y};
use crate::state::ViewerRuntime;

pub(crate) fn hotkey_commands(mode: EntryMode) -> Vec<Command> {
    let mut commands = Vec::new();
    if is_key_pressed(KeyCode::Escape) {
        commands.push(Command::Exit);
    }
    if is_key_pressed(KeyCode::F2) {
        commands.push(Command::ToggleKeypad);
    }

    match mode {
        EntryMode::Form => {
            if is_key_pressed(KeyCode::Enter) {
                commands.push(Command::ShowTrajectory);
            }
        }
        EntryMode::Keypad => {
            // Control characters arrive as key presses below.
            while let Some(c) = get_char_pressed() {
                if !c.is_control() {
                    commands.push(Command::KeypadChar(c));
                }
            }
            if is_key_pressed(KeyCode::Backspace) {
                commands.push(Command::KeypadBackspace);
            }
            if is_key_pressed(KeyCode::Enter) {
                commands.push(Command::KeypadSubmit);
            }
        }
    }
    commands
}

pub(crate) fn draw_control_panel(state: &mut ViewerRuntime) -> Vec<Command> {
    let mut commands = Vec::new();
    let progress = state
        .reveal
        .as_ref()
        .map(|reveal| format!("Revealed {} of {} points", reveal.revealed(), reveal.total()));

    widgets::Window::new(hash!(), vec2(PANEL_X, PANEL_Y), vec2(PANEL_W, PANEL_H))
        .label("Ballistic Trajectory Calculator")
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            let session = &mut state.session;
            match session.mode {
                EntryMode::Form => {
                    ui.input_text(hash!(), "Speed (m/s)", &mut session.form.speed);
                    ui.input_text(hash!(), "Angle (degrees)", &mut session.form.angle);
                    if ui.button(None, "Show Trajectory (Enter)") {
                        commands.push(Command::ShowTrajectory);
                    }
                }
                EntryMode::Keypad => {
                    ui.label(None, session.entry.prompt());
                    ui.label(None, &format!("> {}", session.entry.buffer()));
                    if ui.button(None, "Submit (Enter)") {
                        commands.push(Command::KeypadSubmit);
                    }
                }
            }
            ui.separator();
            if ui.button(None, "Reset") {
                commands.push(Command::Reset);
            }
            let toggle_label = match session.mode {
                EntryMode::Form => "Keypad Entry (F2)",
                EntryMode::Keypad => "Form Entry (F2)",
            };
            if ui.button(None, toggle_label) {
                commands.push(Command::ToggleKeypad);
            }
            if ui.button(None, "Exit (Esc)") {
                commands.push(Command::Exit);
            }
            ui.separator();
            if let Some(progress) = &progress {
                ui.label(None, progress);
            }
        });

    commands
}
