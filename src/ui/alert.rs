//! Blocking alert dialog
//!
//! While an alert is open the rest of the window is disabled; the user has to
//! acknowledge it first.

use eframe::egui;

use crate::utils::i18n::{self, T, Language};


#[derive(Default)]
pub struct AlertDialog {
    message: Option<String>,
}

impl AlertDialog {

    pub fn open(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn show(&mut self, ctx: &egui::Context, lang: Language) {
        let Some(message) = self.message.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(format!("⚠️ {}", i18n::t(T::AlertTitle, lang)))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.label(&message);
                    ui.add_space(10.0);
                    if ui.button(i18n::t(T::Ok, lang)).clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
            self.dismiss();
        }
    }
}
