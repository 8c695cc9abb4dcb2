//! Settings Panel UI
//!
//! One text field per URL entry, the interval field and the Apply button.

use eframe::egui;

use crate::config::store::SettingsStore;
use crate::playlist::{IntervalEdit, SettingsForm};
use crate::utils::i18n::{self, T, Language};

/// Actions from the settings panel
pub enum SettingsAction {
    Apply,
}

/// Text buffers the form does not own
pub struct SettingsPanel {
    /// Interval field text; can differ from the stored value while typing
    interval_input: String,
}

impl SettingsPanel {
    pub fn new<S: SettingsStore>(form: &SettingsForm<S>) -> Self {
        let mut panel = Self { interval_input: String::new() };
        panel.sync(form);
        panel
    }

    /// Reload buffers after the form was replaced wholesale
    pub fn sync<S: SettingsStore>(&mut self, form: &SettingsForm<S>) {
        self.interval_input = form.interval().display();
    }

    fn apply_interval_text<S: SettingsStore>(&mut self, form: &mut SettingsForm<S>) {
        if form.edit_interval(&self.interval_input) == IntervalEdit::Rejected {
            self.interval_input = form.interval().display();
        }
    }

    /// Show the panel. `current_index` highlights the URL on screen.
    pub fn show<S: SettingsStore>(
        &mut self,
        ui: &mut egui::Ui,
        form: &mut SettingsForm<S>,
        current_index: Option<usize>,
        lang: Language,
    ) -> Option<SettingsAction> {
        let mut action = None;

        ui.heading(format!("⚙ {}", i18n::t(T::Settings, lang)));
        ui.separator();

        ui.label(i18n::t(T::UrlsToDisplay, lang));

        let mut edit: Option<(usize, String)> = None;
        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 140.0).max(80.0))
            .show(ui, |ui| {
                for (index, entry) in form.entries().iter().enumerate() {
                    let active = current_index == Some(index);
                    let fill = if active {
                        ui.visuals().selection.bg_fill.gamma_multiply(0.4)
                    } else {
                        egui::Color32::TRANSPARENT
                    };

                    egui::Frame::default()
                        .fill(fill)
                        .inner_margin(egui::Margin::same(4))
                        .corner_radius(egui::CornerRadius::same(4))
                        .show(ui, |ui| {
                            let mut text = entry.clone();
                            let hint = i18n::t(T::EnterUrl, lang).replace("{}", &(index + 1).to_string());
                            let response = ui.add(
                                egui::TextEdit::singleline(&mut text)
                                    .hint_text(hint)
                                    .desired_width(f32::INFINITY),
                            );
                            if response.changed() {
                                edit = Some((index, text));
                            }
                        });
                }
            });

        if let Some((index, text)) = edit {
            form.edit_url(index, text);
        }

        ui.add_space(10.0);
        ui.label(i18n::t(T::TimeBetween, lang));
        let response = ui.add(
            egui::TextEdit::singleline(&mut self.interval_input)
                .hint_text(i18n::t(T::TimeBetween, lang))
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.apply_interval_text(form);
        }

        ui.add_space(10.0);
        if ui.button(format!("✔ {}", i18n::t(T::Apply, lang))).clicked() {
            action = Some(SettingsAction::Apply);
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::MemorySettingsStore;

    #[test]
    fn test_rejected_interval_text_reverts() {
        let mut form = SettingsForm::mount(MemorySettingsStore::with_raw(r#"{"urls":[""],"timeBetween":6}"#));
        let mut panel = SettingsPanel::new(&form);
        assert_eq!(panel.interval_input, "6");

        panel.interval_input = "6x".into();
        panel.apply_interval_text(&mut form);
        assert_eq!(panel.interval_input, "6");
        assert_eq!(form.interval().seconds(), 6.0);
    }

    #[test]
    fn test_cleared_interval_text_stays_empty() {
        let mut form = SettingsForm::mount(MemorySettingsStore::with_raw(r#"{"urls":[""],"timeBetween":6}"#));
        let mut panel = SettingsPanel::new(&form);

        panel.interval_input.clear();
        panel.apply_interval_text(&mut form);
        assert_eq!(panel.interval_input, "");
        assert!(!form.interval().is_set());
    }
}
