use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::app::ActivePlaylist;
use crate::utils::i18n::{self, T, Language};


pub enum PlaylistAction {

    Previous,

    Next,

    Select(usize),

    CopyUrl,

    ExportCsv,
}


/// The running playlist handed to the loop starter
#[derive(Default)]
pub struct PlaylistPanel;

impl PlaylistPanel {

    pub fn show(
        &self,
        ui: &mut egui::Ui,
        active: Option<&ActivePlaylist>,
        lang: Language,
    ) -> Option<PlaylistAction> {
        let mut action: Option<PlaylistAction> = None;

        ui.heading(format!("▶ {}", i18n::t(T::Playlist, lang)));

        let Some(active) = active else {
            ui.separator();
            ui.centered_and_justified(|ui| {
                ui.label(i18n::t(T::NoPlaylist, lang));
            });
            return None;
        };

        ui.label(i18n::t(T::EveryMs, lang).replace("{}", &active.playlist.interval_ms.to_string()));
        ui.horizontal(|ui| {
            if ui.button(format!("⏮ {}", i18n::t(T::Previous, lang))).clicked() {
                action = Some(PlaylistAction::Previous);
            }
            if ui.button(format!("⏭ {}", i18n::t(T::Next, lang))).clicked() {
                action = Some(PlaylistAction::Next);
            }
            ui.separator();
            if ui.button(format!("📋 {}", i18n::t(T::CopyUrl, lang))).clicked() {
                action = Some(PlaylistAction::CopyUrl);
            }
            if ui.button(format!("💾 {}", i18n::t(T::ExportCSV, lang))).clicked() {
                action = Some(PlaylistAction::ExportCsv);
            }
        });

        if let Some(url) = active.current_url() {
            ui.label(
                egui::RichText::new(i18n::t(T::NowShowing, lang).replace("{}", url))
                    .strong()
                    .color(egui::Color32::from_rgb(100, 200, 100)),
            );
        }
        ui.separator();

        TableBuilder::new(ui)
            .striped(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(40.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong(i18n::t(T::Position, lang)); });
                header.col(|ui| { ui.strong(i18n::t(T::Url, lang)); });
            })
            .body(|mut body| {
                for (index, url) in active.playlist.urls.iter().enumerate() {
                    body.row(20.0, |mut row| {
                        row.set_selected(index == active.current_index);
                        row.col(|ui| {
                            ui.label((index + 1).to_string());
                        });
                        row.col(|ui| {
                            ui.label(url);
                        });
                        if row.response().clicked() {
                            action = Some(PlaylistAction::Select(index));
                        }
                    });
                }
            });

        action
    }
}
