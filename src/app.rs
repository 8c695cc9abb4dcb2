use eframe::egui;
use std::sync::mpsc;

use crate::config::store::{FileSettingsStore, SettingsStore};
use crate::export::ExportEngine;
use crate::playlist::{LoopStarter, Playlist, SettingsForm};
use crate::ui::alert::AlertDialog;
use crate::ui::notifications::{Notifications, Severity};
use crate::ui::playlist_panel::{PlaylistAction, PlaylistPanel};
use crate::ui::settings_panel::{SettingsAction, SettingsPanel};
use crate::utils::i18n::{self, T, Language};


/// Messages from the loop starter to the host window
#[derive(Debug)]
pub enum HostMessage {

    LoopStarted(Playlist),
}


/// Loop starter handed to the settings form: forwards the validated playlist
/// to the host over a channel drained once per frame.
pub struct ChannelLoopStarter {
    tx: mpsc::Sender<HostMessage>,
}

impl ChannelLoopStarter {
    pub fn new(tx: mpsc::Sender<HostMessage>) -> Self {
        Self { tx }
    }
}

impl LoopStarter for ChannelLoopStarter {
    fn start_loop(&mut self, urls: Vec<String>, interval_ms: u64) {
        if self.tx.send(HostMessage::LoopStarted(Playlist { urls, interval_ms })).is_err() {
            tracing::warn!("Host receiver dropped, playlist discarded");
        }
    }
}


/// The playlist currently handed off, and which entry is on screen
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePlaylist {
    pub playlist: Playlist,
    pub current_index: usize,
}

impl ActivePlaylist {
    pub fn new(playlist: Playlist) -> Self {
        Self { playlist, current_index: 0 }
    }

    pub fn current_url(&self) -> Option<&str> {
        self.playlist.urls.get(self.current_index).map(String::as_str)
    }

    /// Move by `delta` entries, wrapping at both ends.
    pub fn step(&mut self, delta: isize) {
        let len = self.playlist.urls.len() as isize;
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index as isize + delta).rem_euclid(len) as usize;
    }

    pub fn select(&mut self, index: usize) {
        if index < self.playlist.urls.len() {
            self.current_index = index;
        }
    }
}


pub struct KioskApp<S: SettingsStore = FileSettingsStore> {

    form: SettingsForm<S>,

    settings_panel: SettingsPanel,

    playlist_panel: PlaylistPanel,

    alert: AlertDialog,

    notifications: Notifications,

    starter: ChannelLoopStarter,

    host_rx: mpsc::Receiver<HostMessage>,

    active: Option<ActivePlaylist>,

    current_lang: Language,

    show_about: bool,
}

impl KioskApp<FileSettingsStore> {

    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = FileSettingsStore::from_env();
        tracing::info!("Using settings file {:?}", store.path());
        Self::with_store(store)
    }
}

impl<S: SettingsStore> KioskApp<S> {

    pub fn with_store(store: S) -> Self {
        let (tx, host_rx) = mpsc::channel::<HostMessage>();
        let current_lang = Language::default();

        let mut form = SettingsForm::mount(store);
        let mut notifications = Notifications::default();
        if let Some(e) = form.take_load_error() {
            notifications.add(
                i18n::t(T::SettingsLoadFailed, current_lang).replace("{}", &e.to_string()),
                Severity::Warning,
            );
        }
        let settings_panel = SettingsPanel::new(&form);

        Self {
            form,
            settings_panel,
            playlist_panel: PlaylistPanel,
            alert: AlertDialog::default(),
            notifications,
            starter: ChannelLoopStarter::new(tx),
            host_rx,
            active: None,
            current_lang,
            show_about: false,
        }
    }

    /// Drain messages from the loop starter
    fn process_host_messages(&mut self) {
        while let Ok(msg) = self.host_rx.try_recv() {
            match msg {
                HostMessage::LoopStarted(playlist) => {
                    tracing::info!("Playlist handed off: {} URLs", playlist.urls.len());
                    self.active = Some(ActivePlaylist::new(playlist));
                }
            }
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.current_index)
    }

    pub fn apply(&mut self) {
        match self.form.apply(&mut self.starter) {
            Ok(applied) => {
                self.notifications.add(
                    i18n::t(T::SettingsApplied, self.current_lang)
                        .replace("{}", &applied.playlist.urls.len().to_string()),
                    Severity::Info,
                );
                if let Some(e) = applied.save_error {
                    self.notifications.add(
                        i18n::t(T::SettingsSaveFailed, self.current_lang).replace("{}", &e.to_string()),
                        Severity::Warning,
                    );
                }
            }
            Err(e) => {
                tracing::info!("Apply rejected: {:?}", e);
                self.alert.open(i18n::t(e.message_key(), self.current_lang));
            }
        }
    }

    fn step(&mut self, delta: isize) {
        if let Some(active) = &mut self.active {
            active.step(delta);
            tracing::debug!("Current URL index {}", active.current_index);
        }
    }

    fn select(&mut self, index: usize) {
        if let Some(active) = &mut self.active {
            active.select(index);
        }
    }

    pub fn import_settings(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };

        match ExportEngine::import_settings_json(&path) {
            Ok(record) => {
                self.form.replace(record);
                self.settings_panel.sync(&self.form);
                self.notifications.add(i18n::t(T::Imported, self.current_lang), Severity::Info);
            }
            Err(e) => {
                self.notifications.add(
                    i18n::t(T::ImportFailed, self.current_lang).replace("{}", &format!("{:#}", e)),
                    Severity::Error,
                );
            }
        }
    }

    pub fn export_settings(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(ExportEngine::suggested_file_name("settings", "json"))
            .add_filter("JSON", &["json"])
            .save_file()
        {
            let result = ExportEngine::export_settings_json(&self.form.record(), &path);
            self.report_export(result, &path);
        }
    }

    pub fn export_playlist_csv(&mut self) {
        let Some(active) = &self.active else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(ExportEngine::suggested_file_name("playlist", "csv"))
            .add_filter("CSV", &["csv"])
            .save_file()
        {
            let result = ExportEngine::export_playlist_csv(&active.playlist, &path);
            self.report_export(result, &path);
        }
    }

    fn report_export(&mut self, result: anyhow::Result<()>, path: &std::path::Path) {
        match result {
            Ok(()) => self.notifications.add(
                i18n::t(T::Exported, self.current_lang).replace("{}", &path.display().to_string()),
                Severity::Info,
            ),
            Err(e) => self.notifications.add(
                i18n::t(T::ExportFailed, self.current_lang).replace("{}", &format!("{:#}", e)),
                Severity::Error,
            ),
        }
    }

    pub fn copy_current_url(&mut self) {
        let Some(url) = self.active.as_ref().and_then(|a| a.current_url()).map(str::to_string) else {
            return;
        };
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(url)) {
            Ok(()) => self.notifications.add(i18n::t(T::Copied, self.current_lang), Severity::Info),
            Err(e) => self.notifications.add(
                i18n::t(T::CopyFailed, self.current_lang).replace("{}", &e.to_string()),
                Severity::Warning,
            ),
        }
    }

    /// Left/Right step through the playlist when no text field has focus
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if self.active.is_none() || self.alert.is_open() || ctx.wants_keyboard_input() {
            return;
        }
        let (prev, next) = ctx.input(|i| (
            i.key_pressed(egui::Key::ArrowLeft),
            i.key_pressed(egui::Key::ArrowRight),
        ));
        if prev {
            self.step(-1);
        }
        if next {
            self.step(1);
        }
    }
}

impl<S: SettingsStore> eframe::App for KioskApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {

        self.process_host_messages();
        self.handle_keys(ctx);

        if self.notifications.has_active_toasts() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        ctx.set_visuals(egui::Visuals::dark());
        let lang = self.current_lang;
        let blocked = self.alert.is_open();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button(i18n::t(T::File, lang), |ui| {
                        if ui.button(i18n::t(T::ImportSettings, lang)).clicked() {
                            ui.close_menu();
                            self.import_settings();
                        }
                        if ui.button(i18n::t(T::ExportSettings, lang)).clicked() {
                            ui.close_menu();
                            self.export_settings();
                        }
                        ui.separator();
                        if ui.button(i18n::t(T::Exit, lang)).clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.menu_button(i18n::t(T::View, lang), |ui| {
                        ui.label("Language / Idioma");
                        if ui.selectable_label(self.current_lang == Language::English, "English").clicked() {
                            self.current_lang = Language::English;
                        }
                        if ui.selectable_label(self.current_lang == Language::Spanish, "Español").clicked() {
                            self.current_lang = Language::Spanish;
                        }
                    });
                    ui.menu_button(i18n::t(T::Help, lang), |ui| {
                        if ui.button(i18n::t(T::About, lang)).clicked() {
                            self.show_about = true;
                        }
                    });
                });
            });
        });

        if self.show_about {
            egui::Window::new(i18n::t(T::AboutTitle, lang))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Kiosk Slideshow");
                        ui.label(egui::RichText::new(i18n::t(T::AboutVersion, lang)).strong());
                        ui.add_space(10.0);
                        ui.label(i18n::t(T::AboutDescription, lang));
                        ui.add_space(20.0);
                        if ui.button(i18n::t(T::Close, lang)).clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        let current_index = self.current_index();
        let mut settings_action = None;
        egui::SidePanel::left("settings_panel")
            .resizable(true)
            .default_width(360.0)
            .min_width(280.0)
            .max_width(520.0)
            .show(ctx, |ui| {
                settings_action = ui.add_enabled_ui(!blocked, |ui| {
                    self.settings_panel.show(ui, &mut self.form, current_index, lang)
                }).inner;
            });

        let mut playlist_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            playlist_action = ui.add_enabled_ui(!blocked, |ui| {
                self.playlist_panel.show(ui, self.active.as_ref(), lang)
            }).inner;
        });

        if let Some(SettingsAction::Apply) = settings_action {
            self.apply();
        }

        match playlist_action {
            Some(PlaylistAction::Previous) => self.step(-1),
            Some(PlaylistAction::Next) => self.step(1),
            Some(PlaylistAction::Select(index)) => self.select(index),
            Some(PlaylistAction::CopyUrl) => self.copy_current_url(),
            Some(PlaylistAction::ExportCsv) => self.export_playlist_csv(),
            None => {}
        }

        self.alert.show(ctx, self.current_lang);
        self.notifications.show_toasts(ctx);
    }
}
