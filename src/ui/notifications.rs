use eframe::egui;
use std::collections::VecDeque;
use std::time::Instant;


const MAX_NOTIFICATIONS: usize = 10;


const TOAST_DURATION_SECS: u64 = 4;


#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }

    pub fn color(&self) -> egui::Color32 {
        match self {
            Severity::Info => egui::Color32::from_rgb(100, 180, 255),
            Severity::Warning => egui::Color32::from_rgb(255, 200, 50),
            Severity::Error => egui::Color32::from_rgb(255, 80, 80),
        }
    }
}

/// A transient message shown in the corner
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub timestamp: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp: Instant::now(),
        }
    }

    pub fn is_toast_active(&self) -> bool {
        self.timestamp.elapsed().as_secs() < TOAST_DURATION_SECS
    }
}


/// Recent notifications, newest first
#[derive(Default)]
pub struct Notifications {

    pub items: VecDeque<Notification>,
}

impl Notifications {

    pub fn add(&mut self, message: impl Into<String>, severity: Severity) {
        let notification = Notification::new(message, severity);
        match severity {
            Severity::Info => tracing::info!("{}", notification.message),
            Severity::Warning => tracing::warn!("{}", notification.message),
            Severity::Error => tracing::error!("{}", notification.message),
        }
        self.items.push_front(notification);

        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_back();
        }
    }

    pub fn has_active_toasts(&self) -> bool {
        self.items.iter().any(|n| n.is_toast_active())
    }


    pub fn show_toasts(&self, ctx: &egui::Context) {
        let active_toasts: Vec<_> = self.items.iter()
            .filter(|n| n.is_toast_active())
            .take(3)
            .collect();

        if active_toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notification_toasts"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 40.0))
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    for toast in active_toasts {
                        let elapsed = toast.timestamp.elapsed().as_secs_f32();
                        let fade_start = TOAST_DURATION_SECS as f32 - 1.0;
                        let alpha = if elapsed > fade_start {
                            1.0 - (elapsed - fade_start)
                        } else {
                            1.0
                        }.clamp(0.0, 1.0);

                        ui.group(|ui| {
                            ui.visuals_mut().widgets.noninteractive.bg_fill =
                                egui::Color32::from_rgba_unmultiplied(40, 40, 40, (220.0 * alpha) as u8);
                            ui.visuals_mut().widgets.noninteractive.bg_stroke =
                                egui::Stroke::new(2.0, toast.severity.color().gamma_multiply(alpha));
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(toast.severity.icon()).size(16.0));
                                ui.label(egui::RichText::new(&toast.message).color(egui::Color32::WHITE));
                            });
                        });
                        ui.add_space(5.0);
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_capped() {
        let mut n = Notifications::default();
        for i in 0..15 {
            n.add(format!("message {}", i), Severity::Info);
        }
        assert_eq!(n.items.len(), MAX_NOTIFICATIONS);
        assert_eq!(n.items.front().map(|n| n.message.as_str()), Some("message 14"));
    }

    #[test]
    fn test_new_toast_is_active() {
        let mut n = Notifications::default();
        assert!(!n.has_active_toasts());
        n.add("saved", Severity::Warning);
        assert!(n.has_active_toasts());
    }
}
