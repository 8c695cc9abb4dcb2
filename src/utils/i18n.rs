//! Internationalization
//!
//! All user-facing strings, in English and Spanish.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum T {
    // Menus
    File,
    ImportSettings,
    ExportSettings,
    Exit,
    View,
    Help,
    About,
    AboutTitle,
    AboutVersion,
    AboutDescription,
    Close,

    // Settings form
    Settings,
    UrlsToDisplay,
    EnterUrl,
    TimeBetween,
    Apply,

    // Alerts
    AlertTitle,
    Ok,
    InvalidUrls,
    NoValidUrl,
    InvalidTime,

    // Playlist
    Playlist,
    NoPlaylist,
    Position,
    Url,
    Previous,
    Next,
    CopyUrl,
    ExportCSV,
    EveryMs,
    NowShowing,

    // Notifications
    SettingsApplied,
    SettingsSaveFailed,
    SettingsLoadFailed,
    Imported,
    ImportFailed,
    Exported,
    ExportFailed,
    Copied,
    CopyFailed,
}

/// Look up the text for `key`. Entries containing `{}` are meant to be
/// filled with `str::replace`.
pub fn t(key: T, lang: Language) -> &'static str {
    match lang {
        Language::English => english(key),
        Language::Spanish => spanish(key),
    }
}

fn english(key: T) -> &'static str {
    match key {
        T::File => "File",
        T::ImportSettings => "Import settings...",
        T::ExportSettings => "Export settings...",
        T::Exit => "Exit",
        T::View => "View",
        T::Help => "Help",
        T::About => "About",
        T::AboutTitle => "About Kiosk Slideshow",
        T::AboutVersion => "Version 0.1.0",
        T::AboutDescription => "Rotates a list of URLs on a kiosk display.",
        T::Close => "Close",

        T::Settings => "Settings",
        T::UrlsToDisplay => "URLs to display:",
        T::EnterUrl => "Enter URL #{}",
        T::TimeBetween => "Time between URLs (seconds):",
        T::Apply => "Apply",

        T::AlertTitle => "Invalid settings",
        T::Ok => "OK",
        T::InvalidUrls => "Please enter valid URLs.",
        T::NoValidUrl => "Please enter at least one valid URL.",
        T::InvalidTime => "Please enter a valid time between URLs.",

        T::Playlist => "Playlist",
        T::NoPlaylist => "No playlist running. Enter URLs and press Apply.",
        T::Position => "#",
        T::Url => "URL",
        T::Previous => "Previous",
        T::Next => "Next",
        T::CopyUrl => "Copy URL",
        T::ExportCSV => "Export CSV",
        T::EveryMs => "Every {} ms",
        T::NowShowing => "Now showing: {}",

        T::SettingsApplied => "Settings applied: {} URLs",
        T::SettingsSaveFailed => "Settings could not be saved: {}",
        T::SettingsLoadFailed => "Saved settings could not be read: {}",
        T::Imported => "Settings imported",
        T::ImportFailed => "Import failed: {}",
        T::Exported => "Exported to {}",
        T::ExportFailed => "Export failed: {}",
        T::Copied => "URL copied to clipboard",
        T::CopyFailed => "Clipboard unavailable: {}",
    }
}

fn spanish(key: T) -> &'static str {
    match key {
        T::File => "Archivo",
        T::ImportSettings => "Importar configuración...",
        T::ExportSettings => "Exportar configuración...",
        T::Exit => "Salir",
        T::View => "Ver",
        T::Help => "Ayuda",
        T::About => "Acerca de",
        T::AboutTitle => "Acerca de Kiosk Slideshow",
        T::AboutVersion => "Versión 0.1.0",
        T::AboutDescription => "Rota una lista de URLs en una pantalla de quiosco.",
        T::Close => "Cerrar",

        T::Settings => "Configuración",
        T::UrlsToDisplay => "URLs a mostrar:",
        T::EnterUrl => "Ingrese URL #{}",
        T::TimeBetween => "Tiempo entre URLs (segundos):",
        T::Apply => "Aplicar",

        T::AlertTitle => "Configuración inválida",
        T::Ok => "Aceptar",
        T::InvalidUrls => "Ingrese URLs válidas.",
        T::NoValidUrl => "Ingrese al menos una URL válida.",
        T::InvalidTime => "Ingrese un tiempo válido entre URLs.",

        T::Playlist => "Lista de reproducción",
        T::NoPlaylist => "No hay lista activa. Ingrese URLs y presione Aplicar.",
        T::Position => "#",
        T::Url => "URL",
        T::Previous => "Anterior",
        T::Next => "Siguiente",
        T::CopyUrl => "Copiar URL",
        T::ExportCSV => "Exportar CSV",
        T::EveryMs => "Cada {} ms",
        T::NowShowing => "Mostrando: {}",

        T::SettingsApplied => "Configuración aplicada: {} URLs",
        T::SettingsSaveFailed => "No se pudo guardar la configuración: {}",
        T::SettingsLoadFailed => "No se pudo leer la configuración guardada: {}",
        T::Imported => "Configuración importada",
        T::ImportFailed => "Error al importar: {}",
        T::Exported => "Exportado a {}",
        T::ExportFailed => "Error al exportar: {}",
        T::Copied => "URL copiada al portapapeles",
        T::CopyFailed => "Portapapeles no disponible: {}",
    }
}
