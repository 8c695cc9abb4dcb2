#[cfg(test)]
mod tests {
    use crate::utils::i18n::{self, T, Language};

    #[test]
    fn test_english_translations() {
        assert_eq!(i18n::t(T::File, Language::English), "File");
        assert_eq!(i18n::t(T::Apply, Language::English), "Apply");
        assert_eq!(i18n::t(T::About, Language::English), "About");
    }

    #[test]
    fn test_spanish_translations() {
        assert_eq!(i18n::t(T::File, Language::Spanish), "Archivo");
        assert_eq!(i18n::t(T::Apply, Language::Spanish), "Aplicar");
        assert_eq!(i18n::t(T::About, Language::Spanish), "Acerca de");
    }

    #[test]
    fn test_alert_translations() {
        assert_eq!(i18n::t(T::InvalidUrls, Language::English), "Please enter valid URLs.");
        assert_eq!(i18n::t(T::InvalidTime, Language::Spanish), "Ingrese un tiempo válido entre URLs.");
    }

    #[test]
    fn test_placeholder_hint_is_fillable() {
        let hint = i18n::t(T::EnterUrl, Language::English).replace("{}", "3");
        assert_eq!(hint, "Enter URL #3");
    }
}
