use std::sync::OnceLock;

static CURRENT_LANGUAGE: OnceLock<String> = OnceLock::new();

/// Initialize and set the display language
///
/// An explicit choice (flag or saved setting) wins over `LANG`.
pub fn set_language(preferred: Option<&str>) {
    let system = std::env::var("LANG").ok();
    let lang = resolve_language(preferred, system.as_deref());

    CURRENT_LANGUAGE.set(lang.clone()).ok();
    rust_i18n::set_locale(&lang);

    tracing::debug!("Language set to: {}", lang);
}

/// Get current language
pub fn current_language() -> String {
    CURRENT_LANGUAGE
        .get()
        .cloned()
        .unwrap_or_else(|| rust_i18n::locale().to_string())
}

/// Pick the language: explicit choice, then the system locale, then English
pub fn resolve_language(preferred: Option<&str>, system: Option<&str>) -> String {
    preferred
        .and_then(normalize_language)
        .or_else(|| system.and_then(normalize_language))
        .unwrap_or_else(|| "en".to_string())
}

/// Map a locale string ("vi_VN.UTF-8", "en-US") to a supported language
pub fn normalize_language(lang: &str) -> Option<String> {
    let lower = lang.trim().to_ascii_lowercase();
    if lower.is_empty() {
        None
    } else if lower.starts_with("vi") {
        Some("vi".to_string())
    } else if lower.starts_with("en") || lower == "c" || lower == "posix" {
        Some("en".to_string())
    } else {
        None
    }
}

/// Get available languages
pub fn available_languages() -> Vec<(&'static str, &'static str)> {
    vec![("vi", "Tiếng Việt"), ("en", "English")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::WarehouseError;

    #[test]
    fn test_available_languages() {
        let langs = available_languages();
        assert_eq!(langs.len(), 2);
        assert!(langs.iter().any(|(code, _)| *code == "vi"));
        assert!(langs.iter().any(|(code, _)| *code == "en"));
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("vi_VN.UTF-8").as_deref(), Some("vi"));
        assert_eq!(normalize_language("VI").as_deref(), Some("vi"));
        assert_eq!(normalize_language("en_US.UTF-8").as_deref(), Some("en"));
        assert_eq!(normalize_language("C").as_deref(), Some("en"));
        assert_eq!(normalize_language("de_DE"), None);
        assert_eq!(normalize_language("  "), None);
    }

    #[test]
    fn test_resolve_language_precedence() {
        assert_eq!(resolve_language(Some("vi"), Some("en_US.UTF-8")), "vi");
        assert_eq!(resolve_language(Some("en"), Some("vi_VN.UTF-8")), "en");
        assert_eq!(resolve_language(None, Some("vi_VN.UTF-8")), "vi");
        assert_eq!(resolve_language(Some("de"), Some("vi_VN")), "vi");
        assert_eq!(resolve_language(None, Some("de_DE")), "en");
        assert_eq!(resolve_language(None, None), "en");
    }

    #[test]
    fn test_vietnamese_messages_render() {
        let err = WarehouseError::SerialAlreadyScanned("SN-GS24-D4001".into());
        assert_eq!(err.user_message_in("vi"), "Serial SN-GS24-D4001 đã được quét");
        assert_eq!(
            WarehouseError::NothingPicked.user_message_in("vi"),
            "Chưa có hàng hóa nào được chọn."
        );
        assert_eq!(
            WarehouseError::NothingPicked.user_message_in("en"),
            "No goods have been picked yet."
        );
    }
}
