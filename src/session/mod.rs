use actix_session::Session;

pub mod csrf;

/// Supported interface languages: (code, native label).
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "Français"),
    ("es", "Español"),
];
pub const DEFAULT_LANGUAGE: &str = "en";

const LANGUAGE_KEY: &str = "language";
const FLASH_KEY: &str = "flash";

pub fn is_supported_language(code: &str) -> bool {
    LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Current interface language, falling back to the default for missing
/// or unknown values.
pub fn get_language(session: &Session) -> String {
    session
        .get::<String>(LANGUAGE_KEY)
        .unwrap_or(None)
        .filter(|code| is_supported_language(code))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Store the language preference. Unsupported codes are ignored.
pub fn set_language(session: &Session, code: &str) -> bool {
    if !is_supported_language(code) {
        return false;
    }
    let _ = session.insert(LANGUAGE_KEY, code);
    true
}

pub fn add_flash(session: &Session, message: &str) {
    let mut messages = session
        .get::<Vec<String>>(FLASH_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    messages.push(message.to_string());
    let _ = session.insert(FLASH_KEY, messages);
}

/// Drain the queued flash messages.
pub fn take_flash(session: &Session) -> Vec<String> {
    let messages = session
        .get::<Vec<String>>(FLASH_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    if !messages.is_empty() {
        session.remove(FLASH_KEY);
    }
    messages
}
