// tests/logging_levels.rs

use launchpad::logging::parse_level_str;

#[test]
fn level_strings_are_case_insensitive() {
    assert_eq!(parse_level_str("DEBUG"), Some(tracing::Level::DEBUG));
    assert_eq!(parse_level_str(" warning "), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("trace"), Some(tracing::Level::TRACE));
}

#[test]
fn unknown_level_is_ignored() {
    assert_eq!(parse_level_str("loud"), None);
    assert_eq!(parse_level_str(""), None);
}
