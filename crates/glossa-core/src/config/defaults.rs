pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_dir() -> String {
    "locales".to_string()
}

pub(super) fn default_fallback() -> Vec<String> {
    vec!["en-us".to_string()]
}

pub(super) fn default_extensions() -> Vec<String> {
    vec!["yaml".to_string(), "yml".to_string()]
}
