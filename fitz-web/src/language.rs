use std::collections::HashMap;

/// A bundled translation
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LanguageInfo {
    pub translation: &'static str,
}

/// Bundled languages keyed by language code
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        "en",
        LanguageInfo {
            translation: include_str!("../translations/en.json"),
        },
    )])
}
