// 各服务的语言代码映射表
//
// Callers pass free-form words ("english", "chinese", "中文"). Each provider
// gets its own table; unknown words fall through unchanged apart from case.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (aliases, Google code, DeepL code, name used in LLM prompts)
type Entry = (&'static [&'static str], &'static str, &'static str, &'static str);

const LANGUAGES: &[Entry] = &[
    (&["english", "en", "英文", "英语"], "en", "EN", "English"),
    (
        &["chinese", "simplified chinese", "zh", "zh-cn", "中文", "简体中文"],
        "zh-CN",
        "ZH",
        "Simplified Chinese",
    ),
    (
        &["traditional chinese", "zh-tw", "繁体中文", "繁體中文"],
        "zh-TW",
        "ZH-HANT",
        "Traditional Chinese",
    ),
    (&["japanese", "ja", "日文", "日语"], "ja", "JA", "Japanese"),
    (&["korean", "ko", "韩文", "韩语"], "ko", "KO", "Korean"),
    (&["french", "fr", "法语"], "fr", "FR", "French"),
    (&["german", "de", "德语"], "de", "DE", "German"),
    (&["spanish", "es", "西班牙语"], "es", "ES", "Spanish"),
    (&["italian", "it"], "it", "IT", "Italian"),
    (&["portuguese", "pt"], "pt", "PT-PT", "Portuguese"),
    (&["russian", "ru", "俄语"], "ru", "RU", "Russian"),
    (&["dutch", "nl"], "nl", "NL", "Dutch"),
    (&["polish", "pl"], "pl", "PL", "Polish"),
    (&["turkish", "tr"], "tr", "TR", "Turkish"),
    (&["ukrainian", "uk"], "uk", "UK", "Ukrainian"),
    (&["indonesian", "id"], "id", "ID", "Indonesian"),
    (&["arabic", "ar"], "ar", "AR", "Arabic"),
];

fn build_table(column: fn(&Entry) -> &'static str) -> HashMap<&'static str, &'static str> {
    let mut table = HashMap::new();
    for entry in LANGUAGES {
        for alias in entry.0 {
            table.insert(*alias, column(entry));
        }
    }
    table
}

static GOOGLE_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| build_table(|e| e.1));
static DEEPL_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| build_table(|e| e.2));
static PROMPT_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| build_table(|e| e.3));

fn normalize(language: &str) -> String {
    language.trim().to_lowercase()
}

/// Google Translate v2 code; unknown input is lowercased.
pub fn google_code(language: &str) -> String {
    let key = normalize(language);
    GOOGLE_CODES
        .get(key.as_str())
        .map(|c| c.to_string())
        .unwrap_or(key)
}

/// DeepL code; unknown input is uppercased.
pub fn deepl_code(language: &str) -> String {
    let key = normalize(language);
    DEEPL_CODES
        .get(key.as_str())
        .map(|c| c.to_string())
        .unwrap_or_else(|| key.to_uppercase())
}

/// DeepL source code. `source_lang` only accepts bare languages, so regional
/// variants such as `ZH-HANT` or `PT-PT` lose their suffix.
pub fn deepl_source_code(language: &str) -> String {
    let code = deepl_code(language);
    match code.split_once('-') {
        Some((base, _)) => base.to_string(),
        None => code,
    }
}

/// Human readable name for chat-completion prompts; unknown input is kept as typed.
pub fn prompt_name(language: &str) -> String {
    PROMPT_NAMES
        .get(normalize(language).as_str())
        .map(|c| c.to_string())
        .unwrap_or_else(|| language.trim().to_string())
}
