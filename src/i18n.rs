//! UI strings per language. Missing entries fall back to English.

use crate::domain::Language;

pub const SETTINGS: &str = "settings";
pub const TRANSLATION_LANGUAGE: &str = "translation_language";
pub const READING_FONT_SIZE: &str = "reading_font_size";
pub const SHOW_TRANSLITERATION: &str = "show_transliteration";
pub const QURAN_STYLE: &str = "quran_style";
pub const THEME: &str = "theme";
pub const VERSE: &str = "verse";
pub const CHAPTER: &str = "chapter";
pub const CHAPTERS: &str = "chapters";

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        SETTINGS => "Settings",
        TRANSLATION_LANGUAGE => "Translation Language",
        READING_FONT_SIZE => "Reading Font Size",
        SHOW_TRANSLITERATION => "Show Transliteration",
        QURAN_STYLE => "Quran Style",
        THEME => "Theme",
        VERSE => "Verse",
        CHAPTER => "Chapter",
        CHAPTERS => "Quran Chapters",
        _ => return None,
    })
}

fn table(language: Language, key: &str) -> Option<&'static str> {
    let text = match (language, key) {
        (Language::En, _) => return english(key),

        (Language::Es, SETTINGS) => "Ajustes",
        (Language::Es, TRANSLATION_LANGUAGE) => "Idioma de traducción",
        (Language::Es, READING_FONT_SIZE) => "Tamaño de letra",
        (Language::Es, SHOW_TRANSLITERATION) => "Mostrar transliteración",
        (Language::Es, QURAN_STYLE) => "Estilo del Corán",
        (Language::Es, THEME) => "Tema",
        (Language::Es, VERSE) => "Versículo",
        (Language::Es, CHAPTER) => "Capítulo",
        (Language::Es, CHAPTERS) => "Capítulos del Corán",

        (Language::Fr, SETTINGS) => "Paramètres",
        (Language::Fr, TRANSLATION_LANGUAGE) => "Langue de traduction",
        (Language::Fr, READING_FONT_SIZE) => "Taille de police",
        (Language::Fr, SHOW_TRANSLITERATION) => "Afficher la translittération",
        (Language::Fr, QURAN_STYLE) => "Style du Coran",
        (Language::Fr, THEME) => "Thème",
        (Language::Fr, VERSE) => "Verset",
        (Language::Fr, CHAPTER) => "Sourate",
        (Language::Fr, CHAPTERS) => "Sourates du Coran",

        (Language::Id, SETTINGS) => "Pengaturan",
        (Language::Id, TRANSLATION_LANGUAGE) => "Bahasa Terjemahan",
        (Language::Id, READING_FONT_SIZE) => "Ukuran Huruf",
        (Language::Id, SHOW_TRANSLITERATION) => "Tampilkan Transliterasi",
        (Language::Id, QURAN_STYLE) => "Gaya Mushaf",
        (Language::Id, THEME) => "Tema",
        (Language::Id, VERSE) => "Ayat",
        (Language::Id, CHAPTER) => "Surah",
        (Language::Id, CHAPTERS) => "Daftar Surah",

        (Language::Sv, SETTINGS) => "Inställningar",
        (Language::Sv, TRANSLATION_LANGUAGE) => "Översättningsspråk",
        (Language::Sv, READING_FONT_SIZE) => "Textstorlek",
        (Language::Sv, SHOW_TRANSLITERATION) => "Visa translitteration",
        (Language::Sv, QURAN_STYLE) => "Koranstil",
        (Language::Sv, THEME) => "Tema",
        (Language::Sv, VERSE) => "Vers",
        (Language::Sv, CHAPTER) => "Kapitel",
        (Language::Sv, CHAPTERS) => "Koranens kapitel",

        (Language::Tr, SETTINGS) => "Ayarlar",
        (Language::Tr, TRANSLATION_LANGUAGE) => "Çeviri Dili",
        (Language::Tr, VERSE) => "Ayet",
        (Language::Tr, CHAPTER) => "Sure",
        (Language::Tr, CHAPTERS) => "Sureler",

        (Language::Ru, SETTINGS) => "Настройки",
        (Language::Ru, VERSE) => "Аят",
        (Language::Ru, CHAPTER) => "Сура",
        (Language::Ru, CHAPTERS) => "Суры Корана",

        (Language::Ur, SETTINGS) => "ترتیبات",
        (Language::Ur, VERSE) => "آیت",
        (Language::Ur, CHAPTER) => "سورت",

        (Language::Bn, SETTINGS) => "সেটিংস",
        (Language::Bn, VERSE) => "আয়াত",
        (Language::Bn, CHAPTER) => "সূরা",

        (Language::Zh, SETTINGS) => "设置",
        (Language::Zh, VERSE) => "节",
        (Language::Zh, CHAPTER) => "章",

        _ => return None,
    };
    Some(text)
}

/// Text for `key` in `language`; unknown keys come back unchanged.
pub fn localized(language: Language, key: &str) -> String {
    table(language, key)
        .or_else(|| english(key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}
