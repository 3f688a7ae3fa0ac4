use tokio::time::Instant;

use crate::app::{AppContext, MushafError, Result};
use crate::cli::{SettingsAction, Switch, ThemeChoice};
use crate::domain::{adjust_font_size, ChapterRecord, Language, Settings, Theme};
use crate::i18n;
use crate::session::{ReadingSession, VerseCounter};
use crate::settings::ThemeController;

pub async fn resume(ctx: &AppContext, limit: usize) -> Result<()> {
    let view = ctx.launch().run().await;
    tracing::info!("Resuming at {}:{}", view.chapter_id, view.initial_verse_id);
    read_chapter(ctx, view.chapter_id, view.initial_verse_id, limit).await
}

pub async fn read_chapter(
    ctx: &AppContext,
    chapter_id: u16,
    verse_id: u16,
    limit: usize,
) -> Result<()> {
    let settings = ctx.settings.snapshot().await;
    let summary = ctx
        .content
        .summary(settings.language, chapter_id)
        .ok_or_else(|| MushafError::NotFound(format!("chapter {}", chapter_id)))?;

    println!(
        "{} {}",
        i18n::localized(settings.language, i18n::CHAPTER),
        summary.id
    );
    println!("{} ({})", summary.transliteration, summary.name);
    println!("{}", summary.translation);

    let chapter = match ctx.content.chapter(settings.language, chapter_id) {
        Ok(chapter) => chapter,
        Err(MushafError::NotFound(what)) => {
            // Remember the place even when the text isn't installed.
            ctx.tracker
                .save_last_read(chapter_id, verse_id.clamp(1, summary.total_verses))
                .await;
            println!();
            println!("No text installed for {}", what);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let session = ReadingSession::open(
        ctx.tracker.clone(),
        chapter,
        verse_id,
        ctx.reading.settle_grace(),
        Instant::now(),
    )
    .await;

    println!("{}", session.counter().label(settings.language));
    println!();
    print_verses(session.chapter(), session.current_verse(), limit, &settings);

    Ok(())
}

pub async fn mark_seen(ctx: &AppContext, verse_id: u16) -> Result<()> {
    // Same resolution as a launch, so a stale position falls back to 1:1.
    let view = ctx.launch().run().await;

    let chapter = match ctx.content.chapter(view.language, view.chapter_id) {
        Ok(chapter) => chapter,
        Err(MushafError::NotFound(_)) => {
            let verse_id = verse_id.clamp(1, view.total_verses.max(1));
            ctx.tracker.save_last_read(view.chapter_id, verse_id).await;
            let counter = VerseCounter::new(verse_id, view.total_verses);
            print_progress(&counter, view.language);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let grace = ctx.reading.settle_grace();
    let opened_at = Instant::now();
    let mut session = ReadingSession::open(
        ctx.tracker.clone(),
        chapter,
        view.initial_verse_id,
        grace,
        opened_at,
    )
    .await;

    if session.on_visible(&[verse_id], opened_at + grace).await {
        print_progress(&session.counter(), view.language);
    } else {
        println!("Verse {} is not in chapter {}", verse_id, view.chapter_id);
    }

    Ok(())
}

fn print_progress(counter: &VerseCounter, language: Language) {
    println!("{}", counter.label(language));
    println!("{:.0}%", counter.progress_percent());
}

pub async fn list_chapters(ctx: &AppContext) -> Result<()> {
    let language = ctx.settings.language().await;
    let chapters = ctx.content.chapter_index(language);

    println!("{}", i18n::localized(language, i18n::CHAPTERS));
    for chapter in chapters {
        println!(
            "{:>3}. {:<18} {:<32} {:>3}  {}",
            chapter.id,
            chapter.transliteration,
            chapter.translation,
            chapter.total_verses,
            chapter.name
        );
    }

    Ok(())
}

pub async fn settings(
    ctx: &AppContext,
    action: Option<SettingsAction>,
    system_theme: Theme,
) -> Result<()> {
    match action.unwrap_or(SettingsAction::Show) {
        SettingsAction::Show => {}
        SettingsAction::Language { language } => {
            ctx.settings.save_language(language).await;
        }
        SettingsAction::Font { delta } => {
            let current = ctx.settings.font_size().await;
            ctx.settings
                .save_font_size(adjust_font_size(current, delta))
                .await;
        }
        SettingsAction::Transliteration { state } => {
            ctx.settings
                .save_show_transliteration(state == Switch::On)
                .await;
        }
        SettingsAction::Style { style } => {
            ctx.settings.save_quran_style(style).await;
        }
        SettingsAction::Theme { choice } => {
            let mut theme = ThemeController::load(ctx.settings.clone(), system_theme).await;
            match choice {
                ThemeChoice::Light => theme.set(Theme::Light).await,
                ThemeChoice::Dark => theme.set(Theme::Dark).await,
                ThemeChoice::Toggle => theme.toggle().await,
            };
        }
        SettingsAction::Reset => {
            ctx.settings.reset().await;
            println!("Settings reset");
        }
    }

    let settings = ctx.settings.snapshot().await;
    let theme = ThemeController::load(ctx.settings.clone(), system_theme).await;
    print_settings(&settings, &theme, &ctx.content.languages());
    Ok(())
}

fn print_settings(settings: &Settings, theme: &ThemeController, installed: &[Language]) {
    let lang = settings.language;
    println!("{}", i18n::localized(lang, i18n::SETTINGS));
    println!(
        "  {}: {} ({})",
        i18n::localized(lang, i18n::TRANSLATION_LANGUAGE),
        lang.native_name(),
        lang
    );
    println!(
        "  {}: {}",
        i18n::localized(lang, i18n::READING_FONT_SIZE),
        settings.font_size
    );
    let transliteration = if settings.show_transliteration {
        "on"
    } else {
        "off"
    };
    println!(
        "  {}: {}",
        i18n::localized(lang, i18n::SHOW_TRANSLITERATION),
        transliteration
    );
    println!(
        "  {}: {}",
        i18n::localized(lang, i18n::QURAN_STYLE),
        settings.quran_style
    );
    let mut theme_label = theme.current().to_string();
    if !theme.is_explicit() {
        theme_label.push_str(" (system)");
    }
    println!("  {}: {}", i18n::localized(lang, i18n::THEME), theme_label);

    let installed: Vec<&str> = installed.iter().map(|l| l.code()).collect();
    println!("  Installed: {}", installed.join(", "));
}

fn print_verses(chapter: &ChapterRecord, from: u16, limit: usize, settings: &Settings) {
    for verse in chapter.verses_from(from).iter().take(limit) {
        println!("{} ({})", verse.text, verse.id);
        if settings.show_transliteration && !verse.transliteration.is_empty() {
            println!("  {}", verse.transliteration);
        }
        if !verse.translation.is_empty() {
            println!("  {}", verse.translation);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ReadingConfig;
    use crate::content::ContentIndex;
    use crate::domain::chapter::sample_chapter;
    use crate::domain::{QuranStyle, ReadingPosition};
    use crate::position::LAST_READ_KEY;
    use crate::store::MemoryStore;

    fn context_with(store: Arc<MemoryStore>, content: ContentIndex) -> AppContext {
        AppContext::with_parts(store, Arc::new(content), ReadingConfig::default())
    }

    #[tokio::test]
    async fn test_font_steps_stay_in_range() {
        let ctx = AppContext::in_memory().unwrap();
        for _ in 0..15 {
            settings(&ctx, Some(SettingsAction::Font { delta: 2 }), Theme::Light)
                .await
                .unwrap();
        }
        assert_eq!(ctx.settings.font_size().await, 40);

        for _ in 0..15 {
            settings(&ctx, Some(SettingsAction::Font { delta: -2 }), Theme::Light)
                .await
                .unwrap();
        }
        assert_eq!(ctx.settings.font_size().await, 12);
    }

    #[tokio::test]
    async fn test_theme_toggle_starts_from_system() {
        let ctx = AppContext::in_memory().unwrap();
        settings(
            &ctx,
            Some(SettingsAction::Theme {
                choice: ThemeChoice::Toggle,
            }),
            Theme::Dark,
        )
        .await
        .unwrap();

        assert_eq!(ctx.settings.theme().await, Some(Theme::Light));
    }

    #[tokio::test]
    async fn test_style_and_reset() {
        let ctx = AppContext::in_memory().unwrap();
        settings(
            &ctx,
            Some(SettingsAction::Style {
                style: QuranStyle::IndoPak,
            }),
            Theme::Light,
        )
        .await
        .unwrap();
        assert_eq!(ctx.settings.quran_style().await, QuranStyle::IndoPak);

        settings(&ctx, Some(SettingsAction::Reset), Theme::Light)
            .await
            .unwrap();
        assert_eq!(ctx.settings.quran_style().await, QuranStyle::Uthmani);
    }

    #[tokio::test]
    async fn test_read_without_text_still_records_position() {
        let ctx = AppContext::in_memory().unwrap();
        read_chapter(&ctx, 36, 12, 5).await.unwrap();
        assert_eq!(
            ctx.tracker.last_read().await,
            Some(ReadingPosition::new(36, 12))
        );
    }

    #[tokio::test]
    async fn test_read_unknown_chapter() {
        let ctx = AppContext::in_memory().unwrap();
        assert!(matches!(
            read_chapter(&ctx, 115, 1, 5).await,
            Err(MushafError::NotFound(_))
        ));
        assert_eq!(ctx.tracker.last_read().await, None);
    }

    #[tokio::test]
    async fn test_seen_after_stale_chapter_starts_over() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw(LAST_READ_KEY, r#"{"chapterId":999,"verseId":5}"#);
        let ctx = context_with(store, ContentIndex::builtin());

        mark_seen(&ctx, 3).await.unwrap();
        assert_eq!(
            ctx.tracker.last_read().await,
            Some(ReadingPosition::new(1, 3))
        );
    }

    #[tokio::test]
    async fn test_seen_without_text_uses_summary() {
        let ctx = AppContext::in_memory().unwrap();
        read_chapter(&ctx, 2, 5, 5).await.unwrap();

        mark_seen(&ctx, 7).await.unwrap();
        assert_eq!(
            ctx.tracker.last_read().await,
            Some(ReadingPosition::new(2, 7))
        );

        mark_seen(&ctx, 400).await.unwrap();
        assert_eq!(
            ctx.tracker.last_read().await,
            Some(ReadingPosition::new(2, 286))
        );
    }

    #[tokio::test]
    async fn test_seen_with_text_records_visible_verse() {
        let content =
            ContentIndex::from_records(Language::En, vec![sample_chapter(1, 7)]).unwrap();
        let ctx = context_with(Arc::new(MemoryStore::new()), content);

        mark_seen(&ctx, 4).await.unwrap();
        assert_eq!(
            ctx.tracker.last_read().await,
            Some(ReadingPosition::new(1, 4))
        );

        // Not a verse of the chapter; the session reopens at 1:4.
        mark_seen(&ctx, 9).await.unwrap();
        assert_eq!(
            ctx.tracker.last_read().await,
            Some(ReadingPosition::new(1, 4))
        );
    }
}
