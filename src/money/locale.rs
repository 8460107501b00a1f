use tracing::warn;

/// Separators used when rendering amounts for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub group_separator: &'static str,
    pub decimal_separator: char,
}

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

const fn locale(tag: &'static str, group: &'static str, decimal: char) -> Locale {
    Locale {
        tag,
        group_separator: group,
        decimal_separator: decimal,
    }
}

/// Known locales. The first entry for a language is its fallback.
const LOCALES: &[Locale] = &[
    locale("en-US", ",", '.'),
    locale("en-GB", ",", '.'),
    locale("ja-JP", ",", '.'),
    locale("zh-CN", ",", '.'),
    locale("de-DE", ".", ','),
    locale("de-CH", "\u{2019}", '.'),
    locale("it-IT", ".", ','),
    locale("nl-NL", ".", ','),
    locale("pt-BR", ".", ','),
    locale("id-ID", ".", ','),
    locale("tr-TR", ".", ','),
    locale("fr-FR", NARROW_NBSP, ','),
    locale("sv-SE", NBSP, ','),
    locale("nb-NO", NBSP, ','),
    locale("fi-FI", NBSP, ','),
    locale("pl-PL", NBSP, ','),
    locale("ru-RU", NBSP, ','),
];

pub const DEFAULT_LOCALE: &str = "en-US";

fn default_locale() -> Locale {
    LOCALES[0]
}

impl Locale {
    /// Look up a locale by BCP 47 tag.
    ///
    /// Matching ignores case and accepts `_` in place of `-`. A tag with an
    /// unknown region falls back to its language; anything else falls back to
    /// [`DEFAULT_LOCALE`].
    pub fn resolve(tag: &str) -> Locale {
        let normalized = tag.trim().replace('_', "-");

        if let Some(found) = LOCALES
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&normalized))
        {
            return *found;
        }

        let language = normalized.split('-').next().unwrap_or_default();
        if let Some(found) = LOCALES.iter().find(|l| {
            l.tag
                .split('-')
                .next()
                .is_some_and(|lang| lang.eq_ignore_ascii_case(language))
        }) {
            return *found;
        }

        warn!(
            locale = %tag,
            fallback = DEFAULT_LOCALE,
            "Unknown locale '{}', using default separators",
            tag
        );
        default_locale()
    }
}
