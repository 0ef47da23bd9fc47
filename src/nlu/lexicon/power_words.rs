//! Power words: reações emocionais curtas, com typos registrados e
//! intensidade. Único domínio em que `typos` pode ser não vazio.

use crate::core::{Category, EntryTag, Intensity, RawEntry};

const fn word(
    canonical: &'static str,
    variations: &'static [&'static str],
    typos: &'static [&'static str],
    category: Category,
    intensity: Intensity,
) -> RawEntry {
    RawEntry {
        canonical,
        variations,
        typos,
        category,
        tag: EntryTag::Intensity(intensity),
    }
}

pub const POWER_WORDS: &[RawEntry] = &[
    word(
        "круто",
        &["крутяк", "круть", "крутота"],
        &["кроуто", "круот", "куруто"],
        Category::Positive,
        Intensity::Medium,
    ),
    word(
        "супер",
        &["суперово", "суперски"],
        &["сюпер", "суепр"],
        Category::Positive,
        Intensity::Medium,
    ),
    word(
        "чудово",
        &["чудесно", "прекрасно"],
        &["чудого", "чудвоо"],
        Category::Positive,
        Intensity::Medium,
    ),
    word(
        "клас",
        &["класно", "класний", "класс"],
        &["калс", "клсс"],
        Category::Positive,
        Intensity::Medium,
    ),
    word(
        "неймовірно",
        &["неймовірний", "неймовірна"],
        &["неймоверно", "неймовіно", "неймовирно"],
        Category::Surprise,
        Intensity::High,
    ),
    word("вау", &["вов", "воу", "wow"], &["вуа"], Category::Surprise, Intensity::Medium),
    word("ого", &["огого", "нічого собі"], &["огоо"], Category::Surprise, Intensity::Low),
    word(
        "капець",
        &["капєць", "капец", "капут"],
        &["капкць", "капеуь", "капецб"],
        Category::Negative,
        Intensity::High,
    ),
    word(
        "жах",
        &["жахливо", "жахіття", "жесть"],
        &["жхах", "жаах"],
        Category::Negative,
        Intensity::High,
    ),
    word(
        "сумно",
        &["сумненько", "печально", "шкода"],
        &["сумнно", "смуно"],
        Category::Sadness,
        Intensity::Medium,
    ),
    word("блін", &["блин", "бляха"], &["бліг", "бдін"], Category::Anger, Intensity::Medium),
    word(
        "дідько",
        &["чорт", "трясця"],
        &["дідбко", "дідькл"],
        Category::Anger,
        Intensity::Medium,
    ),
    word(
        "awesome",
        &["so cool", "cool"],
        &["awsome", "awesom", "awesme"],
        Category::Positive,
        Intensity::High,
    ),
    word(
        "amazing",
        &["incredible", "unbelievable"],
        &["amazng", "amaizing"],
        Category::Surprise,
        Intensity::High,
    ),
    word("damn", &["dammit", "damn it"], &["dman", "damm"], Category::Anger, Intensity::Medium),
    word("omg", &["oh my god", "omfg"], &["omgg"], Category::Surprise, Intensity::High),
];
