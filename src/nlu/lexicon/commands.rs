//! Dicionários dos domínios de comando: capability, news, weather,
//! subscribe e unsubscribe.
//!
//! Variações que já contêm a forma canônica são omitidas: a contenção da
//! canônica é testada primeiro e vence.

use crate::core::{Category, EntryTag, RawEntry};

const fn entry(
    canonical: &'static str,
    variations: &'static [&'static str],
    category: Category,
) -> RawEntry {
    RawEntry {
        canonical,
        variations,
        typos: &[],
        category,
        tag: EntryTag::Plain,
    }
}

// --- Capability ---

pub const CAPABILITY: &[RawEntry] = &[
    entry(
        "що ти можеш",
        &[
            "шо ти можеш",
            "що ти вмієш",
            "шо ти вмієш",
            "що ти умієш",
            "що можеш",
            "що вмієш",
            "что ты умеешь",
            "что ты можешь",
        ],
        Category::Capabilities,
    ),
    entry(
        "твої можливості",
        &["ваші можливості", "які в тебе можливості", "твої функції", "які в тебе функції"],
        Category::Capabilities,
    ),
    entry("можливості", &["возможности"], Category::Capabilities),
    entry("функції", &["функціонал", "функционал"], Category::Capabilities),
    entry(
        "допомога",
        &["допоможи", "допомогти", "поможи", "помощь", "хелп"],
        Category::Help,
    ),
    entry("список команд", &["які є команди", "команди", "меню"], Category::Help),
    entry(
        "як тобою користуватися",
        &["як користуватися", "як тобою користуватись", "як працювати з тобою"],
        Category::Help,
    ),
    entry(
        "what can you do",
        &["what can u do", "what do you do", "what are you able to do"],
        Category::Capabilities,
    ),
    entry(
        "your capabilities",
        &["capabilities", "your features", "features"],
        Category::Capabilities,
    ),
    entry("help", &["need assistance", "assist me"], Category::Help),
    entry("list of commands", &["commands", "command list", "menu"], Category::Help),
    entry("how to use you", &["how do i use you", "how to use"], Category::Help),
];

// --- News ---

pub const NEWS: &[RawEntry] = &[
    entry(
        "новини",
        &["новина", "новин", "новости", "новость", "що нового", "що в світі"],
        Category::Command,
    ),
    entry("news", &["what's new", "whats new", "headlines"], Category::Command),
    entry("головні новини", &["головне за день", "топ новини"], Category::Command),
    entry("top news", &["top stories", "breaking news"], Category::Command),
];

// --- Weather ---

pub const WEATHER: &[RawEntry] = &[
    entry(
        "погода",
        &["погоду", "погоди", "погоді", "погодка", "погоде", "прогноз"],
        Category::Command,
    ),
    entry("weather", &["forecast"], Category::Command),
    entry(
        "температура",
        &["температуру", "скільки градусів", "градусів"],
        Category::Command,
    ),
    entry("temperature", &["how hot", "how cold"], Category::Command),
    entry(
        "чи буде дощ",
        &["буде дощ", "дощ", "парасолька", "парасольку"],
        Category::Command,
    ),
    entry("will it rain", &["is it raining", "rain", "umbrella"], Category::Command),
];

// --- Subscribe ---

pub const SUBSCRIBE: &[RawEntry] = &[
    entry(
        "підписка",
        &[
            "підписатися",
            "підписатись",
            "підпишись",
            "підпиши",
            "підписати",
            "підписуюсь",
            "подписка",
            "подписаться",
        ],
        Category::Command,
    ),
    entry(
        "підписка на новини",
        &["підписатися на новини", "підпиши на новини", "підписка на розсилку"],
        Category::Command,
    ),
    entry(
        "підписка на погоду",
        &["підписатися на погоду", "підпиши на погоду", "підписка на прогноз"],
        Category::Command,
    ),
    entry("subscribe", &["subscription", "sign me up", "sign up"], Category::Command),
    entry(
        "subscribe to news",
        &["news subscription", "subscribe me to news"],
        Category::Command,
    ),
    entry(
        "subscribe to weather",
        &["weather subscription", "subscribe me to weather"],
        Category::Command,
    ),
];

// --- Unsubscribe ---

pub const UNSUBSCRIBE: &[RawEntry] = &[
    entry(
        "відписка",
        &[
            "відписатися",
            "відписатись",
            "відпишись",
            "відпиши",
            "відписати",
            "скасувати підписку",
            "скасуй підписку",
            "припинити розсилку",
            "отписка",
            "отписаться",
        ],
        Category::Command,
    ),
    entry(
        "відписатися від новин",
        &["відписка від новин", "відпиши від новин", "скасувати підписку на новини"],
        Category::Command,
    ),
    entry(
        "відписатися від погоди",
        &["відписка від погоди", "скасувати підписку на погоду"],
        Category::Command,
    ),
    entry(
        "unsubscribe",
        &["cancel subscription", "stop sending", "stop subscription"],
        Category::Command,
    ),
    entry(
        "unsubscribe from news",
        &["stop news", "cancel news subscription"],
        Category::Command,
    ),
    entry(
        "unsubscribe from weather",
        &["stop weather", "cancel weather subscription"],
        Category::Command,
    ),
];
