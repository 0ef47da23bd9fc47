//! Cidades reconhecidas pelo extrator: nome canônico ucraniano + grafias
//! alternativas (casos gramaticais, russo, transliteração latina).
//!
//! O nome canônico é sempre adicionado às variantes pelo extrator.

pub const CITIES: &[(&str, &[&str])] = &[
    (
        "Київ",
        &["києва", "києві", "києву", "киев", "киева", "киеве", "киеві", "kyiv", "kiev"],
    ),
    ("Львів", &["львова", "львові", "львов", "львове", "lviv", "lvov"]),
    ("Харків", &["харкова", "харкові", "харьков", "харькове", "kharkiv", "kharkov"]),
    ("Одеса", &["одеси", "одесі", "одесу", "одесса", "одессе", "odesa", "odessa"]),
    ("Дніпро", &["дніпрі", "дніпра", "днепр", "днепре", "dnipro", "dnepr"]),
    ("Запоріжжя", &["запоріжжі", "запорожье", "zaporizhzhia", "zaporizhia", "zaporozhye"]),
    ("Вінниця", &["вінниці", "винница", "vinnytsia", "vinnitsa"]),
    ("Полтава", &["полтаві", "полтави", "poltava"]),
    ("Чернігів", &["чернігові", "чернігова", "чернигов", "chernihiv"]),
    ("Житомир", &["житомирі", "житомира", "zhytomyr"]),
    ("Ужгород", &["ужгороді", "ужгорода", "uzhhorod"]),
    (
        "Івано-Франківськ",
        &["івано франківську", "франківськ", "франківську", "ивано франковск", "ivano frankivsk"],
    ),
    ("Тернопіль", &["тернополі", "тернополя", "тернополь", "ternopil"]),
    ("Луцьк", &["луцьку", "луцька", "луцк", "lutsk"]),
    ("Рівне", &["рівному", "рівного", "ровно", "rivne"]),
    ("Суми", &["сумах", "сумы", "sumy"]),
    ("Херсон", &["херсоні", "херсона", "kherson"]),
    ("Миколаїв", &["миколаєві", "миколаєва", "николаев", "mykolaiv"]),
    ("Черкаси", &["черкасах", "черкас", "черкассы", "cherkasy"]),
    ("Чернівці", &["чернівцях", "чернівців", "черновцы", "chernivtsi"]),
];
