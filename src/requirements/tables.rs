//! Static keyword tables (English and Turkish).
//!
//! All patterns are stored folded (lowercase, no diacritics) and are matched
//! as whole terms by [`crate::text::contains_term`].

use super::{Budget, Domain, LocationPreference, Urgency};

pub static URGENCY_PATTERNS: &[(&str, Urgency)] = &[
    ("urgent", Urgency::High),
    ("urgently", Urgency::High),
    ("asap", Urgency::High),
    ("as soon as possible", Urgency::High),
    ("immediately", Urgency::High),
    ("right away", Urgency::High),
    ("deadline", Urgency::High),
    ("fast", Urgency::High),
    ("quickly", Urgency::High),
    ("acil", Urgency::High),
    ("hemen", Urgency::High),
    ("hizli", Urgency::High),
    ("bu hafta", Urgency::High),
    ("soon", Urgency::Medium),
    ("within a month", Urgency::Medium),
    ("next month", Urgency::Medium),
    ("yakinda", Urgency::Medium),
    ("bir ay icinde", Urgency::Medium),
    ("no rush", Urgency::Low),
    ("whenever", Urgency::Low),
    ("flexible timeline", Urgency::Low),
    ("long term", Urgency::Low),
    ("long-term", Urgency::Low),
    ("acele yok", Urgency::Low),
    ("esnek", Urgency::Low),
    ("uzun vadeli", Urgency::Low),
];

pub static BUDGET_PATTERNS: &[(&str, Budget)] = &[
    ("low budget", Budget::Low),
    ("limited budget", Budget::Low),
    ("tight budget", Budget::Low),
    ("small budget", Budget::Low),
    ("cheap", Budget::Low),
    ("affordable", Budget::Low),
    ("bootstrapped", Budget::Low),
    ("dusuk butce", Budget::Low),
    ("kisitli butce", Budget::Low),
    ("sinirli butce", Budget::Low),
    ("ucuz", Budget::Low),
    ("uygun fiyat", Budget::Low),
    ("medium budget", Budget::Medium),
    ("moderate budget", Budget::Medium),
    ("reasonable", Budget::Medium),
    ("orta butce", Budget::Medium),
    ("makul", Budget::Medium),
    ("high budget", Budget::High),
    ("big budget", Budget::High),
    ("generous", Budget::High),
    ("premium", Budget::High),
    ("enterprise", Budget::High),
    ("well funded", Budget::High),
    ("yuksek butce", Budget::High),
    ("genis butce", Budget::High),
    ("kurumsal", Budget::High),
];

pub static LOCATION_PATTERNS: &[(&str, LocationPreference)] = &[
    ("remote", LocationPreference::Remote),
    ("remotely", LocationPreference::Remote),
    ("online", LocationPreference::Remote),
    ("anywhere", LocationPreference::Remote),
    ("distributed", LocationPreference::Remote),
    ("uzaktan", LocationPreference::Remote),
    ("evden", LocationPreference::Remote),
    ("on-site", LocationPreference::Local),
    ("onsite", LocationPreference::Local),
    ("on site", LocationPreference::Local),
    ("in office", LocationPreference::Local),
    ("office", LocationPreference::Local),
    ("in person", LocationPreference::Local),
    ("local", LocationPreference::Local),
    ("ofis", LocationPreference::Local),
    ("ofiste", LocationPreference::Local),
    ("yerinde", LocationPreference::Local),
    ("yuz yuze", LocationPreference::Local),
    ("yerel", LocationPreference::Local),
    ("hybrid", LocationPreference::Hybrid),
    ("hibrit", LocationPreference::Hybrid),
    ("karma", LocationPreference::Hybrid),
];

pub static DOMAIN_PATTERNS: &[(&str, Domain)] = &[
    ("software", Domain::Technology),
    ("developer", Domain::Technology),
    ("engineer", Domain::Technology),
    ("web", Domain::Technology),
    ("website", Domain::Technology),
    ("mobile", Domain::Technology),
    ("app", Domain::Technology),
    ("saas", Domain::Technology),
    ("api", Domain::Technology),
    ("cloud", Domain::Technology),
    ("frontend", Domain::Technology),
    ("backend", Domain::Technology),
    ("react", Domain::Technology),
    ("python", Domain::Technology),
    ("javascript", Domain::Technology),
    ("technology", Domain::Technology),
    ("tech", Domain::Technology),
    ("yazilim", Domain::Technology),
    ("gelistirici", Domain::Technology),
    ("mobil", Domain::Technology),
    ("uygulama", Domain::Technology),
    ("teknoloji", Domain::Technology),
    ("yapay zeka", Domain::Technology),
    ("marketing", Domain::Marketing),
    ("seo", Domain::Marketing),
    ("social media", Domain::Marketing),
    ("brand", Domain::Marketing),
    ("advertising", Domain::Marketing),
    ("campaign", Domain::Marketing),
    ("pazarlama", Domain::Marketing),
    ("sosyal medya", Domain::Marketing),
    ("marka", Domain::Marketing),
    ("reklam", Domain::Marketing),
    ("kampanya", Domain::Marketing),
    ("finance", Domain::Finance),
    ("financial", Domain::Finance),
    ("accounting", Domain::Finance),
    ("investment", Domain::Finance),
    ("bank", Domain::Finance),
    ("fintech", Domain::Finance),
    ("audit", Domain::Finance),
    ("finans", Domain::Finance),
    ("muhasebe", Domain::Finance),
    ("yatirim", Domain::Finance),
    ("banka", Domain::Finance),
    ("vergi", Domain::Finance),
    ("health", Domain::Health),
    ("healthcare", Domain::Health),
    ("medical", Domain::Health),
    ("hospital", Domain::Health),
    ("clinic", Domain::Health),
    ("doctor", Domain::Health),
    ("pharma", Domain::Health),
    ("saglik", Domain::Health),
    ("hastane", Domain::Health),
    ("klinik", Domain::Health),
    ("doktor", Domain::Health),
    ("education", Domain::Education),
    ("school", Domain::Education),
    ("teacher", Domain::Education),
    ("training", Domain::Education),
    ("course", Domain::Education),
    ("university", Domain::Education),
    ("e-learning", Domain::Education),
    ("egitim", Domain::Education),
    ("okul", Domain::Education),
    ("ogretmen", Domain::Education),
    ("kurs", Domain::Education),
    ("universite", Domain::Education),
    ("real estate", Domain::RealEstate),
    ("property", Domain::RealEstate),
    ("construction", Domain::RealEstate),
    ("architecture", Domain::RealEstate),
    ("housing", Domain::RealEstate),
    ("emlak", Domain::RealEstate),
    ("gayrimenkul", Domain::RealEstate),
    ("insaat", Domain::RealEstate),
    ("mimar", Domain::RealEstate),
    ("konut", Domain::RealEstate),
    ("logistics", Domain::Logistics),
    ("shipping", Domain::Logistics),
    ("cargo", Domain::Logistics),
    ("supply chain", Domain::Logistics),
    ("warehouse", Domain::Logistics),
    ("transport", Domain::Logistics),
    ("lojistik", Domain::Logistics),
    ("kargo", Domain::Logistics),
    ("tedarik", Domain::Logistics),
    ("depo", Domain::Logistics),
    ("energy", Domain::Energy),
    ("solar", Domain::Energy),
    ("wind", Domain::Energy),
    ("electricity", Domain::Energy),
    ("battery", Domain::Energy),
    ("enerji", Domain::Energy),
    ("gunes enerjisi", Domain::Energy),
    ("elektrik", Domain::Energy),
    ("environment", Domain::Environment),
    ("environmental", Domain::Environment),
    ("sustainability", Domain::Environment),
    ("recycling", Domain::Environment),
    ("climate", Domain::Environment),
    ("carbon", Domain::Environment),
    ("cevre", Domain::Environment),
    ("surdurulebilirlik", Domain::Environment),
    ("geri donusum", Domain::Environment),
    ("iklim", Domain::Environment),
    ("legal", Domain::Legal),
    ("law", Domain::Legal),
    ("lawyer", Domain::Legal),
    ("attorney", Domain::Legal),
    ("compliance", Domain::Legal),
    ("gdpr", Domain::Legal),
    ("hukuk", Domain::Legal),
    ("avukat", Domain::Legal),
    ("sozlesme", Domain::Legal),
    ("kvkk", Domain::Legal),
    ("human resources", Domain::HumanResources),
    ("hr", Domain::HumanResources),
    ("recruitment", Domain::HumanResources),
    ("recruiter", Domain::HumanResources),
    ("hiring", Domain::HumanResources),
    ("payroll", Domain::HumanResources),
    ("insan kaynaklari", Domain::HumanResources),
    ("ise alim", Domain::HumanResources),
    ("bordro", Domain::HumanResources),
];

/// Alternate spellings accepted by `Domain::from_str`, hyphenated.
pub static DOMAIN_ALIASES: &[(&str, Domain)] = &[
    ("tech", Domain::Technology),
    ("teknoloji", Domain::Technology),
    ("yazilim", Domain::Technology),
    ("pazarlama", Domain::Marketing),
    ("finans", Domain::Finance),
    ("saglik", Domain::Health),
    ("healthcare", Domain::Health),
    ("egitim", Domain::Education),
    ("emlak", Domain::RealEstate),
    ("gayrimenkul", Domain::RealEstate),
    ("realestate", Domain::RealEstate),
    ("lojistik", Domain::Logistics),
    ("enerji", Domain::Energy),
    ("cevre", Domain::Environment),
    ("hukuk", Domain::Legal),
    ("hr", Domain::HumanResources),
    ("insan-kaynaklari", Domain::HumanResources),
    ("genel", Domain::General),
];

/// Project-type rules: any trigger present adds the listed roles, in table
/// order.
pub static PROJECT_ROLE_RULES: &[(&[&str], &[&str])] = &[
    (
        &["web", "website", "web sitesi", "web app", "web uygulamasi", "saas", "portal"],
        &["Frontend Developer", "Backend Developer"],
    ),
    (
        &["mobile", "mobil", "ios", "android", "mobile app", "mobil uygulama"],
        &["Mobile Developer", "Backend Developer"],
    ),
    (
        &[
            "e-commerce",
            "ecommerce",
            "e-ticaret",
            "eticaret",
            "online store",
            "online magaza",
            "marketplace",
            "shop",
        ],
        &["UI/UX Designer", "Marketing Specialist"],
    ),
    (&["frontend", "front-end", "front end"], &["Frontend Developer"]),
    (&["backend", "back-end", "back end", "api"], &["Backend Developer"]),
    (&["full stack", "fullstack", "full-stack"], &["Full Stack Developer"]),
    (
        &[
            "data",
            "veri",
            "analytics",
            "machine learning",
            "ml",
            "ai",
            "yapay zeka",
        ],
        &["Data Scientist"],
    ),
    (
        &["design", "designer", "tasarim", "logo", "ui", "ux", "figma"],
        &["UI/UX Designer"],
    ),
    (
        &["marketing", "pazarlama", "seo", "social media", "sosyal medya", "campaign"],
        &["Marketing Specialist"],
    ),
    (
        &["devops", "cloud", "bulut", "infrastructure", "altyapi", "kubernetes"],
        &["DevOps Engineer"],
    ),
    (&["qa", "testing", "quality assurance"], &["QA Engineer"]),
    (&["content", "icerik", "copywriting", "blog"], &["Content Writer"]),
    (&["accounting", "muhasebe", "financial", "finansal"], &["Financial Analyst"]),
    (&["legal", "hukuk", "contract", "sozlesme"], &["Legal Advisor"]),
];

/// Skills recognised in descriptions, in reporting order.
pub static SKILL_VOCABULARY: &[&str] = &[
    "react",
    "react native",
    "vue",
    "angular",
    "svelte",
    "next.js",
    "node.js",
    "nodejs",
    "typescript",
    "javascript",
    "html",
    "css",
    "tailwind",
    "python",
    "django",
    "flask",
    "java",
    "spring",
    "kotlin",
    "swift",
    "flutter",
    "go",
    "golang",
    "rust",
    "c++",
    "c#",
    ".net",
    "php",
    "laravel",
    "ruby",
    "rails",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "graphql",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "terraform",
    "linux",
    "figma",
    "photoshop",
    "illustrator",
    "seo",
    "google ads",
    "social media",
    "copywriting",
    "excel",
    "power bi",
    "tableau",
    "machine learning",
    "tensorflow",
    "pytorch",
    "pandas",
    "scrum",
    "agile",
    "accounting",
    "sales",
];

/// Spoken-language mentions and the canonical name they map to.
pub static LANGUAGE_PATTERNS: &[(&str, &str)] = &[
    ("english", "English"),
    ("ingilizce", "English"),
    ("turkish", "Turkish"),
    ("turkce", "Turkish"),
    ("german", "German"),
    ("almanca", "German"),
    ("french", "French"),
    ("fransizca", "French"),
    ("spanish", "Spanish"),
    ("ispanyolca", "Spanish"),
    ("arabic", "Arabic"),
    ("arapca", "Arabic"),
    ("russian", "Russian"),
    ("rusca", "Russian"),
];

/// Checked before [`AVAILABLE_TERMS`] so "not available" reads as busy.
pub static BUSY_TERMS: &[&str] = &[
    "busy",
    "unavailable",
    "not available",
    "fully booked",
    "no capacity",
    "mesgul",
    "yogun",
    "musait degil",
];

pub static AVAILABLE_TERMS: &[&str] = &[
    "available",
    "free",
    "open to work",
    "open for projects",
    "looking for projects",
    "musait",
    "uygun",
    "bos",
];
