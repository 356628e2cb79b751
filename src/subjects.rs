// src/subjects.rs
//
// Static label/icon metadata for known subject codes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Book,
    Calculator,
    Language,
    Puzzle,
    Mosque,
    Running,
    Users,
    PlusCircle,
    Heart,
    Flask,
    Earth,
    Wrench,
    Laptop,
    Palette,
    Star,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Book => "book",
            Icon::Calculator => "calculator",
            Icon::Language => "language",
            Icon::Puzzle => "puzzle-piece",
            Icon::Mosque => "mosque",
            Icon::Running => "person-running",
            Icon::Users => "users-gear",
            Icon::PlusCircle => "plus-circle",
            Icon::Heart => "heart-pulse",
            Icon::Flask => "flask-vial",
            Icon::Earth => "earth-africa",
            Icon::Wrench => "screwdriver-wrench",
            Icon::Laptop => "laptop-code",
            Icon::Palette => "palette",
            Icon::Star => "star",
        }
    }

    /// Glyph available in egui's bundled emoji fonts.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Book => "📖",
            Icon::Calculator => "🔢",
            Icon::Language => "🔤",
            Icon::Puzzle => "🧩",
            Icon::Mosque => "🕌",
            Icon::Running => "🏃",
            Icon::Users => "👥",
            Icon::PlusCircle => "➕",
            Icon::Heart => "❤",
            Icon::Flask => "⚗",
            Icon::Earth => "🌍",
            Icon::Wrench => "🔧",
            Icon::Laptop => "💻",
            Icon::Palette => "🎨",
            Icon::Star => "⭐",
        }
    }
}

pub const DEFAULT_ICON: Icon = Icon::Star;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectDisplay<'a> {
    pub label: &'a str,
    pub icon: Icon,
}

static SUBJECTS: &[(&str, &str, Icon)] = &[
    ("Arabic",              "Arabic Language",           Icon::Book),
    ("mathematics",         "Mathematics",               Icon::Calculator),
    ("english",             "English Language",          Icon::Language),
    ("Multidisciplinary",   "Discover (Multidisciplinary)", Icon::Puzzle),
    ("Religious_Education", "Religious Education",       Icon::Mosque),
    ("physical_education",  "Physical Education",        Icon::Running),
    ("Tokatsu_activities",  "Tokkatsu Activities",       Icon::Users),
    ("connet_plus",         "Advanced English",          Icon::PlusCircle),
    ("connect_plus",        "Advanced English",          Icon::PlusCircle),
    ("Health_education",    "Health Education",          Icon::Heart),
    ("Sciences",            "Science",                   Icon::Flask),
    ("Social_Studies",      "Social Studies",            Icon::Earth),
    ("Professional_skills", "Vocational Skills",         Icon::Wrench),
    ("technology",          "Technology",                Icon::Laptop),
    ("art",                 "Art Education",             Icon::Palette),
];

pub fn is_known(code: &str) -> bool {
    SUBJECTS.iter().any(|(c, _, _)| *c == code)
}

/// Known codes get their label/icon; unknown ones show the raw code with a star.
pub fn display_for(code: &str) -> SubjectDisplay<'_> {
    match SUBJECTS.iter().find(|(c, _, _)| *c == code) {
        Some((_, label, icon)) => SubjectDisplay { label: *label, icon: *icon },
        None => SubjectDisplay { label: code, icon: DEFAULT_ICON },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_fallback() {
        let m = display_for("mathematics");
        assert_eq!(m.label, "Mathematics");
        assert_eq!(m.icon, Icon::Calculator);

        let x = display_for("robotics");
        assert_eq!(x.label, "robotics");
        assert_eq!(x.icon, DEFAULT_ICON);
        assert!(!is_known("robotics"));
    }

    #[test]
    fn both_connect_spellings_map_to_same_label() {
        assert_eq!(display_for("connet_plus"), display_for("connect_plus"));
    }
}
