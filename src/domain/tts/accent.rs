use crate::domain::language::LanguageCode;
use serde::{Deserialize, Serialize};

/// Regional English voice, selected by the Google host the request goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Accent {
    #[default]
    #[serde(rename = "com")]
    Us,
    #[serde(rename = "co.uk")]
    Uk,
    #[serde(rename = "ca")]
    Canada,
    #[serde(rename = "com.au")]
    Australia,
    #[serde(rename = "co.in")]
    India,
}

impl Accent {
    pub const ALL: [Accent; 5] = [
        Accent::Us,
        Accent::Uk,
        Accent::Canada,
        Accent::Australia,
        Accent::India,
    ];

    pub fn tld(&self) -> &'static str {
        match self {
            Accent::Us => "com",
            Accent::Uk => "co.uk",
            Accent::Canada => "ca",
            Accent::Australia => "com.au",
            Accent::India => "co.in",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Accent::Us => "US English",
            Accent::Uk => "UK English",
            Accent::Canada => "Canadian English",
            Accent::Australia => "Australian English",
            Accent::India => "Indian English",
        }
    }

    /// Accents only exist for English; every other language gets the default
    /// host no matter what was selected
    pub fn for_language(self, language: &LanguageCode) -> Accent {
        if language.is_english() {
            self
        } else {
            Accent::default()
        }
    }
}

impl std::fmt::Display for Accent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tld())
    }
}
