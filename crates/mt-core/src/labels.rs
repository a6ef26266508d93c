//! User-facing strings in French and English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::EntryCategory;
use crate::entry::{Emotion, SymptomKind};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

/// Error type for unsupported locale strings.
#[derive(Debug, Clone, Error)]
#[error("unsupported locale: {0} (expected fr or en)")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" | "fr_fr" => Ok(Self::Fr),
            "en" | "en-us" | "en_us" | "en-gb" | "en_gb" => Ok(Self::En),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fr => write!(f, "fr"),
            Self::En => write!(f, "en"),
        }
    }
}

impl Locale {
    /// Layer label for a category.
    pub const fn category(self, category: EntryCategory) -> &'static str {
        match (self, category) {
            (Self::Fr, EntryCategory::Activity) => "Activités",
            (Self::Fr, EntryCategory::Mood) => "Humeur",
            (Self::Fr, EntryCategory::Symptom) => "Symptômes",
            (Self::En, EntryCategory::Activity) => "Activities",
            (Self::En, EntryCategory::Mood) => "Mood",
            (Self::En, EntryCategory::Symptom) => "Symptoms",
        }
    }

    pub const fn emotion(self, emotion: Emotion) -> &'static str {
        match self {
            Self::Fr => match emotion {
                Emotion::Joy => "Joie",
                Emotion::Calm => "Calme",
                Emotion::Energy => "Énergie",
                Emotion::Anxiety => "Anxiété",
                Emotion::Sadness => "Tristesse",
                Emotion::Anger => "Colère",
                Emotion::Neutral => "Neutre",
            },
            Self::En => match emotion {
                Emotion::Joy => "Joy",
                Emotion::Calm => "Calm",
                Emotion::Energy => "Energy",
                Emotion::Anxiety => "Anxiety",
                Emotion::Sadness => "Sadness",
                Emotion::Anger => "Anger",
                Emotion::Neutral => "Neutral",
            },
        }
    }

    pub const fn symptom(self, symptom: SymptomKind) -> &'static str {
        match self {
            Self::Fr => match symptom {
                SymptomKind::Headache => "Mal de tête",
                SymptomKind::Fatigue => "Fatigue",
                SymptomKind::MuscleTension => "Tension musculaire",
                SymptomKind::StomachAche => "Mal de ventre",
                SymptomKind::Insomnia => "Insomnie",
                SymptomKind::HeartRacing => "Palpitations",
                SymptomKind::Dizziness => "Vertiges",
                SymptomKind::BackPain => "Mal de dos",
                SymptomKind::ChestTightness => "Oppression",
                SymptomKind::Nausea => "Nausée",
            },
            Self::En => match symptom {
                SymptomKind::Headache => "Headache",
                SymptomKind::Fatigue => "Fatigue",
                SymptomKind::MuscleTension => "Muscle tension",
                SymptomKind::StomachAche => "Stomach ache",
                SymptomKind::Insomnia => "Insomnia",
                SymptomKind::HeartRacing => "Heart racing",
                SymptomKind::Dizziness => "Dizziness",
                SymptomKind::BackPain => "Back pain",
                SymptomKind::ChestTightness => "Chest tightness",
                SymptomKind::Nausea => "Nausea",
            },
        }
    }

    /// Title line of a mood block, e.g. `Humeur: 7/10`.
    pub fn mood_heading(self, level: impl fmt::Display) -> String {
        match self {
            Self::Fr => format!("Humeur: {level}"),
            Self::En => format!("Mood: {level}"),
        }
    }

    /// Title line of a symptom block listing several symptoms.
    pub fn symptom_count(self, count: usize) -> String {
        match (self, count) {
            (Self::Fr, 0 | 1) => format!("{count} symptôme"),
            (Self::Fr, _) => format!("{count} symptômes"),
            (Self::En, 1) => format!("{count} symptom"),
            (Self::En, _) => format!("{count} symptoms"),
        }
    }

    pub fn severity(self, severity: impl fmt::Display) -> String {
        match self {
            Self::Fr => format!("Sévérité: {severity}"),
            Self::En => format!("Severity: {severity}"),
        }
    }

    /// Header count of the layer panel, e.g. `2/3 visibles`.
    pub fn visible_summary(self, visible: usize, total: usize) -> String {
        match self {
            Self::Fr if visible > 1 => format!("{visible}/{total} visibles"),
            Self::Fr | Self::En => format!("{visible}/{total} visible"),
        }
    }

    pub const fn layers_heading(self) -> &'static str {
        match self {
            Self::Fr => "Affichage",
            Self::En => "Display",
        }
    }

    pub const fn stats_heading(self) -> &'static str {
        match self {
            Self::Fr => "Statistiques du jour",
            Self::En => "Today's stats",
        }
    }

    /// Empty timeline: title and hint.
    pub const fn no_entries(self) -> (&'static str, &'static str) {
        match self {
            Self::Fr => (
                "Cliquez sur une heure pour commencer",
                "Ou cliquez + glissez pour créer une entrée avec durée",
            ),
            Self::En => (
                "Click an hour to get started",
                "Or click and drag to create an entry with a duration",
            ),
        }
    }

    /// Every layer switched off.
    pub const fn no_visible_layers(self) -> &'static str {
        match self {
            Self::Fr => "Activez au moins un type pour voir des données",
            Self::En => "Enable at least one type to see data",
        }
    }
}
