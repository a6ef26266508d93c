//! Activity catalog used to resolve activity entries into names and icons.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::ActivityId;

/// Pre-compiled matcher for pictographic icons.
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Emoji_Presentation}|\p{Extended_Pictographic}").unwrap()
});

/// Broad grouping of activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Medication,
    Meditation,
    Exercise,
    Therapy,
    Sleep,
    Nutrition,
    Social,
}

impl ActivityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::Meditation => "meditation",
            Self::Exercise => "exercise",
            Self::Therapy => "therapy",
            Self::Sleep => "sleep",
            Self::Nutrition => "nutrition",
            Self::Social => "social",
        }
    }
}

/// Something a user can log doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub kind: ActivityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// User-created rather than predefined.
    #[serde(default)]
    pub custom: bool,
}

impl Activity {
    /// What to draw in the block's icon slot.
    ///
    /// Pictographic icons are shown as-is; anything else falls back to the
    /// uppercased initial of the activity kind.
    pub fn glyph(&self) -> String {
        match self.icon.as_deref() {
            Some(icon) if EMOJI_RE.is_match(icon) => icon.to_string(),
            _ => self
                .kind
                .as_str()
                .chars()
                .next()
                .map_or_else(|| "A".to_string(), |c| c.to_uppercase().collect()),
        }
    }
}

/// Lookup table of known activities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub const fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Predefined activities plus the sample custom ones.
    pub fn builtin() -> Self {
        let predefined = [
            ("act-med-1", "Prendre médicaments matin", ActivityKind::Medication),
            ("act-med-2", "Prendre médicaments soir", ActivityKind::Medication),
            ("act-medit-1", "Méditation guidée", ActivityKind::Meditation),
            ("act-medit-2", "Respiration profonde", ActivityKind::Meditation),
            ("act-medit-3", "Pleine conscience", ActivityKind::Meditation),
            ("act-ex-1", "Marche 30 min", ActivityKind::Exercise),
            ("act-ex-2", "Yoga", ActivityKind::Exercise),
            ("act-ex-3", "Course à pied", ActivityKind::Exercise),
            ("act-ex-4", "Étirements", ActivityKind::Exercise),
            ("act-ther-1", "Séance thérapie", ActivityKind::Therapy),
            ("act-ther-2", "Journaling thérapeutique", ActivityKind::Therapy),
            ("act-sleep-1", "8h de sommeil", ActivityKind::Sleep),
            ("act-sleep-2", "Routine coucher", ActivityKind::Sleep),
            ("act-sleep-3", "Sieste réparatrice", ActivityKind::Sleep),
            ("act-nutr-1", "Petit-déjeuner équilibré", ActivityKind::Nutrition),
            ("act-nutr-2", "Boire 2L d'eau", ActivityKind::Nutrition),
            ("act-nutr-3", "Repas sains", ActivityKind::Nutrition),
            ("act-soc-1", "Appeler un proche", ActivityKind::Social),
            ("act-soc-2", "Sortie entre amis", ActivityKind::Social),
            ("act-soc-3", "Activité sociale", ActivityKind::Social),
        ];
        let custom = [
            ("act-custom-1", "Musculation / Gym", ActivityKind::Exercise, "💪"),
            ("act-custom-2", "Lecture avant dormir", ActivityKind::Sleep, "📚"),
            ("act-custom-3", "Promenade avec le chien", ActivityKind::Exercise, "🐕"),
            ("act-custom-4", "Écouter musique relaxante", ActivityKind::Meditation, "🎵"),
        ];

        let activities = predefined
            .into_iter()
            .map(|(id, name, kind)| Activity {
                id: ActivityId::from_static(id),
                name: name.to_string(),
                kind,
                icon: None,
                custom: false,
            })
            .chain(custom.into_iter().map(|(id, name, kind, icon)| Activity {
                id: ActivityId::from_static(id),
                name: name.to_string(),
                kind,
                icon: Some(icon.to_string()),
                custom: true,
            }))
            .collect();

        Self { activities }
    }

    pub fn get(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    /// Adds activities, replacing any existing entry with the same ID.
    pub fn extend(&mut self, activities: impl IntoIterator<Item = Activity>) {
        for activity in activities {
            match self.activities.iter_mut().find(|a| a.id == activity.id) {
                Some(existing) => *existing = activity,
                None => self.activities.push(activity),
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
