//! The assembled day timeline: backdrop, filtered blocks, pointer routing.

use serde::{Deserialize, Serialize};

use crate::block::{self, EntryBlock};
use crate::catalog::ActivityCatalog;
use crate::category::EntryCategory;
use crate::drag::{PointerDragController, PointerTarget, SelectionPreview, SlotSelection};
use crate::entry::TimelineEntry;
use crate::grid::{ClockTime, ContainerGeometry, HourLine, hour_lines};
use crate::labels::Locale;
use crate::layers::Layers;

/// Callbacks through which the core proposes changes to the host.
///
/// The core never creates, edits or stores entries itself.
pub trait TimelineHost {
    /// A press on empty space with little or no movement.
    fn on_time_slot_click(&mut self, at: ClockTime);

    /// A press dragged over at least the minimum span.
    fn on_time_slot_drag(&mut self, start: ClockTime, duration_minutes: u32);

    /// A press on an existing entry's block.
    fn on_entry_click(&mut self, entry: &TimelineEntry);
}

/// Why the entry area has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Layers are visible but the day has no matching entries.
    NoEntries,
    /// Every layer is switched off.
    NoVisibleLayers,
}

impl EmptyState {
    /// Title and optional hint to display.
    pub const fn message(self, locale: Locale) -> (&'static str, Option<&'static str>) {
        match self {
            Self::NoEntries => {
                let (title, hint) = locale.no_entries();
                (title, Some(hint))
            }
            Self::NoVisibleLayers => (locale.no_visible_layers(), None),
        }
    }
}

/// Entry counts for the displayed day, before layer filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayCounts {
    pub activity: usize,
    pub mood: usize,
    pub symptom: usize,
    pub total: usize,
}

impl DayCounts {
    pub fn tally(entries: &[TimelineEntry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            match entry.category() {
                EntryCategory::Activity => counts.activity += 1,
                EntryCategory::Mood => counts.mood += 1,
                EntryCategory::Symptom => counts.symptom += 1,
            }
            counts.total += 1;
        }
        counts
    }

    pub const fn get(&self, category: EntryCategory) -> usize {
        match category {
            EntryCategory::Activity => self.activity,
            EntryCategory::Mood => self.mood,
            EntryCategory::Symptom => self.symptom,
        }
    }
}

/// Everything needed to draw one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView<'a> {
    pub hours: Vec<HourLine>,
    /// Visible entries in input order; later blocks draw over earlier ones.
    pub blocks: Vec<EntryBlock<'a>>,
    pub empty_state: Option<EmptyState>,
    pub counts: DayCounts,
}

impl<'a> TimelineView<'a> {
    /// Builds the view for a day's entries, already filtered to that day by the host.
    pub fn build(
        entries: &'a [TimelineEntry],
        layers: &Layers,
        catalog: &ActivityCatalog,
        locale: Locale,
    ) -> Self {
        let blocks: Vec<EntryBlock<'a>> = layers
            .filter(entries)
            .into_iter()
            .map(|entry| block::render(entry, catalog, locale))
            .collect();

        let empty_state = if layers.all_hidden() {
            Some(EmptyState::NoVisibleLayers)
        } else if blocks.is_empty() {
            Some(EmptyState::NoEntries)
        } else {
            None
        };

        Self {
            hours: hour_lines(),
            blocks,
            empty_state,
            counts: DayCounts::tally(entries),
        }
    }

    /// Topmost block under a day offset.
    ///
    /// Offsets outside `[0, 1)` lie outside the day column and never hit,
    /// even where a late block's height runs past midnight.
    pub fn hit_test(&self, offset: f64) -> Option<&EntryBlock<'a>> {
        if !(0.0..1.0).contains(&offset) {
            return None;
        }
        self.blocks
            .iter()
            .rev()
            .find(|block| block.placement.contains(offset))
    }
}

/// A raw pointer event over the timeline column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        y: f64,
    },
    Move {
        y: f64,
    },
    Up {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<f64>,
    },
    Leave,
}

/// One mounted timeline: a pointer controller plus the routing around it.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    controller: PointerDragController,
}

impl Timeline {
    pub const fn new(geometry: ContainerGeometry) -> Self {
        Self {
            controller: PointerDragController::new(geometry),
        }
    }

    pub const fn controller(&self) -> &PointerDragController {
        &self.controller
    }

    pub const fn set_geometry(&mut self, geometry: ContainerGeometry) {
        self.controller.set_geometry(geometry);
    }

    /// The drag overlay, if a drag is in progress.
    pub fn selection_preview(&self) -> Option<SelectionPreview> {
        self.controller.selection_preview()
    }

    /// The "click an hour" hint is hidden while dragging; the no-layers
    /// guidance is not.
    pub fn empty_state(&self, view: &TimelineView<'_>) -> Option<EmptyState> {
        match view.empty_state {
            Some(EmptyState::NoEntries) if self.controller.is_dragging() => None,
            other => other,
        }
    }

    /// Routes one pointer event, invoking host callbacks synchronously.
    pub fn handle<H: TimelineHost>(
        &mut self,
        event: PointerEvent,
        view: &TimelineView<'_>,
        host: &mut H,
    ) {
        match event {
            PointerEvent::Down { y } => {
                let hit = self
                    .controller
                    .geometry()
                    .offset_of(y)
                    .and_then(|offset| view.hit_test(offset));
                match hit {
                    Some(block) => {
                        self.controller.pointer_down(PointerTarget::EntryBlock, y);
                        tracing::debug!(entry_id = %block.id, "entry block clicked");
                        host.on_entry_click(block.entry);
                    }
                    None => self.controller.pointer_down(PointerTarget::Background, y),
                }
            }
            PointerEvent::Move { y } => self.controller.pointer_move(y),
            PointerEvent::Up { y } => match self.controller.pointer_up(y) {
                Some(SlotSelection::Click { at }) => host.on_time_slot_click(at),
                Some(SlotSelection::Drag { start, duration }) => {
                    host.on_time_slot_drag(start, duration);
                }
                None => {}
            },
            PointerEvent::Leave => self.controller.pointer_leave(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDateTime;

    use crate::drag::DragState;
    use crate::entry::EntryPayload;
    use crate::types::{ActivityId, EntryId, MoodLevel};

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl TimelineHost for Recorder {
        fn on_time_slot_click(&mut self, at: ClockTime) {
            self.calls.push(format!("click {at}"));
        }

        fn on_time_slot_drag(&mut self, start: ClockTime, duration_minutes: u32) {
            self.calls.push(format!("drag {start} {duration_minutes}"));
        }

        fn on_entry_click(&mut self, entry: &TimelineEntry) {
            self.calls.push(format!("edit {}", entry.id));
        }
    }

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn day() -> Vec<TimelineEntry> {
        vec![
            TimelineEntry::new(
                EntryId::new("yoga").unwrap(),
                at("2025-12-12 09:30"),
                EntryPayload::Activity {
                    activity_id: ActivityId::new("act-ex-2").unwrap(),
                    intensity: None,
                    note: None,
                },
            )
            .with_duration(45)
            .unwrap(),
            TimelineEntry::new(
                EntryId::new("mood").unwrap(),
                at("2025-12-12 09:45"),
                EntryPayload::Mood {
                    level: MoodLevel::new(8).unwrap(),
                    emotions: Vec::new(),
                    note: None,
                },
            ),
        ]
    }

    fn view<'a>(entries: &'a [TimelineEntry], layers: &Layers) -> TimelineView<'a> {
        TimelineView::build(entries, layers, &ActivityCatalog::builtin(), Locale::Fr)
    }

    #[test]
    fn build_keeps_input_order_and_counts() {
        let entries = day();
        let v = view(&entries, &Layers::default());
        let ids: Vec<&str> = v.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["yoga", "mood"]);
        assert_eq!(v.hours.len(), 24);
        assert_eq!(v.empty_state, None);
        assert_eq!(
            v.counts,
            DayCounts {
                activity: 1,
                mood: 1,
                symptom: 0,
                total: 2
            }
        );
    }

    #[test]
    fn counts_ignore_layer_filter() {
        let entries = day();
        let v = view(&entries, &Layers::default().toggled(EntryCategory::Mood));
        assert_eq!(v.blocks.len(), 1);
        assert_eq!(v.counts.get(EntryCategory::Mood), 1);
    }

    #[test]
    fn empty_day_shows_hint() {
        let v = view(&[], &Layers::default());
        assert_eq!(v.empty_state, Some(EmptyState::NoEntries));
        let (title, hint) = EmptyState::NoEntries.message(Locale::Fr);
        assert_eq!(title, "Cliquez sur une heure pour commencer");
        assert!(hint.is_some());
    }

    #[test]
    fn all_layers_hidden_shows_guidance() {
        let entries = day();
        let layers = Layers::default()
            .with_visibility(EntryCategory::Activity, false)
            .with_visibility(EntryCategory::Mood, false)
            .with_visibility(EntryCategory::Symptom, false);
        let v = view(&entries, &layers);
        assert!(v.blocks.is_empty());
        assert_eq!(v.empty_state, Some(EmptyState::NoVisibleLayers));
    }

    #[test]
    fn build_is_idempotent() {
        let entries = day();
        let layers = Layers::default();
        assert_eq!(view(&entries, &layers), view(&entries, &layers));
    }

    #[test]
    fn hit_test_prefers_block_drawn_last() {
        let entries = day();
        let v = view(&entries, &Layers::default());
        // 09:50 lies inside both yoga (09:30-10:15) and mood (09:45-10:15).
        let hit = v.hit_test(590.0 / 1440.0).unwrap();
        assert_eq!(hit.id.as_str(), "mood");
        let hit = v.hit_test(575.0 / 1440.0).unwrap();
        assert_eq!(hit.id.as_str(), "yoga");
        assert!(v.hit_test(0.0).is_none());
    }

    #[test]
    fn press_on_block_edits_and_never_drags() {
        let entries = day();
        let v = view(&entries, &Layers::default());
        let mut timeline = Timeline::default();
        let mut host = Recorder::default();

        timeline.handle(PointerEvent::Down { y: 575.0 }, &v, &mut host);
        assert_eq!(timeline.controller().state(), DragState::Idle);
        timeline.handle(PointerEvent::Move { y: 700.0 }, &v, &mut host);
        timeline.handle(PointerEvent::Up { y: Some(700.0) }, &v, &mut host);

        assert_eq!(host.calls, vec!["edit yoga"]);
    }

    #[test]
    fn block_press_after_lost_release_only_edits() {
        let entries = day();
        let v = view(&entries, &Layers::default());
        let mut timeline = Timeline::default();
        let mut host = Recorder::default();

        timeline.handle(PointerEvent::Down { y: 300.0 }, &v, &mut host);
        timeline.handle(PointerEvent::Down { y: 575.0 }, &v, &mut host);
        assert_eq!(timeline.controller().state(), DragState::Idle);
        timeline.handle(PointerEvent::Up { y: Some(575.0) }, &v, &mut host);

        assert_eq!(host.calls, vec!["edit yoga"]);
    }

    #[test]
    fn press_below_column_misses_block_past_midnight() {
        let late = vec![TimelineEntry::new(
            EntryId::new("late").unwrap(),
            at("2025-12-12 23:45"),
            EntryPayload::Mood {
                level: MoodLevel::new(4).unwrap(),
                emotions: Vec::new(),
                note: None,
            },
        )];
        let v = view(&late, &Layers::default());
        // Block spans 23:45 to 00:15 of the next day.
        assert!(v.hit_test(1430.0 / 1440.0).is_some());
        assert!(v.hit_test(1445.0 / 1440.0).is_none());
        assert!(v.hit_test(-0.01).is_none());

        let mut timeline = Timeline::default();
        let mut host = Recorder::default();
        timeline.handle(PointerEvent::Down { y: 1445.0 }, &v, &mut host);
        timeline.handle(PointerEvent::Up { y: None }, &v, &mut host);
        assert_eq!(host.calls, vec!["click 23:59"]);
    }

    #[test]
    fn hidden_block_does_not_intercept_press() {
        let entries = day();
        let v = view(&entries, &Layers::default().toggled(EntryCategory::Activity));
        let mut timeline = Timeline::default();
        let mut host = Recorder::default();

        timeline.handle(PointerEvent::Down { y: 575.0 }, &v, &mut host);
        timeline.handle(PointerEvent::Up { y: None }, &v, &mut host);
        assert_eq!(host.calls, vec!["click 09:30"]);
    }

    #[test]
    fn drag_and_click_reach_host() {
        let v = view(&[], &Layers::default());
        let mut timeline = Timeline::default();
        let mut host = Recorder::default();

        for event in [
            PointerEvent::Down { y: 100.0 },
            PointerEvent::Up { y: Some(110.0) },
            PointerEvent::Down { y: 840.0 },
            PointerEvent::Move { y: 900.0 },
            PointerEvent::Up { y: Some(960.0) },
        ] {
            timeline.handle(event, &v, &mut host);
        }
        assert_eq!(host.calls, vec!["click 01:45", "drag 14:00 120"]);
    }

    #[test]
    fn leave_discards_without_callbacks() {
        let v = view(&[], &Layers::default());
        let mut timeline = Timeline::default();
        let mut host = Recorder::default();

        timeline.handle(PointerEvent::Down { y: 300.0 }, &v, &mut host);
        timeline.handle(PointerEvent::Move { y: 340.0 }, &v, &mut host);
        timeline.handle(PointerEvent::Leave, &v, &mut host);
        timeline.handle(PointerEvent::Up { y: Some(340.0) }, &v, &mut host);
        assert!(host.calls.is_empty());
    }

    #[test]
    fn hint_hidden_while_dragging() {
        let v = view(&[], &Layers::default());
        let mut timeline = Timeline::default();
        let mut host = Recorder::default();

        assert_eq!(timeline.empty_state(&v), Some(EmptyState::NoEntries));
        timeline.handle(PointerEvent::Down { y: 300.0 }, &v, &mut host);
        assert_eq!(timeline.empty_state(&v), None);
        assert!(timeline.selection_preview().is_some());
    }

    #[test]
    fn pointer_events_parse_from_json_lines() {
        let down: PointerEvent = serde_json::from_str(r#"{"event":"down","y":12.5}"#).unwrap();
        assert_eq!(down, PointerEvent::Down { y: 12.5 });
        let up: PointerEvent = serde_json::from_str(r#"{"event":"up"}"#).unwrap();
        assert_eq!(up, PointerEvent::Up { y: None });
        let leave: PointerEvent = serde_json::from_str(r#"{"event":"leave"}"#).unwrap();
        assert_eq!(leave, PointerEvent::Leave);
    }
}
