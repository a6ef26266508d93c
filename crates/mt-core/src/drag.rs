//! Pointer drag state machine.
//!
//! Turns a down/move/up sequence over empty timeline space into either a
//! click on a time slot or a dragged time range. A press that lands on an
//! existing entry block never starts a drag: that interaction belongs to the
//! block (editing), and creation and editing are exclusive per press.
//!
//! # States
//!
//! ```text
//! Idle --down(background)--> Dragging --move--> Dragging
//!                               |--up--> Idle   (emits Click or Drag)
//!                               |--leave--> Idle (emits nothing)
//! ```
//!
//! Every transition is synchronous. Bad geometry or coordinates abandon the
//! interaction silently; nothing here returns an error.

use serde::Serialize;

use crate::grid::{ClockTime, ContainerGeometry, minutes_to_offset, span_to_fraction};

/// Shortest span, in snapped minutes, that counts as a drag rather than a click.
pub const MIN_DRAG_MINUTES: u32 = 15;

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty timeline space or the hour grid.
    Background,
    /// An existing entry block.
    EntryBlock,
}

/// The in-progress selection while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragSelection {
    /// Snapped position of the press.
    pub anchor: ClockTime,
    /// Snapped position of the latest move.
    pub cursor: ClockTime,
}

impl DragSelection {
    /// Distance between anchor and cursor in minutes.
    pub fn span(&self) -> u32 {
        self.anchor.minutes().abs_diff(self.cursor.minutes())
    }

    /// Earlier of anchor and cursor; drags can go upward.
    pub fn start(&self) -> ClockTime {
        self.anchor.min(self.cursor)
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSelection),
}

/// Outcome of a completed press over empty space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotSelection {
    /// Little or no movement: log something at this time.
    Click { at: ClockTime },
    /// A range: log something starting here, lasting `duration` minutes.
    Drag { start: ClockTime, duration: u32 },
}

/// Overlay drawn over the selected range while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionPreview {
    pub top: f64,
    pub height: f64,
    pub duration_minutes: u32,
}

/// Per-mount pointer controller for one timeline column.
#[derive(Debug, Clone)]
pub struct PointerDragController {
    geometry: ContainerGeometry,
    state: DragState,
}

impl PointerDragController {
    pub const fn new(geometry: ContainerGeometry) -> Self {
        Self {
            geometry,
            state: DragState::Idle,
        }
    }

    pub const fn geometry(&self) -> ContainerGeometry {
        self.geometry
    }

    /// Updates the column geometry, e.g. after a resize or scroll.
    pub const fn set_geometry(&mut self, geometry: ContainerGeometry) {
        self.geometry = geometry;
    }

    pub const fn state(&self) -> DragState {
        self.state
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Starts a drag unless the press landed on a block or cannot be mapped.
    ///
    /// Either way any selection left over from an earlier press is dropped,
    /// so a press on a block always leaves the controller idle.
    pub fn pointer_down(&mut self, target: PointerTarget, client_y: f64) {
        if target == PointerTarget::EntryBlock {
            tracing::trace!("pointer down on entry block, not starting drag");
            self.abandon_stale();
            return;
        }
        let Some(minutes) = self.geometry.snapped_minutes(client_y) else {
            tracing::debug!(client_y, "pointer down ignored: position not mappable");
            self.abandon_stale();
            return;
        };
        let anchor = ClockTime::from_minutes(minutes);
        tracing::debug!(%anchor, "drag started");
        self.state = DragState::Dragging(DragSelection {
            anchor,
            cursor: anchor,
        });
    }

    /// Moves the cursor of an active drag. Ignored while idle.
    pub fn pointer_move(&mut self, client_y: f64) {
        let DragState::Dragging(selection) = &mut self.state else {
            return;
        };
        match self.geometry.snapped_minutes(client_y) {
            Some(minutes) => {
                selection.cursor = ClockTime::from_minutes(minutes);
                tracing::trace!(cursor = %selection.cursor, "drag moved");
            }
            None => self.abandon("position not mappable"),
        }
    }

    /// Finishes an active drag.
    ///
    /// `client_y` is the release position when the host has one; `None`
    /// keeps the cursor from the last move. Returns nothing while idle.
    pub fn pointer_up(&mut self, client_y: Option<f64>) -> Option<SlotSelection> {
        let DragState::Dragging(mut selection) = self.state else {
            return None;
        };
        self.state = DragState::Idle;

        if let Some(y) = client_y {
            let Some(minutes) = self.geometry.snapped_minutes(y) else {
                tracing::debug!("drag abandoned: release position not mappable");
                return None;
            };
            selection.cursor = ClockTime::from_minutes(minutes);
        }

        let span = selection.span();
        let result = if span < MIN_DRAG_MINUTES {
            SlotSelection::Click {
                at: selection.anchor,
            }
        } else {
            SlotSelection::Drag {
                start: selection.start(),
                duration: span,
            }
        };
        tracing::debug!(?result, "drag resolved");
        Some(result)
    }

    /// The pointer left the column: drop any drag without emitting anything.
    pub fn pointer_leave(&mut self) {
        if self.is_dragging() {
            self.abandon("pointer left container");
        }
    }

    /// Overlay for the range selected so far, while dragging.
    pub fn selection_preview(&self) -> Option<SelectionPreview> {
        let DragState::Dragging(selection) = self.state else {
            return None;
        };
        let span = selection.span();
        Some(SelectionPreview {
            top: minutes_to_offset(i64::from(selection.start().minutes())),
            height: span_to_fraction(span),
            duration_minutes: span,
        })
    }

    fn abandon_stale(&mut self) {
        if self.is_dragging() {
            self.abandon("new press before release");
        }
    }

    fn abandon(&mut self, reason: &str) {
        tracing::debug!(reason, "drag abandoned");
        self.state = DragState::Idle;
    }
}

impl Default for PointerDragController {
    fn default() -> Self {
        Self::new(ContainerGeometry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One unit per minute, so pointer positions read as minutes.
    fn controller() -> PointerDragController {
        PointerDragController::new(ContainerGeometry::one_unit_per_minute())
    }

    fn time(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn starts_idle() {
        let c = controller();
        assert_eq!(c.state(), DragState::Idle);
        assert!(c.selection_preview().is_none());
    }

    #[test]
    fn down_records_snapped_anchor() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 100.0);
        let DragState::Dragging(selection) = c.state() else {
            panic!("expected dragging");
        };
        assert_eq!(selection.anchor.minutes(), 105);
        assert_eq!(selection.cursor, selection.anchor);
    }

    #[test]
    fn short_movement_emits_click_at_anchor() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 100.0);
        c.pointer_move(110.0);
        let result = c.pointer_up(Some(110.0));
        assert_eq!(result, Some(SlotSelection::Click { at: time("01:45") }));
        assert!(!c.is_dragging());
    }

    #[test]
    fn click_without_movement() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 540.0);
        assert_eq!(
            c.pointer_up(None),
            Some(SlotSelection::Click { at: time("09:00") })
        );
    }

    #[test]
    fn span_at_threshold_emits_drag() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 100.0);
        c.pointer_move(120.0);
        let result = c.pointer_up(Some(120.0));
        assert_eq!(
            result,
            Some(SlotSelection::Drag {
                start: time("01:45"),
                duration: 15,
            })
        );
    }

    #[test]
    fn upward_drag_starts_at_cursor() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 600.0);
        c.pointer_move(540.0);
        assert_eq!(
            c.pointer_up(None),
            Some(SlotSelection::Drag {
                start: time("09:00"),
                duration: 60,
            })
        );
    }

    #[test]
    fn up_uses_last_move_when_release_position_missing() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 480.0);
        c.pointer_move(570.0);
        assert_eq!(
            c.pointer_up(None),
            Some(SlotSelection::Drag {
                start: time("08:00"),
                duration: 90,
            })
        );
    }

    #[test]
    fn leave_discards_drag() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 300.0);
        c.pointer_move(340.0);
        c.pointer_leave();
        assert_eq!(c.state(), DragState::Idle);
        assert_eq!(c.pointer_up(Some(340.0)), None);
    }

    #[test]
    fn down_on_block_stays_idle() {
        let mut c = controller();
        c.pointer_down(PointerTarget::EntryBlock, 300.0);
        assert_eq!(c.state(), DragState::Idle);
        c.pointer_move(400.0);
        assert_eq!(c.pointer_up(Some(400.0)), None);
    }

    #[test]
    fn press_on_block_drops_unreleased_drag() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 300.0);
        // Release never arrived; the next press lands on a block.
        c.pointer_down(PointerTarget::EntryBlock, 575.0);
        assert_eq!(c.state(), DragState::Idle);
        assert_eq!(c.pointer_up(Some(575.0)), None);
    }

    #[test]
    fn unmappable_press_drops_unreleased_drag() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 300.0);
        c.pointer_down(PointerTarget::Background, f64::NAN);
        assert_eq!(c.state(), DragState::Idle);
    }

    #[test]
    fn bad_geometry_ignores_press() {
        let mut c = PointerDragController::new(ContainerGeometry::new(0.0, 0.0));
        c.pointer_down(PointerTarget::Background, 300.0);
        assert_eq!(c.state(), DragState::Idle);
        assert_eq!(c.pointer_up(Some(400.0)), None);
    }

    #[test]
    fn geometry_lost_mid_drag_abandons() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 300.0);
        c.set_geometry(ContainerGeometry::new(0.0, 0.0));
        c.pointer_move(400.0);
        assert_eq!(c.state(), DragState::Idle);
        assert_eq!(c.pointer_up(None), None);
    }

    #[test]
    fn unmappable_release_emits_nothing() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 300.0);
        c.pointer_move(400.0);
        assert_eq!(c.pointer_up(Some(f64::NAN)), None);
        assert_eq!(c.state(), DragState::Idle);
    }

    #[test]
    fn positions_past_the_column_clamp() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 1380.0);
        c.pointer_move(5000.0);
        assert_eq!(
            c.pointer_up(None),
            Some(SlotSelection::Drag {
                start: time("23:00"),
                duration: 59,
            })
        );
    }

    #[test]
    fn preview_tracks_selection() {
        let mut c = controller();
        c.pointer_down(PointerTarget::Background, 600.0);
        c.pointer_move(540.0);
        let preview = c.selection_preview().unwrap();
        assert_eq!(preview.duration_minutes, 60);
        assert!((preview.top - 540.0 / 1440.0).abs() < f64::EPSILON);
        assert!((preview.height - 60.0 / 1440.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scaled_geometry_maps_to_minutes() {
        // 720px column starting at y=100: half a pixel per minute.
        let mut c = PointerDragController::new(ContainerGeometry::new(100.0, 720.0));
        c.pointer_down(PointerTarget::Background, 100.0 + 270.0);
        c.pointer_move(100.0 + 300.0);
        assert_eq!(
            c.pointer_up(None),
            Some(SlotSelection::Drag {
                start: time("09:00"),
                duration: 60,
            })
        );
    }
}
