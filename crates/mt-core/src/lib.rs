//! Core logic for the mood tracker's day timeline.
//!
//! This crate contains the fundamental types and logic for:
//! - Time grid: mapping minutes of the day to vertical offsets and back
//! - Pointer drags: turning press/move/release into slot clicks or ranges
//! - Entry blocks: placing and summarizing activities, moods and symptoms
//! - Layers: per-category visibility filtering
//!
//! Nothing here persists data or talks to a display; a host feeds entries
//! and pointer events in and receives callbacks out.

pub mod block;
pub mod catalog;
mod category;
pub mod drag;
mod entry;
pub mod grid;
mod labels;
pub mod layers;
pub mod timeline;
mod types;

pub use block::{BlockPlacement, BlockSummary, EntryBlock};
pub use catalog::{Activity, ActivityCatalog, ActivityKind};
pub use category::{EntryCategory, UnknownCategory};
pub use drag::{DragSelection, DragState, PointerDragController, PointerTarget, SlotSelection};
pub use entry::{Emotion, EntryPayload, SymptomKind, SymptomRecord, TimelineEntry};
pub use grid::{ClockTime, ContainerGeometry};
pub use labels::{Locale, UnknownLocale};
pub use layers::{LayerConfig, Layers};
pub use timeline::{DayCounts, EmptyState, PointerEvent, Timeline, TimelineHost, TimelineView};
pub use types::{ActivityId, EntryId, Intensity, MoodLevel, Severity, ValidationError};
