use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::format::{format_tooltip_date, format_value};
use crate::core::{Bounds, PlottedPoint, TooltipSize};

/// Places a tooltip panel next to `(x, y)` using the midpoint rule.
///
/// Points right of the horizontal midpoint get the panel to their left;
/// points on or below the vertical midpoint get it above them. This does not
/// detect real edge collisions.
#[must_use]
pub fn place_tooltip(x: f64, y: f64, size: TooltipSize, bounds: Bounds) -> (f64, f64) {
    let safe_x = if x > bounds.width / 2.0 {
        x - size.width
    } else {
        x
    };
    let safe_y = if y < bounds.height / 2.0 {
        y
    } else {
        y - size.height
    };
    (safe_x, safe_y)
}

/// The single open selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub index: usize,
    /// Data revision the selection was taken from.
    pub revision: u64,
    pub date: NaiveDate,
    pub values: IndexMap<String, f64>,
    pub point_x: f64,
    pub point_y: f64,
    /// Clamped top-left corner of the panel.
    pub x: f64,
    pub y: f64,
    pub size: TooltipSize,
}

impl TooltipState {
    #[must_use]
    pub fn content(&self) -> TooltipContent {
        let mut lines = Vec::with_capacity(self.values.len());
        for (field, value) in &self.values {
            lines.push(format!("{field}: {}", format_value(*value)));
        }
        TooltipContent {
            title: format_tooltip_date(self.date),
            lines,
        }
    }
}

/// Text rendered inside the tooltip panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum TooltipPhase {
    #[default]
    Closed,
    Open(TooltipState),
}

/// Closed/Open state machine. `select` and `close` are the only mutators;
/// a new selection overwrites the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipController {
    size: TooltipSize,
    bounds: Bounds,
    revision: u64,
    phase: TooltipPhase,
}

impl TooltipController {
    #[must_use]
    pub fn new(size: TooltipSize, bounds: Bounds) -> Self {
        Self {
            size,
            bounds,
            revision: 0,
            phase: TooltipPhase::Closed,
        }
    }

    #[must_use]
    pub fn size(&self) -> TooltipSize {
        self.size
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Updates the rendered bounding box used by subsequent selections.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn phase(&self) -> &TooltipPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, TooltipPhase::Open(_))
    }

    #[must_use]
    pub fn state(&self) -> Option<&TooltipState> {
        match &self.phase {
            TooltipPhase::Open(state) => Some(state),
            TooltipPhase::Closed => None,
        }
    }

    /// Opens (or replaces) the tooltip for `point`.
    pub fn select(&mut self, point: &PlottedPoint) {
        let (point_x, point_y) = point.anchor();
        let (x, y) = place_tooltip(point_x, point_y, self.size, self.bounds);
        let values = point
            .point
            .values
            .fields()
            .into_iter()
            .map(|(field, value)| (field.name().to_owned(), value))
            .collect();

        trace!(index = point.index, x, y, "tooltip open");
        self.phase = TooltipPhase::Open(TooltipState {
            index: point.index,
            revision: self.revision,
            date: point.point.date,
            values,
            point_x,
            point_y,
            x,
            y,
            size: self.size,
        });
    }

    /// Closes the tooltip. Closing an already closed tooltip is a no-op.
    pub fn close(&mut self) {
        if self.is_open() {
            trace!("tooltip close");
        }
        self.phase = TooltipPhase::Closed;
    }

    /// Moves to data revision `revision`, dropping a selection taken from an
    /// older one.
    pub fn sync_revision(&mut self, revision: u64) {
        if revision == self.revision {
            return;
        }
        if let TooltipPhase::Open(state) = &self.phase {
            warn!(
                index = state.index,
                stale_revision = state.revision,
                revision,
                "dropping stale tooltip selection"
            );
            self.phase = TooltipPhase::Closed;
        }
        self.revision = revision;
    }
}
