//! Pure width/position arithmetic for column layouts.
//!
//! The geometry engine owns the ordered width list and the derived handle
//! positions. All mutation goes through [`Layout::apply_delta`], which
//! either accepts a (possibly clamped) delta or rejects it outright, so
//! the total-width invariant can never be broken by a caller.

/// How an accepted delta is balanced against the rest of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizePolicy {
    /// Growing a column shrinks its right neighbor by the same amount;
    /// total table width is unchanged.
    #[default]
    Squeeze,
    /// Growing a column leaves neighbors alone and grows the table,
    /// shifting every handle to the right of the dragged one.
    ExpandTable,
}

/// Result of applying a resize delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The delta (possibly clamped against a floor) was applied.
    Applied {
        /// New width of the dragged column.
        width: i32,
        /// The delta that was actually applied after clamping.
        delta: i32,
    },
    /// The delta would violate a constraint and nothing was mutated.
    Rejected,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

/// Round a fractional pixel measurement up to a whole pixel.
///
/// Measurements cross this boundary exactly once; everything past it is
/// integer arithmetic, so repeated gestures cannot accumulate drift.
pub fn px_ceil(value: f64) -> i32 {
    value.ceil() as i32
}

/// Ordered column widths plus derived handle positions.
///
/// Handle `i` sits flush against the right edge of column `i`; the last
/// handle is the table's right edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    widths: Vec<i32>,
    lefts: Vec<i32>,
    min_width: i32,
}

impl Layout {
    /// Lay out handles from header widths, cumulative left-to-right.
    ///
    /// Widths below the floor are raised to it.
    pub fn compute(header_widths: &[i32], min_width: i32) -> Self {
        let widths: Vec<i32> = header_widths.iter().map(|w| (*w).max(min_width)).collect();
        let mut layout = Self {
            widths,
            lefts: Vec::new(),
            min_width,
        };
        layout.recompute_lefts();
        layout
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn min_width(&self) -> i32 {
        self.min_width
    }

    pub fn widths(&self) -> &[i32] {
        &self.widths
    }

    pub fn width(&self, column: usize) -> i32 {
        self.widths[column]
    }

    /// Left position of the handle bound to `column`.
    pub fn left(&self, column: usize) -> i32 {
        self.lefts[column]
    }

    pub fn lefts(&self) -> &[i32] {
        &self.lefts
    }

    /// Sum of all column widths; the table width excluding any gutter.
    pub fn total_width(&self) -> i32 {
        self.widths.iter().sum()
    }

    /// Apply a pixel delta to `column` under the given policy.
    ///
    /// A shrink past the floor clamps to the floor (partial acceptance);
    /// a shrink when the column is already at the floor is rejected with
    /// no mutation. Under [`ResizePolicy::Squeeze`] a non-last column may
    /// grow only until its right neighbor reaches the floor. The last
    /// column's handle is the table edge, so its growth is unbounded and
    /// adjusts the table width instead of a neighbor.
    pub fn apply_delta(&mut self, column: usize, delta: i32, policy: ResizePolicy) -> Outcome {
        if column >= self.widths.len() || delta == 0 {
            return Outcome::Rejected;
        }

        let width = self.widths[column];
        let last = column == self.widths.len() - 1;

        let accepted = if delta < 0 {
            // Shrink: clamp at the floor regardless of policy.
            let clamped = (width + delta).max(self.min_width);
            clamped - width
        } else if policy == ResizePolicy::Squeeze && !last {
            // Grow: limited by how far the next handle can be pushed
            // before the neighbor hits the floor.
            let room = self.widths[column + 1] - self.min_width;
            delta.min(room)
        } else {
            delta
        };

        if accepted == 0 {
            return Outcome::Rejected;
        }

        self.widths[column] += accepted;
        if policy == ResizePolicy::Squeeze && !last {
            self.widths[column + 1] -= accepted;
        }
        self.recompute_lefts();

        debug_assert!(self.widths.iter().all(|w| *w >= self.min_width));

        Outcome::Applied {
            width: self.widths[column],
            delta: accepted,
        }
    }

    fn recompute_lefts(&mut self) {
        self.lefts.clear();
        let mut left = 0;
        for width in &self.widths {
            left += width;
            self.lefts.push(left);
        }
    }
}
