use colresize::{px_ceil, Layout, Outcome, ResizePolicy};

const MIN: i32 = 20;

fn layout(widths: &[i32]) -> Layout {
    Layout::compute(widths, MIN)
}

// ============================================================================
// Initial layout
// ============================================================================

#[test]
fn test_compute_places_handles_cumulatively() {
    let layout = layout(&[100, 150, 200]);

    assert_eq!(layout.widths(), &[100, 150, 200]);
    assert_eq!(layout.lefts(), &[100, 250, 450]);
    assert_eq!(layout.total_width(), 450);
}

#[test]
fn test_compute_raises_widths_to_floor() {
    let layout = layout(&[10, 30]);

    assert_eq!(layout.widths(), &[20, 30]);
    assert_eq!(layout.lefts(), &[20, 50]);
}

#[test]
fn test_compute_empty() {
    let layout = layout(&[]);

    assert!(layout.is_empty());
    assert_eq!(layout.total_width(), 0);
}

#[test]
fn test_handle_positions_strictly_increase() {
    let layout = layout(&[100, 20, 45, 300]);

    for pair in layout.lefts().windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

// ============================================================================
// Squeeze policy
// ============================================================================

#[test]
fn test_squeeze_grow_shrinks_neighbor() {
    let mut layout = layout(&[100, 150, 200]);

    let outcome = layout.apply_delta(0, 30, ResizePolicy::Squeeze);

    assert_eq!(outcome, Outcome::Applied { width: 130, delta: 30 });
    assert_eq!(layout.widths(), &[130, 120, 200]);
    assert_eq!(layout.total_width(), 450);
}

#[test]
fn test_squeeze_shrink_grows_neighbor() {
    let mut layout = layout(&[100, 150, 200]);

    let outcome = layout.apply_delta(0, -30, ResizePolicy::Squeeze);

    assert_eq!(outcome, Outcome::Applied { width: 70, delta: -30 });
    assert_eq!(layout.widths(), &[70, 180, 200]);
    assert_eq!(layout.total_width(), 450);
}

#[test]
fn test_squeeze_grow_clamps_at_neighbor_floor() {
    let mut layout = layout(&[100, 150, 200]);

    // Neighbor can give up at most 130 before hitting the floor.
    let outcome = layout.apply_delta(0, 500, ResizePolicy::Squeeze);

    assert_eq!(outcome, Outcome::Applied { width: 230, delta: 130 });
    assert_eq!(layout.widths(), &[230, 20, 200]);
    assert_eq!(layout.total_width(), 450);
}

#[test]
fn test_squeeze_grow_rejected_when_neighbor_at_floor() {
    let mut layout = layout(&[100, 20, 200]);

    let outcome = layout.apply_delta(0, 10, ResizePolicy::Squeeze);

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(layout.widths(), &[100, 20, 200]);
}

#[test]
fn test_last_column_grow_expands_table() {
    let mut layout = layout(&[100, 150, 200]);

    let outcome = layout.apply_delta(2, 40, ResizePolicy::Squeeze);

    assert_eq!(outcome, Outcome::Applied { width: 240, delta: 40 });
    assert_eq!(layout.total_width(), 490);
}

#[test]
fn test_last_column_shrink_clamps_at_floor() {
    let mut layout = layout(&[100, 150, 200]);

    let outcome = layout.apply_delta(2, -500, ResizePolicy::Squeeze);

    assert_eq!(outcome, Outcome::Applied { width: 20, delta: -180 });
    assert_eq!(layout.widths(), &[100, 150, 20]);
    assert_eq!(layout.total_width(), 270);
}

#[test]
fn test_shrink_rejected_at_floor() {
    let mut layout = layout(&[20, 150]);

    let outcome = layout.apply_delta(0, -1, ResizePolicy::Squeeze);

    assert_eq!(outcome, Outcome::Rejected);
    assert_eq!(layout.widths(), &[20, 150]);
}

// ============================================================================
// Expand-table policy
// ============================================================================

#[test]
fn test_expand_grow_leaves_neighbors_and_grows_table() {
    let mut layout = layout(&[100, 150, 200]);

    let outcome = layout.apply_delta(0, 30, ResizePolicy::ExpandTable);

    assert_eq!(outcome, Outcome::Applied { width: 130, delta: 30 });
    assert_eq!(layout.widths(), &[130, 150, 200]);
    assert_eq!(layout.total_width(), 480);
}

#[test]
fn test_expand_shifts_handles_to_the_right() {
    let mut layout = layout(&[100, 150, 200]);

    layout.apply_delta(0, 30, ResizePolicy::ExpandTable);

    assert_eq!(layout.lefts(), &[130, 280, 480]);
}

#[test]
fn test_expand_shrink_clamps_at_floor() {
    let mut layout = layout(&[100, 150, 200]);

    let outcome = layout.apply_delta(1, -400, ResizePolicy::ExpandTable);

    assert_eq!(outcome, Outcome::Applied { width: 20, delta: -130 });
    assert_eq!(layout.widths(), &[100, 20, 200]);
    assert_eq!(layout.total_width(), 320);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_zero_delta_rejected() {
    let mut layout = layout(&[100, 150]);

    assert_eq!(layout.apply_delta(0, 0, ResizePolicy::Squeeze), Outcome::Rejected);
}

#[test]
fn test_out_of_range_column_rejected() {
    let mut layout = layout(&[100, 150]);

    assert_eq!(layout.apply_delta(5, 10, ResizePolicy::Squeeze), Outcome::Rejected);
}

#[test]
fn test_widths_never_fall_below_floor() {
    let mut layout = layout(&[100, 150, 200]);

    // A storm of hostile deltas; the floor must hold throughout.
    for (column, delta) in [(0, -500), (1, 900), (2, -900), (0, 900), (1, -900)] {
        layout.apply_delta(column, delta, ResizePolicy::Squeeze);
        assert!(layout.widths().iter().all(|w| *w >= MIN));
    }
}

#[test]
fn test_px_ceil_rounds_up() {
    assert_eq!(px_ceil(10.0), 10);
    assert_eq!(px_ceil(10.2), 11);
    assert_eq!(px_ceil(0.0), 0);
}
