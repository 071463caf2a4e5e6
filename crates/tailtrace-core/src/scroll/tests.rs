use super::*;
use crate::format::LineFormatter;
use proptest::prelude::*;

fn app(text: &str) -> PhysicalLine {
    PhysicalLine::plain(text)
}

fn vendor(text: &str) -> PhysicalLine {
    PhysicalLine::plain(text).vendor(true)
}

fn summary(count: usize) -> PhysicalLine {
    PhysicalLine::dim("#…").summary(count)
}

// ─────────────────────────────────────────────────────────────────
// VendorVisibility
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_visibility_defaults_to_hidden() {
    assert_eq!(VendorVisibility::default(), VendorVisibility::Hidden);
}

#[test]
fn test_visibility_toggle() {
    assert_eq!(VendorVisibility::Hidden.toggle(), VendorVisibility::Visible);
    assert_eq!(VendorVisibility::Visible.toggle(), VendorVisibility::Hidden);
}

// ─────────────────────────────────────────────────────────────────
// ScrollState
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_resolve_without_pending_is_noop() {
    let mut state = ScrollState::new(7);
    assert!(!state.resolve(100, 10));
    assert_eq!(state.index, 7);
}

#[test]
fn test_resolve_applies_and_clears() {
    let mut state = ScrollState::new(0);
    state.pending_index = Some(12);
    assert!(state.resolve(100, 10));
    assert_eq!(state.index, 12);
    assert_eq!(state.pending_index, None);
}

#[test]
fn test_resolve_clamps_negative() {
    let mut state = ScrollState::new(5);
    state.pending_index = Some(-3);
    state.resolve(100, 10);
    assert_eq!(state.index, 0);
}

#[test]
fn test_resolve_clamps_past_end() {
    let mut state = ScrollState::new(5);
    state.pending_index = Some(500);
    state.resolve(100, 10);
    assert_eq!(state.index, 90);
}

#[test]
fn test_resolve_short_content() {
    let mut state = ScrollState::new(5);
    state.pending_index = Some(4);
    state.resolve(3, 10);
    assert_eq!(state.index, 0);
}

#[test]
fn test_clamp() {
    let mut state = ScrollState::new(50);
    state.clamp(20, 10);
    assert_eq!(state.index, 10);
}

// ─────────────────────────────────────────────────────────────────
// Hide / Show recalculation
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_hide_single_run_above_index() {
    let lines = vec![app("A"), vendor("V1"), vendor("V2"), vendor("V3"), app("B")];
    assert_eq!(pending_index_on_hide(&lines, 4), 2);
}

#[test]
fn test_show_single_run_above_index() {
    let lines = vec![app("A"), summary(3), app("B")];
    assert_eq!(pending_index_on_show(&lines, 2), 4);
}

#[test]
fn test_hide_two_runs() {
    let lines = vec![vendor("V1"), vendor("V2"), app("A"), vendor("V3"), app("B")];
    assert_eq!(pending_index_on_hide(&lines, 4), 3);
}

#[test]
fn test_show_uses_first_summary_count_only() {
    let lines = vec![summary(2), app("A"), summary(3), app("B")];
    assert_eq!(pending_index_on_show(&lines, 3), 4);
}

#[test]
fn test_hide_at_bottom_of_run() {
    let lines = vec![app("A"), vendor("V1"), vendor("V2"), app("B")];
    assert_eq!(pending_index_on_hide(&lines, 2), 1);
}

#[test]
fn test_show_with_index_on_summary() {
    let lines = vec![app("A"), summary(2), app("B")];
    assert_eq!(pending_index_on_show(&lines, 1), 2);
}

#[test]
fn test_show_without_summary_keeps_index() {
    let lines = vec![app("A"), app("B")];
    assert_eq!(pending_index_on_show(&lines, 1), 1);
}

#[test]
fn test_out_of_range_index_counts_as_plain() {
    let lines = vec![vendor("V1"), vendor("V2")];
    assert_eq!(pending_index_on_hide(&lines, 5), 4);
    assert_eq!(pending_index_on_show(&[], 3), 3);
}

#[test]
fn test_hide_at_top_of_run_can_go_negative_then_clamps() {
    let lines = vec![vendor("V1"), vendor("V2")];
    let pending = pending_index_on_hide(&lines, 0);
    assert_eq!(pending, 0);

    let mut state = ScrollState::new(0);
    state.pending_index = Some(-1);
    state.resolve(1, 1);
    assert_eq!(state.index, 0);
}

#[test]
fn test_recalculate_dispatches_on_current_mode() {
    let expanded = vec![app("A"), vendor("V1"), vendor("V2"), app("B")];
    let collapsed = vec![app("A"), summary(2), app("B")];
    assert_eq!(recalculate(&expanded, 3, VendorVisibility::Visible), 2);
    assert_eq!(recalculate(&collapsed, 2, VendorVisibility::Hidden), 3);
}

// ─────────────────────────────────────────────────────────────────
// Round trips through the real pipeline
// ─────────────────────────────────────────────────────────────────

/// Frame lines: `true` is a vendor frame, `false` an application frame.
fn trace(frames: &[bool]) -> Vec<String> {
    let mut lines = vec!["[2024-05-01 10:00:00] local.ERROR: boom".to_string()];
    lines.push("[stacktrace]".to_string());
    lines.extend(frames.iter().enumerate().map(|(i, &is_vendor)| {
        if is_vendor {
            format!("#{i} /vendor/laravel/framework/src/Illuminate/Pipeline/Pipeline.php({i}): handle()")
        } else {
            format!("#{i} /app/Http/Controllers/UserController.php({i}): show()")
        }
    }));
    lines.push("\"}".to_string());
    lines
}

fn render(lines: &[String], width: usize, visibility: VendorVisibility) -> Vec<PhysicalLine> {
    LineFormatter::default().render(lines.iter().map(String::as_str), width, visibility)
}

/// Row indices that survive collapsing: non-vendor rows and run bottoms.
fn anchor_rows(expanded: &[PhysicalLine]) -> Vec<usize> {
    (0..expanded.len())
        .filter(|&i| !expanded[i].is_vendor_frame || !is_vendor_at(expanded, i + 1))
        .collect()
}

#[test]
fn test_round_trip_through_formatter() {
    let lines = trace(&[false, true, true, true, false, true, false]);
    let expanded = render(&lines, 60, VendorVisibility::Visible);
    let collapsed = render(&lines, 60, VendorVisibility::Hidden);

    let index = expanded.len() - 2;
    let hidden = pending_index_on_hide(&expanded, index);
    assert!(!collapsed[hidden as usize].is_vendor_frame);
    assert_eq!(collapsed[hidden as usize], expanded[index]);

    let shown = pending_index_on_show(&collapsed, hidden as usize);
    assert_eq!(shown, index as i64);
}

proptest! {
    #[test]
    fn prop_round_trip_restores_index(
        frames in proptest::collection::vec(any::<bool>(), 1..24),
        width in 24usize..90,
        pick in any::<prop::sample::Index>(),
    ) {
        let lines = trace(&frames);
        let expanded = render(&lines, width, VendorVisibility::Visible);
        let collapsed = render(&lines, width, VendorVisibility::Hidden);

        let anchors = anchor_rows(&expanded);
        let index = anchors[pick.index(anchors.len())];

        let hidden = pending_index_on_hide(&expanded, index);
        prop_assert!(hidden >= 0 && (hidden as usize) < collapsed.len());

        let mut state = ScrollState::new(index);
        state.pending_index = Some(hidden);
        state.resolve(collapsed.len(), 1);
        prop_assert_eq!(state.index as i64, hidden);

        let shown = pending_index_on_show(&collapsed, state.index);
        prop_assert_eq!(shown, index as i64);
    }

    #[test]
    fn prop_run_at_index_collapses_to_its_summary(
        before in 0usize..6,
        run in 1usize..12,
        after in 0usize..6,
    ) {
        let mut frames = vec![false; before];
        frames.extend(std::iter::repeat(true).take(run));
        frames.extend(std::iter::repeat(false).take(after));
        let lines = trace(&frames);
        let expanded = render(&lines, 50, VendorVisibility::Visible);
        let collapsed = render(&lines, 50, VendorVisibility::Hidden);

        let bottom = expanded.iter().rposition(|l| l.is_vendor_frame).unwrap();
        let hidden = pending_index_on_hide(&expanded, bottom) as usize;
        prop_assert!(collapsed[hidden].is_summary());

        let rows_in_run = expanded.iter().filter(|l| l.is_vendor_frame).count();
        prop_assert_eq!(collapsed[hidden].compressed, Some(rows_in_run));
        prop_assert_eq!(pending_index_on_show(&collapsed, hidden), bottom as i64);
    }

    #[test]
    fn prop_index_inside_run_returns_to_run_bottom(
        before in 0usize..6,
        run in 1usize..12,
        after in 0usize..6,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut frames = vec![false; before];
        frames.extend(std::iter::repeat(true).take(run));
        frames.extend(std::iter::repeat(false).take(after));
        let lines = trace(&frames);
        let expanded = render(&lines, 50, VendorVisibility::Visible);
        let collapsed = render(&lines, 50, VendorVisibility::Hidden);

        let top = expanded.iter().position(|l| l.is_vendor_frame).unwrap();
        let bottom = expanded.iter().rposition(|l| l.is_vendor_frame).unwrap();
        let index = top + pick.index(bottom - top + 1);

        // Top, middle or bottom of the run: all land on the summary row
        let hidden = pending_index_on_hide(&expanded, index);
        prop_assert_eq!(hidden, top as i64);
        prop_assert!(collapsed[top].is_summary());

        prop_assert_eq!(pending_index_on_show(&collapsed, top), bottom as i64);
    }

    #[test]
    fn prop_resolved_index_is_in_bounds(
        pending in -1000i64..1000,
        total in 0usize..500,
        height in 1usize..80,
    ) {
        let mut state = ScrollState::default();
        state.pending_index = Some(pending);
        state.resolve(total, height);
        prop_assert!(state.index <= total.saturating_sub(height));
        prop_assert_eq!(state.pending_index, None);
    }
}
