use fadecue::{CueError, FadeTiming, Sequencer, Tick};

fn seq(n: usize, hold_secs: f64) -> Sequencer<String> {
    let items = (0..n).map(|i| format!("item-{i}")).collect();
    let headers = (0..n).map(|i| format!("header-{i}")).collect();
    Sequencer::new(items, headers, FadeTiming::with_hold(hold_secs).unwrap()).unwrap()
}

#[test]
fn three_entries_at_whole_entry_ticks() {
    // Per-entry total with hold 5 is 8 seconds.
    let mut seq = Sequencer::new(
        vec!["A", "B", "C"],
        vec!["X".to_owned(), "Y".to_owned(), "Z".to_owned()],
        FadeTiming::with_hold(5.0).unwrap(),
    )
    .unwrap();
    assert_eq!(seq.timing().total_secs(), 8.0);

    assert_eq!(seq.tick(8.0), Tick::Active);
    let d = seq.current().unwrap();
    assert_eq!((d.header, *d.item), ("Y", "B"));

    assert_eq!(seq.tick(8.0), Tick::Active);
    let d = seq.current().unwrap();
    assert_eq!((d.header, *d.item), ("Z", "C"));

    assert_eq!(seq.tick(8.0), Tick::Complete);
    assert_eq!(seq.tick(8.0), Tick::Terminal);
    assert_eq!(seq.tick(8.0), Tick::Terminal);
}

#[test]
fn deltas_summing_to_total_duration_reach_terminal() {
    // 4 entries of 3 seconds each; a ragged positive delta stream summing to
    // exactly 12 seconds must land on terminal with exactly one completion.
    let mut seq = seq(4, 0.0);
    let deltas = [0.25, 0.5, 1.0, 1.25, 2.0, 2.5, 3.0, 1.5];
    assert_eq!(deltas.iter().sum::<f64>(), 12.0);

    let mut completions = 0;
    for d in deltas {
        if seq.tick(d) == Tick::Complete {
            completions += 1;
        }
    }
    assert!(seq.is_terminal());
    assert_eq!(completions, 1);
}

#[test]
fn cursor_never_decreases_and_never_revisits() {
    let mut seq = seq(5, 1.0);
    let mut prev = seq.cursor();
    for _ in 0..400 {
        seq.tick(0.1);
        let cursor = seq.cursor();
        assert!(cursor >= prev);
        prev = cursor;
    }
    assert!(seq.is_terminal());
}

#[test]
fn zero_delta_ticks_are_idempotent() {
    let mut seq = seq(2, 5.0);
    seq.tick(4.0);
    let cursor = seq.cursor();
    let opacity = seq.current().unwrap().item_opacity;

    for _ in 0..50 {
        assert_eq!(seq.tick(0.0), Tick::Active);
    }
    assert_eq!(seq.cursor(), cursor);
    assert_eq!(seq.current().unwrap().item_opacity, opacity);
}

#[test]
fn terminal_is_inert() {
    let mut seq = seq(1, 0.0);
    assert_eq!(seq.tick(3.0), Tick::Complete);

    for _ in 0..10 {
        assert_eq!(seq.tick(100.0), Tick::Terminal);
    }
    assert!(matches!(seq.current(), Err(CueError::State(_))));
}

#[test]
fn zero_hold_does_not_jump_from_pending_to_finished() {
    // Total collapses to 3 seconds; with small positive deltas the entry must
    // still ramp up and back down rather than blinking out.
    let mut seq = seq(1, 0.0);
    let mut reached_full = false;
    let mut saw_partial_up = false;
    let mut saw_partial_down = false;

    loop {
        let outcome = seq.tick(0.25);
        if outcome != Tick::Active {
            break;
        }
        let opacity = seq.current().unwrap().item_opacity;
        if opacity > 0.0 && opacity < 0.999 && !reached_full {
            saw_partial_up = true;
        }
        if opacity >= 0.999 {
            reached_full = true;
        }
        if opacity > 0.0 && opacity < 0.999 && reached_full {
            saw_partial_down = true;
        }
    }

    assert!(saw_partial_up);
    assert!(reached_full);
    assert!(saw_partial_down);
    assert!(seq.is_terminal());
}

#[test]
fn mismatched_lengths_never_construct() {
    let result = Sequencer::new(
        vec!["a", "b", "c"],
        vec!["x".to_owned(), "y".to_owned()],
        FadeTiming::default(),
    );
    assert!(matches!(result, Err(CueError::Configuration(_))));
}

#[test]
fn opacity_envelope_shape_over_one_entry() {
    let mut seq = seq(1, 5.0);

    // Delay: invisible.
    seq.tick(0.5);
    assert_eq!(seq.current().unwrap().item_opacity, 0.0);

    // Mid fade-in.
    seq.tick(1.0); // t = 1.5
    let up = seq.current().unwrap().item_opacity;
    assert!(up > 0.0 && up < 1.0);

    // Hold: fully visible.
    seq.tick(1.0); // t = 2.5
    assert_eq!(seq.current().unwrap().item_opacity, 1.0);

    // Mid fade-out.
    seq.tick(5.0); // t = 7.5
    let down = seq.current().unwrap().item_opacity;
    assert!(down > 0.0 && down < 1.0);

    // Fade-out completes exactly at the total.
    assert_eq!(seq.tick(0.5), Tick::Complete);
}
