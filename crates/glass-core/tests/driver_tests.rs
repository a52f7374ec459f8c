// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Playback driver state-machine tests.
//!
//! The harness below plays the host's role: it drains the driver's timer
//! outbox and hands tokens back immediately, ignoring the wall-clock delays.
//! Delivery order matches scheduling order (settle before advance), which is
//! what any single-threaded host observes.

use glass_core::{
    BubbleSort, Deck, MergeSort, Phase, PlaybackDriver, RunState, SelectionSort, StepTiming,
    TimerKind, TimerRequest, Tone,
};

fn driver_for(initial: &[i64]) -> PlaybackDriver {
    PlaybackDriver::new(Deck::compile(&BubbleSort, initial), StepTiming::default())
}

/// Fires every pending token until the driver stops scheduling.
fn run_to_completion(driver: &mut PlaybackDriver) {
    let mut pending = driver.take_scheduled();
    while !pending.is_empty() {
        for request in pending {
            driver.handle_timer(request.token);
        }
        pending = driver.take_scheduled();
    }
}

#[test]
fn full_run_sorts_and_completes() {
    let mut driver = driver_for(&[5, 4, 3, 2, 1]);
    driver.start();
    assert_eq!(driver.run_state(), RunState::Running);
    run_to_completion(&mut driver);

    assert_eq!(driver.run_state(), RunState::Completed);
    assert_eq!(driver.values(), [1, 2, 3, 4, 5]);
    let frame = driver.frame();
    assert!(frame.is_complete);
    assert_eq!(frame.phase, Phase::Complete);
    assert_eq!(frame.sorted, vec![0, 1, 2, 3, 4]);
    assert_eq!(frame.announcement, "Sorted! Bubble sort finished");
}

#[test]
fn merge_and_selection_runs_sort_too() {
    for compiler in [&MergeSort as &dyn glass_core::StepCompiler, &SelectionSort] {
        let mut driver = PlaybackDriver::new(
            Deck::compile(compiler, &[8, 3, 5, 1, 9, 2]),
            StepTiming::default(),
        );
        driver.start();
        run_to_completion(&mut driver);
        assert_eq!(driver.values(), [1, 2, 3, 5, 8, 9], "{}", compiler.name());
        assert_eq!(driver.run_state(), RunState::Completed);
    }
}

#[test]
fn reset_is_idempotent_from_any_point() {
    let mut driver = driver_for(&[3, 1, 2]);

    // Reset while Idle is a no-op.
    driver.reset();
    assert_eq!(driver.run_state(), RunState::Idle);

    // Part-way through a run, any number of resets restores the input.
    driver.start();
    let pending = driver.take_scheduled();
    for request in pending.into_iter().take(2) {
        driver.handle_timer(request.token);
    }
    for _ in 0..3 {
        driver.reset();
        assert_eq!(driver.run_state(), RunState::Idle);
        assert_eq!(driver.cursor(), 0);
        assert_eq!(driver.values(), [3, 1, 2]);
    }
    let frame = driver.frame();
    assert_eq!(frame.phase, Phase::Idle);
    assert!(frame.highlighted.is_empty());
    assert!(frame.sorted.is_empty());
}

#[test]
fn cursor_is_monotonic_while_running() {
    let mut driver = driver_for(&[4, 3, 2, 1]);
    driver.start();
    let mut last = driver.cursor();
    let mut pending = driver.take_scheduled();
    while !pending.is_empty() {
        for request in pending {
            driver.handle_timer(request.token);
            assert!(driver.cursor() >= last, "cursor went backwards");
            last = driver.cursor();
        }
        pending = driver.take_scheduled();
    }
    assert_eq!(driver.cursor(), driver.deck().steps().len());
}

#[test]
fn pause_cancels_outstanding_tokens() {
    let mut driver = driver_for(&[2, 1]);
    driver.start();
    let stale = driver.take_scheduled();
    driver.pause();
    assert_eq!(driver.run_state(), RunState::Paused);

    // Tokens minted before the pause must be inert, even after resuming.
    driver.start();
    let fresh = driver.take_scheduled();
    for request in &stale {
        driver.handle_timer(request.token);
    }
    assert_eq!(driver.cursor(), 0, "stale token advanced the cursor");
    assert_eq!(driver.values(), [2, 1]);

    // The fresh tokens still work.
    for request in fresh {
        driver.handle_timer(request.token);
    }
    assert!(driver.cursor() > 0);
}

#[test]
fn duplicate_advance_applies_at_most_once() {
    // Deck [2, 1]: Compare, Swap, Mark, Complete.
    let mut driver = driver_for(&[2, 1]);
    driver.start();

    // Walk to the swap step.
    let compare_step = driver.take_scheduled();
    for request in compare_step {
        driver.handle_timer(request.token);
    }
    assert_eq!(driver.cursor(), 1);

    let swap_step = driver.take_scheduled();
    let advance = swap_step
        .iter()
        .find(|r| r.token.kind() == TimerKind::Advance)
        .copied()
        .unwrap();
    driver.handle_timer(advance.token);
    assert_eq!(driver.values(), [1, 2]);
    let cursor_after = driver.cursor();

    // A duplicate delivery of the same token must change nothing.
    driver.handle_timer(advance.token);
    assert_eq!(driver.values(), [1, 2]);
    assert_eq!(driver.cursor(), cursor_after);
}

#[test]
fn rapid_pause_start_toggling_never_double_applies() {
    let mut driver = driver_for(&[5, 4, 3, 2, 1]);
    driver.start();
    let mut graveyard: Vec<TimerRequest> = Vec::new();
    for _ in 0..10 {
        graveyard.extend(driver.take_scheduled());
        driver.pause();
        driver.start();
    }
    // Replay every cancelled token; all are stale by epoch.
    for request in graveyard {
        driver.handle_timer(request.token);
    }
    assert_eq!(driver.cursor(), 0);
    assert_eq!(driver.values(), [5, 4, 3, 2, 1]);

    run_to_completion(&mut driver);
    assert_eq!(driver.values(), [1, 2, 3, 4, 5]);
    assert_eq!(driver.run_state(), RunState::Completed);
}

#[test]
fn start_after_completion_restarts_from_the_top() {
    let mut driver = driver_for(&[2, 1]);
    driver.start();
    run_to_completion(&mut driver);
    assert_eq!(driver.run_state(), RunState::Completed);

    driver.start();
    assert_eq!(driver.run_state(), RunState::Running);
    assert_eq!(driver.cursor(), 0);
    assert_eq!(driver.values(), [2, 1]);

    run_to_completion(&mut driver);
    assert_eq!(driver.values(), [1, 2]);
}

#[test]
fn settle_flips_swap_phase_from_lift_to_drop() {
    let mut driver = driver_for(&[2, 1]);
    driver.start();
    // Step 0 is the compare; its announcement opens alert then calms at the
    // settle boundary.
    assert_eq!(driver.frame().tone, Tone::Alert);
    let requests = driver.take_scheduled();
    let settle = requests
        .iter()
        .find(|r| r.token.kind() == TimerKind::Settle)
        .copied()
        .unwrap();
    let advance = requests
        .iter()
        .find(|r| r.token.kind() == TimerKind::Advance)
        .copied()
        .unwrap();
    assert!(settle.delay < advance.delay);
    driver.handle_timer(settle.token);
    assert_eq!(driver.frame().tone, Tone::Calm);
    driver.handle_timer(advance.token);

    // Step 1 is the swap: Lift until its settle fires, Drop afterwards.
    assert_eq!(driver.frame().phase, Phase::Lift);
    let requests = driver.take_scheduled();
    let settle = requests
        .iter()
        .find(|r| r.token.kind() == TimerKind::Settle)
        .copied()
        .unwrap();
    driver.handle_timer(settle.token);
    assert_eq!(driver.frame().phase, Phase::Drop);
    // The mutation has not committed yet; that happens at the boundary.
    assert_eq!(driver.values(), [2, 1]);
}

#[test]
fn empty_deck_completes_instantly() {
    let mut driver = driver_for(&[]);
    driver.start();
    assert_eq!(driver.run_state(), RunState::Completed);
    assert!(driver.take_scheduled().is_empty());
}

#[test]
fn dispose_makes_everything_inert() {
    let mut driver = driver_for(&[3, 2, 1]);
    driver.start();
    let pending = driver.take_scheduled();
    driver.dispose();

    for request in pending {
        driver.handle_timer(request.token);
    }
    assert_eq!(driver.cursor(), 0);
    assert_eq!(driver.values(), [3, 2, 1]);

    // Dispose freezes the machine: no call schedules or transitions again.
    driver.start();
    driver.reset();
    driver.pause();
    assert_eq!(driver.run_state(), RunState::Running);
    assert!(driver.take_scheduled().is_empty());
}

#[test]
fn pause_while_idle_and_completed_is_a_noop() {
    let mut driver = driver_for(&[2, 1]);
    driver.pause();
    assert_eq!(driver.run_state(), RunState::Idle);

    driver.start();
    run_to_completion(&mut driver);
    driver.pause();
    assert_eq!(driver.run_state(), RunState::Completed);
}
