use glowbar::{AnimationConfig, AnimationState, Phase};

/// 0, 1, .. 5, then 5.1, 5.2, .. 6.3
fn frame_times() -> Vec<f32> {
    let mut times: Vec<f32> = (0..=5).map(|s| s as f32).collect();
    times.extend((51..=63).map(|t| t as f32 / 10.0));
    times
}

#[test]
fn stock_run_walks_every_phase_once() {
    let mut state = AnimationState::new(AnimationConfig::with_durations(5.0, 1.2));
    let mut finished_at = None;
    let mut done_at = None;
    let mut done_transitions = 0;
    let mut was_done = false;

    for t in frame_times() {
        let params = state.advance(t);
        if state.finished() && finished_at.is_none() {
            finished_at = Some(t);
            assert!(state.glow_active());
            assert_eq!(state.glow_elapsed_seconds(), 0.0);
        }
        if state.done() && !was_done {
            done_at = Some(t);
            done_transitions += 1;
        }
        was_done = state.done();

        if t < 5.0 {
            assert_eq!(params.phase, Phase::Filling, "t={t}");
        } else if t < 6.2 {
            assert_eq!(params.phase, Phase::Glowing, "t={t}");
            assert!(state.glow_active() && !state.done());
            assert_eq!(params.progress, 1.0);
        }
        if t >= 6.2 {
            assert!(state.done() && !state.glow_active(), "t={t}");
        }
        if state.done() {
            assert!(!state.glow_active());
            assert!(params.is_blank());
        }
    }

    assert_eq!(finished_at, Some(5.0));
    assert_eq!(done_at, Some(6.2));
    assert_eq!(done_transitions, 1);
}

#[test]
fn progress_is_monotonic_and_pinned() {
    let mut state = AnimationState::new(AnimationConfig::with_durations(5.0, 100.0));
    let mut last = 0.0;
    for i in -20..200 {
        let t = i as f32 * 0.05;
        let p = state.advance(t);
        assert!(p.progress >= last, "t={t}: {} < {last}", p.progress);
        if t <= 0.0 {
            assert_eq!(p.progress, 0.0);
        }
        if t >= 5.0 {
            assert_eq!(p.progress, 1.0);
            assert!(state.finished());
        }
        last = p.progress;
    }
}

#[test]
fn fill_width_tracks_progress() {
    let cfg = AnimationConfig::with_durations(5.0, 1.2);
    let track = cfg.track_width;
    let mut state = AnimationState::new(cfg);
    let p = state.advance(2.5);
    assert_eq!(p.progress, 0.5);
    assert_eq!(p.fill_width, track / 2.0);
}

#[test]
fn short_durations_run_fast() {
    let mut state = AnimationState::new(AnimationConfig::with_durations(0.01, 0.01));
    state.advance(0.0);
    state.advance(0.01);
    assert!(state.glow_active());
    state.advance(0.03);
    assert!(state.done());
}

#[test]
fn frames_serialize_for_tracing() {
    let mut state = AnimationState::new(AnimationConfig::default());
    let params = state.advance(1.0);
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["phase"], "Filling");
    assert_eq!(json["percent"], 20);
    assert_eq!(json["fill_color"]["g"], 198);
}
