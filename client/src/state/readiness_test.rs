use super::*;

#[test]
fn gate_starts_initializing_and_shows_fallback() {
    let gate = ReadinessGate::new();
    assert_eq!(gate.phase(), &ShellPhase::Initializing);
    assert!(gate.shows_fallback());
    assert!(!gate.is_ready());
    assert_eq!(gate.failure(), None);
}

#[test]
fn mark_ready_hides_fallback() {
    let mut gate = ReadinessGate::new();
    assert!(gate.mark_ready());
    assert!(gate.is_ready());
    assert!(!gate.shows_fallback());
}

#[test]
fn ready_is_terminal() {
    let mut gate = ReadinessGate::new();
    gate.mark_ready();
    assert!(!gate.mark_ready());
    assert!(!gate.mark_failed("late failure"));
    assert_eq!(gate.phase(), &ShellPhase::Ready);
    assert!(!gate.shows_fallback());
}

#[test]
fn failed_is_terminal_and_keeps_first_reason() {
    let mut gate = ReadinessGate::new();
    assert!(gate.mark_failed("bootstrap failed: 502"));
    assert!(!gate.mark_failed("second"));
    assert!(!gate.mark_ready());
    assert_eq!(gate.failure(), Some("bootstrap failed: 502"));
    assert!(!gate.shows_fallback());
}

#[test]
fn fallback_never_returns_after_ready_across_repeated_checks() {
    let mut gate = ReadinessGate::new();
    gate.mark_ready();
    for _ in 0..10 {
        gate.mark_ready();
        assert!(!gate.shows_fallback());
    }
}
