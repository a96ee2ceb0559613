use super::*;

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Success, "two");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "two");
    assert_eq!(state.items[1].kind, ToastKind::Success);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..(MAX_VISIBLE_TOASTS + 2) {
        state.push(ToastKind::Info, format!("toast {i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items[0].message, "toast 2");
    assert_eq!(state.items.last().map(|t| t.message.as_str()), Some("toast 4"));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Error, "b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Info, "a");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b");
    assert_ne!(a, b);
}

#[test]
fn kind_css_modifiers_are_distinct() {
    assert_ne!(ToastKind::Success.css_modifier(), ToastKind::Error.css_modifier());
    assert_ne!(ToastKind::Error.css_modifier(), ToastKind::Info.css_modifier());
    assert_eq!(ToastKind::default(), ToastKind::Info);
}
