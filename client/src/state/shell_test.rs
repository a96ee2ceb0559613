use super::*;
use crate::net::types::{BackendStatus, FeatureFlags, Session};
use crate::state::modal::ModalKind;
use crate::state::readiness::ShellPhase;
use crate::state::toast::ToastKind;

fn ready_bootstrap() -> Bootstrap {
    Bootstrap {
        session: Session {
            user: Some(User { id: "u1".to_owned(), name: "Ada".to_owned(), email: None, avatar_url: None }),
            organizations: vec![Organization {
                id: "org_1".to_owned(),
                name: "Acme".to_owned(),
                slug: None,
                image_url: None,
            }],
            active_organization_id: Some("org_1".to_owned()),
        },
        backend: BackendStatus { ready: true, configured: true, version: None },
        flags: FeatureFlags::default(),
    }
}

#[test]
fn new_shell_is_initializing() {
    Owner::new().with(|| {
        let shell = ShellContext::new();
        assert!(shell.gate.get_untracked().shows_fallback());
        assert!(!shell.data_ready());
        assert_eq!(shell.current_user(), None);
    });
}

#[test]
fn apply_bootstrap_success_releases_gate_and_fills_session() {
    Owner::new().with(|| {
        let shell = ShellContext::new();
        shell.apply_bootstrap(Ok(ready_bootstrap()));
        assert!(shell.gate.get_untracked().is_ready());
        assert!(shell.data_ready());
        assert_eq!(shell.current_organization().map(|o| o.name), Some("Acme".to_owned()));
    });
}

#[test]
fn apply_bootstrap_failure_fails_gate() {
    Owner::new().with(|| {
        let shell = ShellContext::new();
        shell.apply_bootstrap(Err("bootstrap failed: 502".to_owned()));
        assert_eq!(shell.gate.get_untracked().phase(), &ShellPhase::Failed("bootstrap failed: 502".to_owned()));
        assert!(!shell.data_ready());
    });
}

#[test]
fn second_bootstrap_does_not_resuspend_or_fail_ready_shell() {
    Owner::new().with(|| {
        let shell = ShellContext::new();
        shell.apply_bootstrap(Ok(ready_bootstrap()));
        shell.apply_bootstrap(Err("late".to_owned()));
        assert!(shell.gate.get_untracked().is_ready());
        assert!(!shell.gate.get_untracked().shows_fallback());
    });
}

#[test]
fn failed_shell_ignores_late_session() {
    Owner::new().with(|| {
        let shell = ShellContext::new();
        shell.apply_bootstrap(Err("boom".to_owned()));
        shell.apply_bootstrap(Ok(ready_bootstrap()));
        assert_eq!(shell.gate.get_untracked().phase(), &ShellPhase::Failed("boom".to_owned()));
        assert_eq!(shell.current_user(), None);
        assert!(!shell.data_ready());
    });
}

// =============================================================
// Host persistence across route scopes
// =============================================================

/// Run `body` in a fresh child scope of the current owner, then dispose the
/// scope the way the router does when the matched route changes.
fn in_route_scope<T>(body: impl FnOnce() -> T) -> T {
    let route = Owner::new();
    let out = route.with(body);
    route.cleanup();
    out
}

#[test]
fn route_scope_disposal_drops_route_owned_signals() {
    Owner::new().with(|| {
        let local = in_route_scope(|| RwSignal::new(1_u8));
        assert_eq!(local.try_get_untracked(), None);
    });
}

#[test]
fn toast_and_modal_hosts_persist_across_navigations() {
    Owner::new().with(|| {
        let shell = provide_shell_context();
        shell.apply_bootstrap(Ok(ready_bootstrap()));

        // First route pushes a toast and opens a modal through the shared hosts.
        in_route_scope(|| {
            let routed = use_shell();
            notify_in(routed, "copied");
            let org = routed.current_organization().unwrap();
            routed.modal.update(|m| m.open(ModalKind::InviteMembers { organization: org }));
        });

        // Two later routes still find the queued toast and the open modal.
        for expected in [1, 2] {
            in_route_scope(|| {
                let routed = use_shell();
                assert_eq!(routed.toasts.try_get_untracked().map(|t| t.items.len()), Some(expected));
                assert!(routed.modal.try_get_untracked().is_some_and(|m| m.is_open()));
                assert!(routed.gate.try_get_untracked().is_some_and(|g| g.is_ready()));
                notify_in(routed, "next");
            });
        }

        assert_eq!(shell.toasts.get_untracked().items.len(), 3);
        assert!(shell.modal.get_untracked().is_open());
    });
}

fn notify_in(shell: ShellContext, message: &str) {
    shell.toasts.update(|t| {
        t.push(ToastKind::Success, message);
    });
}
