use super::*;

#[test]
fn pending_while_the_initial_store_read_is_outstanding() {
    let state = SessionState::default();
    assert_eq!(evaluate(&state), GuardDecision::Pending);
}

#[test]
fn renders_for_an_authenticated_session() {
    let mut state = SessionState::default();
    state.authenticate("tok".to_owned());
    assert_eq!(evaluate(&state), GuardDecision::Render);
}

#[test]
fn redirects_once_settled_without_a_token() {
    let mut state = SessionState::default();
    state.restore(None);
    assert_eq!(evaluate(&state), GuardDecision::RedirectToLogin);
}

#[test]
fn toggling_the_session_between_navigations_flips_the_outcome() {
    let mut state = SessionState::default();
    state.restore(Some("tok".to_owned()));
    assert_eq!(evaluate(&state), GuardDecision::Render);

    state.clear();
    assert_eq!(evaluate(&state), GuardDecision::RedirectToLogin);

    state.authenticate("tok-2".to_owned());
    assert_eq!(evaluate(&state), GuardDecision::Render);
}
