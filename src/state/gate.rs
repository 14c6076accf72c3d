#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::toast::Toast;

/// Routes the gate knows how to evaluate. The history route is unguarded and
/// never passes through here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateRoute {
    /// Public entry route carrying the auth form.
    Entry,
    /// Protected dashboard route.
    Dashboard,
}

/// Outcome of evaluating a navigation against the session flag.
///
/// The "sign-in required" notice rides along in the decision value instead of
/// being fired from inside the gate, so the access-control decision stays a
/// pure function and the caller owns presentation.
#[derive(Clone, Debug, PartialEq)]
pub enum GateDecision {
    /// Render the requested view.
    Render,
    /// Redirect to the entry route, showing `notice` once. The attempted
    /// navigation is discarded; there is no return-to-target memory.
    RedirectToEntry { notice: Toast },
    /// Already signed in; skip the auth form and go to the dashboard.
    RedirectToDashboard,
}

/// Decide render-vs-redirect for `route` given the current session flag.
///
/// Idempotent: repeated evaluation with an unchanged flag yields the same
/// decision.
pub fn evaluate(route: GateRoute, authenticated: bool) -> GateDecision {
    match (route, authenticated) {
        (GateRoute::Entry, true) => GateDecision::RedirectToDashboard,
        (GateRoute::Entry, false) | (GateRoute::Dashboard, true) => GateDecision::Render,
        (GateRoute::Dashboard, false) => GateDecision::RedirectToEntry {
            notice: Toast::sign_in_required(),
        },
    }
}
