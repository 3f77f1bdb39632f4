use std::cell::RefCell;

use common::{ProfileSubmission, RecommendError, RecommendationItem, ResultsState, SubmissionTicket, SubmissionTracker};
use yew::prelude::*;

use crate::api_client::recommendation::recommend;

/// Results state plus the callback that dispatches a profile submission.
///
/// Each submission moves the state to `Loading` before the request is sent and
/// renders the outcome once it resolves, unless a newer submission has been
/// dispatched in the meantime.
#[hook]
pub fn use_recommendations() -> (UseStateHandle<ResultsState>, Callback<ProfileSubmission>) {
    let results = use_state(ResultsState::default);
    let tracker = use_mut_ref(SubmissionTracker::new);

    let submit = {
        let results = results.clone();

        use_callback((), move |profile: ProfileSubmission, _| {
            let results = results.clone();
            let tracker = tracker.clone();

            let ticket = begin_submission(&tracker, |state| results.set(state));

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = recommend(&profile).await;
                finish_submission(&tracker, ticket, outcome, |state| results.set(state));
            });
        })
    };

    (results, submit)
}

/// Issues a ticket and shows the loading placeholder. Runs before the request
/// is dispatched.
fn begin_submission(tracker: &RefCell<SubmissionTracker>, set: impl FnOnce(ResultsState)) -> SubmissionTicket {
    let ticket = tracker.borrow_mut().begin();
    log::debug!("Dispatching submission #{}", ticket.sequence());
    set(ResultsState::Loading);
    ticket
}

/// Renders a resolved outcome unless a newer submission superseded it.
/// Returns whether the state was updated.
fn finish_submission(
    tracker: &RefCell<SubmissionTracker>,
    ticket: SubmissionTicket,
    outcome: Result<Vec<RecommendationItem>, RecommendError>,
    set: impl FnOnce(ResultsState),
) -> bool {
    if !tracker.borrow().is_current(ticket) {
        log::debug!("Discarding stale response for submission #{}", ticket.sequence());
        return false;
    }
    set(ResultsState::from_outcome(outcome));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> RecommendationItem {
        RecommendationItem {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_shows_loading() {
        let tracker = RefCell::new(SubmissionTracker::new());
        let mut states = Vec::new();

        begin_submission(&tracker, |state| states.push(state));

        assert_eq!(states, vec![ResultsState::Loading]);
    }

    #[test]
    fn test_loading_precedes_outcome() {
        let tracker = RefCell::new(SubmissionTracker::new());
        let states = RefCell::new(Vec::new());

        let ticket = begin_submission(&tracker, |state| states.borrow_mut().push(state));
        let updated = finish_submission(&tracker, ticket, Ok(vec![item("Alpha")]), |state| {
            states.borrow_mut().push(state)
        });

        assert!(updated);
        assert_eq!(
            states.into_inner(),
            vec![ResultsState::Loading, ResultsState::Populated(vec![item("Alpha")])]
        );
    }

    #[test]
    fn test_failure_still_renders() {
        let tracker = RefCell::new(SubmissionTracker::new());
        let mut rendered = None;

        let ticket = begin_submission(&tracker, |_| {});
        finish_submission(
            &tracker,
            ticket,
            Err(RecommendError::RequestFailed { status: 500 }),
            |state| rendered = Some(state),
        );

        assert_eq!(
            rendered,
            Some(ResultsState::Message("Unable to fetch recommendations.".to_string()))
        );
    }

    #[test]
    fn test_stale_outcome_is_not_rendered() {
        let tracker = RefCell::new(SubmissionTracker::new());
        let states = RefCell::new(Vec::new());

        let first = begin_submission(&tracker, |state| states.borrow_mut().push(state));
        let second = begin_submission(&tracker, |state| states.borrow_mut().push(state));

        // the newer request resolves first, then the older one comes back
        assert!(finish_submission(&tracker, second, Ok(vec![item("Newer")]), |state| {
            states.borrow_mut().push(state)
        }));
        assert!(!finish_submission(&tracker, first, Ok(vec![item("Older")]), |state| {
            states.borrow_mut().push(state)
        }));

        let states = states.into_inner();
        assert_eq!(states.last(), Some(&ResultsState::Populated(vec![item("Newer")])));
        assert_eq!(states.len(), 3);
    }
}
