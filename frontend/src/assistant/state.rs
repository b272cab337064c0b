use std::rc::Rc;

use yew::prelude::*;

/// Transient state of one chat widget instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssistantState {
    pub is_open: bool,
    pub query: String,
    pub response: String,
    pub is_loading: bool,
    /// Id of the most recent ask. Results for any other id are dropped.
    pub latest_request: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssistantAction {
    Toggle,
    Close,
    SetQuery(String),
    Begin { request_id: u64 },
    Resolve { request_id: u64, response: String },
}

impl Reducible for AssistantState {
    type Action = AssistantAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AssistantAction::Toggle => next.is_open = !next.is_open,
            AssistantAction::Close => {
                if !next.is_open {
                    return self;
                }
                next.is_open = false;
            }
            AssistantAction::SetQuery(query) => next.query = query,
            AssistantAction::Begin { request_id } => {
                next.is_loading = true;
                next.response.clear();
                next.latest_request = request_id;
            }
            AssistantAction::Resolve { request_id, response } => {
                if request_id != next.latest_request {
                    return self;
                }
                next.response = response;
                next.is_loading = false;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<AssistantState>, actions: Vec<AssistantAction>) -> Rc<AssistantState> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    #[test]
    fn starts_closed_and_idle() {
        let state = AssistantState::default();
        assert!(!state.is_open);
        assert!(!state.is_loading);
        assert!(state.query.is_empty());
        assert!(state.response.is_empty());
    }

    #[test]
    fn toggling_keeps_query_and_response() {
        let state = apply(
            Rc::new(AssistantState::default()),
            vec![
                AssistantAction::Toggle,
                AssistantAction::SetQuery("Do you run TikTok ads?".to_string()),
                AssistantAction::Begin { request_id: 1 },
                AssistantAction::Resolve { request_id: 1, response: "Yes.".to_string() },
                AssistantAction::Toggle,
            ],
        );
        assert!(!state.is_open);
        assert_eq!(state.query, "Do you run TikTok ads?");
        assert_eq!(state.response, "Yes.");

        let reopened = state.reduce(AssistantAction::Toggle);
        assert!(reopened.is_open);
        assert_eq!(reopened.query, "Do you run TikTok ads?");
        assert_eq!(reopened.response, "Yes.");
    }

    #[test]
    fn close_is_idempotent() {
        let closed = Rc::new(AssistantState::default());
        let still_closed = closed.clone().reduce(AssistantAction::Close);
        assert!(Rc::ptr_eq(&closed, &still_closed));

        let open = closed.reduce(AssistantAction::Toggle);
        assert!(!open.reduce(AssistantAction::Close).is_open);
    }

    #[test]
    fn begin_clears_previous_response() {
        let state = apply(
            Rc::new(AssistantState::default()),
            vec![
                AssistantAction::Begin { request_id: 1 },
                AssistantAction::Resolve { request_id: 1, response: "first".to_string() },
                AssistantAction::Begin { request_id: 2 },
            ],
        );
        assert!(state.is_loading);
        assert!(state.response.is_empty());
    }

    #[test]
    fn stale_resolution_is_dropped() {
        let state = apply(
            Rc::new(AssistantState::default()),
            vec![
                AssistantAction::Begin { request_id: 1 },
                AssistantAction::Begin { request_id: 2 },
                AssistantAction::Resolve { request_id: 1, response: "old".to_string() },
            ],
        );
        assert!(state.is_loading);
        assert!(state.response.is_empty());

        let state = state.reduce(AssistantAction::Resolve {
            request_id: 2,
            response: "new".to_string(),
        });
        assert!(!state.is_loading);
        assert_eq!(state.response, "new");
    }

    #[test]
    fn late_result_after_newer_one_does_not_overwrite() {
        let state = apply(
            Rc::new(AssistantState::default()),
            vec![
                AssistantAction::Begin { request_id: 1 },
                AssistantAction::Begin { request_id: 2 },
                AssistantAction::Resolve { request_id: 2, response: "new".to_string() },
                AssistantAction::Resolve { request_id: 1, response: "old".to_string() },
            ],
        );
        assert_eq!(state.response, "new");
        assert!(!state.is_loading);
    }
}
