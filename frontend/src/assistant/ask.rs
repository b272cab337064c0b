use log::{info, warn};

use crate::assistant::provider::{GenerationRequest, ProviderError, TextGenerator};
use crate::assistant::state::AssistantAction;

pub const SYSTEM_INSTRUCTION: &str = "You are an AI growth assistant for \"Grow Next Gen\" digital marketing agency. Answer the following client query professionally and persuasively. Keep it concise. Highlight our services: Performance Ads, SMM, Content, Funnels.";

pub const EMPTY_RESPONSE_MESSAGE: &str =
    "I am having trouble connecting right now, but our team would love to talk!";

pub const FAILURE_MESSAGE: &str =
    "Please contact our human specialists at hello@grownextgen.com for immediate help.";

pub fn build_request(query: &str) -> GenerationRequest {
    GenerationRequest {
        prompt: query.to_string(),
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
    }
}

/// Collapses a provider outcome into the text shown to the visitor.
pub fn display_text(outcome: Result<String, ProviderError>) -> String {
    match outcome {
        Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
        Ok(text) => text,
        Err(e) => {
            warn!("Assistant request failed: {}", e);
            FAILURE_MESSAGE.to_string()
        }
    }
}

/// Sends `query` to the provider and reports progress through `dispatch`.
///
/// Blank queries are ignored: nothing is dispatched and no call is made.
/// Returns whether a call was issued.
pub async fn ask<G, D>(generator: &G, query: &str, request_id: u64, dispatch: D) -> bool
where
    G: TextGenerator,
    D: Fn(AssistantAction),
{
    if query.trim().is_empty() {
        return false;
    }

    dispatch(AssistantAction::Begin { request_id });
    info!("Assistant request {} started", request_id);

    let outcome = generator.generate(&build_request(query)).await;
    dispatch(AssistantAction::Resolve {
        request_id,
        response: display_text(outcome),
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::state::AssistantState;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Reducible;

    struct MockGenerator {
        outcome: Result<String, ProviderError>,
        calls: RefCell<Vec<GenerationRequest>>,
    }

    impl MockGenerator {
        fn replying(outcome: Result<String, ProviderError>) -> Self {
            Self { outcome, calls: RefCell::new(Vec::new()) }
        }
    }

    impl TextGenerator for MockGenerator {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
            self.calls.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    /// Runs one ask against `state`, recording every intermediate state.
    fn run(
        generator: &MockGenerator,
        state: Rc<AssistantState>,
        query: &str,
        request_id: u64,
    ) -> (bool, Vec<Rc<AssistantState>>) {
        let current = RefCell::new(state);
        let history = RefCell::new(Vec::new());
        let issued = block_on(ask(generator, query, request_id, |action| {
            let next = current.borrow().clone().reduce(action);
            history.borrow_mut().push(next.clone());
            *current.borrow_mut() = next;
        }));
        (issued, history.into_inner())
    }

    fn open_with_query(query: &str) -> Rc<AssistantState> {
        Rc::new(AssistantState::default())
            .reduce(AssistantAction::Toggle)
            .reduce(AssistantAction::SetQuery(query.to_string()))
    }

    #[test]
    fn successful_ask_shows_reply_and_ends_loading() {
        let generator = MockGenerator::replying(Ok("Plans start at $2,500/mo".to_string()));
        let (issued, history) = run(&generator, open_with_query("How much does it cost?"), "How much does it cost?", 1);

        assert!(issued);
        let calls = generator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "How much does it cost?");
        assert_eq!(calls[0].system_instruction, SYSTEM_INSTRUCTION);

        assert_eq!(history.len(), 2);
        assert!(history[0].is_loading);
        assert!(history[0].response.is_empty());
        assert!(!history[1].is_loading);
        assert_eq!(history[1].response, "Plans start at $2,500/mo");
    }

    #[test]
    fn failing_provider_shows_contact_fallback() {
        let generator = MockGenerator::replying(Err(ProviderError::Network("offline".to_string())));
        let (_, history) = run(&generator, open_with_query("Hi"), "Hi", 1);

        let last = history.last().unwrap();
        assert_eq!(
            last.response,
            "Please contact our human specialists at hello@grownextgen.com for immediate help."
        );
        assert!(!last.is_loading);
    }

    #[test]
    fn every_failure_class_collapses_to_one_message() {
        let failures = vec![
            ProviderError::MissingApiKey,
            ProviderError::Unauthorized(401),
            ProviderError::QuotaExceeded,
            ProviderError::Blocked("SAFETY".to_string()),
            ProviderError::Decode("eof".to_string()),
            ProviderError::Status { status: 500, body: String::new() },
        ];
        for e in failures {
            assert_eq!(display_text(Err(e)), FAILURE_MESSAGE);
        }
    }

    #[test]
    fn empty_reply_shows_encouragement() {
        for reply in ["", "   \n"] {
            let generator = MockGenerator::replying(Ok(reply.to_string()));
            let (_, history) = run(&generator, open_with_query("Hi"), "Hi", 1);
            let last = history.last().unwrap();
            assert_eq!(last.response, EMPTY_RESPONSE_MESSAGE);
            assert!(!last.is_loading);
        }
    }

    #[test]
    fn blank_query_is_a_no_op() {
        let previous = Rc::new(AssistantState {
            response: "earlier answer".to_string(),
            ..AssistantState::default()
        });
        for query in ["", "   ", "\t\n"] {
            let generator = MockGenerator::replying(Ok("unused".to_string()));
            let (issued, history) = run(&generator, previous.clone(), query, 1);
            assert!(!issued);
            assert!(history.is_empty());
            assert!(generator.calls.borrow().is_empty());
        }
        assert_eq!(previous.response, "earlier answer");
    }

    #[test]
    fn prompt_is_sent_untrimmed() {
        let generator = MockGenerator::replying(Ok("ok".to_string()));
        run(&generator, open_with_query("  ROI?  "), "  ROI?  ", 1);
        assert_eq!(generator.calls.borrow()[0].prompt, "  ROI?  ");
    }
}
