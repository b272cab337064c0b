use log::info;
use stylist::yew::styled_component;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::assistant::ask::ask;
use crate::assistant::gemini::GeminiClient;
use crate::assistant::state::{AssistantAction, AssistantState};

const GREETING: &str = "Hello! How can I help you scale your business today?";
const LOADING_TEXT: &str = "Analyzing growth potential...";

/// Floating "Growth Assistant" chat bubble.
#[styled_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let state = use_reducer(AssistantState::default);
    let request_counter = use_mut_ref(|| 0u64);

    let on_ask = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let query = state.query.clone();
            let request_id = {
                let mut counter = request_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            let handle = state.clone();
            // A fresh client per request so the latest configuration is used
            spawn_local(async move {
                let client = GeminiClient::from_current_config();
                ask(&client, &query, request_id, move |action| handle.dispatch(action)).await;
            });
        })
    };

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Toggling growth assistant");
            state.dispatch(AssistantAction::Toggle);
        })
    };

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(AssistantAction::Close))
    };

    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(AssistantAction::SetQuery(input.value()));
        })
    };

    let on_keydown = {
        let on_ask = on_ask.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_ask.emit(());
            }
        })
    };

    let on_send = Callback::from(move |_: MouseEvent| on_ask.emit(()));

    let root = css!(
        r#"
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        z-index: 60;
        display: flex;
        flex-direction: column;
        align-items: flex-end;

        .chat-panel {
            width: 20rem;
            margin-bottom: 1rem;
            background: #0f0f0f;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 16px;
            overflow: hidden;
            box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
            display: flex;
            flex-direction: column;
            animation: chat-pop 0.2s ease-out;
        }
        .chat-header {
            background: #ccff00;
            color: #000;
            font-weight: 700;
            padding: 1rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }
        .chat-header button {
            background: none;
            border: none;
            font-size: 1rem;
            cursor: pointer;
        }
        .chat-body {
            height: 16rem;
            overflow-y: auto;
            padding: 1rem;
            font-size: 0.875rem;
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }
        .chat-bubble {
            padding: 0.75rem;
            border-radius: 8px;
            background: rgba(255, 255, 255, 0.05);
        }
        .chat-bubble.reply {
            background: rgba(204, 255, 0, 0.1);
            border: 1px solid rgba(204, 255, 0, 0.2);
            color: #e2e8f0;
            white-space: pre-wrap;
        }
        .chat-loading {
            animation: pulse 1.5s ease-in-out infinite;
        }
        .chat-input-row {
            display: flex;
            gap: 0.5rem;
            padding: 1rem;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
        }
        .chat-input-row input {
            flex: 1;
            padding: 0.5rem 0.75rem;
            font-size: 0.875rem;
            color: #fff;
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 8px;
        }
        .chat-input-row input:focus {
            outline: none;
            border-color: #ccff00;
        }
        .chat-send {
            background: #ccff00;
            color: #000;
            border: none;
            border-radius: 8px;
            padding: 0.5rem 0.75rem;
            cursor: pointer;
            transition: transform 0.2s ease;
        }
        .chat-send:hover {
            transform: scale(1.05);
        }
        .chat-toggle {
            width: 3.5rem;
            height: 3.5rem;
            border-radius: 50%;
            border: none;
            background: #ccff00;
            color: #000;
            font-size: 1.5rem;
            cursor: pointer;
            box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
            transition: transform 0.2s ease;
        }
        .chat-toggle:hover {
            transform: scale(1.1);
        }
        .chat-toggle:active {
            transform: scale(0.95);
        }
        "#
    );

    html! {
        <div class={root}>
            if state.is_open {
                <div class="chat-panel">
                    <div class="chat-header">
                        <span>{"Growth Assistant"}</span>
                        <button onclick={close} aria-label="Close Chat">{"✕"}</button>
                    </div>
                    <div class="chat-body">
                        <div class="chat-bubble">{ GREETING }</div>
                        if !state.response.is_empty() {
                            <div class="chat-bubble reply">{ state.response.clone() }</div>
                        }
                        if state.is_loading {
                            <div class="chat-loading">{ LOADING_TEXT }</div>
                        }
                    </div>
                    <div class="chat-input-row">
                        <input
                            type="text"
                            placeholder="Ask about our ROI..."
                            value={state.query.clone()}
                            oninput={on_input}
                            onkeydown={on_keydown}
                        />
                        <button class="chat-send" onclick={on_send} aria-label="Send">{"↗"}</button>
                    </div>
                </div>
            }
            <button class="chat-toggle" onclick={toggle} aria-label="Toggle Growth Assistant">
                {"💬"}
            </button>
        </div>
    }
}
