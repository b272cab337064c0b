use yew::prelude::*;

use crate::catalog::{ProcessStep, PROCESS_STEPS};
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::components::section_header::SectionHeader;

#[derive(Properties, PartialEq)]
struct StepCardProps {
    step: &'static ProcessStep,
    index: usize,
}

#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let (node, visible) = use_reveal();
    // Steps slide in from alternating sides
    let side = if props.index % 2 == 0 { "from-left" } else { "from-right" };

    html! {
        <div ref={node} class={classes!(reveal_classes("process-step glass-card", visible), side)}>
            <div class="process-number">{ props.step.step }</div>
            <div>
                <h4>{ props.step.title }</h4>
                <p>{ props.step.description }</p>
            </div>
        </div>
    }
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="page-section darker">
            <div class="container">
                <SectionHeader title="Our Growth Process" centered=true />
                <div class="process-list">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <StepCard key={step.step} {step} {index} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .process-list {
                    max-width: 56rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .process-step {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    padding: 2.5rem;
                    border-radius: 24px;
                }
                .process-step.reveal.from-left {
                    transform: translateX(-30px);
                }
                .process-step.reveal.from-right {
                    transform: translateX(30px);
                }
                .process-step.reveal.visible {
                    transform: translateX(0);
                }
                .process-number {
                    font-size: 3.75rem;
                    font-weight: 900;
                    color: #ccff00;
                    opacity: 0.2;
                }
                .process-step h4 {
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }
                .process-step p {
                    color: #94a3b8;
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .process-step {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
