use yew::prelude::*;

use crate::catalog::WHY_CHOOSE_US;
use crate::components::section_header::SectionHeader;

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section class="page-section dark">
            <div class="container">
                <SectionHeader
                    title="Why Choose Us"
                    subtitle="We build infrastructures that scale with your ambition."
                    centered=true
                />
                <div class="card-grid three">
                    { for WHY_CHOOSE_US.iter().map(|reason| html! {
                        <div key={reason.title} class="trust-item">
                            <div class="trust-icon">{ reason.icon.glyph() }</div>
                            <div>
                                <h4>{ reason.title }</h4>
                                <p>{ reason.description }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .trust-item {
                    display: flex;
                    gap: 1.5rem;
                    padding: 1.5rem;
                    border-radius: 24px;
                    border: 1px solid transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                }
                .trust-item:hover {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .trust-icon {
                    font-size: 1.5rem;
                    margin-top: 0.25rem;
                    transition: transform 0.3s ease;
                }
                .trust-item:hover .trust-icon {
                    transform: scale(1.1);
                }
                .trust-item h4 {
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }
                .trust-item p {
                    color: #94a3b8;
                    font-size: 0.9rem;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
