use yew::prelude::*;

use crate::catalog::{PricingPlan, PRICING_PLANS};
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::components::section_header::SectionHeader;

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: &'static PricingPlan,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let (node, visible) = use_reveal();
    let plan = props.plan;

    html! {
        <div ref={node} class={classes!(reveal_classes("plan-card", visible), plan.recommended.then_some("recommended"))}>
            if plan.recommended {
                <div class="plan-badge">{"Most Popular"}</div>
            }
            <h4>{ plan.name }</h4>
            <div class="plan-price">
                { plan.price }
                <span class="plan-period">{" /mo"}</span>
            </div>
            <p class="plan-description">{ plan.description }</p>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li key={*feature}><span class="plan-check">{"✓"}</span>{ *feature }</li>
                }) }
            </ul>
            <a href="#contact" class={classes!("plan-select", plan.recommended.then_some("primary"))}>
                { format!("Select {}", plan.name) }
            </a>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="page-section dark">
            <div class="container">
                <SectionHeader
                    title="Transparent Packages"
                    subtitle="Simple, results-based pricing for different growth stages."
                    centered=true
                />
                <div class="card-grid three narrow">
                    { for PRICING_PLANS.iter().map(|plan| html! {
                        <PlanCard key={plan.name} {plan} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .plan-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                }
                .plan-card.recommended {
                    border-color: #ccff00;
                    background: rgba(204, 255, 0, 0.05);
                }
                .plan-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #ccff00;
                    color: #000;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    white-space: nowrap;
                }
                .plan-card h4 {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .plan-price {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 1rem;
                }
                .plan-period {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #64748b;
                }
                .plan-description {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    margin-bottom: 2rem;
                }
                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2.5rem;
                    flex: 1;
                }
                .plan-features li {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: #cbd5e1;
                    margin-bottom: 1rem;
                }
                .plan-check {
                    color: #ccff00;
                }
                .plan-select {
                    display: block;
                    text-align: center;
                    text-decoration: none;
                    padding: 1rem;
                    border-radius: 12px;
                    font-weight: 700;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                    transition: background 0.3s ease;
                }
                .plan-select:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .plan-select.primary {
                    background: #ccff00;
                    color: #000;
                }
                .plan-select.primary:hover {
                    background: #b3e600;
                }
                "#}
            </style>
        </section>
    }
}
