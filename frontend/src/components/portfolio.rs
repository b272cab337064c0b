use yew::prelude::*;

use crate::catalog::{PortfolioCase, ResultMetric, Trend, PORTFOLIO};
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::components::section_header::SectionHeader;

#[derive(Properties, PartialEq)]
struct CaseCardProps {
    case: &'static PortfolioCase,
}

fn render_metric(metric: &ResultMetric) -> Html {
    html! {
        <div key={metric.label} class="case-metric glass-card">
            <div class="case-metric-label">{ metric.label }</div>
            <div class="case-metric-value">
                { metric.value }
                if metric.trend == Trend::Up {
                    <span class="trend-up" aria-label="trending up">{"↗"}</span>
                }
            </div>
        </div>
    }
}

#[function_component(CaseCard)]
fn case_card(props: &CaseCardProps) -> Html {
    let (node, visible) = use_reveal();
    let case = props.case;

    html! {
        <div ref={node} class={reveal_classes("case-card", visible)}>
            <div class="case-image">
                <img src={case.image} alt={case.title} loading="lazy" />
                <div class="case-overlay"></div>
                <div class="case-caption">
                    <div class="case-category">{ case.category }</div>
                    <h4>{ case.title }</h4>
                    <div class="case-client">{ case.client }</div>
                </div>
            </div>
            <div class="case-metrics">
                { for case.results.iter().map(render_metric) }
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <section id="portfolio" class="page-section darker">
            <div class="container">
                <div class="portfolio-heading">
                    <SectionHeader title="Case Studies" subtitle="Tangible results for world-class brands." />
                    <a href="#portfolio" class="explore-link">{"Explore All Work ↗"}</a>
                </div>
                <div class="card-grid three">
                    { for PORTFOLIO.iter().map(|case| html! {
                        <CaseCard key={case.id} {case} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .portfolio-heading {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 2rem;
                    flex-wrap: wrap;
                }
                .explore-link {
                    color: #ccff00;
                    font-weight: 700;
                    font-size: 1.1rem;
                    text-decoration: none;
                    margin-bottom: 4rem;
                    transition: letter-spacing 0.3s ease;
                }
                .explore-link:hover {
                    letter-spacing: 0.05em;
                }
                .case-card {
                    cursor: pointer;
                    transition: opacity 0.6s ease, transform 0.4s ease;
                }
                .case-card.visible:hover {
                    transform: translateY(-10px);
                }
                .case-image {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    border-radius: 24px;
                    overflow: hidden;
                    margin-bottom: 1.5rem;
                }
                .case-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1);
                    transition: transform 0.7s ease, filter 0.7s ease;
                }
                .case-card:hover .case-image img {
                    transform: scale(1.1);
                    filter: grayscale(0);
                }
                .case-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.2), transparent);
                    opacity: 0.8;
                }
                .case-caption {
                    position: absolute;
                    left: 1.5rem;
                    right: 1.5rem;
                    bottom: 1.5rem;
                }
                .case-category {
                    font-size: 0.75rem;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #ccff00;
                    margin-bottom: 0.5rem;
                }
                .case-caption h4 {
                    font-size: 1.5rem;
                    color: #fff;
                }
                .case-client {
                    color: #94a3b8;
                    font-size: 0.85rem;
                }
                .case-metrics {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .case-metric {
                    padding: 1rem;
                    border-radius: 16px;
                }
                .case-metric-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #94a3b8;
                    margin-bottom: 0.25rem;
                }
                .case-metric-value {
                    font-size: 1.5rem;
                    font-weight: 900;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .trend-up {
                    color: #ccff00;
                    font-size: 1rem;
                }
                "#}
            </style>
        </section>
    }
}
