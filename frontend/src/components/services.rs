use yew::prelude::*;

use crate::catalog::{ServiceOffering, SERVICES};
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::components::section_header::SectionHeader;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static ServiceOffering,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let (node, visible) = use_reveal();
    let service = props.service;

    html! {
        <div
            ref={node}
            class={reveal_classes("service-card glass-card", visible)}
            style={format!("transition-delay: {:.1}s;", props.index as f64 * 0.1)}
        >
            <div class="service-icon">{ service.icon.glyph() }</div>
            <h3>{ service.title }</h3>
            <p>{ service.description }</p>
            <div class="service-tags">
                { for service.tags.iter().map(|tag| html! {
                    <span key={*tag} class="service-tag">{ *tag }</span>
                }) }
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="page-section dark">
            <div class="container">
                <SectionHeader
                    title="Core Services"
                    subtitle="Premium solutions designed to take your brand from established to market-leading."
                    centered=true
                />
                <div class="card-grid three">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <ServiceCard key={service.id} {service} {index} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .service-card {
                    padding: 2rem;
                    border-radius: 24px;
                    transition: border-color 0.3s ease, opacity 0.6s ease, transform 0.6s ease;
                }
                .service-card:hover {
                    border-color: rgba(204, 255, 0, 0.4);
                }
                .service-icon {
                    display: inline-block;
                    font-size: 2rem;
                    padding: 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.05);
                    transition: background 0.3s ease;
                }
                .service-card:hover .service-icon {
                    background: rgba(204, 255, 0, 0.1);
                }
                .service-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                    transition: color 0.3s ease;
                }
                .service-card:hover h3 {
                    color: #ccff00;
                }
                .service-card p {
                    color: #94a3b8;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .service-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .service-tag {
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    padding: 0.25rem 0.65rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #cbd5e1;
                }
                "#}
            </style>
        </section>
    }
}
