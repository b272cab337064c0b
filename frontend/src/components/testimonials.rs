use yew::prelude::*;

use crate::catalog::{filled_stars, Testimonial, TESTIMONIALS};
use crate::components::section_header::SectionHeader;

fn render_stars(rating: u8) -> Html {
    let filled = filled_stars(rating);
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", filled)}>
            { for (0..5).map(|i| html! {
                <span key={i} class={classes!("star", (i < filled).then_some("filled"))}>{"★"}</span>
            }) }
        </div>
    }
}

fn render_testimonial(t: &Testimonial) -> Html {
    html! {
        <div key={t.id} class="testimonial glass-card">
            { render_stars(t.rating) }
            <p class="testimonial-quote">{ format!("\"{}\"", t.content) }</p>
            <div class="testimonial-author">
                <img src={t.image} alt={t.name} />
                <div>
                    <div class="testimonial-name">{ t.name }</div>
                    <div class="testimonial-role">{ format!("{}, {}", t.role, t.company) }</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="page-section darker">
            <div class="container">
                <SectionHeader title="What Our Clients Say" centered=true />
                <div class="card-grid two narrow">
                    { for TESTIMONIALS.iter().map(render_testimonial) }
                </div>
            </div>
            <style>
                {r#"
                .testimonial {
                    padding: 2.5rem;
                    border-radius: 24px;
                }
                .stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1.5rem;
                }
                .star {
                    color: rgba(255, 255, 255, 0.15);
                }
                .star.filled {
                    color: #ccff00;
                }
                .testimonial-quote {
                    font-size: 1.125rem;
                    font-style: italic;
                    color: #e2e8f0;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-author img {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    border: 2px solid rgba(204, 255, 0, 0.2);
                }
                .testimonial-name {
                    font-weight: 700;
                }
                .testimonial-role {
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                "#}
            </style>
        </section>
    }
}
