use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::catalog::{RevenueBracket, CONTACT_CHANNELS};
use crate::components::reveal::{reveal_classes, use_reveal};
use crate::components::section_header::SectionHeader;

#[function_component(ContactForm)]
fn contact_form() -> Html {
    let (node, visible) = use_reveal();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let bracket = use_state(RevenueBracket::default);
    let message = use_state(String::new);

    // Delivery is not wired up yet, so submitting only keeps the page in place.
    let onsubmit = {
        let bracket = bracket.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Contact form submitted ({}), no delivery configured", bracket.label());
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_bracket = {
        let bracket = bracket.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(selected) = RevenueBracket::from_value(&select.value()) {
                bracket.set(selected);
            }
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    html! {
        <div ref={node} class={reveal_classes("contact-card glass-card from-right", visible)}>
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-field">
                        <label for="contact-name">{"Name"}</label>
                        <input id="contact-name" type="text" placeholder="John Doe"
                            value={(*name).clone()} oninput={on_name} />
                    </div>
                    <div class="form-field">
                        <label for="contact-email">{"Email"}</label>
                        <input id="contact-email" type="email" placeholder="john@company.com"
                            value={(*email).clone()} oninput={on_email} />
                    </div>
                </div>
                <div class="form-field">
                    <label for="contact-revenue">{"Current Monthly Revenue"}</label>
                    <select id="contact-revenue" onchange={on_bracket}>
                        { for RevenueBracket::ALL.iter().map(|option| html! {
                            <option
                                key={option.value()}
                                value={option.value()}
                                selected={*option == *bracket}
                            >
                                { option.label() }
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-field">
                    <label for="contact-message">{"Message"}</label>
                    <textarea id="contact-message" rows="4" placeholder="How can we help you grow?"
                        value={(*message).clone()} oninput={on_message} />
                </div>
                <button type="submit" class="contact-submit">{"Send Message ↗"}</button>
            </form>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="page-section dark contact-section">
            <div class="glow glow-contact"></div>
            <div class="container contact-grid">
                <div>
                    <SectionHeader
                        title="Ready to Scale?"
                        subtitle="Book a free strategy call or send us a message to see if we're a fit."
                    />
                    <div class="contact-channels">
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <div key={channel.label} class="contact-channel">
                                <div class="contact-channel-icon">{ channel.icon.glyph() }</div>
                                <div>
                                    <div class="contact-channel-label">{ channel.label }</div>
                                    {
                                        match channel.href {
                                            Some(href) => html! { <a class="contact-channel-value" {href}>{ channel.value }</a> },
                                            None => html! { <div class="contact-channel-value">{ channel.value }</div> },
                                        }
                                    }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <ContactForm />
            </div>
            <style>
                {r#"
                .contact-section {
                    position: relative;
                    overflow: hidden;
                }
                .glow-contact {
                    bottom: 0;
                    right: 0;
                    width: 600px;
                    height: 600px;
                    background: rgba(204, 255, 0, 0.05);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                    position: relative;
                    z-index: 1;
                }
                .contact-channels {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .contact-channel {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .contact-channel-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 16px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.05);
                    transition: background 0.3s ease;
                }
                .contact-channel:hover .contact-channel-icon {
                    background: #ccff00;
                }
                .contact-channel-label {
                    font-size: 0.875rem;
                    color: #64748b;
                    text-transform: uppercase;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    margin-bottom: 0.25rem;
                }
                .contact-channel-value {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .contact-card {
                    padding: 2.5rem;
                    border-radius: 40px;
                }
                .contact-card.reveal.from-right {
                    transform: translateX(50px);
                }
                .contact-card.reveal.visible {
                    transform: translateX(0);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-field label {
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #94a3b8;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font: inherit;
                    transition: border-color 0.3s ease;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #ccff00;
                }
                .contact-submit {
                    width: 100%;
                    padding: 1.25rem;
                    border: none;
                    border-radius: 12px;
                    background: #ccff00;
                    color: #000;
                    font-size: 1.125rem;
                    font-weight: 900;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .contact-submit:hover {
                    background: #b3e600;
                }
                @media (max-width: 1024px) {
                    .contact-grid,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
