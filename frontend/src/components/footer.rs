use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::logo::Logo;

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Services", "#services"),
    ("Portfolio", "#portfolio"),
    ("Privacy", "#privacy"),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[("Instagram", "IG"), ("Twitter", "X"), ("LinkedIn", "in")];

pub fn copyright_line(year: i32) -> String {
    format!(
        "© {} Grow Next Gen Digital Marketing. All rights reserved. Designed for scale.",
        year
    )
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <Logo class="footer-logo" />
                    <div class="footer-links">
                        { for FOOTER_LINKS.iter().map(|(label, href)| html! {
                            <a key={*label} href={*href}>{ *label }</a>
                        }) }
                    </div>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(label, short)| html! {
                            <div key={*label} class="social-button" aria-label={*label}>{ *short }</div>
                        }) }
                    </div>
                </div>
                <div class="footer-copyright">{ copyright_line(year) }</div>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 3rem 0;
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .footer-logo {
                    font-size: 1.875rem;
                }
                .footer-links {
                    display: flex;
                    gap: 2rem;
                }
                .footer-links a {
                    color: #64748b;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .footer-links a:hover {
                    color: #fff;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .social-button {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.8rem;
                    font-weight: 700;
                    background: rgba(255, 255, 255, 0.05);
                    cursor: pointer;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .social-button:hover {
                    background: #ccff00;
                    color: #000;
                }
                .footer-copyright {
                    text-align: center;
                    color: #475569;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Grow Next Gen Digital Marketing. All rights reserved. Designed for scale."
        );
    }
}
