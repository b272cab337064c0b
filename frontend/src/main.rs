use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_window_scroll;

mod catalog;
mod config;
mod assistant {
    pub mod ask;
    pub mod gemini;
    pub mod provider;
    pub mod state;
}
mod components {
    pub mod chat_widget;
    pub mod contact;
    pub mod footer;
    pub mod logo;
    pub mod portfolio;
    pub mod pricing;
    pub mod process;
    pub mod reveal;
    pub mod section_header;
    pub mod services;
    pub mod testimonials;
    pub mod trust;
}
mod pages {
    pub mod landing;
}

use catalog::NAV_SECTIONS;
use components::logo::Logo;
use pages::landing::Landing;

/// Scroll offset after which the navigation bar gets its solid background.
const NAV_SCROLL_THRESHOLD: f64 = 50.0;

fn section_anchor(section: &str) -> String {
    format!("#{}", section.to_lowercase())
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="container nav-content">
                <a href="#about" class="nav-logo"><Logo /></a>
                <div class="nav-links">
                    { for NAV_SECTIONS.iter().map(|section| html! {
                        <a key={*section} href={section_anchor(section)} class="nav-link">{ *section }</a>
                    }) }
                    <a href="#contact" class="nav-cta">{"Let's Talk"}</a>
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_SECTIONS.iter().chain(std::iter::once(&"Contact")).map(|section| html! {
                        <a key={*section} href={section_anchor(section)} onclick={close_menu.clone()}>
                            { *section }
                        </a>
                    }) }
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    text-decoration: none;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }
                .nav-link {
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #ccff00;
                }
                .nav-cta {
                    background: #ccff00;
                    color: #000;
                    padding: 0.6rem 1.5rem;
                    border-radius: 999px;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .nav-cta:hover {
                    background: #b3e600;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: #000;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .mobile-menu a {
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_point_at_section_ids() {
        let anchors: Vec<_> = NAV_SECTIONS.iter().map(|s| section_anchor(s)).collect();
        assert_eq!(anchors, ["#about", "#services", "#portfolio", "#process", "#pricing"]);
    }
}
