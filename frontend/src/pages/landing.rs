use yew::prelude::*;

use crate::catalog::HERO_STATS;
use crate::components::chat_widget::ChatWidget;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::portfolio::Portfolio;
use crate::components::pricing::Pricing;
use crate::components::process::Process;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;
use crate::components::trust::WhyChooseUs;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header id="about" class="hero">
            <div class="glow glow-right"></div>
            <div class="glow glow-left"></div>
            <div class="container hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">{"NEXT GEN MARKETING"}</div>
                    <h1>
                        {"SCALING "}<span class="hero-highlight">{"BRANDS"}</span>{" WITH DATA."}
                    </h1>
                    <p class="hero-subtitle">
                        {"We help high-ticket businesses and e-commerce brands explode their revenue using performance ads, precision content & conversion-optimized systems."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#portfolio" class="hero-cta">{"View Portfolio ›"}</a>
                        <a href="#contact" class="hero-secondary glass-card">{"Let's Talk"}</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-image">
                        <img src="https://picsum.photos/seed/agency/800/1000" alt="Grow Next Gen Team" />
                        <div class="hero-image-shade"></div>
                    </div>
                    { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div key={stat.caption} class={classes!("hero-stat", "glass-card", if i == 0 { "bottom-left" } else { "top-right" })}>
                            <div class="hero-stat-value">{ stat.value }</div>
                            <div class="hero-stat-caption">{ stat.caption }</div>
                        </div>
                    }) }
                </div>
            </div>
        </header>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <ChatWidget />
            <Hero />
            <Services />
            <Portfolio />
            <WhyChooseUs />
            <Process />
            <Pricing />
            <Testimonials />
            <Contact />
            <Footer />
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }
                body {
                    margin: 0;
                    background: #050505;
                    color: #fff;
                    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                h1, h2, h3, h4, .brand-logo {
                    font-family: Montserrat, Inter, sans-serif;
                    margin: 0;
                }
                html {
                    scroll-behavior: smooth;
                }
                .landing-page {
                    min-height: 100vh;
                    position: relative;
                    overflow-x: hidden;
                }
                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .page-section {
                    padding: 6rem 0;
                }
                .page-section.dark {
                    background: #000;
                }
                .page-section.darker {
                    background: #09090b;
                }
                .glass-card {
                    background: rgba(255, 255, 255, 0.03);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .card-grid {
                    display: grid;
                    gap: 2rem;
                }
                .card-grid.three {
                    grid-template-columns: repeat(3, 1fr);
                }
                .card-grid.two {
                    grid-template-columns: repeat(2, 1fr);
                }
                .card-grid.narrow {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(120px);
                    pointer-events: none;
                }
                .brand-logo {
                    font-size: 1.5rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    color: #fff;
                }
                .brand-logo .accent {
                    color: #ccff00;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .section-header {
                    margin-bottom: 4rem;
                }
                .section-header.centered {
                    text-align: center;
                }
                .section-header h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin-bottom: 1rem;
                }
                .section-subtitle {
                    color: #94a3b8;
                    font-size: 1.125rem;
                    max-width: 42rem;
                }
                .section-header.centered .section-subtitle {
                    margin: 0 auto;
                }
                .section-rule {
                    margin-top: 1rem;
                    height: 4px;
                    width: 5rem;
                    background: #ccff00;
                }
                .section-header.centered .section-rule {
                    margin-left: auto;
                    margin-right: auto;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }
                .glow-right {
                    top: 25%;
                    right: -5rem;
                    width: 600px;
                    height: 600px;
                    background: rgba(204, 255, 0, 0.1);
                }
                .glow-left {
                    bottom: -5rem;
                    left: -5rem;
                    width: 500px;
                    height: 500px;
                    background: rgba(59, 130, 246, 0.1);
                }
                .hero-grid {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy {
                    animation: slide-in-left 0.8s ease-out;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    color: #ccff00;
                    background: rgba(204, 255, 0, 0.1);
                    border: 1px solid rgba(204, 255, 0, 0.3);
                }
                .hero h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    line-height: 1.1;
                    letter-spacing: -0.05em;
                    margin-bottom: 2rem;
                }
                .hero-highlight {
                    background: linear-gradient(to right, #fff, #fff, #ccff00);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #94a3b8;
                    max-width: 32rem;
                    line-height: 1.6;
                    margin-bottom: 2.5rem;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-cta,
                .hero-secondary {
                    padding: 1rem 2rem;
                    border-radius: 12px;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .hero-cta {
                    background: #ccff00;
                    color: #000;
                    box-shadow: 0 10px 15px rgba(204, 255, 0, 0.1);
                }
                .hero-cta:hover {
                    background: #b3e600;
                }
                .hero-secondary {
                    color: #fff;
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .hero-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .hero-visual {
                    position: relative;
                    animation: settle 1s ease-out 0.2s both;
                }
                .hero-image {
                    position: relative;
                    z-index: 1;
                    border-radius: 24px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .hero-image img {
                    display: block;
                    width: 100%;
                    filter: grayscale(1);
                    transition: filter 0.7s ease, transform 0.7s ease;
                }
                .hero-image img:hover {
                    filter: grayscale(0);
                    transform: scale(1.05);
                }
                .hero-image-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, transparent, transparent);
                    opacity: 0.6;
                    pointer-events: none;
                }
                .hero-stat {
                    position: absolute;
                    z-index: 2;
                    padding: 1.5rem;
                    border-radius: 16px;
                }
                .hero-stat.bottom-left {
                    bottom: -1.5rem;
                    left: -1.5rem;
                    animation: float 4s ease-in-out infinite;
                }
                .hero-stat.top-right {
                    top: -1.5rem;
                    right: -1.5rem;
                    animation: float 5s ease-in-out 1s infinite reverse;
                }
                .hero-stat-value {
                    font-family: Montserrat, Inter, sans-serif;
                    font-size: 1.875rem;
                    font-weight: 900;
                    color: #ccff00;
                }
                .hero-stat-caption {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #94a3b8;
                }

                @keyframes slide-in-left {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes settle {
                    from { opacity: 0; transform: scale(0.8) rotate(5deg); }
                    to { opacity: 1; transform: scale(1) rotate(0); }
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                @keyframes chat-pop {
                    from { opacity: 0; transform: scale(0.9) translateY(20px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }

                @media (max-width: 1024px) {
                    .hero-grid,
                    .card-grid.three {
                        grid-template-columns: 1fr 1fr;
                    }
                    .hero h1 {
                        font-size: 4rem;
                    }
                }
                @media (max-width: 768px) {
                    .hero-grid,
                    .card-grid.three,
                    .card-grid.two {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 3.75rem;
                    }
                    .section-header h2 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
