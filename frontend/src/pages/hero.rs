use yew::prelude::*;

use crate::config;
use crate::handoff;

const FEATURES: [(&str, &str, &str); 4] = [
    ("✔", "Experienced Technicians", "Skilled professionals"),
    ("👥", "Trusted by Customers", "Pune & PCMC coverage"),
    ("⏱", "Same/Next-Day Service", "Quick response"),
    ("₹", "Transparent Pricing", "No hidden charges"),
];

fn whatsapp_button(message: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| handoff::open_whatsapp(message))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero" aria-labelledby="hero-heading">
            <style>
                {r#"
                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .hero h1 {
                    font-size: 2.25rem;
                    line-height: 1.2;
                    margin: 0 0 0.75rem;
                }
                .hero-subtitle {
                    font-size: 1.1rem;
                    color: #6b7280;
                }
                .trust-line {
                    border-left: 4px solid #0066cc;
                    background: rgba(243, 244, 246, 0.5);
                    padding: 0.4rem 0.75rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .hero-features {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    padding-top: 0.5rem;
                }
                .hero-feature {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.6rem;
                    border-radius: 8px;
                    background: white;
                    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
                }
                .hero-feature strong {
                    display: block;
                    font-size: 0.75rem;
                }
                .hero-feature span {
                    font-size: 0.65rem;
                    color: #6b7280;
                }
                .hero-cta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    padding-top: 0.75rem;
                }
                .hero-image {
                    width: 100%;
                    height: 380px;
                    object-fit: cover;
                    border-radius: 12px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero-image {
                        height: 208px;
                        order: -1;
                    }
                    .hero h1 {
                        font-size: 1.6rem;
                    }
                }
                "#}
            </style>
            <div class="hero-grid">
                <div>
                    <h1 id="hero-heading">{"Fast, Reliable AC Service in Pune & PCMC"}</h1>
                    <p class="hero-subtitle">{"Professional AC servicing, repair, and maintenance since 2018"}</p>
                    <p class="trust-line">{format!("7+ years • 3,000+ AC units • GSTIN: {}", config::GSTIN)}</p>
                    <div class="hero-features">
                        { for FEATURES.iter().map(|(icon, title, description)| html! {
                            <div class="hero-feature" key={*title}>
                                <div class="feature-icon" aria-hidden="true">{*icon}</div>
                                <div>
                                    <strong>{*title}</strong>
                                    <span>{*description}</span>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="hero-cta">
                        <button
                            class="btn-primary"
                            aria-label="Book AC service via WhatsApp"
                            onclick={whatsapp_button("Hi! I'd like to book a service.")}
                        >
                            {"Book Service Now"}
                        </button>
                        <button
                            class="btn-outline btn-success"
                            aria-label="Contact us on WhatsApp"
                            onclick={whatsapp_button("Hi! I'd like to know more about your services.")}
                        >
                            {"💬 WhatsApp"}
                        </button>
                        <a class="btn-outline" href={handoff::tel_link()} aria-label={format!("Call us at {}", config::PHONE_DISPLAY)}>
                            {"📞 Call"}
                        </a>
                    </div>
                </div>
                <img
                    class="hero-image"
                    src="/assets/hero-ac.jpg"
                    alt="Expert AC technician performing maintenance service in Pune"
                    loading="eager"
                />
            </div>
        </section>
    }
}
