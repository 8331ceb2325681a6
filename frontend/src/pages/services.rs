use yew::prelude::*;

use crate::booking::Service;
use crate::components::navbar::scroll_to_section;

struct ServiceCard {
    tagline: &'static str,
    price: &'static str,
    highlights: [&'static str; 3],
    tint: &'static str,
}

struct ServiceDetail {
    description: &'static str,
    inclusions: [&'static str; 5],
}

fn card(service: Service) -> ServiceCard {
    match service {
        Service::Servicing => ServiceCard {
            tagline: "Regular maintenance for efficient cooling.",
            price: "₹399",
            highlights: ["Filter cleaning & wash", "Coil inspection", "Refrigerant check"],
            tint: "#eff6ff",
        },
        Service::DeepCleaning => ServiceCard {
            tagline: "Thorough cleaning for better hygiene.",
            price: "₹599",
            highlights: ["Internal cleaning", "Coil sanitization", "Anti-bacterial treatment"],
            tint: "#ecfeff",
        },
        Service::GasRefill => ServiceCard {
            tagline: "Leak check and proper gas charging.",
            price: "₹2,500",
            highlights: ["Leak detection", "R32/R410A refill", "Pressure testing"],
            tint: "#f0fdfa",
        },
        Service::Repair => ServiceCard {
            tagline: "Fault finding for all major brands.",
            price: "Based on issue",
            highlights: ["Compressor troubleshooting", "PCB repairs", "All brands"],
            tint: "#fffbeb",
        },
        Service::Installation => ServiceCard {
            tagline: "Proper mounting with testing.",
            price: "₹1,500",
            highlights: ["Professional mounting", "Copper piping", "Gas charging"],
            tint: "#faf5ff",
        },
        Service::AmcPlans => ServiceCard {
            tagline: "Scheduled visits & priority support.",
            price: "Custom",
            highlights: ["Scheduled maintenance", "Priority calls", "Discounted repairs"],
            tint: "#f0fdf4",
        },
    }
}

fn detail(service: Service) -> ServiceDetail {
    match service {
        Service::Servicing => ServiceDetail {
            description: "Regular maintenance to keep your AC cooling efficiently. We check refrigerant, clean filters, and ensure smooth operation.",
            inclusions: ["Filter cleaning and wash", "Condenser cleaning", "Gas pressure check", "Drain cleaning", "Performance test"],
        },
        Service::DeepCleaning => ServiceDetail {
            description: "Thorough internal cleaning removes dust and bacteria buildup, giving you fresh air and better cooling.",
            inclusions: ["Complete disassembly", "Jet cleaning of coils", "Blower wheel cleaning", "Anti-bacterial treatment", "Reassembly and test"],
        },
        Service::GasRefill => ServiceDetail {
            description: "If your AC runs but doesn't cool, it may be low on gas. We check for leaks, fix them, and refill properly.",
            inclusions: ["Leak detection", "Leak repair", "R32/R410A gas refill", "Pressure balancing", "30-day warranty"],
        },
        Service::Repair => ServiceDetail {
            description: "On-site diagnosis and repair for all major brands including LG, Samsung, Daikin, Voltas, Blue Star.",
            inclusions: ["Fault diagnosis", "Compressor repair", "PCB troubleshooting", "Sensor replacement", "Electrical fixes"],
        },
        Service::Installation => ServiceDetail {
            description: "Proper installation with right copper piping, secure mounting, and gas charging for efficiency.",
            inclusions: ["Wall mounting", "Outdoor unit placement", "Copper pipe (3m included)", "Electrical wiring", "Gas charging & test"],
        },
        Service::AmcPlans => ServiceDetail {
            description: "Annual contracts for homes, shops, or offices with scheduled servicing and priority support.",
            inclusions: ["2-4 scheduled visits", "Priority booking", "Discounted repairs", "No service charges", "Dedicated technician"],
        },
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="page-section">
            <style>
                {r#"
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    max-width: 1024px;
                    margin: 0 auto;
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    padding: 1rem;
                    border-radius: 10px;
                    border: 1px solid #e5e7eb;
                    cursor: pointer;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .service-card:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.08);
                }
                .service-card h3 {
                    margin: 0;
                    font-size: 1rem;
                }
                .service-tagline,
                .service-from {
                    font-size: 0.75rem;
                    color: #6b7280;
                    margin: 0.15rem 0;
                }
                .service-price {
                    font-size: 1.1rem;
                    font-weight: 700;
                    color: #0066cc;
                    margin: 0 0 0.5rem;
                }
                .check-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 0.75rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                    flex-grow: 1;
                }
                .check-list li::before {
                    content: '✓ ';
                    color: #0066cc;
                }
                .learn-more {
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #0066cc;
                }
                @media (max-width: 1024px) {
                    .service-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .service-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-header">
                <h2 class="section-heading">{"Our Services"}</h2>
                <p class="section-subheading">{"Comprehensive AC solutions for Pune & PCMC"}</p>
            </div>
            <div class="service-grid">
                { for Service::ALL.iter().map(|service| {
                    let service = *service;
                    let info = card(service);
                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(service.slug()));
                    html! {
                        <div class="service-card" key={service.slug()} style={format!("background: {}", info.tint)} {onclick}>
                            <h3>{format!("{} {}", service.icon(), service.label())}</h3>
                            <p class="service-tagline">{info.tagline}</p>
                            <p class="service-from">{"Starting from"}</p>
                            <p class="service-price">{info.price}</p>
                            <ul class="check-list">
                                { for info.highlights.iter().map(|point| html! { <li>{*point}</li> }) }
                            </ul>
                            <span class="learn-more">{"Learn More →"}</span>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(ServiceDetails)]
pub fn service_details() -> Html {
    html! {
        <section id="service-details" class="page-section muted">
            <style>
                {r#"
                .detail-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    max-width: 1024px;
                    margin: 0 auto;
                }
                .detail-block {
                    padding: 1.25rem;
                    border-left: 4px solid #0066cc;
                    border-radius: 8px;
                    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.06);
                    scroll-margin-top: 80px;
                }
                .detail-block:nth-child(odd) {
                    background: white;
                }
                .detail-block h3 {
                    margin: 0 0 0.5rem;
                }
                .detail-block p {
                    font-size: 0.875rem;
                    color: #6b7280;
                    line-height: 1.6;
                }
                .detail-block h4 {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .detail-block .check-list {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.25rem 0.5rem;
                }
                .detail-note {
                    font-size: 0.65rem;
                    font-style: italic;
                    border-top: 1px solid #e5e7eb;
                    padding-top: 0.5rem;
                }
                @media (max-width: 768px) {
                    .detail-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-header">
                <h2 class="section-heading">{"Service Details"}</h2>
                <p class="section-subheading">{"What you can expect when you book"}</p>
            </div>
            <div class="detail-grid">
                { for Service::ALL.iter().map(|service| {
                    let info = detail(*service);
                    html! {
                        <div class="detail-block" id={service.slug()} key={service.slug()}>
                            <h3>{format!("{} {}", service.icon(), service.label())}</h3>
                            <p>{info.description}</p>
                            <h4>{"What's Included"}</h4>
                            <ul class="check-list">
                                { for info.inclusions.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                            <p class="detail-note">{"Spare parts and major repairs charged separately after approval."}</p>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
