use yew::prelude::*;

use crate::config;

const MILESTONES: [(&str, &str, &str); 6] = [
    ("2018", "Started Operations", "Launched in Pune city"),
    ("2019", "200+ Customers", "Expanded coverage"),
    ("2020", "GST Registered", "Proper tax registration"),
    ("2021", "PCMC Expansion", "Serving Pimpri-Chinchwad"),
    ("2023", "3,000+ Units", "Major milestone"),
    ("2024", "AMC Launch", "Maintenance contracts"),
];

const VALUES: [(&str, &str, &str); 3] = [
    ("🏅", "Quality First", "We double-check work before leaving."),
    ("👥", "Customer Focused", "We match your timing and explain options."),
    ("🛡", "Transparency", "We share pricing before starting."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="page-section">
            <style>
                {r#"
                .about-story {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    align-items: center;
                    max-width: 1024px;
                    margin: 0 auto 2.5rem;
                }
                .about-story p {
                    font-size: 0.875rem;
                    color: #6b7280;
                    line-height: 1.7;
                }
                .about-story img {
                    width: 100%;
                    height: 224px;
                    object-fit: cover;
                    border-radius: 12px;
                }
                .timeline {
                    display: grid;
                    grid-template-columns: repeat(6, 1fr);
                    gap: 0.5rem;
                    max-width: 896px;
                    margin: 0 auto 2.5rem;
                    text-align: center;
                }
                .milestone-year {
                    width: 32px;
                    height: 32px;
                    margin: 0 auto 0.5rem;
                    border-radius: 50%;
                    background: #0066cc;
                    color: white;
                    font-size: 0.65rem;
                    font-weight: 700;
                    line-height: 32px;
                }
                .milestone h4 {
                    margin: 0;
                    font-size: 0.75rem;
                }
                .milestone p,
                .value-card p {
                    margin: 0;
                    font-size: 0.7rem;
                    color: #6b7280;
                }
                .values {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                    max-width: 768px;
                    margin: 0 auto;
                }
                .value-card {
                    text-align: center;
                    padding: 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 10px;
                }
                @media (max-width: 768px) {
                    .about-story,
                    .values {
                        grid-template-columns: 1fr;
                    }
                    .timeline {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
            <div class="section-header">
                <h2 class="section-heading">{"About "}<span class="accent">{config::BUSINESS_NAME}</span></h2>
                <p class="section-subheading">{"Proprietor: "}<strong>{config::PROPRIETOR}</strong></p>
            </div>
            <div class="about-story">
                <div>
                    <h3>{"Our Story"}</h3>
                    <p>
                        {"We've been providing AC services in Pune and PCMC since 2018. Started as a small team, now serviced 3,000+ units across homes, shops, and offices."}
                    </p>
                    <p>
                        {"Expect on-time arrival, neat work, clear communication, and fair pricing with no surprises. We treat every customer's AC like our own."}
                    </p>
                </div>
                <img src="/assets/team.jpg" alt={format!("{} team", config::BUSINESS_NAME)} loading="lazy" />
            </div>
            <h3 class="centered">{"Our Journey"}</h3>
            <div class="timeline">
                { for MILESTONES.iter().map(|(year, title, desc)| html! {
                    <div class="milestone" key={*year}>
                        <div class="milestone-year">{&year[2..]}</div>
                        <h4>{*title}</h4>
                        <p>{*desc}</p>
                    </div>
                }) }
            </div>
            <h3 class="centered">{"Our Core Values"}</h3>
            <div class="values">
                { for VALUES.iter().map(|(icon, title, desc)| html! {
                    <div class="value-card" key={*title}>
                        <div aria-hidden="true">{*icon}</div>
                        <h4>{*title}</h4>
                        <p>{*desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
