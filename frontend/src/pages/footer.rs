use yew::prelude::*;

use crate::components::navbar::scroll_to_section;
use crate::config;
use crate::handoff;
use crate::scroll_tracker::NavLabel;

#[function_component(Footer)]
pub fn footer() -> Html {
    let directions = Callback::from(|_: MouseEvent| handoff::open_in_new_context(config::DIRECTIONS_URL));

    let quick_link = |label: NavLabel| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section(label.target().dom_id());
        });
        html! {
            <li key={label.as_str()}>
                <a href={format!("#{}", label.target().dom_id())} {onclick}>{label.title()}</a>
            </li>
        }
    };

    html! {
        <footer id="contact" class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #1a1a1a;
                    color: #d1d5db;
                    padding: 3rem 1rem 1.5rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1.2fr 0.8fr 1fr 1.2fr;
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .site-footer h4 {
                    color: white;
                    margin: 0 0 0.75rem;
                }
                .site-footer p,
                .site-footer li {
                    font-size: 0.85rem;
                    line-height: 1.6;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .site-footer a {
                    color: #d1d5db;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: white;
                }
                .footer-map iframe {
                    width: 100%;
                    height: 160px;
                    border: 0;
                    border-radius: 8px;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 2rem auto 0;
                    padding-top: 1rem;
                    border-top: 1px solid #374151;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #9ca3af;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h4>{config::BUSINESS_NAME}</h4>
                    <p>{"Professional AC installation, servicing and repair for homes, shops and offices across Pune & PCMC."}</p>
                    <p>{format!("GSTIN: {}", config::GSTIN)}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for NavLabel::ALL.iter().map(|label| quick_link(*label)) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li>{format!("📍 {}", config::POSTAL_ADDRESS)}</li>
                        <li><a href={handoff::tel_link()}>{format!("📞 {}", config::PHONE_DISPLAY)}</a></li>
                        <li><a href={handoff::mailto_link()}>{format!("✉ {}", config::EMAIL)}</a></li>
                        <li>{format!("🕘 {}", config::WORKING_HOURS)}</li>
                    </ul>
                </div>
                <div class="footer-map">
                    <h4>{"Find Us"}</h4>
                    <iframe
                        src={config::MAP_EMBED_URL}
                        title={format!("{} location", config::BUSINESS_NAME)}
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                    />
                    <button class="btn-outline" onclick={directions}>{"Get Directions ↗"}</button>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© 2025 {}. All rights reserved.", config::BUSINESS_NAME)}
            </div>
        </footer>
    }
}
