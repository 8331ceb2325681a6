use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, MouseEvent, ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use crate::config::{self, ScrollThresholds};
use crate::handoff;
use crate::scroll_tracker::{active_label, NavLabel, ScrollMetrics};

fn measure_active_label(window: &Window, document: &Document) -> Option<NavLabel> {
    let root = document.document_element()?;
    let metrics = ScrollMetrics {
        scroll_top: window.scroll_y().ok()?,
        scroll_height: f64::from(root.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    };
    Some(active_label(metrics, &ScrollThresholds::default(), |section| {
        document
            .get_element_by_id(section.dom_id())
            .map(|element| element.get_bounding_client_rect().top())
    }))
}

/// Smoothly scrolls so the element's top lands just under the fixed navbar.
pub fn scroll_to_section(dom_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(dom_id)) else {
        warn!("No section with id {} on the page", dom_id);
        return;
    };
    let top = element.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0)
        - ScrollThresholds::default().header_offset;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| NavLabel::Home);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("navbar mounted without a window");
                let document = window.document().expect("navbar mounted without a document");

                let recompute = {
                    let window = window.clone();
                    let last_label = Cell::new(NavLabel::Home);
                    Rc::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > config::NAV_SCROLLED_AFTER_PX);
                        if let Some(label) = measure_active_label(&window, &document) {
                            if last_label.replace(label) != label {
                                debug!("active section -> {}", label);
                            }
                            active.set(label);
                        }
                    })
                };

                let scroll_callback = {
                    let recompute = recompute.clone();
                    Closure::<dyn Fn()>::new(move || recompute())
                };
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    warn!("Could not attach scroll listener: {:?}", e);
                }

                // First measurement once the sections have laid out.
                let initial = Timeout::new(config::INITIAL_MEASURE_DELAY_MS, move || recompute());

                move || {
                    drop(initial);
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let nav_entry = |label: NavLabel, class: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(label.target().dom_id());
        });
        html! {
            <button
                key={label.as_str()}
                class={classes!(class, (*active == label).then(|| "active"))}
                {onclick}
            >
                {label.title()}
            </button>
        }
    };

    let open_whatsapp = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            handoff::open_in_new_context(&handoff::whatsapp_chat());
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 56px;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(4px);
                    transition: all 0.2s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    color: #1a1a1a;
                }
                .nav-logo img {
                    width: 32px;
                    height: 32px;
                    object-fit: contain;
                }
                .nav-links {
                    display: flex;
                    gap: 1.25rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    padding: 0.25rem 0;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #6b7280;
                    cursor: pointer;
                    position: relative;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #0066cc;
                }
                .nav-link.active::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: -2px;
                    height: 2px;
                    border-radius: 999px;
                    background: #0066cc;
                }
                .nav-cta {
                    display: flex;
                    gap: 0.5rem;
                }
                .nav-call,
                .nav-whatsapp {
                    border-radius: 6px;
                    padding: 0.35rem 0.75rem;
                    font-size: 0.75rem;
                    cursor: pointer;
                    text-decoration: none;
                }
                .nav-call {
                    color: #1a1a1a;
                }
                .nav-whatsapp {
                    border: none;
                    background: #25D366;
                    color: white;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 20px;
                    height: 2px;
                    margin: 4px 0;
                    background: #1a1a1a;
                }
                .mobile-menu {
                    display: none;
                }
                @media (max-width: 1024px) {
                    .nav-links,
                    .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu.open {
                        display: block;
                        background: white;
                        border-top: 1px solid #e5e7eb;
                        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
                        padding: 0.75rem 1rem;
                    }
                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        background: none;
                        border: none;
                        border-radius: 8px;
                        padding: 0.65rem 0.75rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .mobile-link.active {
                        color: #0066cc;
                        background: rgba(0, 102, 204, 0.1);
                    }
                    .mobile-cta {
                        display: flex;
                        gap: 0.5rem;
                        padding-top: 0.5rem;
                    }
                    .mobile-cta > * {
                        flex: 1;
                        text-align: center;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src="/assets/logo.png" alt="CTS Logo" />
                    <span>{config::BUSINESS_NAME}</span>
                </div>
                <div class="nav-links">
                    { for NavLabel::ALL.iter().map(|label| nav_entry(*label, "nav-link")) }
                </div>
                <div class="nav-cta">
                    <a class="nav-call" href={handoff::tel_link()}>{"📞 Call"}</a>
                    <button class="nav-whatsapp" onclick={open_whatsapp.clone()}>{"💬 WhatsApp"}</button>
                </div>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for NavLabel::ALL.iter().map(|label| nav_entry(*label, "mobile-link")) }
                <div class="mobile-cta">
                    <a class="nav-call" href={handoff::tel_link()} onclick={close_menu}>{"📞 Call"}</a>
                    <button class="nav-whatsapp" onclick={open_whatsapp}>{"💬 WhatsApp"}</button>
                </div>
            </div>
        </nav>
    }
}
