use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::pages::{
    about::About,
    amc_plans::AmcPlans,
    faq::Faq,
    footer::Footer,
    gallery::GalleryTestimonials,
    hero::Hero,
    how_it_works::HowItWorks,
    service_area::ServiceArea,
    services::{ServiceDetails, Services},
};

#[function_component(Home)]
pub fn home() -> Html {
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        debug!("Home mounted");
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, sans-serif;
                    color: #1a1a1a;
                    background: #ffffff;
                }
                .landing-page {
                    padding-top: 56px;
                }
                .page-section {
                    padding: 3rem 1rem;
                    scroll-margin-top: 56px;
                }
                .page-section.muted {
                    background: #f5f7fa;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .section-heading {
                    font-size: 1.75rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }
                .section-subheading,
                .muted-text {
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin: 0;
                }
                .accent {
                    color: #0066cc;
                }
                .centered {
                    text-align: center;
                }
                .btn-primary,
                .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.4rem;
                    padding: 0.6rem 1.25rem;
                    border-radius: 8px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    cursor: pointer;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }
                .btn-primary {
                    border: none;
                    background: #0066cc;
                    color: white;
                }
                .btn-primary:hover {
                    background: #0052a3;
                }
                .btn-outline {
                    border: 1px solid #0066cc;
                    background: transparent;
                    color: #0066cc;
                }
                .btn-outline:hover {
                    background: rgba(0, 102, 204, 0.08);
                }
                .btn-success {
                    border: none;
                    border-radius: 8px;
                    padding: 0.6rem 1.25rem;
                    background: #25D366;
                    color: white;
                    cursor: pointer;
                }
                .btn-outline.btn-success {
                    border-color: #25D366;
                    background: transparent;
                    color: #25D366;
                }
                .booking-area {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    align-items: start;
                }
                .booking-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.25rem;
                    background: white;
                }
                @media (max-width: 1024px) {
                    .booking-area {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <Hero />
            <Services />
            <ServiceDetails />
            <HowItWorks />
            <AmcPlans />
            <GalleryTestimonials />
            <About />
            <Faq />
            <section id="booking" class="page-section">
                <div class="section-header">
                    <h2 class="section-heading">{"Book Your Service"}</h2>
                    <p class="section-subheading">{"Pick a slot and we'll confirm on WhatsApp"}</p>
                </div>
                <div class="booking-area">
                    <ServiceArea />
                    <div class="booking-card">
                        <h3>{"🗓 Book Your Service"}</h3>
                        <BookingForm />
                    </div>
                </div>
            </section>
            <Footer />
        </div>
    }
}
