use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::config;
use crate::handoff;

const PHOTOS: [(&str, &str, &str); 4] = [
    ("/assets/ac-cleaning.jpg", "AC deep cleaning", "Deep Cleaning"),
    ("/assets/ac-installation.jpg", "AC installation", "Installation"),
    ("/assets/ac-gas-check.jpg", "Gas refill", "Gas Refill"),
    ("/assets/ac-before-after.jpg", "Before & after", "Before/After"),
];

const COUNTED_STATS: [(u32, &str, &str); 3] = [(7, "+", "Years"), (10_000, "+", "AC Units"), (150, "+", "Reviews")];

struct Testimonial {
    text: &'static str,
    name: &'static str,
    area: &'static str,
    service: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        text: "Very happy with the service. Technician came on time and fixed the cooling issue quickly.",
        name: "Rajesh Kumar",
        area: "Aundh, Pune",
        service: "Split AC servicing",
    },
    Testimonial {
        text: "Good work and fair pricing. They explained what was wrong before starting. No hidden charges.",
        name: "Priya Sharma",
        area: "Pimpri",
        service: "Deep cleaning",
    },
    Testimonial {
        text: "Using their service for 2 years now. Reliable and affordable. They always pick up the call.",
        name: "Amit Desai",
        area: "Wakad",
        service: "AMC for office ACs",
    },
];

#[function_component(GalleryTestimonials)]
pub fn gallery_testimonials() -> Html {
    let open_reviews = Callback::from(|_: MouseEvent| handoff::open_in_new_context(config::REVIEWS_URL));

    html! {
        <section id="gallery" class="page-section muted">
            <style>
                {r#"
                .photo-grid,
                .stats-strip {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .photo {
                    position: relative;
                    overflow: hidden;
                    border-radius: 8px;
                    aspect-ratio: 4 / 3;
                }
                .photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s;
                }
                .photo:hover img {
                    transform: scale(1.1);
                }
                .photo span {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    font-weight: 600;
                    background: rgba(0, 0, 0, 0.4);
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .photo:hover span {
                    opacity: 1;
                }
                .stat {
                    background: white;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.25rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #0066cc;
                }
                .stat p {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .testimonials {
                    background: white;
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                }
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin-bottom: 1.25rem;
                    text-align: left;
                }
                .testimonial {
                    border: 1px solid #e5e7eb;
                    border-radius: 10px;
                    padding: 1rem;
                }
                .stars {
                    color: #fbbf24;
                }
                .testimonial-author {
                    border-top: 1px solid #e5e7eb;
                    padding-top: 0.5rem;
                    font-size: 0.75rem;
                }
                @media (max-width: 768px) {
                    .photo-grid,
                    .stats-strip {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .testimonial-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-header">
                <h2 class="section-heading">{"Our Work"}</h2>
                <p class="section-subheading">{"Actual photos from our jobs in Pune & PCMC"}</p>
            </div>
            <div class="photo-grid">
                { for PHOTOS.iter().map(|(src, alt, label)| html! {
                    <div class="photo" key={*label}>
                        <img src={*src} alt={*alt} loading="lazy" />
                        <span>{*label}</span>
                    </div>
                }) }
            </div>
            <div class="stats-strip">
                { for COUNTED_STATS.iter().map(|(value, suffix, label)| html! {
                    <div class="stat" key={*label}>
                        <div class="stat-value">
                            <AnimatedCounter value={*value} suffix={*suffix} />
                        </div>
                        <p>{*label}</p>
                    </div>
                }) }
                <div class="stat">
                    <div class="stat-value">{"4.8/5"}</div>
                    <p>{"Rating"}</p>
                </div>
            </div>
            <div class="testimonials">
                <h3>{"What Our Customers Say"}</h3>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="testimonial" key={t.name}>
                            <div class="stars">{"★★★★★"}</div>
                            <p>{format!("\"{}\"", t.text)}</p>
                            <div class="testimonial-author">
                                <strong>{format!("{} · {}", t.name, t.area)}</strong>
                                <div>{t.service}</div>
                            </div>
                        </div>
                    }) }
                </div>
                <button class="btn-outline" onclick={open_reviews}>{"See more on Google ↗"}</button>
            </div>
        </section>
    }
}
