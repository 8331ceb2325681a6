use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

fn questions() -> Vec<(&'static str, String)> {
    vec![
        (
            "How often should I service my AC?",
            "We recommend servicing your AC at least twice a year, once before summer and once after. Regular servicing keeps it efficient and extends its life. For commercial spaces or heavy usage, quarterly servicing is ideal.".into(),
        ),
        (
            "What is included in AC servicing?",
            "Filter cleaning or replacement, coil cleaning, condensate drain cleaning, thermostat check, refrigerant level check, electrical connection inspection and a performance test. Deep cleaning adds internal component sanitization.".into(),
        ),
        (
            "How much does AC servicing cost?",
            "Basic servicing starts from ₹399, deep cleaning from ₹599 and gas refilling from ₹2,500. Final pricing depends on the AC type, brand and the issues found during inspection. You get a quote before any work starts.".into(),
        ),
        (
            "Do you provide warranty on your services?",
            "Yes. Parts carry the manufacturer warranty and our workmanship is guaranteed. Exact terms depend on the service and are shared before we begin.".into(),
        ),
        (
            "How long does AC servicing take?",
            "Standard servicing takes 45-60 minutes per unit. Deep cleaning may take 1.5-2 hours. Gas refilling and repairs can take 2-3 hours depending on the issue.".into(),
        ),
        (
            "Do you service all AC brands?",
            "Yes, including Voltas, Blue Star, Daikin, LG, Samsung, Hitachi, Carrier, O General and Lloyd. Our technicians work on split and window ACs of every major brand.".into(),
        ),
        (
            "What areas do you cover in Pune?",
            "All of Pune and PCMC, including Aundh, Wakad, Hinjewadi, Pimple Saudagar, Pimpri, Chinchwad, Kharadi and Viman Nagar. Same-day or next-day service is available for most locations.".into(),
        ),
        (
            "What are the benefits of AMC plans?",
            "Scheduled visits, priority service, gas top-ups and emergency support at a lower cost than individual calls. Your AC lasts longer and cools better.".into(),
        ),
        (
            "Can I get same-day service?",
            "Yes, for most requests subject to availability. Urgent repairs are prioritized. Call or WhatsApp us and we'll confirm the earliest slot for your location.".into(),
        ),
        (
            "How do I book a service?",
            format!(
                "Call {}, message us on WhatsApp, or fill the booking form on this page. We confirm your appointment within minutes.",
                config::PHONE_DISPLAY
            ),
        ),
    ]
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="page-section muted">
            <style>
                {r#"
                .faq-list {
                    max-width: 768px;
                    margin: 0 auto;
                }
                .faq-item {
                    background: white;
                    border: 1px solid #e5e7eb;
                    border-radius: 10px;
                    margin-bottom: 0.5rem;
                    overflow: hidden;
                    transition: border-color 0.2s;
                }
                .faq-item:hover {
                    border-color: rgba(0, 102, 204, 0.4);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.9rem 1rem;
                    background: none;
                    border: none;
                    text-align: left;
                    font-size: 0.9rem;
                    font-weight: 600;
                    color: #1a1a1a;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.25rem;
                    color: #0066cc;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    max-height: 0;
                    padding: 0 1rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                    line-height: 1.6;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding-bottom: 1rem;
                }
                "#}
            </style>
            <div class="section-header">
                <h2 class="section-heading">{"Frequently Asked Questions"}</h2>
                <p class="section-subheading">{"Quick answers about our AC services"}</p>
            </div>
            <div class="faq-list">
                { for questions().into_iter().map(|(question, answer)| html! {
                    <FaqItem key={question} {question} answer={answer} />
                }) }
            </div>
        </section>
    }
}
