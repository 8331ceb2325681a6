use yew::prelude::*;

const STEPS: [(&str, &str); 4] = [
    ("Contact Us", "Call, WhatsApp, or fill the form."),
    ("Inspection", "Technician checks your AC."),
    ("Service", "Work done on spot or scheduled."),
    ("Feedback", "Pay after job. Share feedback."),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section class="page-section muted">
            <style>
                {r#"
                .steps-row {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    max-width: 896px;
                    margin: 0 auto;
                    position: relative;
                }
                .steps-row::before {
                    content: '';
                    position: absolute;
                    top: 20px;
                    left: 12%;
                    right: 12%;
                    height: 2px;
                    background: #0066cc;
                }
                .how-step {
                    text-align: center;
                    position: relative;
                }
                .step-number {
                    width: 40px;
                    height: 40px;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: #0066cc;
                    color: white;
                    font-weight: 700;
                    line-height: 40px;
                }
                .how-step h4 {
                    margin: 0 0 0.25rem;
                    font-size: 0.875rem;
                }
                .how-step p,
                .section-footnote {
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .section-footnote {
                    text-align: center;
                    margin-top: 1.5rem;
                }
                @media (max-width: 768px) {
                    .steps-row {
                        grid-template-columns: 1fr;
                        max-width: 320px;
                    }
                    .steps-row::before {
                        display: none;
                    }
                    .how-step {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-align: left;
                    }
                    .step-number {
                        margin: 0;
                        flex-shrink: 0;
                    }
                }
                "#}
            </style>
            <div class="section-header">
                <h2 class="section-heading">{"How It Works"}</h2>
                <p class="section-subheading">{"Simple 4-step process"}</p>
            </div>
            <div class="steps-row">
                { for STEPS.iter().enumerate().map(|(i, (title, desc))| html! {
                    <div class="how-step" key={*title}>
                        <div class="step-number">{i + 1}</div>
                        <div>
                            <h4>{*title}</h4>
                            <p>{*desc}</p>
                        </div>
                    </div>
                }) }
            </div>
            <p class="section-footnote">{"Same/next-day service in most Pune & PCMC areas."}</p>
        </section>
    }
}
