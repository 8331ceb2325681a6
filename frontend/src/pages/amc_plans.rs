use yew::prelude::*;

use crate::handoff;

struct Plan {
    name: &'static str,
    icon: &'static str,
    visits: &'static str,
    for_whom: &'static str,
    includes: &'static [&'static str],
    price: &'static str,
    price_label: &'static str,
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Home Plan",
        icon: "⭐",
        visits: "4 visits/year",
        for_whom: "1-3 AC units in homes",
        includes: &["Basic servicing", "Filter cleaning", "Priority support"],
        price: "₹2,499",
        price_label: "/year",
        popular: false,
    },
    Plan {
        name: "Office Plan",
        icon: "⚡",
        visits: "6 visits/year",
        for_whom: "Shops & offices",
        includes: &["Full servicing", "Gas top-up", "Emergency support", "Priority scheduling"],
        price: "₹4,999",
        price_label: "/year",
        popular: true,
    },
    Plan {
        name: "Commercial Plan",
        icon: "🏢",
        visits: "12 visits/year",
        for_whom: "Buildings & showrooms",
        includes: &["Complete maintenance", "Gas refills", "24/7 support", "Free minor repairs"],
        price: "Custom",
        price_label: "quote",
        popular: false,
    },
];

pub fn plan_enquiry(plan_name: &str) -> String {
    format!("Hi! I'm interested in the {}. Please share details.", plan_name)
}

#[function_component(AmcPlans)]
pub fn amc_plans() -> Html {
    html! {
        <section id="amc" class="page-section" aria-labelledby="amc-heading">
            <style>
                {r#"
                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    max-width: 896px;
                    margin: 0 auto;
                }
                .plan-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 1.25rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 10px;
                    transition: transform 0.2s;
                }
                .plan-card:hover {
                    transform: translateY(-4px);
                }
                .plan-card.popular {
                    border: 2px solid #0066cc;
                    background: rgba(0, 102, 204, 0.05);
                    box-shadow: 0 0 20px rgba(0, 102, 204, 0.15);
                }
                .plan-badge {
                    position: absolute;
                    top: -10px;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #0066cc;
                    color: white;
                    font-size: 0.65rem;
                    padding: 0.15rem 0.75rem;
                    border-radius: 999px;
                }
                .plan-price {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #0066cc;
                }
                .plan-visits {
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #0066cc;
                    margin: 0.5rem 0 0.25rem;
                }
                .plan-for {
                    font-size: 0.875rem;
                    padding-bottom: 0.75rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                @media (max-width: 1024px) {
                    .plan-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="section-header">
                <h2 id="amc-heading" class="section-heading">{"AMC Plans"}</h2>
                <p class="section-subheading">{"Annual Maintenance Contracts for worry-free AC care"}</p>
            </div>
            <div class="plan-grid">
                { for PLANS.iter().map(|plan| {
                    let name = plan.name;
                    let onclick = Callback::from(move |_: MouseEvent| handoff::open_whatsapp(&plan_enquiry(name)));
                    html! {
                        <div class={classes!("plan-card", plan.popular.then(|| "popular"))} key={plan.name}>
                            if plan.popular {
                                <span class="plan-badge">{"Most Popular"}</span>
                            }
                            <h3>{format!("{} {}", plan.icon, plan.name)}</h3>
                            <div>
                                <span class="plan-price">{plan.price}</span>
                                <span class="plan-unit">{plan.price_label}</span>
                            </div>
                            <p class="plan-visits">{plan.visits}</p>
                            <p class="plan-for">{plan.for_whom}</p>
                            <ul class="check-list">
                                { for plan.includes.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                            <button
                                class={if plan.popular { "btn-primary" } else { "btn-outline" }}
                                aria-label={format!("Get {} via WhatsApp", plan.name)}
                                {onclick}
                            >
                                {"💬 Get This Plan"}
                            </button>
                        </div>
                    }
                }) }
            </div>
            <p class="section-footnote">{"Spare parts and major repairs are charged separately after your approval."}</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enquiry_names_the_plan() {
        assert_eq!(
            plan_enquiry("Office Plan"),
            "Hi! I'm interested in the Office Plan. Please share details."
        );
    }

    #[test]
    fn exactly_one_plan_is_highlighted() {
        assert_eq!(PLANS.iter().filter(|plan| plan.popular).count(), 1);
    }
}
