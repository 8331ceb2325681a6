use std::rc::Rc;

use chrono::{Local, NaiveDate};
use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::draft::DATE_INPUT_FORMAT;
use crate::booking::summary::review_rows;
use crate::booking::validation::{ADDRESS_MAX_CHARS, NOTES_MAX_CHARS};
use crate::booking::{AcType, Area, BookingFlow, Field, Phase, Service, Step, TimeSlot};
use crate::config;
use crate::handoff;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub enum BookingAction {
    Update(Field, String),
    Advance,
    Retreat,
    Submit,
    HandoffSent,
    Reset,
}

impl Reducible for BookingFlow {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut flow = (*self).clone();
        let outcome = match action {
            BookingAction::Update(field, raw) => {
                flow.update_field(field, &raw, today());
                Ok(())
            }
            BookingAction::Advance => flow.advance(today()).map(|_| ()),
            BookingAction::Retreat => flow.retreat().map(|_| ()),
            BookingAction::Submit => flow.submit(today()).map(|_| info!("Booking ready, handing off to WhatsApp")),
            BookingAction::HandoffSent => flow.complete_handoff(),
            BookingAction::Reset => flow.reset(),
        };
        if let Err(e) = outcome {
            debug!("Booking action rejected: {}", e);
        }
        Rc::new(flow)
    }
}

fn field_error(flow: &BookingFlow, field: Field) -> Html {
    match flow.error_for(field) {
        Some(error) => html! { <p class="field-error">{&error.message}</p> },
        None => html! {},
    }
}

/// `<option>`s for a choice field, with the current value pre-selected.
fn choice_options(placeholder: &'static str, labels: &[&'static str], current: &str) -> Html {
    html! {
        <>
            <option value="" selected={current.is_empty()}>{placeholder}</option>
            { for labels.iter().map(|label| html! {
                <option value={*label} selected={current == *label}>{*label}</option>
            }) }
        </>
    }
}

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let flow = use_reducer(BookingFlow::new);

    // Hold the spinner for a moment, then hand off. Unmounting cancels it.
    let pending_handoff = match flow.phase() {
        Phase::Submitting { handoff_url } => Some(handoff_url.clone()),
        _ => None,
    };
    {
        let dispatcher = flow.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<String>| {
                let timer = pending.clone().map(|url| {
                    Timeout::new(config::SUBMIT_DELAY_MS, move || {
                        handoff::open_in_new_context(&url);
                        dispatcher.dispatch(BookingAction::HandoffSent);
                    })
                });
                move || drop(timer)
            },
            pending_handoff,
        );
    }

    let dispatch = |action_for: fn() -> BookingAction| {
        let dispatcher = flow.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(action_for());
        })
    };

    if *flow.phase() == Phase::Submitted {
        return html! {
            <div class="booking-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Thank you for booking!"}</h3>
                <p>{"We'll call or WhatsApp you soon to confirm your service."}</p>
                <button class="booking-secondary" onclick={dispatch(|| BookingAction::Reset)}>
                    {"Book Another Service"}
                </button>
            </div>
        };
    }

    let on_input = |field: Field| {
        let dispatcher = flow.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(BookingAction::Update(field, input.value()));
        })
    };
    let on_text_area = |field: Field| {
        let dispatcher = flow.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(BookingAction::Update(field, input.value()));
        })
    };
    let on_select = |field: Field| {
        let dispatcher = flow.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(BookingAction::Update(field, select.value()));
        })
    };

    let draft = flow.draft();
    let step = flow.step();
    let submitting = matches!(flow.phase(), Phase::Submitting { .. });
    let has_error = |field: Field| flow.error_for(field).is_some().then(|| "invalid");

    let service_choices: Vec<(String, &'static str)> = Service::ALL
        .iter()
        .map(|s| (format!("{} {}", s.icon(), s.label()), s.label()))
        .collect();
    let ac_types: Vec<&'static str> = AcType::ALL.iter().map(|t| t.label()).collect();
    let time_slots: Vec<&'static str> = TimeSlot::ALL.iter().map(|t| t.label()).collect();
    let areas: Vec<&'static str> = Area::ALL.iter().map(|a| a.label()).collect();

    let body = match step {
        Step::Details => html! {
            <div class="booking-step" key="step1">
                <label>{"Your Name *"}</label>
                <input
                    type="text"
                    class={classes!(has_error(Field::Name))}
                    placeholder="Enter your full name"
                    value={draft.input_value(Field::Name)}
                    oninput={on_input(Field::Name)}
                />
                { field_error(&flow, Field::Name) }
                <label>{"Phone Number *"}</label>
                <input
                    type="tel"
                    class={classes!(has_error(Field::Phone))}
                    placeholder="10-digit mobile number"
                    value={draft.input_value(Field::Phone)}
                    oninput={on_input(Field::Phone)}
                />
                { field_error(&flow, Field::Phone) }
            </div>
        },
        Step::ServiceInfo => {
            let current = draft.input_value(Field::Service);
            html! {
                <div class="booking-step" key="step2">
                    <label>{"Service Needed *"}</label>
                    <select class={classes!(has_error(Field::Service))} onchange={on_select(Field::Service)}>
                        <option value="" selected={current.is_empty()}>{"Select a service"}</option>
                        { for service_choices.iter().map(|(text, label)| html! {
                            <option value={*label} selected={current == *label}>{text.clone()}</option>
                        }) }
                    </select>
                    { field_error(&flow, Field::Service) }
                    <label>{"AC Type (Optional)"}</label>
                    <select onchange={on_select(Field::AcType)}>
                        { choice_options("Select AC type", &ac_types, &draft.input_value(Field::AcType)) }
                    </select>
                </div>
            }
        }
        Step::Schedule => html! {
            <div class="booking-step" key="step3">
                <label>{"Preferred Date (Optional)"}</label>
                <input
                    type="date"
                    class={classes!(has_error(Field::PreferredDate))}
                    min={today().format(DATE_INPUT_FORMAT).to_string()}
                    value={draft.input_value(Field::PreferredDate)}
                    oninput={on_input(Field::PreferredDate)}
                />
                { field_error(&flow, Field::PreferredDate) }
                <label>{"Preferred Time (Optional)"}</label>
                <select onchange={on_select(Field::TimeSlot)}>
                    { choice_options("Select time slot", &time_slots, &draft.input_value(Field::TimeSlot)) }
                </select>
            </div>
        },
        Step::Location => html! {
            <div class="booking-step" key="step4">
                <label>{"Your Area (Optional)"}</label>
                <select onchange={on_select(Field::Area)}>
                    { choice_options("Select your area", &areas, &draft.input_value(Field::Area)) }
                </select>
                <label>{"Full Address (Optional)"}</label>
                <textarea
                    rows="2"
                    class={classes!(has_error(Field::Address))}
                    maxlength={ADDRESS_MAX_CHARS.to_string()}
                    placeholder="Building name, street, landmark..."
                    value={draft.input_value(Field::Address)}
                    oninput={on_text_area(Field::Address)}
                />
                { field_error(&flow, Field::Address) }
            </div>
        },
        Step::Review => html! {
            <div class="booking-step" key="step5">
                <div class="review-box">
                    { for review_rows(draft).into_iter().map(|(label, value)| html! {
                        <div class="review-row">
                            <span class="review-label">{format!("{}:", label)}</span>
                            <span class="review-value">{value}</span>
                        </div>
                    }) }
                </div>
                <label>{"Any additional notes? (Optional)"}</label>
                <textarea
                    rows="2"
                    class={classes!(has_error(Field::Notes))}
                    maxlength={NOTES_MAX_CHARS.to_string()}
                    placeholder="Special requests or details..."
                    value={draft.input_value(Field::Notes)}
                    oninput={on_text_area(Field::Notes)}
                />
                { field_error(&flow, Field::Notes) }
            </div>
        },
    };

    let onsubmit = {
        let dispatcher = flow.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(BookingAction::Submit);
        })
    };

    html! {
        <div class="booking-form">
            <style>
                {r#"
                .booking-form label {
                    display: block;
                    font-size: 0.75rem;
                    font-weight: 500;
                    margin: 0.75rem 0 0.25rem;
                }
                .booking-form input,
                .booking-form select,
                .booking-form textarea {
                    width: 100%;
                    height: 2.5rem;
                    padding: 0 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 6px;
                    font-size: 0.875rem;
                    box-sizing: border-box;
                }
                .booking-form textarea {
                    height: auto;
                    padding: 0.5rem 0.75rem;
                    resize: none;
                }
                .booking-form .invalid {
                    border-color: #dc2626;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.75rem;
                    margin: 0.25rem 0 0;
                }
                .step-indicator {
                    text-align: center;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .step-indicator strong {
                    color: #1a1a1a;
                }
                .progress-bar {
                    display: flex;
                    gap: 4px;
                    margin: 0.5rem 0 1rem;
                }
                .progress-bar div {
                    flex: 1;
                    height: 4px;
                    border-radius: 999px;
                    background: #e5e7eb;
                    transition: background 0.3s;
                }
                .progress-bar div.done {
                    background: #0066cc;
                }
                .booking-hint {
                    text-align: center;
                    font-size: 0.75rem;
                    color: #6b7280;
                }
                .booking-step {
                    min-height: 180px;
                    animation: slideIn 0.2s ease-out;
                }
                @keyframes slideIn {
                    from { transform: translateX(30px); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                .review-box {
                    background: rgba(243, 244, 246, 0.5);
                    border-radius: 8px;
                    padding: 0.75rem;
                    font-size: 0.875rem;
                }
                .review-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.15rem 0;
                }
                .review-label {
                    color: #6b7280;
                }
                .review-value {
                    font-weight: 500;
                }
                .booking-nav {
                    display: flex;
                    gap: 0.75rem;
                    padding-top: 0.5rem;
                }
                .booking-primary,
                .booking-secondary,
                .booking-whatsapp {
                    height: 2.5rem;
                    border-radius: 6px;
                    padding: 0 1rem;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .booking-primary,
                .booking-whatsapp {
                    flex: 1;
                    border: none;
                    color: white;
                    background: #0066cc;
                }
                .booking-whatsapp {
                    background: #25D366;
                }
                .booking-whatsapp:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .booking-secondary {
                    background: white;
                    border: 1px solid #d1d5db;
                }
                .booking-success {
                    text-align: center;
                    padding: 2rem 0;
                }
                .success-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: rgba(0, 102, 204, 0.1);
                    color: #0066cc;
                    font-size: 2rem;
                    line-height: 4rem;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 14px;
                    height: 14px;
                    margin-right: 0.5rem;
                    border: 2px solid rgba(255,255,255,.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                "#}
            </style>
            <p class="step-indicator">
                {format!("Step {} of {}: ", step.number(), Step::COUNT)}
                <strong>{step.label()}</strong>
            </p>
            <div class="progress-bar">
                { for (1..=Step::COUNT).map(|n| html! {
                    <div class={classes!((n <= step.number()).then(|| "done"))}></div>
                }) }
            </div>
            <p class="booking-hint">
                {"Fill this quick form; we usually respond within 15–30 minutes during working hours."}
            </p>
            <form {onsubmit}>
                { body }
                <div class="booking-nav">
                    if step != Step::Details {
                        <button type="button" class="booking-secondary" disabled={submitting} onclick={dispatch(|| BookingAction::Retreat)}>
                            {"← Back"}
                        </button>
                    }
                    if step != Step::Review {
                        <button type="button" class="booking-primary" onclick={dispatch(|| BookingAction::Advance)}>
                            {"Continue →"}
                        </button>
                    } else {
                        <button
                            type="submit"
                            class="booking-whatsapp"
                            disabled={submitting || !flow.can_submit(today())}
                        >
                            if submitting {
                                <><span class="loading-spinner"></span>{"Sending..."}</>
                            } else {
                                {"💬 Send via WhatsApp"}
                            }
                        </button>
                    }
                </div>
            </form>
        </div>
    }
}
