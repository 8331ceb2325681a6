use yew::prelude::*;

use crate::booking::Area;
use crate::handoff;

const CHECK_AREA_MESSAGE: &str =
    "Hi! My area is not listed on your website. Can you check if you provide service here?";

#[function_component(ServiceArea)]
pub fn service_area() -> Html {
    let check_area = Callback::from(|_: MouseEvent| handoff::open_whatsapp(CHECK_AREA_MESSAGE));

    html! {
        <div class="coverage-card">
            <style>
                {r#"
                .coverage-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    padding: 1.25rem;
                    background: white;
                }
                .area-pills {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.4rem;
                    margin: 1rem 0;
                }
                .area-pill {
                    font-size: 0.75rem;
                    padding: 0.3rem 0.7rem;
                    border-radius: 999px;
                    background: rgba(0, 102, 204, 0.08);
                    color: #0066cc;
                }
                "#}
            </style>
            <h3>{"📍 Service Coverage"}</h3>
            <p class="muted-text">{"We serve homes, shops and offices across Pune & PCMC."}</p>
            <div class="area-pills">
                { for Area::covered().map(|area| html! {
                    <span class="area-pill" key={area.label()}>{area.label()}</span>
                }) }
            </div>
            <p class="muted-text">{"Don't see your area? We may still be able to help."}</p>
            <button class="btn-success" onclick={check_area}>{"💬 Check My Area"}</button>
        </div>
    }
}
