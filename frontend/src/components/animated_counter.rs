use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::counter::{frame_value, group_thousands};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(1500.0)]
    pub duration_ms: f64,
}

/// Counts up from zero the first time it scrolls into view.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_state_eq(|| false);
    let count = use_state_eq(|| 0u32);

    // Watch for the first intersection, then stop observing.
    {
        let node = node.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |_| {
                let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let visible = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .any(|entry| entry.is_intersecting());
                        if visible {
                            in_view.set(true);
                            observer.disconnect();
                        }
                    },
                );
                let observer = match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        warn!("IntersectionObserver unavailable: {:?}", e);
                        None
                    }
                };
                if let (Some(observer), Some(element)) = (&observer, node.cast::<web_sys::Element>()) {
                    observer.observe(&element);
                }
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            (),
        );
    }

    // Drive the count with animation frames once visible.
    {
        let count = count.clone();
        let target = props.value;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |in_view: &bool| {
                let frame_id = Rc::new(Cell::new(None::<i32>));
                let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

                if *in_view {
                    let started_at = Cell::new(None::<f64>);
                    let next_tick = tick.clone();
                    let tick_frame_id = frame_id.clone();
                    *tick.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
                        let start = match started_at.get() {
                            Some(start) => start,
                            None => {
                                started_at.set(Some(now));
                                now
                            }
                        };
                        let (value, done) = frame_value(target, duration_ms, now - start);
                        count.set(value);
                        tick_frame_id.set(None);
                        if !done {
                            request_frame(&next_tick, &tick_frame_id);
                        }
                    }));
                    request_frame(&tick, &frame_id);
                }

                move || {
                    if let (Some(window), Some(id)) = (web_sys::window(), frame_id.get()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    // Breaks the closure's reference to itself.
                    tick.borrow_mut().take();
                }
            },
            *in_view,
        );
    }

    html! {
        <span ref={node}>
            {group_thousands(*count)}{props.suffix.clone()}
        </span>
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>, frame_id: &Rc<Cell<Option<i32>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = tick.borrow().as_ref() {
        frame_id.set(window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
    }
}
