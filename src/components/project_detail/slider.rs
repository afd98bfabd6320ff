//! Image slider for the detail gallery.
//!
//! Presentation layer over [`SliderState`]: the track offset and the
//! active indicator are derived purely from the current index. Navigation
//! comes from the arrow buttons, the indicator buttons, or a horizontal
//! swipe on the track.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::{SliderState, resolve_swipe};
use crate::utils::dom;

#[component]
pub fn Slider(images: Vec<String>, modal_src: RwSignal<Option<String>>) -> impl IntoView {
    let state = RwSignal::new(SliderState::new(images.len()));
    let (touch_start_x, set_touch_start_x) = signal(0.0_f64);

    let on_touch_start = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.touches().get(0) {
            set_touch_start_x.set(touch.client_x() as f64);
        }
    };

    let on_touch_end = move |event: leptos::ev::TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            let end_x = touch.client_x() as f64;
            if let Some(direction) = resolve_swipe(touch_start_x.get_untracked(), end_x) {
                state.update(|s| s.swipe(direction));
            }
        }
    };

    let track_style = move || format!("transform: translateX(-{}%);", state.get().offset_percent());

    let slide_count = images.len();

    view! {
        <div class="slider-container">
            <button
                class="slider-arrow prev"
                aria-label="Previous slide"
                on:click=move |_| state.update(|s| s.prev())
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <div
                class="slider-track"
                style=track_style
                on:touchstart=on_touch_start
                on:touchend=on_touch_end
            >
                {images
                    .iter()
                    .enumerate()
                    .map(|(index, src)| {
                        let src = src.clone();
                        let full_size = src.clone();
                        view! {
                            <div
                                class="slider-slide"
                                data-index=index.to_string()
                                on:click=move |_| {
                                    modal_src.set(Some(full_size.clone()));
                                    dom::set_body_scroll_locked(true);
                                }
                            >
                                <img src=src alt=format!("Project detail image {}", index + 1) />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="slider-arrow next"
                aria-label="Next slide"
                on:click=move |_| state.update(|s| s.next())
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>

            <div class="slider-indicators">
                {(0..slide_count)
                    .map(|index| {
                        view! {
                            <button
                                class=move || {
                                    if state.get().current() == index {
                                        "slider-indicator active"
                                    } else {
                                        "slider-indicator"
                                    }
                                }
                                data-index=index.to_string()
                                aria-label=format!("Go to slide {}", index + 1)
                                on:click=move |_| state.update(|s| s.go_to(index))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
