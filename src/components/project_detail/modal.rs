//! Full-size image modal.
//!
//! Independent of the slide index: it shows whatever image was clicked.
//! Open suppresses page scroll; close restores it.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::utils::dom;

#[component]
pub fn ImageModal(src: RwSignal<Option<String>>) -> impl IntoView {
    let close = move || {
        src.set(None);
        dom::set_body_scroll_locked(false);
    };

    view! {
        <Show when=move || src.get().is_some()>
            // Clicking the backdrop closes; the image itself swallows clicks.
            <div class="image-modal active" on:click=move |_| close()>
                <button class="modal-close" aria-label="Close image" on:click=move |_| close()>
                    <Icon icon=ic::CLOSE />
                </button>
                <img
                    src=move || src.get().unwrap_or_default()
                    alt="Full-size project image"
                    on:click=|ev| ev.stop_propagation()
                />
            </div>
        </Show>
    }
}
