use leptos::ev;
use leptos::prelude::*;

/// Modal frame container (overlay + positioned surface).
///
/// The frame stays mounted and is shown or hidden through `visible`, so the
/// element ids inside it are always present in the document.
///
/// Overlay clicks are reported through `on_backdrop_click` with `true` only
/// when the click hit the overlay itself (`target == currentTarget`) and the
/// press also started there. Selecting text inside the modal and releasing
/// the mouse outside reports `false`.
#[component]
pub fn ModalFrame(
    /// DOM id of the overlay element
    id: &'static str,
    #[prop(into)]
    visible: Signal<bool>,
    on_backdrop_click: Callback<bool>,
    /// Called on Escape while the frame is visible
    on_escape: Callback<()>,
    /// Extra class for the modal surface (`div.modal-content`).
    #[prop(optional)]
    content_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let direct = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        on_backdrop_click.run(direct);
    };

    let keydown = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" && visible.get_untracked() {
            on_escape.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let overlay_style = move || {
        if visible.get() {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    let surface_class = match content_class {
        Some(cls) => format!("modal-content {cls}"),
        None => "modal-content".to_string(),
    };

    view! {
        <div
            id=id
            class="modal"
            style=overlay_style
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class>
                {children()}
            </div>
        </div>
    }
}
