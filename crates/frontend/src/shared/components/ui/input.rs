use leptos::prelude::*;

/// Input bound to a signal through `prop:value`, so clearing the signal
/// clears what the user typed
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    /// `step` attribute for numeric inputs
    #[prop(optional)]
    step: Option<&'static str>,
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional)]
    id: Option<&'static str>,
    /// Form field name
    #[prop(optional)]
    name: Option<&'static str>,
) -> impl IntoView {
    let input_id = id.unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                name=name.unwrap_or(input_id)
                class="form__input"
                type=input_type.unwrap_or("text")
                step=step
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
