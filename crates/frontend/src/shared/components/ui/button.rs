use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button--primary",
            ButtonVariant::Ghost => "button--ghost",
        }
    }
}

/// Button with a variant; `button_type = "submit"` makes it submit its form
#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    /// Button type attribute, "button" by default
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = format!("button {}", variant.class());

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonVariant::Primary.class(), "button--primary");
        assert_eq!(ButtonVariant::Ghost.class(), "button--ghost");
    }
}
