//! Account rows rendered by the server page, outside the Leptos tree.

use contracts::domain::a001_account::AccountId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::details::controller::AccountRows;
use super::details::dom_ids::{row_balance_id, DETAILS_TRIGGER_ATTR};

/// `AccountRows` over the `saldo-{id}` cells of the account list
#[derive(Debug, Clone, Copy, Default)]
pub struct DomAccountRows;

impl AccountRows for DomAccountRows {
    fn set_balance(&self, id: AccountId, balance: &str) {
        let element_id = row_balance_id(id);
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&element_id));

        match element {
            Some(el) => el.set_text_content(Some(balance)),
            None => log::warn!("Account row element #{} not found", element_id),
        }
    }
}

/// Attach `on_open` to every `[data-account-details]` element on the page.
///
/// Returns how many triggers were bound. Listeners live as long as the page.
pub fn bind_details_triggers(on_open: impl Fn(AccountId) + 'static) -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let selector = format!("[{}]", DETAILS_TRIGGER_ATTR);
    let nodes = match document.query_selector_all(&selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::error!("Failed to query account triggers: {:?}", err);
            return 0;
        }
    };

    let on_open = std::rc::Rc::new(on_open);
    let mut bound = 0;

    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };

        let raw_id = element.get_attribute(DETAILS_TRIGGER_ATTR).unwrap_or_default();
        let id = match AccountId::from_string(&raw_id) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Skipping account trigger: {}", e);
                continue;
            }
        };

        let on_open = on_open.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            on_open(id);
        }) as Box<dyn FnMut(_)>);

        if element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            bound += 1;
        }
        closure.forget();
    }

    bound
}
