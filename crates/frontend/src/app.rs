use crate::domain::a001_account::api::HttpAccountsApi;
use crate::domain::a001_account::ui::details::controller::DetailsModalController;
use crate::domain::a001_account::ui::details::{AccountDetailsModal, AccountDetailsViewModel};
use crate::domain::a001_account::ui::rows::{bind_details_triggers, DomAccountRows};
use crate::shared::config::{default_config, load_config, ClientConfig};
use leptos::prelude::*;
use std::rc::Rc;

fn resolve_config() -> Option<ClientConfig> {
    match load_config() {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("Invalid page config, using defaults: {:#}", err);
            default_config()
                .map_err(|err| log::error!("{:#}", err))
                .ok()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let Some(config) = resolve_config() else {
        return view! { <></> }.into_any();
    };

    let vm = AccountDetailsViewModel::new();
    let controller = Rc::new(DetailsModalController::new(
        HttpAccountsApi::new(config.api),
        vm,
        DomAccountRows,
        config.display,
        config.messages,
    ));

    let bound = {
        let controller = controller.clone();
        bind_details_triggers(move |id| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let _ = controller.open_details(id).await;
            });
        })
    };
    log::debug!("Bound {} account detail triggers", bound);

    view! {
        <AccountDetailsModal vm=vm controller=controller />
    }
    .into_any()
}
