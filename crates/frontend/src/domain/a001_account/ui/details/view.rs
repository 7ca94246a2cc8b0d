use contracts::domain::a001_account::TransactionKind;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use super::dom_ids;
use super::model::{DetailsPresentation, HistoryTable};
use super::view_model::AccountDetailsViewModel;
use super::AccountDetailsController;
use crate::shared::components::ui::{Button, ButtonVariant, Input, Select};
use crate::shared::modal_frame::ModalFrame;

fn history_rows(table: HistoryTable) -> AnyView {
    match table {
        HistoryTable::Empty { message } => view! {
            <tr>
                <td colspan=HistoryTable::COLUMNS.to_string()>{message}</td>
            </tr>
        }
        .into_any(),
        HistoryTable::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                view! {
                    <tr>
                        <td>{row.timestamp}</td>
                        <td>
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                {row.kind}
                            </Badge>
                        </td>
                        <td class="text-right">{row.amount}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any(),
    }
}

#[component]
pub fn AccountDetailsModal(
    vm: AccountDetailsViewModel,
    controller: Rc<AccountDetailsController>,
) -> impl IntoView {
    let controller = StoredValue::new_local(controller);

    let on_backdrop_click = Callback::new(move |direct: bool| {
        controller.with_value(|c| c.backdrop_clicked(direct));
    });
    let on_close = Callback::new(move |_: ()| {
        controller.with_value(|c| c.close_details());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = vm.transaction_request() else {
            log::warn!("Transaction submitted with no account loaded");
            return;
        };
        let controller = controller.get_value();
        spawn_local(async move {
            controller.submit(request).await;
        });
    };

    let detail_text = move |pick: fn(&DetailsPresentation) -> String| {
        vm.details
            .with(|d| d.as_ref().map(pick))
            .unwrap_or_default()
    };

    let kind_options: Vec<(String, String)> = TransactionKind::ALL
        .iter()
        .map(|k| (k.wire_value().to_string(), k.label().to_string()))
        .collect();

    view! {
        <ModalFrame
            id=dom_ids::DETAILS_MODAL
            visible=vm.visible
            on_backdrop_click=on_backdrop_click
            on_escape=on_close
            content_class="account-details"
        >
            <div class="modal-header">
                <h2 class="modal-title">"Detalhes da Conta"</h2>
                <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_: leptos::ev::MouseEvent| on_close.run(()))>
                    "×"
                </Button>
            </div>

            <div class="modal-body">
                <dl class="account-summary">
                    <dt>"Titular"</dt>
                    <dd id=dom_ids::MODAL_HOLDER_NAME>
                        {move || detail_text(|d| d.holder_name.clone())}
                    </dd>
                    <dt>"Conta"</dt>
                    <dd id=dom_ids::MODAL_ACCOUNT_NUMBER>
                        {move || detail_text(|d| d.account_number.clone())}
                    </dd>
                    <dt>"Saldo"</dt>
                    <dd id=dom_ids::MODAL_BALANCE>{move || vm.balance.get()}</dd>
                </dl>

                <form class="transaction-form" on:submit=on_submit>
                    <input
                        type="hidden"
                        id=dom_ids::MODAL_ACCOUNT_ID
                        name="account_id"
                        prop:value=move || detail_text(|d| d.account_id.to_string())
                    />
                    <Select
                        id=dom_ids::TRANSACTION_KIND
                        name="transaction_type"
                        label="Operação"
                        value=Signal::derive(move || vm.kind.get().wire_value().to_string())
                        options=kind_options
                        on_change=Callback::new(move |value: String| {
                            if let Some(kind) = TransactionKind::from_wire(&value) {
                                vm.kind.set(kind);
                            }
                        })
                    />
                    <Input
                        id=dom_ids::TRANSACTION_AMOUNT
                        name="amount"
                        label="Valor"
                        input_type="number"
                        step="0.01"
                        required=true
                        placeholder="0.00"
                        value=vm.amount
                        on_input=Callback::new(move |value: String| vm.amount.set(value))
                    />
                    <Button button_type="submit">
                        {move || if vm.is_submitting() { "Processando..." } else { "Confirmar" }}
                    </Button>
                    <p
                        id=dom_ids::TRANSACTION_MESSAGE
                        class=move || {
                            vm.status
                                .with(|s| s.as_ref().map(|s| s.kind.css_class()))
                                .unwrap_or("")
                        }
                    >
                        {move || vm.status.with(|s| s.as_ref().map(|s| s.text.clone())).unwrap_or_default()}
                    </p>
                </form>

                <h3>"Histórico"</h3>
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>"Data"</th>
                            <th>"Tipo"</th>
                            <th>"Valor"</th>
                        </tr>
                    </thead>
                    <tbody id=dom_ids::HISTORY_BODY>
                        {move || vm.details.with(|d| d.as_ref().map(|d| d.history.clone())).map(history_rows)}
                    </tbody>
                </table>
            </div>
        </ModalFrame>
    }
}
