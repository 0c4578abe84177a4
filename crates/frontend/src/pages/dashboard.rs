use crate::components::Loading;
use crate::context::use_app_context;
use crate::display::NO_SUBSCRIPTION_MESSAGE;
use crate::flows::{DashboardFlow, DashboardState};
use crate::router::use_route_navigator;
use cachorro_core::SessionGuard;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const CARD_STYLE: &str =
    "max-width: 600px; margin: 50px auto; padding: 20px; border: 1px solid #ddd; border-radius: 8px;";
const LOGOUT_STYLE: &str = "margin-bottom: 20px; padding: 8px; background: #dc3545; color: #fff; border: none; border-radius: 4px;";

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let app = use_app_context();
    let navigator = use_route_navigator();
    let state = use_state(DashboardState::default);

    let flow = use_memo((), move |_| {
        DashboardFlow::new(
            app.client().clone(),
            SessionGuard::new(app.store().clone(), navigator),
        )
    });

    // Fetch once per mount; a response arriving after unmount is dropped
    {
        let flow = flow.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let ticket = flow.mount();
            {
                let flow = flow.clone();
                spawn_local(async move {
                    if let Some(next) = flow.load(ticket).await {
                        state.set(next);
                    }
                });
            }
            move || flow.unmount()
        });
    }

    let on_logout = {
        let flow = flow.clone();
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.set(flow.logout());
        })
    };

    let body = match &*state {
        DashboardState::Loading => return html! { <Loading /> },
        DashboardState::Redirected => return html! {},
        DashboardState::NoSubscription => html! {
            <p>{NO_SUBSCRIPTION_MESSAGE}</p>
        },
        DashboardState::HasSubscription(view) => html! {
            <div>
                { for view.rows().into_iter().map(|(label, value)| html! {
                    <p><strong>{label}</strong>{" "}{value.to_string()}</p>
                }) }
            </div>
        },
    };

    html! {
        <div style={CARD_STYLE}>
            <h2>{"Minha Assinatura - Cachorro Loko"}</h2>
            <button onclick={on_logout} style={LOGOUT_STYLE}>
                {"Sair"}
            </button>
            {body}
        </div>
    }
}
