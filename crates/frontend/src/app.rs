use crate::context::AppContext;
use crate::router::{AppRoute, switch};
use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |_| AppContext::browser());

    match &*context {
        Ok(context) => html! {
            <ContextProvider<AppContext> context={context.clone()}>
                <BrowserRouter>
                    <Switch<AppRoute> render={switch} />
                </BrowserRouter>
            </ContextProvider<AppContext>>
        },
        Err(err) => {
            tracing::error!(error = %err, "Failed to configure the API client");
            html! { <p style="color: red;">{"Não foi possível iniciar o portal."}</p> }
        }
    }
}
