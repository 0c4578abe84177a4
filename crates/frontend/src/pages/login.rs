use crate::context::use_app_context;
use crate::flows::LoginFlow;
use crate::router::use_route_navigator;
use cachorro_core::Credentials;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const CARD_STYLE: &str =
    "max-width: 400px; margin: 100px auto; padding: 20px; border: 1px solid #ddd; border-radius: 8px;";
const FIELD_STYLE: &str = "margin-bottom: 15px;";
const INPUT_STYLE: &str = "width: 100%; padding: 8px;";
const BUTTON_STYLE: &str = "width: 100%; padding: 10px; background: #007bff; color: #fff; border: none; border-radius: 4px;";

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let app = use_app_context();
    let navigator = use_route_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<&'static str>);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let flow = LoginFlow::new(app.client().clone(), app.store().clone(), navigator);
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let flow = flow.clone();
            let error = error.clone();
            let credentials = Credentials::new((*username).clone(), (*password).clone());

            // Fields keep their values; only a failure replaces the message
            spawn_local(async move {
                if let Some(message) = flow.submit(credentials).await.error() {
                    error.set(Some(message));
                }
            });
        })
    };

    html! {
        <div style={CARD_STYLE}>
            <h2>{"Cachorro Loko - Login"}</h2>
            if let Some(message) = *error {
                <p style="color: red;">{message}</p>
            }
            <form onsubmit={on_submit}>
                <div style={FIELD_STYLE}>
                    <label>{"Usuário"}</label>
                    <input
                        type="text"
                        value={(*username).clone()}
                        oninput={on_username}
                        style={INPUT_STYLE}
                    />
                </div>
                <div style={FIELD_STYLE}>
                    <label>{"Senha"}</label>
                    <input
                        type="password"
                        value={(*password).clone()}
                        oninput={on_password}
                        style={INPUT_STYLE}
                    />
                </div>
                <button type="submit" style={BUTTON_STYLE}>
                    {"Entrar"}
                </button>
            </form>
        </div>
    }
}
