//! Placeholder shown while a page waits for the API

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Carregando..."))]
    pub text: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <p>{props.text.clone()}</p>
    }
}
