use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::utils::ACCOUNT_URL;

#[derive(Properties, PartialEq)]
pub struct TokenPanelProps {
    pub token: String,
    pub status: String,
    pub on_edit: Callback<String>,
    pub on_save: Callback<()>,
}

/// Token paste box, save button and the decoded-identity status badge.
/// The account link is a plain hyperlink to the Keycloak console, not an
/// API call.
#[function_component(TokenPanel)]
pub fn token_panel(props: &TokenPanelProps) -> Html {
    let oninput = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit(textarea.value());
        })
    };

    html! {
        <div class="card">
            <h2>{"1. Access token"}</h2>
            <label class="field-label" for="token">{"Access token (Bearer):"}</label>
            <textarea
                id="token"
                rows="3"
                value={props.token.clone()}
                {oninput}
                placeholder="Paste the token issued by Keycloak here..."
            />
            <div class="row">
                <button class="btn" onclick={props.on_save.reform(|_| ())}>
                    {"Save token"}
                </button>
                <span class="badge">{props.status.clone()}</span>
                <a
                    class="account-link"
                    href={ACCOUNT_URL}
                    target="_blank"
                    rel="noreferrer"
                >
                    {"Open Keycloak account"}
                </a>
            </div>
        </div>
    }
}
