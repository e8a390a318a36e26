use yew::prelude::*;

use crate::models::Identity;
use crate::services::{decode_identity, token_status, BrowserSessionStore, SessionStore};

/// Token lifecycle: initialized from persisted storage, re-persisted and
/// re-decoded whenever the user saves. Editing the textarea only touches
/// the in-memory value.
pub struct UseSessionHandle {
    pub token: UseStateHandle<String>,
    pub identity: UseStateHandle<Option<Identity>>,
    pub status: UseStateHandle<String>,
    pub edit: Callback<String>,
    pub save: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let token = use_state(|| BrowserSessionStore.load());
    let identity = use_state(|| decode_identity(&token));
    let status = use_state(|| token_status(&token));

    let edit = {
        let token = token.clone();
        Callback::from(move |value: String| token.set(value))
    };

    let save = {
        let token = token.clone();
        let identity = identity.clone();
        let status = status.clone();
        Callback::from(move |_| {
            let value = (*token).clone();
            BrowserSessionStore.save(&value);
            identity.set(decode_identity(&value));
            status.set(token_status(&value));
            log::info!("💾 Token saved ({} chars)", value.len());
        })
    };

    UseSessionHandle {
        token,
        identity,
        status,
        edit,
        save,
    }
}
