use crate::i18n;
use yew::prelude::*;

#[function_component(LoadingBox)]
pub fn loading_box() -> Html {
    html! {
        <div class="loading" role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span>{ i18n::t("loading") }</span>
        </div>
    }
}
