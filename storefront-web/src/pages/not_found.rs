use crate::i18n;
use crate::router::Route;
use yew::prelude::*;
use yew_router::Routable;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="panel not-found">
            <h1>{ i18n::t("not_found.title") }</h1>
            <a href={Route::Cart.to_path()}>{ i18n::t("not_found.back") }</a>
        </section>
    }
}
