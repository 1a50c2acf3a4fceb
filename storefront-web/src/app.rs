//! Application shell: router, header and the routed screens.
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod state;

pub use handlers::AppHandlers;
pub use state::{AppState, use_app_state};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    use crate::components::header::Header;
    use crate::pages::{cart::CartScreen, not_found::NotFound, product::ProductScreen};

    let state = use_app_state();
    let handlers = AppHandlers::new(&state);

    let render = {
        let cart = (*state.cart).clone();
        let currency = (*state.active_currency).clone();
        let on_cart_request = handlers.cart_request.clone();
        move |route: Route| match route {
            Route::Home | Route::Cart => html! {
                <CartScreen
                    cart={cart.clone()}
                    active_currency={currency.clone()}
                    on_cart_request={on_cart_request.clone()}
                />
            },
            Route::Product { id } => html! {
                <ProductScreen
                    key={id.clone()}
                    product_id={AttrValue::from(id)}
                    active_currency={currency.clone()}
                    on_cart_request={on_cart_request.clone()}
                />
            },
            Route::NotFound => html! { <NotFound /> },
        }
    };

    html! {
        <>
            <Header
                currencies={state.currencies.clone()}
                active_currency={(*state.active_currency).clone()}
                on_currency_change={handlers.currency_change.clone()}
                cart={(*state.cart).clone()}
                show_minicart={*state.show_minicart}
                on_toggle_minicart={handlers.toggle_minicart.clone()}
            />
            <main id="main" role="main">
                <Switch<Route> render={render} />
            </main>
        </>
    }
}
