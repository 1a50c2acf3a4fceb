use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cart")]
    Cart,
    #[at("/product/:id")]
    Product { id: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn product_route_carries_identifier() {
        assert_eq!(
            Route::recognize("/product/jacket-canada-goosee"),
            Some(Route::Product {
                id: "jacket-canada-goosee".into()
            })
        );
        assert_eq!(
            Route::Product { id: "ps-5".into() }.to_path(),
            "/product/ps-5"
        );
    }

    #[test]
    fn cart_and_fallback_routes_are_registered() {
        assert_eq!(Route::recognize("/cart"), Some(Route::Cart));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
