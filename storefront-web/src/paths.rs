//! Deployment-relative URLs.
//!
//! Builds compiled with `PUBLIC_URL` (for example `/shop` when the storefront is
//! served from a subdirectory) prefix every asset and router path with it.

/// Cart icon shown by the minicart toggle.
pub const CART_ICON: &str = "static/img/cart.svg";

#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(public_base(), relative)
}

/// Base path for the router, or `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalize_base(public_base())
}

fn public_base() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn join_base(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    match normalize_base(base) {
        Some(base) => format!("{base}/{rel}"),
        None => format!("/{rel}"),
    }
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
