//! Page Location

use outfit_core::BuilderMode;

/// Value of query parameter `name` in the current page URL
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

/// Builder mode requested by the page URL (`?edit=<id>`)
pub fn initial_mode() -> BuilderMode {
    BuilderMode::from_query(query_param("edit").as_deref())
}
