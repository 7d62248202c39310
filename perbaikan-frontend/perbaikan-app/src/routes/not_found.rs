use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::not_found_view::NotFoundView;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <Title text="Halaman Tidak Ditemukan" />
        <NotFoundView show_back_link=true />
    }
}
