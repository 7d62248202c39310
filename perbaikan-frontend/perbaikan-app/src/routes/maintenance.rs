use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::not_found_view::NotFoundView;

/// The whole site is under maintenance, so the landing page has nowhere to link back to.
#[component]
pub fn Maintenance() -> impl IntoView {
    view! {
        <Title text="Sedang Perbaikan" />
        <NotFoundView />
    }
}
