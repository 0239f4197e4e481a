// ui/src/routes.rs
use leptos::prelude::*;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{about::AboutPage, home::Home};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! {
        <p class="max-w-6xl mx-auto px-6 py-20 text-[#002366]">"404 – not found"</p>
      }>
        <Route path=path!("/")        view=Home      />
        <Route path=path!("/About")   view=AboutPage />
      </Routes>
    }
}
