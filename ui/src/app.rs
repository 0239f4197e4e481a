use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;

use crate::components::navbar::{Navbar, provide_press_hub};
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // one document listener for the whole app; navbars subscribe to it
    provide_press_hub();

    view! {
      <Router>
        <Navbar/>

        <main class="min-h-screen">
          <RoutesMenu/>
        </main>
      </Router>
    }
}
