use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <section class="max-w-6xl mx-auto px-6 py-24 text-center">
        <h1 class="text-4xl md:text-5xl font-extrabold text-[#002366] mb-4">
          "Serjeant-At-Arms Society"
        </h1>
        <p class="text-lg text-gray-700 mb-8">
          "Discipline, service, and leadership."
        </p>
        <a
          href="/About"
          class="inline-block bg-[#9e9210] text-white px-6 py-3 rounded-full font-semibold shadow-lg hover:shadow-xl transition"
        >"Learn About Us"</a>
      </section>
    }
}
