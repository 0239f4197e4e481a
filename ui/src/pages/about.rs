use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::reveal::{Reveal, Slide};

const CTA_CLASS: &str = "inline-block bg-[#9e9210] text-white px-6 py-3 rounded-full font-semibold shadow-lg hover:shadow-xl transition";

const OBJECTIVES: [&str; 5] = [
    "Promote discipline and accountability among members.",
    "Encourage active community service and engagement.",
    "Develop leadership skills through training and mentorship.",
    "Foster unity and collaboration across all regions.",
    "Recognize and reward excellence in service and leadership.",
];

const HISTORY: [&str; 5] = [
    "History of the Serjeant-At-Arms",
    "The office of the Serjeant-At-Arms is one of the oldest parliamentary institutions in the world, \
     with its origins traced to the British Parliament in the 12th century. The title “Serjeant” comes \
     from the medieval word “serviens”, meaning servant of the Crown. These officers served the King \
     directly and were entrusted with matters of security, enforcement, and ceremonial responsibilities.",
    "By the 14th century, the Serjeant-At-Arms had become an established officer of the House of Commons \
     and House of Lords in the United Kingdom. Their duties evolved from being the King’s enforcers to \
     the Parliament’s guardians.",
    "As the Westminster parliamentary system spread around the world, including Kenya, Uganda, India, \
     Canada, Australia, and many Commonwealth countries. The office of the Serjeant-At-Arms became a \
     key pillar in legislative assemblies.",
    "In Kenya, the office was inherited from the British parliamentary tradition during the colonial period.",
];

#[component]
fn Hero() -> impl IntoView {
    view! {
      <section
        class="relative w-full h-[90vh] flex items-center justify-center text-center bg-cover bg-center"
        style="background-image: url('/assets/img/about-hero.jpeg')"
      >
        <div class="absolute inset-0 bg-black/70"></div>
        <div class="relative z-10 px-6 md:px-0 max-w-3xl">
          <h1 class="text-4xl md:text-5xl font-extrabold text-white mb-4">"About Us"</h1>
          <p class="text-lg md:text-xl text-gray-200 mb-6">
            "Promoting discipline, service, and leadership excellence since our formation."
          </p>
          <a href="/membership" class=CTA_CLASS>"Join the Society"</a>
        </div>
      </section>
    }
}

#[component]
fn WhoWeAre() -> impl IntoView {
    view! {
      <section class="w-full bg-white text-gray-900 py-20 px-6 md:px-16">
        <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-16 items-center">
          <Reveal class="space-y-6">
            <h2 class="text-3xl md:text-4xl font-extrabold text-[#002366] relative inline-block">
              "Who We Are"
              <span class="block w-16 h-1 bg-[#9e9210] mt-2 rounded-full"></span>
            </h2>
            { HISTORY.into_iter().map(|para| view! {
              <p class="text-gray-700 text-lg leading-relaxed">{ para }</p>
            }).collect_view() }
          </Reveal>

          <Reveal from=Slide::Left class="flex justify-center md:justify-end">
            <img
              src="/assets/img/about-who.jpeg"
              alt="Serjeant At Arms"
              class="rounded-2xl shadow-xl w-full max-w-md object-cover"
            />
          </Reveal>
        </div>
      </section>
    }
}

#[component]
fn StatementCard(
    title: &'static str,
    body: &'static str,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
      <Reveal
        delay_ms
        class="space-y-4 p-6 bg-white rounded-2xl shadow-md hover:shadow-xl"
      >
        <h3 class="text-2xl md:text-3xl font-bold text-[#002366]">{ title }</h3>
        <p class="text-gray-700 text-lg leading-relaxed">{ body }</p>
      </Reveal>
    }
}

#[component]
fn VisionMission() -> impl IntoView {
    view! {
      <section class="w-full bg-gray-50 text-gray-900 py-20 px-6 md:px-16">
        <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-16 items-start">
          <StatementCard
            title="Our Vision"
            body="To be the premier society fostering leadership, unity, and civic responsibility nationwide."
          />
          <StatementCard
            title="Our Mission"
            body="To develop disciplined, service-oriented leaders through mentorship, training, and community engagement."
            delay_ms=200
          />
        </div>
      </section>
    }
}

#[component]
fn Objectives() -> impl IntoView {
    view! {
      <section class="w-full bg-white text-gray-900 py-20 px-6 md:px-16 relative">
        <div class="max-w-6xl mx-auto grid md:grid-cols-2 gap-12 items-center relative z-10">
          <Reveal class="relative">
            <h3 class="text-3xl md:text-4xl font-extrabold text-[#002366] relative inline-block mb-8">
              "Our Objectives"
              <span
                class="absolute -top-8 -left-10 text-[#002366] opacity-10 text-[6rem] leading-none"
                aria-hidden="true"
              >"◎"</span>
            </h3>
            <ul class="list-disc list-inside space-y-4 text-lg text-gray-700">
              { OBJECTIVES.into_iter().map(|o| view! { <li>{ o }</li> }).collect_view() }
            </ul>
          </Reveal>

          <Reveal from=Slide::Left delay_ms=200 class="flex justify-center md:justify-end">
            <img
              src="/assets/img/about.obj.jpg"
              alt="Objectives Image"
              class="rounded-2xl shadow-xl w-full max-w-md object-cover"
            />
          </Reveal>
        </div>
      </section>
    }
}

#[component]
fn CouncilCta() -> impl IntoView {
    view! {
      <section class="w-full bg-gray-100 text-gray-900 py-20 px-6 md:px-16">
        <Reveal class="max-w-6xl mx-auto text-center space-y-6">
          <h2 class="text-3xl md:text-4xl font-extrabold text-[#002366]">
            "Meet Our Council Members"
          </h2>
          <p class="text-gray-700 text-lg md:text-xl max-w-3xl mx-auto">
            "Our dedicated council leads the Serjeant At Arms Society with vision and integrity. \
            Learn more about the individuals driving our mission forward."
          </p>
          <a href="/council" class=CTA_CLASS>"View Council Members"</a>
        </Reveal>
      </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
      <Title text="About Us"/>
      <div class="w-full">
        <Hero/>
        <WhoWeAre/>
        <VisionMission/>
        <Objectives/>
        <CouncilCta/>
      </div>
    }
}
