use leptos::html;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::Node;

use crate::nav::account::{self, AccountItem};
use crate::nav::links::{self, NavLink, RESOURCE_LINKS};
use crate::nav::{Menu, Menus, PressHub, Region, is_active};

const NAVY: &str = "text-[#002366]";
const ITEM_CLASS: &str =
    "flex items-center space-x-2 px-4 py-2 hover:bg-[#9e9210]/20 text-[#002366] transition";

/// Installs the document `mousedown` listener and shares its hub through
/// context. The listener goes away with the calling owner.
pub fn provide_press_hub() -> PressHub<Node> {
    let hub = PressHub::<Node>::new();
    let feed = hub.clone();

    let _ = use_event_listener(use_document(), leptos::ev::mousedown, move |ev| {
        if let Some(node) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) {
            feed.press(&node);
        }
    });

    provide_context(hub.clone());
    hub
}

/// Node refs backing each [`Region`].
#[derive(Clone, Copy)]
struct Regions {
    resources_desktop: NodeRef<html::Div>,
    resources_mobile: NodeRef<html::Div>,
    account_desktop: NodeRef<html::Div>,
    account_mobile_button: NodeRef<html::Div>,
    account_mobile_panel: NodeRef<html::Div>,
}

impl Regions {
    fn new() -> Self {
        Self {
            resources_desktop: NodeRef::new(),
            resources_mobile: NodeRef::new(),
            account_desktop: NodeRef::new(),
            account_mobile_button: NodeRef::new(),
            account_mobile_panel: NodeRef::new(),
        }
    }

    fn node(&self, region: Region) -> NodeRef<html::Div> {
        match region {
            Region::ResourcesDesktop => self.resources_desktop,
            Region::ResourcesMobile => self.resources_mobile,
            Region::AccountDesktop => self.account_desktop,
            Region::AccountMobileButton => self.account_mobile_button,
            Region::AccountMobilePanel => self.account_mobile_panel,
        }
    }

    fn contains(&self, menu: Menu, target: &Node) -> bool {
        menu.regions().iter().any(|region| {
            self.node(*region)
                .get_untracked()
                .is_some_and(|el| el.contains(Some(target)))
        })
    }
}

fn desktop_link(
    link: &'static NavLink,
    pathname: Memo<String>,
    menus: RwSignal<Menus>,
) -> impl IntoView {
    let active = move || pathname.with(|p| is_active(p, link.href));

    view! {
      <a
        href=link.href
        class=move || if active() {
          "relative group font-bold text-[#9e9210]"
        } else {
          "relative group text-[#002366]"
        }
        aria-current=move || active().then_some("page")
        on:click=move |_| menus.update(Menus::select_link)
      >
        { link.label }
        <span class=move || format!(
          "absolute left-0 -bottom-1 h-0.5 bg-[#9e9210] transition-all duration-300 {}",
          if active() { "w-full" } else { "w-0 group-hover:w-full" }
        )></span>
      </a>
    }
}

fn mobile_link(
    link: &'static NavLink,
    pathname: Memo<String>,
    menus: RwSignal<Menus>,
) -> impl IntoView {
    let active = move || pathname.with(|p| is_active(p, link.href));

    view! {
      <a
        href=link.href
        class=move || if active() {
          "hover:text-[#9e9210] font-bold text-[#9e9210]"
        } else {
          "hover:text-[#9e9210]"
        }
        aria-current=move || active().then_some("page")
        on:click=move |_| menus.update(Menus::select_link)
      >
        { link.label }
      </a>
    }
}

#[component]
fn Chevron(open: Signal<bool>) -> impl IntoView {
    view! {
      <span class=move || format!(
        "inline-block text-xs transition-transform duration-300 {}",
        if open.get() { "rotate-180" } else { "" }
      )>"▾"</span>
    }
}

#[component]
fn AccountItems(menus: RwSignal<Menus>) -> impl IntoView {
    AccountItem::ALL
        .into_iter()
        .map(|item| {
            let icon = view! {
              <span class=format!("w-4 text-center {}", item.icon_class())>{ item.icon() }</span>
            };

            match item.href() {
                Some(href) => view! {
                  <a href=href class=ITEM_CLASS on:click=move |_| menus.update(Menus::select_link)>
                    { icon }
                    <span>{ item.label() }</span>
                  </a>
                }
                .into_any(),
                // logout has nowhere to go
                None => view! {
                  <hr class="my-1"/>
                  <button
                    type="button"
                    class=format!("{ITEM_CLASS} w-full text-left")
                    on:click=move |_| {
                      log!("logout pressed; no account backend is connected");
                      account::logout();
                    }
                  >
                    { icon }
                    <span>{ item.label() }</span>
                  </button>
                }
                .into_any(),
            }
        })
        .collect_view()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let menus = RwSignal::new(Menus::default());
    let regions = Regions::new();

    let hub = use_context::<PressHub<Node>>().unwrap_or_else(provide_press_hub);
    let subscription = hub.subscribe(move |target: &Node| {
        menus.update(|m| m.dismiss_outside(|menu| regions.contains(menu, target)));
    });
    on_cleanup(move || drop(subscription));

    let open = move |menu: Menu| menus.with(|m| m.is_open(menu));
    let toggle = move |menu: Menu| menus.update(|m| m.toggle(menu));
    let expanded = move |menu: Menu| if open(menu) { "true" } else { "false" };

    view! {
      <header class="bg-gray-100 shadow-sm sticky top-0 z-50">
        <div class="max-w-7xl mx-auto px-6 py-3 flex justify-between items-center relative">
          <a href="/" class="text-2xl font-bold text-[#002366]">
            "Serjeant"<span class="text-[#9e9210]">"AtArms"</span>
          </a>

          <nav class=format!("hidden md:flex space-x-8 {NAVY} font-medium items-center")>
            { links::leading().iter().map(|l| desktop_link(l, pathname, menus)).collect_view() }

            <div class="relative" node_ref=regions.resources_desktop>
              <button
                type="button"
                class="font-medium text-[#002366] hover:text-[#9e9210] flex items-center gap-1"
                aria-expanded=move || expanded(Menu::Resources)
                on:click=move |_| toggle(Menu::Resources)
              >
                "Public Resources"
                <Chevron open=Signal::derive(move || open(Menu::Resources)) />
              </button>
              <Show when=move || open(Menu::Resources)>
                <div class="absolute top-full left-0 mt-2 w-60 bg-white rounded-xl shadow-lg border border-gray-100 transition-all z-50">
                  { RESOURCE_LINKS.iter().map(|l| view! {
                    <a
                      href=l.href
                      class="block px-4 py-2 text-[#002366] hover:bg-[#9e9210]/20 transition"
                      on:click=move |_| menus.update(Menus::select_link)
                    >
                      { l.label }
                    </a>
                  }).collect_view() }
                </div>
              </Show>
            </div>

            { links::trailing().iter().map(|l| desktop_link(l, pathname, menus)).collect_view() }
          </nav>

          <div class="relative hidden md:block" node_ref=regions.account_desktop>
            <button
              type="button"
              class="flex items-center space-x-2 bg-white px-4 py-2 rounded-full shadow-md text-[#002366] hover:bg-[#002366] hover:text-[#9e9210] transition-all duration-300"
              aria-expanded=move || expanded(Menu::AccountDesktop)
              on:click=move |_| toggle(Menu::AccountDesktop)
            >
              <span aria-hidden="true">"👤"</span>
              <span class="font-medium">"Account"</span>
            </button>
            <Show when=move || open(Menu::AccountDesktop)>
              <div class="absolute right-0 mt-3 w-48 bg-white rounded-xl shadow-lg border border-gray-100 animate-slide-down">
                <AccountItems menus />
              </div>
            </Show>
          </div>

          <div class="flex md:hidden items-center space-x-4">
            <div node_ref=regions.account_mobile_button>
              <button
                type="button"
                class="flex items-center justify-center w-10 h-10 bg-white rounded-full shadow-md text-[#002366] hover:bg-[#002366] hover:text-[#9e9210] transition-all duration-300"
                aria-label="Account"
                aria-expanded=move || expanded(Menu::AccountMobile)
                on:click=move |_| toggle(Menu::AccountMobile)
              >
                <span aria-hidden="true">"👤"</span>
              </button>
            </div>

            <button
              type="button"
              class="text-2xl text-[#002366] hover:text-[#9e9210] transition"
              aria-label="Toggle navigation"
              aria-expanded=move || if menus.with(Menus::panel_open) { "true" } else { "false" }
              on:click=move |_| menus.update(Menus::toggle_panel)
            >
              { move || if menus.with(Menus::panel_open) { "✕" } else { "☰" } }
            </button>
          </div>
        </div>

        <Show when=move || menus.with(Menus::panel_open)>
          <div class="md:hidden bg-gray-50 border-t border-gray-200">
            <nav class=format!("flex flex-col space-y-2 p-4 {NAVY} font-medium")>
              { links::leading().iter().map(|l| mobile_link(l, pathname, menus)).collect_view() }

              <div class="flex flex-col" node_ref=regions.resources_mobile>
                <button
                  type="button"
                  class="text-[#002366] font-medium flex justify-between items-center px-2 py-2 hover:text-[#9e9210] transition"
                  aria-expanded=move || expanded(Menu::Resources)
                  on:click=move |_| toggle(Menu::Resources)
                >
                  "Public Resources"
                  <Chevron open=Signal::derive(move || open(Menu::Resources)) />
                </button>
                <Show when=move || open(Menu::Resources)>
                  { RESOURCE_LINKS.iter().map(|l| view! {
                    <a
                      href=l.href
                      class="pl-4 py-2 text-[#002366] hover:text-[#9e9210] transition"
                      on:click=move |_| menus.update(Menus::select_link)
                    >
                      { l.label }
                    </a>
                  }).collect_view() }
                </Show>
              </div>

              { links::trailing().iter().map(|l| mobile_link(l, pathname, menus)).collect_view() }
            </nav>
          </div>
        </Show>

        <Show when=move || open(Menu::AccountMobile)>
          <div
            node_ref=regions.account_mobile_panel
            class="md:hidden absolute top-16 right-4 w-48 bg-white rounded-xl shadow-lg border border-gray-100 animate-slide-down z-50"
          >
            <AccountItems menus />
          </div>
        </Show>
      </header>
    }
}
