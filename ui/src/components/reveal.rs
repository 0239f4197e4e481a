use leptos::html;
use leptos::prelude::*;
use leptos_use::use_intersection_observer;

/// Direction a block travels as it enters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Slide {
    /// rises from below
    #[default]
    Up,
    /// slides in from the right
    Left,
}

impl Slide {
    pub fn classes(self, entered: bool) -> &'static str {
        match (self, entered) {
            (_, true) => "opacity-100 translate-x-0 translate-y-0",
            (Slide::Up, false) => "opacity-0 translate-y-12",
            (Slide::Left, false) => "opacity-0 translate-x-12",
        }
    }
}

/// One-shot latch behind the entrance transition.
///
/// Once a block has entered it stays in its final state; scrolling it out
/// of view and back does not replay anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entrance {
    entered: bool,
}

impl Entrance {
    /// Feeds one intersection report. Returns `true` only for the report
    /// that triggers the entrance.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn entered(self) -> bool {
        self.entered
    }
}

#[component]
pub fn Reveal(
    #[prop(optional)] from: Slide,
    #[prop(optional)] delay_ms: u32,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target: NodeRef<html::Div> = NodeRef::new();
    let entrance = RwSignal::new(Entrance::default());

    let _ = use_intersection_observer(target, move |entries, observer| {
        let intersecting = entries.iter().any(|e| e.is_intersecting());
        let mut fired = false;
        entrance.update(|e| fired = e.observe(intersecting));

        // nothing left to watch for
        if fired {
            observer.disconnect();
        }
    });

    view! {
      <div
        node_ref=target
        class=move || format!(
          "{class} transition-all duration-700 ease-out {}",
          from.classes(entrance.get().entered())
        )
        style=format!("transition-delay: {delay_ms}ms;")
      >
        { children() }
      </div>
    }
}
