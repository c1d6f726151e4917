use dioxus::prelude::*;

use crate::components::ControlledList;
use crate::fixture;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the demo list.
#[component]
pub fn App() -> Element {
    let fixture = use_hook(fixture);
    let title = crate::window_title();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "demo",
            h1 { class: "demo-title", "{title}" }
            ControlledList { fixture }
        }
    }
}
