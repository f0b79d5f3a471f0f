use dioxus::prelude::*;

use crate::vm::FlagVm;

#[component]
pub fn FlagImage(flag: FlagVm) -> Element {
    rsx! {
        div { class: "flag", style: "{flag.style}",
            for (i, band_style) in flag.band_styles.iter().enumerate() {
                div { key: "{i}", class: "flag-band", style: "{band_style}" }
            }
            if let Some(overlay) = flag.overlay.as_ref() {
                div { class: "{overlay.class}", style: "{overlay.style}" }
            }
        }
    }
}
