use dioxus::prelude::*;
use store::{Banner, BannerKind};

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

/// Inline success/error banner above a list.
#[component]
pub fn BannerView(banner: Option<Banner>, on_dismiss: EventHandler<u64>) -> Element {
    let Some(banner) = banner else {
        return rsx! {};
    };
    let id = banner.id;
    let class = match banner.kind {
        BannerKind::Success => "banner banner--success",
        BannerKind::Error => "banner banner--error",
    };

    rsx! {
        div {
            class: "{class}",
            role: if banner.is_error() { "alert" } else { "status" },
            if banner.is_error() {
                Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            } else {
                Icon { icon: FaCircleCheck, width: 14, height: 14 }
            }
            span { class: "flex-1", "{banner.message}" }
            button {
                class: "banner-close",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
