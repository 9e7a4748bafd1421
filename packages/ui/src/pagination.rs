use api::Pagination;
use dioxus::prelude::*;
use store::page_window;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

const WINDOW: u32 = 5;

/// Previous/next buttons plus a window of page numbers. Buttons outside
/// `[1, total_pages]` are disabled, so they never request such a page.
#[component]
pub fn PaginationBar(pagination: Pagination, page: u32, on_page: EventHandler<u32>) -> Element {
    let last = pagination.last_page();
    if last <= 1 {
        return rsx! {
            div { class: "pagination-summary", "{pagination.total_count} total" }
        };
    }
    let pages = page_window(&pagination, page, WINDOW);

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "pagination-btn",
                disabled: page <= 1,
                onclick: move |_| on_page.call(page - 1),
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
            }
            for p in pages {
                button {
                    key: "{p}",
                    class: if p == page { "pagination-btn pagination-btn--active" } else { "pagination-btn" },
                    onclick: move |_| on_page.call(p),
                    "{p}"
                }
            }
            button {
                class: "pagination-btn",
                disabled: page >= last,
                onclick: move |_| on_page.call(page + 1),
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
            span { class: "pagination-summary", "Page {page} of {last} ({pagination.total_count} total)" }
        }
    }
}
