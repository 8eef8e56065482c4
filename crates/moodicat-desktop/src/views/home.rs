//! Home view - chat on the left, diary and tasks on the right

use dioxus::prelude::*;

use moodicat_core::route::Route;

use crate::components::{ChatPanel, DiaryPanel, Header, TaskPanel};

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            Header { active: Route::Home }

            div {
                class: "main-content",
                style: "
                    flex: 1;
                    display: grid;
                    grid-template-columns: minmax(360px, 2fr) 3fr;
                    gap: 16px;
                    padding: 16px 24px;
                    min-height: 0;
                ",

                ChatPanel {}

                div {
                    style: "display: grid; grid-template-rows: 1fr 1fr; gap: 16px; min-height: 0;",
                    DiaryPanel {}
                    TaskPanel {}
                }
            }
        }
    }
}
