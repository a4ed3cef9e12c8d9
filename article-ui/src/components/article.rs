//! Article preview
//!
//! Plain markup; typography, colors and width come from the CSS variables
//! set on the enclosing root region.

use dioxus::prelude::*;

const TITLE: &str = "A Portrait of Western Switzerland";

const PARAGRAPHS: &[&str] = &[
    "After several days in Geneva, the city starts to feel like a quiet, well-kept \
     garden. Trams glide along the lake, the fountain throws its plume into the air \
     and everything seems to run a few minutes ahead of schedule.",
    "An hour east by train, Lausanne climbs up the hillside in terraces. The old \
     town sits on the ridge, the harbor at Ouchy sits at the water, and the metro \
     between them is steep enough to feel like a funicular.",
    "Further along the shore the vineyards of Lavaux drop straight into Lake Geneva. \
     Walking the paths between the stone walls, you see the Alps on the far side of \
     the water and understand why people have been coming here for centuries.",
    "Montreux closes the route: a promenade lined with flowers, the castle of Chillon \
     standing on its rock, and in summer the jazz festival spilling music across the \
     whole lakefront until late at night.",
];

#[component]
pub fn Article() -> Element {
    rsx! {
        article { class: "article mx-auto leading-normal",
            h1 { class: "text-[2em] font-extrabold mb-[0.75em]", "{TITLE}" }
            for (i, paragraph) in PARAGRAPHS.iter().enumerate() {
                p { key: "{i}", class: "mb-[1em]", "{paragraph}" }
            }
        }
    }
}
