//! Built-in demo deck shown when no deck file is given.

use scenely_core::deck::{StaticDeck, StaticScene};

pub const TITLE: &str = "The Long Way North";

const DISPATCHES: [&str; 4] = [
    "Day 12: ice fog until noon, then sudden clear skies",
    "Day 13: sled runner cracked, repaired with spare birch",
    "Day 15: open water spotted from the ridge",
    "Day 16: first seabirds in three weeks",
];

const SCENES: [StaticScene<'static>; 9] = [
    StaticScene::new(
        "The Long Way North",
        "An expedition told one scene at a time.\n\
         Step through with the arrow keys, the dots below, or a quick swipe.",
    ),
    StaticScene::new(
        "Departure",
        "We left the harbor on a grey morning in April, four sledges and a \
         dog team that did not yet trust us. The plan was plain on paper: \
         follow the coast to the last depot, then turn inland where the \
         charts go blank.",
    ),
    StaticScene::new(
        "The Coast Road",
        "For nine days the shoreline carried us. Old pack ice, rafted and \
         refrozen, made a road of sorts.\n\
         Twice we lost a runner to pressure ridges; twice the carpenter \
         shrugged and fixed it before supper.",
    ),
    StaticScene::new(
        "The Last Depot",
        "The depot hut was half under snow, its flag bleached to bone. We \
         dug out the door, counted tins until midnight, and slept warm for \
         the first time since the harbor.",
    ),
    StaticScene::new(
        "Turning Inland",
        "Past the depot there were no more cairns. The compass grew lazy \
         this far north, so we steered by the sun when we had it and by the \
         sastrugi when we did not.",
    ),
    StaticScene::new(
        "The Plateau",
        "A week of climbing brought us onto the plateau, a white table \
         under a hard blue sky. The cold there was a different animal: \
         patient, without wind, settling into the sledge lashings and the \
         zipper pulls and our own slow thoughts.",
    ),
    StaticScene::new(
        "Dispatches",
        "Fragments from the trail log, as they were wired back to the \
         coast station.",
    )
    .with_ticker(&DISPATCHES),
    StaticScene::new(
        "Open Water",
        "From the ridge we saw it: a dark lead running east to west, steam \
         rising off it like breath. Where the charts promised land, the sea \
         had gotten there first.",
    ),
    StaticScene::new(
        "What We Brought Back",
        "No flag planted, no record broken. A notebook of soundings, three \
         hundred photographs, and the particular quiet that follows a long \
         journey home.\n\
         Press r to start over.",
    ),
];

const DECK: StaticDeck<'static> = StaticDeck::new(&SCENES);

pub fn deck() -> StaticDeck<'static> {
    DECK
}
