//! Built-in campaign: eight levels descending through a small dungeon.
//!
//! Every collectible here sits one step off a corridor cell that can only be
//! occupied in a single configuration, so each pickup message is consumed
//! exactly once and in level order.

use super::{
    campaign::{CampaignSource, LevelSource},
    rules::MessagePolicy,
};

const LEVELS: [(usize, &str); 8] = [
    (
        13,
        "
        # # # # # # # # # # # # #
        # @ . . # . . . . . . . #
        # . # . # . # # # # # . #
        # . # . . . # > . $ . $ #
        # # # # # # # # # # # # #
        ",
    ),
    (
        7,
        "
        # # # # # # #
        # @ . 0 . . #
        # . # # . . #
        # . . . 0 > #
        # # # # # # #
        ",
    ),
    (
        8,
        "
        # # # # # # # #
        # @ . 0 0 . . #
        # . # . . . . #
        # . . . 0 . > #
        # # # # # # # #
        ",
    ),
    (
        9,
        "
        # # # # # # # # #
        # @ . 0 . ^ . . #
        # . # # # . # . #
        # . . . . . # $ #
        # # # # # # # > #
        # # # # # # # # #
        ",
    ),
    (
        9,
        "
        # # # # # # # # #
        # @ . . # . . . #
        # . 0 . ^ . 0 . #
        # . . # # . # ^ #
        # . . . . . # > #
        # # # # # # # # #
        ",
    ),
    (
        10,
        "
        # # # # # # # # # #
        # @ . . . # . . . #
        # . 0 . . 0 . # . #
        # . . . . . . ^ . #
        # # # . # # . # ^ #
        # . . . . . . # > #
        # # # # # # # # # #
        ",
    ),
    (
        9,
        "
        # # # # # # # # #
        # @ . 0 . . ^ . #
        # # # # # # # . #
        # > . $ . . $ . #
        # # # # # # # # #
        ",
    ),
    (
        11,
        "
        # # # # # # # # # # #
        # . . . . . . . . . #
        # . # # # # # # # . #
        # @ # $ . . $ . . $ #
        # # # # # # # # # # #
        ",
    ),
];

const INTRO_MESSAGES: [&str; 8] = [
    "Welcome to Nethack, {y/n}! You are @, chaotic halfling wizard. Click arrows below to get around the walls (#) to the stairs (>).",
    "Push boulders (0) out of the way to reach the stairs (>). You can't pull boulders. You feel confused!",
    "You feel strong! You (@) showed the boulder (0) who's boss! Boulders (0) can't move into other boulders (0), walls (#), or stairs (>).",
    "You (@) look similar to a boulder (0) but you're actually different entities! Boulders (0) fall into pits (^), you (@) can't!",
    "Do you often make irreversible mistakes. Your browser's BACK functionality (button or swipe) resets to an earlier move. You feel relaxed!",
    "The level is hard! You feel angry at video games! You hear the distant sound of someone touching grass.",
    "You feel hopeful. You are beginning to feel hungry. You hear footsteps, or possibly just the echo of your own.",
    "You were a vegetarian. You used no wishes. Your gold had meaning. It ends as it began: you (@) walking an ASCII grid, making your own purpose.",
];

const PICKUP_MESSAGES: [&str; 8] = [
    "15 gold coins! You pick them up.",
    "27 gold coins! You feel lucky!",
    "41 gold coins! You feel doubtful you will ever spend this.",
    "22 gold coins! You feel doubtful that you even exist in a universe in which this gold can be spent.",
    "117 gold coins! Your pack feels heavy with the weight of your useless gold. You collect it anyway!",
    "4 gold coins. It can't be spent, yet the gold still has whatever meaning you ascribe to it. It is yours alone; its meaning is known only to you.",
    "22 gold coins! That's nice!",
    "1 gold coin. This one feels like the most important one. You eat it. The gold coin tastes disgusting!",
];

/// Raw source of the built-in campaign.
pub fn builtin_source() -> CampaignSource {
    CampaignSource {
        levels: LEVELS
            .iter()
            .map(|&(width, layout)| LevelSource {
                width,
                layout: layout.to_string(),
            })
            .collect(),
        intro_messages: INTRO_MESSAGES.iter().map(|m| m.to_string()).collect(),
        pickup_messages: PICKUP_MESSAGES.iter().map(|m| m.to_string()).collect(),
        policy: MessagePolicy::default(),
    }
}
