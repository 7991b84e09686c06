//! The Hyper sub-layer keymap.

use crate::layers::{app, key, key_with, open, SubLayer, SubLayers};
use crate::models::{Modifier, HYPER};

const SELECT_TO_LINE_START: [Modifier; 2] = [Modifier::LeftCommand, Modifier::LeftShift];

/// All Hyper sub-layers, in the order they appear in the generated rules.
pub fn hyper_sub_layers() -> SubLayers {
    SubLayers::new()
        // b = "B"rowse
        .layer("b", SubLayer::new())
        // e = "E"dit
        .layer(
            "e",
            SubLayer::new()
                .bind("h", key("left_arrow"))
                .bind("j", key("down_arrow"))
                .bind("k", key("up_arrow"))
                .bind("l", key("right_arrow"))
                .bind("u", key("page_up"))
                .bind("m", key("page_down"))
                .bind("y", key_with("left_arrow", SELECT_TO_LINE_START))
                .bind("n", key_with("left_arrow", SELECT_TO_LINE_START))
                // emmet: balance outward / inward
                .bind("o", key_with("left_arrow", HYPER))
                .bind("i", key_with("right_arrow", HYPER))
                .bind("p", key_with("right_arrow", SELECT_TO_LINE_START))
                // go to definition
                .bind("return_or_enter", key("f12"))
                // next editor group
                .bind(
                    "g",
                    key_with("right_arrow", [Modifier::LeftControl, Modifier::LeftCommand]),
                ),
        )
        // o = "O"pen applications
        .layer(
            "o",
            SubLayer::new()
                .bind("1", app("1Password"))
                .bind("a", app("Arc"))
                .bind("b", app("Obsidian"))
                .bind("c", app("Notion Calendar"))
                .bind("v", app("Cursor"))
                .bind("d", app("Discord"))
                .bind("s", app("Slack"))
                .bind("n", app("Notion"))
                .bind("m", app("WhatsApp"))
                .bind("w", app("Warp"))
                .bind("f", app("Finder"))
                .bind("p", app("Spotify"))
                .bind("h", app("HTTPie")),
        )
        // s = "S"ystem
        .layer(
            "s",
            SubLayer::new()
                .bind("u", key("volume_increment"))
                .bind("j", key("volume_decrement"))
                .bind("i", key("display_brightness_increment"))
                .bind("k", key("display_brightness_decrement"))
                // lock screen
                .bind(
                    "l",
                    key_with("q", [Modifier::RightControl, Modifier::RightCommand]),
                )
                .bind("p", key("play_or_pause"))
                .bind("semicolon", key("fastforward"))
                .bind("d", open("raycast://extensions/yakitrak/do-not-disturb/toggle")),
        )
        // c = musi"c", kept on the left hand
        .layer(
            "c",
            SubLayer::new()
                .bind("p", key("play_or_pause"))
                .bind("n", key("fastforward"))
                .bind("b", key("rewind")),
        )
        // r = "R"aycast
        .layer(
            "r",
            SubLayer::new()
                .bind(
                    "1",
                    open("raycast://extensions/VladCuciureanu/toothpick/connect-favorite-device-1"),
                )
                .bind(
                    "2",
                    open("raycast://extensions/VladCuciureanu/toothpick/connect-favorite-device-2"),
                )
                .bind("a", open("raycast://extensions/raycast/raycast-ai/ai-chat"))
                .bind("b", open("raycast://extensions/raycast/system/toggle-bluetooth"))
                .bind("c", open("raycast://extensions/raycast/system/open-camera"))
                .bind(
                    "e",
                    open("raycast://extensions/raycast/emoji-symbols/search-emoji-symbols"),
                )
                .bind(
                    "h",
                    open("raycast://extensions/raycast/clipboard-history/clipboard-history"),
                )
                .bind("n", open("raycast://script-commands/dismiss-notifications"))
                .bind("p", open("raycast://extensions/raycast/raycast/confetti"))
                .bind(
                    "t",
                    open("raycast://extensions/raycast/system/toggle-system-appearance"),
                ),
        )
        // w = "W"indow management
        .layer(
            "w",
            SubLayer::new()
                .bind("h", open("raycast://extensions/raycast/window-management/left-half"))
                .bind(
                    "j",
                    open("raycast://extensions/raycast/window-management/bottom-right-quarter"),
                )
                .bind(
                    "k",
                    open("raycast://extensions/raycast/window-management/top-right-quarter"),
                )
                .bind("l", open("raycast://extensions/raycast/window-management/right-half"))
                .bind("f", open("raycast://extensions/raycast/window-management/maximize")),
        )
}
