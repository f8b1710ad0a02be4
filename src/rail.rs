//! Railway line colours for the Tokyo area.
//!
//! Line names are the official Japanese names and are matched exactly, with no
//! normalization or case folding. Lines that share a service colour (for example
//! the Keio branches) repeat the same triple.
//!
//! # Examples
//!
//! ```
//! use transit_palette::rail::rail_color;
//!
//! assert_eq!(rail_color("山手線"), Some([154, 205, 50]));
//! assert_eq!(rail_color("unknown"), None);
//! ```

use egui::Color32;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::color::triple_to_color32;

/// All known lines in definition order, grouped by operator.
pub const RAIL_COLORS: &[(&str, [u8; 3])] = &[
    // 東京メトロ
    ("2号線日比谷線", [181, 181, 173]),
    ("3号線銀座線", [241, 154, 56]),
    ("4号線丸ノ内線", [226, 67, 64]),
    ("4号線丸ノ内線分岐線", [226, 67, 64]),
    ("5号線東西線", [68, 153, 187]),
    ("7号線南北線", [77, 169, 155]),
    ("8号線有楽町線", [189, 165, 119]),
    ("9号線千代田線", [84, 184, 137]),
    ("11号線半蔵門線", [139, 118, 208]),
    ("13号線副都心線", [147, 97, 58]),
    // 都営地下鉄
    ("1号線浅草線", [208, 78, 60]),
    ("6号線三田線", [46, 106, 177]),
    ("10号線新宿線", [179, 193, 70]),
    ("12号線大江戸線", [182, 39, 93]),
    // JR
    ("山手線", [154, 205, 50]),
    ("赤羽線（埼京線）", [0, 172, 154]),
    ("東北線（埼京線）", [0, 172, 154]),
    // 京浜東北線 runs on the 東北線 and 根岸線 tracks
    ("東北線", [0, 178, 229]),
    ("根岸線", [0, 178, 229]),
    ("中央線", [241, 90, 34]),
    ("青梅線", [241, 90, 34]),
    ("五日市線", [241, 90, 34]),
    ("総武線", [255, 212, 0]),
    ("南武線", [255, 212, 0]),
    ("鶴見線", [255, 212, 0]),
    ("常磐線", [0, 178, 97]),
    ("成田線", [0, 178, 97]),
    ("京葉線", [201, 37, 47]),
    ("武蔵野線", [241, 90, 34]),
    ("東海道線", [246, 139, 30]),
    ("伊東線", [246, 139, 30]),
    ("宇都宮線", [246, 139, 30]),
    ("高崎線", [246, 139, 30]),
    // 京王
    ("京王線", [221, 0, 119]),
    ("競馬場線", [221, 0, 119]),
    ("高尾線", [221, 0, 119]),
    ("相模原線", [221, 0, 119]),
    ("動物園線", [221, 0, 119]),
    ("井の頭線", [0, 0, 136]),
    // 小田急
    ("江ノ島線", [34, 136, 204]),
    ("小田原線", [34, 136, 204]),
    ("多摩線", [34, 136, 204]),
];

static RAIL_COLOR_MAP: Lazy<HashMap<&'static str, [u8; 3]>> =
    Lazy::new(|| RAIL_COLORS.iter().copied().collect());

/// Returns the full name → RGB lookup table.
pub fn rail_color_map() -> &'static HashMap<&'static str, [u8; 3]> {
    &RAIL_COLOR_MAP
}

/// Looks up the colour of a line by its exact name.
///
/// No fallback is applied; callers decide what to draw for unknown lines.
pub fn rail_color(name: &str) -> Option<[u8; 3]> {
    let color = RAIL_COLOR_MAP.get(name).copied();
    if color.is_none() {
        log::debug!("no rail color for line {:?}", name);
    }
    color
}

/// Like [`rail_color`], returned as a [`Color32`].
pub fn rail_color32(name: &str) -> Option<Color32> {
    rail_color(name).map(triple_to_color32)
}

/// Looks up a line colour, substituting `fallback` for unknown lines.
pub fn rail_color_or(name: &str, fallback: [u8; 3]) -> [u8; 3] {
    rail_color(name).unwrap_or(fallback)
}

/// Iterates over every line and its colour in definition order.
pub fn rail_lines() -> impl Iterator<Item = (&'static str, [u8; 3])> {
    RAIL_COLORS.iter().copied()
}
