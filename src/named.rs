//! Named RGB888 colors
//!
//! The common HTML color names as `0x00RRGGBB` constants, plus a lookup
//! table for resolving names at runtime (for example from a config file).

// Reds
pub const MAROON: u32 = 0x800000;
pub const DARK_RED: u32 = 0x8B0000;
pub const BROWN: u32 = 0xA52A2A;
pub const FIREBRICK: u32 = 0xB22222;
pub const CRIMSON: u32 = 0xDC143C;
pub const RED: u32 = 0xFF0000;
pub const TOMATO: u32 = 0xFF6347;
pub const CORAL: u32 = 0xFF7F50;
pub const INDIAN_RED: u32 = 0xCD5C5C;
pub const LIGHT_CORAL: u32 = 0xF08080;
pub const DARK_SALMON: u32 = 0xE9967A;
pub const SALMON: u32 = 0xFA8072;
pub const LIGHT_SALMON: u32 = 0xFFA07A;

// Oranges and yellows
pub const ORANGE_RED: u32 = 0xFF4500;
pub const DARK_ORANGE: u32 = 0xFF8C00;
pub const ORANGE: u32 = 0xFFA500;
pub const GOLD: u32 = 0xFFD700;
pub const DARK_GOLDEN_ROD: u32 = 0xB8860B;
pub const GOLDEN_ROD: u32 = 0xDAA520;
pub const PALE_GOLDEN_ROD: u32 = 0xEEE8AA;
pub const DARK_KHAKI: u32 = 0xBDB76B;
pub const KHAKI: u32 = 0xF0E68C;
pub const OLIVE: u32 = 0x808000;
pub const YELLOW: u32 = 0xFFFF00;

// Greens
pub const YELLOW_GREEN: u32 = 0x9ACD32;
pub const DARK_OLIVE_GREEN: u32 = 0x556B2F;
pub const OLIVE_DRAB: u32 = 0x6B8E23;
pub const LAWN_GREEN: u32 = 0x7CFC00;
pub const CHARTREUSE: u32 = 0x7FFF00;
pub const GREEN_YELLOW: u32 = 0xADFF2F;
pub const DARK_GREEN: u32 = 0x006400;
pub const GREEN: u32 = 0x008000;
pub const FOREST_GREEN: u32 = 0x228B22;
pub const LIME: u32 = 0x00FF00;
pub const LIME_GREEN: u32 = 0x32CD32;
pub const LIGHT_GREEN: u32 = 0x90EE90;
pub const PALE_GREEN: u32 = 0x98FB98;
pub const DARK_SEA_GREEN: u32 = 0x8FBC8F;
pub const MEDIUM_SPRING_GREEN: u32 = 0x00FA9A;
pub const SPRING_GREEN: u32 = 0x00FF7F;
pub const SEA_GREEN: u32 = 0x2E8B57;
pub const MEDIUM_AQUA_MARINE: u32 = 0x66CDAA;
pub const MEDIUM_SEA_GREEN: u32 = 0x3CB371;
pub const LIGHT_SEA_GREEN: u32 = 0x20B2AA;

// Cyans
pub const DARK_SLATE_GRAY: u32 = 0x2F4F4F;
pub const TEAL: u32 = 0x008080;
pub const DARK_CYAN: u32 = 0x008B8B;
pub const AQUA: u32 = 0x00FFFF;
pub const CYAN: u32 = 0x00FFFF;
pub const LIGHT_CYAN: u32 = 0xE0FFFF;
pub const DARK_TURQUOISE: u32 = 0x00CED1;
pub const TURQUOISE: u32 = 0x40E0D0;
pub const MEDIUM_TURQUOISE: u32 = 0x48D1CC;
pub const PALE_TURQUOISE: u32 = 0xAFEEEE;
pub const AQUA_MARINE: u32 = 0x7FFFD4;

// Blues
pub const POWDER_BLUE: u32 = 0xB0E0E6;
pub const CADET_BLUE: u32 = 0x5F9EA0;
pub const STEEL_BLUE: u32 = 0x4682B4;
pub const CORN_FLOWER_BLUE: u32 = 0x6495ED;
pub const DEEP_SKY_BLUE: u32 = 0x00BFFF;
pub const DODGER_BLUE: u32 = 0x1E90FF;
pub const LIGHT_BLUE: u32 = 0xADD8E6;
pub const SKY_BLUE: u32 = 0x87CEEB;
pub const LIGHT_SKY_BLUE: u32 = 0x87CEFA;
pub const MIDNIGHT_BLUE: u32 = 0x191970;
pub const NAVY: u32 = 0x000080;
pub const DARK_BLUE: u32 = 0x00008B;
pub const MEDIUM_BLUE: u32 = 0x0000CD;
pub const BLUE: u32 = 0x0000FF;
pub const ROYAL_BLUE: u32 = 0x4169E1;

// Purples and pinks
pub const BLUE_VIOLET: u32 = 0x8A2BE2;
pub const INDIGO: u32 = 0x4B0082;
pub const DARK_SLATE_BLUE: u32 = 0x483D8B;
pub const SLATE_BLUE: u32 = 0x6A5ACD;
pub const MEDIUM_SLATE_BLUE: u32 = 0x7B68EE;
pub const MEDIUM_PURPLE: u32 = 0x9370DB;
pub const DARK_MAGENTA: u32 = 0x8B008B;
pub const DARK_VIOLET: u32 = 0x9400D3;
pub const DARK_ORCHID: u32 = 0x9932CC;
pub const MEDIUM_ORCHID: u32 = 0xBA55D3;
pub const PURPLE: u32 = 0x800080;
pub const THISTLE: u32 = 0xD8BFD8;
pub const PLUM: u32 = 0xDDA0DD;
pub const VIOLET: u32 = 0xEE82EE;
pub const MAGENTA: u32 = 0xFF00FF;
pub const ORCHID: u32 = 0xDA70D6;
pub const MEDIUM_VIOLET_RED: u32 = 0xC71585;
pub const PALE_VIOLET_RED: u32 = 0xDB7093;
pub const DEEP_PINK: u32 = 0xFF1493;
pub const HOT_PINK: u32 = 0xFF69B4;
pub const LIGHT_PINK: u32 = 0xFFB6C1;
pub const PINK: u32 = 0xFFC0CB;

// Whites and browns
pub const ANTIQUE_WHITE: u32 = 0xFAEBD7;
pub const BEIGE: u32 = 0xF5F5DC;
pub const BISQUE: u32 = 0xFFE4C4;
pub const BLANCHED_ALMOND: u32 = 0xFFEBCD;
pub const WHEAT: u32 = 0xF5DEB3;
pub const CORNSILK: u32 = 0xFFF8DC;
pub const LEMON_CHIFFON: u32 = 0xFFFACD;
pub const LIGHT_GOLDEN_ROD_YELLOW: u32 = 0xFAFAD2;
pub const LIGHT_YELLOW: u32 = 0xFFFFE0;
pub const SADDLE_BROWN: u32 = 0x8B4513;
pub const SIENNA: u32 = 0xA0522D;
pub const CHOCOLATE: u32 = 0xD2691E;
pub const PERU: u32 = 0xCD853F;
pub const SANDY_BROWN: u32 = 0xF4A460;
pub const BURLY_WOOD: u32 = 0xDEB887;
pub const TAN: u32 = 0xD2B48C;
pub const ROSY_BROWN: u32 = 0xBC8F8F;
pub const MOCCASIN: u32 = 0xFFE4B5;
pub const NAVAJO_WHITE: u32 = 0xFFDEAD;
pub const PEACH_PUFF: u32 = 0xFFDAB9;
pub const MISTY_ROSE: u32 = 0xFFE4E1;
pub const LAVENDER_BLUSH: u32 = 0xFFF0F5;
pub const LINEN: u32 = 0xFAF0E6;
pub const OLD_LACE: u32 = 0xFDF5E6;
pub const PAPAYA_WHIP: u32 = 0xFFEFD5;
pub const SEA_SHELL: u32 = 0xFFF5EE;
pub const MINT_CREAM: u32 = 0xF5FFFA;

// Grays
pub const SLATE_GRAY: u32 = 0x708090;
pub const LIGHT_SLATE_GRAY: u32 = 0x778899;
pub const LIGHT_STEEL_BLUE: u32 = 0xB0C4DE;
pub const LAVENDER: u32 = 0xE6E6FA;
pub const FLORAL_WHITE: u32 = 0xFFFAF0;
pub const ALICE_BLUE: u32 = 0xF0F8FF;
pub const GHOST_WHITE: u32 = 0xF8F8FF;
pub const HONEYDEW: u32 = 0xF0FFF0;
pub const IVORY: u32 = 0xFFFFF0;
pub const AZURE: u32 = 0xF0FFFF;
pub const SNOW: u32 = 0xFFFAFA;
pub const BLACK: u32 = 0x000000;
pub const DIM_GRAY: u32 = 0x696969;
pub const GRAY: u32 = 0x808080;
pub const DARK_GRAY: u32 = 0xA9A9A9;
pub const SILVER: u32 = 0xC0C0C0;
pub const LIGHT_GRAY: u32 = 0xD3D3D3;
pub const GAINSBORO: u32 = 0xDCDCDC;
pub const WHITE_SMOKE: u32 = 0xF5F5F5;
pub const WHITE: u32 = 0xFFFFFF;

/// Every named color as `(snake_case name, value)`, in table order
pub const NAMED_COLORS: &[(&str, u32)] = &[
    ("maroon", MAROON),
    ("dark_red", DARK_RED),
    ("brown", BROWN),
    ("firebrick", FIREBRICK),
    ("crimson", CRIMSON),
    ("red", RED),
    ("tomato", TOMATO),
    ("coral", CORAL),
    ("indian_red", INDIAN_RED),
    ("light_coral", LIGHT_CORAL),
    ("dark_salmon", DARK_SALMON),
    ("salmon", SALMON),
    ("light_salmon", LIGHT_SALMON),
    ("orange_red", ORANGE_RED),
    ("dark_orange", DARK_ORANGE),
    ("orange", ORANGE),
    ("gold", GOLD),
    ("dark_golden_rod", DARK_GOLDEN_ROD),
    ("golden_rod", GOLDEN_ROD),
    ("pale_golden_rod", PALE_GOLDEN_ROD),
    ("dark_khaki", DARK_KHAKI),
    ("khaki", KHAKI),
    ("olive", OLIVE),
    ("yellow", YELLOW),
    ("yellow_green", YELLOW_GREEN),
    ("dark_olive_green", DARK_OLIVE_GREEN),
    ("olive_drab", OLIVE_DRAB),
    ("lawn_green", LAWN_GREEN),
    ("chartreuse", CHARTREUSE),
    ("green_yellow", GREEN_YELLOW),
    ("dark_green", DARK_GREEN),
    ("green", GREEN),
    ("forest_green", FOREST_GREEN),
    ("lime", LIME),
    ("lime_green", LIME_GREEN),
    ("light_green", LIGHT_GREEN),
    ("pale_green", PALE_GREEN),
    ("dark_sea_green", DARK_SEA_GREEN),
    ("medium_spring_green", MEDIUM_SPRING_GREEN),
    ("spring_green", SPRING_GREEN),
    ("sea_green", SEA_GREEN),
    ("medium_aqua_marine", MEDIUM_AQUA_MARINE),
    ("medium_sea_green", MEDIUM_SEA_GREEN),
    ("light_sea_green", LIGHT_SEA_GREEN),
    ("dark_slate_gray", DARK_SLATE_GRAY),
    ("teal", TEAL),
    ("dark_cyan", DARK_CYAN),
    ("aqua", AQUA),
    ("cyan", CYAN),
    ("light_cyan", LIGHT_CYAN),
    ("dark_turquoise", DARK_TURQUOISE),
    ("turquoise", TURQUOISE),
    ("medium_turquoise", MEDIUM_TURQUOISE),
    ("pale_turquoise", PALE_TURQUOISE),
    ("aqua_marine", AQUA_MARINE),
    ("powder_blue", POWDER_BLUE),
    ("cadet_blue", CADET_BLUE),
    ("steel_blue", STEEL_BLUE),
    ("corn_flower_blue", CORN_FLOWER_BLUE),
    ("deep_sky_blue", DEEP_SKY_BLUE),
    ("dodger_blue", DODGER_BLUE),
    ("light_blue", LIGHT_BLUE),
    ("sky_blue", SKY_BLUE),
    ("light_sky_blue", LIGHT_SKY_BLUE),
    ("midnight_blue", MIDNIGHT_BLUE),
    ("navy", NAVY),
    ("dark_blue", DARK_BLUE),
    ("medium_blue", MEDIUM_BLUE),
    ("blue", BLUE),
    ("royal_blue", ROYAL_BLUE),
    ("blue_violet", BLUE_VIOLET),
    ("indigo", INDIGO),
    ("dark_slate_blue", DARK_SLATE_BLUE),
    ("slate_blue", SLATE_BLUE),
    ("medium_slate_blue", MEDIUM_SLATE_BLUE),
    ("medium_purple", MEDIUM_PURPLE),
    ("dark_magenta", DARK_MAGENTA),
    ("dark_violet", DARK_VIOLET),
    ("dark_orchid", DARK_ORCHID),
    ("medium_orchid", MEDIUM_ORCHID),
    ("purple", PURPLE),
    ("thistle", THISTLE),
    ("plum", PLUM),
    ("violet", VIOLET),
    ("magenta", MAGENTA),
    ("orchid", ORCHID),
    ("medium_violet_red", MEDIUM_VIOLET_RED),
    ("pale_violet_red", PALE_VIOLET_RED),
    ("deep_pink", DEEP_PINK),
    ("hot_pink", HOT_PINK),
    ("light_pink", LIGHT_PINK),
    ("pink", PINK),
    ("antique_white", ANTIQUE_WHITE),
    ("beige", BEIGE),
    ("bisque", BISQUE),
    ("blanched_almond", BLANCHED_ALMOND),
    ("wheat", WHEAT),
    ("cornsilk", CORNSILK),
    ("lemon_chiffon", LEMON_CHIFFON),
    ("light_golden_rod_yellow", LIGHT_GOLDEN_ROD_YELLOW),
    ("light_yellow", LIGHT_YELLOW),
    ("saddle_brown", SADDLE_BROWN),
    ("sienna", SIENNA),
    ("chocolate", CHOCOLATE),
    ("peru", PERU),
    ("sandy_brown", SANDY_BROWN),
    ("burly_wood", BURLY_WOOD),
    ("tan", TAN),
    ("rosy_brown", ROSY_BROWN),
    ("moccasin", MOCCASIN),
    ("navajo_white", NAVAJO_WHITE),
    ("peach_puff", PEACH_PUFF),
    ("misty_rose", MISTY_ROSE),
    ("lavender_blush", LAVENDER_BLUSH),
    ("linen", LINEN),
    ("old_lace", OLD_LACE),
    ("papaya_whip", PAPAYA_WHIP),
    ("sea_shell", SEA_SHELL),
    ("mint_cream", MINT_CREAM),
    ("slate_gray", SLATE_GRAY),
    ("light_slate_gray", LIGHT_SLATE_GRAY),
    ("light_steel_blue", LIGHT_STEEL_BLUE),
    ("lavender", LAVENDER),
    ("floral_white", FLORAL_WHITE),
    ("alice_blue", ALICE_BLUE),
    ("ghost_white", GHOST_WHITE),
    ("honeydew", HONEYDEW),
    ("ivory", IVORY),
    ("azure", AZURE),
    ("snow", SNOW),
    ("black", BLACK),
    ("dim_gray", DIM_GRAY),
    ("gray", GRAY),
    ("dark_gray", DARK_GRAY),
    ("silver", SILVER),
    ("light_gray", LIGHT_GRAY),
    ("gainsboro", GAINSBORO),
    ("white_smoke", WHITE_SMOKE),
    ("white", WHITE),
];

// Compare ignoring ASCII case and the separators `_`, `-` and ` `
fn names_match(query: &str, name: &str) -> bool {
    let is_sep = |c: &u8| matches!(c, b'_' | b'-' | b' ');
    let mut q = query.bytes().filter(|c| !is_sep(c));
    let mut n = name.bytes().filter(|c| !is_sep(c));
    loop {
        match (q.next(), n.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => {}
            _ => return false,
        }
    }
}

/// Resolve a color name such as `"dark_red"`, `"Dark Red"` or `"darkred"`
pub fn lookup(name: &str) -> Option<u32> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| names_match(name, candidate))
        .map(|&(_, rgb)| rgb)
}

/// First table name for an exact RGB888 value
///
/// Aliases resolve to whichever comes first, e.g. `0x00FFFF` is `"aqua"`.
pub fn name_of(rgb: u32) -> Option<&'static str> {
    let rgb = rgb & 0x00FF_FFFF;
    NAMED_COLORS
        .iter()
        .find(|&&(_, value)| value == rgb)
        .map(|&(name, _)| name)
}
