//! Stripe colors for the card faces.
//!
//! Every color word in the dataset maps to a fixed accent hex. The stripe
//! rendered over a card must stay visible on the card's own background, so
//! very light accents are swapped for a translucent dark overlay instead of
//! the raw hex. Words without a palette entry get a neutral overlay.

/// Accent color per normalized word key.
const STRIPE_PALETTE: &[(&str, &str)] = &[
    ("blue", "#3b82f6"),
    ("yellow", "#facc15"),
    ("red", "#ef4444"),
    ("green", "#22c55e"),
    ("purple", "#a855f7"),
    ("orange", "#f97316"),
    ("brown", "#8b5e3c"),
    ("black", "#111827"),
    ("white", "#f8fafc"),
    ("gray", "#9ca3af"),
    ("beige", "#f5f1da"),
    ("ivory", "#fff9e6"),
    ("almond", "#efdfc8"),
    ("sky", "#7dd3fc"),
    ("aqua", "#22d3ee"),
    ("blush", "#fbcfe8"),
    ("cream", "#fff4d6"),
    ("taupe", "#a58a7f"),
    ("rosewood", "#8b4a5a"),
    ("lilac", "#c4b5fd"),
    ("pink", "#f9a8d4"),
    ("mint", "#a7f3d0"),
    ("peach", "#f7b7a3"),
    ("lavender", "#e9d5ff"),
    ("coral", "#fb7185"),
    ("rose", "#f43f5e"),
    ("salmon", "#fda4af"),
    ("plum", "#7c3aed"),
    ("apricot", "#f9c27b"),
    ("lime", "#a3e635"),
];

const NEUTRAL_STRIPE: &str = "rgba(0, 0, 0, 0.2)";
const DARK_OVERLAY_STRONG: &str = "rgba(0, 0, 0, 0.35)";
const DARK_OVERLAY_SOFT: &str = "rgba(0, 0, 0, 0.25)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Normalizes a word into its palette key: lowercased, spaces turned into
/// dashes. The same key doubles as the `color-*` CSS class suffix.
#[must_use]
pub fn color_key(word: &str) -> String {
    word.to_lowercase().replace(' ', "-")
}

#[must_use]
pub fn palette_hex(key: &str) -> Option<&'static str> {
    STRIPE_PALETTE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, hex)| *hex)
}

/// Parses a `#rrggbb` hex string. Anything that is not exactly six hex
/// digits after the optional `#` is rejected.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return None;
    }
    let red = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let green = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { red, green, blue })
}

/// WCAG relative luminance, 0.0 (black) to 1.0 (white).
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn linearize(value: u8) -> f64 {
        let channel = f64::from(value) / 255.0;
        if channel <= 0.039_28 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(rgb.red) + 0.7152 * linearize(rgb.green) + 0.0722 * linearize(rgb.blue)
}

/// Picks the stripe color for a word.
///
/// Unknown words get a neutral overlay. Known accents brighter than the
/// luminance cutoffs are replaced with a dark overlay so the stripe still
/// reads against a light card.
#[must_use]
pub fn stripe_color(word: &str) -> &'static str {
    let key = color_key(word);
    let Some(hex) = palette_hex(&key) else {
        return NEUTRAL_STRIPE;
    };
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex;
    };
    let luminance = relative_luminance(rgb);
    if luminance > 0.75 {
        DARK_OVERLAY_STRONG
    } else if luminance > 0.6 {
        DARK_OVERLAY_SOFT
    } else {
        hex
    }
}
