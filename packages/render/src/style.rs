//! Shared style resolution for all block variants.
//!
//! Two rules are part of the renderer contract:
//!
//! 1. `padding` and `alignment` resolve through fixed lookup tables, with
//!    medium/left as the defaults when unset.
//! 2. A block declaring a light (near-white) `background_color` gets a
//!    dark computed foreground; light-on-light and dark-on-dark are never
//!    emitted for blocks that support background color.

use blockpress_model::{Alignment, BlockStyles, Padding, Theme};

const DARK_TEXT: &str = "#1f2937";
const LIGHT_TEXT: &str = "#f9fafb";

/// Luminance above which a color counts as light.
const LIGHT_THRESHOLD: f32 = 0.55;

/// Per-block styles after defaults and contrast enforcement.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyles {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub padding: &'static str,
    pub text_align: &'static str,
}

/// Padding preset → CSS padding value.
pub fn padding_value(padding: Padding) -> &'static str {
    match padding {
        Padding::None => "0",
        Padding::Small => "24px 16px",
        Padding::Medium => "48px 24px",
        Padding::Large => "72px 32px",
        Padding::Xlarge => "96px 40px",
    }
}

/// Alignment preset → CSS text-align value.
pub fn alignment_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

/// Resolve block style overrides against the theme.
pub fn resolve_styles(styles: &BlockStyles, _theme: &Theme) -> ResolvedStyles {
    let padding = padding_value(styles.padding.unwrap_or(Padding::Medium));
    let text_align = alignment_value(styles.alignment.unwrap_or(Alignment::Left));

    let background_color = styles.background_color.clone();
    let text_color = match &background_color {
        Some(background) => Some(contrast_safe_text(background, styles.text_color.as_deref())),
        None => styles.text_color.clone(),
    };

    ResolvedStyles {
        background_color,
        text_color,
        padding,
        text_align,
    }
}

/// Pick a foreground that reads against `background`, preferring the
/// author's `declared` color when it already contrasts.
fn contrast_safe_text(background: &str, declared: Option<&str>) -> String {
    let Some(background_light) = lightness(background).map(|l| l > LIGHT_THRESHOLD) else {
        // Unparseable color (named, gradient): trust the author.
        return declared.unwrap_or(DARK_TEXT).to_string();
    };

    if let Some(declared) = declared {
        if let Some(declared_lum) = lightness(declared) {
            let declared_light = declared_lum > LIGHT_THRESHOLD;
            if declared_light != background_light {
                return declared.to_string();
            }
        }
    }

    if background_light {
        DARK_TEXT.to_string()
    } else {
        LIGHT_TEXT.to_string()
    }
}

/// Relative luminance of a `#rgb` / `#rrggbb` color, in `0.0..=1.0`.
pub fn lightness(color: &str) -> Option<f32> {
    let (r, g, b) = parse_hex(color)?;
    Some((0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0)
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    // Byte-offset slicing below requires single-byte characters.
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(background: Option<&str>, text: Option<&str>) -> BlockStyles {
        BlockStyles {
            background_color: background.map(String::from),
            text_color: text.map(String::from),
            padding: None,
            alignment: None,
        }
    }

    #[test]
    fn test_defaults_are_medium_left() {
        let resolved = resolve_styles(&BlockStyles::default(), &Theme::default());
        assert_eq!(resolved.padding, padding_value(Padding::Medium));
        assert_eq!(resolved.text_align, "left");
        assert_eq!(resolved.background_color, None);
        assert_eq!(resolved.text_color, None);
    }

    #[test]
    fn test_light_background_forces_dark_text() {
        let resolved = resolve_styles(&styles(Some("#ffffff"), None), &Theme::default());
        assert_eq!(resolved.text_color.as_deref(), Some(DARK_TEXT));

        // Light-on-light declared text is overridden too
        let resolved = resolve_styles(&styles(Some("#fafafa"), Some("#ffffff")), &Theme::default());
        assert_eq!(resolved.text_color.as_deref(), Some(DARK_TEXT));
    }

    #[test]
    fn test_dark_background_forces_light_text() {
        let resolved = resolve_styles(&styles(Some("#111827"), Some("#000000")), &Theme::default());
        assert_eq!(resolved.text_color.as_deref(), Some(LIGHT_TEXT));
    }

    #[test]
    fn test_contrasting_declared_text_is_kept() {
        let resolved = resolve_styles(&styles(Some("#ffffff"), Some("#123456")), &Theme::default());
        assert_eq!(resolved.text_color.as_deref(), Some("#123456"));
    }

    #[test]
    fn test_short_hex_parses() {
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#000"), Some((0, 0, 0)));
        assert_eq!(parse_hex("not-a-color"), None);
    }

    #[test]
    fn test_multibyte_color_resolves_without_panicking() {
        // A color string with multi-byte characters is unparseable, not
        // a crash; the author's declared text color is trusted as-is.
        assert_eq!(parse_hex("#aé"), None);
        assert_eq!(lightness("#ひff"), None);

        let resolved = resolve_styles(&styles(Some("#aé"), Some("#123456")), &Theme::default());
        assert_eq!(resolved.background_color.as_deref(), Some("#aé"));
        assert_eq!(resolved.text_color.as_deref(), Some("#123456"));
    }
}
