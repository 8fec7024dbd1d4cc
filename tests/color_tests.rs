// Host-side tests for RGBA parsing and the anchor palette.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}

use color::*;

#[test]
fn parses_rgba_strings() {
    let c: Rgba = "rgba(59, 130, 246, 0.4)".parse().unwrap();
    assert_eq!(c, Rgba::new(59, 130, 246, 0.4));

    let tight: Rgba = "rgba(16,185,129,0.7)".parse().unwrap();
    assert_eq!(tight, Rgba::new(16, 185, 129, 0.7));
}

#[test]
fn rgb_without_alpha_is_opaque() {
    let c: Rgba = " rgb(245, 158, 11) ".parse().unwrap();
    assert_eq!(c, Rgba::new(245, 158, 11, 1.0));
}

#[test]
fn rejects_malformed_colors() {
    assert!(matches!("hsl(0, 50%, 50%)".parse::<Rgba>(), Err(ColorError::Syntax(_))));
    assert!(matches!("rgba(1, 2)".parse::<Rgba>(), Err(ColorError::Syntax(_))));
    assert!(matches!("rgba(1, 2, 3, 4, 5)".parse::<Rgba>(), Err(ColorError::Syntax(_))));
    assert_eq!(
        "rgba(300, 0, 0, 1)".parse::<Rgba>(),
        Err(ColorError::Channel {
            index: 0,
            value: "300".to_string()
        })
    );
    assert_eq!(
        "rgba(0, 0, 0, 1.5)".parse::<Rgba>(),
        Err(ColorError::Alpha("1.5".to_string()))
    );
    assert!(matches!("rgba(0, x, 0, 1)".parse::<Rgba>(), Err(ColorError::Channel { index: 1, .. })));
}

#[test]
fn errors_render_readable_messages() {
    let err = "rgba(0, 0, 0, nope)".parse::<Rgba>().unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn alpha_swap_keeps_channels() {
    let base = Rgba::new(239, 68, 68, 0.4);
    let faded = base.with_alpha(0.3);
    assert_eq!((faded.r, faded.g, faded.b), (239, 68, 68));
    assert_eq!(faded.to_css(), "rgba(239, 68, 68, 0.3)");
    assert_eq!(Rgba::gray(77, 0.72).to_css(), "rgba(77, 77, 77, 0.72)");
}

#[test]
fn css_output_parses_back() {
    let c = Rgba::new(10, 20, 30, 0.25);
    assert_eq!(c.to_css().parse::<Rgba>().unwrap(), c);
}

#[test]
fn palette_covers_the_four_sections() {
    for section in ["professional", "education", "contact", "about"] {
        let pair = palette_for(section).expect(section);
        assert_eq!(pair.base.a, 0.4);
        assert_eq!(pair.hover.a, 0.7);
        assert_eq!(pair.base.with_alpha(0.7), pair.hover);
    }
    assert!(palette_for("blog").is_none());
}

#[test]
fn pair_picks_by_hover() {
    let pair = palette_for("contact").unwrap();
    assert_eq!(pair.pick(false), pair.base);
    assert_eq!(pair.pick(true), pair.hover);
}

#[test]
fn attribute_overrides_fall_back_to_palette() {
    let defaults = palette_for("education").unwrap();
    assert_eq!(override_rgba(None, defaults.base), Ok(defaults.base));
    assert_eq!(
        override_rgba(Some("rgba(1, 2, 3, 0.5)"), defaults.base),
        Ok(Rgba::new(1, 2, 3, 0.5))
    );
    assert!(matches!(
        override_rgba(Some("teal"), defaults.hover),
        Err(ColorError::Syntax(_))
    ));
}

#[test]
fn palette_entries_carry_their_own_colors() {
    for (id, pair) in SECTION_PALETTE {
        assert_eq!(palette_for(id), Some(pair));
    }
    let distinct: Vec<_> = SECTION_PALETTE.iter().map(|(_, p)| p.base).collect();
    for (i, a) in distinct.iter().enumerate() {
        for b in &distinct[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
