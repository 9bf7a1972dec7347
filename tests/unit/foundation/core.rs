use super::*;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#eff1f5").unwrap(), Rgba8::rgb(0xef, 0xf1, 0xf5));
    assert_eq!(
        Rgba8::from_hex("1E66F540").unwrap(),
        Rgba8::rgb(0x1e, 0x66, 0xf5).with_alpha(0x40)
    );
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
}

#[test]
fn hex_output_is_lowercase_without_alpha() {
    let c = Rgba8::rgb(0x1E, 0x66, 0xF5).with_alpha(0x40);
    assert_eq!(c.to_hex_rgb(), "#1e66f5");
    assert!(!c.is_opaque());
    assert!((c.opacity() - 64.0 / 255.0).abs() < 1e-6);
}

#[test]
fn inset_never_goes_negative() {
    let r = RectPx {
        x: 10.0,
        y: 10.0,
        w: 20.0,
        h: 4.0,
    };
    let inner = r.inset(Edges::symmetric(3.0, 4.0));
    assert_eq!(inner.x, 14.0);
    assert_eq!(inner.y, 13.0);
    assert_eq!(inner.w, 12.0);
    assert_eq!(inner.h, 0.0);
}

#[test]
fn rounded_clamps_radius_to_half_short_side() {
    let r = RectPx {
        x: 0.0,
        y: 0.0,
        w: 100.0,
        h: 40.0,
    };
    let rr = r.rounded(999.0);
    assert_eq!(rr.radii().top_left, 20.0);
}

#[test]
fn edges_validation() {
    assert!(Edges::all(2.0).is_valid_extent());
    assert!(Edges::all(2.0).is_uniform());
    assert!(!Edges::top_only(2.5).is_uniform());
    assert!(!Edges::top_only(-1.0).is_valid_extent());
    assert!(!Edges::top_only(f32::NAN).is_valid_extent());
}
