use pretty_assertions::assert_eq;
use velo_paint::{parse_color, Color};

#[test]
fn overlay_alpha_matches_stylesheet_tooling() {
    let text = parse_color("#212121").unwrap();

    assert_eq!(text.rgba(0.1).to_css(), "rgba(33,33,33,0.1)");
    assert_eq!(text.rgba(0.2).to_css(), "rgba(33,33,33,0.2)");
}

#[test]
fn shade_of_translucent_color_keeps_weighted_alpha() {
    let layer = parse_color("rgba(0, 0, 0, 0.5)").unwrap();
    let shaded = layer.shade(0.5);

    assert!((shaded.a - 0.75).abs() < 1e-6);
    assert_eq!(shaded.to_rgb8(), [0, 0, 0]);
}

#[test]
fn display_uses_css_serialization() {
    let color = Color::from_hex(0xF44336);
    assert_eq!(color.to_string(), "#f44336");
    assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
}
