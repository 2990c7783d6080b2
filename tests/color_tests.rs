use approx::assert_relative_eq;
use chart_presentation::ChartError;
use chart_presentation::render::{Color, RectPrimitive};

#[test]
fn hex_shorthand_with_alpha_expands_each_nibble() {
    let color = Color::from_hex("#eeee").expect("valid color");
    let expected = f64::from(0xee_u8) / 255.0;
    assert_relative_eq!(color.red, expected);
    assert_relative_eq!(color.green, expected);
    assert_relative_eq!(color.blue, expected);
    assert_relative_eq!(color.alpha, expected);
    assert_eq!(color.to_hex(), "#eeeeeeee");
}

#[test]
fn opaque_colors_format_as_six_digits() {
    for hex in ["#6c757d", "#22223b", "#495057"] {
        let color: Color = hex.parse().expect("valid color");
        assert_relative_eq!(color.alpha, 1.0);
        assert_eq!(color.to_hex(), hex);
        assert_eq!(color.to_string(), hex);
    }
    assert_eq!(Color::from_hex("#FFF").expect("valid").to_hex(), "#ffffff");
}

#[test]
fn malformed_hex_is_a_tagged_error() {
    for input in ["", "6c757d", "#12", "#12345", "#ggg", "#ççç"] {
        let err = Color::from_hex(input).expect_err("invalid color");
        assert!(
            matches!(err, ChartError::InvalidColor { input: ref reported } if reported == input),
            "input `{input}`: {err}"
        );
    }
}

#[test]
fn rect_validation_requires_visible_paint() {
    let color = Color::rgb(0.2, 0.3, 0.4);
    assert!(RectPrimitive::stroked(0.0, 0.0, 10.0, 10.0, color, 1.0).validate().is_ok());
    assert!(RectPrimitive::filled(0.0, 0.0, 10.0, 10.0, color).validate().is_ok());
    assert!(RectPrimitive::stroked(0.0, 0.0, 10.0, 10.0, color, 0.0).validate().is_err());
    assert!(RectPrimitive::stroked(0.0, 0.0, -1.0, 10.0, color, 1.0).validate().is_err());

    let mut unpainted = RectPrimitive::filled(0.0, 0.0, 10.0, 10.0, color);
    unpainted.fill_color = None;
    assert!(unpainted.validate().is_err());

    let out_of_range = Color::rgba(1.5, 0.0, 0.0, 1.0);
    assert!(RectPrimitive::filled(0.0, 0.0, 1.0, 1.0, out_of_range).validate().is_err());
}
