use super::*;

#[test]
fn css_text_uses_percent_deg_and_px() {
    assert_eq!(
        EffectOp::Grayscale { amount: 1.0 }.to_css(),
        "grayscale(100%)"
    );
    assert_eq!(EffectOp::Sepia { amount: 0.7 }.to_css(), "sepia(70%)");
    assert_eq!(
        EffectOp::HueRotate { degrees: 200.0 }.to_css(),
        "hue-rotate(200deg)"
    );
    assert_eq!(EffectOp::Blur { radius_px: 2.0 }.to_css(), "blur(2px)");
    assert_eq!(
        EffectOp::Saturate { amount: 2.5 }.to_css(),
        "saturate(250%)"
    );
}

#[test]
fn parse_accepts_percent_and_plain_numbers() {
    assert_eq!(
        parse_effect("contrast(180%)").unwrap(),
        EffectOp::Contrast { amount: 1.8 }
    );
    assert_eq!(
        parse_effect(" brightness( 1.1 ) ").unwrap(),
        EffectOp::Brightness { amount: 1.1 }
    );
    assert_eq!(
        parse_effect("grayscale()").unwrap(),
        EffectOp::Grayscale { amount: 1.0 }
    );
}

#[test]
fn parse_angle_units() {
    assert_eq!(
        parse_effect("hue-rotate(0.5turn)").unwrap(),
        EffectOp::HueRotate { degrees: 180.0 }
    );
    assert_eq!(
        parse_effect("hue-rotate(100grad)").unwrap(),
        EffectOp::HueRotate { degrees: 90.0 }
    );
    assert_eq!(
        parse_effect("hue-rotate(0)").unwrap(),
        EffectOp::HueRotate { degrees: 0.0 }
    );
    assert!(parse_effect("hue-rotate(30)").is_err());
}

#[test]
fn parse_rejects_unknown_and_negative() {
    assert!(parse_effect("invert(100%)").is_err());
    assert!(parse_effect("contrast(-1)").is_err());
    assert!(parse_effect("blur(3em)").is_err());
    assert!(parse_effect("sepia 1").is_err());
}

#[test]
fn split_functions_handles_spacing() {
    let parts = split_functions("contrast(180%)   brightness(110%)").unwrap();
    assert_eq!(parts, vec!["contrast(180%)", "brightness(110%)"]);
    assert!(split_functions("contrast(180%").is_err());
    assert!(split_functions("contrast(1) oops").is_err());
}
