use super::*;

#[test]
fn table_has_eight_unique_presets_led_by_identity() {
    assert_eq!(PRESETS.len(), 8);
    assert_eq!(FilterPreset::identity().name(), "Original");
    assert!(FilterPreset::identity().is_identity());

    let mut names: Vec<_> = PRESETS.iter().map(FilterPreset::name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 8);
}

#[test]
fn css_values_match_descriptor_table() {
    let expected = [
        ("Original", "none"),
        ("Grayscale", "grayscale(100%)"),
        ("Sepia", "sepia(100%)"),
        ("High Contrast", "contrast(180%) brightness(110%)"),
        ("Vintage", "sepia(70%) saturate(150%) contrast(120%)"),
        ("Blue Tint", "hue-rotate(200deg) contrast(150%)"),
        ("Soft Blur", "blur(2px) contrast(120%)"),
        ("Saturated", "saturate(250%)"),
    ];
    for (preset, (name, css)) in PRESETS.iter().zip(expected) {
        assert_eq!(preset.name(), name);
        assert_eq!(preset.css_filter(), css);
    }
}

#[test]
fn every_preset_chain_validates() {
    for p in FilterPreset::all() {
        let chain = crate::effects::chain::EffectChain::new(p.effects()).unwrap();
        assert_eq!(chain.ops(), p.effects());
    }
}

#[test]
fn only_the_identity_compiles_to_no_passes() {
    for p in FilterPreset::all() {
        assert_eq!(p.pipeline().is_identity(), p.is_identity(), "{p}");
    }
}

#[test]
fn lookup_is_lenient_but_by_name_is_exact() {
    let hc = FilterPreset::by_name("High Contrast").unwrap();
    assert!(FilterPreset::by_name("high contrast").is_none());
    assert_eq!(FilterPreset::lookup("high-contrast").unwrap(), hc);
    assert_eq!(FilterPreset::lookup("HighContrast").unwrap(), hc);
    assert_eq!(FilterPreset::lookup("blue_tint").unwrap().name(), "Blue Tint");

    let err = FilterPreset::lookup("Neon").unwrap_err();
    assert!(err.to_string().contains("unknown filter 'Neon'"));
}

#[test]
fn compact_name_strips_whitespace() {
    assert_eq!(
        FilterPreset::by_name("Soft Blur").unwrap().compact_name(),
        "SoftBlur"
    );
    assert_eq!(FilterPreset::identity().compact_name(), "Original");
}
