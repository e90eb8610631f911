use super::*;

#[test]
fn empty_chain_renders_none_and_compiles_to_identity() {
    let chain = EffectChain::default();
    assert_eq!(chain.to_css(), "none");
    assert!(chain.compile().is_identity());
}

#[test]
fn adjacent_color_ops_fold_into_one_matrix() {
    let chain = EffectChain::new(vec![
        EffectOp::Grayscale { amount: 1.0 },
        EffectOp::Sepia { amount: 0.7 },
    ])
    .unwrap();
    let fx = chain.compile();
    assert_eq!(fx.passes.len(), 1);
    assert!(matches!(fx.passes[0], PassFx::ColorMatrix(_)));
}

#[test]
fn out_of_range_matrices_are_not_folded() {
    let fx = compile_effects(&[
        EffectOp::Sepia { amount: 0.7 },
        EffectOp::Saturate { amount: 1.5 },
        EffectOp::Contrast { amount: 1.2 },
    ]);
    assert_eq!(fx.passes.len(), 3);
}

#[test]
fn compiled_passes_clamp_between_ops_like_css() {
    let ops = [
        EffectOp::Sepia { amount: 0.7 },
        EffectOp::Saturate { amount: 1.5 },
        EffectOp::Contrast { amount: 1.2 },
    ];
    let white = [1.0f32, 1.0, 1.0, 1.0];
    let sequential = [
        ColorMatrix::sepia(0.7),
        ColorMatrix::saturate(1.5),
        ColorMatrix::contrast(1.2),
    ]
    .iter()
    .fold(white, |px, m| m.apply_straight(px));

    let compiled = compile_effects(&ops)
        .passes
        .iter()
        .fold(white, |px, pass| match pass {
            PassFx::ColorMatrix(m) => m.apply_straight(px),
            PassFx::Blur { .. } => px,
        });
    for c in 0..4 {
        assert!((sequential[c] - compiled[c]).abs() < 1e-5);
    }
    assert!((compiled[2] - 1.0).abs() < 1e-5);
}

#[test]
fn blur_splits_color_runs_and_keeps_order() {
    let chain = EffectChain::new(vec![
        EffectOp::Blur { radius_px: 2.0 },
        EffectOp::Contrast { amount: 1.2 },
    ])
    .unwrap();
    let fx = chain.compile();
    assert_eq!(fx.passes.len(), 2);
    assert_eq!(
        fx.passes[0],
        PassFx::Blur {
            radius_px: 6,
            sigma: 2.0
        }
    );
    assert!(matches!(fx.passes[1], PassFx::ColorMatrix(_)));
}

#[test]
fn noop_ops_are_dropped() {
    let chain = EffectChain::new(vec![
        EffectOp::Blur { radius_px: 0.0 },
        EffectOp::Brightness { amount: 1.0 },
    ])
    .unwrap();
    assert!(chain.compile().is_identity());
}

#[test]
fn parse_css_round_trips_through_text() {
    let text = "hue-rotate(200deg) contrast(150%)";
    let chain = EffectChain::parse_css(text).unwrap();
    assert_eq!(chain.ops().len(), 2);
    assert_eq!(chain.to_css(), text);

    assert!(EffectChain::parse_css("none").unwrap().is_empty());
    assert!(EffectChain::parse_css("  ").unwrap().is_empty());
}

#[test]
fn new_rejects_invalid_params() {
    assert!(EffectChain::new(vec![EffectOp::Blur { radius_px: -1.0 }]).is_err());
    assert!(EffectChain::new(vec![EffectOp::Contrast { amount: f32::NAN }]).is_err());
}
