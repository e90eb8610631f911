use crate::{
    effects::{
        blur::blur_radius_for_sigma,
        matrix::ColorMatrix,
        op::{EffectOp, parse_effect, split_functions},
    },
    foundation::error::FilterBoothResult,
};

/// An ordered list of effect ops applied cumulatively.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectChain {
    ops: Vec<EffectOp>,
}

impl EffectChain {
    /// Build a chain from ops, validating each.
    pub fn new(ops: impl Into<Vec<EffectOp>>) -> FilterBoothResult<Self> {
        let ops = ops.into();
        for op in &ops {
            op.validate()?;
        }
        Ok(Self { ops })
    }

    /// Parse a CSS `filter` value (`none` or a whitespace separated list of functions).
    pub fn parse_css(text: &str) -> FilterBoothResult<Self> {
        let text = text.trim();
        if text.is_empty() || text.eq_ignore_ascii_case("none") {
            return Ok(Self::default());
        }
        let ops = split_functions(text)?
            .into_iter()
            .map(parse_effect)
            .collect::<FilterBoothResult<Vec<_>>>()?;
        Ok(Self { ops })
    }

    /// Borrow the ops in application order.
    pub fn ops(&self) -> &[EffectOp] {
        &self.ops
    }

    /// Return `true` when the chain has no ops.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Render as a CSS `filter` value.
    pub fn to_css(&self) -> String {
        css_filter(&self.ops)
    }

    /// Compile into executable passes.
    pub fn compile(&self) -> FxPipeline {
        compile_effects(&self.ops)
    }
}

/// One executable pass over a premultiplied RGBA8 surface.
#[derive(Clone, Debug, PartialEq)]
pub enum PassFx {
    /// Per-pixel color transform.
    ColorMatrix(ColorMatrix),
    /// Separable Gaussian blur.
    Blur {
        /// Kernel half-width in pixels.
        radius_px: u32,
        /// Standard deviation in pixels.
        sigma: f32,
    },
}

/// Compiled form of an effect chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FxPipeline {
    /// Passes in execution order.
    pub passes: Vec<PassFx>,
}

impl FxPipeline {
    /// Return `true` when running the pipeline leaves pixels untouched.
    pub fn is_identity(&self) -> bool {
        self.passes.is_empty()
    }
}

/// Render ops as a CSS `filter` value. The empty list renders as `none`.
pub fn css_filter(ops: &[EffectOp]) -> String {
    if ops.is_empty() {
        return "none".to_owned();
    }
    ops.iter()
        .map(EffectOp::to_css)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fold adjacent color ops into single matrices and drop no-op passes.
///
/// A color op joins the pending matrix only while that matrix keeps values inside `[0, 1]`;
/// otherwise the pending matrix is emitted first so its clamp happens before the next op, as
/// in CSS where every filter function clamps its output.
pub fn compile_effects(ops: &[EffectOp]) -> FxPipeline {
    let mut passes = Vec::<PassFx>::new();
    let mut pending: Option<ColorMatrix> = None;

    for op in ops {
        let m = match *op {
            EffectOp::Grayscale { amount } => ColorMatrix::grayscale(amount),
            EffectOp::Sepia { amount } => ColorMatrix::sepia(amount),
            EffectOp::Saturate { amount } => ColorMatrix::saturate(amount),
            EffectOp::HueRotate { degrees } => ColorMatrix::hue_rotate(degrees),
            EffectOp::Contrast { amount } => ColorMatrix::contrast(amount),
            EffectOp::Brightness { amount } => ColorMatrix::brightness(amount),
            EffectOp::Blur { radius_px } => {
                let radius = blur_radius_for_sigma(radius_px);
                if radius == 0 {
                    continue;
                }
                flush_matrix(&mut passes, pending.take());
                passes.push(PassFx::Blur {
                    radius_px: radius,
                    sigma: radius_px,
                });
                continue;
            }
        };
        pending = Some(match pending {
            Some(prev) if prev.maps_unit_range() => prev.then(&m),
            Some(prev) => {
                flush_matrix(&mut passes, Some(prev));
                m
            }
            None => m,
        });
    }
    flush_matrix(&mut passes, pending);

    FxPipeline { passes }
}

fn flush_matrix(passes: &mut Vec<PassFx>, m: Option<ColorMatrix>) {
    if let Some(m) = m
        && !m.is_identity()
    {
        passes.push(PassFx::ColorMatrix(m));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/chain.rs"]
mod tests;
