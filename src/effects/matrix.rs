use rayon::prelude::*;

/// Row-major 4x5 color matrix over straight-alpha RGBA in `[0, 1]`.
///
/// Row `i` computes `out[i] = m[5i]*r + m[5i+1]*g + m[5i+2]*b + m[5i+3]*a + m[5i+4]`, the same
/// layout as SVG `feColorMatrix type="matrix"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix(pub [f32; 20]);

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ColorMatrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0, //
    ]);

    fn rgb(m: [f32; 9]) -> Self {
        Self([
            m[0], m[1], m[2], 0.0, 0.0, //
            m[3], m[4], m[5], 0.0, 0.0, //
            m[6], m[7], m[8], 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0, //
        ])
    }

    /// `grayscale(amount)`.
    pub fn grayscale(amount: f32) -> Self {
        let s = 1.0 - amount.clamp(0.0, 1.0);
        Self::rgb([
            0.2126 + 0.7874 * s,
            0.7152 - 0.7152 * s,
            0.0722 - 0.0722 * s,
            0.2126 - 0.2126 * s,
            0.7152 + 0.2848 * s,
            0.0722 - 0.0722 * s,
            0.2126 - 0.2126 * s,
            0.7152 - 0.7152 * s,
            0.0722 + 0.9278 * s,
        ])
    }

    /// `sepia(amount)`.
    pub fn sepia(amount: f32) -> Self {
        let s = 1.0 - amount.clamp(0.0, 1.0);
        Self::rgb([
            0.393 + 0.607 * s,
            0.769 - 0.769 * s,
            0.189 - 0.189 * s,
            0.349 - 0.349 * s,
            0.686 + 0.314 * s,
            0.168 - 0.168 * s,
            0.272 - 0.272 * s,
            0.534 - 0.534 * s,
            0.131 + 0.869 * s,
        ])
    }

    /// `saturate(amount)`.
    pub fn saturate(amount: f32) -> Self {
        let s = amount.max(0.0);
        Self::rgb([
            0.213 + 0.787 * s,
            0.715 - 0.715 * s,
            0.072 - 0.072 * s,
            0.213 - 0.213 * s,
            0.715 + 0.285 * s,
            0.072 - 0.072 * s,
            0.213 - 0.213 * s,
            0.715 - 0.715 * s,
            0.072 + 0.928 * s,
        ])
    }

    /// `hue-rotate(degrees)`.
    pub fn hue_rotate(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::rgb([
            0.213 + c * 0.787 - s * 0.213,
            0.715 - c * 0.715 - s * 0.715,
            0.072 - c * 0.072 + s * 0.928,
            0.213 - c * 0.213 + s * 0.143,
            0.715 + c * 0.285 + s * 0.140,
            0.072 - c * 0.072 - s * 0.283,
            0.213 - c * 0.213 - s * 0.787,
            0.715 - c * 0.715 + s * 0.715,
            0.072 + c * 0.928 + s * 0.072,
        ])
    }

    /// `brightness(amount)`.
    pub fn brightness(amount: f32) -> Self {
        let b = amount.max(0.0);
        Self::rgb([b, 0.0, 0.0, 0.0, b, 0.0, 0.0, 0.0, b])
    }

    /// `contrast(amount)`: scales each channel around 0.5.
    pub fn contrast(amount: f32) -> Self {
        let c = amount.max(0.0);
        let t = 0.5 - 0.5 * c;
        Self([
            c, 0.0, 0.0, 0.0, t, //
            0.0, c, 0.0, 0.0, t, //
            0.0, 0.0, c, 0.0, t, //
            0.0, 0.0, 0.0, 1.0, 0.0, //
        ])
    }

    /// Compose so that `self` runs first and `next` second.
    pub fn then(&self, next: &ColorMatrix) -> ColorMatrix {
        let a = &self.0;
        let b = &next.0;
        let mut out = [0.0f32; 20];
        for row in 0..4 {
            for col in 0..5 {
                let mut v = 0.0f32;
                for k in 0..4 {
                    v += b[row * 5 + k] * a[k * 5 + col];
                }
                if col == 4 {
                    v += b[row * 5 + 4];
                }
                out[row * 5 + col] = v;
            }
        }
        ColorMatrix(out)
    }

    /// Return `true` when every input in `[0, 1]` maps inside `[0, 1]` without clamping.
    ///
    /// Only then may a following matrix be folded in: CSS clamps after each filter function.
    pub fn maps_unit_range(&self) -> bool {
        const EPS: f32 = 1e-5;
        self.0.chunks_exact(5).all(|row| {
            let (lo, hi) = row[..4].iter().fold((row[4], row[4]), |(lo, hi), &c| {
                (lo + c.min(0.0), hi + c.max(0.0))
            });
            lo >= -EPS && hi <= 1.0 + EPS
        })
    }

    /// Return `true` when every coefficient is within `1e-6` of the identity.
    pub fn is_identity(&self) -> bool {
        self.0
            .iter()
            .zip(Self::IDENTITY.0.iter())
            .all(|(a, b)| (a - b).abs() <= 1e-6)
    }

    /// Apply to one straight RGBA pixel in `[0, 1]`, clamping the result.
    pub fn apply_straight(&self, px: [f32; 4]) -> [f32; 4] {
        let m = &self.0;
        let [r, g, b, a] = px;
        [
            (m[0] * r + m[1] * g + m[2] * b + m[3] * a + m[4]).clamp(0.0, 1.0),
            (m[5] * r + m[6] * g + m[7] * b + m[8] * a + m[9]).clamp(0.0, 1.0),
            (m[10] * r + m[11] * g + m[12] * b + m[13] * a + m[14]).clamp(0.0, 1.0),
            (m[15] * r + m[16] * g + m[17] * b + m[18] * a + m[19]).clamp(0.0, 1.0),
        ]
    }
}

/// Apply a color matrix to premultiplied RGBA8, writing into `dst`.
pub(crate) fn color_matrix_rgba8_premul(src: &[u8], dst: &mut [u8], m: &ColorMatrix) {
    debug_assert_eq!(src.len(), dst.len());
    src.par_chunks_exact(4)
        .zip(dst.par_chunks_exact_mut(4))
        .for_each(|(s, d)| {
            let pr = s[0] as f32 / 255.0;
            let pg = s[1] as f32 / 255.0;
            let pb = s[2] as f32 / 255.0;
            let pa = s[3] as f32 / 255.0;

            // Convert premul -> straight for matrix application.
            let inv_a = if pa > 0.0 { 1.0 / pa } else { 0.0 };
            let [r, g, b, a] = m.apply_straight([pr * inv_a, pg * inv_a, pb * inv_a, pa]);

            d[0] = ((r * a) * 255.0).round().clamp(0.0, 255.0) as u8;
            d[1] = ((g * a) * 255.0).round().clamp(0.0, 255.0) as u8;
            d[2] = ((b * a) * 255.0).round().clamp(0.0, 255.0) as u8;
            d[3] = (a * 255.0).round().clamp(0.0, 255.0) as u8;
        });
}

#[cfg(test)]
#[path = "../../tests/unit/effects/matrix.rs"]
mod tests;
