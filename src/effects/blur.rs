use rayon::prelude::*;

use crate::foundation::error::{FilterBoothError, FilterBoothResult};

/// Kernel half-width covering three standard deviations.
pub fn blur_radius_for_sigma(sigma: f32) -> u32 {
    if !sigma.is_finite() || sigma <= 0.0 {
        return 0;
    }
    (sigma * 3.0).ceil() as u32
}

/// Separable Gaussian blur over premultiplied RGBA8. Edge pixels are clamped.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> FilterBoothResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| FilterBoothError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(FilterBoothError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    horizontal_pass(src, &mut tmp, width, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    Ok(out)
}

/// Gaussian taps in Q16 fixed point. The taps sum to exactly `1 << 16`, with the rounding
/// residue carried by the center tap.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> FilterBoothResult<Vec<u32>> {
    const ONE: i64 = 1 << 16;
    if radius == 0 {
        return Ok(vec![ONE as u32]);
    }
    if !(sigma.is_finite() && sigma > 0.0) {
        return Err(FilterBoothError::validation("blur sigma must be > 0"));
    }

    let two_var = 2.0 * f64::from(sigma).powi(2);
    let r = i64::from(radius);
    let taps: Vec<f64> = (-r..=r)
        .map(|i| (-((i * i) as f64) / two_var).exp())
        .collect();
    let total: f64 = taps.iter().sum();

    let mut fixed: Vec<i64> = taps
        .iter()
        .map(|w| (w / total * ONE as f64).round() as i64)
        .collect();
    let residue = ONE - fixed.iter().sum::<i64>();
    fixed[radius as usize] += residue;

    Ok(fixed.into_iter().map(|w| w.clamp(0, ONE) as u32).collect())
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let row_len = width as usize * 4;
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(dst_row, src_row)| {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                    let idx = sx as usize * 4;
                    for c in 0..4 {
                        acc[c] += u64::from(kw) * u64::from(src_row[idx + c]);
                    }
                }
                let out_idx = x as usize * 4;
                for c in 0..4 {
                    dst_row[out_idx + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as usize;
    let h = height as i32;
    dst.par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let sy = (y as i32 + ki as i32 - radius).clamp(0, h - 1);
                    let idx = (sy as usize * w + x) * 4;
                    for c in 0..4 {
                        acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                    }
                }
                for c in 0..4 {
                    dst_row[x * 4 + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
