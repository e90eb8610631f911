use crate::foundation::error::{FilterBoothError, FilterBoothResult};

/// One parameterized CSS filter function.
///
/// Amounts are fractions: `1.0` renders as `100%`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectOp {
    /// `grayscale(amount)`, amounts above 1 behave as 1.
    Grayscale {
        /// Fraction converted to gray.
        amount: f32,
    },
    /// `sepia(amount)`, amounts above 1 behave as 1.
    Sepia {
        /// Fraction converted to sepia.
        amount: f32,
    },
    /// `saturate(amount)`.
    Saturate {
        /// Saturation multiplier.
        amount: f32,
    },
    /// `hue-rotate(degrees)`.
    HueRotate {
        /// Rotation around the hue circle in degrees.
        degrees: f32,
    },
    /// `contrast(amount)`.
    Contrast {
        /// Contrast multiplier around mid-gray.
        amount: f32,
    },
    /// `brightness(amount)`.
    Brightness {
        /// Linear multiplier.
        amount: f32,
    },
    /// `blur(radius)`, the radius is the Gaussian standard deviation in pixels.
    Blur {
        /// Standard deviation in pixels.
        radius_px: f32,
    },
}

impl EffectOp {
    /// CSS function name.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Grayscale { .. } => "grayscale",
            Self::Sepia { .. } => "sepia",
            Self::Saturate { .. } => "saturate",
            Self::HueRotate { .. } => "hue-rotate",
            Self::Contrast { .. } => "contrast",
            Self::Brightness { .. } => "brightness",
            Self::Blur { .. } => "blur",
        }
    }

    /// Render as CSS function text, e.g. `contrast(180%)`.
    pub fn to_css(&self) -> String {
        let arg = match *self {
            Self::Grayscale { amount }
            | Self::Sepia { amount }
            | Self::Saturate { amount }
            | Self::Contrast { amount }
            | Self::Brightness { amount } => format!("{}%", fmt_number(amount * 100.0)),
            Self::HueRotate { degrees } => format!("{}deg", fmt_number(degrees)),
            Self::Blur { radius_px } => format!("{}px", fmt_number(radius_px)),
        };
        format!("{}({arg})", self.css_name())
    }

    /// Reject non-finite and negative parameters. Hue rotation may be negative.
    pub fn validate(&self) -> FilterBoothResult<()> {
        let (what, v, allow_negative) = match *self {
            Self::Grayscale { amount } => ("grayscale", amount, false),
            Self::Sepia { amount } => ("sepia", amount, false),
            Self::Saturate { amount } => ("saturate", amount, false),
            Self::HueRotate { degrees } => ("hue-rotate", degrees, true),
            Self::Contrast { amount } => ("contrast", amount, false),
            Self::Brightness { amount } => ("brightness", amount, false),
            Self::Blur { radius_px } => ("blur", radius_px, false),
        };
        if !v.is_finite() {
            return Err(FilterBoothError::validation(format!(
                "{what} parameter must be finite"
            )));
        }
        if !allow_negative && v < 0.0 {
            return Err(FilterBoothError::validation(format!(
                "{what} parameter must be >= 0"
            )));
        }
        Ok(())
    }
}

/// Parse a single CSS filter function such as `hue-rotate(200deg)`.
pub fn parse_effect(text: &str) -> FilterBoothResult<EffectOp> {
    let text = text.trim();
    let Some(open) = text.find('(') else {
        return Err(FilterBoothError::validation(format!(
            "effect '{text}' is missing '('"
        )));
    };
    let Some(arg) = text[open + 1..].strip_suffix(')') else {
        return Err(FilterBoothError::validation(format!(
            "effect '{text}' is missing ')'"
        )));
    };
    let name = text[..open].trim().to_ascii_lowercase();
    let arg = arg.trim();

    let op = match name.as_str() {
        "grayscale" | "greyscale" => EffectOp::Grayscale {
            amount: parse_amount(arg, 1.0)?,
        },
        "sepia" => EffectOp::Sepia {
            amount: parse_amount(arg, 1.0)?,
        },
        "saturate" => EffectOp::Saturate {
            amount: parse_amount(arg, 1.0)?,
        },
        "contrast" => EffectOp::Contrast {
            amount: parse_amount(arg, 1.0)?,
        },
        "brightness" => EffectOp::Brightness {
            amount: parse_amount(arg, 1.0)?,
        },
        "hue-rotate" => EffectOp::HueRotate {
            degrees: parse_angle(arg)?,
        },
        "blur" => EffectOp::Blur {
            radius_px: parse_length(arg)?,
        },
        "" => {
            return Err(FilterBoothError::validation(
                "effect name must be non-empty",
            ));
        }
        _ => {
            return Err(FilterBoothError::validation(format!(
                "unknown effect '{name}'"
            )));
        }
    };
    op.validate()?;
    Ok(op)
}

/// Split a CSS `filter` value into its function tokens.
pub(crate) fn split_functions(text: &str) -> FilterBoothResult<Vec<&str>> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                start.get_or_insert(i);
            }
            ')' => {
                if depth == 0 {
                    return Err(FilterBoothError::validation("unbalanced ')' in filter"));
                }
                depth -= 1;
                if depth == 0
                    && let Some(s) = start.take()
                {
                    out.push(text[s..=i].trim());
                }
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    return Err(FilterBoothError::validation(format!(
                        "expected '(' after '{}'",
                        &text[s..i]
                    )));
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if depth != 0 {
        return Err(FilterBoothError::validation("unbalanced '(' in filter"));
    }
    if let Some(s) = start {
        return Err(FilterBoothError::validation(format!(
            "expected '(' after '{}'",
            &text[s..]
        )));
    }
    Ok(out)
}

fn parse_amount(arg: &str, default: f32) -> FilterBoothResult<f32> {
    if arg.is_empty() {
        return Ok(default);
    }
    match arg.strip_suffix('%') {
        Some(pct) => Ok(parse_number(pct)? / 100.0),
        None => parse_number(arg),
    }
}

fn parse_angle(arg: &str) -> FilterBoothResult<f32> {
    if arg.is_empty() {
        return Ok(0.0);
    }
    // Longest suffix first: "grad" and "rad" share a tail.
    if let Some(v) = arg.strip_suffix("grad") {
        return Ok(parse_number(v)? * 360.0 / 400.0);
    }
    if let Some(v) = arg.strip_suffix("deg") {
        return parse_number(v);
    }
    if let Some(v) = arg.strip_suffix("rad") {
        return Ok(parse_number(v)?.to_degrees());
    }
    if let Some(v) = arg.strip_suffix("turn") {
        return Ok(parse_number(v)? * 360.0);
    }
    let v = parse_number(arg)?;
    if v == 0.0 {
        Ok(0.0)
    } else {
        Err(FilterBoothError::validation(format!(
            "hue-rotate angle '{arg}' needs a unit"
        )))
    }
}

fn parse_length(arg: &str) -> FilterBoothResult<f32> {
    if arg.is_empty() {
        return Ok(0.0);
    }
    if let Some(v) = arg.strip_suffix("px") {
        return parse_number(v);
    }
    let v = parse_number(arg)?;
    if v == 0.0 {
        Ok(0.0)
    } else {
        Err(FilterBoothError::validation(format!(
            "blur length '{arg}' needs a 'px' unit"
        )))
    }
}

fn parse_number(s: &str) -> FilterBoothResult<f32> {
    let s = s.trim();
    let v: f32 = s
        .parse()
        .map_err(|_| FilterBoothError::validation(format!("'{s}' is not a number")))?;
    if !v.is_finite() {
        return Err(FilterBoothError::validation(format!(
            "'{s}' must be finite"
        )));
    }
    Ok(v)
}

fn fmt_number(v: f32) -> String {
    let r = (f64::from(v) * 10_000.0).round() / 10_000.0;
    format!("{r}")
}

#[cfg(test)]
#[path = "../../tests/unit/effects/op.rs"]
mod tests;
