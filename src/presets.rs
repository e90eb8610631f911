//! The fixed table of filter presets offered to the user.

use crate::{
    effects::{
        chain::{FxPipeline, compile_effects, css_filter},
        op::EffectOp,
    },
    foundation::error::{FilterBoothError, FilterBoothResult},
};

/// A named, fixed effect chain.
///
/// There is no public constructor: every `&'static FilterPreset` is an entry of [`PRESETS`].
#[derive(Debug)]
pub struct FilterPreset {
    name: &'static str,
    effects: &'static [EffectOp],
}

/// All presets in display order. The first entry is the identity.
pub static PRESETS: [FilterPreset; 8] = [
    FilterPreset {
        name: "Original",
        effects: &[],
    },
    FilterPreset {
        name: "Grayscale",
        effects: &[EffectOp::Grayscale { amount: 1.0 }],
    },
    FilterPreset {
        name: "Sepia",
        effects: &[EffectOp::Sepia { amount: 1.0 }],
    },
    FilterPreset {
        name: "High Contrast",
        effects: &[
            EffectOp::Contrast { amount: 1.8 },
            EffectOp::Brightness { amount: 1.1 },
        ],
    },
    FilterPreset {
        name: "Vintage",
        effects: &[
            EffectOp::Sepia { amount: 0.7 },
            EffectOp::Saturate { amount: 1.5 },
            EffectOp::Contrast { amount: 1.2 },
        ],
    },
    FilterPreset {
        name: "Blue Tint",
        effects: &[
            EffectOp::HueRotate { degrees: 200.0 },
            EffectOp::Contrast { amount: 1.5 },
        ],
    },
    FilterPreset {
        name: "Soft Blur",
        effects: &[
            EffectOp::Blur { radius_px: 2.0 },
            EffectOp::Contrast { amount: 1.2 },
        ],
    },
    FilterPreset {
        name: "Saturated",
        effects: &[EffectOp::Saturate { amount: 2.5 }],
    },
];

impl FilterPreset {
    /// The identity preset ("Original").
    pub fn identity() -> &'static FilterPreset {
        &PRESETS[0]
    }

    /// All presets in display order.
    pub fn all() -> &'static [FilterPreset] {
        &PRESETS
    }

    /// Exact-name lookup.
    pub fn by_name(name: &str) -> Option<&'static FilterPreset> {
        PRESETS.iter().find(|p| p.name == name)
    }

    /// Lenient lookup: exact name first, then ignoring case, whitespace, `-` and `_`.
    pub fn lookup(query: &str) -> FilterBoothResult<&'static FilterPreset> {
        if let Some(p) = Self::by_name(query) {
            return Ok(p);
        }
        let key = fold_name(query);
        PRESETS
            .iter()
            .find(|p| fold_name(p.name) == key)
            .ok_or_else(|| {
                FilterBoothError::validation(format!(
                    "unknown filter '{query}' (expected one of: {})",
                    PRESETS
                        .iter()
                        .map(|p| p.name)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }

    /// Display label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The effect ops in application order.
    pub fn effects(&self) -> &'static [EffectOp] {
        self.effects
    }

    /// Compiled passes for this preset.
    pub fn pipeline(&self) -> FxPipeline {
        compile_effects(self.effects)
    }

    /// CSS `filter` value, `none` for the identity.
    pub fn css_filter(&self) -> String {
        css_filter(self.effects)
    }

    /// Return `true` for the preset with no effects.
    pub fn is_identity(&self) -> bool {
        self.effects.is_empty()
    }

    /// The name with all whitespace removed, used in export file names.
    pub fn compact_name(&self) -> String {
        self.name.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

impl PartialEq for FilterPreset {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FilterPreset {}

impl std::fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/presets.rs"]
mod tests;
