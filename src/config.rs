// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Converter settings.

use crate::error::{ConversionError, Result};
use crate::precision::{DEFAULT_DECIMALS, MAX_DECIMALS};

/// Settings applied by [`BarycentricConverter`](crate::BarycentricConverter)
/// and the request boundary.
///
/// ```
/// use baryjd::ConversionConfig;
///
/// let config = ConversionConfig::default().with_decimals(8);
/// assert_eq!(config.decimals, 8);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ConfigFields"))]
pub struct ConversionConfig {
    /// Decimal places kept when truncating outputs.
    pub decimals: u32,
    /// Map batches with rayon. Has no effect without the `parallel` feature.
    pub parallel: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            parallel: false,
        }
    }
}

impl ConversionConfig {
    pub const fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject settings the converter cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(ConversionError::MalformedInput(format!(
                "decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}

/// Deserialisation shadow, validated into a [`ConversionConfig`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct ConfigFields {
    decimals: u32,
    parallel: bool,
}

#[cfg(feature = "serde")]
impl Default for ConfigFields {
    fn default() -> Self {
        let ConversionConfig { decimals, parallel } = ConversionConfig::default();
        Self { decimals, parallel }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigFields> for ConversionConfig {
    type Error = ConversionError;

    fn try_from(fields: ConfigFields) -> Result<Self> {
        let config = Self {
            decimals: fields.decimals,
            parallel: fields.parallel,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConversionConfig::default();
        assert_eq!(config.decimals, 6);
        assert!(!config.parallel);
    }

    #[test]
    fn builders_chain() {
        let config = ConversionConfig::default()
            .with_decimals(3)
            .with_parallel(true);
        assert_eq!(
            config,
            ConversionConfig {
                decimals: 3,
                parallel: true
            }
        );
    }

    #[test]
    fn decimals_beyond_f64_precision_are_rejected() {
        assert!(ConversionConfig::default().with_decimals(MAX_DECIMALS).validate().is_ok());
        for decimals in [MAX_DECIMALS + 1, 400, u32::MAX] {
            let err = ConversionConfig::default()
                .with_decimals(decimals)
                .validate()
                .unwrap_err();
            assert_eq!(err.kind(), "malformed_input", "decimals={decimals}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialisation_validates_decimals() {
        let err = serde_json::from_str::<ConversionConfig>(r#"{"decimals": 400}"#).unwrap_err();
        assert!(err.to_string().contains("decimals"), "{err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_take_defaults() {
        let config: ConversionConfig = serde_json::from_str(r#"{"parallel": true}"#).unwrap();
        assert_eq!(config.decimals, DEFAULT_DECIMALS);
        assert!(config.parallel);
    }
}
