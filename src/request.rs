// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wire-level request and response types.
//!
//! A [`ConversionRequest`] carries the raw fields a remote client sends:
//!
//! | Field | Meaning | Required |
//! |-------|---------|----------|
//! | `f` | `"utc2bjd"` or `"hjd2bjd"` | yes |
//! | `ra`, `dec` | target, degrees | yes |
//! | `lat`, `lon` | observer, degrees | no (0) |
//! | `elev` | observer, metres | no (0) |
//! | `jd` | epochs | yes |
//!
//! [`ConversionRequest::execute`] validates them in that order and answers
//! with a truncated [`ConversionResponse`].  Every failure is a
//! [`ConversionError`] whose [`status_code`](ConversionError::status_code)
//! a service layer can forward as is.

use std::fmt;
use std::str::FromStr;

use log::warn;

use crate::convert::BarycentricConverter;
use crate::coordinates::{ObserverLocation, SkyDirection};
use crate::ephemeris::EphemerisProvider;
use crate::error::{ConversionError, Result};
use crate::precision::truncate;
use crate::time_standard::TimeStandardProvider;

/// The two supported conversions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    Utc2Bjd,
    Hjd2Bjd,
}

impl ConversionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utc2Bjd => "utc2bjd",
            Self::Hjd2Bjd => "hjd2bjd",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConversionKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc2bjd" => Ok(Self::Utc2Bjd),
            "hjd2bjd" => Ok(Self::Hjd2Bjd),
            _ => Err(ConversionError::UnsupportedConversion(s.to_string())),
        }
    }
}

fn require<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| ConversionError::MalformedInput(format!("missing field '{field}'")))
}

// ═══════════════════════════════════════════════════════════════════════════
// Request
// ═══════════════════════════════════════════════════════════════════════════

/// A conversion request as received over the wire.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionRequest {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub f: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ra: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dec: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lat: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lon: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub elev: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub jd: Option<Vec<f64>>,
}

impl ConversionRequest {
    /// A complete request for a geocentric observer.
    pub fn new(kind: ConversionKind, ra: f64, dec: f64, epochs: impl Into<Vec<f64>>) -> Self {
        Self {
            f: Some(kind.to_string()),
            ra: Some(ra),
            dec: Some(dec),
            jd: Some(epochs.into()),
            ..Self::default()
        }
    }

    pub fn with_observer(mut self, lat: f64, lon: f64, elev: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self.elev = Some(elev);
        self
    }

    /// Validate the request and run it on `converter`.
    pub fn execute<E, P>(&self, converter: &BarycentricConverter<E, P>) -> Result<ConversionResponse>
    where
        E: EphemerisProvider,
        P: TimeStandardProvider,
    {
        converter.config().validate()?;

        let kind = require(self.f.as_deref(), "f")?;
        let ra = require(self.ra, "ra")?;
        let dec = require(self.dec, "dec")?;
        let epochs = require(self.jd.as_deref(), "jd")?;

        let kind: ConversionKind = kind.parse()?;
        let target = SkyDirection::new(ra, dec)?;

        let location = ObserverLocation::new(
            self.lat.unwrap_or(0.0),
            self.lon.unwrap_or(0.0),
            self.elev.unwrap_or(0.0),
        )?;

        let bjd = match kind {
            ConversionKind::Utc2Bjd => converter.utc_to_bjd(epochs, &target, &location)?,
            ConversionKind::Hjd2Bjd => {
                if !location.is_geocenter() {
                    warn!("hjd2bjd is geocentric; ignoring observer location {location:?}");
                }
                converter.hjd_to_bjd(epochs, &target)?
            }
        };

        ConversionResponse::for_request(epochs.len(), truncate(&bjd, converter.config().decimals))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Response
// ═══════════════════════════════════════════════════════════════════════════

/// Truncated BJD_TDB values, one per requested epoch, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConversionResponse {
    pub bjd_tdb: Vec<f64>,
}

impl ConversionResponse {
    fn for_request(expected: usize, bjd_tdb: Vec<f64>) -> Result<Self> {
        if bjd_tdb.len() != expected {
            return Err(ConversionError::MalformedInput(format!(
                "expected {expected} result(s), produced {}",
                bjd_tdb.len()
            )));
        }
        Ok(Self { bjd_tdb })
    }

    pub fn len(&self) -> usize {
        self.bjd_tdb.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bjd_tdb.is_empty()
    }
}

impl From<ConversionResponse> for Vec<f64> {
    fn from(response: ConversionResponse) -> Self {
        response.bjd_tdb
    }
}
