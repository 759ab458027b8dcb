// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-standard parameterised instant.
//!
//! [`Time<S>`] stores a Julian Date as a [`Days`] quantity whose *meaning*
//! is fixed by the compile-time marker `S: TimeScale`.  Arithmetic is only
//! defined within one standard: adding a duration, or taking the
//! difference of two instants.  A `Time<UTC>` can never be added to or
//! compared with a `Time<TDB>`; the only bridge between standards is a
//! [`TimeConverter`](crate::TimeConverter).

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::scales::{TimeStandard, UTC};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time standards.
///
/// A **time scale** carries:
///
/// 1. A human-readable **label** (`"UTC"`, `"TT"`, `"TDB"`).
/// 2. The runtime [`TimeStandard`] tag, used when an instant has to be
///    reported outside the type system (error values, logs).
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Runtime tag for this standard.
    const STANDARD: TimeStandard;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>: the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A Julian Date counted in time standard `S`.
///
/// Internally stores a single `Days` quantity.  `PhantomData` is
/// zero-sized, so `Time<S>` is layout-identical to `Days` (a single `f64`).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw Julian Date.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The Julian Date as a quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The Julian Date as a scalar.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Runtime tag of this instant's standard.
    #[inline]
    pub const fn standard(&self) -> TimeStandard {
        S::STANDARD
    }

    /// Whether the Julian Date is a finite number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }
}

// ── chrono bridge (UTC only) ──────────────────────────────────────────────

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl Time<UTC> {
    /// Build a UTC Julian Date from a `chrono::DateTime<Utc>`.
    ///
    /// POSIX timestamps ignore leap seconds, which is exactly how a UTC
    /// Julian Date is counted, so this is a plain epoch shift.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        Self::from_days(UNIX_EPOCH_JD + (seconds_since_epoch + nanos).to::<Day>())
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value is not finite or falls outside chrono's
    /// representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.is_finite() {
            return None;
        }
        let seconds_since_epoch = (self.quantity - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = seconds_since_epoch.floor() as i64;
        let nanos = ((seconds_since_epoch - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos.min(999_999_999))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD({}) {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{TDB, TT};
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_creation_and_accessors() {
        let t = Time::<UTC>::new(2_459_430.285_65);
        assert_eq!(t.quantity(), Days::new(2_459_430.285_65));
        assert_eq!(t.value(), 2_459_430.285_65);
        assert_eq!(t.standard(), TimeStandard::Utc);
        assert_eq!(Time::<TDB>::new(0.0).standard(), TimeStandard::Tdb);
    }

    #[test]
    fn test_datetime_j2000_noon() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = Time::<UTC>::from_datetime(dt);
        assert!((jd.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn test_datetime_roundtrip() {
        let dt = DateTime::from_timestamp(1_627_367_000, 250_000_000).unwrap();
        let jd = Time::<UTC>::from_datetime(dt);
        let back = jd.to_datetime().expect("to_datetime");
        let delta_ns = back.timestamp_nanos_opt().unwrap() - dt.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 100_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn test_to_datetime_rejects_non_finite() {
        assert!(Time::<UTC>::new(f64::NAN).to_datetime().is_none());
        assert!(Time::<UTC>::new(f64::INFINITY).to_datetime().is_none());
    }

    #[test]
    fn test_ordering_within_a_standard() {
        let earlier = Time::<TT>::new(2_451_545.0);
        let later = earlier + Days::new(1.0);
        assert!(earlier < later);
        assert_eq!(later - earlier, Days::new(1.0));
    }

    #[test]
    fn test_add_sub_days() {
        let t = Time::<TDB>::new(2_451_545.0);
        assert_eq!((t + Days::new(1.5)).quantity(), Days::new(2_451_546.5));
        assert_eq!((t - Days::new(0.5)).quantity(), Days::new(2_451_544.5));
    }

    #[test]
    fn test_add_assign_sub_assign() {
        let mut t = Time::<TT>::new(2_451_545.0);
        t += Days::new(1.0);
        assert_eq!(t.quantity(), Days::new(2_451_546.0));
        t -= Days::new(0.5);
        assert_eq!(t.quantity(), Days::new(2_451_545.5));
    }

    #[test]
    fn test_difference_is_days() {
        let a = Time::<UTC>::new(2_459_001.0);
        let b = Time::<UTC>::new(2_459_000.0);
        assert_eq!(a - b, Days::new(1.0));
        assert!(b < a);
    }

    #[test]
    fn test_display_carries_label() {
        let s = format!("{}", Time::<TDB>::new(2_451_545.0));
        assert!(s.starts_with("JD(TDB)"), "{s}");
    }

    #[test]
    fn test_into_days() {
        let t = Time::<UTC>::new(2_451_547.5);
        let days: Days = t.into();
        assert_eq!(days, Days::new(2_451_547.5));
        assert_eq!(Time::<UTC>::from(days), t);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_raw_f64() {
        let t = Time::<TDB>::new(2_451_545.25);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "2451545.25");
        let back: Time<TDB> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
