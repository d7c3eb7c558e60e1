//! Great-circle distances on a spherical Earth.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::ips::check_finite;

pub const EARTH_RADIUS_METERS: f64 = 6_371e3;
const METER_TO_KM: f64 = 1e-3;
const METER_TO_MI: f64 = 6.2137119223733e-4;

/// Output unit of `haversine_distance`.
///
/// Codes are `m`, `km` and `mi`. The single-character codes of the older
/// native addon differ: its `'m'` produced kilometers and every other code
/// produced miles. Use `DistanceUnit::from_legacy_code` for those.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Unit selected by a legacy one-character code: `'m'` is kilometers,
    /// anything else miles.
    pub fn from_legacy_code(code: char) -> Self {
        match code {
            'm' => DistanceUnit::Kilometers,
            _ => DistanceUnit::Miles,
        }
    }

    #[inline]
    fn from_meters(self, d: f64) -> f64 {
        match self {
            DistanceUnit::Meters => d,
            DistanceUnit::Kilometers => d * METER_TO_KM,
            DistanceUnit::Miles => d * METER_TO_MI,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "m" => Ok(DistanceUnit::Meters),
            "km" => Ok(DistanceUnit::Kilometers),
            "mi" => Ok(DistanceUnit::Miles),
            other => Err(Error::invalid(format!("unknown distance unit `{other}`"))),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        };
        f.write_str(code)
    }
}

/// Haversine distance between two latitude/longitude pairs given in radians.
///
/// `a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)`, `d = 2R · atan2(√a, √(1−a))`.
pub fn haversine_distance(
    start_latitude: f64,
    start_longitude: f64,
    end_latitude: f64,
    end_longitude: f64,
    unit: DistanceUnit,
) -> f64 {
    let half_dlat = (end_latitude - start_latitude) / 2.0;
    let half_dlon = (end_longitude - start_longitude) / 2.0;
    let a = half_dlat.sin().powi(2)
        + start_latitude.cos() * end_latitude.cos() * half_dlon.sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    unit.from_meters(c * EARTH_RADIUS_METERS)
}

/// Haversine distance from each `[lat, lon]` origin to `destination`, all
/// in degrees. One distance per origin, in input order.
pub fn distances(
    origins: &[[f64; 2]],
    destination: [f64; 2],
    unit: DistanceUnit,
) -> Result<Vec<f64>> {
    check_finite(std::iter::once(destination.as_slice()))?;
    check_finite(origins.iter().map(|o| o.as_slice()))?;
    let [dest_lat, dest_lon] = destination.map(f64::to_radians);
    let out: Vec<f64> = origins
        .iter()
        .map(|o| {
            let [lat, lon] = o.map(f64::to_radians);
            haversine_distance(dest_lat, dest_lon, lat, lon, unit)
        })
        .collect();
    tracing::trace!(n = out.len(), %unit, "distances");
    Ok(out)
}
