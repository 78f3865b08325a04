//! Enumerations and "not available" codes shared by several message layouts.

//==================================================================================NOT_AVAILABLE
/// Course over ground, 1/10°.
pub const COG_NOT_AVAILABLE: u16 = 3600;
/// Speed over ground, 1/10 kn.
pub const SOG_NOT_AVAILABLE: u16 = 1023;
/// True heading, degrees.
pub const HEADING_NOT_AVAILABLE: u16 = 511;
/// Rate of turn indicator.
pub const ROT_NOT_AVAILABLE: i32 = -128;
/// UTC second of the report.
pub const SECOND_NOT_AVAILABLE: u8 = 60;
/// Longitude code, degrees.
pub const LONGITUDE_NOT_AVAILABLE: f64 = 181.0;
/// Latitude code, degrees.
pub const LATITUDE_NOT_AVAILABLE: f64 = 91.0;
/// SAR aircraft altitude, metres.
pub const ALTITUDE_NOT_AVAILABLE: u16 = 4095;
/// Long-range course, whole degrees.
pub const LONG_RANGE_COG_NOT_AVAILABLE: u16 = 511;
/// Long-range speed, whole knots.
pub const LONG_RANGE_SOG_NOT_AVAILABLE: u8 = 63;

//==================================================================================NAVIGATION_STATUS
/// Navigational status reported by class A and long-range position reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NavigationStatus {
    UnderWayUsingEngine,
    AtAnchor,
    NotUnderCommand,
    RestrictedManoeuvrability,
    ConstrainedByDraught,
    Moored,
    Aground,
    EngagedInFishing,
    UnderWaySailing,
    /// Reserved for high speed craft.
    ReservedHsc,
    /// Reserved for wing in ground craft.
    ReservedWig,
    PowerDrivenTowingAstern,
    PowerDrivenPushingAhead,
    Reserved,
    /// AIS-SART, MOB-AIS or EPIRB-AIS active.
    AisSartActive,
    NotDefined,
}

impl NavigationStatus {
    /// Map the 4-bit field value.
    pub fn from_raw(raw: u8) -> Self {
        match raw & 0x0F {
            0 => Self::UnderWayUsingEngine,
            1 => Self::AtAnchor,
            2 => Self::NotUnderCommand,
            3 => Self::RestrictedManoeuvrability,
            4 => Self::ConstrainedByDraught,
            5 => Self::Moored,
            6 => Self::Aground,
            7 => Self::EngagedInFishing,
            8 => Self::UnderWaySailing,
            9 => Self::ReservedHsc,
            10 => Self::ReservedWig,
            11 => Self::PowerDrivenTowingAstern,
            12 => Self::PowerDrivenPushingAhead,
            13 => Self::Reserved,
            14 => Self::AisSartActive,
            _ => Self::NotDefined,
        }
    }

    /// Field value of the status.
    pub fn raw(&self) -> u8 {
        *self as u8
    }
}
