/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a year, the length of the month list
pub const MONTHS_IN_YEAR: u8 = 12;

/// Number of weekday columns in the day grid
pub const DAYS_IN_WEEK: u8 = 7;

/// Longest month, used when the displayed month is unknown
pub const MAX_DAYS_IN_MONTH: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Zero-based index of February, as used by the picker sections
pub const FEBRUARY_INDEX: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between sections in an order string such as `m-d-y`
pub const ORDER_SEPARATOR: char = '-';

/// First year of the year list unless configured
pub const DEFAULT_START_YEAR: i32 = 1960;
/// Exclusive end of the year list unless configured
pub const DEFAULT_END_YEAR: i32 = 2060;

/// Container element unless configured
pub const DEFAULT_TAG: &str = "div";
/// Class always applied to the container element
pub const CONTAINER_CLASS: &str = "SimpleDatepicker";

/// Items visible at once in a scrollable list
pub const VISIBLE_LIST_ITEMS: f32 = 5.0;
