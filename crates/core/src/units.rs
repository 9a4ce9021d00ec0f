//! Linear unit conversion
//!
//! Every quantity is described by a [`ConversionTable`]: a fixed mapping from
//! a unit to a positive multiplier against the table's base unit (square
//! meter, pascal, meter per second, byte). Converting is always
//! `amount * factor[from] / factor[to]`.
//!
//! Invalid input never produces an error here. Non-numeric or non-finite
//! amounts yield `None`, which the caller renders as an empty output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digits after the decimal point kept by [`format_value`]
pub const PRECISION: usize = 6;

/// Magnitudes at or above this value are printed in exponential notation
pub const EXPONENTIAL_UPPER: f64 = 1e15;

/// Non-zero magnitudes below this value are printed in exponential notation
pub const EXPONENTIAL_LOWER: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown quantity: {0}")]
    UnknownQuantity(String),
}

/// The physical quantity a table converts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Area,
    Pressure,
    Speed,
    Memory,
}

impl Quantity {
    pub const ALL: [Quantity; 4] = [
        Quantity::Area,
        Quantity::Pressure,
        Quantity::Speed,
        Quantity::Memory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Area => "area",
            Quantity::Pressure => "pressure",
            Quantity::Speed => "speed",
            Quantity::Memory => "memory",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quantity {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Quantity::ALL
            .into_iter()
            .find(|q| q.name() == wanted)
            .ok_or_else(|| ConvertError::UnknownQuantity(s.to_string()))
    }
}

/// A fixed factor table against a canonical base unit
pub trait ConversionTable {
    type Unit: Copy + Eq + fmt::Debug + fmt::Display + 'static;

    /// Multiplier that turns one `unit` into the base unit. Always positive and finite.
    fn factor(&self, unit: Self::Unit) -> f64;

    fn units(&self) -> &'static [Self::Unit];

    fn base_unit(&self) -> Self::Unit;

    fn quantity(&self) -> Quantity;
}

/// Lowercase, `²` as `2`, separators removed
fn normalize_unit_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| if c == '²' { '2' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

macro_rules! define_units {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($symbol:literal, $label:literal, [$($alias:literal),*])),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn symbol(&self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*]),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl FromStr for $name {
            type Err = ConvertError;

            /// Accepts the symbol, the name or any alias, ignoring case and separators
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_unit_name(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|unit| {
                        normalize_unit_name(unit.symbol()) == wanted
                            || normalize_unit_name(unit.name()) == wanted
                            || unit.aliases().iter().any(|alias| normalize_unit_name(alias) == wanted)
                    })
                    .ok_or_else(|| ConvertError::UnknownUnit(s.to_string()))
            }
        }
    };
}

// ============================================================================
// Area
// ============================================================================

define_units! {
    /// Area units, base unit square meter
    AreaUnit {
        SquareMillimeter => ("mm²", "square millimeter", ["mm2", "sq_mm"]),
        SquareCentimeter => ("cm²", "square centimeter", ["cm2", "sq_cm"]),
        SquareMeter => ("m²", "square meter", ["m2", "sq_m"]),
        Are => ("a", "are", []),
        Hectare => ("ha", "hectare", []),
        SquareKilometer => ("km²", "square kilometer", ["km2", "sq_km"]),
        SquareInch => ("in²", "square inch", ["in2", "sq_in"]),
        SquareFoot => ("ft²", "square foot", ["ft2", "sq_ft", "square feet"]),
        SquareYard => ("yd²", "square yard", ["yd2", "sq_yd"]),
        Acre => ("ac", "acre", []),
        SquareMile => ("mi²", "square mile", ["mi2", "sq_mi"]),
        Pyeong => ("pyeong", "pyeong", ["평", "py"]),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AreaTable;

impl ConversionTable for AreaTable {
    type Unit = AreaUnit;

    fn factor(&self, unit: AreaUnit) -> f64 {
        match unit {
            AreaUnit::SquareMillimeter => 1e-6,
            AreaUnit::SquareCentimeter => 1e-4,
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::Are => 100.0,
            AreaUnit::Hectare => 1e4,
            AreaUnit::SquareKilometer => 1e6,
            AreaUnit::SquareInch => 0.000_645_16,
            AreaUnit::SquareFoot => 0.092_903_04,
            AreaUnit::SquareYard => 0.836_127_36,
            AreaUnit::Acre => 4_046.856_422_4,
            AreaUnit::SquareMile => 2_589_988.110_336,
            AreaUnit::Pyeong => 400.0 / 121.0,
        }
    }

    fn units(&self) -> &'static [AreaUnit] {
        AreaUnit::ALL
    }

    fn base_unit(&self) -> AreaUnit {
        AreaUnit::SquareMeter
    }

    fn quantity(&self) -> Quantity {
        Quantity::Area
    }
}

// ============================================================================
// Pressure
// ============================================================================

define_units! {
    /// Pressure units, base unit pascal
    PressureUnit {
        Pascal => ("Pa", "pascal", []),
        Hectopascal => ("hPa", "hectopascal", []),
        Kilopascal => ("kPa", "kilopascal", []),
        Megapascal => ("MPa", "megapascal", []),
        Bar => ("bar", "bar", []),
        Millibar => ("mbar", "millibar", []),
        Atmosphere => ("atm", "atmosphere", []),
        Psi => ("psi", "pound per square inch", ["lbf/in2"]),
        Torr => ("Torr", "torr", []),
        MillimeterOfMercury => ("mmHg", "millimeter of mercury", []),
        InchOfMercury => ("inHg", "inch of mercury", []),
        KilogramForcePerSquareCentimeter => ("kgf/cm²", "kilogram-force per square centimeter", ["kgf/cm2", "at"]),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PressureTable;

impl ConversionTable for PressureTable {
    type Unit = PressureUnit;

    fn factor(&self, unit: PressureUnit) -> f64 {
        match unit {
            PressureUnit::Pascal => 1.0,
            PressureUnit::Hectopascal => 100.0,
            PressureUnit::Kilopascal => 1e3,
            PressureUnit::Megapascal => 1e6,
            PressureUnit::Bar => 1e5,
            PressureUnit::Millibar => 100.0,
            PressureUnit::Atmosphere => 101_325.0,
            PressureUnit::Psi => 6_894.757_293_168_361,
            PressureUnit::Torr => 101_325.0 / 760.0,
            PressureUnit::MillimeterOfMercury => 133.322_387_415,
            PressureUnit::InchOfMercury => 3_386.389,
            PressureUnit::KilogramForcePerSquareCentimeter => 98_066.5,
        }
    }

    fn units(&self) -> &'static [PressureUnit] {
        PressureUnit::ALL
    }

    fn base_unit(&self) -> PressureUnit {
        PressureUnit::Pascal
    }

    fn quantity(&self) -> Quantity {
        Quantity::Pressure
    }
}

// ============================================================================
// Speed
// ============================================================================

define_units! {
    /// Speed units, base unit meter per second
    SpeedUnit {
        MeterPerSecond => ("m/s", "meter per second", ["mps"]),
        KilometerPerHour => ("km/h", "kilometer per hour", ["kph", "kmh"]),
        MilePerHour => ("mph", "mile per hour", ["miles per hour"]),
        Knot => ("kn", "knot", ["kt", "knots"]),
        FootPerSecond => ("ft/s", "foot per second", ["fps"]),
        Mach => ("Ma", "mach", []),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedTable;

impl ConversionTable for SpeedTable {
    type Unit = SpeedUnit;

    fn factor(&self, unit: SpeedUnit) -> f64 {
        match unit {
            SpeedUnit::MeterPerSecond => 1.0,
            SpeedUnit::KilometerPerHour => 1.0 / 3.6,
            SpeedUnit::MilePerHour => 0.447_04,
            SpeedUnit::Knot => 1_852.0 / 3_600.0,
            SpeedUnit::FootPerSecond => 0.304_8,
            // Speed of sound at sea level, ISA 15 °C
            SpeedUnit::Mach => 340.29,
        }
    }

    fn units(&self) -> &'static [SpeedUnit] {
        SpeedUnit::ALL
    }

    fn base_unit(&self) -> SpeedUnit {
        SpeedUnit::MeterPerSecond
    }

    fn quantity(&self) -> Quantity {
        Quantity::Speed
    }
}

// ============================================================================
// Memory
// ============================================================================

define_units! {
    /// Memory size units, base unit byte
    MemoryUnit {
        Bit => ("bit", "bit", ["bits"]),
        Byte => ("B", "byte", ["bytes"]),
        Kilobyte => ("KB", "kilobyte", ["KiB", "kibibyte"]),
        Megabyte => ("MB", "megabyte", ["MiB", "mebibyte"]),
        Gigabyte => ("GB", "gigabyte", ["GiB", "gibibyte"]),
        Terabyte => ("TB", "terabyte", ["TiB", "tebibyte"]),
        Petabyte => ("PB", "petabyte", ["PiB", "pebibyte"]),
        Exabyte => ("EB", "exabyte", ["EiB", "exbibyte"]),
    }
}

impl MemoryUnit {
    /// Power of the mode's step this unit represents; bits and bytes are 0
    fn exponent(&self) -> i32 {
        match self {
            MemoryUnit::Bit | MemoryUnit::Byte => 0,
            MemoryUnit::Kilobyte => 1,
            MemoryUnit::Megabyte => 2,
            MemoryUnit::Gigabyte => 3,
            MemoryUnit::Terabyte => 4,
            MemoryUnit::Petabyte => 5,
            MemoryUnit::Exabyte => 6,
        }
    }
}

/// Whether prefixes step by 1024 or by 1000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryMode {
    #[default]
    Binary,
    Decimal,
}

impl MemoryMode {
    pub fn step(&self) -> f64 {
        match self {
            MemoryMode::Binary => 1024.0,
            MemoryMode::Decimal => 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryTable {
    pub mode: MemoryMode,
}

impl MemoryTable {
    pub fn new(mode: MemoryMode) -> Self {
        Self { mode }
    }
}

impl ConversionTable for MemoryTable {
    type Unit = MemoryUnit;

    fn factor(&self, unit: MemoryUnit) -> f64 {
        match unit {
            MemoryUnit::Bit => 0.125,
            other => self.mode.step().powi(other.exponent()),
        }
    }

    fn units(&self) -> &'static [MemoryUnit] {
        MemoryUnit::ALL
    }

    fn base_unit(&self) -> MemoryUnit {
        MemoryUnit::Byte
    }

    fn quantity(&self) -> Quantity {
        Quantity::Memory
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Parse a user-entered amount
///
/// Surrounding whitespace and `,`/`_` digit separators are ignored. Empty,
/// non-numeric and non-finite input returns `None`.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Convert `amount` from one unit to another through the table's base unit
pub fn convert<T: ConversionTable>(
    table: &T,
    amount: f64,
    from: T::Unit,
    to: T::Unit,
) -> Option<f64> {
    if !amount.is_finite() {
        return None;
    }

    let base = amount * table.factor(from);
    let value = base / table.factor(to);

    value.is_finite().then_some(value)
}

/// The amount expressed in every unit of the table, in table order
pub fn convert_all<T: ConversionTable>(
    table: &T,
    amount: f64,
    from: T::Unit,
) -> Vec<(T::Unit, f64)> {
    table
        .units()
        .iter()
        .filter_map(|unit| convert(table, amount, from, *unit).map(|value| (*unit, value)))
        .collect()
}

fn trim_fraction(formatted: &str) -> String {
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted.to_string()
    }
}

/// Format a converted value for display
///
/// Fixed notation with [`PRECISION`] fractional digits and trailing zeros
/// trimmed, or exponential notation outside
/// [`EXPONENTIAL_LOWER`]..[`EXPONENTIAL_UPPER`]. Non-finite values format as
/// an empty string.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(EXPONENTIAL_LOWER..EXPONENTIAL_UPPER).contains(&magnitude) {
        let formatted = format!("{:.*e}", PRECISION, value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{}", trim_fraction(mantissa), exponent),
            None => formatted,
        };
    }

    trim_fraction(&format!("{:.*}", PRECISION, value))
}

/// Serializable result of a single conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    pub quantity: Quantity,
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub value: f64,
    pub formatted: String,
}

pub fn build_output<T: ConversionTable>(
    table: &T,
    amount: f64,
    from: T::Unit,
    to: T::Unit,
) -> Option<ConversionOutput> {
    let value = convert(table, amount, from, to)?;

    Some(ConversionOutput {
        quantity: table.quantity(),
        amount,
        from: from.to_string(),
        to: to.to_string(),
        value,
        formatted: format_value(value),
    })
}

/// Interactive converter state
///
/// Remembers the last valid amount so a swap of the two units can re-derive
/// the output even when the current input is invalid.
#[derive(Debug, Clone)]
pub struct Converter<T: ConversionTable> {
    table: T,
    from: T::Unit,
    to: T::Unit,
    last_valid: Option<f64>,
    input_valid: bool,
}

impl<T: ConversionTable> Converter<T> {
    pub fn new(table: T, from: T::Unit, to: T::Unit) -> Self {
        Self {
            table,
            from,
            to,
            last_valid: None,
            input_valid: false,
        }
    }

    pub fn from_unit(&self) -> T::Unit {
        self.from
    }

    pub fn to_unit(&self) -> T::Unit {
        self.to
    }

    pub fn last_valid_input(&self) -> Option<f64> {
        self.last_valid
    }

    /// Feed raw user input; returns the converted value for valid input
    pub fn set_input(&mut self, input: &str) -> Option<f64> {
        match parse_amount(input) {
            Some(amount) => {
                self.last_valid = Some(amount);
                self.input_valid = true;
            }
            None => self.input_valid = false,
        }

        self.output()
    }

    pub fn set_units(&mut self, from: T::Unit, to: T::Unit) -> Option<f64> {
        self.from = from;
        self.to = to;
        self.output()
    }

    /// Exchange the two units and re-derive the output from the last valid input
    pub fn swap(&mut self) -> Option<f64> {
        std::mem::swap(&mut self.from, &mut self.to);
        self.input_valid = self.last_valid.is_some();
        self.output()
    }

    pub fn output(&self) -> Option<f64> {
        if !self.input_valid {
            return None;
        }

        self.last_valid
            .and_then(|amount| convert(&self.table, amount, self.from, self.to))
    }

    pub fn formatted_output(&self) -> String {
        self.output().map(format_value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs().max(1.0) * 1e-9;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_round_trips<T: ConversionTable>(table: &T) {
        for value in [0.001, 1.0, 42.5, 12_345.678] {
            for from in table.units() {
                for to in table.units() {
                    let there = convert(table, value, *from, *to).unwrap();
                    let back = convert(table, there, *to, *from).unwrap();
                    assert_close(back, value);
                }
            }
        }
    }

    // ============================================================================
    // Factor tables
    // ============================================================================

    #[test]
    fn test_all_factors_are_positive_and_finite() {
        for unit in AreaUnit::ALL {
            let f = AreaTable.factor(*unit);
            assert!(f.is_finite() && f > 0.0, "{unit}");
        }
        for unit in PressureUnit::ALL {
            let f = PressureTable.factor(*unit);
            assert!(f.is_finite() && f > 0.0, "{unit}");
        }
        for unit in SpeedUnit::ALL {
            let f = SpeedTable.factor(*unit);
            assert!(f.is_finite() && f > 0.0, "{unit}");
        }
        for mode in [MemoryMode::Binary, MemoryMode::Decimal] {
            for unit in MemoryUnit::ALL {
                let f = MemoryTable::new(mode).factor(*unit);
                assert!(f.is_finite() && f > 0.0, "{unit}");
            }
        }
    }

    #[test]
    fn test_base_units_have_factor_one() {
        assert_eq!(AreaTable.factor(AreaTable.base_unit()), 1.0);
        assert_eq!(PressureTable.factor(PressureTable.base_unit()), 1.0);
        assert_eq!(SpeedTable.factor(SpeedTable.base_unit()), 1.0);
        assert_eq!(MemoryTable::default().factor(MemoryUnit::Byte), 1.0);
    }

    // ============================================================================
    // convert tests
    // ============================================================================

    #[test]
    fn test_convert_atmosphere_to_pascal() {
        let value = convert(
            &PressureTable,
            1.0,
            PressureUnit::Atmosphere,
            PressureUnit::Pascal,
        );
        assert_eq!(value, Some(101_325.0));
    }

    #[test]
    fn test_convert_kmh_to_ms() {
        let value = convert(
            &SpeedTable,
            100.0,
            SpeedUnit::KilometerPerHour,
            SpeedUnit::MeterPerSecond,
        )
        .unwrap();
        assert!((value - 27.7778).abs() < 1e-4);
        assert_eq!(format_value(value), "27.777778");
    }

    #[test]
    fn test_convert_gigabyte_binary_to_bytes() {
        let table = MemoryTable::new(MemoryMode::Binary);
        let value = convert(&table, 1.0, MemoryUnit::Gigabyte, MemoryUnit::Byte);
        assert_eq!(value, Some(1_073_741_824.0));
    }

    #[test]
    fn test_convert_gigabyte_decimal_to_bytes() {
        let table = MemoryTable::new(MemoryMode::Decimal);
        let value = convert(&table, 1.0, MemoryUnit::Gigabyte, MemoryUnit::Byte);
        assert_eq!(value, Some(1_000_000_000.0));
    }

    #[test]
    fn test_convert_byte_to_bits() {
        let value = convert(&MemoryTable::default(), 1.0, MemoryUnit::Byte, MemoryUnit::Bit);
        assert_eq!(value, Some(8.0));
    }

    #[test]
    fn test_convert_pyeong_to_square_meter() {
        let value = convert(&AreaTable, 121.0, AreaUnit::Pyeong, AreaUnit::SquareMeter).unwrap();
        assert_close(value, 400.0);
    }

    #[test]
    fn test_convert_acre_to_hectare() {
        let value = convert(&AreaTable, 1.0, AreaUnit::Acre, AreaUnit::Hectare).unwrap();
        assert_close(value, 0.404_685_642_24);
    }

    #[test]
    fn test_convert_rejects_non_finite_input() {
        let nan = convert(&AreaTable, f64::NAN, AreaUnit::Acre, AreaUnit::Are);
        let inf = convert(&AreaTable, f64::INFINITY, AreaUnit::Acre, AreaUnit::Are);
        assert_eq!(nan, None);
        assert_eq!(inf, None);
    }

    #[test]
    fn test_convert_rejects_overflowing_result() {
        let value = convert(
            &MemoryTable::default(),
            f64::MAX,
            MemoryUnit::Exabyte,
            MemoryUnit::Bit,
        );
        assert_eq!(value, None);
    }

    #[test]
    fn test_round_trip_every_pair() {
        assert_round_trips(&AreaTable);
        assert_round_trips(&PressureTable);
        assert_round_trips(&SpeedTable);
        assert_round_trips(&MemoryTable::new(MemoryMode::Binary));
        assert_round_trips(&MemoryTable::new(MemoryMode::Decimal));
    }

    #[test]
    fn test_convert_all_lists_every_unit() {
        let all = convert_all(&SpeedTable, 1.0, SpeedUnit::MeterPerSecond);
        assert_eq!(all.len(), SpeedUnit::ALL.len());
        assert_eq!(all[0], (SpeedUnit::MeterPerSecond, 1.0));
    }

    // ============================================================================
    // parse_amount tests
    // ============================================================================

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("42"), Some(42.0));
        assert_eq!(parse_amount("  -3.5 "), Some(-3.5));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_amount_with_separators() {
        assert_eq!(parse_amount("1,234,567.5"), Some(1_234_567.5));
        assert_eq!(parse_amount("1_000"), Some(1000.0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    // ============================================================================
    // format_value tests
    // ============================================================================

    #[test]
    fn test_format_value_trims_trailing_zeros() {
        assert_eq!(format_value(101_325.0), "101325");
        assert_eq!(format_value(1.5), "1.5");
        assert_eq!(format_value(0.125), "0.125");
    }

    #[test]
    fn test_format_value_rounds_to_precision() {
        assert_eq!(format_value(1.0 / 3.0), "0.333333");
        assert_eq!(format_value(2.0 / 3.0), "0.666667");
    }

    #[test]
    fn test_format_value_exponential_for_large_and_small() {
        assert_eq!(format_value(1.5e20), "1.5e20");
        assert_eq!(format_value(2.5e-9), "2.5e-9");
        assert_eq!(format_value(-4e16), "-4e16");
    }

    #[test]
    fn test_format_value_zero_and_non_finite() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(f64::NAN), "");
        assert_eq!(format_value(f64::INFINITY), "");
    }

    // ============================================================================
    // Unit parsing
    // ============================================================================

    #[test]
    fn test_unit_from_str_symbol_name_and_alias() {
        assert_eq!("m²".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeter);
        assert_eq!("m2".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeter);
        assert_eq!("Square Meter".parse::<AreaUnit>().unwrap(), AreaUnit::SquareMeter);
        assert_eq!("square_foot".parse::<AreaUnit>().unwrap(), AreaUnit::SquareFoot);
        assert_eq!("kph".parse::<SpeedUnit>().unwrap(), SpeedUnit::KilometerPerHour);
        assert_eq!("ATM".parse::<PressureUnit>().unwrap(), PressureUnit::Atmosphere);
        assert_eq!("GiB".parse::<MemoryUnit>().unwrap(), MemoryUnit::Gigabyte);
        assert_eq!("bit".parse::<MemoryUnit>().unwrap(), MemoryUnit::Bit);
        assert_eq!("b".parse::<MemoryUnit>().unwrap(), MemoryUnit::Byte);
    }

    #[test]
    fn test_unit_from_str_unknown() {
        let err = "furlong".parse::<SpeedUnit>().unwrap_err();
        assert_eq!(err, ConvertError::UnknownUnit("furlong".to_string()));
    }

    #[test]
    fn test_unit_symbols_are_unambiguous() {
        for unit in PressureUnit::ALL {
            assert_eq!(unit.symbol().parse::<PressureUnit>().unwrap(), *unit);
        }
        for unit in AreaUnit::ALL {
            assert_eq!(unit.symbol().parse::<AreaUnit>().unwrap(), *unit);
        }
        for unit in MemoryUnit::ALL {
            assert_eq!(unit.symbol().parse::<MemoryUnit>().unwrap(), *unit);
        }
        for unit in SpeedUnit::ALL {
            assert_eq!(unit.symbol().parse::<SpeedUnit>().unwrap(), *unit);
        }
    }

    #[test]
    fn test_quantity_from_str() {
        assert_eq!("Pressure".parse::<Quantity>().unwrap(), Quantity::Pressure);
        assert!("volume".parse::<Quantity>().is_err());
    }

    // ============================================================================
    // Converter tests
    // ============================================================================

    #[test]
    fn test_converter_swap_rederives_output() {
        let mut converter = Converter::new(
            SpeedTable,
            SpeedUnit::MeterPerSecond,
            SpeedUnit::KilometerPerHour,
        );
        assert_eq!(converter.set_input("10").map(format_value).unwrap(), "36");

        converter.swap();
        assert_eq!(converter.from_unit(), SpeedUnit::KilometerPerHour);
        assert_eq!(converter.to_unit(), SpeedUnit::MeterPerSecond);
        assert_eq!(converter.formatted_output(), "2.777778");
    }

    #[test]
    fn test_converter_invalid_input_empties_output() {
        let mut converter = Converter::new(PressureTable, PressureUnit::Bar, PressureUnit::Pascal);
        assert_eq!(converter.set_input("2"), Some(200_000.0));
        assert_eq!(converter.set_input("2x"), None);
        assert_eq!(converter.formatted_output(), "");
        assert_eq!(converter.last_valid_input(), Some(2.0));
    }

    #[test]
    fn test_converter_swap_uses_last_valid_input() {
        let mut converter = Converter::new(PressureTable, PressureUnit::Bar, PressureUnit::Pascal);
        converter.set_input("1");
        converter.set_input("");
        assert_eq!(converter.swap(), Some(1e-5));
    }

    #[test]
    fn test_converter_without_input() {
        let mut converter = Converter::new(AreaTable, AreaUnit::Are, AreaUnit::SquareMeter);
        assert_eq!(converter.output(), None);
        assert_eq!(converter.swap(), None);
    }

    #[test]
    fn test_build_output() {
        let output = build_output(&PressureTable, 1.0, PressureUnit::Atmosphere, PressureUnit::Kilopascal)
            .unwrap();
        assert_eq!(output.quantity, Quantity::Pressure);
        assert_eq!(output.from, "atm");
        assert_eq!(output.to, "kPa");
        assert_eq!(output.formatted, "101.325");
    }
}
