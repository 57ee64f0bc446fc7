pub const DEFAULT_POPULATION_THRESHOLD: i64 = 15000;

pub const CSV_HEADER: &[&str] = &[
    "city_name",
    "population",
    "country_code",
    "timezone",
    "latitude",
    "longitude",
];

/// U+2019 encoded as UTF-8 and read back as Windows-1252.
pub const MOJIBAKE_APOSTROPHE: &str = "\u{e2}\u{20ac}\u{2122}";

// GeoNames "geoname" table, 0-based
pub const NAME_COLUMN: usize = 1;
pub const LATITUDE_COLUMN: usize = 4;
pub const LONGITUDE_COLUMN: usize = 5;
pub const COUNTRY_CODE_COLUMN: usize = 8;
pub const POPULATION_COLUMN: usize = 14;
pub const TIMEZONE_COLUMN: usize = 17;

pub const LENGTH_SUFFIX: &str = "_len";
pub const DEFAULT_LENGTH_TYPE: &str = "unsigned int";
pub const DEFAULT_ELEMENT_TYPE: &str = "unsigned char";
