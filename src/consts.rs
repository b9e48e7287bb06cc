pub const DEFAULT_LOG_FILTERS: &[&str] = &[
    #[cfg(not(debug_assertions))]
    "mio=info",
    "hyper_util=info",
    "reqwest=info",
    "rustls=info",
    "hickory_resolver=info",
    "hickory_proto=info",
];

pub const DEFAULT_BASE_URL: &str = "https://www.cbs.nl/odata/v1";

/// Entity set every request goes through.
pub const ENTITY_SET: &str = "Vacancies";

/// Well-formed id that the service never hands out.
pub const NONEXISTENT_ID: &str = "00000000-0000-0000-0000-000000000000-nl-nl";

/// `<UUID>-nl-nl`
pub const UNIQUE_ID_LEN: usize = 42;
pub const MIN_TITLE_LEN: usize = 5;

/// Open interval both salary bounds must fall into.
pub const SALARY_FLOOR: f64 = 500.0;
pub const SALARY_CEILING: f64 = 9999.0;
pub const SALARY_PERIOD: &str = "MONTH";

pub const PROFILE_KEYWORDS: &str = "ervaring|niveau";
pub const WORK_LOCATIONS: &[&str] = &["Heerlen", "Den Haag"];

pub const ODATA_VERSION: &str = "4.0";

pub const TOP_COUNT: usize = 2;
pub const SKIP_COUNT: usize = 2;
