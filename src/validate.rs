use anyhow::{bail, ensure, Context};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use clap::ValueEnum;
use regex::Regex;
use reqwest::{header::CONTENT_TYPE, StatusCode};
use serde::Deserialize;

use crate::{
    client::ApiResponse,
    consts::{
        ENTITY_SET, MIN_TITLE_LEN, ODATA_VERSION, PROFILE_KEYWORDS, SALARY_CEILING,
        SALARY_FLOOR, SALARY_PERIOD, UNIQUE_ID_LEN, WORK_LOCATIONS,
    },
    models::Vacancy,
};

lazy_static::lazy_static! {
static ref PROFILE_KEYWORD_REGEX: Regex = Regex::new(PROFILE_KEYWORDS).unwrap();
}

/// How many fields of a vacancy are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Identity, title and salary bounds.
    Basic,
    /// Also the salary summary, profile text, location and publication date.
    #[default]
    Extended,
}

#[derive(Deserialize)]
struct ContextOnly {
    #[serde(rename = "@odata.context")]
    context: Option<String>,
}

/// Checks the envelope of a successful OData answer.
pub fn validate_odata_response(response: &ApiResponse, base_url: &str) -> anyhow::Result<()> {
    ensure!(
        response.status == StatusCode::OK,
        "expected status 200, got {}",
        response.status
    );

    let content_type = response.header(CONTENT_TYPE.as_str()).unwrap_or_default();
    ensure!(
        content_type.contains("application/json"),
        "content-type {content_type:?} is not application/json"
    );
    ensure!(
        content_type.contains("charset=utf-8"),
        "content-type {content_type:?} does not declare charset=utf-8"
    );

    let version = response.header("odata-version");
    ensure!(
        version == Some(ODATA_VERSION),
        "expected OData-Version {ODATA_VERSION}, got {version:?}"
    );

    let body: ContextOnly = response.json()?;
    let Some(context) = body.context else {
        bail!("body has no @odata.context");
    };
    let expected = crate::concat_str!(base_url.trim_end_matches('/'), "/$metadata#", ENTITY_SET);
    ensure!(
        context.starts_with(&expected),
        "@odata.context {context:?} does not start with {expected:?}"
    );
    Ok(())
}

/// Checks one decoded vacancy.
pub fn validate_vacancy(vacancy: &Vacancy, profile: Profile) -> anyhow::Result<()> {
    let id = &vacancy.unique_id;

    let id_len = id.chars().count();
    ensure!(
        id_len == UNIQUE_ID_LEN,
        "UniqueId {id:?} has {id_len} characters, expected {UNIQUE_ID_LEN}"
    );

    let title_len = vacancy.title.chars().count();
    ensure!(
        title_len > MIN_TITLE_LEN,
        "{id}: Title {:?} is not longer than {MIN_TITLE_LEN} characters",
        vacancy.title
    );

    let (min, max) = (vacancy.min_salary, vacancy.max_salary);
    ensure!(
        min > SALARY_FLOOR && min < SALARY_CEILING,
        "{id}: MinSalary {min} outside ({SALARY_FLOOR}, {SALARY_CEILING})"
    );
    ensure!(max < SALARY_CEILING, "{id}: MaxSalary {max} not below {SALARY_CEILING}");
    ensure!(max >= min, "{id}: MaxSalary {max} is lower than MinSalary {min}");

    ensure!(
        vacancy.salary_period == SALARY_PERIOD,
        "{id}: SalaryPeriod {:?} is not {SALARY_PERIOD:?}",
        vacancy.salary_period
    );

    if profile == Profile::Basic {
        return Ok(());
    }

    let salary = required(&vacancy.salary, id, "Salary")?;
    let expected = salary_summary(min, max);
    ensure!(salary == expected, "{id}: Salary {salary:?} differs from {expected:?}");

    let your_profile = required(&vacancy.your_profile, id, "YourProfile")?;
    ensure!(
        PROFILE_KEYWORD_REGEX.is_match(your_profile),
        "{id}: YourProfile mentions none of {PROFILE_KEYWORDS:?}"
    );

    let location = required(&vacancy.work_location, id, "WorkLocation")?;
    ensure!(
        WORK_LOCATIONS.iter().any(|city| location.contains(city)),
        "{id}: WorkLocation {location:?} is none of {WORK_LOCATIONS:?}"
    );

    let published = required(&vacancy.publication_date, id, "PublicationDate")?;
    let year = parse_date(published)
        .with_context(|| format!("{id}: PublicationDate {published:?}"))?
        .year();
    let current = Utc::now().year();
    ensure!(year <= current, "{id}: PublicationDate {published:?} lies after {current}");

    Ok(())
}

/// Checks every record, naming the index of the first bad one.
pub fn validate_vacancies(vacancies: &[Vacancy], profile: Profile) -> anyhow::Result<()> {
    for (index, vacancy) in vacancies.iter().enumerate() {
        validate_vacancy(vacancy, profile).with_context(|| format!("vacancy #{index}"))?;
    }
    Ok(())
}

/// `€ 2500 tot € 3800`, bounds truncated to whole euros.
pub fn salary_summary(min: f64, max: f64) -> String {
    format!("€ {} tot € {}", min.trunc() as i64, max.trunc() as i64)
}

fn required<'a>(field: &'a Option<String>, id: &str, name: &str) -> anyhow::Result<&'a str> {
    match field {
        Some(value) => Ok(value.as_str()),
        None => bail!("{id}: {name} is missing"),
    }
}

/// Accepts the timestamp shapes the service has been seen to emit.
fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%:z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Ok(dt.date_naive());
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.date());
        }
    }
    for format in ["%Y-%m-%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }
    bail!("not a recognised date")
}
