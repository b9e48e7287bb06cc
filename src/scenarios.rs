use std::fmt;

use anyhow::{ensure, Context};
use clap::ValueEnum;
use reqwest::StatusCode;
use tracing::{error, info};

use crate::{
    client::{ApiResponse, ODataQuery, VacancyClient},
    consts::{NONEXISTENT_ID, SKIP_COUNT, TOP_COUNT},
    models::{ODataCollection, Vacancy},
    validate::{validate_odata_response, validate_vacancies, validate_vacancy, Profile},
};

/// The independent checks run against the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    ListAll,
    TopN,
    SkipN,
    ById,
    Nonexistent,
    DeleteDisallowed,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::ListAll,
        Scenario::TopN,
        Scenario::SkipN,
        Scenario::ById,
        Scenario::Nonexistent,
        Scenario::DeleteDisallowed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::ListAll => "list-all",
            Scenario::TopN => "top-n",
            Scenario::SkipN => "skip-n",
            Scenario::ById => "by-id",
            Scenario::Nonexistent => "nonexistent",
            Scenario::DeleteDisallowed => "delete-disallowed",
        }
    }

    pub async fn run(self, client: &VacancyClient, profile: Profile) -> anyhow::Result<()> {
        match self {
            Scenario::ListAll => list_all(client, profile).await,
            Scenario::TopN => top_n(client, profile).await,
            Scenario::SkipN => skip_n(client, profile).await,
            Scenario::ById => by_id(client, profile).await,
            Scenario::Nonexistent => nonexistent(client).await,
            Scenario::DeleteDisallowed => delete_disallowed(client).await,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a batch of scenarios.
#[derive(Debug, Default)]
pub struct Report {
    pub passed: Vec<Scenario>,
    pub failed: Vec<(Scenario, anyhow::Error)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs `scenarios` one after another; a failure does not stop the batch.
pub async fn run_all(client: &VacancyClient, profile: Profile, scenarios: &[Scenario]) -> Report {
    let mut report = Report::default();
    for &scenario in scenarios {
        match scenario.run(client, profile).await {
            Ok(()) => {
                info!("{scenario}: ok");
                report.passed.push(scenario);
            }
            Err(err) => {
                error!("{scenario}: {err:#}");
                report.failed.push((scenario, err));
            }
        }
    }
    report
}

async fn fetch_collection(
    client: &VacancyClient,
    query: ODataQuery,
) -> anyhow::Result<(ApiResponse, Vec<Vacancy>)> {
    let response = client.list(query).await?;
    let collection: ODataCollection<Vacancy> = response
        .json()
        .with_context(|| format!("decoding {}", client.collection_url(query)))?;
    Ok((response, collection.value))
}

pub async fn list_all(client: &VacancyClient, profile: Profile) -> anyhow::Result<()> {
    let response = client.list(ODataQuery::default()).await?;
    validate_odata_response(&response, client.base_url())?;

    let vacancies = response.json::<ODataCollection<Vacancy>>()?.value;
    ensure!(vacancies.len() > 1, "expected more than one vacancy, got {}", vacancies.len());
    validate_vacancies(&vacancies, profile)
}

pub async fn top_n(client: &VacancyClient, profile: Profile) -> anyhow::Result<()> {
    let response = client.list(ODataQuery::top(TOP_COUNT)).await?;
    validate_odata_response(&response, client.base_url())?;

    let vacancies = response.json::<ODataCollection<Vacancy>>()?.value;
    ensure!(
        vacancies.len() == TOP_COUNT,
        "$top={TOP_COUNT} returned {} vacancies",
        vacancies.len()
    );
    validate_vacancies(&vacancies, profile)
}

pub async fn skip_n(client: &VacancyClient, profile: Profile) -> anyhow::Result<()> {
    let ((_, including), (excluding_response, excluding)) = futures::try_join!(
        fetch_collection(client, ODataQuery::default()),
        fetch_collection(client, ODataQuery::skip(SKIP_COUNT)),
    )?;
    validate_odata_response(&excluding_response, client.base_url())?;
    validate_vacancies(&including, profile)?;

    ensure!(
        excluding.len() + SKIP_COUNT == including.len(),
        "$skip={SKIP_COUNT} returned {} of {} vacancies",
        excluding.len(),
        including.len()
    );
    ensure!(
        excluding.first() == including.get(SKIP_COUNT),
        "first vacancy after $skip={SKIP_COUNT} is not vacancy #{SKIP_COUNT} of the full list"
    );
    ensure!(
        excluding.last() == including.last(),
        "last vacancy differs between the full and the skipped list"
    );
    Ok(())
}

pub async fn by_id(client: &VacancyClient, profile: Profile) -> anyhow::Result<()> {
    let (_, all) = fetch_collection(client, ODataQuery::default()).await?;
    let Some(first) = all.first() else {
        anyhow::bail!("service listed no vacancies to look up");
    };

    let response = client.get(&first.unique_id).await?;
    validate_odata_response(&response, client.base_url())?;

    let vacancy: Vacancy = response.json()?;
    ensure!(
        vacancy.unique_id == first.unique_id,
        "asked for {}, got {}",
        first.unique_id,
        vacancy.unique_id
    );
    ensure!(
        vacancy.title == first.title,
        "{}: title {:?} differs from listed {:?}",
        first.unique_id,
        vacancy.title,
        first.title
    );
    validate_vacancy(&vacancy, profile)
}

pub async fn nonexistent(client: &VacancyClient) -> anyhow::Result<()> {
    let response = client.get(NONEXISTENT_ID).await?;
    ensure!(
        response.status == StatusCode::NO_CONTENT,
        "GET {NONEXISTENT_ID}: expected 204, got {}",
        response.status
    );
    Ok(())
}

pub async fn delete_disallowed(client: &VacancyClient) -> anyhow::Result<()> {
    let response = client.delete(NONEXISTENT_ID).await?;
    ensure!(
        response.status == StatusCode::METHOD_NOT_ALLOWED,
        "DELETE {NONEXISTENT_ID}: expected 405, got {}",
        response.status
    );
    Ok(())
}
