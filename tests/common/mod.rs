#![allow(dead_code)]

use mockito::{Mock, Server, ServerGuard};
use serde_json::{json, Value};
use vacancy_contract::{consts::NONEXISTENT_ID, VacancyClient};

pub const SERVICE_ROOT: &str = "/odata/v1";
pub const CONTENT_TYPE: &str =
    "application/json; odata.metadata=minimal; odata.streaming=true; charset=utf-8";

/// A `mockito` server answering like the vacancy service.
pub struct FakeService {
    pub server: ServerGuard,
    pub records: Vec<Value>,
    pub content_type: String,
    pub odata_version: String,
    /// Records served for `$top=2`; defaults to the head of `records`.
    pub top: Option<Vec<Value>>,
    /// Records served for `$skip=2`; defaults to the tail of `records`.
    pub skipped: Option<Vec<Value>>,
    /// Entity served for the id of the first record instead of the record itself.
    pub first_entity: Option<Value>,
    mocks: Vec<Mock>,
}

impl FakeService {
    pub async fn new(records: Vec<Value>) -> Self {
        Self {
            server: Server::new_async().await,
            records,
            content_type: CONTENT_TYPE.to_string(),
            odata_version: "4.0".to_string(),
            top: None,
            skipped: None,
            first_entity: None,
            mocks: Vec::new(),
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.url(), SERVICE_ROOT)
    }

    pub fn client(&self) -> VacancyClient {
        VacancyClient::new(self.base_url(), None).unwrap()
    }

    fn collection(&self, value: &[Value]) -> String {
        json!({
            "@odata.context": format!("{}/$metadata#Vacancies", self.base_url()),
            "value": value,
        })
        .to_string()
    }

    async fn ok(&mut self, path: String, body: String) {
        let mock = self
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", &self.content_type)
            .with_header("OData-Version", &self.odata_version)
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    /// Registers every endpoint the scenarios call.
    pub async fn mount(mut self) -> Self {
        let all = self.collection(&self.records);
        self.ok(format!("{SERVICE_ROOT}/Vacancies"), all).await;

        let top = self
            .top
            .clone()
            .unwrap_or_else(|| self.records.iter().take(2).cloned().collect());
        let top = self.collection(&top);
        self.ok(format!("{SERVICE_ROOT}/Vacancies?$top=2"), top).await;

        let skipped = self
            .skipped
            .clone()
            .unwrap_or_else(|| self.records.iter().skip(2).cloned().collect());
        let skipped = self.collection(&skipped);
        self.ok(format!("{SERVICE_ROOT}/Vacancies?$skip=2"), skipped).await;

        for (index, record) in self.records.clone().into_iter().enumerate() {
            let id = record["UniqueId"].as_str().unwrap().to_string();
            let mut entity = match (index, &self.first_entity) {
                (0, Some(first)) => first.clone(),
                _ => record,
            };
            entity["@odata.context"] =
                json!(format!("{}/$metadata#Vacancies/$entity", self.base_url()));
            self.ok(format!("{SERVICE_ROOT}/Vacancies('{id}')"), entity.to_string()).await;
        }

        let missing = format!("{SERVICE_ROOT}/Vacancies('{NONEXISTENT_ID}')");
        let not_found = self
            .server
            .mock("GET", missing.as_str())
            .with_status(204)
            .with_header("OData-Version", &self.odata_version)
            .create_async()
            .await;
        let not_allowed = self
            .server
            .mock("DELETE", missing.as_str())
            .with_status(405)
            .create_async()
            .await;
        self.mocks.push(not_found);
        self.mocks.push(not_allowed);
        self
    }
}

pub fn vacancy(uuid_tail: &str, title: &str, min: f64, max: f64) -> Value {
    json!({
        "UniqueId": format!("3f1c7f0e-5d4b-4c7a-9d2e-{uuid_tail}-nl-nl"),
        "Title": title,
        "MinSalary": min,
        "MaxSalary": max,
        "Salary": format!("€ {} tot € {}", min.trunc() as i64, max.trunc() as i64),
        "SalaryPeriod": "MONTH",
        "YourProfile": "Je hebt minimaal twee jaar ervaring met R of Python.",
        "WorkLocation": "Heerlen",
        "PublicationDate": "2024-05-13T00:00:00+02:00",
        "ContractType": "Tijdelijk met uitzicht op vast"
    })
}

pub fn sample_records() -> Vec<Value> {
    vec![
        vacancy("1a2b3c4d5e6f", "Statistisch onderzoeker", 3120.0, 4790.55),
        vacancy("1a2b3c4d5e70", "Data engineer", 3500.0, 5500.0),
        vacancy("1a2b3c4d5e71", "Methodoloog steekproeven", 4000.0, 6100.0),
        vacancy("1a2b3c4d5e72", "Medewerker servicedesk", 2600.0, 3400.0),
        vacancy("1a2b3c4d5e73", "Communicatieadviseur", 3800.0, 5200.0),
    ]
}
