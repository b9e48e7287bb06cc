use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of the `Vacancies` entity set.
///
/// Only the fields that are checked are typed. Everything else lands in
/// `extra`, so two records compare equal only when the service sent the same
/// payload for both.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Vacancy {
    pub unique_id: String,
    pub title: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub salary_period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub your_profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a collection query.
#[derive(Debug, Deserialize, Clone)]
pub struct ODataCollection<T> {
    #[serde(rename = "@odata.context")]
    pub context: String,
    pub value: Vec<T>,
}
