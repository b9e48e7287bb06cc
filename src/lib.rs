pub mod macros;

pub mod client;
pub mod consts;
pub mod models;
pub mod opts;
pub mod scenarios;
pub mod validate;

pub use client::{ApiResponse, ODataQuery, VacancyClient};
pub use models::{ODataCollection, Vacancy};
pub use scenarios::{run_all, Report, Scenario};
pub use validate::{validate_odata_response, validate_vacancies, validate_vacancy, Profile};
