use std::time::Duration;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::{consts::DEFAULT_BASE_URL, scenarios::Scenario, validate::Profile};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Log level of application
    #[arg(global = true, short, long, env, default_value_t = LevelFilter::INFO)]
    pub log: LevelFilter,

    /// OData service root, e.g. https://www.cbs.nl/odata/v1
    #[arg(global = true, short, long, env, default_value_t = String::from(DEFAULT_BASE_URL))]
    pub base_url: String,

    /// Which vacancy fields are checked
    #[arg(global = true, short, long, env, value_enum, default_value_t = Profile::Extended)]
    pub profile: Profile,

    /// Scenario to run, repeatable; all of them when omitted
    #[arg(short, long = "scenario", value_enum)]
    pub scenarios: Vec<Scenario>,

    /// Per-request timeout in seconds
    #[arg(global = true, short, long, env)]
    pub timeout_secs: Option<u64>,
}

impl Opts {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn selected_scenarios(&self) -> Vec<Scenario> {
        if self.scenarios.is_empty() {
            Scenario::ALL.to_vec()
        } else {
            self.scenarios.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_run_everything_against_cbs() {
        let opts = Opts::try_parse_from(["vacancy-contract"]).unwrap();
        assert_eq!(opts.base_url, DEFAULT_BASE_URL);
        assert_eq!(opts.profile, Profile::Extended);
        assert_eq!(opts.selected_scenarios(), Scenario::ALL.to_vec());
        assert_eq!(opts.timeout(), None);
    }

    #[test]
    fn picks_scenarios_and_profile() {
        let opts = Opts::try_parse_from([
            "vacancy-contract",
            "-s",
            "top-n",
            "--scenario",
            "delete-disallowed",
            "--profile",
            "basic",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(opts.selected_scenarios(), vec![Scenario::TopN, Scenario::DeleteDisallowed]);
        assert_eq!(opts.profile, Profile::Basic);
        assert_eq!(opts.timeout(), Some(Duration::from_secs(5)));
    }
}
