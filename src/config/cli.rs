use crate::config::ClientConfig;
use crate::domain::model::{parse_syllable_count, RelationKind, SearchRequest, SyllableComparison};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rhyme-finder")]
#[command(about = "Find rhymes, prefix matches and synonyms/antonyms via Datamuse")]
pub struct CliArgs {
    #[arg(long, short = 'r', default_value = "", help = "Word to rhyme with")]
    pub rhyme: String,

    #[arg(long, short = 's', default_value = "", help = "Results must start with this")]
    pub starts: String,

    #[arg(long, conflicts_with = "antonym", help = "Results must be synonyms of this word")]
    pub synonym: Option<String>,

    #[arg(long, help = "Results must be antonyms of this word")]
    pub antonym: Option<String>,

    #[arg(long, default_value = "", help = "Syllable count to filter by")]
    pub syllables: String,

    #[arg(long, help = "Keep words with fewer syllables than --syllables")]
    pub less_than: bool,

    #[arg(long, help = "Word service endpoint [env: DATAMUSE_ENDPOINT]")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Request timeout in seconds [env: DATAMUSE_TIMEOUT_SECONDS]")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Extra blocklist file, one base64 entry per line")]
    pub blocklist: Option<PathBuf>,

    #[arg(long, help = "Print filtered results as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON lines")]
    pub log_json: bool,
}

impl CliArgs {
    pub fn search_request(&self) -> SearchRequest {
        let (relation_kind, relation_term) = match (&self.synonym, &self.antonym) {
            (_, Some(term)) => (RelationKind::Antonym, term.clone()),
            (Some(term), None) => (RelationKind::Synonym, term.clone()),
            (None, None) => (RelationKind::Synonym, String::new()),
        };

        SearchRequest {
            rhyme_term: self.rhyme.clone(),
            prefix_term: self.starts.clone(),
            relation_kind,
            relation_term,
            syllable_comparison: if self.less_than {
                SyllableComparison::LessThan
            } else {
                SyllableComparison::Exact
            },
            syllable_count: parse_syllable_count(&self.syllables),
        }
    }

    /// `DATAMUSE_*` environment settings with command line flags on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(self.apply_overrides(ClientConfig::from_env()?))
    }

    pub fn apply_overrides(&self, mut base: ClientConfig) -> ClientConfig {
        if let Some(endpoint) = &self.endpoint {
            base.endpoint = endpoint.clone();
        }
        if self.timeout.is_some() {
            base.timeout_seconds = self.timeout;
        }
        if base.user_agent.is_none() {
            base.user_agent = Some(format!("rhyme-finder/{}", env!("CARGO_PKG_VERSION")));
        }
        base
    }
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        self.client_config()?.validate()?;
        if !self.search_request().has_terms() {
            return Err(SearchError::EmptyRequest);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rhyme_with_syllables() {
        let args = CliArgs::parse_from([
            "rhyme-finder",
            "--rhyme",
            "cat",
            "--syllables",
            "2",
            "--less-than",
        ]);
        let request = args.search_request();

        assert_eq!(request.rhyme_term, "cat");
        assert_eq!(request.syllable_count, 2);
        assert_eq!(request.syllable_comparison, SyllableComparison::LessThan);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_antonym_flag() {
        let args = CliArgs::parse_from(["rhyme-finder", "--antonym", "hot", "-s", "c"]);
        let request = args.search_request();

        assert_eq!(request.relation_kind, RelationKind::Antonym);
        assert_eq!(request.relation_term, "hot");
        assert_eq!(request.prefix_term, "c");
    }

    #[test]
    fn test_synonym_and_antonym_conflict() {
        let result =
            CliArgs::try_parse_from(["rhyme-finder", "--synonym", "a", "--antonym", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_terms_is_rejected() {
        let args = CliArgs::parse_from(["rhyme-finder", "--syllables", "3"]);
        assert!(matches!(args.validate(), Err(SearchError::EmptyRequest)));
    }

    #[test]
    fn test_flags_override_environment_config() {
        let base = ClientConfig {
            endpoint: "http://env.example/words".to_string(),
            timeout_seconds: Some(30),
            user_agent: Some("env-agent".to_string()),
        };

        let args = CliArgs::parse_from(["rhyme-finder", "-r", "cat"]);
        assert_eq!(args.apply_overrides(base.clone()), base);

        let args = CliArgs::parse_from([
            "rhyme-finder",
            "-r",
            "cat",
            "--endpoint",
            "http://flag.example/words",
            "--timeout",
            "5",
        ]);
        let config = args.apply_overrides(base);
        assert_eq!(config.endpoint, "http://flag.example/words");
        assert_eq!(config.timeout_seconds, Some(5));
        assert_eq!(config.user_agent.as_deref(), Some("env-agent"));
    }

    #[test]
    fn test_default_user_agent_when_unset() {
        let args = CliArgs::parse_from(["rhyme-finder", "-r", "cat"]);
        let config = args.apply_overrides(ClientConfig::default());
        assert!(config
            .user_agent
            .as_deref()
            .is_some_and(|agent| agent.starts_with("rhyme-finder/")));
        assert_eq!(config.endpoint, crate::config::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_bad_syllable_text_disables_filter() {
        let args = CliArgs::parse_from(["rhyme-finder", "-r", "dog", "--syllables", "many"]);
        assert_eq!(args.search_request().syllable_count, 0);
    }
}
