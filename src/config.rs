//! Validator settings loaded from a YAML or JSON document.
//!
//! ```yaml
//! name_case: snake
//! catalog:
//!   locale: zh
//!   templates:
//!     minimum: "应该大于等于[{1}]，当前值为[{2}]"
//! rules:
//!   .name: "regexp:^[a-z]+$"
//!   .*.code:
//!     is: [countryCodeAlpha2]
//!     omitempty: true
//! ```

use serde::Deserialize;

use crate::casing::NameCase;
use crate::engine::{Validator, ValidatorBuilder};
use crate::error::ConfigError;
use crate::render::Catalog;
use crate::table::RuleTable;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    pub name_case: NameCase,
    /// Message templates; English when absent.
    pub catalog: Option<Catalog>,
    pub rules: RuleTable,
}

impl ValidatorConfig {
    pub fn from_yaml(input: &str) -> Result<ValidatorConfig, ConfigError> {
        serde_saphyr::from_str(input)
            .map_err(|e| ConfigError::new(format!("invalid validator config: {}", e)))
    }

    pub fn from_json(input: &str) -> Result<ValidatorConfig, ConfigError> {
        serde_json::from_str(input)
            .map_err(|e| ConfigError::new(format!("invalid validator config: {}", e)))
    }

    /// A builder carrying these settings, ready for custom atoms or a logger.
    pub fn into_builder(self) -> ValidatorBuilder {
        let builder = Validator::builder()
            .rules(self.rules)
            .name_case(self.name_case);
        match self.catalog {
            Some(catalog) => builder.renderer(catalog),
            None => builder,
        }
    }

    pub fn build(self) -> Validator {
        self.into_builder().build()
    }
}
