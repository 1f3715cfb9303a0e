//! Request and response entities for prompt composition.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Content-authoring parameters describing the prompt the caller wants.
///
/// Every field is required. Empty strings and empty lists are accepted;
/// anything of the wrong shape is rejected during deserialization, before
/// a provider is ever contacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptParameters {
    /// The user's raw, underspecified request.
    pub vague_prompt: String,
    pub purpose: String,
    pub tone: String,
    pub complexity: String,
    pub target_audience: String,
    pub format: String,
    pub length: String,
    pub keywords: Vec<String>,
    pub style: String,
    pub references: Vec<String>,
    pub vocabulary_level: String,
    pub emotion: String,
    pub cultural_considerations: String,
    /// Accepts a single string (older front-ends) or a list of strings.
    #[serde(deserialize_with = "one_or_many")]
    pub visual_aids: Vec<String>,
    /// Accepts a single string (older front-ends) or a list of strings.
    #[serde(deserialize_with = "one_or_many")]
    pub interactivity: Vec<String>,
    pub restrictions: String,
}

/// The refined prompt returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub optimized_prompt: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Deserialize either `"a"` or `["a", "b"]` into a list.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match OneOrMany::deserialize(deserializer) {
        Ok(OneOrMany::One(value)) => Ok(vec![value]),
        Ok(OneOrMany::Many(values)) => Ok(values),
        Err(_) => Err(D::Error::custom(
            "expected a string or a list of strings",
        )),
    }
}
