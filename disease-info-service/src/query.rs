use disease_report::{CacheError, ResponseCache, build_disease_prompt};
use rig::{agent::Agent, client::CompletionClient, completion::Prompt, providers::openrouter};
use thiserror::Error;
use tracing::{info, warn};

const AGENT_PREAMBLE: &str =
    "You are a medical information assistant that returns structured disease summaries as JSON.";
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const DEFAULT_TEMPLATE_PATH: &str = "./disease_response_template.json";

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("failed to read the response template: {0}")]
    Template(#[from] std::io::Error),
    #[error("text-generation request failed: {0}")]
    Upstream(String),
    #[error("text-generation service returned an empty response")]
    EmptyResponse,
    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub struct FetchedResponse {
    pub raw: String,
    pub cached: bool,
}

/// Fetch the raw disease summary, consulting the cache before the collaborator.
///
/// A cache hit returns immediately with no template read and no remote call.
/// On a miss the collaborator's reply is normalized, cached and returned.
pub async fn fetch_disease_info(
    cache: &dyn ResponseCache,
    disease: &str,
) -> Result<FetchedResponse, QueryError> {
    if let Some(raw) = cache.get(disease).await? {
        info!("cache hit for '{}'", disease);
        return Ok(FetchedResponse { raw, cached: true });
    }

    let template = load_response_template().await?;
    let prompt = build_disease_prompt(disease, &template);

    let agent = get_llm_agent(AGENT_PREAMBLE).map_err(|e| QueryError::Upstream(e.to_string()))?;
    let response = agent
        .prompt(&prompt)
        .await
        .map_err(|e| QueryError::Upstream(e.to_string()))?;

    let cleaned = clean_llm_response(&response);
    if cleaned.is_empty() {
        warn!("empty collaborator response for '{}'", disease);
        return Err(QueryError::EmptyResponse);
    }

    cache.put(disease.to_string(), cleaned.clone()).await?;
    info!("cached collaborator response for '{}'", disease);

    Ok(FetchedResponse {
        raw: cleaned,
        cached: false,
    })
}

fn get_llm_agent(preamble: &str) -> anyhow::Result<Agent<openrouter::CompletionModel>> {
    let api_key = std::env::var("OPENROUTER_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENROUTER_API_KEY not set"))?;
    let model =
        std::env::var("DISEASE_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let client = openrouter::Client::new(&api_key);
    Ok(client.agent(&model).preamble(preamble).build())
}

/// The schema template is read once per request so it can be edited without
/// restarting the service.
async fn load_response_template() -> std::io::Result<String> {
    let path = std::env::var("DISEASE_TEMPLATE_PATH")
        .unwrap_or_else(|_| DEFAULT_TEMPLATE_PATH.to_string());
    tokio::fs::read_to_string(path).await
}

/// Strip a markdown code fence if the model added one despite instructions.
fn clean_llm_response(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("```json").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim().to_string()
}
