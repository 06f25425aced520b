use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;

/// Fixed instructional preamble for issue summarization. Static by design:
/// caller-controlled text is appended after it as data, never spliced into
/// the template itself.
const SUMMARY_INSTRUCTIONS: &str = "You will be given a paragraph describing \
a software issue reported by a user. The first sentence of the paragraph is \
the title of the issue and the remaining text is its description. Summarize \
the entire report into a few sentences, at most 5 sentences and no more than \
that. Do not give attention to unnecessary narrative details; focus on the \
technical aspects of the issue and produce the summary from those. The \
paragraph is as follows: ";

/// Condense a long-form issue into a short multi-sentence digest using the
/// configured chat model. Used only on the ingestion path; queries are
/// embedded raw.
pub async fn summarize(
    client: &reqwest::Client,
    config: &LlmConfig,
    text: &str,
) -> Result<String> {
    let prompt = build_prompt(text);

    let raw = match config.provider.as_str() {
        "ollama" => call_ollama(client, config, &prompt).await?,
        "openai" => call_openai(client, config, &prompt).await?,
        other => anyhow::bail!("Unknown LLM provider: {other}"),
    };

    clean_summary(&raw)
}

fn build_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(SUMMARY_INSTRUCTIONS.len() + text.len());
    prompt.push_str(SUMMARY_INSTRUCTIONS);
    prompt.push_str(text);
    prompt
}

/// The first candidate's text, whitespace-trimmed. A blank summary means the
/// model returned nothing usable and the caller must not embed it.
fn clean_summary(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Summarization returned an empty summary");
    }
    Ok(trimmed.to_string())
}

// ─── Ollama ──────────────────────────────────────────────

#[derive(Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OllamaChatResponse {
    message: Message,
}

async fn call_ollama(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String> {
    let url = format!("{}/api/chat", config.base_url);

    let req = OllamaChatRequest {
        model: config.chat_model.clone(),
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        stream: false,
    };

    let resp = client
        .post(&url)
        .json(&req)
        .send()
        .await
        .context("Failed to call Ollama chat API for summarization")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Ollama chat API returned {status}: {body}");
    }

    let body: OllamaChatResponse = resp
        .json()
        .await
        .context("Failed to parse Ollama chat response")?;
    Ok(body.message.content)
}

// ─── OpenAI-compatible ───────────────────────────────────

#[derive(Serialize)]
struct OpenAiChatRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Deserialize)]
struct OpenAiResponseMessage {
    content: String,
}

async fn call_openai(
    client: &reqwest::Client,
    config: &LlmConfig,
    prompt: &str,
) -> Result<String> {
    let url = format!("{}/v1/chat/completions", config.base_url);
    let api_key = config.api_key.as_deref().unwrap_or_default();

    let req = OpenAiChatRequest {
        model: config.chat_model.clone(),
        messages: vec![OpenAiMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: 0.3,
    };

    let resp = client
        .post(&url)
        .header("Authorization", format!("Bearer {api_key}"))
        .json(&req)
        .send()
        .await
        .context("Failed to call OpenAI chat API for summarization")?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("OpenAI chat API returned {status}: {body}");
    }

    let body: OpenAiChatResponse = resp
        .json()
        .await
        .context("Failed to parse OpenAI chat response")?;

    body.choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .context("OpenAI chat response contained no candidates")
}
