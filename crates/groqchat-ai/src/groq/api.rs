//! ChatModel trait implementation for GroqClient (streaming).

use futures_util::{future, stream, StreamExt, TryStreamExt};
use tracing::{debug, warn};

use crate::streaming::response_events;
use crate::{AiError, ChatModel, ChunkStream, Message};

use super::client::{parse_stream_payload, GroqClient, DONE_SENTINEL};

impl ChatModel for GroqClient {
    fn model_id(&self) -> &str {
        &self.config.model
    }

    fn stream_chat(&self, messages: Vec<Message>) -> ChunkStream {
        let body = self.build_request_body(&messages);
        let request = self
            .http
            .post(self.api_url())
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&body);
        let model = self.config.model.clone();

        let response = async move {
            debug!(model = %model, "Groq API streaming request");
            let response = request.send().await.map_err(map_transport_error)?;
            check_status(response).await
        };

        stream::once(response)
            .map_ok(|response| {
                response_events(response)
                    .try_take_while(|event| future::ready(Ok(event.data != DONE_SENTINEL)))
                    .and_then(|event| future::ready(parse_stream_payload(&event.data)))
                    .inspect_ok(|chunk| {
                        if let Some(usage) = &chunk.usage {
                            debug!(
                                input = usage.input_tokens,
                                output = usage.output_tokens,
                                total = usage.total_tokens(),
                                "Groq API usage"
                            );
                        }
                    })
            })
            .try_flatten()
            .boxed()
    }
}

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        warn!("Groq API rate limit hit");
        return Err(AiError::RateLimited);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let text = text.chars().take(200).collect::<String>();
        warn!(%status, "Groq API request rejected");
        return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
    }
    Ok(response)
}
