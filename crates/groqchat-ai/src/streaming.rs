//! Server-Sent Events (SSE) streaming parser.
//!
//! The Groq chat-completions endpoint streams `data:` events terminated by
//! blank lines. This module turns any buffered async reader into a
//! cooperative `Stream` of events, so callers pull one event at a time and
//! see end-of-stream and read faults explicitly.

use futures_util::{stream, Stream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when the server sends an `event:` field.
    pub event: Option<String>,
    /// The event data (JSON string, or the `[DONE]` sentinel).
    pub data: String,
}

struct SseParser<R> {
    lines: Lines<R>,
    event: Option<String>,
    data: String,
}

impl<R: AsyncBufRead + Unpin> SseParser<R> {
    async fn next_event(&mut self) -> Result<Option<SseEvent>, AiError> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .map_err(read_error)?
        {
            if line.is_empty() {
                // Empty line = end of event
                if !self.data.is_empty() {
                    return Ok(Some(self.take_event()));
                }
                self.event = None;
                continue;
            }

            if let Some(event_type) = line.strip_prefix("event:") {
                self.event = Some(event_type.trim_start().to_string());
            } else if let Some(data) = line.strip_prefix("data:") {
                let data = data.strip_prefix(' ').unwrap_or(data);
                if !self.data.is_empty() {
                    self.data.push('\n');
                }
                self.data.push_str(data);
            }
            // Ignore other fields (id:, retry:, comments)
        }

        // Flush any remaining event
        if self.data.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.take_event()))
        }
    }

    fn take_event(&mut self) -> SseEvent {
        SseEvent {
            event: self.event.take(),
            data: std::mem::take(&mut self.data),
        }
    }
}

fn read_error(e: std::io::Error) -> AiError {
    if e.kind() == std::io::ErrorKind::TimedOut {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

/// Parse SSE events from a buffered reader.
///
/// The stream ends after the last event. A read failure is yielded once and
/// ends the stream: `AiError::Timeout` for a timed-out read, otherwise
/// `AiError::NetworkError`.
pub fn sse_events<R>(reader: R) -> impl Stream<Item = Result<SseEvent, AiError>> + Send
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let parser = SseParser {
        lines: reader.lines(),
        event: None,
        data: String::new(),
    };

    stream::unfold(Some(parser), |state| async move {
        let mut parser = state?;
        match parser.next_event().await {
            Ok(Some(event)) => Some((Ok(event), Some(parser))),
            Ok(None) => None,
            Err(e) => Some((Err(e), None)),
        }
    })
}

/// Parse SSE events from a reqwest response body.
pub fn response_events(
    response: reqwest::Response,
) -> impl Stream<Item = Result<SseEvent, AiError>> + Send {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(body_error))
        .boxed();
    sse_events(StreamReader::new(byte_stream))
}

fn body_error(e: reqwest::Error) -> std::io::Error {
    if e.is_timeout() {
        std::io::Error::new(std::io::ErrorKind::TimedOut, e)
    } else {
        std::io::Error::other(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    async fn parse(body: &str) -> Vec<SseEvent> {
        sse_events(Cursor::new(body.to_string()))
            .map(|event| event.unwrap())
            .collect()
            .await
    }

    #[tokio::test]
    async fn splits_events_on_blank_lines() {
        let events = parse("data: {\"a\":1}\n\ndata: {\"a\":2}\n\ndata: [DONE]\n\n").await;
        let data: Vec<_> = events.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(data, ["{\"a\":1}", "{\"a\":2}", "[DONE]"]);
        assert!(events.iter().all(|e| e.event.is_none()));
    }

    #[tokio::test]
    async fn joins_multiline_data_and_keeps_event_type() {
        let events = parse("event: error\ndata: line one\ndata: line two\n\n").await;
        assert_eq!(
            events,
            vec![SseEvent {
                event: Some("error".into()),
                data: "line one\nline two".into(),
            }]
        );
    }

    #[tokio::test]
    async fn ignores_comments_ids_and_crlf() {
        let events = parse(": keep-alive\r\nid: 7\r\nretry: 100\r\ndata: x\r\n\r\n").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "x");
    }

    #[tokio::test]
    async fn flushes_trailing_event_without_blank_line() {
        let events = parse("data: first\n\ndata: tail").await;
        let data: Vec<_> = events.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(data, ["first", "tail"]);
    }

    #[tokio::test]
    async fn empty_body_yields_nothing() {
        assert!(parse("").await.is_empty());
        assert!(parse("\n\n\n").await.is_empty());
    }

    #[tokio::test]
    async fn timed_out_read_ends_with_timeout() {
        let body = stream::iter(vec![
            Ok::<&[u8], std::io::Error>(b"data: first\n\n"),
            Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "idle")),
        ]);
        let events: Vec<_> = sse_events(StreamReader::new(body)).collect().await;

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].as_ref().unwrap().data, "first");
        assert!(matches!(events[1], Err(AiError::Timeout)));
    }

    #[tokio::test]
    async fn other_read_failures_are_network_errors() {
        let body = stream::iter(vec![Err::<&[u8], _>(std::io::Error::other("reset"))]);
        let events: Vec<_> = sse_events(StreamReader::new(body)).collect().await;
        assert!(matches!(events.as_slice(), [Err(AiError::NetworkError(_))]));
    }

    #[tokio::test]
    async fn event_type_without_data_is_dropped() {
        let events = parse("event: ping\n\ndata: real\n\n").await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, None);
        assert_eq!(events[0].data, "real");
    }
}
