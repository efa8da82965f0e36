use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use tracing::debug;

const ECHO_PREFIX: &str = "Echo: ";

/// Experimental real-time channel: unauthenticated, text frames only,
/// every message bounced straight back to the sender.
pub async fn echo_upgrade(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(echo_session)
}

async fn echo_session(mut socket: WebSocket) {
    while let Some(message) = socket.recv().await {
        let Ok(message) = message else { break };

        if let Message::Text(text) = message {
            debug!("Echoing message of {} bytes", text.len());
            if socket.send(Message::Text(echo_reply(&text).into())).await.is_err() {
                break;
            }
        }
    }
}

fn echo_reply(text: &str) -> String {
    format!("{}{}", ECHO_PREFIX, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_prefixed() {
        assert_eq!(echo_reply("hello"), "Echo: hello");
        assert_eq!(echo_reply(""), "Echo: ");
    }
}
