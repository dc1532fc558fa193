// Network adapter: WebSocket client pumping decoded events into the
// simulation loop and outbound messages back to the server.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{Notify, mpsc};
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, warn};

use crate::interface_adapters::protocol::{ClientMessage, ServerMessage};
use crate::use_cases::types::{NetEvent, Outbound};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;

#[derive(Debug)]
pub enum NetError {
    // Categorizes connection lifecycle failures so callers can decide policy.
    Ws(tungstenite::Error),
    Serialization(serde_json::Error),
    EventsClosed,
}

impl From<tungstenite::Error> for NetError {
    fn from(e: tungstenite::Error) -> Self {
        NetError::Ws(e)
    }
}

enum LoopControl {
    Continue,
    Disconnect,
}

const LOG_THROTTLE: Duration = Duration::from_secs(2);
const MAX_INVALID_JSON: u32 = 10;

fn should_log(last: &mut Instant) -> bool {
    if last.elapsed() >= LOG_THROTTLE {
        *last = Instant::now();
        true
    } else {
        false
    }
}

/// Connects to the game socket, performs the ready handshake, then pumps
/// messages both ways until the socket closes or shutdown is notified.
///
/// Delivery guarantees belong to the transport; there is no retry here.
pub async fn net_task(
    url: String,
    session_id: String,
    net_tx: mpsc::Sender<NetEvent>,
    mut out_rx: mpsc::Receiver<Outbound>,
    shutdown: Arc<Notify>,
) -> Result<(), NetError> {
    let (ws, _response) = connect_async(url.as_str()).await?;
    info!(%url, "connected");

    let (mut sink, mut stream) = ws.split();

    // Announce intent to join before anything else.
    send_message(&mut sink, &ClientMessage::Ready { session_id }).await?;

    let mut invalid_json: u32 = 0;
    let mut last_invalid_log = Instant::now() - LOG_THROTTLE;
    let mut close_frame: Option<CloseFrame> = None;
    let mut result = Ok(());

    loop {
        let disconnect = tokio::select! {
            _ = shutdown.notified() => {
                info!("shutdown requested; closing socket");
                true
            }

            incoming = stream.next() => {
                match handle_incoming(
                    incoming,
                    &net_tx,
                    &mut invalid_json,
                    &mut last_invalid_log,
                    &mut close_frame,
                ).await {
                    Ok(LoopControl::Continue) => false,
                    Ok(LoopControl::Disconnect) => true,
                    Err(e) => {
                        result = Err(e);
                        true
                    }
                }
            }

            out = out_rx.recv() => {
                match out {
                    Some(msg) => match send_message(&mut sink, &ClientMessage::from(msg)).await {
                        Ok(()) => false,
                        Err(e) => {
                            warn!(error = ?e, "failed to send outbound message");
                            result = Err(e);
                            true
                        }
                    },
                    None => {
                        // Session loop is gone; nothing left to send.
                        debug!("outbound channel closed");
                        true
                    }
                }
            }
        };

        if disconnect {
            let _ = sink.send(Message::Close(close_frame.take())).await;
            break;
        }
    }

    info!("disconnected");
    result
}

async fn send_message(sink: &mut WsSink, msg: &ClientMessage) -> Result<(), NetError> {
    // Serialize safely; surface JSON errors instead of panicking.
    let txt = serde_json::to_string(msg).map_err(NetError::Serialization)?;
    sink.send(Message::Text(txt.into())).await?;
    Ok(())
}

async fn handle_incoming(
    incoming: Option<Result<Message, tungstenite::Error>>,
    net_tx: &mpsc::Sender<NetEvent>,
    invalid_json: &mut u32,
    last_invalid_log: &mut Instant,
    close_frame: &mut Option<CloseFrame>,
) -> Result<LoopControl, NetError> {
    match incoming {
        Some(Ok(Message::Text(text))) => {
            match serde_json::from_str::<ServerMessage>(text.as_str()) {
                Ok(msg) => {
                    *invalid_json = 0;
                    net_tx
                        .send(NetEvent::from(msg))
                        .await
                        .map_err(|_| NetError::EventsClosed)?;
                    Ok(LoopControl::Continue)
                }
                Err(parse_err) => {
                    // A corrupt message must never halt the frame loop: skip
                    // it and keep prior state.
                    *invalid_json += 1;
                    if should_log(last_invalid_log) {
                        warn!(
                            bytes = text.len(),
                            error = %parse_err,
                            "failed to parse server message"
                        );
                    }

                    if *invalid_json > MAX_INVALID_JSON {
                        *close_frame = Some(CloseFrame {
                            code: CloseCode::Policy,
                            reason: "too many invalid messages".into(),
                        });
                        return Ok(LoopControl::Disconnect);
                    }

                    Ok(LoopControl::Continue)
                }
            }
        }
        Some(Ok(Message::Binary(_))) => {
            *close_frame = Some(CloseFrame {
                code: CloseCode::Unsupported,
                reason: "binary messages not supported".into(),
            });
            Ok(LoopControl::Disconnect)
        }
        Some(Ok(Message::Close(_))) => Ok(LoopControl::Disconnect),
        Some(Ok(_)) => Ok(LoopControl::Continue),
        Some(Err(e)) => {
            warn!(error = %e, "websocket recv error");
            Ok(LoopControl::Disconnect)
        }
        None => {
            info!("websocket closed by server");
            Ok(LoopControl::Disconnect)
        }
    }
}
