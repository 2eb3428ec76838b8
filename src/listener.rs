//! Listener task: datagrams in, decoded packets out.
//!
//! The decoder itself never logs and never retries; this is where the
//! caller-side recovery policy lives. Recoverable failures (truncated or
//! unknown datagrams, transient socket errors) are logged and skipped; a
//! run of consecutive failures aborts the task rather than spinning.

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use crate::decode::{Packet, decode_packet};
use crate::source::PacketSource;

/// Packets buffered before the listener applies backpressure to the
/// socket.
const CHANNEL_CAPACITY: usize = 64;

/// Consecutive failures tolerated before the task gives up.
const MAX_CONSECUTIVE_ERRORS: u32 = 10;

/// Result of spawning the listener task.
pub struct ListenerChannels {
    /// Receiver for decoded packets.
    pub packets: mpsc::Receiver<Packet>,
    /// Cancellation token for graceful shutdown.
    pub cancel: CancellationToken,
}

impl ListenerChannels {
    /// Consume the receiver as a `Stream`, keeping the cancel token.
    pub fn into_stream(self) -> (impl Stream<Item = Packet> + Send + Unpin, CancellationToken) {
        (ReceiverStream::new(self.packets), self.cancel)
    }
}

/// Listener spawns and manages the receive-and-decode task.
pub struct Listener;

impl Listener {
    /// Spawn the receive task for the given source.
    pub fn spawn<S>(source: S) -> ListenerChannels
    where
        S: PacketSource,
    {
        let (packet_tx, packet_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        tokio::spawn(async move {
            Self::receive_task(source, packet_tx, task_cancel).await;
        });

        ListenerChannels { packets: packet_rx, cancel }
    }

    async fn receive_task<S>(
        mut source: S,
        packet_tx: mpsc::Sender<Packet>,
        cancel: CancellationToken,
    ) where
        S: PacketSource,
    {
        info!("telemetry listener started");
        let mut packet_count = 0u64;
        let mut consecutive_errors = 0u32;

        loop {
            let received = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("telemetry listener cancelled");
                    break;
                }
                received = source.next_datagram() => received,
            };

            let datagram = match received {
                Ok(Some(datagram)) => datagram,
                Ok(None) => {
                    info!("datagram source ended");
                    break;
                }
                Err(err) if err.is_recoverable() => {
                    consecutive_errors += 1;
                    warn!(error = %err, "receive failed, continuing");
                    if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                        error!("too many consecutive receive failures, stopping");
                        break;
                    }
                    continue;
                }
                Err(err) => {
                    error!(error = %err, "fatal receive failure");
                    break;
                }
            };

            match decode_packet(&datagram) {
                Ok(packet) => {
                    consecutive_errors = 0;
                    packet_count += 1;
                    trace!(
                        kind = ?packet.kind(),
                        frame = packet.header.frame_identifier,
                        "decoded packet {}",
                        packet_count
                    );
                    if packet_tx.send(packet).await.is_err() {
                        debug!("all packet receivers dropped, stopping");
                        break;
                    }
                }
                Err(err) if err.is_recoverable() => {
                    consecutive_errors += 1;
                    warn!(
                        error = %err,
                        len = datagram.len(),
                        "dropping undecodable datagram"
                    );
                    if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                        error!("too many consecutive undecodable datagrams, stopping");
                        break;
                    }
                }
                Err(err) => {
                    // MissingDiscriminant and friends: the schema table
                    // itself is wrong, fresh traffic cannot help.
                    error!(error = %err, "fatal decode failure");
                    break;
                }
            }
        }

        info!(packets = packet_count, "telemetry listener stopped");
    }
}
