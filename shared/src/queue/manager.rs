use std::collections::VecDeque;

use log::trace;
use rpcq_serde::{BitReader, Serde};

use crate::{
    config::RpcConfig,
    queue::{
        DrainedFrame, FrameHistory, FrameState, IncomingMessage, InternalMessage, MessageHeader,
        QueueError, QueueFrameType, QueueItem, QueueItemType,
    },
    rpc::MethodId,
    types::{NetworkUpdateStage, PeerId},
};

/// Owns the frame histories and the queue of internal lifecycle messages
/// waiting to be sent.
///
/// Inbound calls get one history per update stage, so each stage only runs
/// what was meant for it. Outbound calls share a single history whatever
/// stage they target: they leave in the order they were made, and the target
/// stage travels with each item.
pub struct RpcQueueManager {
    inbound: Vec<FrameHistory>,
    outbound: FrameHistory,
    internal: VecDeque<InternalMessage>,
    loopback: bool,
}

impl RpcQueueManager {
    pub fn new(config: &RpcConfig) -> Self {
        let depth = config.effective_history_depth();
        Self {
            inbound: NetworkUpdateStage::ALL
                .iter()
                .map(|_| FrameHistory::new(depth))
                .collect(),
            outbound: FrameHistory::new(depth),
            internal: VecDeque::new(),
            loopback: config.loopback,
        }
    }

    fn history(&self, direction: QueueFrameType, stage: NetworkUpdateStage) -> &FrameHistory {
        match direction {
            QueueFrameType::Inbound => &self.inbound[stage.index()],
            QueueFrameType::Outbound => &self.outbound,
        }
    }

    fn history_mut(
        &mut self,
        direction: QueueFrameType,
        stage: NetworkUpdateStage,
    ) -> &mut FrameHistory {
        match direction {
            QueueFrameType::Inbound => &mut self.inbound[stage.index()],
            QueueFrameType::Outbound => &mut self.outbound,
        }
    }

    /// Appends to the current inbound frame of `item.stage`, or to the
    /// current outbound frame
    pub fn enqueue(&mut self, direction: QueueFrameType, item: QueueItem) {
        let stage = item.stage;
        self.history_mut(direction, stage).push(item);
    }

    /// Closes the oldest undrained frame and hands out its items. `stage`
    /// picks the inbound history and is ignored for `Outbound`. `None` if
    /// nothing is queued there.
    pub fn begin_drain(
        &mut self,
        direction: QueueFrameType,
        stage: NetworkUpdateStage,
    ) -> Option<DrainedFrame> {
        let (number, items) = self.history_mut(direction, stage).begin_drain()?;
        Some(DrainedFrame {
            frame_type: direction,
            stage,
            number,
            items,
        })
    }

    /// Closes the outbound frame and hands out its items in send order
    pub fn begin_send_drain(&mut self) -> Option<DrainedFrame> {
        self.begin_drain(QueueFrameType::Outbound, NetworkUpdateStage::PostLateUpdate)
    }

    /// Finishes the drain started by `begin_drain`, emptying the drained
    /// frame and moving on to the next one
    pub fn advance_frame_history(&mut self, direction: QueueFrameType, stage: NetworkUpdateStage) {
        if !self.history_mut(direction, stage).advance() {
            trace!("Advanced {:?} {:?} history with nothing draining", direction, stage);
        }
    }

    /// Moves everything queued outbound into the inbound frame of the stage
    /// each item targets, as if it had been sent to and received by
    /// `local_peer`. Returns the number of items moved.
    pub fn loopback_send_frame(&mut self, local_peer: PeerId) -> usize {
        let Some(frame) = self.begin_send_drain() else {
            return 0;
        };
        let moved = frame.len();
        for mut item in frame {
            item.sender = local_peer;
            item.recipients.clear();
            self.enqueue(QueueFrameType::Inbound, item);
        }
        self.advance_frame_history(QueueFrameType::Outbound, NetworkUpdateStage::PostLateUpdate);
        moved
    }

    /// Turns a packet received from `sender` into either an inbound queue item
    /// or an internal message for the caller to handle
    pub fn receive_packet(
        &mut self,
        sender: PeerId,
        bytes: &[u8],
    ) -> Result<IncomingMessage, QueueError> {
        let (header, payload) =
            MessageHeader::decode(bytes).map_err(|_| QueueError::TruncatedHeader {
                length: bytes.len(),
                expected: MessageHeader::BYTES,
            })?;

        let item_type = QueueItemType::from_message_type(header.message_type).ok_or(
            QueueError::UnknownMessageType {
                message_type: header.message_type,
            },
        )?;

        if item_type.call_kind().is_none() {
            return Ok(IncomingMessage::Internal {
                sender,
                message: InternalMessage {
                    item_type,
                    object_id: header.object_id,
                    recipients: Vec::new(),
                    channel: String::new(),
                    payload: payload.to_vec(),
                },
            });
        }

        let stage = NetworkUpdateStage::from_u8(header.stage)
            .ok_or(QueueError::UnknownUpdateStage {
                stage: header.stage,
            })?;
        let method_id = MethodId::de(&mut BitReader::new(payload)).ok();
        let target = header.target();

        self.enqueue(
            QueueFrameType::Inbound,
            QueueItem {
                item_type,
                target,
                method_id,
                sender,
                recipients: Vec::new(),
                channel: String::new(),
                reliable: true,
                stage,
                payload: payload.to_vec(),
            },
        );

        Ok(IncomingMessage::Rpc { target, stage })
    }

    pub fn queue_internal_command(&mut self, message: InternalMessage) {
        self.internal.push_back(message);
    }

    /// Takes every internal message queued so far, oldest first
    pub fn take_internal_messages(&mut self) -> Vec<InternalMessage> {
        self.internal.drain(..).collect()
    }

    pub fn pending_internal(&self) -> usize {
        self.internal.len()
    }

    /// Items queued and not yet handed to a drain: inbound items targeting
    /// `stage`, or outbound items targeting `stage`
    pub fn pending(&self, direction: QueueFrameType, stage: NetworkUpdateStage) -> usize {
        match direction {
            QueueFrameType::Inbound => self.inbound[stage.index()].pending(),
            QueueFrameType::Outbound => self.outbound.pending_where(|item| item.stage == stage),
        }
    }

    pub fn pending_total(&self, direction: QueueFrameType) -> usize {
        match direction {
            QueueFrameType::Inbound => self.inbound.iter().map(FrameHistory::pending).sum(),
            QueueFrameType::Outbound => self.outbound.pending(),
        }
    }

    /// State of the oldest frame that hasn't finished draining. `stage` is
    /// ignored for `Outbound`.
    pub fn frame_state(&self, direction: QueueFrameType, stage: NetworkUpdateStage) -> FrameState {
        self.history(direction, stage).state()
    }

    pub fn is_loopback(&self) -> bool {
        self.loopback
    }

    pub fn set_loopback(&mut self, loopback: bool) {
        self.loopback = loopback;
    }

    pub fn clear(&mut self) {
        for stage in NetworkUpdateStage::ALL {
            while self.begin_drain(QueueFrameType::Inbound, stage).is_some() {
                self.advance_frame_history(QueueFrameType::Inbound, stage);
            }
        }
        while self.begin_send_drain().is_some() {
            self.advance_frame_history(QueueFrameType::Outbound, NetworkUpdateStage::PostLateUpdate);
        }
        self.internal.clear();
    }
}
