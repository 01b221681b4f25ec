use log::{debug, trace, warn};

use crate::{
    behaviour::NetworkObjects,
    engine::RpcEngine,
    queue::{MessageHeader, QueueFrameType, QueueItemType},
    rpc::marshaller::Invocation,
    transport::{NetworkStatus, Transport},
    types::{BehaviourId, NetworkUpdateStage, PeerId},
};

impl RpcEngine {
    /// Runs every call queued for `stage`, in the order they were received.
    /// A call that fails is dropped and logged, the rest still run. Returns
    /// the number of items drained.
    pub fn process_receive_queue(
        &mut self,
        stage: NetworkUpdateStage,
        objects: &mut dyn NetworkObjects,
        status: &dyn NetworkStatus,
    ) -> usize {
        let Some(frame) = self.queue.begin_drain(QueueFrameType::Inbound, stage) else {
            return 0;
        };
        let drained = frame.len();

        let invocation = Invocation {
            registry: &self.registry,
            guard: &self.guard,
            config: &self.config,
            status,
        };

        for item in frame {
            let Some(kind) = item.call_kind() else {
                warn!(
                    "Dropping {:?} for object {} found in the inbound call queue",
                    item.item_type, item.target.object_id
                );
                self.stats.rpcs_dropped += 1;
                continue;
            };

            if self.config.log_invocations {
                debug!(
                    "Invoking {:?} {:?} on {:?} from peer {} in stage {:?}",
                    kind, item.method_id, item.target, item.sender, stage
                );
            }

            match invocation.invoke(&mut self.queue, objects, kind, &item) {
                Ok(()) => self.stats.rpcs_processed += 1,
                Err(error) => {
                    warn!(
                        "Dropped {:?} on {:?} from peer {}: {}",
                        kind, item.target, item.sender, error
                    );
                    self.stats.rpcs_dropped += 1;
                }
            }
        }

        self.queue
            .advance_frame_history(QueueFrameType::Inbound, stage);
        drained
    }

    /// Flushes internal messages, then the outbound call frame in the order
    /// the calls were made. Returns the number of call items flushed.
    pub fn process_send_queue(
        &mut self,
        transport: &mut dyn Transport,
        status: &dyn NetworkStatus,
    ) -> usize {
        let local_peer = status.local_peer_id();
        self.send_internal_messages(transport, local_peer);

        if self.queue.is_loopback() {
            let moved = self.queue.loopback_send_frame(local_peer);
            self.stats.rpcs_sent += moved as u64;
            return moved;
        }

        let Some(frame) = self.queue.begin_send_drain() else {
            return 0;
        };
        let flushed = frame.len();

        for item in frame {
            let recipients = match item.item_type {
                QueueItemType::ServerRpc => &item.recipients[..item.recipients.len().min(1)],
                _ => &item.recipients[..],
            };
            let header =
                MessageHeader::new(item.item_type.message_type(), item.stage.to_u8(), item.target);
            let packet = header.encode(&item.payload);

            for &peer in recipients {
                if peer == local_peer {
                    let mut local_item = item.clone();
                    local_item.sender = local_peer;
                    local_item.recipients.clear();
                    self.queue.enqueue(QueueFrameType::Inbound, local_item);
                    self.stats.local_deliveries += 1;
                    continue;
                }

                if item.reliable {
                    transport.send(peer, &packet, &item.channel);
                } else {
                    transport.send_unreliable(peer, &packet, &item.channel);
                }
                self.stats.rpcs_sent += 1;
                self.stats.bytes_sent += packet.len() as u64;
            }
        }

        self.queue
            .advance_frame_history(QueueFrameType::Outbound, NetworkUpdateStage::PostLateUpdate);
        flushed
    }

    fn send_internal_messages(&mut self, transport: &mut dyn Transport, local_peer: PeerId) {
        for message in self.queue.take_internal_messages() {
            let header = MessageHeader::new(
                message.item_type.message_type(),
                0,
                BehaviourId::new(message.object_id, 0),
            );
            let packet = header.encode(&message.payload);
            let channel = if message.channel.is_empty() {
                self.config.default_channel.as_str()
            } else {
                message.channel.as_str()
            };

            for &peer in &message.recipients {
                if peer == local_peer {
                    trace!(
                        "Skipping {:?} for object {} addressed to the local peer",
                        message.item_type,
                        message.object_id
                    );
                    continue;
                }
                transport.send(peer, &packet, channel);
                self.stats.internal_sent += 1;
                self.stats.bytes_sent += packet.len() as u64;
            }
        }
    }

    /// Runs the network work of one update stage: invokes the calls queued
    /// for it and, after the last stage of the tick, flushes outbound queues.
    /// Once the tick is over, calls made through `context` target the
    /// default stage again.
    pub fn network_update(
        &mut self,
        stage: NetworkUpdateStage,
        objects: &mut dyn NetworkObjects,
        status: &dyn NetworkStatus,
        transport: &mut dyn Transport,
    ) {
        self.current_stage = stage;
        self.process_receive_queue(stage, objects, status);
        if stage == NetworkUpdateStage::PostLateUpdate {
            self.process_send_queue(transport, status);
            self.current_stage = NetworkUpdateStage::default();
        }
    }

    /// Runs every stage of one tick in order
    pub fn tick(
        &mut self,
        objects: &mut dyn NetworkObjects,
        status: &dyn NetworkStatus,
        transport: &mut dyn Transport,
    ) {
        for stage in NetworkUpdateStage::ALL {
            self.network_update(stage, objects, status, transport);
        }
    }
}
