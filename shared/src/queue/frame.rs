use crate::{
    queue::{QueueFrameType, QueueItem},
    types::NetworkUpdateStage,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameState {
    #[default]
    Empty,
    /// Accepting new items
    Filling,
    /// Closed, its items handed out to a drain pass that hasn't finished yet
    Draining,
}

/// An ordered batch of queue items collected during one tick
#[derive(Debug, Default)]
pub struct Frame {
    number: u64,
    state: FrameState,
    items: Vec<QueueItem>,
}

impl Frame {
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    pub(crate) fn push(&mut self, number: u64, item: QueueItem) {
        if self.state == FrameState::Empty {
            self.number = number;
            self.state = FrameState::Filling;
        }
        self.items.push(item);
    }

    pub(crate) fn close(&mut self) -> Vec<QueueItem> {
        self.state = FrameState::Draining;
        std::mem::take(&mut self.items)
    }

    /// Ends a drain. Items that arrived while the frame was closed stay, and
    /// the frame goes back to filling.
    pub(crate) fn finish(&mut self) {
        self.state = if self.items.is_empty() {
            FrameState::Empty
        } else {
            FrameState::Filling
        };
    }
}

/// The items of one closed frame, handed out by value. Each item can be taken
/// exactly once.
#[derive(Debug)]
pub struct DrainedFrame {
    pub frame_type: QueueFrameType,
    pub stage: NetworkUpdateStage,
    pub number: u64,
    pub items: Vec<QueueItem>,
}

impl DrainedFrame {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for DrainedFrame {
    type Item = QueueItem;
    type IntoIter = std::vec::IntoIter<QueueItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
