use log::{trace, warn};

use crate::queue::{Frame, FrameState, QueueItem};

/// A fixed ring of frames for one (direction, stage) pair.
///
/// The write cursor is the frame new items land in, the read cursor the
/// oldest frame not yet drained. At most one frame is `Filling` at a time.
pub struct FrameHistory {
    frames: Vec<Frame>,
    write: usize,
    read: usize,
    next_number: u64,
}

impl FrameHistory {
    pub fn new(depth: usize) -> Self {
        let mut frames = Vec::with_capacity(depth);
        frames.resize_with(depth, Frame::default);
        Self {
            frames,
            write: 0,
            read: 0,
            next_number: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, item: QueueItem) {
        let frame = &mut self.frames[self.write];
        if frame.state() == FrameState::Empty {
            self.next_number += 1;
        }
        frame.push(self.next_number, item);
    }

    /// Closes the frame at the read cursor and takes its items. Moves the
    /// write cursor on so anything queued during the drain lands in the next
    /// frame.
    pub fn begin_drain(&mut self) -> Option<(u64, Vec<QueueItem>)> {
        let frame = &mut self.frames[self.read];
        match frame.state() {
            FrameState::Empty => return None,
            FrameState::Draining => {
                trace!(
                    "Frame {} is still draining, finish it before draining again",
                    frame.number()
                );
                return None;
            }
            FrameState::Filling => {}
        }

        let number = frame.number();
        let items = frame.close();

        let next = (self.write + 1) % self.frames.len();
        if self.frames[next].state() == FrameState::Empty {
            self.write = next;
        } else {
            warn!(
                "Frame history saturated at depth {}, new items join frame {}",
                self.frames.len(),
                number
            );
        }

        Some((number, items))
    }

    /// Ends the drain started by `begin_drain` and moves the read cursor on.
    /// Returns false if nothing was draining.
    pub fn advance(&mut self) -> bool {
        let frame = &mut self.frames[self.read];
        if frame.state() != FrameState::Draining {
            trace!("No frame draining, nothing to advance");
            return false;
        }
        frame.finish();
        if frame.state() == FrameState::Empty {
            self.read = (self.read + 1) % self.frames.len();
        }
        true
    }

    /// State of the oldest frame not yet drained
    pub fn state(&self) -> FrameState {
        self.frames[self.read].state()
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.write]
    }

    /// Items queued and not yet handed to a drain
    pub fn pending(&self) -> usize {
        self.frames.iter().map(Frame::len).sum()
    }

    /// Like `pending`, counting only items matching `filter`
    pub fn pending_where(&self, filter: impl Fn(&QueueItem) -> bool) -> usize {
        self.frames
            .iter()
            .flat_map(Frame::items)
            .filter(|item| filter(item))
            .count()
    }
}
