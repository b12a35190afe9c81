//! FIFO queue for light propagation entries.
//!
//! Uses a simple ring buffer implementation similar to vanilla Minecraft for optimal performance.

use super::queue_entry::QueueEntry;

/// A FIFO queue for light propagation using a ring buffer.
///
/// Entries come out in exactly the order they went in, which keeps the flood-fill
/// deterministic. The buffer always has a power-of-two length so wrapping is a mask.
#[derive(Debug)]
pub struct LightQueue {
    buffer: Box<[QueueEntry]>,
    head: usize,
    tail: usize,
    size: usize,
}

impl LightQueue {
    /// Creates a new empty light queue sized for one section.
    ///
    /// Pre-allocates space for 4096 entries, one per voxel, which covers a typical
    /// flood-fill without growing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Creates a new light queue with the specified capacity, rounded up to a power of two.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(16).next_power_of_two();
        Self {
            buffer: vec![QueueEntry::default(); capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buffer.len() - 1
    }

    /// Enqueues an entry for processing.
    #[inline]
    pub fn enqueue(&mut self, entry: QueueEntry) {
        if self.size == self.buffer.len() {
            self.grow();
        }

        self.buffer[self.tail] = entry;
        self.tail = (self.tail + 1) & self.mask();
        self.size += 1;
    }

    /// Dequeues the next entry.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<QueueEntry> {
        if self.size == 0 {
            return None;
        }

        let item = self.buffer[self.head];
        self.head = (self.head + 1) & self.mask();
        self.size -= 1;

        Some(item)
    }

    /// Checks if the queue is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of entries in the queue.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Doubles the buffer when capacity is reached, unwrapping entries into order.
    fn grow(&mut self) {
        let old_capacity = self.buffer.len();
        let mut new_buffer = vec![QueueEntry::default(); old_capacity * 2].into_boxed_slice();

        for slot in new_buffer.iter_mut().take(self.size) {
            *slot = self.buffer[self.head];
            self.head = (self.head + 1) & (old_capacity - 1);
        }

        self.buffer = new_buffer;
        self.head = 0;
        self.tail = self.size;
    }
}

impl Default for LightQueue {
    fn default() -> Self {
        Self::new()
    }
}
