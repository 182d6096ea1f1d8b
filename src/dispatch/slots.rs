use std::sync::{Arc, OnceLock};

use crate::error::DispatchError;
use crate::metrics::RequestRecord;

type Slots = Arc<Vec<OnceLock<RequestRecord>>>;

/// Arena holding one record per request index.
///
/// Writers are handed out in index order and each index is handed out at
/// most once, so every slot has a single writer.
pub(super) struct RecordSlots {
    slots: Slots,
    next_index: usize,
}

impl RecordSlots {
    pub(super) fn new(len: usize) -> Self {
        Self {
            slots: Arc::new((0..len).map(|_| OnceLock::new()).collect()),
            next_index: 0,
        }
    }

    /// Writers for the next `count` unassigned indices.
    pub(super) fn take_writers(&mut self, count: usize) -> Vec<SlotWriter> {
        let end = self.next_index.saturating_add(count).min(self.slots.len());
        let writers = (self.next_index..end)
            .map(|index| SlotWriter {
                slots: Arc::clone(&self.slots),
                index,
            })
            .collect();
        self.next_index = end;
        writers
    }

    /// Consumes the arena once every writer is gone.
    pub(super) fn into_records(self) -> Result<Vec<RequestRecord>, DispatchError> {
        let slots =
            Arc::try_unwrap(self.slots).map_err(|_shared| DispatchError::SlotsStillShared)?;
        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.into_inner()
                    .ok_or(DispatchError::MissingRecord { index })
            })
            .collect()
    }
}

/// Exclusive, single-use write access to one slot.
pub(super) struct SlotWriter {
    slots: Slots,
    index: usize,
}

impl SlotWriter {
    pub(super) const fn index(&self) -> usize {
        self.index
    }

    pub(super) fn write(self, record: RequestRecord) {
        if let Some(slot) = self.slots.get(self.index)
            && slot.set(record).is_err()
        {
            tracing::error!("Record slot {} was written twice.", self.index);
        }
    }
}
