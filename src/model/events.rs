use std::sync::mpsc::{self, Receiver, Sender};

/// Change notification emitted by [`ResultListModel`](super::ResultListModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
	/// The active query text changed.
	QueryChanged,
	/// `row_count()` changed.
	CountChanged,
	/// The allowed runner set changed.
	RunnersChanged,
	/// The debounced busy flag flipped.
	RunningChanged(bool),
	/// Rows `first..=last` were appended; existing rows are unchanged.
	RowsInserted { first: usize, last: usize },
	/// Every row may have changed; re-read the whole list.
	Reset,
}

#[derive(Debug, Default)]
pub(crate) struct Subscribers {
	senders: Vec<Sender<ModelEvent>>,
}

impl Subscribers {
	pub(crate) fn subscribe(&mut self) -> Receiver<ModelEvent> {
		let (tx, rx) = mpsc::channel();
		self.senders.push(tx);
		rx
	}

	pub(crate) fn emit(&mut self, event: ModelEvent) {
		self.senders.retain(|tx| tx.send(event).is_ok());
	}

	#[cfg(test)]
	pub(crate) fn len(&self) -> usize {
		self.senders.len()
	}
}
