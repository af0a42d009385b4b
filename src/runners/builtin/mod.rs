mod entries;

pub use entries::{Entry, EntriesRunner};
