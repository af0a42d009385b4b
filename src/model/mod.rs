//! Live result list: debounced queries, session supersession, streamed
//! batches and a settle-debounced busy flag.

mod clock;
mod events;
mod list_model;
mod query_timer;
mod result_store;
mod role;
mod running_status;
mod session;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::ModelEvent;
pub use list_model::{ResultListModel, Timing};
pub use query_timer::{QueryTimer, Scheduled};
pub use result_store::{ResultStore, StoreChange};
pub use role::{Role, RoleValue};
pub use running_status::RunningStatusTracker;
pub use session::{BackendSession, SessionUpdate};
