//! Storefront session state.
//!
//! The whole UI is a single-threaded, event-driven reduction: user
//! actions become [`SessionEvent`]s applied synchronously to one
//! [`Session`]. The only asynchronous operation in the system is the
//! simulated payment.

mod connectivity;
mod state;
mod voice;

pub use connectivity::{ConnectivityMonitor, CONNECTIVITY_INTERVAL, OFFLINE_PROBABILITY};
pub use state::{Overlay, Session, SessionEvent, StoreTab};
pub use voice::{
    Utterance, VoiceDraftLine, VoiceOrder, VoiceSession, VOICE_PROGRESS_STEP, VOICE_TICK,
};
