//! Terminal blocker (workspace facade crate).
//!
//! This package keeps a stable `tui_blocker::{core,input,term,types,video}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`. The one piece that lives here is [`session`], the headless
//! tick driver shared by the replay binary and the integration tests.

pub use tui_blocker_core as core;
pub use tui_blocker_input as input;
pub use tui_blocker_term as term;
pub use tui_blocker_types as types;
pub use tui_blocker_video as video;

pub mod session;

pub use session::Session;
