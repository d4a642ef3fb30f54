//! Application orchestration — state management, event loop plumbing, input
//! handling and on-disk preferences.

pub mod event;
pub mod handler;
pub mod prefs;
pub mod state;
