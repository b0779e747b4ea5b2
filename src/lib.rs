//! Library exports for frameinput.
//!
//! The input tracker, the backend contract it polls, configuration and the
//! replay runner are all public so that hosts embedding the tracker and the
//! `frameinput` binary share one implementation.

pub mod backend;
pub mod config;
pub mod error;
pub mod input;
pub mod replay;

pub use backend::{BackendStatus, WindowBackend};
pub use config::Config;
pub use error::InputError;
pub use input::{EdgeState, InputFacade, Key, MouseButton};
