//! Session credential persistence and the session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` holds the opaque bearer token in its cookie; `controller` owns the
//! unknown → authenticated/unauthenticated transitions and the error slot.

pub mod controller;
pub mod store;
