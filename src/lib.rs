//! Taskboard: kanban board state model.
//!
//! Users create boards; each board holds an ordered list of columns and each
//! column an ordered list of tasks carrying tags and a completion flag. The
//! crate provides the board state model and its mutation and reordering
//! semantics, a persistence port with in-memory and filesystem adapters, and
//! a session service that a UI layer drives in response to user gestures.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and identifiers
//! - **Adapters**: Concrete implementations of ports (memory, filesystem)
//!
//! # Modules
//!
//! - [`board`]: Boards, columns, tasks, tags and their persistence

pub mod board;
