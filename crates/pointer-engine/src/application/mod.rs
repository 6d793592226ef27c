//! Application layer for the pointer engine.
//!
//! - **`ports`** – The three collaborators the engine is built on: the
//!   surface binding (raw pointer/button/scroll/text I/O), the path/timing
//!   provider, and the cancellable sleeper.  Implementations live in the
//!   infrastructure layer and are injected at construction time.
//!
//! - **`control`** – Speed and blocking state shared between the engine and
//!   any other automation task that wants to adjust it mid-move.
//!
//! - **`input_engine`** – The movement/interaction engine itself.

pub mod control;
pub mod input_engine;
pub mod ports;
