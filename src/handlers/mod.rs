//! HTTP handlers for users and todos: call one service operation and shape the envelope.

pub mod todos;
pub mod users;
