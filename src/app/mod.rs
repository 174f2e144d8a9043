//! Core application logic: state management, event handling, and command dispatch.

pub mod action;
pub mod command;
pub mod event;
pub mod handler;
pub mod state;
