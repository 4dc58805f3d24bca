//! Integration tests for nodeboard.
//!
//! These tests drive a workspace with pointer and key events and check the
//! resulting diagram end-to-end.

mod connect_flow_tests;
mod delete_cascade_tests;
mod drag_tests;
mod session_tests;
