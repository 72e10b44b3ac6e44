//! HTTP integration tests over the full in-memory stack.

mod helpers;

mod entry_test;
mod exit_test;
mod queue_test;
mod site_test;
