//! Unit tests for the task board store and services.
