//! Unit tests for the login form handler

mod attach_tests;
