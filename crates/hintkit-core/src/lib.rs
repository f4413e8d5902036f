//! Core types and logic for hintkit.
//!
//! This crate implements keyboard hint mode for a browser page: every
//! visible interactive element gets a short label, typing a label activates
//! the element. It is written against the [`dom::Dom`] trait so the same
//! logic drives a real engine binding or the in-memory page model.
//!
//! # Modules
//!
//! - [`label`]: Ordinal to label codec over a ten-letter alphabet
//! - [`scan`]: Element discovery across the frame tree
//! - [`overlay`]: Badge creation, progress display and teardown
//! - [`matcher`]: Typed-sequence automaton and badge filtering
//! - [`activate`]: Focus/click dispatch on a selected element
//! - [`session`]: Install/uninstall lifecycle and the restore slot
//! - [`input`]: Key names and their hint-mode actions
//! - [`report`]: JSON reports for the CLI
//! - [`config`]: Alphabet, hint cap and badge style
//! - [`error`]: API error types with actionable suggestions
//! - [`dom`]: The page abstraction and its in-memory implementation
//!
//! # Element Categories
//!
//! | Category | Elements | Action | Signal |
//! |----------|----------|--------|--------|
//! | **EditableControl** | `textarea`, `select`, non-button `input` | focus | `mode::insert` |
//! | **Frame** | `frame`, `iframe` | focus | `mode::normal` |
//! | **Clickable** | everything else | click | `mode::normal` |
//!
//! Labels are allocated in discovery order: ordinal 1 is the alphabet's
//! second letter and ordinal 10 is the first two-letter label.

pub mod activate;
pub mod config;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod input;
pub mod label;
pub mod matcher;
pub mod mode;
pub mod overlay;
pub mod report;
pub mod scan;
pub mod session;
