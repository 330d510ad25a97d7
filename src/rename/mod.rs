//! Name-rewriting engine for forked templates
//!
//! This module contains the core rename components:
//! - `rules`: the literal-to-derived-form table and project name forms
//! - `rewriter`: the ordered content-rewrite passes
//! - `walker`: file and directory enumeration
//! - `paths`: file and directory renaming
//! - `transformer`: phase orchestration over a cloned tree

pub mod paths;
pub mod rewriter;
pub mod rules;
pub mod transformer;
pub mod walker;
