/// Handles argument parsing and workflow orchestration.
pub mod cli;

/// Constants used throughout the application.
pub mod constants;

/// Interactive confirmation prompts.
pub mod dialoguer;

/// Defines custom error types.
pub mod error;

/// Builds the set of path patterns excluded from processing.
pub mod ignore;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// An abstraction that allows implementing a source for extension templates.
pub mod loader;

/// Core name-rewriting engine.
pub mod rename;

/// External build steps: dependency install and packaging.
pub mod steps;

/// Project-name validators.
pub mod validation;
