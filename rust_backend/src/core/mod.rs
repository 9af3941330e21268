//! Core domain models for Gantt schedule data.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: schedule rows, the domain hierarchy levels, and date windows.

pub mod domain;
