//! High-level estimation pipeline.
//!
//! This module is the internal glue layer that wires the detector stages:
//! segment -> clean -> locate -> offset -> convert.
//!
//! Algorithmic primitives live in `crate::detector`. The pipeline layer
//! focuses on stage boundaries, call order, and data flow, plus the
//! frame-source handshake: readiness check, blocking acquire, and
//! normalization to the canonical working width.

mod run;

pub(crate) use run::{estimate_from_source, estimate_in_frame};
