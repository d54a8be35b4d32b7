/* SPDX-License-Identifier: GPL-2.0-only */
#![no_std]

//! The stage sequencer drives a pre-RAM boot stage through a fixed table of
//! steps. Every step may announce a POST code before it runs, and may be
//! gated so that it only runs on the boot CPU after a cold reset. For
//! example:
//!
//! ```text
//!      Stage entry
//!           +
//!           |
//!           V
//!   +-----------------+
//!   | Always steps    |   e.g. MMCONF setup
//!   +-----------------+
//!   | Gated steps     |   boot CPU + cold reset only
//!   +-----------------+
//!   | Always steps    |   BIST check, vendor init phases
//!   +-------+---------+
//!           |
//!           V
//!     handoff POST code
//!           |
//!     next stage ------- returned? ---- terminal POST code
//! ```
//!
//! POST codes of the table are strictly increasing, so the last code seen on
//! a debug card tells which step a hung board was in.

mod error;
mod post;
mod sequencer;
mod step;

pub use self::{
    error::Error,
    post::PostCode,
    sequencer::{Platform, Sequencer, SequencerState},
    step::{Action, Gate, ResetPath, Role, Stage, Step},
};
