/* SPDX-License-Identifier: GPL-2.0-only */
#![no_std]

pub mod romstage;
mod status;
mod wrapper;

pub use self::{
    status::AgesaStatus,
    wrapper::{AgesaWrapper, Phase},
};

#[cfg(feature = "blob")]
pub use wrapper::Blob;
