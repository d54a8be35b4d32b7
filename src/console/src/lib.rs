/* SPDX-License-Identifier: GPL-2.0-only */
#![no_std]

mod logger;
pub mod loglevel;
pub mod post;
pub mod uart8250;

pub use self::{
    logger::{ConsoleLogger, Error},
    post::PostPort,
    uart8250::Uart8250,
};
