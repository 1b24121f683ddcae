// Copyright 2018-2019 Joe Neeman.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// See the LICENSE-APACHE or LICENSE-MIT files at the top-level directory
// of this distribution.

#![deny(missing_docs)]

//! Data structures for assigning students to hospitals.
//!
//! A [`Ranks`] holds everyone's preferences and a [`Matches`] holds the current assignment. Both
//! are persistent: every operation returns a new value and leaves the old one as it was, which
//! makes it easy to keep earlier states of an assignment around.

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod error;
mod matches;
mod ranks;

pub use {
    crate::{error::Error, matches::Matches, ranks::Ranks},
    residency_textmap::{Map, TextMap, add, merge},
};
