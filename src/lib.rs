//! Core library for the questionbank command line application.
//!
//! The library exposes the building blocks that power the command-line
//! interface as well as the tests. The modules are structured to keep
//! responsibilities narrow and composable: the line-grouping algorithm and
//! table types live in [`group`], the Excel adapters under [`io`], and the
//! end-to-end conversion in [`convert`].

pub mod convert;
pub mod error;
pub mod group;
pub mod io;

pub use error::{ConvertError, Result};
