//! Binary formats exchanged by the skeleton stages.
//!
//! Every file is a flat sequence of native-endian 64 bit signed integers. Files open with
//! a four integer [`Header`] (grid dimensions in Z, Y, X order followed by a label count),
//! then carry one record per label: an element count followed by that many linear indices.

mod error;
mod int;
mod header;
mod downup;
mod skeleton;
mod staged;
mod volume;

pub use crate::error::{Error, Result};
pub use crate::int::{read_int, read_ints, write_int, write_ints, INT_SIZE};
pub use crate::header::Header;
pub use crate::downup::DownUpMap;
pub use crate::skeleton::{SkeletonReader, SkeletonRecord, SkeletonWriter};
pub use crate::staged::StagedFile;
pub use crate::volume::Volume;
