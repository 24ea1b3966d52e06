//! `rn-io`: fixture files on disk.
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`records`] | Lenient snapshot CSV loader and writer                     |
//! | [`demand`]  | `Demand` (start/end request) text files                    |
//! | [`case`]    | Fixture directory layout, `find_case_files`, `FixtureWriter` |
//! | [`error`]   | `IoError`, `IoResult<T>`                                   |

pub mod case;
pub mod demand;
pub mod error;
pub mod records;


pub use case::{CaseFiles, FixtureWriter, find_case_files, snapshot_file_name, snapshot_time};
pub use demand::{Demand, read_demand, write_demand};
pub use error::{IoError, IoResult};
pub use records::{load_records, load_records_reader, write_records, write_records_to};
