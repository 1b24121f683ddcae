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

/// The ways in which an operation on [`Matches`](crate::Matches) or [`Ranks`](crate::Ranks) can
/// fail.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("The ranking for hospital {0:?} is empty")]
    EmptyRanking(String),
    #[error("Hospital {hospital:?} is already matched with student {student:?}")]
    HospitalAlreadyMatched { hospital: String, student: String },
    #[error("Hospital {hospital:?} ranks {found} students, but there are {expected}")]
    IncompleteHospitalRanking {
        hospital: String,
        expected: usize,
        found: usize,
    },
    #[error("Student {student:?} ranks {found} hospitals, but there are {expected}")]
    IncompleteStudentRanking {
        student: String,
        expected: usize,
        found: usize,
    },
    #[error("The two directions of the assignment disagree")]
    InconsistentMatches,
    #[error("Hospital {hospital:?} is not matched with student {student:?}")]
    NotPaired { hospital: String, student: String },
    #[error("Student {student:?} is already matched with hospital {hospital:?}")]
    StudentAlreadyMatched { student: String, hospital: String },
    #[error("There are {hospitals} hospitals but {students} students")]
    UnbalancedSides { hospitals: usize, students: usize },
    #[error("There is no hospital named {0:?}")]
    UnknownHospital(String),
}
