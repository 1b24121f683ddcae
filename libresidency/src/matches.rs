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

use {
    crate::Error,
    residency_textmap::{TextMap, add},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// An assignment of students to hospitals, in which every hospital has at most one student and
/// every student has at most one hospital.
///
/// The assignment is stored in both directions, and the two directions always agree: hospital
/// `h` is matched with student `s` exactly when student `s` is matched with hospital `h`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "UncheckedMatches")]
pub struct Matches {
    hospital_to_student: TextMap,
    student_to_hospital: TextMap,
}

// The serialized form, before we've checked that the two directions agree.
#[derive(Deserialize)]
struct UncheckedMatches {
    hospital_to_student: TextMap,
    student_to_hospital: TextMap,
}

impl TryFrom<UncheckedMatches> for Matches {
    type Error = Error;

    fn try_from(unchecked: UncheckedMatches) -> Result<Matches, Error> {
        let mut matches = Matches::new();
        for (h, s) in unchecked.hospital_to_student.iter() {
            matches = matches.pair(h, s)?;
        }
        if matches.student_to_hospital != unchecked.student_to_hospital {
            return Err(Error::InconsistentMatches);
        }
        Ok(matches)
    }
}

impl Matches {
    /// Creates an assignment in which nobody is matched.
    pub fn new() -> Matches {
        Matches::default()
    }

    /// Returns a new assignment in which `hospital` and `student` are matched with each other.
    ///
    /// Fails if either of them is already matched (even if it is with each other).
    pub fn pair(&self, hospital: &str, student: &str) -> Result<Matches, Error> {
        if let Some(s) = self.hospital_to_student.get(hospital) {
            return Err(Error::HospitalAlreadyMatched {
                hospital: hospital.to_owned(),
                student: s.clone(),
            });
        }
        if let Some(h) = self.student_to_hospital.get(student) {
            return Err(Error::StudentAlreadyMatched {
                student: student.to_owned(),
                hospital: h.clone(),
            });
        }

        debug!("pairing hospital {hospital:?} with student {student:?}");
        Ok(Matches {
            hospital_to_student: add(&self.hospital_to_student, hospital, student),
            student_to_hospital: add(&self.student_to_hospital, student, hospital),
        })
    }

    /// Returns a new assignment in which `hospital` and `student` are no longer matched.
    ///
    /// Fails unless they are currently matched with each other.
    pub fn unpair(&self, hospital: &str, student: &str) -> Result<Matches, Error> {
        if self.student_for(hospital) != Some(student) {
            return Err(Error::NotPaired {
                hospital: hospital.to_owned(),
                student: student.to_owned(),
            });
        }

        debug!("unpairing hospital {hospital:?} from student {student:?}");
        Ok(Matches {
            hospital_to_student: self.hospital_to_student.remove(hospital),
            student_to_hospital: self.student_to_hospital.remove(student),
        })
    }

    /// Is this hospital matched with anyone?
    pub fn hospital_is_matched(&self, hospital: &str) -> bool {
        self.hospital_to_student.contains_key(hospital)
    }

    /// Is this student matched with anyone?
    pub fn student_is_matched(&self, student: &str) -> bool {
        self.student_to_hospital.contains_key(student)
    }

    /// The student that this hospital is matched with, if any.
    pub fn student_for(&self, hospital: &str) -> Option<&str> {
        self.hospital_to_student.get(hospital).map(String::as_str)
    }

    /// The hospital that this student is matched with, if any.
    pub fn hospital_for(&self, student: &str) -> Option<&str> {
        self.student_to_hospital.get(student).map(String::as_str)
    }

    /// The number of matched pairs.
    pub fn len(&self) -> usize {
        self.hospital_to_student.len()
    }

    /// Returns true if nobody is matched.
    pub fn is_empty(&self) -> bool {
        self.hospital_to_student.is_empty()
    }

    /// Iterates over the `(hospital, student)` pairs, ordered by hospital.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.hospital_to_student
            .iter()
            .map(|(h, s)| (h.as_str(), s.as_str()))
    }
}

impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "matches:")?;
        for (s, h) in self.student_to_hospital.iter() {
            writeln!(f, "{s}  is matched with  {h}")?;
        }
        Ok(())
    }
}
