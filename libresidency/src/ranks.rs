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
    residency_textmap::Map,
    rpds::List,
    serde::{Deserialize, Serialize},
};

/// Everyone's preferences: each hospital ranks students, and each student ranks hospitals.
///
/// Rankings are ordered from most to least preferred.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Ranks {
    hospitals: Map<String, List<String>>,
    students: Map<String, List<String>>,
}

fn ranking<I, S>(prefs: I) -> List<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    // `List` pushes onto the front, so the list comes out backwards.
    prefs
        .into_iter()
        .fold(List::new(), |list, p| list.push_front(p.into()))
        .reverse()
}

impl Ranks {
    /// Creates an empty set of rankings.
    pub fn new() -> Ranks {
        Ranks::default()
    }

    /// Returns new rankings in which `student` ranks the hospitals as in `prefs`.
    ///
    /// Any previous ranking by `student` is replaced.
    pub fn add_student<I, S>(&self, student: impl Into<String>, prefs: I) -> Ranks
    where
        I: IntoIterator<Item = S>,
            S: Into<String>,
    {
        Ranks {
            hospitals: self.hospitals.clone(),
            students: self.students.insert(student.into(), ranking(prefs)),
        }
    }

    /// Returns new rankings in which `hospital` ranks the students as in `prefs`.
    ///
    /// A hospital has to rank at least as many students as are currently known, so add the
    /// students first.
    pub fn add_hospital<I, S>(&self, hospital: impl Into<String>, prefs: I) -> Result<Ranks, Error>
    where
        I: IntoIterator<Item = S>,
            S: Into<String>,
    {
        let hospital = hospital.into();
        let prefs = ranking(prefs);
        if prefs.len() < self.students.len() {
            return Err(Error::IncompleteHospitalRanking {
                hospital,
                expected: self.students.len(),
                found: prefs.len(),
            });
        }
        Ok(Ranks {
            hospitals: self.hospitals.insert(hospital, prefs),
            students: self.students.clone(),
        })
    }

    /// The names of all the students, in order.
    pub fn students(&self) -> impl Iterator<Item = &str> + '_ {
        self.students.keys().map(String::as_str)
    }

    /// The names of all the hospitals, in order.
    pub fn hospitals(&self) -> impl Iterator<Item = &str> + '_ {
        self.hospitals.keys().map(String::as_str)
    }

    /// The students ranked by this hospital, most preferred first.
    pub fn hospital_prefs(&self, hospital: &str) -> Option<impl Iterator<Item = &str> + '_> {
        self.hospitals
            .get(hospital)
            .map(|list| list.iter().map(String::as_str))
    }

    /// The hospitals ranked by this student, most preferred first.
    pub fn student_prefs(&self, student: &str) -> Option<impl Iterator<Item = &str> + '_> {
        self.students
            .get(student)
            .map(|list| list.iter().map(String::as_str))
    }

    /// The student at the top of this hospital's ranking.
    pub fn first_choice(&self, hospital: &str) -> Result<&str, Error> {
        let list = self
            .hospitals
            .get(hospital)
            .ok_or_else(|| Error::UnknownHospital(hospital.to_owned()))?;
        list.first()
            .map(String::as_str)
            .ok_or_else(|| Error::EmptyRanking(hospital.to_owned()))
    }

    /// Returns new rankings in which the student at the top of this hospital's ranking has been
    /// removed from it.
    pub fn without_first_choice(&self, hospital: &str) -> Result<Ranks, Error> {
        let list = self
            .hospitals
            .get(hospital)
            .ok_or_else(|| Error::UnknownHospital(hospital.to_owned()))?;
        let rest = list
            .drop_first()
            .ok_or_else(|| Error::EmptyRanking(hospital.to_owned()))?;
        trace!(
            "dropped {:?} from the ranking of {hospital:?}",
            list.first()
        );
        Ok(Ranks {
            hospitals: self.hospitals.insert(hospital.to_owned(), rest),
            students: self.students.clone(),
        })
    }

    /// Where `student` ranks `hospital`, counting from zero for the most preferred.
    ///
    /// Returns `None` if the student is unknown or didn't rank the hospital.
    pub fn student_rank_of(&self, student: &str, hospital: &str) -> Option<usize> {
        self.students.get(student)?.iter().position(|h| h == hospital)
    }

    /// Checks that the rankings are complete: there are as many hospitals as students, and
    /// everyone ranks everyone on the other side.
    pub fn validate(&self) -> Result<(), Error> {
        let hospitals = self.hospitals.len();
        let students = self.students.len();
        if hospitals != students {
            return Err(Error::UnbalancedSides {
                hospitals,
                students,
            });
        }
        for (hospital, list) in self.hospitals.iter() {
            if list.len() != students {
                return Err(Error::IncompleteHospitalRanking {
                    hospital: hospital.clone(),
                    expected: students,
                    found: list.len(),
                });
            }
        }
        for (student, list) in self.students.iter() {
            if list.len() != hospitals {
                return Err(Error::IncompleteStudentRanking {
                    student: student.clone(),
                    expected: hospitals,
                    found: list.len(),
                });
            }
        }
        Ok(())
    }
}
