// Group a day's patients under the therapist who saw them.
//
// Purpose
// - One group per therapist, each listing distinct patients with their appointment count.
//
// Responsibilities
// - Keep groups and patients in order of first encounter.
// - Drop appointments without a patient.
// - Collect appointments without a therapist into a trailing "no therapist assigned" group.

use crate::modules::reports::core::appointment::{AppointmentRecord, PersonRef};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

pub const UNASSIGNED_THERAPIST_LABEL: &str = "no therapist assigned";

/// Therapist id of a group. The unassigned group serializes as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TherapistKey {
    Assigned(i64),
    Unassigned,
}

impl Serialize for TherapistKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TherapistKey::Assigned(id) => serializer.serialize_i64(*id),
            TherapistKey::Unassigned => serializer.serialize_str(""),
        }
    }
}

impl std::fmt::Display for TherapistKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TherapistKey::Assigned(id) => write!(f, "{id}"),
            TherapistKey::Unassigned => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientAppointments {
    pub patient_id: i64,
    pub patient: String,
    pub appointments: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TherapistPatients {
    pub therapist_id: TherapistKey,
    pub therapist: String,
    pub patients: Vec<PatientAppointments>,
}

struct GroupBuilder {
    group: TherapistPatients,
    patient_index: HashMap<i64, usize>,
}

impl GroupBuilder {
    fn new(therapist_id: TherapistKey, therapist: String) -> Self {
        Self {
            group: TherapistPatients {
                therapist_id,
                therapist,
                patients: Vec::new(),
            },
            patient_index: HashMap::new(),
        }
    }

    fn count(&mut self, patient: &PersonRef) {
        match self.patient_index.get(&patient.id) {
            Some(&index) => self.group.patients[index].appointments += 1,
            None => {
                self.patient_index
                    .insert(patient.id, self.group.patients.len());
                self.group.patients.push(PatientAppointments {
                    patient_id: patient.id,
                    patient: patient.display_name(),
                    appointments: 1,
                });
            }
        }
    }
}

pub fn patients_by_therapist(date: NaiveDate, records: &[AppointmentRecord]) -> Vec<TherapistPatients> {
    let mut groups: Vec<GroupBuilder> = Vec::new();
    let mut group_index: HashMap<i64, usize> = HashMap::new();
    let mut unassigned = GroupBuilder::new(
        TherapistKey::Unassigned,
        UNASSIGNED_THERAPIST_LABEL.to_string(),
    );

    for record in records.iter().filter(|r| r.is_active_on(date)) {
        let Some(patient) = &record.patient else {
            continue;
        };
        match &record.therapist {
            Some(therapist) => {
                let index = *group_index.entry(therapist.id).or_insert_with(|| {
                    groups.push(GroupBuilder::new(
                        TherapistKey::Assigned(therapist.id),
                        therapist.display_name(),
                    ));
                    groups.len() - 1
                });
                groups[index].count(patient);
            }
            None => unassigned.count(patient),
        }
    }

    if !unassigned.group.patients.is_empty() {
        groups.push(unassigned);
    }
    groups.into_iter().map(|builder| builder.group).collect()
}
