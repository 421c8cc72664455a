use super::applicant::Applicant;
use super::domain::Gender;
use tracing::{debug, info};

/// Fixed-capacity room pool that only houses applicants of one gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostelPool {
    name: String,
    gender: Gender,
    total_rooms: u32,
    rooms_allocated: u32,
}

impl HostelPool {
    pub fn new(name: impl Into<String>, gender: Gender, total_rooms: u32) -> Self {
        Self {
            name: name.into(),
            gender,
            total_rooms,
            rooms_allocated: 0,
        }
    }

    pub fn boys(name: impl Into<String>, total_rooms: u32) -> Self {
        Self::new(name, Gender::Male, total_rooms)
    }

    pub fn girls(name: impl Into<String>, total_rooms: u32) -> Self {
        Self::new(name, Gender::Female, total_rooms)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn capacity(&self) -> u32 {
        self.total_rooms
    }

    pub fn allocated(&self) -> u32 {
        self.rooms_allocated
    }

    pub fn available(&self) -> u32 {
        self.total_rooms - self.rooms_allocated
    }

    pub fn is_available(&self) -> bool {
        self.rooms_allocated < self.total_rooms
    }

    /// Returns `true` when a room was handed out. A full pool, a gender
    /// mismatch or an applicant who already holds a room leaves everything
    /// untouched.
    pub fn allocate_room(&mut self, applicant: &mut Applicant) -> bool {
        if !self.is_available() || applicant.gender() != self.gender || applicant.has_hostel() {
            debug!(
                hostel = %self.name,
                applicant = applicant.name(),
                "hostel room not applicable"
            );
            return false;
        }

        self.rooms_allocated += 1;
        applicant.mark_hostel();
        info!(hostel = %self.name, applicant = applicant.name(), "hostel room allocated");
        true
    }
}
