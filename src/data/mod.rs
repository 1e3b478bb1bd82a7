pub mod doctor;
pub mod score;

pub use doctor::{DoctorRecord, DoctorRecordJson, DoctorsEnvelopeJson};
pub use score::{match_percent, ScoreTier};
