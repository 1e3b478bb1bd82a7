use serde::{Deserialize, Deserializer};

/// One doctor-availability record, as returned by the prediction backend.
///
/// Records are immutable once parsed; everything shown in the UI beyond
/// these fields (match percentage, score tier) is derived at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorRecord {
    /// Doctor identifier (NPI), unique within one response batch
    pub id: String,
    /// Hour the doctor's session began, "00".."23"
    pub login_hour: String,
    /// Hour the doctor's session ended, "00".."23"
    pub logout_hour: String,
    /// Length of the session in minutes
    pub session_duration_minutes: f64,
    /// Count of survey attempts during the session
    pub survey_attempt_count: u64,
    /// Model-provided confidence in [0, 1], absent for some records
    pub match_probability: Option<f64>,
}

/// Raw JSON envelope: `{ "message"?, "doctors": [...] }`
#[derive(Debug, Deserialize)]
pub struct DoctorsEnvelopeJson {
    #[serde(default)]
    pub message: Option<String>,
    pub doctors: Vec<DoctorRecordJson>,
}

/// Raw JSON structure for one doctor.
///
/// The backend serializes dataframe rows, so `NPI` and the hour fields
/// can arrive as either JSON strings or numbers; both are accepted and
/// normalized to strings.
#[derive(Debug, Deserialize)]
pub struct DoctorRecordJson {
    #[serde(rename = "NPI", deserialize_with = "string_or_number")]
    pub npi: String,
    #[serde(deserialize_with = "two_digit_hour")]
    pub login_hour: String,
    #[serde(deserialize_with = "two_digit_hour")]
    pub logout_hour: String,
    pub session_duration: f64,
    #[serde(rename = "Count of Survey Attempts")]
    pub survey_attempts: u64,
    #[serde(default)]
    pub prediction_prob: Option<f64>,
}

impl From<DoctorRecordJson> for DoctorRecord {
    fn from(raw: DoctorRecordJson) -> Self {
        Self {
            id: raw.npi,
            login_hour: raw.login_hour,
            logout_hour: raw.logout_hour,
            session_duration_minutes: raw.session_duration,
            survey_attempt_count: raw.survey_attempts,
            match_probability: raw.prediction_prob,
        }
    }
}

/// A field that may be serialized as a string or a number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Int(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawField::deserialize(deserializer)? {
        RawField::Text(s) => s,
        RawField::Int(n) => n.to_string(),
        RawField::Float(f) if f.fract() == 0.0 => format!("{}", f as i64),
        RawField::Float(f) => f.to_string(),
    })
}

fn two_digit_hour<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let hour = match RawField::deserialize(deserializer)? {
        RawField::Text(s) => match s.parse::<i64>() {
            Ok(n) => n,
            Err(_) => return Ok(s),
        },
        RawField::Int(n) => n,
        RawField::Float(f) => f as i64,
    };
    Ok(format!("{:02}", hour))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_with_string_fields() {
        let json = r#"{
            "NPI": "1234567890",
            "login_hour": "09",
            "logout_hour": "17",
            "session_duration": 480.0,
            "Count of Survey Attempts": 12,
            "prediction_prob": 0.85
        }"#;
        let record: DoctorRecord = serde_json::from_str::<DoctorRecordJson>(json).unwrap().into();
        assert_eq!(record.id, "1234567890");
        assert_eq!(record.login_hour, "09");
        assert_eq!(record.logout_hour, "17");
        assert_eq!(record.session_duration_minutes, 480.0);
        assert_eq!(record.survey_attempt_count, 12);
        assert_eq!(record.match_probability, Some(0.85));
    }

    #[test]
    fn test_parse_record_with_numeric_fields() {
        // The backend emits dataframe rows, so these come back as numbers
        let json = r#"{
            "NPI": 42,
            "login_hour": 9,
            "logout_hour": 17,
            "session_duration": 123.4,
            "Count of Survey Attempts": 3
        }"#;
        let record: DoctorRecord = serde_json::from_str::<DoctorRecordJson>(json).unwrap().into();
        assert_eq!(record.id, "42");
        assert_eq!(record.login_hour, "09");
        assert_eq!(record.logout_hour, "17");
        assert_eq!(record.match_probability, None);
    }

    #[test]
    fn test_parse_envelope_with_message() {
        let json = r#"{"message": "Doctors found.", "doctors": []}"#;
        let envelope: DoctorsEnvelopeJson = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.message.as_deref(), Some("Doctors found."));
        assert!(envelope.doctors.is_empty());
    }

    #[test]
    fn test_envelope_requires_doctors_field() {
        let json = r#"{"message": "oops"}"#;
        assert!(serde_json::from_str::<DoctorsEnvelopeJson>(json).is_err());
    }

    #[test]
    fn test_single_digit_hour_string_is_padded() {
        let json = r#"{
            "NPI": "1",
            "login_hour": "9",
            "logout_hour": "5",
            "session_duration": 60,
            "Count of Survey Attempts": 0
        }"#;
        let record: DoctorRecord = serde_json::from_str::<DoctorRecordJson>(json).unwrap().into();
        assert_eq!(record.login_hour, "09");
        assert_eq!(record.logout_hour, "05");
    }
}
