//! Fixture record types returned by the mock remote facade.
//!
//! These are inert data: names and ids are plain strings, and nothing checks
//! that an appointment's `patient_id` refers to a known patient. JSON field
//! names are camelCase, matching what the portal views consume.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Appointments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Upcoming,
    Completed,
}

/// A doctor-scoped appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub patient_name: String,
    pub patient_id: String,
    /// Set when the appointment was booked from the patient view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
}

/// Input for `add_appointment`. The facade assigns `id` and `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_name: String,
    pub patient_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub notes: String,
}

/// An appointment as the patient sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAppointment {
    pub id: u64,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: AppointmentStatus,
}

// ── Patients ─────────────────────────────────────────────────────────────────

/// One row of the doctor's patient directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub last_visit: String,
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub date: String,
    pub reason: String,
    pub diagnosis: String,
    pub treatment: String,
    pub doctor: String,
}

/// The measurements of a vitals reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    pub blood_pressure: String,
    pub heart_rate: u32,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    pub respiratory_rate: u32,
    pub blood_sugar: u32,
    /// Pounds.
    pub weight: f64,
    /// Feet.
    pub height: f64,
}

/// A dated vitals reading. Readings recorded through the facade carry an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub date: String,
    #[serde(flatten)]
    pub vitals: Vitals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub date: String,
    pub content: String,
    pub author: String,
}

/// Input for `add_patient_note`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub content: String,
    pub author: String,
}

/// The full chart the doctor sees on a patient's detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: String,
    pub insurance: String,
    pub insurance_id: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub conditions: Vec<String>,
    pub medications: Vec<Medication>,
    pub visits: Vec<Visit>,
    pub vitals: Vec<VitalsReading>,
    pub notes: Vec<Note>,
}

// ── Prescriptions ────────────────────────────────────────────────────────────

/// What the prescribing doctor fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDetails {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub prescribed_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: u64,
    pub date: String,
    #[serde(flatten)]
    pub details: PrescriptionDetails,
    /// Only known for fixture prescriptions; new ones are not priced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

// ── Dashboards ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: u64,
    pub patient_name: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u64,
    pub patient_name: String,
    pub action: String,
    pub time: String,
}

/// Aggregate counts and lists for the doctor's landing page.
///
/// The `*_change` fields are signed deltas rendered verbatim, e.g. `"+2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDashboard {
    pub today_appointments: u32,
    pub appointment_change: String,
    pub pending_consultations: u32,
    pub consultation_change: String,
    pub total_patients: u32,
    pub patient_change: String,
    pub emergency_requests: u32,
    pub emergency_change: String,
    pub today_schedule: Vec<ScheduleEntry>,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsTrends {
    pub blood_pressure: Vec<DataPoint>,
    pub heart_rate: Vec<DataPoint>,
    pub blood_sugar: Vec<DataPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDashboard {
    pub upcoming_appointments: u32,
    pub prescriptions: u32,
    pub messages: u32,
    pub vitals_data: VitalsTrends,
    pub appointments: Vec<PatientAppointment>,
    pub prescription_list: Vec<Prescription>,
}

// ── Chat ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Patient,
    Doctor,
    /// The automated responder.
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub sender_name: String,
    pub content: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
}

/// Input for `send_chat_message`. The facade assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub sender: Sender,
    pub sender_name: String,
    pub content: String,
}

// ── First aid ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstAidGuide {
    pub title: String,
    pub steps: Vec<String>,
    pub video_links: Vec<String>,
    pub images: Vec<String>,
}

// ── Transcription ────────────────────────────────────────────────────────────

/// Fields extracted from a consultation recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalExtraction {
    pub patient_name: String,
    pub doctor_name: String,
    pub symptoms: Vec<String>,
    pub suggestions: Vec<String>,
    pub medications: Vec<String>,
    pub follow_up: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcription {
    pub text: String,
    pub structured_data: ClinicalExtraction,
}

// ── Acknowledgements ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsAck {
    pub success: bool,
    pub message: String,
    /// The settings exactly as submitted.
    pub updated_settings: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAck {
    pub success: bool,
    pub message: String,
    pub url: String,
}
