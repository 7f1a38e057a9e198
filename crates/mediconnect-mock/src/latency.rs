//! Simulated network latency.
//!
//! Every facade call waits a fixed delay before resolving. The delay depends
//! only on the operation, never on its input.
//!
//! A profile can be loaded from TOML:
//!
//! ```toml
//! [latency]
//! default_ms = 1000
//! send_message_ms = 500
//! transcribe_ms = 2000
//! document_ms = 2000
//! login_ms = 1000
//! ```
//!
//! Missing keys, or a missing `[latency]` table, keep the defaults.

use std::{fmt, time::Duration};

use serde::Deserialize;

use mediconnect_contracts::error::{PortalError, PortalResult};

/// The facade operations, as they appear in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DoctorDashboard,
    PatientDashboard,
    DoctorAppointments,
    PatientAppointments,
    PatientList,
    PatientDetails,
    AddAppointment,
    AddPatientNote,
    AddPatientVitals,
    AddPrescription,
    FirstAidInfo,
    ChatMessages,
    SendChatMessage,
    AiChatResponse,
    TranscribeAudio,
    UpdateSettings,
    GenerateSummaryDocument,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::DoctorDashboard => "doctor_dashboard",
            Operation::PatientDashboard => "patient_dashboard",
            Operation::DoctorAppointments => "doctor_appointments",
            Operation::PatientAppointments => "patient_appointments",
            Operation::PatientList => "patient_list",
            Operation::PatientDetails => "patient_details",
            Operation::AddAppointment => "add_appointment",
            Operation::AddPatientNote => "add_patient_note",
            Operation::AddPatientVitals => "add_patient_vitals",
            Operation::AddPrescription => "add_prescription",
            Operation::FirstAidInfo => "first_aid_info",
            Operation::ChatMessages => "chat_messages",
            Operation::SendChatMessage => "send_chat_message",
            Operation::AiChatResponse => "ai_chat_response",
            Operation::TranscribeAudio => "transcribe_audio",
            Operation::UpdateSettings => "update_settings",
            Operation::GenerateSummaryDocument => "generate_summary_document",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-operation delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub default: Duration,
    pub send_message: Duration,
    pub transcribe: Duration,
    pub document: Duration,
    /// Used by the login service rather than the facade.
    pub login: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            default: Duration::from_millis(1000),
            send_message: Duration::from_millis(500),
            transcribe: Duration::from_millis(2000),
            document: Duration::from_millis(2000),
            login: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LatencyFile {
    #[serde(default)]
    latency: LatencyTable,
}

#[derive(Debug, Default, Deserialize)]
struct LatencyTable {
    default_ms: Option<u64>,
    send_message_ms: Option<u64>,
    transcribe_ms: Option<u64>,
    document_ms: Option<u64>,
    login_ms: Option<u64>,
}

impl LatencyProfile {
    /// Every operation resolves without waiting.
    pub fn instant() -> Self {
        Self {
            default: Duration::ZERO,
            send_message: Duration::ZERO,
            transcribe: Duration::ZERO,
            document: Duration::ZERO,
            login: Duration::ZERO,
        }
    }

    /// Read the `[latency]` table of a TOML document.
    pub fn from_toml_str(s: &str) -> PortalResult<Self> {
        let file: LatencyFile = toml::from_str(s).map_err(|e| PortalError::Config {
            reason: format!("failed to parse latency TOML: {}", e),
        })?;

        let base = Self::default();
        let ms = |value: Option<u64>, fallback: Duration| {
            value.map(Duration::from_millis).unwrap_or(fallback)
        };
        let table = file.latency;
        Ok(Self {
            default: ms(table.default_ms, base.default),
            send_message: ms(table.send_message_ms, base.send_message),
            transcribe: ms(table.transcribe_ms, base.transcribe),
            document: ms(table.document_ms, base.document),
            login: ms(table.login_ms, base.login),
        })
    }

    pub fn delay_for(&self, op: Operation) -> Duration {
        match op {
            Operation::SendChatMessage => self.send_message,
            Operation::TranscribeAudio => self.transcribe,
            Operation::GenerateSummaryDocument => self.document,
            _ => self.default,
        }
    }
}
