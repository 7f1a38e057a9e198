//! The mock remote facade.
//!
//! `MockRemote` answers every portal data request from fixtures after a
//! simulated delay. No operation fails. Create operations build the new
//! record from their input, an id from the `IdProvider` and a date from the
//! `Clock`, append a journal entry, and return the record. Fixtures are never
//! updated, so a created record does not show up in later reads.

use std::sync::Arc;

use chrono::SecondsFormat;
use serde_json::Value;
use tracing::{debug, info};

use mediconnect_contracts::records::{
    Appointment, AppointmentStatus, ChatMessage, DoctorDashboard, DocumentAck, FirstAidGuide,
    NewAppointment, NewNote, Note, OutgoingMessage, PatientAppointment, PatientDashboard,
    PatientRecord, PatientSummary, Prescription, PrescriptionDetails, Sender, SettingsAck,
    Transcription, Vitals, VitalsReading,
};
use mediconnect_core::traits::{Clock, IdProvider, SystemClock};

use crate::{
    fixtures,
    ids::RandomIds,
    journal::{EntityKind, Journal},
    latency::{LatencyProfile, Operation},
};

/// Fixture-backed stand-in for the portal's backend.
///
/// Cheap to clone; clones share the id source, clock and journal.
#[derive(Clone)]
pub struct MockRemote {
    latency: LatencyProfile,
    ids: Arc<dyn IdProvider>,
    clock: Arc<dyn Clock>,
    journal: Journal,
}

impl Default for MockRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRemote {
    /// Default latencies, random ids and the system clock.
    pub fn new() -> Self {
        Self {
            latency: LatencyProfile::default(),
            ids: Arc::new(RandomIds),
            clock: Arc::new(SystemClock),
            journal: Journal::new(),
        }
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdProvider>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    // ── Internals ────────────────────────────────────────────────────────────

    async fn simulate(&self, op: Operation) {
        let delay = self.latency.delay_for(op);
        debug!(op = %op, latency_ms = delay.as_millis() as u64, "simulated remote call");
        tokio::time::sleep(delay).await;
    }

    fn today(&self) -> String {
        self.clock.now().format("%Y-%m-%d").to_string()
    }

    fn timestamp(&self) -> String {
        self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Draw an id and journal the record it will belong to.
    fn record(&self, kind: EntityKind, scope: Option<&str>) -> u64 {
        let id = self.ids.next_id();
        let sequence = self.journal.append(kind, scope, id, self.clock.now());
        info!(kind = %kind, record_id = id, sequence, scope = scope.unwrap_or("-"), "record created");
        id
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    pub async fn doctor_dashboard(&self) -> DoctorDashboard {
        self.simulate(Operation::DoctorDashboard).await;
        fixtures::doctor_dashboard()
    }

    pub async fn patient_dashboard(&self) -> PatientDashboard {
        self.simulate(Operation::PatientDashboard).await;
        fixtures::patient_dashboard()
    }

    pub async fn doctor_appointments(&self) -> Vec<Appointment> {
        self.simulate(Operation::DoctorAppointments).await;
        fixtures::doctor_appointments()
    }

    /// The appointments listed on the patient dashboard.
    pub async fn patient_appointments(&self) -> Vec<PatientAppointment> {
        self.simulate(Operation::PatientAppointments).await;
        fixtures::patient_dashboard().appointments
    }

    pub async fn patient_list(&self) -> Vec<PatientSummary> {
        self.simulate(Operation::PatientList).await;
        fixtures::patient_directory()
    }

    /// The full record for `patient_id`, or `None` if there is none.
    pub async fn patient_details(&self, patient_id: &str) -> Option<PatientRecord> {
        self.simulate(Operation::PatientDetails).await;
        fixtures::patient_record(patient_id)
    }

    /// The guide for the first keyword in `query`, or the general guide.
    pub async fn first_aid_info(&self, query: &str) -> FirstAidGuide {
        self.simulate(Operation::FirstAidInfo).await;
        fixtures::first_aid(query)
    }

    /// Every conversation id returns the same stored thread.
    pub async fn chat_messages(&self, conversation_id: &str) -> Vec<ChatMessage> {
        self.simulate(Operation::ChatMessages).await;
        debug!(conversation_id, "loading conversation");
        fixtures::conversation()
    }

    // ── Writes ───────────────────────────────────────────────────────────────

    /// Book an appointment. The status is always `Confirmed`.
    pub async fn add_appointment(&self, request: NewAppointment) -> Appointment {
        self.simulate(Operation::AddAppointment).await;
        let id = self.record(EntityKind::Appointment, Some(&request.patient_id));
        Appointment {
            id,
            patient_name: request.patient_name,
            patient_id: request.patient_id,
            doctor_name: request.doctor_name,
            date: request.date,
            time: request.time,
            kind: request.kind,
            status: AppointmentStatus::Confirmed,
            notes: request.notes,
        }
    }

    /// Attach a note to a patient's chart, dated today.
    pub async fn add_patient_note(&self, patient_id: &str, note: NewNote) -> Note {
        self.simulate(Operation::AddPatientNote).await;
        Note {
            id: Some(self.record(EntityKind::Note, Some(patient_id))),
            date: self.today(),
            content: note.content,
            author: note.author,
        }
    }

    pub async fn add_patient_vitals(&self, patient_id: &str, vitals: Vitals) -> VitalsReading {
        self.simulate(Operation::AddPatientVitals).await;
        VitalsReading {
            id: Some(self.record(EntityKind::Vitals, Some(patient_id))),
            date: self.today(),
            vitals,
        }
    }

    pub async fn add_prescription(
        &self,
        patient_id: &str,
        details: PrescriptionDetails,
    ) -> Prescription {
        self.simulate(Operation::AddPrescription).await;
        Prescription {
            id: self.record(EntityKind::Prescription, Some(patient_id)),
            date: self.today(),
            details,
            cost: None,
        }
    }

    pub async fn send_chat_message(
        &self,
        conversation_id: &str,
        message: OutgoingMessage,
    ) -> ChatMessage {
        self.simulate(Operation::SendChatMessage).await;
        ChatMessage {
            id: self.record(EntityKind::ChatMessage, Some(conversation_id)),
            sender: message.sender,
            sender_name: message.sender_name,
            content: message.content,
            timestamp: self.timestamp(),
        }
    }

    /// A keyword-matched reply from the automated responder.
    pub async fn ai_chat_response(&self, text: &str) -> ChatMessage {
        self.simulate(Operation::AiChatResponse).await;
        ChatMessage {
            id: self.record(EntityKind::AiReply, None),
            sender: Sender::Ai,
            sender_name: fixtures::AI_RESPONDER_NAME.to_string(),
            content: fixtures::automated_reply(text).to_string(),
            timestamp: self.timestamp(),
        }
    }

    // ── Other ────────────────────────────────────────────────────────────────

    /// Returns the stored transcript. The audio is not inspected.
    pub async fn transcribe_audio(&self, audio: &[u8]) -> Transcription {
        self.simulate(Operation::TranscribeAudio).await;
        debug!(bytes = audio.len(), "transcription requested");
        Transcription {
            text: fixtures::TRANSCRIPT.to_string(),
            structured_data: fixtures::transcript_extraction(self.timestamp()),
        }
    }

    /// Accepts any settings and echoes them back.
    pub async fn update_settings(&self, user_id: &str, settings: Value) -> SettingsAck {
        self.simulate(Operation::UpdateSettings).await;
        debug!(user_id, "settings updated");
        SettingsAck {
            success: true,
            message: "Settings updated successfully".to_string(),
            updated_settings: settings,
        }
    }

    pub async fn generate_summary_document(&self, patient_id: &str) -> DocumentAck {
        self.simulate(Operation::GenerateSummaryDocument).await;
        debug!(patient_id, "summary document generated");
        DocumentAck {
            success: true,
            message: "PDF generated successfully".to_string(),
            url: fixtures::SUMMARY_DOCUMENT_URL.to_string(),
        }
    }
}
