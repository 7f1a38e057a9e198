//! Hard-coded portal data.
//!
//! All data in this module is fictional. It stands in for the clinic's
//! records so every view has something to render; nothing here is read from
//! or written to an external system.

use mediconnect_contracts::records::{
    ActivityEntry, Appointment, AppointmentStatus, ChatMessage, ClinicalExtraction, DataPoint,
    DoctorDashboard, FirstAidGuide, Medication, Note, PatientAppointment, PatientDashboard,
    PatientRecord, PatientSummary, Prescription, PrescriptionDetails, ScheduleEntry, Sender,
    Visit, Vitals, VitalsReading, VitalsTrends,
};

use AppointmentStatus::{Completed, Confirmed, Pending, Upcoming};

/// Display name of the automated chat responder.
pub const AI_RESPONDER_NAME: &str = "MediConnect AI";

/// Where the generated patient summary can be downloaded.
pub const SUMMARY_DOCUMENT_URL: &str = "/sample-patient-summary.pdf";

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=300&width=400";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Dashboards ───────────────────────────────────────────────────────────────

pub fn doctor_dashboard() -> DoctorDashboard {
    let schedule = |id, patient: &str, time: &str, kind: &str, status| ScheduleEntry {
        id,
        patient_name: patient.to_string(),
        time: time.to_string(),
        kind: kind.to_string(),
        status,
    };
    let activity = |id, patient: &str, action: &str, time: &str| ActivityEntry {
        id,
        patient_name: patient.to_string(),
        action: action.to_string(),
        time: time.to_string(),
    };

    DoctorDashboard {
        today_appointments: 8,
        appointment_change: "+2".to_string(),
        pending_consultations: 4,
        consultation_change: "-1".to_string(),
        total_patients: 145,
        patient_change: "+5".to_string(),
        emergency_requests: 2,
        emergency_change: "+1".to_string(),
        today_schedule: vec![
            schedule(1, "John Doe", "09:00 AM", "Check-up", Confirmed),
            schedule(2, "Jane Smith", "10:30 AM", "Follow-up", Confirmed),
            schedule(3, "Robert Johnson", "01:00 PM", "Consultation", Pending),
            schedule(4, "Emily Davis", "03:30 PM", "Check-up", Confirmed),
        ],
        recent_activity: vec![
            activity(1, "Sarah Wilson", "Updated health vitals", "2 hours ago"),
            activity(2, "Michael Brown", "Requested prescription refill", "4 hours ago"),
            activity(3, "Lisa Taylor", "Booked an appointment", "Yesterday"),
            activity(4, "David Miller", "Sent a message", "Yesterday"),
        ],
    }
}

fn monthly(values: [f64; 6]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| DataPoint {
            date: format!("2023-{:02}-01", i + 1),
            value: *value,
        })
        .collect()
}

pub fn patient_dashboard() -> PatientDashboard {
    let appointment = |id, doctor: &str, date: &str, time: &str, kind: &str, status| {
        PatientAppointment {
            id,
            doctor_name: doctor.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            kind: kind.to_string(),
            status,
        }
    };
    let prescription = |id, name: &str, dosage: &str, frequency: &str, duration: &str, by: &str, date: &str, cost| {
        Prescription {
            id,
            date: date.to_string(),
            details: PrescriptionDetails {
                name: name.to_string(),
                dosage: dosage.to_string(),
                frequency: frequency.to_string(),
                duration: duration.to_string(),
                prescribed_by: by.to_string(),
            },
            cost: Some(cost),
        }
    };

    PatientDashboard {
        upcoming_appointments: 2,
        prescriptions: 3,
        messages: 1,
        vitals_data: VitalsTrends {
            blood_pressure: monthly([120.0, 118.0, 122.0, 119.0, 121.0, 117.0]),
            heart_rate: monthly([72.0, 74.0, 70.0, 73.0, 71.0, 72.0]),
            blood_sugar: monthly([95.0, 98.0, 92.0, 97.0, 94.0, 96.0]),
        },
        appointments: vec![
            appointment(1, "Dr. Jane Smith", "2023-06-15", "10:00 AM", "Check-up", Upcoming),
            appointment(2, "Dr. Robert Johnson", "2023-06-22", "02:30 PM", "Follow-up", Upcoming),
            appointment(3, "Dr. Jane Smith", "2023-05-10", "11:00 AM", "Check-up", Completed),
        ],
        prescription_list: vec![
            prescription(1, "Amoxicillin", "500mg", "3 times daily", "7 days", "Dr. Jane Smith", "2023-05-10", 25.99),
            prescription(2, "Lisinopril", "10mg", "Once daily", "30 days", "Dr. Robert Johnson", "2023-04-22", 15.5),
            prescription(3, "Ibuprofen", "400mg", "As needed", "PRN", "Dr. Jane Smith", "2023-05-10", 8.75),
        ],
    }
}

// ── Appointments ─────────────────────────────────────────────────────────────

pub fn doctor_appointments() -> Vec<Appointment> {
    let rows: [(&str, &str, &str, &str, &str, AppointmentStatus, &str); 8] = [
        ("John Doe", "PAT001", "2023-06-15", "09:00 AM", "Check-up", Confirmed, "Regular check-up, patient has history of hypertension"),
        ("Jane Smith", "PAT002", "2023-06-15", "10:30 AM", "Follow-up", Confirmed, "Follow-up on medication adjustment"),
        ("Robert Johnson", "PAT003", "2023-06-15", "01:00 PM", "Consultation", Pending, "New patient consultation"),
        ("Emily Davis", "PAT004", "2023-06-15", "03:30 PM", "Check-up", Confirmed, "Annual physical examination"),
        ("Michael Wilson", "PAT005", "2023-06-16", "09:30 AM", "Follow-up", Confirmed, "Post-surgery follow-up"),
        ("Sarah Brown", "PAT006", "2023-06-16", "11:00 AM", "Consultation", Confirmed, "Discussing test results"),
        ("David Miller", "PAT007", "2023-06-16", "02:00 PM", "Check-up", Pending, "Regular check-up"),
        ("Lisa Taylor", "PAT008", "2023-06-16", "04:00 PM", "Follow-up", Confirmed, "Medication review"),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (name, patient_id, date, time, kind, status, notes))| Appointment {
            id: i as u64 + 1,
            patient_name: name.to_string(),
            patient_id: patient_id.to_string(),
            doctor_name: None,
            date: date.to_string(),
            time: time.to_string(),
            kind: kind.to_string(),
            status: *status,
            notes: notes.to_string(),
        })
        .collect()
}

// ── Patients ─────────────────────────────────────────────────────────────────

pub fn patient_directory() -> Vec<PatientSummary> {
    let rows: [(&str, &str, u32, &str, &str, &str, &[&str]); 8] = [
        ("PAT001", "John Doe", 45, "Male", "555-123-4567", "2023-05-10", &["Hypertension", "Type 2 Diabetes"]),
        ("PAT002", "Jane Smith", 38, "Female", "555-234-5678", "2023-05-15", &["Asthma"]),
        ("PAT003", "Robert Johnson", 52, "Male", "555-345-6789", "2023-04-22", &["Arthritis", "High Cholesterol"]),
        ("PAT004", "Emily Davis", 29, "Female", "555-456-7890", "2023-06-01", &["Migraine"]),
        ("PAT005", "Michael Wilson", 61, "Male", "555-567-8901", "2023-05-20", &["Coronary Artery Disease", "Hypertension"]),
        ("PAT006", "Sarah Brown", 42, "Female", "555-678-9012", "2023-05-05", &["Hypothyroidism"]),
        ("PAT007", "David Miller", 35, "Male", "555-789-0123", "2023-04-15", &["Anxiety", "Depression"]),
        ("PAT008", "Lisa Taylor", 48, "Female", "555-890-1234", "2023-05-25", &["Fibromyalgia", "Insomnia"]),
    ];

    rows.iter()
        .map(|(id, name, age, gender, phone, last_visit, conditions)| PatientSummary {
            id: id.to_string(),
            name: name.to_string(),
            age: *age,
            gender: gender.to_string(),
            phone: phone.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            last_visit: last_visit.to_string(),
            conditions: strings(conditions),
        })
        .collect()
}

/// The full chart for `patient_id`. Only `PAT001` has one.
pub fn patient_record(patient_id: &str) -> Option<PatientRecord> {
    if patient_id != "PAT001" {
        return None;
    }

    let medication = |name: &str, dosage: &str, frequency: &str, start: &str| Medication {
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        start_date: start.to_string(),
    };
    let visit = |date: &str, reason: &str, diagnosis: &str, treatment: &str, doctor: &str| Visit {
        date: date.to_string(),
        reason: reason.to_string(),
        diagnosis: diagnosis.to_string(),
        treatment: treatment.to_string(),
        doctor: doctor.to_string(),
    };
    let reading = |date: &str, bp: &str, hr, temp, rr, sugar, weight| VitalsReading {
        id: None,
        date: date.to_string(),
        vitals: Vitals {
            blood_pressure: bp.to_string(),
            heart_rate: hr,
            temperature: temp,
            respiratory_rate: rr,
            blood_sugar: sugar,
            weight,
            height: 5.1,
        },
    };
    let note = |date: &str, content: &str, author: &str| Note {
        id: None,
        date: date.to_string(),
        content: content.to_string(),
        author: author.to_string(),
    };

    Some(PatientRecord {
        id: "PAT001".to_string(),
        name: "John Doe".to_string(),
        age: 45,
        gender: "Male".to_string(),
        dob: "1978-03-15".to_string(),
        phone: "555-123-4567".to_string(),
        email: "john.doe@example.com".to_string(),
        address: "123 Main St, Anytown, USA".to_string(),
        emergency_contact: "Jane Doe (Wife) - 555-123-4568".to_string(),
        insurance: "Blue Cross Blue Shield".to_string(),
        insurance_id: "BCBS12345678".to_string(),
        blood_type: "O+".to_string(),
        allergies: strings(&["Penicillin", "Peanuts"]),
        conditions: strings(&["Hypertension", "Type 2 Diabetes"]),
        medications: vec![
            medication("Lisinopril", "10mg", "Once daily", "2022-01-15"),
            medication("Metformin", "500mg", "Twice daily", "2022-02-10"),
        ],
        visits: vec![
            visit("2023-05-10", "Regular check-up", "Stable hypertension, well-controlled diabetes", "Continue current medications", "Dr. Jane Smith"),
            visit("2023-02-15", "Flu symptoms", "Seasonal influenza", "Rest, fluids, Tamiflu prescribed", "Dr. Robert Johnson"),
            visit("2022-11-20", "Annual physical", "Generally healthy, slight elevation in blood pressure", "Adjusted Lisinopril dosage", "Dr. Jane Smith"),
        ],
        vitals: vec![
            reading("2023-05-10", "130/85", 72, 98.6, 16, 110, 185.0),
            reading("2023-02-15", "145/90", 88, 101.2, 20, 130, 187.0),
            reading("2022-11-20", "140/88", 74, 98.4, 16, 115, 190.0),
        ],
        notes: vec![
            note("2023-05-10", "Patient reports feeling well. Compliant with medications. Exercising 3 times per week.", "Dr. Jane Smith"),
            note("2023-02-15", "Patient presented with fever, cough, and body aches for 2 days. Tested positive for influenza A.", "Dr. Robert Johnson"),
            note("2022-11-20", "Annual physical examination. Patient reports occasional headaches. Recommended reducing sodium intake and increasing physical activity.", "Dr. Jane Smith"),
        ],
    })
}

// ── First aid ────────────────────────────────────────────────────────────────

fn guide(title: &str, steps: &[&str], video: Option<&str>) -> FirstAidGuide {
    FirstAidGuide {
        title: title.to_string(),
        steps: strings(steps),
        video_links: video.map(|v| vec![v.to_string()]).unwrap_or_default(),
        images: vec![PLACEHOLDER_IMAGE.to_string()],
    }
}

/// Keyword-indexed first-aid guides, in match priority order.
pub fn first_aid_guides() -> Vec<(&'static str, FirstAidGuide)> {
    vec![
        ("burn", guide("Burn Treatment", &[
            "Cool the burn with cool (not cold) running water for 10 to 15 minutes or until pain eases.",
            "Remove jewelry and tight items from the burned area.",
            "Don't break blisters. If blisters break, clean with mild soap and water.",
            "Apply an antibiotic ointment and cover with a sterile bandage.",
            "Take an over-the-counter pain reliever if needed.",
            "Seek medical attention for severe burns or burns on the face, hands, feet, genitals, or over a joint.",
        ], Some("https://www.youtube.com/watch?v=EaJmzB8YgS0"))),
        ("seizure", guide("Seizure First Aid", &[
            "Stay with the person and time the seizure.",
            "Clear the area of anything that could harm the person.",
            "Put something soft under their head.",
            "Turn them onto their side if possible.",
            "Don't restrain the person or put anything in their mouth.",
            "Call emergency services if the seizure lasts more than 5 minutes, if the person doesn't wake up, or if they have another seizure.",
        ], Some("https://www.youtube.com/watch?v=5QlXkj5C1jA"))),
        ("choking", guide("Choking First Aid", &[
            "Ask the person if they're choking. If they can speak, cough, or breathe, don't interfere.",
            "If they can't speak, cough, or breathe, give 5 back blows between the shoulder blades with the heel of your hand.",
            "If back blows don't work, give 5 abdominal thrusts (Heimlich maneuver).",
            "Alternate between 5 back blows and 5 abdominal thrusts until the object is dislodged or emergency services arrive.",
            "If the person becomes unconscious, start CPR.",
        ], Some("https://www.youtube.com/watch?v=PA9hpOnvtCk"))),
        ("heart attack", guide("Heart Attack First Aid", &[
            "Call emergency services immediately.",
            "Have the person sit down and rest in a position that makes breathing comfortable.",
            "Loosen any tight clothing.",
            "If the person is not allergic to aspirin and has no other contraindications, give them an aspirin to chew.",
            "If the person becomes unconscious, begin CPR if you're trained.",
            "If an automated external defibrillator (AED) is available, use it following the instructions.",
        ], Some("https://www.youtube.com/watch?v=gDwt7dD3awc"))),
        ("bleeding", guide("Severe Bleeding First Aid", &[
            "Apply direct pressure on the wound with a clean cloth, bandage, or piece of clothing.",
            "If possible, elevate the injured area above the level of the heart.",
            "If blood soaks through, add more material on top (don't remove the first layer).",
            "If bleeding continues and you suspect an arterial bleed, apply pressure to the appropriate pressure point.",
            "Use a tourniquet only as a last resort for life-threatening bleeding that can't be controlled by other means.",
            "Call emergency services or get the person to emergency care as soon as possible.",
        ], Some("https://www.youtube.com/watch?v=NxO5LvgqZe0"))),
    ]
}

/// The guide returned when no keyword matches.
pub fn general_first_aid() -> FirstAidGuide {
    guide("First Aid Information", &[
        "For specific first aid instructions, please search for a specific condition like 'burn', 'seizure', 'choking', etc.",
        "In case of a medical emergency, always call emergency services immediately.",
        "This tool provides basic first aid guidance only and is not a substitute for professional medical care.",
    ], None)
}

/// The first guide whose keyword occurs in `query`, case-insensitively.
pub fn first_aid(query: &str) -> FirstAidGuide {
    let query = query.to_lowercase();
    first_aid_guides()
        .into_iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(_, guide)| guide)
        .unwrap_or_else(general_first_aid)
}

// ── Chat ─────────────────────────────────────────────────────────────────────

/// The stored consultation thread. Every conversation id returns it.
pub fn conversation() -> Vec<ChatMessage> {
    let rows: [(Sender, &str, &str); 8] = [
        (Sender::Patient, "10:30", "Hello doctor, I've been experiencing severe headaches for the past few days."),
        (Sender::Doctor, "10:32", "I'm sorry to hear that. Can you describe the pain? Is it constant or does it come and go?"),
        (Sender::Patient, "10:35", "It's mostly in the afternoon and evening. The pain is throbbing and on one side of my head."),
        (Sender::Doctor, "10:37", "That sounds like it could be a migraine. Have you experienced any sensitivity to light or sound?"),
        (Sender::Patient, "10:40", "Yes, bright lights make it worse. I've also felt a bit nauseous."),
        (Sender::Doctor, "10:42", "Those are common migraine symptoms. I'd like to see you in person to confirm. Can you come in tomorrow?"),
        (Sender::Patient, "10:45", "Yes, I can come in tomorrow afternoon."),
        (Sender::Doctor, "10:47", "Great. In the meantime, try to rest in a dark, quiet room and stay hydrated. You can take over-the-counter pain relievers if needed."),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (sender, time, content))| ChatMessage {
            id: i as u64 + 1,
            sender: *sender,
            sender_name: match sender {
                Sender::Doctor => "Dr. Jane Smith".to_string(),
                _ => "John Doe".to_string(),
            },
            content: content.to_string(),
            timestamp: format!("2023-06-14T{}:00Z", time),
        })
        .collect()
}

pub const DEFAULT_REPLY: &str =
    "I'm sorry, I don't understand. Could you please provide more details about your symptoms?";

/// Keyword-indexed automated replies, in match priority order.
pub const AUTOMATED_REPLIES: [(&str, &str); 4] = [
    ("headache", "Headaches can be caused by various factors including stress, dehydration, or lack of sleep. For mild headaches, you can try over-the-counter pain relievers, rest in a quiet dark room, and stay hydrated. If your headache is severe, sudden, or accompanied by other symptoms like fever or stiff neck, please seek immediate medical attention."),
    ("fever", "Fever is often a sign that your body is fighting an infection. Rest, stay hydrated, and take over-the-counter fever reducers like acetaminophen or ibuprofen if needed. If your fever is very high (above 103°F or 39.4°C), persists for more than three days, or is accompanied by severe symptoms, please consult a healthcare provider."),
    ("cough", "For a cough, stay hydrated and try honey (if over 1 year old) or over-the-counter cough suppressants. If your cough is severe, produces thick green or yellow phlegm, or is accompanied by shortness of breath, please consult a healthcare provider."),
    ("pain", "I'm sorry you're experiencing pain. The treatment depends on the location and type of pain. Rest, ice, compression, and elevation (RICE) can help with many types of pain. Over-the-counter pain relievers may also help. If the pain is severe, worsening, or interfering with daily activities, please consult a healthcare provider."),
];

/// The reply for the first keyword found in `text`, or `DEFAULT_REPLY`.
pub fn automated_reply(text: &str) -> &'static str {
    let text = text.to_lowercase();
    AUTOMATED_REPLIES
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

// ── Transcription ────────────────────────────────────────────────────────────

pub const TRANSCRIPT: &str = "Patient reports experiencing headaches for the past week, primarily in the evenings. No previous history of migraines. Currently not taking any medications. Recommending over-the-counter pain relievers and to monitor symptoms. Follow-up in two weeks if symptoms persist.";

pub fn transcript_extraction(timestamp: String) -> ClinicalExtraction {
    ClinicalExtraction {
        patient_name: "John Doe".to_string(),
        doctor_name: "Dr. Jane Smith".to_string(),
        symptoms: strings(&["headaches", "evening onset", "no previous history"]),
        suggestions: strings(&["over-the-counter pain relievers", "monitor symptoms"]),
        medications: Vec::new(),
        follow_up: "two weeks if symptoms persist".to_string(),
        timestamp,
    }
}
