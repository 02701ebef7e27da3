//! Built-in region profiles.

use crate::models::{RegionProfile, DEFAULT_REGION};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Region profiles in match priority order.
pub(super) fn region_profiles() -> Vec<RegionProfile> {
    vec![
        RegionProfile {
            region: "lumbar".into(),
            keywords: strings(&["low back", "lumbar", "back pain", "sciatica"]),
            assessments: strings(&[
                "Oswestry Disability Index (ODI)",
                "Numeric Pain Rating Scale",
                "Patient-Specific Functional Scale (PSFS)",
            ]),
            exams: strings(&[
                "Lumbar active range of motion and repeated movement testing",
                "Neuro screen: myotomes, dermatomes, reflexes",
                "SLR / slump neural tension tests when indicated",
                "Hip mobility and lumbopelvic control assessment",
            ]),
            red_flags: strings(&[
                "New bowel/bladder dysfunction or saddle anesthesia",
                "Progressive neurologic weakness",
                "Unexplained weight loss, fever, history of cancer",
                "Major trauma or suspected fracture",
            ]),
        },
        RegionProfile {
            region: "cervical".into(),
            keywords: strings(&["neck", "cervical", "headache", "whiplash"]),
            assessments: strings(&[
                "Neck Disability Index (NDI)",
                "Numeric Pain Rating Scale",
                "Dizziness Handicap Inventory if dizziness is present",
            ]),
            exams: strings(&[
                "Cervical AROM and symptom response",
                "Upper quarter neuro screen",
                "Deep neck flexor endurance and scapular control",
                "Vestibular/oculomotor screen when dizziness is reported",
            ]),
            red_flags: strings(&[
                "Signs of cervical myelopathy (gait change, bilateral symptoms)",
                "5Ds/3Ns with vascular concern (diplopia, dysarthria, etc.)",
                "Unrelenting night pain or constitutional symptoms",
            ]),
        },
        RegionProfile {
            region: "knee".into(),
            keywords: strings(&["knee", "acl", "meniscus", "patella"]),
            assessments: strings(&[
                "Lower Extremity Functional Scale (LEFS)",
                "Numeric Pain Rating Scale",
                "Activity-specific movement tolerance tracking",
            ]),
            exams: strings(&[
                "Knee ROM, swelling, and gait analysis",
                "Strength testing for quadriceps/hamstrings/gluteals",
                "Ligament or meniscal cluster tests as indicated",
                "Functional tests: squat, step-down, sit-to-stand",
            ]),
            red_flags: strings(&[
                "Hot swollen joint with fever (possible infection)",
                "Inability to weight-bear after acute trauma",
                "Calf pain/swelling with clot risk factors",
            ]),
        },
        RegionProfile {
            region: "shoulder".into(),
            keywords: strings(&["shoulder", "rotator cuff", "impingement"]),
            assessments: strings(&[
                "QuickDASH or DASH",
                "Numeric Pain Rating Scale",
                "Patient-Specific Functional Scale (PSFS)",
            ]),
            exams: strings(&[
                "Shoulder AROM/PROM with symptom provocation",
                "Scapulothoracic rhythm and postural assessment",
                "Rotator cuff and biceps load tests",
                "Cervical clearing exam for referred symptoms",
            ]),
            red_flags: strings(&[
                "Acute traumatic deformity/dislocation signs",
                "Neurologic compromise into the limb",
                "Unexplained night pain/systemic symptoms",
            ]),
        },
    ]
}

/// Fallback recommendations when no region keyword is found.
pub(super) fn default_profile() -> RegionProfile {
    RegionProfile {
        region: DEFAULT_REGION.into(),
        keywords: Vec::new(),
        assessments: strings(&[
            "Numeric Pain Rating Scale",
            "Patient-Specific Functional Scale (PSFS)",
            "Region-specific disability index relevant to chief complaint",
        ]),
        exams: strings(&[
            "Observation, posture, and movement pattern analysis",
            "Active/passive ROM and symptom behavior",
            "Strength/resisted testing and functional movement tests",
            "Neurologic and special tests as clinically indicated",
        ]),
        red_flags: strings(&[
            "Severe, progressive, or unexplained neurologic deficits",
            "Systemic symptoms (fever, unexplained weight loss, malaise)",
            "Signs of fracture, infection, vascular emergency, or cancer history concern",
            "Worsening unrelenting pain not modified by position/activity",
        ]),
    }
}
