use serde::Serialize;

/// Record shape emitted by the mock lookup responder. It is intentionally
/// looser than the `shared::DoctorRecord` the frontend renders (string id,
/// distance and availability instead of city, maps link, review counts);
/// the grid decodes it tolerantly. Whether the two shapes should converge is
/// an open contract question, so the mismatch is kept visible here instead of
/// being papered over.
#[derive(Serialize, Clone, Debug)]
pub struct MockDoctor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub rating: f32,
    pub distance: &'static str,
    pub availability: &'static str,
}

/// Demo provider list. Query content is ignored on purpose; every search
/// gets the same three dermatologists.
pub fn mock_doctors() -> Vec<MockDoctor> {
    vec![
        MockDoctor {
            id: "1",
            name: "Dr. Sarah Johnson",
            specialty: "Dermatology",
            address: "123 Medical Center Dr",
            phone: "(555) 123-4567",
            rating: 4.8,
            distance: "0.5 miles",
            availability: "Available today",
        },
        MockDoctor {
            id: "2",
            name: "Dr. Michael Chen",
            specialty: "Dermatology",
            address: "456 Health Plaza",
            phone: "(555) 234-5678",
            rating: 4.9,
            distance: "1.2 miles",
            availability: "Next available: Tomorrow",
        },
        MockDoctor {
            id: "3",
            name: "Dr. Emily Williams",
            specialty: "Dermatology",
            address: "789 Wellness Blvd",
            phone: "(555) 345-6789",
            rating: 4.7,
            distance: "2.0 miles",
            availability: "Available this week",
        },
    ]
}
