//! The reference contact screen: its static dataset and a ready-made controller.
use alloc::vec::Vec;

use sticky_list::{Item, SectionedList, contact_sections};

use crate::{Controller, ControllerOptions};

const CONTACTS: &[(&str, &str)] = &[
    ("Ada Lovelock", "Staff Engineer"),
    ("Amara Singh", "Product Manager"),
    ("Alan Brooks", "Site Reliability"),
    ("Anton Weiss", "Data Scientist"),
    ("Ayesha Rahman", "Design Lead"),
    ("Benji Osei", "Support Engineer"),
    ("Beatrix Kole", "Recruiter"),
    ("Kai Nakamura", "Mobile Engineer"),
    ("Brooke Adler", "Account Executive"),
    ("Carmen Ruiz", "Head of Finance"),
    ("Dalia Haddad", "Security Analyst"),
    ("Dmitri Volkov", "Chief Architect"),
    ("Elio Marchetti", "QA Engineer"),
    ("Greta Holm", "UX Researcher"),
    ("Gustavo Pena", "Solutions Engineer"),
    ("Hana Sato", "Technical Writer"),
    ("Ines Duarte", "Legal Counsel"),
    ("J.P. Laurent", "Developer Advocate"),
    ("Jada Mensah", "Engineering Manager"),
    ("Zara Qureshi", "Operations Lead"),
    ("Jakob Fischer", "Backend Engineer"),
    ("James Okafor", "Platform Engineer"),
    ("Jana Novak", "Product Designer"),
    ("Jasper Reid", "Frontend Engineer"),
    ("Jin Park", "Data Engineer"),
    ("Joanna Kowalski", "Program Manager"),
    ("Jonas Berg", "Release Manager"),
    ("Jorge Salas", "Field Engineer"),
    ("Karim Aziz", "Sales Engineer"),
    ("Dora Lindqvist", "Office Manager"),
    ("Katja Meyer", "People Partner"),
    ("Kenji Mori", "ML Engineer"),
    ("Keira Walsh", "Customer Success"),
    ("Julia Weber", "Controller"),
    ("Leona Price", "Marketing Lead"),
    ("Maeve Doyle", "Community Manager"),
    ("Malik Hassan", "Network Engineer"),
    ("Pavel Horak", "Database Administrator"),
    ("Paloma Reyes", "Brand Designer"),
    ("Marta Silva", "Analytics Lead"),
    ("Milo Grant", "Intern"),
    ("Mira Kaur", "Partnerships"),
    ("Nadia Petrova", "Localization Lead"),
    ("Noah Lindgren", "Build Engineer"),
    ("Penny Clarke", "Executive Assistant"),
    ("Pierre Dubois", "Compliance Officer"),
    ("Priya Nair", "VP Engineering"),
    ("Rafael Costa", "Game Designer"),
    ("Rina Takahashi", "Illustrator"),
    ("Rosa Jimenez", "Video Producer"),
    ("Ruben Alves", "IT Administrator"),
    ("Sven Ekman", "Hardware Engineer"),
    ("Talia Stone", "Content Strategist"),
    ("Theo Brandt", "Embedded Engineer"),
    ("Tomas Varga", "Firmware Engineer"),
    ("Vera Ivanova", "Research Scientist"),
    ("Wendell Hayes", "Facilities"),
];

/// The reference dataset, in its (unsorted) source order.
pub fn sample_contacts() -> Vec<Item> {
    CONTACTS
        .iter()
        .map(|&(name, title)| Item::new(name, title))
        .collect()
}

/// The reference dataset sorted by name and sectioned by initial.
pub fn sample_list() -> SectionedList<char, Item> {
    contact_sections(sample_contacts())
}

/// A controller for the reference screen with a viewport of `viewport_extent`.
pub fn sample_controller(viewport_extent: u32) -> Controller<char, Item> {
    Controller::create(
        sample_list(),
        ControllerOptions {
            initial_viewport_extent: viewport_extent,
            ..ControllerOptions::default()
        },
    )
}
