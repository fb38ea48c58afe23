//! Static attribute pools the dummy-data generator draws from.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Worker categories offered on the platform.
pub const CATEGORIES: [&str; 5] = ["Plumber", "Electrician", "Carpenter", "Painter", "Mason"];

/// Cities the platform currently operates in.
pub const CITIES: [&str; 10] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Pune",
    "Chennai",
    "Kolkata",
    "Ahmedabad",
    "Jaipur",
    "Surat",
];

pub const LANGUAGES: [&str; 8] = [
    "Hindi",
    "English",
    "Marathi",
    "Tamil",
    "Telugu",
    "Bengali",
    "Kannada",
    "Gujarati",
];

pub const PERSON_NAMES: [&str; 20] = [
    "Priya Sharma",
    "Rajesh Kumar",
    "Amit Patel",
    "Sneha Desai",
    "Vikram Singh",
    "Anjali Gupta",
    "Rahul Verma",
    "Pooja Shah",
    "Sanjay Reddy",
    "Neha Kapoor",
    "Arjun Nair",
    "Kavita Iyer",
    "Deepak Joshi",
    "Ritu Agarwal",
    "Varun Mehta",
    "Simran Kaur",
    "Karthik Pillai",
    "Megha Das",
    "Nikhil Bose",
    "Swati Sen",
];

pub const JOB_DESCRIPTIONS: [&str; 8] = [
    "Need immediate help. Quality work required.",
    "Urgent requirement. Please contact ASAP.",
    "Looking for experienced professional.",
    "Need work to be completed by this weekend.",
    "Serious enquiry. Budget negotiable.",
    "Looking for reliable worker for regular work.",
    "Quality and timeliness are important.",
    "Need skilled professional. Ready to pay good rates.",
];

const FALLBACK_TITLES: [&str; 1] = ["General Work Required"];

lazy_static! {
    /// Job title pool per category.
    pub static ref JOB_TITLES: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("Plumber", vec![
            "Bathroom Leak Repair", "Kitchen Sink Installation", "Water Tank Cleaning",
            "Pipe Replacement", "Drain Cleaning Service", "Water Heater Installation",
            "Bathroom Renovation Plumbing", "Kitchen Plumbing Setup",
        ]);
        m.insert("Electrician", vec![
            "Home Wiring Work", "Fan Installation", "Light Fixture Replacement",
            "Switchboard Repair", "Generator Installation", "Inverter Setup",
            "MCB Replacement", "Complete Rewiring",
        ]);
        m.insert("Carpenter", vec![
            "Modular Kitchen Installation", "Wardrobe Making", "Door Repair",
            "Furniture Assembly", "False Ceiling Work", "Wood Polishing",
            "Custom Shelf Making", "Window Fitting",
        ]);
        m.insert("Painter", vec![
            "Interior Painting - 2BHK", "Exterior Wall Painting", "Texture Painting Work",
            "Waterproofing + Painting", "Wood Furniture Painting", "Metal Gate Painting",
            "Full House Repainting", "Single Room Painting",
        ]);
        m.insert("Mason", vec![
            "Bathroom Tile Fixing", "Kitchen Flooring", "Wall Plastering",
            "Concrete Slab Work", "Brick Wall Construction", "Balcony Waterproofing",
            "Floor Leveling", "Marble Flooring Installation",
        ]);
        m
    };

    /// Sub-skill pool per category.
    pub static ref SUB_SKILLS: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("Plumber", vec![
            "Leak Detection", "Pipe Fitting", "Bathroom Fittings", "Water Tank Work",
            "Drainage Systems", "Solar Heater Setup",
        ]);
        m.insert("Electrician", vec![
            "House Wiring", "Appliance Repair", "Inverter Installation", "Panel Boards",
            "CCTV Wiring", "Earthing Work",
        ]);
        m.insert("Carpenter", vec![
            "Modular Furniture", "Door & Window Work", "Polishing", "Plywood Work",
            "Furniture Repair", "False Ceiling",
        ]);
        m.insert("Painter", vec![
            "Interior Painting", "Exterior Painting", "Texture Finish", "Waterproofing",
            "Wood Coating", "Metal Painting",
        ]);
        m.insert("Mason", vec![
            "Tiling", "Plastering", "Brickwork", "Concrete Work", "Flooring",
            "Waterproofing",
        ]);
        m
    };
}

/// Job title pool for a category. Unknown categories fall back to a generic title.
pub fn titles_for(category: &str) -> &'static [&'static str] {
    JOB_TITLES
        .get(category)
        .map(|titles| titles.as_slice())
        .unwrap_or(&FALLBACK_TITLES)
}

/// Sub-skill pool for a category. Empty for unknown categories.
pub fn sub_skills_for(category: &str) -> &'static [&'static str] {
    SUB_SKILLS
        .get(category)
        .map(|skills| skills.as_slice())
        .unwrap_or(&[])
}
