//! Bundled roster snapshot.
//!
//! A literal copy of the grouped-members response shape, substituted when
//! the live service cannot be reached so the page never renders empty. Kept
//! structurally identical to `GET /api/team-members-grouped`; the entries
//! are a trimmed copy of the seeded dataset covering every sub-team.

use crate::types::{GroupedMember, GroupedMembers};

fn member(
    id: i64,
    name: &str,
    role: &str,
    title: &str,
    description: &str,
    color: &str,
    image_path: &str,
) -> GroupedMember {
    GroupedMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        image_path: image_path.to_string(),
    }
}

/// The grouped-members snapshot, keyed by sub-team display name.
#[must_use]
pub fn grouped_snapshot() -> GroupedMembers {
    let mut grouped = GroupedMembers::new();

    grouped.insert(
        "Leadership".to_string(),
        vec![
            member(
                1,
                "Tajbir Ahmed",
                "TEAM LEAD",
                "Project Director",
                "Leading Team OSHSHAROHI towards engineering excellence and racing glory. Tajbir brings vision, leadership, and unwavering dedication to push the boundaries of what our team can achieve.",
                "brand-red",
                "/assets/tajbir-ahmed.jpg",
            ),
            member(
                2,
                "Mahir Dyan",
                "CO-TEAM LEAD",
                "Deputy Project Director",
                "Driving innovation and coordination across all team divisions. Mahir ensures seamless collaboration and operational excellence throughout the organization.",
                "orange-500",
                "/assets/mahir-dyan.jpg",
            ),
        ],
    );

    grouped.insert(
        "Electronics & Powertrain".to_string(),
        vec![member(
            3,
            "Md. Shafinuzzaman",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "Optimizing the energy flow and power delivery systems. Shafinuzzaman brings technical expertise in mechatronics and mechanical engineering to ensure peak performance.",
            "blue-500",
            "/assets/shafinuzzaman.jpg",
        )],
    );

    grouped.insert(
        "Business & Marketing".to_string(),
        vec![member(
            4,
            "Ashfia Rahman",
            "BUSINESS & MARKETING",
            "Business, Marketing & Logistics",
            "Driving brand visibility and sponsorship relations. Ashfia brings strategic marketing expertise to elevate Team OSHSHAROHI's presence in the motorsport community.",
            "purple-500",
            "/assets/ashfia-rahman.jpg",
        )],
    );

    grouped.insert(
        "Chassis & Suspension".to_string(),
        vec![member(
            5,
            "Kazi Ahnaf Muttaquif Ahmed",
            "CHASSIS & SUSPENSION",
            "Chassis and Suspension",
            "Engineering the structural backbone of our race car. Kazi ensures the chassis provides optimal rigidity and safety while minimizing weight.",
            "green-500",
            "/assets/kazi-ahnaf-muttaquif.jpg",
        )],
    );

    grouped.insert(
        "Aerodynamics & Ergonomics".to_string(),
        vec![member(
            6,
            "Ishmam Mohammed Chowdhury",
            "AERODYNAMICS & ERGONOMICS",
            "Aerodynamics & Ergonomics",
            "Specializing in aerodynamic design and driver comfort. Ishmam optimizes airflow and cockpit ergonomics for peak performance and driver experience.",
            "cyan-500",
            "/assets/ishmam-mohammed-chowdhury.jpg",
        )],
    );

    grouped
}
