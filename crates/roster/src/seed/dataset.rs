//! The literal roster dataset.
//!
//! The records inserted by the seed procedure, in listed order. Listing
//! order doubles as insertion order, so `display_order` ties resolve the
//! same way every run.

use crate::model::{SubTeam, TeamMember};

fn member(
    name: &str,
    role: &str,
    title: &str,
    description: &str,
    subteam: &str,
    color: &str,
    image_path: &str,
    display_order: i64,
) -> TeamMember {
    TeamMember {
        id: None,
        name: name.to_string(),
        role: role.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        subteam: subteam.to_string(),
        color: color.to_string(),
        image_path: image_path.to_string(),
        display_order,
    }
}

fn sub_team(
    id: &str,
    name: &str,
    icon: &str,
    description: &str,
    goals: &[&str],
    achievements: &[&str],
) -> SubTeam {
    SubTeam {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        goals: goals.iter().map(ToString::to_string).collect(),
        achievements: achievements.iter().map(ToString::to_string).collect(),
    }
}

/// All team member records, grouped by sub-team in listed order.
#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    vec![
        // Leadership
        member(
            "Tajbir Ahmed",
            "TEAM LEAD",
            "Project Director",
            "Leading Team OSHSHAROHI towards engineering excellence and racing glory. Tajbir brings vision, leadership, and unwavering dedication to push the boundaries of what our team can achieve.",
            "Leadership",
            "brand-red",
            "/assets/tajbir-ahmed.jpg",
            1,
        ),
        member(
            "Mahir Dyan",
            "CO-TEAM LEAD",
            "Deputy Project Director",
            "Driving innovation and coordination across all team divisions. Mahir ensures seamless collaboration and operational excellence throughout the organization.",
            "Leadership",
            "orange-500",
            "/assets/mahir-dyan.jpg",
            2,
        ),
        // Electronics & Powertrain
        member(
            "Md. Shafinuzzaman",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "Optimizing the energy flow and power delivery systems. Shafinuzzaman brings technical expertise in mechatronics and mechanical engineering to ensure peak performance.",
            "Electronics & Powertrain",
            "blue-500",
            "/assets/shafinuzzaman.jpg",
            1,
        ),
        member(
            "Abrar Bin Zakir",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "From data acquisition and wiring to engine performance and transmission, Abrar controls the lifeblood of our vehicle with expertise in electronics and powertrain systems.",
            "Electronics & Powertrain",
            "blue-500",
            "/assets/abrar-bin-zakir.jpg",
            2,
        ),
        member(
            "Moobta Sim Tajwar",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "Bringing innovation to our powertrain systems. Moobta ensures seamless integration of electronics with mechanical components for optimal performance.",
            "Electronics & Powertrain",
            "blue-500",
            "/assets/moobta-sim-tajwar.jpg",
            3,
        ),
        member(
            "Nowroz Ahmad",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "Engineering excellence in drivetrain systems. Nowroz focuses on power transmission and vehicle dynamics to maximize track performance.",
            "Electronics & Powertrain",
            "blue-500",
            "/assets/nowroz-ahmad.jpg",
            4,
        ),
        member(
            "Md. Jarif Alam",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "Expertise in electronic control systems and powertrain integration. Jarif brings precision engineering to our vehicle's core systems.",
            "Electronics & Powertrain",
            "blue-500",
            "/assets/jarif-alam.jpg",
            5,
        ),
        member(
            "S.M. Rafiur Rahman Swapnil",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "Dedicated to optimizing power delivery and electronic systems. Swapnil brings expertise in mechatronics to enhance our vehicle performance.",
            "Electronics & Powertrain",
            "blue-500",
            "/assets/rafiur-rahman-swapnil.jpg",
            6,
        ),
        member(
            "Anan Intesar Bin Faiz",
            "ELECTRONICS & POWERTRAIN",
            "Electronics, Powertrain & Drivetrain",
            "From data acquisition and wiring to engine performance and transmission, Anan controls the lifeblood of our vehicle with expertise in electronics and powertrain systems.",
            "Electronics & Powertrain",
            "blue-500",
            "/assets/anan-intesar.jpg",
            7,
        ),
        // Business & Marketing
        member(
            "Ashfia Rahman",
            "BUSINESS & MARKETING",
            "Business, Marketing & Logistics",
            "Driving brand visibility and sponsorship relations. Ashfia brings strategic marketing expertise to elevate Team OSHSHAROHI's presence in the motorsport community.",
            "Business & Marketing",
            "purple-500",
            "/assets/ashfia-rahman.jpg",
            1,
        ),
        member(
            "Nuzhat Tasnim",
            "BUSINESS & MARKETING",
            "Business, Marketing & Logistics",
            "Managing logistics and event coordination. Nuzhat ensures smooth operations and seamless execution of all team activities and competitions.",
            "Business & Marketing",
            "purple-500",
            "/assets/nuzhat-tasnim.jpg",
            2,
        ),
        member(
            "Asad Ullah Akib",
            "BUSINESS & MARKETING",
            "Business, Marketing & Logistics",
            "Building partnerships and securing sponsorships. Akib brings business development expertise to fuel our racing ambitions.",
            "Business & Marketing",
            "purple-500",
            "/assets/asad-ullah-akib.jpg",
            3,
        ),
        member(
            "Proggha Parmita Sakura",
            "BUSINESS & MARKETING",
            "Business, Marketing & Logistics",
            "Leading content creation and social media strategy. Sakura connects our team with fans and supporters through engaging storytelling.",
            "Business & Marketing",
            "purple-500",
            "/assets/proggha-parmita-sakura.jpg",
            4,
        ),
        // Chassis & Suspension
        member(
            "Kazi Ahnaf Muttaquif Ahmed",
            "CHASSIS & SUSPENSION",
            "Chassis and Suspension",
            "Engineering the structural backbone of our race car. Kazi ensures the chassis provides optimal rigidity and safety while minimizing weight.",
            "Chassis & Suspension",
            "green-500",
            "/assets/kazi-ahnaf-muttaquif.jpg",
            1,
        ),
        member(
            "Suhail Ashraf",
            "CHASSIS & SUSPENSION",
            "Chassis & Suspension",
            "Designing suspension geometry for maximum grip and handling. Suhail optimizes vehicle dynamics for peak cornering performance.",
            "Chassis & Suspension",
            "green-500",
            "/assets/suhail-ashraf.jpg",
            2,
        ),
        member(
            "Muhtasim Saad Shameem",
            "CHASSIS & SUSPENSION",
            "Chassis & Suspension",
            "Focused on suspension tuning and ride quality. Muhtasim brings expertise in vehicle dynamics to enhance driver confidence.",
            "Chassis & Suspension",
            "green-500",
            "/assets/muhtasim-saad-shameem.jpg",
            3,
        ),
        member(
            "Khandkar Sajiduzzaman",
            "CHASSIS & SUSPENSION",
            "Chassis & Suspension",
            "Structural analysis and chassis optimization specialist. Sajiduzzaman ensures our frame meets the highest safety and performance standards.",
            "Chassis & Suspension",
            "green-500",
            "/assets/khandkar-sajiduzzaman.jpg",
            4,
        ),
        // Aerodynamics & Ergonomics
        member(
            "Ishmam Mohammed Chowdhury",
            "AERODYNAMICS & ERGONOMICS",
            "Aerodynamics & Ergonomics",
            "Specializing in aerodynamic design and driver comfort. Ishmam optimizes airflow and cockpit ergonomics for peak performance and driver experience.",
            "Aerodynamics & Ergonomics",
            "cyan-500",
            "/assets/ishmam-mohammed-chowdhury.jpg",
            1,
        ),
        member(
            "Nafiz Shahriar Sami",
            "AERODYNAMICS & ERGONOMICS",
            "Aerodynamics & Ergonomics",
            "Engineering excellence in downforce and drag optimization. Nafiz brings innovative solutions to maximize vehicle aerodynamic efficiency.",
            "Aerodynamics & Ergonomics",
            "cyan-500",
            "/assets/nafiz-shahriar-sami.jpg",
            2,
        ),
        member(
            "Sahil Sajjad",
            "AERODYNAMICS & ERGONOMICS",
            "Aerodynamics & Ergonomics",
            "Focused on CFD analysis and wind tunnel testing. Sahil ensures our aerodynamic package delivers optimal performance on the track.",
            "Aerodynamics & Ergonomics",
            "cyan-500",
            "/assets/sahil-sajjad.jpg",
            3,
        ),
        member(
            "Nishat Jahan Nabila",
            "AERODYNAMICS & ERGONOMICS",
            "Aerodynamics & Ergonomics",
            "Expertise in ergonomic design and human factors engineering. Nabila creates driver interfaces that enhance control and reduce fatigue.",
            "Aerodynamics & Ergonomics",
            "cyan-500",
            "/assets/nishat-jahan-nabila.jpg",
            4,
        ),
        member(
            "Maruf Mahmud",
            "AERODYNAMICS & ERGONOMICS",
            "Aerodynamics & Ergonomics",
            "Dedicated to aerodynamic component design and testing. Maruf brings precision engineering to wings, diffusers, and body panels.",
            "Aerodynamics & Ergonomics",
            "cyan-500",
            "/assets/maruf-mahmud.jpg",
            5,
        ),
    ]
}

/// All sub-team records in listed order.
#[must_use]
pub fn sub_teams() -> Vec<SubTeam> {
    vec![
        sub_team(
            "chassis",
            "Chassis & Aero",
            "Wind",
            "Designing the aerodynamic shell and structural integrity of our vehicles for maximum efficiency and speed.",
            &[
                "Reduce drag coefficient by 15%",
                "Optimize chassis weight using carbon fiber composites",
            ],
            &[
                "Best Aerodynamic Design Award 2023",
                "Built ultra-lightweight monocoque frame",
            ],
        ),
        sub_team(
            "powertrain",
            "Powertrain",
            "Zap",
            "Developing high-performance electric drive systems and battery management solutions.",
            &[
                "Increase battery efficiency by 20%",
                "Develop custom motor controller",
            ],
            &[
                "Fastest Acceleration Record (Student Category)",
                "Implemented regenerative braking system",
            ],
        ),
        sub_team(
            "dynamics",
            "Vehicle Dynamics",
            "Activity",
            "Fine-tuning suspension, steering, and braking systems for superior handling and control.",
            &[
                "Implement active suspension system",
                "Optimize tire wear patterns",
            ],
            &[
                "Best Handling Vehicle 2022",
                "Zero failure rate in endurance testing",
            ],
        ),
        sub_team(
            "autonomous",
            "Autonomous Sys",
            "Cpu",
            "Integrating AI and sensor fusion for self-driving capabilities and driver assistance.",
            &[
                "Level 3 Autonomous navigation",
                "Real-time obstacle avoidance integration",
            ],
            &[
                "Successful track mapping using LIDAR",
                "Automated parking system demo",
            ],
        ),
        sub_team(
            "management",
            "Management",
            "Briefcase",
            "Handling logistics, sponsorship, marketing, and team operations.",
            &[
                "Secure 3 major sponsorships",
                "Expand outreach to 5 universities",
            ],
            &[
                "Raised 100k BDT in funding",
                "Featured in national daily newspaper",
            ],
        ),
        sub_team(
            "rnd",
            "R&D",
            "FlaskConical",
            "Researching sustainable materials and future automotive technologies.",
            &[
                "Prototype hydrogen fuel cell",
                "Recycled material implementation",
            ],
            &[
                "Published paper on sustainable composites",
                "Patent pending for new alloy",
            ],
        ),
    ]
}
