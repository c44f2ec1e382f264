//! Built-in topic data.
//!
//! Physics and chemistry ship with seeded models; more entries are added
//! here as models are published.

use kosmos_core::Subject;

use crate::Topic;

fn topic(
    id: &str,
    subject: Subject,
    title: &str,
    viewer_url: &str,
    embed_url: &str,
    key_points: &[&str],
) -> Topic {
    Topic {
        id: id.to_string(),
        subject,
        title: title.to_string(),
        viewer_url: viewer_url.to_string(),
        embed_url: embed_url.to_string(),
        key_points: key_points.iter().map(|p| p.to_string()).collect(),
    }
}

/// The full built-in catalog, in display order.
pub fn catalog() -> Vec<Topic> {
    vec![
        topic(
            "decoration",
            Subject::Physics,
            "Physics Decoration Model",
            "https://sketchfab.com/3d-models/decoration-5a0ea75cd5834fffaf1d8f72891d8df1",
            "https://sketchfab.com/models/5a0ea75cd5834fffaf1d8f72891d8df1/embed",
            &[
                "A decorative physics model demonstrating fundamental principles of symmetry, balance, and geometric relationships in three-dimensional space.",
                "Illustrates concepts of spatial arrangement and how physical objects can exhibit both aesthetic appeal and scientific significance through their design.",
                "Shows the relationship between form and function in physics, where decorative elements often follow natural laws of proportion and structural stability.",
                "Demonstrates how physics principles like center of mass, equilibrium, and structural integrity apply to both functional and artistic objects.",
                "Understanding decorative physics helps bridge the gap between scientific principles and real-world applications in architecture, design, and engineering.",
            ],
        ),
        topic(
            "prism",
            Subject::Physics,
            "Reflection & Refraction Prism",
            "https://sketchfab.com/3d-models/reflectionrefraction-prism-8f3a8a2168ed4a47ac8328e24e88147b",
            "https://sketchfab.com/models/8f3a8a2168ed4a47ac8328e24e88147b/embed",
            &[
                "A triangular prism demonstrating the fundamental optical phenomena of reflection and refraction when light passes through different transparent materials.",
                "Shows how white light separates into its component colors (dispersion) due to different wavelengths having different refractive indices in the prism material.",
                "Illustrates Snell's law of refraction, where light bends as it passes from one medium to another due to changes in light velocity through different materials.",
                "Demonstrates total internal reflection at critical angles, explaining how light can be completely reflected at the interface between two media.",
                "Essential for understanding optical devices like cameras, telescopes, periscopes, and fiber optic communications in modern technology.",
            ],
        ),
        topic(
            "figure121",
            Subject::Physics,
            "Physics Figure 12.1",
            "https://sketchfab.com/3d-models/fig-121-c57bf740c17741b8aa0ba488b248e93a",
            "https://sketchfab.com/models/c57bf740c17741b8aa0ba488b248e93a/embed",
            &[
                "A specific physics demonstration model illustrating key concepts from chapter 12 of physics curriculum, likely related to waves, oscillations, or thermodynamics.",
                "Shows three-dimensional visualization of abstract physics concepts, making complex theoretical principles more accessible through visual representation.",
                "Demonstrates the relationship between mathematical equations and physical phenomena, helping students connect theoretical knowledge with practical applications.",
                "Illustrates how physics principles can be modeled and understood through interactive three-dimensional representations rather than just mathematical formulas.",
                "Essential for visual learners to grasp complex physics concepts and understand how theoretical principles manifest in real-world scenarios.",
            ],
        ),
        topic(
            "figure1010",
            Subject::Physics,
            "Physics Figure 10.10",
            "https://sketchfab.com/3d-models/figure-1010-f8235cd871d9401ea444d487c1bf23b1",
            "https://sketchfab.com/models/f8235cd871d9401ea444d487c1bf23b1/embed",
            &[
                "A detailed physics model from chapter 10 curriculum, potentially demonstrating rotational motion, angular momentum, or mechanical systems.",
                "Shows the three-dimensional nature of rotational dynamics, including concepts like torque, angular velocity, and moment of inertia in mechanical systems.",
                "Illustrates how rotational motion differs from linear motion, with unique properties like angular acceleration and the relationship between force and rotation.",
                "Demonstrates practical applications of rotational physics in machinery, engines, gyroscopes, and other rotating mechanical devices.",
                "Essential for understanding advanced mechanics, including the behavior of spinning objects, conservation of angular momentum, and rotational equilibrium.",
            ],
        ),
        topic(
            "figure102",
            Subject::Physics,
            "Physics Figure 10.2",
            "https://sketchfab.com/3d-models/figure-102-6393720a90f04af691d1437ea6b73a41",
            "https://sketchfab.com/models/6393720a90f04af691d1437ea6b73a41/embed",
            &[
                "An early chapter 10 physics model demonstrating fundamental concepts of rotational motion and angular mechanics in three-dimensional space.",
                "Shows basic principles of circular motion, including the relationship between linear and angular quantities like velocity, acceleration, and displacement.",
                "Illustrates how objects move in circular paths and the forces required to maintain such motion, including centripetal and centrifugal effects.",
                "Demonstrates the foundation concepts necessary for understanding more complex rotational phenomena and mechanical systems.",
                "Critical for building understanding of rotational kinematics before progressing to more advanced topics like rotational dynamics and angular momentum.",
            ],
        ),
        topic(
            "atom",
            Subject::Chemistry,
            "Atom",
            "https://sketchfab.com/3d-models/atom-6a283d5b19c34e2b8fcfc6907b231aea",
            "https://sketchfab.com/models/6a283d5b19c34e2b8fcfc6907b231aea/embed",
            &[
                "Basic building block of matter",
                "Consists of a central nucleus and orbiting electrons",
                "Nucleus contains protons (positively charged) and neutrons (neutral)",
                "Electrons orbit in specific energy levels around the nucleus",
                "Number of protons determines the element type",
                "Electron arrangement determines chemical properties",
                "Atoms combine to form molecules and compounds",
            ],
        ),
    ]
}
