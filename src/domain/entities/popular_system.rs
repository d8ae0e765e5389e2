//! Curated list of well-studied multi-planet systems.

/// A suggested system for the lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularSystem {
    pub name: &'static str,
    pub description: &'static str,
    pub planet_count: u32,
}

/// Note shown alongside the curated list.
pub const POPULAR_SYSTEMS_NOTE: &str =
    "These are well-studied multi-planet systems with complete orbital data";

const POPULAR_SYSTEMS: [PopularSystem; 6] = [
    PopularSystem {
        name: "Kepler-11",
        description: "Six-planet system with tightly packed orbits",
        planet_count: 6,
    },
    PopularSystem {
        name: "TRAPPIST-1",
        description: "Seven Earth-sized planets around an ultra-cool dwarf star",
        planet_count: 7,
    },
    PopularSystem {
        name: "HD 40307",
        description: "Super-Earth system with potentially habitable worlds",
        planet_count: 6,
    },
    PopularSystem {
        name: "Kepler-90",
        description: "Eight-planet system similar to our Solar System",
        planet_count: 8,
    },
    PopularSystem {
        name: "K2-138",
        description: "Five sub-Neptune planets in resonant chain",
        planet_count: 5,
    },
    PopularSystem {
        name: "TOI-178",
        description: "Six planets with unique orbital resonance pattern",
        planet_count: 6,
    },
];

/// The curated systems, in display order.
pub fn popular_systems() -> &'static [PopularSystem] {
    &POPULAR_SYSTEMS
}

/// Human-readable hint listing a few systems known to resolve.
pub fn lookup_suggestion() -> String {
    let names: Vec<String> = POPULAR_SYSTEMS[..4]
        .iter()
        .map(|s| format!("\"{}\"", s.name))
        .collect();

    format!(
        "Try systems like {}, or {}",
        names[..3].join(", "),
        names[3]
    )
}
