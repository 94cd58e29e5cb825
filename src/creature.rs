use crate::error::ArenaError;
use phf::phf_map;
use serde::Serialize;

/// The three elemental types. The advantage relation is cyclic:
/// Water beats Fire, Fire beats Grass, Grass beats Water.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ElementType {
    Water,
    Grass,
    Fire,
}

impl ElementType {
    pub const ALL: [ElementType; 3] = [ElementType::Water, ElementType::Grass, ElementType::Fire];

    /// The type this one has the advantage over.
    pub fn beats(self) -> ElementType {
        match self {
            ElementType::Water => ElementType::Fire,
            ElementType::Fire => ElementType::Grass,
            ElementType::Grass => ElementType::Water,
        }
    }

    /// The type this one is at a disadvantage against.
    pub fn loses_to(self) -> ElementType {
        match self {
            ElementType::Water => ElementType::Grass,
            ElementType::Grass => ElementType::Fire,
            ElementType::Fire => ElementType::Water,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Water => "Water",
            ElementType::Grass => "Grass",
            ElementType::Fire => "Fire",
        }
    }
}

/// The three concrete creature variants. A closed set: the type triangle is
/// fixed, so there is no open extension point here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Species {
    Squirtle,
    Bulbasaur,
    Charmander,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Squirtle, Species::Bulbasaur, Species::Charmander];

    /// Attacking type: the creature wins against anything weak to this.
    pub fn strength(self) -> ElementType {
        match self {
            Species::Squirtle => ElementType::Water,
            Species::Bulbasaur => ElementType::Grass,
            Species::Charmander => ElementType::Fire,
        }
    }

    /// Defending weakness: the creature loses to anything whose strength is this.
    pub fn weakness(self) -> ElementType {
        match self {
            Species::Squirtle => ElementType::Grass,
            Species::Bulbasaur => ElementType::Fire,
            Species::Charmander => ElementType::Water,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Squirtle => "Squirtle",
            Species::Bulbasaur => "Bulbasaur",
            Species::Charmander => "Charmander",
        }
    }
}

/// Species table keyed by normalized id. Element names are accepted as
/// aliases since each element maps to exactly one species.
static SPECIES: phf::Map<&'static str, Species> = phf_map! {
    "squirtle" => Species::Squirtle,
    "bulbasaur" => Species::Bulbasaur,
    "charmander" => Species::Charmander,
    "water" => Species::Squirtle,
    "grass" => Species::Bulbasaur,
    "fire" => Species::Charmander,
};

fn normalize_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Look up a species by id or element alias, e.g. "Squirtle" or "water".
pub fn species_from_id(id: &str) -> Result<Species, ArenaError> {
    SPECIES
        .get(normalize_id(id).as_str())
        .copied()
        .ok_or_else(|| ArenaError::UnknownSpecies(id.to_string()))
}

/// A named creature. Identity and types are fixed at construction; a
/// creature carries no mutable battle state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Creature {
    name: String,
    species: Species,
}

impl Creature {
    pub fn new(species: Species, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn strength(&self) -> ElementType {
        self.species.strength()
    }

    pub fn weakness(&self) -> ElementType {
        self.species.weakness()
    }

    /// The announce line emitted when the creature is sent out.
    pub fn battle_cry(&self) -> String {
        format!("{}!!!", self.name)
    }
}
