//! Data model for the people and pets tracked by a mortality record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calculations::{CAT_LIFE_EXPECTANCY, DOG_LIFE_EXPECTANCY};
use crate::error::MortalityError;

// ============================================================================
// Identity
// ============================================================================

/// Short token identifying a person or pet inside one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// People
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[serde(rename = "self")]
    User,
    Parent,
    Grandparent,
    Child,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::User => "self",
            Relationship::Parent => "parent",
            Relationship::Grandparent => "grandparent",
            Relationship::Child => "child",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub label: String,
    /// Age in years, fractional ages allowed
    pub age: f64,
    pub relationship: Relationship,
}

// ============================================================================
// Pets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    Dog,
    Cat,
}

impl PetKind {
    /// Expected lifespan in years for this kind of pet
    pub fn life_expectancy(&self) -> f64 {
        match self {
            PetKind::Dog => DOG_LIFE_EXPECTANCY,
            PetKind::Cat => CAT_LIFE_EXPECTANCY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PetKind::Dog => "dog",
            PetKind::Cat => "cat",
        }
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetKind {
    type Err = MortalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" => Ok(PetKind::Dog),
            "cat" => Ok(PetKind::Cat),
            other => Err(MortalityError::UnknownPetKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PetKind,
    pub age: f64,
}

// ============================================================================
// Aggregate
// ============================================================================

/// One user plus everyone and everything they share time with.
///
/// Collections keep insertion order. Entity ids are unique within the
/// record when it is built through [`crate::store::MortalityStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortalityData {
    pub user: Person,
    pub parents: Vec<Person>,
    pub grandparents: Vec<Person>,
    pub children: Vec<Person>,
    pub pets: Vec<Pet>,
}

impl MortalityData {
    /// Fresh record holding only the user
    pub fn new(user: Person) -> Self {
        Self {
            user,
            parents: Vec::new(),
            grandparents: Vec::new(),
            children: Vec::new(),
            pets: Vec::new(),
        }
    }

    pub fn user_age(&self) -> f64 {
        self.user.age
    }

    /// Relations in display order: parents, then grandparents, then children
    pub fn relations(&self) -> impl Iterator<Item = &Person> {
        self.parents
            .iter()
            .chain(self.grandparents.iter())
            .chain(self.children.iter())
    }

    /// True if any person or pet in the record already uses `id`
    pub fn contains_id(&self, id: &str) -> bool {
        self.user.id.as_str() == id
            || self.relations().any(|p| p.id.as_str() == id)
            || self.pets.iter().any(|p| p.id.as_str() == id)
    }

    /// Total number of people and pets, the user included
    pub fn entity_count(&self) -> usize {
        1 + self.parents.len() + self.grandparents.len() + self.children.len() + self.pets.len()
    }

    pub(crate) fn collection_mut(&mut self, relationship: Relationship) -> Option<&mut Vec<Person>> {
        match relationship {
            Relationship::User => None,
            Relationship::Parent => Some(&mut self.parents),
            Relationship::Grandparent => Some(&mut self.grandparents),
            Relationship::Child => Some(&mut self.children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: &str, age: f64, relationship: Relationship) -> Person {
        Person {
            id: EntityId(id.into()),
            label: id.into(),
            age,
            relationship,
        }
    }

    #[test]
    fn test_pet_kind_parsing() {
        assert_eq!("dog".parse::<PetKind>().unwrap(), PetKind::Dog);
        assert_eq!(" Cat ".parse::<PetKind>().unwrap(), PetKind::Cat);
        assert!(matches!(
            "hamster".parse::<PetKind>(),
            Err(MortalityError::UnknownPetKind(k)) if k == "hamster"
        ));
    }

    #[test]
    fn test_relations_order() {
        let mut data = MortalityData::new(person("me", 30.0, Relationship::User));
        data.children.push(person("kid", 2.0, Relationship::Child));
        data.parents.push(person("mom", 60.0, Relationship::Parent));
        data.grandparents.push(person("gran", 85.0, Relationship::Grandparent));

        let ids: Vec<&str> = data.relations().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["mom", "gran", "kid"]);
        assert_eq!(data.entity_count(), 4);
        assert!(data.contains_id("gran"));
        assert!(!data.contains_id("dad"));
    }

    #[test]
    fn test_serialized_tags() {
        let json = serde_json::to_value(person("me", 30.0, Relationship::User)).unwrap();
        assert_eq!(json["relationship"], "self");

        let pet = Pet {
            id: EntityId("p1".into()),
            name: "Rex".into(),
            kind: PetKind::Dog,
            age: 3.0,
        };
        let json = serde_json::to_value(&pet).unwrap();
        assert_eq!(json["type"], "dog");
        assert_eq!(json["id"], "p1");
    }
}
