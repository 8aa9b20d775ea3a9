//! Ship crews — caller-defined roles, one occupant each.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::entity::{Entity, Jsonable};
use crate::occupant::Occupant;

/// Role name → occupant, in assignment order.
///
/// Roles are open-ended (`"pilot"`, `"co-pilot"`, `"astro_mech_droid"`, ...).
/// Assigning a role twice replaces the earlier occupant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crew {
    members: IndexMap<String, Occupant>,
}

impl Crew {
    pub fn new<I, K, O>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, O)>,
        K: Into<String>,
        O: Into<Occupant>,
    {
        let mut crew = Self::default();
        for (role, occupant) in members {
            crew.assign(role, occupant);
        }
        crew
    }

    pub fn assign(&mut self, role: impl Into<String>, occupant: impl Into<Occupant>) {
        self.members.insert(role.into(), occupant.into());
    }

    pub fn get(&self, role: &str) -> Option<&Occupant> {
        self.members.get(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Jsonable for Crew {
    fn jsonable(&self) -> Value {
        let crew: Map<String, Value> = self
            .members
            .iter()
            .map(|(role, occupant)| (role.clone(), occupant.jsonable()))
            .collect();
        Value::Object(crew)
    }
}

/// `pilot: Han Solo, co-pilot: Chewbacca`
impl fmt::Display for Crew {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (role, occupant)) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", role, occupant.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{droid, person};

    #[test]
    fn test_display_in_insertion_order() {
        let crew = Crew::new([
            ("pilot", Occupant::from(person("Han Solo"))),
            ("co-pilot", Occupant::from(person("Chewbacca"))),
        ]);
        assert_eq!(crew.to_string(), "pilot: Han Solo, co-pilot: Chewbacca");
    }

    #[test]
    fn test_jsonable_maps_roles_to_occupants() {
        let poe = person("Poe Dameron");
        let bb8 = droid("BB8");
        let crew = Crew::new([
            ("pilot", Occupant::from(poe.clone())),
            ("astro_mech_droid", Occupant::from(bb8.clone())),
        ]);

        let out = crew.jsonable();
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["pilot", "astro_mech_droid"]);
        assert_eq!(out["pilot"], poe.jsonable());
        assert_eq!(out["astro_mech_droid"], bb8.jsonable());
    }

    #[test]
    fn test_reassigning_role_replaces() {
        let mut crew = Crew::new([("pilot", person("Rey"))]);
        crew.assign("gunner", person("Finn"));
        crew.assign("pilot", person("Han Solo"));
        assert_eq!(crew.len(), 2);
        assert_eq!(crew.get("pilot").map(Entity::name), Some("Han Solo"));
        assert_eq!(crew.roles().collect::<Vec<_>>(), ["pilot", "gunner"]);
    }

    #[test]
    fn test_empty_crew() {
        let crew = Crew::default();
        assert!(crew.is_empty());
        assert_eq!(crew.to_string(), "");
        assert_eq!(crew.jsonable(), Value::Object(Map::new()));
    }
}
