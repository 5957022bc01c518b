//! Participant sublists and the institution set.

use crate::feed::types::{ROLE_CHIEF_SCIENTIST, ROLE_MICROSTRUCTURE_PI};
use crate::feed::Participant;

fn with_role<'a>(participants: &'a [Participant], role: &str) -> Vec<&'a Participant> {
    participants.iter().filter(|p| p.role == role).collect()
}

/// Data owners of the microstructure program.
pub fn principal_investigators(participants: &[Participant]) -> Vec<&Participant> {
    with_role(participants, ROLE_MICROSTRUCTURE_PI)
}

pub fn chief_scientists(participants: &[Participant]) -> Vec<&Participant> {
    with_role(participants, ROLE_CHIEF_SCIENTIST)
}

/// Distinct institutions of the given people, in order of first appearance.
pub fn institutions<'a>(
    pis: &[&'a Participant],
    chief_scientists: &[&'a Participant],
) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for &person in pis.iter().chain(chief_scientists) {
        let institution = person.institution.as_str();
        if !out.contains(&institution) {
            out.push(institution);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, institution: &str, role: &str) -> Participant {
        Participant {
            name: name.to_string(),
            institution: institution.to_string(),
            role: role.to_string(),
            email: None,
        }
    }

    fn crew() -> Vec<Participant> {
        vec![
            person("Gregg", "A", ROLE_MICROSTRUCTURE_PI),
            person("Swift", "X", "Data Manager"),
            person("Moum", "B", ROLE_CHIEF_SCIENTIST),
            person("Nash", "B", ROLE_MICROSTRUCTURE_PI),
            person("Klymak", "C", ROLE_CHIEF_SCIENTIST),
        ]
    }

    #[test]
    fn test_role_sublists_preserve_order() {
        let crew = crew();
        let pis: Vec<&str> = principal_investigators(&crew)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        let chiefs: Vec<&str> = chief_scientists(&crew)
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(pis, vec!["Gregg", "Nash"]);
        assert_eq!(chiefs, vec!["Moum", "Klymak"]);
    }

    #[test]
    fn test_institutions_union_each_once() {
        let crew = crew();
        let pis = principal_investigators(&crew);
        let chiefs = chief_scientists(&crew);

        let mut found = institutions(&pis, &chiefs);
        assert_eq!(found.len(), 3);
        found.sort_unstable();
        assert_eq!(found, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unrecognized_roles_are_ignored() {
        let crew = vec![person("Swift", "X", "Data Manager")];
        assert!(principal_investigators(&crew).is_empty());
        assert!(chief_scientists(&crew).is_empty());
        assert!(institutions(&[], &[]).is_empty());
    }
}
