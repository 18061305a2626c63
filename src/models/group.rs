use serde::{Deserialize, Serialize};

/// Grupo con las iniciales de sus miembros (solo lectura)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub name: String,
    pub members: Vec<String>,
}

impl Group {
    fn new(name: &str, members: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    pub fn seed() -> Vec<Group> {
        vec![
            Group::new("women in stem 💪", &["S", "C", "E"]),
            Group::new("HR Queens", &["A", "B", "C"]),
            Group::new("cool ppl", &["X", "Y"]),
        ]
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Primer carácter del nombre, usado como avatar del grupo
    pub fn avatar(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_groups() {
        let groups = Group::seed();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].member_count(), 3);
        assert_eq!(groups[2].member_count(), 2);
        assert_eq!(groups[1].avatar(), "H");
    }
}
